// ABOUTME: Row-level validation errors for training plan input
// ABOUTME: Collects every failing cell so a plan is reported in one pass
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Laufplan Contributors

//! # Row Validation Errors
//!
//! - `RowIssue` - one rejected cell, pinned to its source line and column
//! - `PlanValidationError` - every issue found in a plan, converted into
//!   `AppError` with `ErrorCode::InvalidRow`

use super::{AppError, ErrorCode};
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt;

/// A single rejected value in the input table
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RowIssue {
    /// Line of the source table (header is line 1)
    pub line: usize,
    /// Column name the value was read from
    pub column: String,
    /// Raw cell text as found in the input
    pub value: String,
    /// Why the value was rejected
    pub reason: String,
}

impl RowIssue {
    /// Create an issue for the given cell
    #[must_use]
    pub fn new(
        line: usize,
        column: impl Into<String>,
        value: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        Self {
            line,
            column: column.into(),
            value: value.into(),
            reason: reason.into(),
        }
    }
}

impl fmt::Display for RowIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "row {}, column '{}': '{}' {}",
            self.line, self.column, self.value, self.reason
        )
    }
}

/// All validation issues found in a plan
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PlanValidationError {
    issues: Vec<RowIssue>,
}

impl PlanValidationError {
    /// Empty collection
    #[must_use]
    pub const fn new() -> Self {
        Self { issues: Vec::new() }
    }

    /// Record another issue
    pub fn push(&mut self, issue: RowIssue) {
        self.issues.push(issue);
    }

    /// Recorded issues in input order
    #[must_use]
    pub fn issues(&self) -> &[RowIssue] {
        &self.issues
    }

    /// True when nothing was recorded
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.issues.is_empty()
    }

    /// Number of distinct input lines with at least one issue
    #[must_use]
    pub fn affected_rows(&self) -> usize {
        let mut lines: Vec<usize> = self.issues.iter().map(|issue| issue.line).collect();
        lines.dedup();
        lines.len()
    }

    /// `Ok(())` when empty, otherwise `Err(self)`
    ///
    /// # Errors
    ///
    /// Returns the collection itself when at least one issue was recorded
    pub fn into_result(self) -> Result<(), Self> {
        if self.is_empty() {
            Ok(())
        } else {
            Err(self)
        }
    }
}

impl fmt::Display for PlanValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} invalid value(s) in {} row(s)",
            self.issues.len(),
            self.affected_rows()
        )?;
        for issue in &self.issues {
            write!(f, "\n  {issue}")?;
        }
        Ok(())
    }
}

impl Error for PlanValidationError {}

impl From<PlanValidationError> for AppError {
    fn from(error: PlanValidationError) -> Self {
        let details = serde_json::json!({ "issues": error.issues() });
        Self::new(ErrorCode::InvalidRow, error.to_string()).with_details(details)
    }
}
