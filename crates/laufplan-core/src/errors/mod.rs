// ABOUTME: Unified error type and error codes for the laufplan workspace
// ABOUTME: Maps every failure family to a description and a process exit code
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Laufplan Contributors

//! # Unified Error Handling
//!
//! Every fallible operation in the workspace returns [`AppResult`]. An
//! [`AppError`] carries a stable [`ErrorCode`], a human-readable message and an
//! optional source error. The command-line binary turns the code into an exit
//! status through [`ErrorCode::exit_code`].

/// Row-level validation errors collected while loading a plan
pub mod row;

pub use row::{PlanValidationError, RowIssue};

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Standard error codes used throughout the workspace
#[non_exhaustive]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ErrorCode {
    // Input (1000-1999)
    /// Input file extension is not one of the supported formats
    #[serde(rename = "UNSUPPORTED_FORMAT")]
    UnsupportedFormat = 1000,
    /// Header row lacks one or more required columns
    #[serde(rename = "MISSING_COLUMNS")]
    MissingColumns = 1001,
    /// One or more plan rows failed validation
    #[serde(rename = "INVALID_ROW")]
    InvalidRow = 1002,
    /// Start date is not an ISO calendar date
    #[serde(rename = "INVALID_DATE")]
    InvalidDate = 1003,
    /// Interactive answer or parameter is not acceptable
    #[serde(rename = "INVALID_INPUT")]
    InvalidInput = 1004,

    // File system (2000-2999)
    /// Input file could not be opened or read
    #[serde(rename = "FILE_READ_ERROR")]
    FileRead = 2000,
    /// Output file could not be created or written
    #[serde(rename = "FILE_WRITE_ERROR")]
    FileWrite = 2001,
    /// Spreadsheet container could not be decoded
    #[serde(rename = "SPREADSHEET_ERROR")]
    SpreadsheetError = 2002,

    // Configuration (6000-6999)
    /// Environment configuration holds an unusable value
    #[serde(rename = "CONFIG_INVALID")]
    ConfigInvalid = 6000,

    // Internal (9000-9999)
    /// Unexpected internal failure
    #[serde(rename = "INTERNAL_ERROR")]
    InternalError = 9000,
}

impl ErrorCode {
    /// Process exit status for this error family
    #[must_use]
    pub const fn exit_code(&self) -> u8 {
        match self {
            Self::UnsupportedFormat
            | Self::MissingColumns
            | Self::InvalidRow
            | Self::InvalidDate
            | Self::InvalidInput => 2,

            Self::FileRead | Self::FileWrite | Self::SpreadsheetError => 3,

            Self::ConfigInvalid => 4,

            Self::InternalError => 1,
        }
    }

    /// Short user-facing description of this error
    #[must_use]
    pub const fn description(&self) -> &'static str {
        match self {
            Self::UnsupportedFormat => "Unsupported file format",
            Self::MissingColumns => "Required columns are missing",
            Self::InvalidRow => "The training plan contains invalid rows",
            Self::InvalidDate => "The date is invalid",
            Self::InvalidInput => "The provided input is invalid",
            Self::FileRead => "Reading the input file failed",
            Self::FileWrite => "Writing the calendar file failed",
            Self::SpreadsheetError => "The spreadsheet could not be read",
            Self::ConfigInvalid => "Configuration is invalid",
            Self::InternalError => "An internal error occurred",
        }
    }

    /// Stable identifier, identical to the serialized form
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::UnsupportedFormat => "UNSUPPORTED_FORMAT",
            Self::MissingColumns => "MISSING_COLUMNS",
            Self::InvalidRow => "INVALID_ROW",
            Self::InvalidDate => "INVALID_DATE",
            Self::InvalidInput => "INVALID_INPUT",
            Self::FileRead => "FILE_READ_ERROR",
            Self::FileWrite => "FILE_WRITE_ERROR",
            Self::SpreadsheetError => "SPREADSHEET_ERROR",
            Self::ConfigInvalid => "CONFIG_INVALID",
            Self::InternalError => "INTERNAL_ERROR",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Unified error type for the workspace
#[derive(Debug, Error)]
pub struct AppError {
    /// Error code
    pub code: ErrorCode,
    /// Human-readable error message
    pub message: String,
    /// Structured details (row issues, offending values)
    pub details: serde_json::Value,
    /// Source error for error chaining
    #[source]
    pub source: Option<Box<dyn std::error::Error + Send + Sync>>,
}

impl AppError {
    /// Create a new `AppError` with the given code and message
    #[must_use]
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            details: serde_json::Value::Null,
            source: None,
        }
    }

    /// Attach structured details
    #[must_use]
    pub fn with_details(mut self, details: serde_json::Value) -> Self {
        self.details = details;
        self
    }

    /// Add a source error for error chaining
    #[must_use]
    pub fn with_source(mut self, source: impl std::error::Error + Send + Sync + 'static) -> Self {
        self.source = Some(Box::new(source));
        self
    }

    /// Process exit status for this error
    #[must_use]
    pub const fn exit_code(&self) -> u8 {
        self.code.exit_code()
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.code.description(), self.message)
    }
}

/// Result type alias for convenience
pub type AppResult<T> = Result<T, AppError>;

/// Convenience constructors for common errors
impl AppError {
    /// Input file has an extension no loader understands
    #[must_use]
    pub fn unsupported_format(path: impl fmt::Display) -> Self {
        Self::new(
            ErrorCode::UnsupportedFormat,
            format!("'{path}' is not supported. Please use .csv or .xlsx files."),
        )
    }

    /// Header row is missing required columns
    #[must_use]
    pub fn missing_columns(columns: &[&str]) -> Self {
        Self::new(
            ErrorCode::MissingColumns,
            format!("missing column(s): {}", columns.join(", ")),
        )
        .with_details(serde_json::json!({ "missing": columns }))
    }

    /// Start date could not be parsed
    #[must_use]
    pub fn invalid_date(value: &str) -> Self {
        Self::new(
            ErrorCode::InvalidDate,
            format!("'{value}' is not a date in YYYY-MM-DD format"),
        )
    }

    /// Invalid interactive answer or parameter
    #[must_use]
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InvalidInput, message)
    }

    /// Input file could not be read
    #[must_use]
    pub fn file_read(path: impl fmt::Display, source: std::io::Error) -> Self {
        Self::new(ErrorCode::FileRead, format!("{path}: {source}")).with_source(source)
    }

    /// Output file could not be written
    #[must_use]
    pub fn file_write(path: impl fmt::Display, source: std::io::Error) -> Self {
        Self::new(ErrorCode::FileWrite, format!("{path}: {source}")).with_source(source)
    }

    /// Spreadsheet decoding failure
    #[must_use]
    pub fn spreadsheet(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::SpreadsheetError, message)
    }

    /// Configuration error
    #[must_use]
    pub fn config(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::ConfigInvalid, message)
    }

    /// Internal error
    #[must_use]
    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InternalError, message)
    }
}
