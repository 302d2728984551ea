// ABOUTME: Plan table loading with format selection by file extension
// ABOUTME: Readers produce raw string tables, validation turns them into typed plan rows
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Laufplan Contributors

//! # Input Loader
//!
//! A [`PlanReader`] turns a file into a [`RawTable`] of trimmed cell texts; the
//! table is then validated once into [`PlanRow`]s. Validation reports every bad
//! cell of every row, not just the first.
//!
//! | Extension | Reader | Layout |
//! |-----------|--------|--------|
//! | `.csv` | [`CsvPlanReader`] | header row, comma separated |
//! | `.xlsx` | [`XlsxPlanReader`] | first worksheet, row 1 headers |

/// CSV reader
pub mod csv_reader;
/// Raw tables and row validation
pub mod table;
/// XLSX reader
pub mod xlsx_reader;

pub use csv_reader::CsvPlanReader;
pub use table::{RawRecord, RawTable};
pub use xlsx_reader::XlsxPlanReader;

use crate::constants::formats;
use crate::errors::{AppError, AppResult};
use crate::models::PlanRow;
use std::fmt;
use std::path::Path;
use tracing::info;

/// Reads a plan file into a raw table
pub trait PlanReader {
    /// Short format name for logging
    fn format_name(&self) -> &'static str;

    /// Read every row of `path`
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be opened or decoded
    fn read_table(&self, path: &Path) -> AppResult<RawTable>;
}

/// Supported plan file formats
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputFormat {
    /// Delimited text with a header row
    Csv,
    /// Excel workbook
    Xlsx,
}

impl InputFormat {
    /// Select the format from the file extension (case-insensitive)
    ///
    /// # Errors
    ///
    /// Returns `ErrorCode::UnsupportedFormat` for any other extension
    pub fn from_path(path: &Path) -> AppResult<Self> {
        let extension = path
            .extension()
            .map(|ext| ext.to_string_lossy().to_ascii_lowercase());
        match extension.as_deref() {
            Some(formats::CSV_EXTENSION) => Ok(Self::Csv),
            Some(formats::XLSX_EXTENSION) => Ok(Self::Xlsx),
            _ => Err(AppError::unsupported_format(path.display())),
        }
    }

    /// Reader for this format
    #[must_use]
    pub fn reader(&self) -> Box<dyn PlanReader> {
        match self {
            Self::Csv => Box::new(CsvPlanReader),
            Self::Xlsx => Box::new(XlsxPlanReader),
        }
    }
}

impl fmt::Display for InputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Csv => f.write_str(formats::CSV_EXTENSION),
            Self::Xlsx => f.write_str(formats::XLSX_EXTENSION),
        }
    }
}

/// Load and validate the plan stored at `path`
///
/// # Errors
///
/// Returns `UnsupportedFormat` for unknown extensions, `FileRead` or
/// `SpreadsheetError` when the file cannot be read, `MissingColumns` when the
/// header lacks a required column, and `InvalidRow` listing every invalid cell
pub fn load_plan(path: &Path) -> AppResult<Vec<PlanRow>> {
    let format = InputFormat::from_path(path)?;
    let reader = format.reader();
    let table = reader.read_table(path)?;
    let rows = table.into_plan_rows()?;

    info!(
        path = %path.display(),
        format = reader.format_name(),
        rows = rows.len(),
        "Training plan loaded"
    );
    Ok(rows)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::ErrorCode;

    #[test]
    fn test_format_from_extension() {
        assert_eq!(
            InputFormat::from_path(Path::new("plan.csv")).unwrap(),
            InputFormat::Csv
        );
        assert_eq!(
            InputFormat::from_path(Path::new("dir/Plan.XLSX")).unwrap(),
            InputFormat::Xlsx
        );
    }

    #[test]
    fn test_unknown_extension_is_rejected() {
        for name in ["plan.ods", "plan.xls", "plan", "plan.csv.bak"] {
            let error = InputFormat::from_path(Path::new(name)).unwrap_err();
            assert_eq!(error.code, ErrorCode::UnsupportedFormat);
        }
    }
}
