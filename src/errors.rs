// ABOUTME: Unified error handling re-exported from laufplan-core
// ABOUTME: Adds mapping helpers for third-party reader errors
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Laufplan Contributors

//! # Error Handling
//!
//! Error types live in `laufplan-core`; this module re-exports them and maps
//! errors of the table readers onto [`AppError`].

pub use laufplan_core::errors::*;

use std::path::Path;

/// Map a `csv` failure onto the matching error family
#[must_use]
pub fn from_csv_error(path: &Path, error: csv::Error) -> AppError {
    let message = match error.position() {
        Some(position) => format!("{} (line {}): {error}", path.display(), position.line()),
        None => format!("{}: {error}", path.display()),
    };
    if error.is_io_error() {
        AppError::new(ErrorCode::FileRead, message).with_source(error)
    } else {
        AppError::new(ErrorCode::InvalidRow, message).with_source(error)
    }
}

/// Map a `calamine` workbook failure onto the matching error family
#[must_use]
pub fn from_xlsx_error(path: &Path, error: calamine::XlsxError) -> AppError {
    match error {
        calamine::XlsxError::Io(source) => AppError::file_read(path.display(), source),
        other => AppError::spreadsheet(format!("{}: {other}", path.display())),
    }
}
