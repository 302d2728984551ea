// ABOUTME: CSV plan reader built on the csv crate
// ABOUTME: First record is the header row, cells are trimmed, ragged rows are allowed
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Laufplan Contributors

use super::{PlanReader, RawTable};
use crate::errors::{from_csv_error, AppError, AppResult};
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// Reads comma separated plans
#[derive(Debug, Clone, Copy, Default)]
pub struct CsvPlanReader;

impl CsvPlanReader {
    /// Read a table from any byte source; `path` is used in error messages
    ///
    /// # Errors
    ///
    /// Returns `ErrorCode::FileRead` on I/O failures and `ErrorCode::InvalidRow`
    /// when the text is not valid UTF-8 CSV
    pub fn read_from<R: Read>(&self, mut source: R, path: &Path) -> AppResult<RawTable> {
        let mut bytes = Vec::new();
        source
            .read_to_end(&mut bytes)
            .map_err(|e| AppError::file_read(path.display(), e))?;

        let mut reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .trim(csv::Trim::All)
            .from_reader(bytes.as_slice());

        let headers = reader
            .headers()
            .map_err(|e| from_csv_error(path, e))?
            .iter()
            .map(str::to_owned)
            .collect();
        let mut table = RawTable::new(headers);

        for (index, result) in reader.records().enumerate() {
            let record = result.map_err(|e| from_csv_error(path, e))?;
            let line = record.position().map_or(index + 2, |position| {
                physical_line(&bytes, position.byte() as usize)
            });
            table.push(line, record.iter().map(str::to_owned).collect());
        }

        Ok(table)
    }
}

/// 1-based line of the record starting at `offset`
///
/// The csv reader drops empty lines without counting them and may report a
/// record position in front of them, so the line is counted from the raw bytes
/// after skipping any line breaks at `offset`.
fn physical_line(bytes: &[u8], offset: usize) -> usize {
    let start = bytes
        .iter()
        .skip(offset)
        .position(|&byte| byte != b'\n' && byte != b'\r')
        .map_or(bytes.len(), |skipped| offset + skipped);
    bytes[..start].iter().filter(|&&byte| byte == b'\n').count() + 1
}

impl PlanReader for CsvPlanReader {
    fn format_name(&self) -> &'static str {
        "csv"
    }

    fn read_table(&self, path: &Path) -> AppResult<RawTable> {
        let file = File::open(path).map_err(|e| AppError::file_read(path.display(), e))?;
        self.read_from(file, path)
    }
}
