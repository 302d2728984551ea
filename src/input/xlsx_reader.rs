// ABOUTME: XLSX plan reader built on calamine
// ABOUTME: Reads the first worksheet, row 1 as headers, numbers rendered as text
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Laufplan Contributors

use super::{PlanReader, RawTable};
use crate::errors::{from_xlsx_error, AppError, AppResult};
use calamine::{open_workbook, Data, Range, Reader, Xlsx};
use std::path::Path;
use tracing::debug;

/// Reads plans from the first worksheet of an Excel workbook
#[derive(Debug, Clone, Copy, Default)]
pub struct XlsxPlanReader;

impl XlsxPlanReader {
    /// Convert a worksheet range into a raw table
    ///
    /// Worksheet row 1 holds the headers, whatever the first used row is.
    /// Cells are addressed from column A, and line numbers follow the
    /// worksheet's own row numbering.
    #[must_use]
    pub fn table_from_range(range: &Range<Data>) -> RawTable {
        let Some((last_row, last_column)) = range.end() else {
            return RawTable::default();
        };
        let row_cells = |row: u32| -> Vec<String> {
            (0..=last_column)
                .map(|column| range.get_value((row, column)).map_or_else(String::new, cell_text))
                .collect()
        };

        let mut table = RawTable::new(row_cells(0));
        for row in 1..=last_row {
            table.push(row as usize + 1, row_cells(row));
        }
        table
    }
}

impl PlanReader for XlsxPlanReader {
    fn format_name(&self) -> &'static str {
        "xlsx"
    }

    fn read_table(&self, path: &Path) -> AppResult<RawTable> {
        let mut workbook: Xlsx<_> = open_workbook(path).map_err(|e| from_xlsx_error(path, e))?;

        let sheet_name = workbook.sheet_names().first().cloned().unwrap_or_default();
        let range = workbook
            .worksheet_range_at(0)
            .ok_or_else(|| {
                AppError::spreadsheet(format!("{} contains no worksheet", path.display()))
            })?
            .map_err(|e| from_xlsx_error(path, e))?;

        debug!(
            path = %path.display(),
            sheet = %sheet_name,
            height = range.height(),
            width = range.width(),
            "Reading worksheet"
        );
        Ok(Self::table_from_range(&range))
    }
}

/// Cell content as plain text; whole floats lose their fraction (`5.0` -> `5`)
fn cell_text(cell: &Data) -> String {
    match cell {
        Data::Empty => String::new(),
        Data::String(text) => text.trim().to_owned(),
        Data::Float(value) => value.to_string(),
        Data::Int(value) => value.to_string(),
        other => other.to_string(),
    }
}
