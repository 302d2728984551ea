// ABOUTME: Raw string tables and their validation into typed plan rows
// ABOUTME: Resolves required columns by header name and collects every invalid cell
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Laufplan Contributors

use crate::constants::columns;
use crate::errors::{AppError, AppResult, PlanValidationError, RowIssue};
use crate::models::PlanRow;
use tracing::debug;

/// One data row as read from the file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawRecord {
    /// Source line (header is line 1)
    pub line: usize,
    /// Cell texts in column order, already trimmed
    pub cells: Vec<String>,
}

impl RawRecord {
    /// True when every cell is empty
    #[must_use]
    pub fn is_blank(&self) -> bool {
        self.cells.iter().all(|cell| cell.trim().is_empty())
    }

    fn cell(&self, index: usize) -> &str {
        self.cells.get(index).map_or("", |cell| cell.trim())
    }
}

/// Header row plus data rows, all as text
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawTable {
    headers: Vec<String>,
    records: Vec<RawRecord>,
}

impl RawTable {
    /// Table with the given header row and no data
    #[must_use]
    pub fn new(headers: Vec<String>) -> Self {
        Self {
            headers,
            records: Vec::new(),
        }
    }

    /// Append a data row read from `line`
    pub fn push(&mut self, line: usize, cells: Vec<String>) {
        self.records.push(RawRecord { line, cells });
    }

    /// Header texts as read
    #[must_use]
    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    /// Data rows in file order
    #[must_use]
    pub fn records(&self) -> &[RawRecord] {
        &self.records
    }

    /// Validate every row into a `PlanRow`, skipping blank rows
    ///
    /// # Errors
    ///
    /// Returns `ErrorCode::MissingColumns` when a required header is absent and
    /// `ErrorCode::InvalidRow` listing every invalid cell of every row
    pub fn into_plan_rows(self) -> AppResult<Vec<PlanRow>> {
        let index = ColumnIndex::resolve(&self.headers)?;

        let mut errors = PlanValidationError::new();
        let mut rows = Vec::with_capacity(self.records.len());
        let mut skipped = 0_usize;

        for record in &self.records {
            if record.is_blank() {
                skipped += 1;
                continue;
            }
            match index.parse(record) {
                Ok(row) => rows.push(row),
                Err(issues) => issues.into_iter().for_each(|issue| errors.push(issue)),
            }
        }

        if skipped > 0 {
            debug!(skipped, "Skipped blank rows");
        }
        errors.into_result()?;
        Ok(rows)
    }
}

/// Positions of the required columns within a header row
#[derive(Debug, Clone, Copy)]
struct ColumnIndex {
    week: usize,
    day: usize,
    training: usize,
    distance: usize,
    heartrate: usize,
    details: usize,
}

impl ColumnIndex {
    fn resolve(headers: &[String]) -> AppResult<Self> {
        let position = |name: &str| {
            headers
                .iter()
                .position(|header| header.trim().eq_ignore_ascii_case(name))
        };

        let missing: Vec<&str> = columns::REQUIRED
            .into_iter()
            .filter(|name| position(name).is_none())
            .collect();
        if !missing.is_empty() {
            return Err(AppError::missing_columns(&missing));
        }

        let found = |name: &str| position(name).unwrap_or_default();
        Ok(Self {
            week: found(columns::WEEK),
            day: found(columns::DAY),
            training: found(columns::TRAINING),
            distance: found(columns::DISTANCE),
            heartrate: found(columns::HEARTRATE),
            details: found(columns::DETAILS),
        })
    }

    fn parse(&self, record: &RawRecord) -> Result<PlanRow, Vec<RowIssue>> {
        let mut cells = CellParser::new(record.line);

        let week = cells.positive_integer(columns::WEEK, record.cell(self.week));
        let day = cells.positive_integer(columns::DAY, record.cell(self.day));
        let distance_km = cells.distance(record.cell(self.distance));
        let heart_rate_percent = cells.number(columns::HEARTRATE, record.cell(self.heartrate));

        match (week, day, distance_km, heart_rate_percent) {
            (Some(week), Some(day), Some(distance_km), Some(heart_rate_percent)) => Ok(PlanRow {
                line: record.line,
                week,
                day,
                training: record.cell(self.training).to_owned(),
                distance_km,
                heart_rate_percent,
                details: record.cell(self.details).to_owned(),
            }),
            _ => Err(cells.issues),
        }
    }
}

/// Parses the cells of one row, remembering every rejection
struct CellParser {
    line: usize,
    issues: Vec<RowIssue>,
}

impl CellParser {
    const fn new(line: usize) -> Self {
        Self {
            line,
            issues: Vec::new(),
        }
    }

    fn reject(&mut self, column: &str, value: &str, reason: &str) {
        self.issues
            .push(RowIssue::new(self.line, column, value, reason));
    }

    fn positive_integer(&mut self, column: &str, value: &str) -> Option<u32> {
        let Ok(parsed) = value.parse::<i64>() else {
            self.reject(column, value, "is not a whole number");
            return None;
        };
        if parsed < 1 {
            self.reject(column, value, "must be 1 or greater");
            return None;
        }
        if let Ok(parsed) = u32::try_from(parsed) {
            Some(parsed)
        } else {
            self.reject(column, value, "is too large");
            None
        }
    }

    fn number(&mut self, column: &str, value: &str) -> Option<f64> {
        match value.parse::<f64>() {
            Ok(parsed) if parsed.is_finite() => Some(parsed),
            _ => {
                self.reject(column, value, "is not a number");
                None
            }
        }
    }

    fn distance(&mut self, value: &str) -> Option<f64> {
        let parsed = self.number(columns::DISTANCE, value)?;
        if parsed < 0.0 {
            self.reject(columns::DISTANCE, value, "must not be negative");
            return None;
        }
        Some(parsed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::ErrorCode;

    fn headers() -> Vec<String> {
        columns::REQUIRED.iter().map(|&c| c.to_owned()).collect()
    }

    fn cells(values: &[&str]) -> Vec<String> {
        values.iter().map(|&v| v.to_owned()).collect()
    }

    #[test]
    fn test_valid_rows_keep_order_and_line() {
        let mut table = RawTable::new(headers());
        table.push(2, cells(&["1", "1", "Easy Run", "5", "65", "Recovery"]));
        table.push(3, cells(&["1", "3", "Intervals", "8.5", "88", "6x800m"]));

        let rows = table.into_plan_rows().unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].training, "Easy Run");
        assert_eq!(rows[1].line, 3);
        assert!((rows[1].distance_km - 8.5).abs() < f64::EPSILON);
    }

    #[test]
    fn test_headers_match_case_insensitively_in_any_order() {
        let header = cells(&[" Details", "HeartRate ", "Distance", "Training", "Day", "Week", "extra"]);
        let mut table = RawTable::new(header);
        table.push(2, cells(&["notes", "70", "10", "Long Run", "7", "2", "ignored"]));

        let rows = table.into_plan_rows().unwrap();
        assert_eq!(rows[0].week, 2);
        assert_eq!(rows[0].day, 7);
        assert_eq!(rows[0].details, "notes");
    }

    #[test]
    fn test_missing_columns_are_named() {
        let table = RawTable::new(cells(&["week", "day", "training"]));
        let error = table.into_plan_rows().unwrap_err();
        assert_eq!(error.code, ErrorCode::MissingColumns);
        assert!(error.message.contains("distance, heartrate, details"));
    }

    #[test]
    fn test_all_invalid_cells_are_reported() {
        let mut table = RawTable::new(headers());
        table.push(2, cells(&["abc", "1", "Run", "5", "65", ""]));
        table.push(3, cells(&["1", "1", "Run", "5", "65", ""]));
        table.push(4, cells(&["0", "x", "Run", "-1", "fast", ""]));

        let error = table.into_plan_rows().unwrap_err();
        assert_eq!(error.code, ErrorCode::InvalidRow);
        let issues = error.details["issues"].as_array().unwrap();
        assert_eq!(issues.len(), 5);
        assert_eq!(issues[0]["line"], 2);
        assert_eq!(issues[0]["column"], "week");
        assert_eq!(issues[1]["reason"], "must be 1 or greater");
        assert_eq!(issues[3]["reason"], "must not be negative");
        assert_eq!(issues[4]["column"], "heartrate");
    }

    #[test]
    fn test_blank_rows_are_skipped() {
        let mut table = RawTable::new(headers());
        table.push(2, cells(&["", "", "", "", "", ""]));
        table.push(3, cells(&["2", "2", "Tempo", "6", "85", ""]));
        table.push(4, Vec::new());

        let rows = table.into_plan_rows().unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].line, 3);
    }

    #[test]
    fn test_short_rows_read_missing_cells_as_empty() {
        let mut table = RawTable::new(headers());
        table.push(2, cells(&["1", "2", "Easy", "4", "60"]));

        let rows = table.into_plan_rows().unwrap();
        assert_eq!(rows[0].details, "");
    }
}
