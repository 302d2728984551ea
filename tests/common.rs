// ABOUTME: Shared test utilities and setup functions for integration tests
// ABOUTME: Provides logging setup, plan fixtures in CSV and XLSX form, and run contexts
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Laufplan Contributors
#![allow(
    dead_code,
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    clippy::must_use_candidate,
    clippy::cast_possible_truncation
)]
//! Shared test utilities for `laufplan`

use anyhow::Result;
use chrono::{NaiveDate, TimeZone, Utc};
use laufplan::calendar::IcsWriter;
use laufplan::config::PlanConfig;
use laufplan::schedule::PlanContext;
use rust_xlsxwriter::Workbook;
use std::fmt::Write as _;
use std::path::{Path, PathBuf};
use std::sync::Once;

static INIT_LOGGER: Once = Once::new();

/// Header row used by every fixture
pub const HEADER: [&str; 6] = ["week", "day", "training", "distance", "heartrate", "details"];

/// Initialize quiet logging for tests (call once per test process)
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        let log_level = match std::env::var("TEST_LOG").as_deref() {
            Ok("TRACE") => tracing::Level::TRACE,
            Ok("DEBUG") => tracing::Level::DEBUG,
            Ok("INFO") => tracing::Level::INFO,
            _ => tracing::Level::WARN,
        };

        tracing_subscriber::fmt()
            .with_max_level(log_level)
            .with_test_writer()
            .init();
    });
}

/// One plan line as written to a fixture file
#[derive(Debug, Clone)]
pub struct FixtureRow {
    pub week: String,
    pub day: String,
    pub training: String,
    pub distance: String,
    pub heartrate: String,
    pub details: String,
}

impl FixtureRow {
    pub fn new(week: u32, day: u32, training: &str, distance: f64, heartrate: f64, details: &str) -> Self {
        Self {
            week: week.to_string(),
            day: day.to_string(),
            training: training.to_owned(),
            distance: distance.to_string(),
            heartrate: heartrate.to_string(),
            details: details.to_owned(),
        }
    }

    /// Row with free-form cell texts, for malformed input
    pub fn raw(cells: [&str; 6]) -> Self {
        Self {
            week: cells[0].to_owned(),
            day: cells[1].to_owned(),
            training: cells[2].to_owned(),
            distance: cells[3].to_owned(),
            heartrate: cells[4].to_owned(),
            details: cells[5].to_owned(),
        }
    }

    fn cells(&self) -> [&str; 6] {
        [
            &self.week,
            &self.day,
            &self.training,
            &self.distance,
            &self.heartrate,
            &self.details,
        ]
    }
}

/// The single-row plan used by the end-to-end scenario
pub fn easy_run() -> FixtureRow {
    FixtureRow::new(1, 1, "Easy Run", 5.0, 65.0, "Recovery")
}

/// A small realistic two-week plan
pub fn two_week_plan() -> Vec<FixtureRow> {
    vec![
        FixtureRow::new(1, 1, "Easy Run", 5.0, 65.0, "Recovery"),
        FixtureRow::new(1, 3, "Intervals", 8.0, 88.0, "6x800m, 90s jog"),
        FixtureRow::new(1, 6, "Long Run", 14.5, 72.0, "Flat course"),
        FixtureRow::new(2, 2, "Tempo", 10.0, 84.0, "3 km warm-up; 5 km tempo"),
        FixtureRow::new(2, 7, "Long Run", 16.0, 70.0, "Hills"),
    ]
}

fn csv_cell(value: &str) -> String {
    if value.contains([',', '"', '\n']) {
        format!("\"{}\"", value.replace('"', "\"\""))
    } else {
        value.to_owned()
    }
}

/// Write `rows` as CSV with the standard header
pub fn write_plan_csv(dir: &Path, name: &str, rows: &[FixtureRow]) -> Result<PathBuf> {
    let mut text = HEADER.join(",");
    text.push('\n');
    for row in rows {
        let line: Vec<String> = row.cells().iter().map(|cell| csv_cell(cell)).collect();
        writeln!(text, "{}", line.join(","))?;
    }

    let path = dir.join(name);
    std::fs::write(&path, text)?;
    Ok(path)
}

/// Write `rows` into the first worksheet of a new workbook; numeric cells are
/// stored as numbers
pub fn write_plan_xlsx(dir: &Path, name: &str, rows: &[FixtureRow]) -> Result<PathBuf> {
    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();

    for (col, header) in HEADER.iter().enumerate() {
        worksheet.write_string(0, col as u16, *header)?;
    }
    for (index, row) in rows.iter().enumerate() {
        let line = index as u32 + 1;
        for (col, cell) in row.cells().iter().enumerate() {
            match cell.parse::<f64>() {
                Ok(number) => worksheet.write_number(line, col as u16, number)?,
                Err(_) => worksheet.write_string(line, col as u16, *cell)?,
            };
        }
    }

    let path = dir.join(name);
    workbook.save(&path)?;
    Ok(path)
}

/// Monday 2024-01-01
pub fn monday() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 1, 1).unwrap()
}

/// Context of the end-to-end scenario: 190 bpm, starting 2024-01-01
pub fn easy_run_context() -> PlanContext {
    PlanContext::new(190, monday()).unwrap()
}

/// Configuration writing into `dir`
pub fn config_in(dir: &Path) -> PlanConfig {
    PlanConfig {
        output_dir: dir.to_path_buf(),
        ..PlanConfig::default()
    }
}

/// Calendar writer with a fixed timestamp
pub fn fixed_writer() -> IcsWriter {
    IcsWriter::new(Utc.with_ymd_and_hms(2024, 1, 1, 6, 0, 0).unwrap())
}

/// Unfold calendar text into logical content lines
pub fn content_lines(ics: &str) -> Vec<String> {
    ics.replace("\r\n ", "")
        .split("\r\n")
        .filter(|line| !line.is_empty())
        .map(str::to_owned)
        .collect()
}
