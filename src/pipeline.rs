// ABOUTME: End-to-end conversion from plan file to calendar file
// ABOUTME: Loads and validates all rows, builds every event, then writes once
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Laufplan Contributors

//! # Plan Pipeline
//!
//! One synchronous pass: read the whole plan, validate it, build all events in
//! input order, write the calendar. Nothing is written unless every row
//! succeeded. [`PlanPipeline::load`] and [`PlanPipeline::convert`] split the
//! pass so the plan can be checked before the run values are known.

use crate::calendar::{EventBuilder, IcsWriter};
use crate::config::PlanConfig;
use crate::errors::{AppResult, PlanValidationError};
use crate::i18n::Messages;
use crate::input::load_plan;
use crate::models::{CalendarEvent, PlanRow};
use crate::schedule::PlanContext;
use chrono::NaiveDate;
use serde::Serialize;
use std::path::{Path, PathBuf};
use tracing::{info, instrument};

/// Outcome of a successful run
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlanReport {
    /// Number of events written
    pub event_count: usize,
    /// Calendar file location
    pub output_path: PathBuf,
    /// Monday the plan starts on
    pub start_monday: NaiveDate,
}

impl PlanReport {
    /// File name part of the output path
    #[must_use]
    pub fn file_name(&self) -> String {
        self.output_path
            .file_name()
            .map_or_else(String::new, |name| name.to_string_lossy().into_owned())
    }
}

/// Plan conversion with fixed configuration and messages
#[derive(Debug)]
pub struct PlanPipeline<'a> {
    config: &'a PlanConfig,
    messages: &'a Messages,
    writer: IcsWriter,
}

impl<'a> PlanPipeline<'a> {
    /// Pipeline stamping events with the current time
    #[must_use]
    pub fn new(config: &'a PlanConfig, messages: &'a Messages) -> Self {
        Self::with_writer(config, messages, IcsWriter::now())
    }

    /// Pipeline using a specific calendar writer
    #[must_use]
    pub fn with_writer(config: &'a PlanConfig, messages: &'a Messages, writer: IcsWriter) -> Self {
        Self {
            config,
            messages,
            writer,
        }
    }

    /// Build one event per row, in row order
    ///
    /// # Errors
    ///
    /// Returns `ErrorCode::InvalidRow` listing every row whose event could not
    /// be built
    pub fn build_events(&self, rows: &[PlanRow], context: &PlanContext) -> AppResult<Vec<CalendarEvent>> {
        let builder = EventBuilder::new(context, self.config.title_prefix(self.messages), self.messages);
        let mut errors = PlanValidationError::new();
        let mut events = Vec::with_capacity(rows.len());

        for row in rows {
            match builder.build(row) {
                Ok(event) => events.push(event),
                Err(issue) => errors.push(issue),
            }
        }

        errors.into_result()?;
        Ok(events)
    }

    /// Read and validate the plan at `input`
    ///
    /// # Errors
    ///
    /// Returns any input or validation error of [`load_plan`]
    pub fn load(&self, input: &Path) -> AppResult<Vec<PlanRow>> {
        load_plan(input)
    }

    /// Build the events of `rows` and write the calendar file
    ///
    /// # Errors
    ///
    /// Returns an event or write error; no file is written then
    #[instrument(skip_all, fields(rows = rows.len(), start = %context.start_monday()))]
    pub fn convert(&self, rows: &[PlanRow], context: &PlanContext) -> AppResult<PlanReport> {
        let events = self.build_events(rows, context)?;

        let output_path = self.config.output_path(context.start_monday());
        self.writer.write(&events, &output_path)?;

        info!(
            events = events.len(),
            output = %output_path.display(),
            "Plan converted"
        );
        Ok(PlanReport {
            event_count: events.len(),
            output_path,
            start_monday: context.start_monday(),
        })
    }

    /// Load the plan at `input`, then convert it, see [`Self::load`] and
    /// [`Self::convert`]
    ///
    /// # Errors
    ///
    /// Returns any input, validation or write error; no file is written then
    pub fn run(&self, input: &Path, context: &PlanContext) -> AppResult<PlanReport> {
        let rows = self.load(input)?;
        self.convert(&rows, context)
    }
}
