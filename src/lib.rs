// ABOUTME: Main library entry point for the laufplan training plan converter
// ABOUTME: Loads a plan table, resolves dates and heart rate targets, writes an iCalendar file
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Laufplan Contributors

#![deny(unsafe_code)]

//! # Laufplan
//!
//! Turns a running training plan (one row per workout with week, day, training
//! type, distance, heart rate percentage and notes) into an iCalendar file with
//! one all-day event per workout.
//!
//! ## Pipeline
//!
//! 1. **Input**: read a `.csv` or `.xlsx` table into validated [`models::PlanRow`]s
//! 2. **Schedule**: normalise the start date to a Monday, place each row on a date
//! 3. **Intelligence**: classify the heart rate percentage into a zone, compute bpm
//! 4. **Calendar**: build the events and write them atomically as `.ics`
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use laufplan::config::PlanConfig;
//! use laufplan::pipeline::PlanPipeline;
//! use laufplan::schedule::{parse_start_date, PlanContext};
//! use std::path::Path;
//!
//! fn main() -> laufplan::errors::AppResult<()> {
//!     let config = PlanConfig::from_env()?;
//!     let messages = config.messages()?;
//!     let context = PlanContext::new(190, parse_start_date("2024-01-01")?)?;
//!
//!     let pipeline = PlanPipeline::new(&config, &messages);
//!     let report = pipeline.run(Path::new("plan.csv"), &context)?;
//!     println!("{} events written to {}", report.event_count, report.output_path.display());
//!     Ok(())
//! }
//! ```

/// Unified error handling re-exported from the core crate
pub mod errors;

/// Application constants re-exported from the core crate
pub mod constants;

/// Data models re-exported from the core crate
pub mod models;

/// Environment-driven configuration
pub mod config;

/// Structured logging setup
pub mod logging;

/// Message catalogs for user-visible text
pub mod i18n;

/// Number formatting for event text
pub mod formatters;

/// Start date normalisation and event dates
pub mod schedule;

/// Heart rate zone classification and bpm targets
pub mod intelligence;

/// Plan table loaders (CSV, XLSX)
pub mod input;

/// Event construction and iCalendar serialization
pub mod calendar;

/// End-to-end plan conversion
pub mod pipeline;
