// ABOUTME: Configuration management module for conversion runs
// ABOUTME: Environment-only settings for output location, language and title prefix
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Laufplan Contributors

//! Configuration module
//!
//! Settings come exclusively from environment variables; the only command-line
//! argument is the plan file. The two per-run values (maximum heart rate, start
//! date) are passed to the pipeline explicitly as a `PlanContext`.

/// Environment and run configuration
pub mod environment;

pub use environment::PlanConfig;
