// ABOUTME: Core data models re-exported from laufplan-core
// ABOUTME: Plan rows, heart rate zones and calendar events
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Laufplan Contributors

//! # Data Models
//!
//! - `PlanRow`: one validated workout of the input table
//! - `HeartRateZone`: fixed percentage band with a display name
//! - `CalendarEvent`: all-day event derived from a plan row

pub use laufplan_core::models::*;
