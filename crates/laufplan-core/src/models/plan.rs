// ABOUTME: Strongly typed training plan row
// ABOUTME: Produced once by the input loader, consumed by the event builder
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Laufplan Contributors

use serde::{Deserialize, Serialize};

/// One workout of a training plan
///
/// `week` and `day` are 1-based offsets from the plan's start Monday. Values
/// are validated when the row is read and never change afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlanRow {
    /// Source line the row was read from (header is line 1)
    pub line: usize,
    /// Training week, starting at 1
    pub week: u32,
    /// Day within the week, starting at 1
    pub day: u32,
    /// Workout type, e.g. "Easy Run"
    pub training: String,
    /// Distance in kilometres
    pub distance_km: f64,
    /// Target heart rate as percentage of maximum
    pub heart_rate_percent: f64,
    /// Free-text notes
    pub details: String,
}
