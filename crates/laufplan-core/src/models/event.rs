// ABOUTME: All-day calendar event derived from a plan row
// ABOUTME: Holds dates, title, description and a stable identifier
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Laufplan Contributors

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One all-day calendar entry
///
/// `end` is exclusive: a single-day event ends on the following date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalendarEvent {
    /// Stable identifier written as `UID`
    pub uid: String,
    /// First day of the event
    pub start: NaiveDate,
    /// Day after the last day of the event
    pub end: NaiveDate,
    /// Event summary line
    pub title: String,
    /// Multi-line event description
    pub description: String,
}
