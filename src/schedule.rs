// ABOUTME: Start date normalisation and event date calculation
// ABOUTME: Places each (week, day) plan offset on a concrete calendar date
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Laufplan Contributors

//! # Date Resolver
//!
//! A plan always begins on a Monday. A start date on any other weekday is moved
//! forward to the next Monday; week 1, day 1 of the plan falls on that Monday.

use crate::constants::dates::{DAYS_PER_WEEK, START_DATE_FORMAT};
use crate::errors::{AppError, AppResult};
use chrono::{Datelike, Days, NaiveDate, Weekday};
use serde::Serialize;
use tracing::debug;

/// Parse a `YYYY-MM-DD` start date, ignoring surrounding whitespace
///
/// # Errors
///
/// Returns `ErrorCode::InvalidDate` when the text is not an ISO calendar date
pub fn parse_start_date(text: &str) -> AppResult<NaiveDate> {
    let trimmed = text.trim();
    NaiveDate::parse_from_str(trimmed, START_DATE_FORMAT)
        .map_err(|e| AppError::invalid_date(trimmed).with_source(e))
}

/// Normalise `date` to the Monday a plan starts on
///
/// Mondays are returned unchanged, every other day moves forward to the next
/// Monday.
///
/// # Errors
///
/// Returns `ErrorCode::InvalidDate` when the next Monday lies beyond the
/// representable calendar range
pub fn resolve_start(date: NaiveDate) -> AppResult<NaiveDate> {
    if is_week_start(date) {
        return Ok(date);
    }
    let days_to_monday = 7 - date.weekday().num_days_from_monday();
    date.checked_add_days(Days::new(u64::from(days_to_monday)))
        .ok_or_else(|| AppError::invalid_date(&date.to_string()))
}

/// Date of plan week `week`, day `day` (both 1-based) after `start_monday`
///
/// `event_date(monday, 1, 1) == monday`. Week and day have no upper bound;
/// `None` is returned for a zero offset component or when the result leaves
/// the representable calendar range.
#[must_use]
pub fn event_date(start_monday: NaiveDate, week: u32, day: u32) -> Option<NaiveDate> {
    let weeks = u64::from(week.checked_sub(1)?);
    let days = u64::from(day.checked_sub(1)?);
    let offset = weeks.checked_mul(DAYS_PER_WEEK)?.checked_add(days)?;
    start_monday.checked_add_days(Days::new(offset))
}

/// The two user-supplied values every row is resolved against
///
/// The start date is normalised to a Monday on construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PlanContext {
    max_heart_rate: u32,
    requested_start: NaiveDate,
    start_monday: NaiveDate,
}

impl PlanContext {
    /// Build a context from a maximum heart rate and a requested start date
    ///
    /// # Errors
    ///
    /// Returns `ErrorCode::InvalidInput` for a zero maximum heart rate and
    /// `ErrorCode::InvalidDate` when the start cannot be normalised
    pub fn new(max_heart_rate: u32, requested_start: NaiveDate) -> AppResult<Self> {
        if max_heart_rate == 0 {
            return Err(AppError::invalid_input(
                "maximum heart rate must be a positive number of beats per minute",
            ));
        }

        let start_monday = resolve_start(requested_start)?;
        if !is_week_start(requested_start) {
            debug!(
                requested = %requested_start,
                start_monday = %start_monday,
                "Start date moved to the next Monday"
            );
        }

        Ok(Self {
            max_heart_rate,
            requested_start,
            start_monday,
        })
    }

    /// Maximum heart rate in bpm
    #[must_use]
    pub const fn max_heart_rate(&self) -> u32 {
        self.max_heart_rate
    }

    /// Start date as entered by the user
    #[must_use]
    pub const fn requested_start(&self) -> NaiveDate {
        self.requested_start
    }

    /// Monday the plan starts on
    #[must_use]
    pub const fn start_monday(&self) -> NaiveDate {
        self.start_monday
    }

    /// Date of plan week `week`, day `day`, see [`event_date`]
    #[must_use]
    pub fn date_for(&self, week: u32, day: u32) -> Option<NaiveDate> {
        event_date(self.start_monday, week, day)
    }
}

/// True when `date` is the first weekday of its week
#[must_use]
pub fn is_week_start(date: NaiveDate) -> bool {
    date.weekday() == Weekday::Mon
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_monday_is_unchanged() {
        assert_eq!(resolve_start(date(2024, 1, 1)).unwrap(), date(2024, 1, 1));
    }

    #[test]
    fn test_other_days_move_to_next_monday() {
        // Tuesday 2024-01-02 .. Sunday 2024-01-07
        for day in 2..=7 {
            assert_eq!(resolve_start(date(2024, 1, day)).unwrap(), date(2024, 1, 8));
        }
    }

    #[test]
    fn test_event_date_offsets() {
        let monday = date(2024, 1, 1);
        assert_eq!(event_date(monday, 1, 1), Some(monday));
        assert_eq!(event_date(monday, 1, 7), Some(date(2024, 1, 7)));
        assert_eq!(event_date(monday, 2, 1), Some(date(2024, 1, 8)));
        assert_eq!(event_date(monday, 10, 3), Some(date(2024, 3, 6)));
    }

    #[test]
    fn test_event_date_rejects_zero_and_overflow() {
        let monday = date(2024, 1, 1);
        assert_eq!(event_date(monday, 0, 1), None);
        assert_eq!(event_date(monday, 1, 0), None);
        assert_eq!(event_date(monday, u32::MAX, u32::MAX), None);
    }

    #[test]
    fn test_parse_start_date() {
        assert_eq!(parse_start_date(" 2024-03-15\n").unwrap(), date(2024, 3, 15));
        assert!(parse_start_date("15.03.2024").is_err());
        assert!(parse_start_date("2024-02-30").is_err());
        assert!(parse_start_date("").is_err());
    }

    #[test]
    fn test_context_rejects_zero_max_heart_rate() {
        assert!(PlanContext::new(0, date(2024, 1, 1)).is_err());
    }
}
