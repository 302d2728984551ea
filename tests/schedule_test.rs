// ABOUTME: Integration tests for start date normalisation and event dates
// ABOUTME: Checks Monday alignment and ordering across whole years of dates
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Laufplan Contributors

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use chrono::{Datelike, Days, NaiveDate, Weekday};
use laufplan::errors::ErrorCode;
use laufplan::schedule::{event_date, is_week_start, parse_start_date, resolve_start, PlanContext};

fn every_day_of(year: i32) -> impl Iterator<Item = NaiveDate> {
    let first = NaiveDate::from_ymd_opt(year, 1, 1).unwrap();
    first.iter_days().take_while(move |d| d.year() == year)
}

#[test]
fn test_resolved_start_is_always_a_monday() {
    for date in every_day_of(2024).chain(every_day_of(2025)) {
        let start = resolve_start(date).unwrap();
        assert_eq!(start.weekday(), Weekday::Mon, "{date}");
        assert!(start >= date);
        assert!(start - date < chrono::Duration::days(7));
        assert_eq!(start == date, is_week_start(date));
    }
}

#[test]
fn test_event_dates_increase_with_week_and_day() {
    let monday = NaiveDate::from_ymd_opt(2024, 2, 26).unwrap();
    let mut previous = None;

    for week in 1..=20 {
        for day in 1..=7 {
            let date = event_date(monday, week, day).unwrap();
            if let Some(previous) = previous {
                assert_eq!(date, previous + Days::new(1));
            }
            previous = Some(date);
        }
    }
    // 2024 is a leap year: week 1 day 4 is 29 February
    assert_eq!(
        event_date(monday, 1, 4),
        NaiveDate::from_ymd_opt(2024, 2, 29)
    );
}

#[test]
fn test_day_beyond_seven_rolls_into_later_weeks() {
    let monday = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
    assert_eq!(event_date(monday, 1, 8), event_date(monday, 2, 1));
}

#[test]
fn test_context_moves_start_forward() {
    let saturday = NaiveDate::from_ymd_opt(2024, 1, 6).unwrap();
    let context = PlanContext::new(185, saturday).unwrap();

    assert_eq!(context.requested_start(), saturday);
    assert_eq!(context.start_monday(), NaiveDate::from_ymd_opt(2024, 1, 8).unwrap());
    assert_eq!(context.date_for(1, 1), Some(context.start_monday()));
    assert_eq!(context.max_heart_rate(), 185);
}

#[test]
fn test_unparseable_start_date() {
    let error = parse_start_date("2024/01/01").unwrap_err();
    assert_eq!(error.code, ErrorCode::InvalidDate);
    assert!(error.message.contains("2024/01/01"));
}

#[test]
fn test_start_at_end_of_calendar_range() {
    let result = resolve_start(NaiveDate::MAX);
    if NaiveDate::MAX.weekday() == Weekday::Mon {
        assert_eq!(result.unwrap(), NaiveDate::MAX);
    } else {
        assert_eq!(result.unwrap_err().code, ErrorCode::InvalidDate);
    }
}
