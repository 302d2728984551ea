// ABOUTME: Integration tests for calendar event construction
// ABOUTME: Titles, description lines, localized labels and deterministic identifiers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Laufplan Contributors

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use chrono::NaiveDate;
use common::{easy_run_context, monday};
use laufplan::calendar::{build_event, event_uid, EventBuilder};
use laufplan::i18n::{BuiltinCatalog, JsonCatalog, MessageKey, Messages};
use laufplan::models::PlanRow;
use laufplan::schedule::PlanContext;

fn plan_row(week: u32, day: u32, training: &str, distance_km: f64, heart_rate_percent: f64) -> PlanRow {
    PlanRow {
        line: 2,
        week,
        day,
        training: training.into(),
        distance_km,
        heart_rate_percent,
        details: "Recovery".into(),
    }
}

#[test]
fn test_easy_run_scenario() {
    let messages = Messages::source();
    let event = build_event(
        &plan_row(1, 1, "Easy Run", 5.0, 65.0),
        &easy_run_context(),
        "",
        &messages,
    )
    .unwrap();

    assert_eq!(event.start, monday());
    assert_eq!(event.end, NaiveDate::from_ymd_opt(2024, 1, 2).unwrap());
    assert_eq!((event.end - event.start).num_days(), 1);
    assert_eq!(event.title, "Easy Run / 5km");
    assert!(event.description.contains("Heart rate: 65.0% (123.5 bpm)"));
    assert!(event.description.contains("Zone 2"));

    let lines: Vec<&str> = event.description.lines().collect();
    assert_eq!(lines.len(), 4);
    assert_eq!(lines[0], "- Recovery");
    assert_eq!(lines[3], "- Distance: 5 km");
}

#[test]
fn test_number_rendering() {
    let messages = Messages::source();
    let context = PlanContext::new(200, monday()).unwrap();
    let event = build_event(
        &plan_row(3, 2, "Long Run", 21.1, 75.0),
        &context,
        "",
        &messages,
    )
    .unwrap();

    assert_eq!(event.title, "Long Run / 21.1km");
    assert!(event.description.contains("75.0% (150.0 bpm)"));
    assert!(event.description.contains("Distance: 21.1 km"));
    assert_eq!(event.start, NaiveDate::from_ymd_opt(2024, 1, 16).unwrap());
}

#[test]
fn test_german_labels() {
    let messages = Messages::source().with_catalog(BuiltinCatalog::for_language("de").unwrap());
    let context = easy_run_context();
    let builder = EventBuilder::new(&context, "", &messages);

    let event = builder.build(&plan_row(1, 2, "Dauerlauf", 8.0, 40.0)).unwrap();
    assert!(event.description.contains("- Herzfrequenz: 40.0% (76.0 bpm)"));
    assert!(event.description.contains("- Keine Zone"));
    assert!(event.description.contains("- Distanz: 8 km"));
}

#[test]
fn test_catalog_prefix_and_labels() {
    let catalog = JsonCatalog::from_json(
        "en",
        r#"{ "event.no_zone": "Free pace", "event.heart_rate": "HR" }"#,
    )
    .unwrap();
    let messages = Messages::source().with_catalog(catalog);
    let context = easy_run_context();
    let builder = EventBuilder::new(&context, "Spring 10k", &messages);

    let event = builder.build(&plan_row(1, 1, "Strides", 3.0, 90.5)).unwrap();
    assert_eq!(event.title, "Spring 10k: Strides / 3km");
    assert!(event.description.contains("- HR: 90.5% (171.95 bpm)"));
    assert!(event.description.contains("- Free pace"));
    assert_eq!(messages.text(MessageKey::DistanceLabel), "Distance");
}

#[test]
fn test_uid_depends_on_start_and_row() {
    let row = plan_row(1, 1, "Easy Run", 5.0, 65.0);
    let next_monday = NaiveDate::from_ymd_opt(2024, 1, 8).unwrap();

    let uid = event_uid(monday(), &row);
    assert_eq!(uid, event_uid(monday(), &row));
    assert_ne!(uid, event_uid(next_monday, &row));
    assert!(uid.ends_with("@laufplan"));
}
