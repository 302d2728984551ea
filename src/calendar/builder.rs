// ABOUTME: Builds one all-day calendar event per validated plan row
// ABOUTME: Title, localized description lines, dates and a deterministic UID
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Laufplan Contributors

use crate::constants::{calendar, columns};
use crate::errors::RowIssue;
use crate::formatters::{compact, decimal};
use crate::i18n::{MessageKey, Messages};
use crate::intelligence::HeartRateTarget;
use crate::models::{CalendarEvent, PlanRow};
use crate::schedule::PlanContext;
use chrono::NaiveDate;
use uuid::Uuid;

/// Builds calendar events for one plan run
#[derive(Debug)]
pub struct EventBuilder<'a> {
    context: &'a PlanContext,
    prefix: String,
    messages: &'a Messages,
}

impl<'a> EventBuilder<'a> {
    /// Builder resolving rows against `context`, titles prefixed with `prefix`
    /// unless it is blank
    #[must_use]
    pub fn new(context: &'a PlanContext, prefix: impl Into<String>, messages: &'a Messages) -> Self {
        Self {
            context,
            prefix: prefix.into().trim().to_owned(),
            messages,
        }
    }

    /// Event for `row`
    ///
    /// # Errors
    ///
    /// Returns a `RowIssue` when the row's date lies outside the representable
    /// calendar range
    pub fn build(&self, row: &PlanRow) -> Result<CalendarEvent, RowIssue> {
        let out_of_range = || {
            RowIssue::new(
                row.line,
                columns::WEEK,
                format!("{}/{}", row.week, row.day),
                "places the workout outside the supported calendar range",
            )
        };
        let start = self.context.date_for(row.week, row.day).ok_or_else(out_of_range)?;
        let end = start.succ_opt().ok_or_else(out_of_range)?;

        let target = HeartRateTarget::new(self.context.max_heart_rate(), row.heart_rate_percent);

        Ok(CalendarEvent {
            uid: event_uid(self.context.start_monday(), row),
            start,
            end,
            title: self.title(row),
            description: self.description(row, &target),
        })
    }

    /// `"{prefix}: {training} / {distance}km"`, or without the prefix part
    #[must_use]
    pub fn title(&self, row: &PlanRow) -> String {
        let workout = format!("{} / {}km", row.training, compact(row.distance_km));
        if self.prefix.is_empty() {
            workout
        } else {
            format!("{}: {workout}", self.prefix)
        }
    }

    /// Four bullet lines: details, heart rate, zone, distance
    #[must_use]
    pub fn description(&self, row: &PlanRow, target: &HeartRateTarget) -> String {
        let zone = target
            .zone
            .map_or_else(|| self.messages.text(MessageKey::NoZone), |zone| zone.name);

        [
            format!("- {}", row.details),
            format!(
                "- {}: {}% ({} bpm)",
                self.messages.text(MessageKey::HeartRateLabel),
                decimal(target.percentage),
                decimal(target.bpm)
            ),
            format!("- {zone}"),
            format!(
                "- {}: {} km",
                self.messages.text(MessageKey::DistanceLabel),
                compact(row.distance_km)
            ),
        ]
        .join("\n")
    }
}

/// Build a single event, see [`EventBuilder::build`]
///
/// # Errors
///
/// Returns a `RowIssue` when the row's date is out of range
pub fn build_event(
    row: &PlanRow,
    context: &PlanContext,
    prefix: &str,
    messages: &Messages,
) -> Result<CalendarEvent, RowIssue> {
    EventBuilder::new(context, prefix, messages).build(row)
}

/// Deterministic UID: the same plan, start and row always give the same value
#[must_use]
pub fn event_uid(start_monday: NaiveDate, row: &PlanRow) -> String {
    let name = format!(
        "{start_monday}/{}/{}/{}/{}",
        row.line, row.week, row.day, row.training
    );
    let id = Uuid::new_v5(&Uuid::NAMESPACE_URL, name.as_bytes());
    format!("{id}@{}", calendar::UID_DOMAIN)
}
