// ABOUTME: RFC 5545 serialization of all-day events into a VCALENDAR document
// ABOUTME: CRLF lines, 75-octet folding, TEXT escaping, atomic write via temp file
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Laufplan Contributors

use crate::constants::calendar;
use crate::errors::{AppError, AppResult};
use crate::models::CalendarEvent;
use chrono::{DateTime, NaiveDate, Utc};
use std::io::{self, Write};
use std::path::Path;
use tempfile::NamedTempFile;
use tracing::info;

/// Content lines longer than this many octets are folded
const MAX_LINE_OCTETS: usize = 75;

/// Serializes calendar events
#[derive(Debug, Clone)]
pub struct IcsWriter {
    product_id: String,
    dtstamp: DateTime<Utc>,
}

impl IcsWriter {
    /// Writer stamping every event with `dtstamp`
    #[must_use]
    pub fn new(dtstamp: DateTime<Utc>) -> Self {
        Self {
            product_id: calendar::PRODUCT_ID.to_owned(),
            dtstamp,
        }
    }

    /// Writer stamping events with the current time
    #[must_use]
    pub fn now() -> Self {
        Self::new(Utc::now())
    }

    /// Full calendar text, events in the given order
    #[must_use]
    pub fn render(&self, events: &[CalendarEvent]) -> String {
        let mut out = String::new();
        push_line(&mut out, "BEGIN:VCALENDAR");
        push_line(&mut out, &format!("PRODID:{}", self.product_id));
        push_line(&mut out, &format!("VERSION:{}", calendar::VERSION));

        let stamp = self.dtstamp.format("%Y%m%dT%H%M%SZ").to_string();
        for event in events {
            push_line(&mut out, "BEGIN:VEVENT");
            push_line(&mut out, &format!("UID:{}", escape_text(&event.uid)));
            push_line(&mut out, &format!("DTSTAMP:{stamp}"));
            push_line(&mut out, &format!("DTSTART;VALUE=DATE:{}", ics_date(event.start)));
            push_line(&mut out, &format!("DTEND;VALUE=DATE:{}", ics_date(event.end)));
            push_line(&mut out, &format!("SUMMARY:{}", escape_text(&event.title)));
            push_line(
                &mut out,
                &format!("DESCRIPTION:{}", escape_text(&event.description)),
            );
            push_line(&mut out, "END:VEVENT");
        }

        push_line(&mut out, "END:VCALENDAR");
        out
    }

    /// Write the calendar to `path`, replacing any existing file
    ///
    /// The text goes to a temporary file next to `path` first, so a failed run
    /// never leaves a partial calendar behind.
    ///
    /// # Errors
    ///
    /// Returns `ErrorCode::FileWrite` if the file cannot be created or written
    pub fn write(&self, events: &[CalendarEvent], path: &Path) -> AppResult<()> {
        let directory = path
            .parent()
            .filter(|dir| !dir.as_os_str().is_empty())
            .unwrap_or_else(|| Path::new("."));
        let write_error = |e: io::Error| AppError::file_write(path.display(), e);

        let mut file = NamedTempFile::new_in(directory).map_err(write_error)?;
        file.write_all(self.render(events).as_bytes())
            .map_err(write_error)?;
        file.flush().map_err(write_error)?;
        file.persist(path).map_err(|e| write_error(e.error))?;

        info!(path = %path.display(), events = events.len(), "Calendar written");
        Ok(())
    }
}

fn ics_date(date: NaiveDate) -> String {
    date.format("%Y%m%d").to_string()
}

/// Escape a TEXT property value
fn escape_text(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for ch in value.chars() {
        match ch {
            '\\' => escaped.push_str("\\\\"),
            ';' => escaped.push_str("\\;"),
            ',' => escaped.push_str("\\,"),
            '\n' => escaped.push_str("\\n"),
            '\r' => {}
            other => escaped.push(other),
        }
    }
    escaped
}

/// Append `line` with CRLF, folding at 75 octets without splitting a character
fn push_line(out: &mut String, line: &str) {
    let mut octets = 0;
    for ch in line.chars() {
        let width = ch.len_utf8();
        if octets + width > MAX_LINE_OCTETS {
            out.push_str("\r\n ");
            octets = 1;
        }
        out.push(ch);
        octets += width;
    }
    out.push_str("\r\n");
}
