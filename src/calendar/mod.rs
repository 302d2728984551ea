// ABOUTME: Calendar module turning plan rows into all-day iCalendar events
// ABOUTME: Event construction and RFC 5545 serialization
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Laufplan Contributors

//! # Calendar Output
//!
//! [`EventBuilder`] derives one [`CalendarEvent`](crate::models::CalendarEvent)
//! per plan row; [`IcsWriter`] serializes the ordered events into a single
//! `.ics` file.

/// Event construction from plan rows
pub mod builder;
/// iCalendar text rendering and atomic file output
pub mod ics;

pub use builder::{build_event, event_uid, EventBuilder};
pub use ics::IcsWriter;
