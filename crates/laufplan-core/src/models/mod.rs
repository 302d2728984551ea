// ABOUTME: Core data models for training plans and calendar output
// ABOUTME: Plan rows as read from input, heart rate zones, and built calendar events
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Laufplan Contributors

/// Calendar events built from plan rows
pub mod event;
/// Validated training plan rows
pub mod plan;
/// Heart rate zone bands
pub mod zone;

pub use event::CalendarEvent;
pub use plan::PlanRow;
pub use zone::HeartRateZone;
