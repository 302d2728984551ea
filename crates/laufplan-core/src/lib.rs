// ABOUTME: Core types and constants for the laufplan training plan converter
// ABOUTME: Foundation crate with error handling, zone table, and plan/event models
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Laufplan Contributors

#![deny(unsafe_code)]

//! # Laufplan Core
//!
//! Foundation crate shared by the `laufplan` library and binary.
//!
//! ## Modules
//!
//! - **errors**: `AppError`, `ErrorCode` and row validation errors
//! - **constants**: zone table, input columns, calendar identity, environment keys
//! - **models**: `PlanRow`, `HeartRateZone`, `CalendarEvent`

/// Unified error handling with error codes and exit statuses
pub mod errors;

/// Application constants organized by domain
pub mod constants;

/// Core data models
pub mod models;
