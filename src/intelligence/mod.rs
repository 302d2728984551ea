// ABOUTME: Intelligence module for training intensity calculations
// ABOUTME: Exposes heart rate zone classification and bpm targets
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Laufplan Contributors

//! # Intelligence Module
//!
//! Derives training targets from the values of a plan row.

/// Heart rate zone lookup and absolute bpm targets
pub mod heart_rate;

pub use heart_rate::{bpm, classify, HeartRateTarget};
