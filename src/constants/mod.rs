// ABOUTME: Constants module re-exported from laufplan-core
// ABOUTME: Zone table, input columns, calendar identity and environment keys
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Laufplan Contributors

//! Constants grouped by domain, see `laufplan_core::constants`.

pub use laufplan_core::constants::*;
