// ABOUTME: Heart rate zone band model
// ABOUTME: Closed integer percentage bounds with a display name
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Laufplan Contributors

use crate::constants::heart_rate::ZONES;
use serde::Serialize;
use std::fmt;

/// Named heart rate band, bounds are percentages of maximum heart rate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct HeartRateZone {
    /// Zone number, 1 is the easiest
    pub number: u8,
    /// Display name, e.g. "Zone 2"
    pub name: &'static str,
    /// Lowest percentage in the zone (inclusive)
    pub lower: u8,
    /// Highest percentage in the zone (inclusive)
    pub upper: u8,
}

impl HeartRateZone {
    /// True when `percentage` lies within `lower..=upper`
    #[must_use]
    pub fn contains(&self, percentage: f64) -> bool {
        f64::from(self.lower) <= percentage && percentage <= f64::from(self.upper)
    }

    /// All configured zones, lowest first
    pub fn all() -> impl Iterator<Item = Self> {
        ZONES
            .iter()
            .zip(1_u8..)
            .map(|(&(lower, upper, name), number)| Self {
                number,
                name,
                lower,
                upper,
            })
    }
}

impl fmt::Display for HeartRateZone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name)
    }
}
