// ABOUTME: Heart rate zone classification from percentage of maximum heart rate
// ABOUTME: Linear scan over the fixed zone table plus unrounded bpm targets
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Laufplan Contributors

use crate::models::HeartRateZone;
use serde::Serialize;

/// Zone containing `percentage`, or `None` outside every band
///
/// Bands have closed integer bounds (50-60, 61-70, 71-80, 81-90, 91-100), so a
/// fractional percentage between two bands (e.g. 60.5) has no zone.
#[must_use]
pub fn classify(percentage: f64) -> Option<HeartRateZone> {
    HeartRateZone::all().find(|zone| zone.contains(percentage))
}

/// Absolute heart rate for `percentage` of `max_heart_rate`, unrounded
#[must_use]
pub fn bpm(max_heart_rate: u32, percentage: f64) -> f64 {
    f64::from(max_heart_rate) * percentage / 100.0
}

/// Heart rate target of one workout
///
/// Percentages outside 50-100 still produce a bpm value, only the zone is
/// absent.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct HeartRateTarget {
    /// Percentage of maximum heart rate as planned
    pub percentage: f64,
    /// Absolute target in beats per minute
    pub bpm: f64,
    /// Matching zone, if any
    pub zone: Option<HeartRateZone>,
}

impl HeartRateTarget {
    /// Resolve `percentage` against `max_heart_rate`
    #[must_use]
    pub fn new(max_heart_rate: u32, percentage: f64) -> Self {
        Self {
            percentage,
            bpm: bpm(max_heart_rate, percentage),
            zone: classify(percentage),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn zone_name(percentage: f64) -> Option<&'static str> {
        classify(percentage).map(|zone| zone.name)
    }

    #[test]
    fn test_zone_boundaries() {
        assert_eq!(zone_name(50.0), Some("Zone 1"));
        assert_eq!(zone_name(60.0), Some("Zone 1"));
        assert_eq!(zone_name(61.0), Some("Zone 2"));
        assert_eq!(zone_name(70.0), Some("Zone 2"));
        assert_eq!(zone_name(71.0), Some("Zone 3"));
        assert_eq!(zone_name(80.0), Some("Zone 3"));
        assert_eq!(zone_name(81.0), Some("Zone 4"));
        assert_eq!(zone_name(90.0), Some("Zone 4"));
        assert_eq!(zone_name(91.0), Some("Zone 5"));
        assert_eq!(zone_name(100.0), Some("Zone 5"));
    }

    #[test]
    fn test_outside_range_has_no_zone() {
        assert_eq!(zone_name(49.0), None);
        assert_eq!(zone_name(101.0), None);
        assert_eq!(zone_name(0.0), None);
        assert_eq!(zone_name(-10.0), None);
        // between two closed integer bands
        assert_eq!(zone_name(60.5), None);
    }

    #[test]
    fn test_bpm() {
        assert!((bpm(200, 75.0) - 150.0).abs() < f64::EPSILON);
        assert!((bpm(190, 65.0) - 123.5).abs() < f64::EPSILON);
        assert!((bpm(183, 100.0) - 183.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_target_outside_zones_keeps_bpm() {
        let target = HeartRateTarget::new(200, 110.0);
        assert!(target.zone.is_none());
        assert!((target.bpm - 220.0).abs() < f64::EPSILON);
    }
}
