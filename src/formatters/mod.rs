// ABOUTME: Number formatting used in event titles and descriptions
// ABOUTME: Decimal form always keeps a fractional digit, compact form drops a zero fraction
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Laufplan Contributors

//! Number Formatting
//!
//! Heart rate values are shown as measured quantities (`65.0%`, `123.5 bpm`),
//! distances as the plan author wrote them (`5km`, `12.5km`). Both use the
//! shortest representation that round-trips the `f64`.

/// Shortest round-trip form with at least one fractional digit
///
/// ```
/// use laufplan::formatters::decimal;
/// assert_eq!(decimal(65.0), "65.0");
/// assert_eq!(decimal(123.5), "123.5");
/// ```
#[must_use]
pub fn decimal(value: f64) -> String {
    let mut text = value.to_string();
    if value.is_finite() && !text.contains('.') {
        text.push_str(".0");
    }
    text
}

/// Shortest round-trip form, whole numbers without a fraction
///
/// ```
/// use laufplan::formatters::compact;
/// assert_eq!(compact(5.0), "5");
/// assert_eq!(compact(12.5), "12.5");
/// ```
#[must_use]
pub fn compact(value: f64) -> String {
    // -0.0 prints as "-0"
    if value == 0.0 {
        return "0".to_owned();
    }
    value.to_string()
}
