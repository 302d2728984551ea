// ABOUTME: Constants module with domain-separated organization
// ABOUTME: Heart rate zone table, input columns, calendar identity and environment keys
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Laufplan Contributors

//! Constants grouped by domain.

/// Heart rate zones as percentage of maximum heart rate
pub mod heart_rate {
    /// Fixed zone table: `(lower, upper, name)`, both bounds inclusive
    ///
    /// Ordered from lowest to highest intensity; lookups scan it linearly.
    pub const ZONES: [(u8, u8, &str); 5] = [
        (50, 60, "Zone 1"),
        (61, 70, "Zone 2"),
        (71, 80, "Zone 3"),
        (81, 90, "Zone 4"),
        (91, 100, "Zone 5"),
    ];
}

/// Input table layout
pub mod columns {
    /// Training week, 1-based
    pub const WEEK: &str = "week";
    /// Day within the week, 1-based
    pub const DAY: &str = "day";
    /// Workout type
    pub const TRAINING: &str = "training";
    /// Distance in kilometres
    pub const DISTANCE: &str = "distance";
    /// Target heart rate as percentage of maximum
    pub const HEARTRATE: &str = "heartrate";
    /// Free-text notes
    pub const DETAILS: &str = "details";

    /// Every column a plan must provide
    pub const REQUIRED: [&str; 6] = [WEEK, DAY, TRAINING, DISTANCE, HEARTRATE, DETAILS];
}

/// Accepted input file extensions
pub mod formats {
    /// Delimited text with a header row
    pub const CSV_EXTENSION: &str = "csv";
    /// Office Open XML workbook, first sheet
    pub const XLSX_EXTENSION: &str = "xlsx";
}

/// Calendar output identity
pub mod calendar {
    /// `PRODID` written into every calendar
    pub const PRODUCT_ID: &str = "-//Training Plan//example.com//";
    /// `VERSION` written into every calendar
    pub const VERSION: &str = "2.0";
    /// Output file name prefix, followed by the start date
    pub const FILE_PREFIX: &str = "Laufplan_";
    /// Output file extension
    pub const FILE_EXTENSION: &str = "ics";
    /// Host part used when deriving event UIDs
    pub const UID_DOMAIN: &str = "laufplan";
}

/// Date handling
pub mod dates {
    /// Accepted start date format
    pub const START_DATE_FORMAT: &str = "%Y-%m-%d";
    /// Days per training week
    pub const DAYS_PER_WEEK: u64 = 7;
}

/// Environment variable names read by the configuration layer
pub mod env_config {
    /// Event title prefix
    pub const TITLE_PREFIX: &str = "LAUFPLAN_TITLE_PREFIX";
    /// Directory the calendar file is written to
    pub const OUTPUT_DIR: &str = "LAUFPLAN_OUTPUT_DIR";
    /// Language tag selecting a built-in message catalog
    pub const LANGUAGE: &str = "LAUFPLAN_LANG";
    /// Fallback language variable
    pub const SYSTEM_LANGUAGE: &str = "LANG";
    /// JSON message catalog overriding built-in texts
    pub const MESSAGES_FILE: &str = "LAUFPLAN_MESSAGES";
}

/// Service identity for logging
pub mod service_names {
    /// Binary and service name
    pub const LAUFPLAN: &str = "laufplan";
}
