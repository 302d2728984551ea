// ABOUTME: Integration tests for installing the global tracing subscriber
// ABOUTME: Runs in its own process so the human readable format can be installed once
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Laufplan Contributors

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use laufplan::logging::{LogFormat, LogLevel, LoggingConfig};
use tracing::info;

#[test]
fn test_pretty_format_installs_once() {
    let config = LoggingConfig {
        format: LogFormat::Pretty,
        include_location: true,
        ..LoggingConfig::default()
    }
    .with_level(LogLevel::Info);

    config.init().unwrap();
    info!(events = 3, "Plan converted");

    assert!(config.init().is_err(), "second install must be rejected");
}
