// ABOUTME: Logging configuration and structured logging setup
// ABOUTME: Env-driven level and format, output on stderr so prompts stay readable
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Laufplan Contributors

//! Structured logging configuration
//!
//! Logs are written to stderr; stdout carries prompts and the final status
//! line only.

use crate::constants::service_names;
use anyhow::Result;
use std::env;
use std::fmt;
use std::io;
use tracing::debug;
use tracing_subscriber::{fmt as subscriber_fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Strongly typed log level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogLevel {
    /// Failures only
    Error,
    /// Failures and warnings (CLI default)
    #[default]
    Warn,
    /// Pipeline progress
    Info,
    /// Per-stage details
    Debug,
    /// Everything
    Trace,
}

impl LogLevel {
    /// Parse from string with fallback to the default
    #[must_use]
    pub fn from_str_or_default(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "error" => Self::Error,
            "info" => Self::Info,
            "debug" => Self::Debug,
            "trace" => Self::Trace,
            _ => Self::Warn,
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Error => write!(f, "error"),
            Self::Warn => write!(f, "warn"),
            Self::Info => write!(f, "info"),
            Self::Debug => write!(f, "debug"),
            Self::Trace => write!(f, "trace"),
        }
    }
}

/// Log output format options
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    /// `JSON` lines for machine consumption
    Json,
    /// Multi-field human readable output
    Pretty,
    /// Single-line output (CLI default)
    #[default]
    Compact,
}

/// Logging configuration
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    /// Log level applied to this crate
    pub level: LogLevel,
    /// Raw `RUST_LOG` directive, overrides `level` when present
    pub directive: Option<String>,
    /// Output format
    pub format: LogFormat,
    /// Include source file and line numbers
    pub include_location: bool,
    /// Service name for structured logging
    pub service_name: String,
    /// Service version
    pub service_version: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: LogLevel::default(),
            directive: None,
            format: LogFormat::default(),
            include_location: false,
            service_name: service_names::LAUFPLAN.into(),
            service_version: env!("CARGO_PKG_VERSION").to_owned(),
        }
    }
}

impl LoggingConfig {
    /// Create logging configuration from environment variables
    ///
    /// `RUST_LOG` sets the filter, `LOG_FORMAT` (`json`, `pretty`, `compact`)
    /// the format, and `LOG_INCLUDE_LOCATION` adds file and line.
    #[must_use]
    pub fn from_env() -> Self {
        let directive = env::var("RUST_LOG").ok().filter(|d| !d.trim().is_empty());
        let level = directive
            .as_deref()
            .map(LogLevel::from_str_or_default)
            .unwrap_or_default();

        let format = match env::var("LOG_FORMAT").as_deref() {
            Ok("json") => LogFormat::Json,
            Ok("pretty") => LogFormat::Pretty,
            _ => LogFormat::Compact,
        };

        Self {
            level,
            directive,
            format,
            include_location: env::var("LOG_INCLUDE_LOCATION").is_ok(),
            ..Self::default()
        }
    }

    /// Use `level` regardless of `RUST_LOG`
    #[must_use]
    pub fn with_level(mut self, level: LogLevel) -> Self {
        self.level = level;
        self.directive = None;
        self
    }

    /// Filter built from the raw directive or the configured level
    #[must_use]
    pub fn env_filter(&self) -> EnvFilter {
        self.directive.as_deref().map_or_else(
            || {
                EnvFilter::new(format!(
                    "warn,laufplan={level},laufplan_core={level}",
                    level = self.level
                ))
            },
            EnvFilter::new,
        )
    }

    /// Initialize the global tracing subscriber
    ///
    /// # Errors
    ///
    /// Returns an error if a global subscriber is already installed
    pub fn init(&self) -> Result<()> {
        let registry = tracing_subscriber::registry().with(self.env_filter());

        match self.format {
            LogFormat::Json => {
                let json_layer = subscriber_fmt::layer()
                    .with_file(self.include_location)
                    .with_line_number(self.include_location)
                    .with_target(true)
                    .with_writer(io::stderr)
                    .json();
                registry.with(json_layer).try_init()?;
            }
            LogFormat::Pretty => {
                let pretty_layer = subscriber_fmt::layer()
                    .with_file(self.include_location)
                    .with_line_number(self.include_location)
                    .with_target(true)
                    .with_writer(io::stderr);
                registry.with(pretty_layer).try_init()?;
            }
            LogFormat::Compact => {
                let compact_layer = subscriber_fmt::layer()
                    .compact()
                    .with_file(self.include_location)
                    .with_line_number(self.include_location)
                    .with_target(false)
                    .with_writer(io::stderr);
                registry.with(compact_layer).try_init()?;
            }
        }

        debug!(
            service.name = %self.service_name,
            service.version = %self.service_version,
            log.level = %self.level,
            log.format = ?self.format,
            "Logging initialized"
        );
        Ok(())
    }
}

/// Initialize logging from environment
///
/// # Errors
///
/// Returns an error if logging initialization fails
pub fn init_from_env() -> Result<()> {
    LoggingConfig::from_env().init()
}
