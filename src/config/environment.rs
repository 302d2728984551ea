// ABOUTME: Environment configuration for plan conversion runs
// ABOUTME: Title prefix, output directory, language and message catalog location
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Laufplan Contributors

//! Environment-based configuration

use crate::constants::{calendar, env_config, service_names};
use crate::errors::{AppError, AppResult};
use crate::i18n::{catalogs::primary_subtag, BuiltinCatalog, JsonCatalog, MessageKey, Messages};
use chrono::NaiveDate;
use serde::Serialize;
use std::env;
use std::path::PathBuf;
use tracing::{debug, info};

/// File name of the per-user message catalog inside the config directory
const USER_MESSAGES_FILE: &str = "messages.json";

/// Settings of a conversion run
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlanConfig {
    /// Event title prefix; `None` defers to the message catalog
    pub title_prefix: Option<String>,
    /// Directory the calendar file is written to
    pub output_dir: PathBuf,
    /// Primary language subtag ("en", "de", ...)
    pub language: String,
    /// JSON catalog layered over the built-in texts
    pub messages_file: Option<PathBuf>,
}

impl Default for PlanConfig {
    fn default() -> Self {
        Self {
            title_prefix: None,
            output_dir: PathBuf::from("."),
            language: "en".into(),
            messages_file: None,
        }
    }
}

impl PlanConfig {
    /// Read configuration from environment variables
    ///
    /// - `LAUFPLAN_TITLE_PREFIX`: event title prefix
    /// - `LAUFPLAN_OUTPUT_DIR`: output directory (default `.`)
    /// - `LAUFPLAN_LANG`, then `LANG`: language of the built-in texts
    /// - `LAUFPLAN_MESSAGES`: JSON message catalog; defaults to
    ///   `<config dir>/laufplan/messages.json` when that file exists
    ///
    /// # Errors
    ///
    /// Returns `ErrorCode::ConfigInvalid` if a configured path does not exist
    pub fn from_env() -> AppResult<Self> {
        let title_prefix = env::var(env_config::TITLE_PREFIX).ok();

        let output_dir = env::var(env_config::OUTPUT_DIR)
            .ok()
            .filter(|dir| !dir.trim().is_empty())
            .map_or_else(|| PathBuf::from("."), PathBuf::from);

        let language = env::var(env_config::LANGUAGE)
            .or_else(|_| env::var(env_config::SYSTEM_LANGUAGE))
            .map(|tag| primary_subtag(&tag))
            .ok()
            .filter(|tag| !tag.is_empty() && tag != "c" && tag != "posix")
            .unwrap_or_else(|| "en".into());

        let messages_file = env::var(env_config::MESSAGES_FILE)
            .ok()
            .filter(|path| !path.trim().is_empty())
            .map(PathBuf::from)
            .or_else(user_messages_file);

        let config = Self {
            title_prefix,
            output_dir,
            language,
            messages_file,
        };
        config.validate()?;

        debug!(
            output_dir = %config.output_dir.display(),
            language = %config.language,
            messages_file = ?config.messages_file,
            "Plan configuration loaded"
        );
        Ok(config)
    }

    /// Check that configured paths are usable
    ///
    /// # Errors
    ///
    /// Returns `ErrorCode::ConfigInvalid` if the output directory or the
    /// message catalog is missing
    pub fn validate(&self) -> AppResult<()> {
        if !self.output_dir.is_dir() {
            return Err(AppError::config(format!(
                "{} '{}' is not an existing directory",
                env_config::OUTPUT_DIR,
                self.output_dir.display()
            )));
        }
        if let Some(path) = &self.messages_file {
            if !path.is_file() {
                return Err(AppError::config(format!(
                    "{} '{}' does not exist",
                    env_config::MESSAGES_FILE,
                    path.display()
                )));
            }
        }
        Ok(())
    }

    /// Build the message lookup: built-in language table, then the catalog file
    ///
    /// # Errors
    ///
    /// Returns `ErrorCode::ConfigInvalid` if the catalog file cannot be parsed
    pub fn messages(&self) -> AppResult<Messages> {
        let mut messages = Messages::source();
        if let Some(builtin) = BuiltinCatalog::for_language(&self.language) {
            messages = messages.with_catalog(builtin);
        }
        if let Some(path) = &self.messages_file {
            messages = messages.with_catalog(JsonCatalog::load(path)?);
            info!(path = %path.display(), "Using message catalog file");
        }
        Ok(messages)
    }

    /// Effective title prefix: configured value, else the catalog text
    #[must_use]
    pub fn title_prefix(&self, messages: &Messages) -> String {
        self.title_prefix
            .clone()
            .unwrap_or_else(|| messages.text(MessageKey::TitlePrefix).to_owned())
    }

    /// Calendar file name for a plan starting on `start_monday`
    #[must_use]
    pub fn output_file_name(start_monday: NaiveDate) -> String {
        format!(
            "{}{}.{}",
            calendar::FILE_PREFIX,
            start_monday.format("%Y-%m-%d"),
            calendar::FILE_EXTENSION
        )
    }

    /// Full calendar path for a plan starting on `start_monday`
    #[must_use]
    pub fn output_path(&self, start_monday: NaiveDate) -> PathBuf {
        self.output_dir.join(Self::output_file_name(start_monday))
    }
}

fn user_messages_file() -> Option<PathBuf> {
    dirs::config_dir()
        .map(|dir| dir.join(service_names::LAUFPLAN).join(USER_MESSAGES_FILE))
        .filter(|path| path.is_file())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_output_file_name() {
        let monday = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        assert_eq!(
            PlanConfig::output_file_name(monday),
            "Laufplan_2024-01-01.ics"
        );
        let config = PlanConfig {
            output_dir: PathBuf::from("/tmp/plans"),
            ..PlanConfig::default()
        };
        assert_eq!(
            config.output_path(monday),
            PathBuf::from("/tmp/plans/Laufplan_2024-01-01.ics")
        );
    }

    #[test]
    fn test_title_prefix_prefers_configured_value() {
        let messages = Messages::source();
        let config = PlanConfig {
            title_prefix: Some("Marathon".into()),
            ..PlanConfig::default()
        };
        assert_eq!(config.title_prefix(&messages), "Marathon");
        assert_eq!(PlanConfig::default().title_prefix(&messages), "");
    }

    #[test]
    fn test_validate_rejects_missing_output_dir() {
        let config = PlanConfig {
            output_dir: PathBuf::from("/definitely/not/here"),
            ..PlanConfig::default()
        };
        assert!(config.validate().is_err());
    }
}
