// ABOUTME: Built-in translation tables and JSON catalog files
// ABOUTME: German ships with the binary, any language can be loaded from disk
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Laufplan Contributors

use super::{MessageCatalog, MessageKey};
use crate::errors::{AppError, AppResult, ErrorCode};
use std::collections::{BTreeMap, HashMap};
use std::fs;
use std::path::Path;
use tracing::{debug, warn};

const GERMAN: &[(MessageKey, &str)] = &[
    (
        MessageKey::AppDescription,
        "Wandelt einen Lauf-Trainingsplan aus CSV oder Excel in eine iCal-Kalenderdatei um.",
    ),
    (
        MessageKey::InputFileHelp,
        "CSV- oder Excel-Datei mit dem Trainingsplan",
    ),
    (
        MessageKey::PromptMaxHeartRate,
        "Gib deine maximale Herzfrequenz ein (in bpm): ",
    ),
    (
        MessageKey::PromptStartDate,
        "Gib das Startdatum ein (Format: jjjj-mm-tt): ",
    ),
    (MessageKey::HeartRateLabel, "Herzfrequenz"),
    (MessageKey::DistanceLabel, "Distanz"),
    (MessageKey::NoZone, "Keine Zone"),
    (
        MessageKey::Generated,
        "iCal-Datei '{ical_filename}' aus dem Trainingsplan erstellt.",
    ),
    (
        MessageKey::StartMoved,
        "Das Startdatum {requested} ist kein Montag, der Plan beginnt am {start}.",
    ),
    (MessageKey::ErrorLine, "Fehler: {error}"),
];

/// Translation table compiled into the binary
#[derive(Debug, Clone, Copy)]
pub struct BuiltinCatalog {
    language: &'static str,
    entries: &'static [(MessageKey, &'static str)],
}

impl BuiltinCatalog {
    /// Built-in catalog for a language tag such as `de`, `de_DE.UTF-8` or `de-AT`
    ///
    /// Returns `None` for English and for languages without a built-in table.
    #[must_use]
    pub fn for_language(tag: &str) -> Option<Self> {
        match primary_subtag(tag).as_str() {
            "de" => Some(Self {
                language: "de",
                entries: GERMAN,
            }),
            _ => None,
        }
    }
}

impl MessageCatalog for BuiltinCatalog {
    fn language(&self) -> &str {
        self.language
    }

    fn lookup(&self, key: MessageKey) -> Option<&str> {
        self.entries
            .iter()
            .find(|(entry_key, _)| *entry_key == key)
            .map(|(_, text)| *text)
    }
}

/// Catalog read from a JSON object of `"key.id": "text"` pairs
#[derive(Debug, Clone, Default)]
pub struct JsonCatalog {
    language: String,
    entries: HashMap<MessageKey, String>,
}

impl JsonCatalog {
    /// Parse catalog JSON; unknown identifiers are skipped with a warning
    ///
    /// # Errors
    ///
    /// Returns `ErrorCode::ConfigInvalid` if the text is not a JSON object of strings
    pub fn from_json(language: impl Into<String>, json: &str) -> AppResult<Self> {
        let raw: BTreeMap<String, String> = serde_json::from_str(json).map_err(|e| {
            AppError::new(
                ErrorCode::ConfigInvalid,
                format!("message catalog is not a JSON object of strings: {e}"),
            )
            .with_source(e)
        })?;

        let mut entries = HashMap::with_capacity(raw.len());
        for (id, text) in raw {
            match MessageKey::from_id(&id) {
                Some(key) => {
                    entries.insert(key, text);
                }
                None => warn!(message.id = %id, "Ignoring unknown message catalog entry"),
            }
        }

        Ok(Self {
            language: language.into(),
            entries,
        })
    }

    /// Load a catalog file; the file stem serves as language tag
    ///
    /// # Errors
    ///
    /// Returns `ErrorCode::ConfigInvalid` if the file cannot be read or parsed
    pub fn load(path: &Path) -> AppResult<Self> {
        let json = fs::read_to_string(path).map_err(|e| {
            AppError::config(format!(
                "cannot read message catalog {}: {e}",
                path.display()
            ))
            .with_source(e)
        })?;
        let language = path
            .file_stem()
            .map_or_else(String::new, |stem| stem.to_string_lossy().into_owned());
        let catalog = Self::from_json(language, &json)?;
        debug!(
            path = %path.display(),
            entries = catalog.len(),
            "Loaded message catalog"
        );
        Ok(catalog)
    }

    /// Number of recognised entries
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when the catalog translates nothing
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl MessageCatalog for JsonCatalog {
    fn language(&self) -> &str {
        &self.language
    }

    fn lookup(&self, key: MessageKey) -> Option<&str> {
        self.entries.get(&key).map(String::as_str)
    }
}

/// Lower-cased primary language subtag: `de_DE.UTF-8` -> `de`
#[must_use]
pub fn primary_subtag(tag: &str) -> String {
    tag.split(['_', '-', '.', '@'])
        .next()
        .unwrap_or_default()
        .trim()
        .to_ascii_lowercase()
}
