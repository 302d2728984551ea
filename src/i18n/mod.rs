// ABOUTME: Message catalog abstraction for every user-visible text
// ABOUTME: Keys resolve through injected catalogs, falling back to source-language text
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Laufplan Contributors

//! # Localised Messages
//!
//! Every prompt, label and status line is addressed by a [`MessageKey`]. A
//! [`Messages`] value holds a stack of [`MessageCatalog`]s; the most recently
//! added catalog wins, and keys no catalog translates fall back to the English
//! source text.
//!
//! Texts may contain `{name}` placeholders filled by [`Messages::render`].

/// Built-in and file-backed catalogs
pub mod catalogs;

pub use catalogs::{BuiltinCatalog, JsonCatalog};

use std::fmt;

/// Identifier of a user-visible text
#[non_exhaustive]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum MessageKey {
    /// Program description shown by `--help`
    AppDescription,
    /// Help text of the input file argument
    InputFileHelp,
    /// Prompt for the maximum heart rate
    PromptMaxHeartRate,
    /// Prompt for the plan start date
    PromptStartDate,
    /// Prefix placed before every event title, empty by default
    TitlePrefix,
    /// Label of the heart rate description line
    HeartRateLabel,
    /// Label of the distance description line
    DistanceLabel,
    /// Shown instead of a zone name when the percentage has no zone
    NoZone,
    /// Success line, placeholder `{ical_filename}`
    Generated,
    /// Start date moved forward, placeholders `{requested}` and `{start}`
    StartMoved,
    /// Failure line, placeholder `{error}`
    ErrorLine,
}

impl MessageKey {
    /// Every key, in declaration order
    pub const ALL: [Self; 11] = [
        Self::AppDescription,
        Self::InputFileHelp,
        Self::PromptMaxHeartRate,
        Self::PromptStartDate,
        Self::TitlePrefix,
        Self::HeartRateLabel,
        Self::DistanceLabel,
        Self::NoZone,
        Self::Generated,
        Self::StartMoved,
        Self::ErrorLine,
    ];

    /// Stable identifier used in catalog files
    #[must_use]
    pub const fn id(&self) -> &'static str {
        match self {
            Self::AppDescription => "app.description",
            Self::InputFileHelp => "app.input_file_help",
            Self::PromptMaxHeartRate => "prompt.max_heart_rate",
            Self::PromptStartDate => "prompt.start_date",
            Self::TitlePrefix => "event.title_prefix",
            Self::HeartRateLabel => "event.heart_rate",
            Self::DistanceLabel => "event.distance",
            Self::NoZone => "event.no_zone",
            Self::Generated => "status.generated",
            Self::StartMoved => "status.start_moved",
            Self::ErrorLine => "status.error",
        }
    }

    /// Source-language (English) text
    #[must_use]
    pub const fn source_text(&self) -> &'static str {
        match self {
            Self::AppDescription => {
                "Convert a training plan for running from CSV or Excel to an iCal calendar file."
            }
            Self::InputFileHelp => "CSV or Excel file containing the training plan",
            Self::PromptMaxHeartRate => "Enter your maximum heart rate (in bpm): ",
            Self::PromptStartDate => "Enter the start date (format: yyyy-mm-dd): ",
            Self::TitlePrefix => "",
            Self::HeartRateLabel => "Heart rate",
            Self::DistanceLabel => "Distance",
            Self::NoZone => "No zone",
            Self::Generated => {
                "Generated iCal file '{ical_filename}' based on the provided training plan."
            }
            Self::StartMoved => "Start date {requested} is not a Monday, the plan starts on {start}.",
            Self::ErrorLine => "Error: {error}",
        }
    }

    /// Look a key up by its catalog identifier
    #[must_use]
    pub fn from_id(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|key| key.id() == id)
    }
}

impl fmt::Display for MessageKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

/// Source of translated texts
pub trait MessageCatalog: Send + Sync {
    /// Language tag of the catalog (e.g. "de")
    fn language(&self) -> &str;

    /// Translation of `key`, `None` when the catalog has no entry
    fn lookup(&self, key: MessageKey) -> Option<&str>;
}

/// Layered message lookup with source-language fallback
#[derive(Default)]
pub struct Messages {
    catalogs: Vec<Box<dyn MessageCatalog>>,
}

impl Messages {
    /// Messages without any catalog: every key renders its source text
    #[must_use]
    pub fn source() -> Self {
        Self::default()
    }

    /// Add a catalog that takes precedence over those added before
    #[must_use]
    pub fn with_catalog(mut self, catalog: impl MessageCatalog + 'static) -> Self {
        self.catalogs.push(Box::new(catalog));
        self
    }

    /// Language of the highest-priority catalog, "en" without catalogs
    #[must_use]
    pub fn language(&self) -> &str {
        self.catalogs
            .last()
            .map_or("en", |catalog| catalog.language())
    }

    /// Text for `key`
    #[must_use]
    pub fn text(&self, key: MessageKey) -> &str {
        self.catalogs
            .iter()
            .rev()
            .find_map(|catalog| catalog.lookup(key))
            .unwrap_or_else(|| key.source_text())
    }

    /// Text for `key` with `{name}` placeholders replaced from `args`
    #[must_use]
    pub fn render(&self, key: MessageKey, args: &[(&str, &str)]) -> String {
        args.iter()
            .fold(self.text(key).to_owned(), |text, (name, value)| {
                text.replace(&format!("{{{name}}}"), value)
            })
    }
}

impl fmt::Debug for Messages {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let languages: Vec<&str> = self.catalogs.iter().map(|c| c.language()).collect();
        f.debug_struct("Messages")
            .field("catalogs", &languages)
            .finish()
    }
}
