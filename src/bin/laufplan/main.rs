// ABOUTME: Laufplan CLI - converts a training plan file into an iCalendar file
// ABOUTME: Prompts for maximum heart rate and start date, then runs the plan pipeline
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Laufplan Contributors
//!
//! Usage:
//! ```bash
//! # Convert a CSV plan, answering the two prompts interactively
//! laufplan plan.csv
//!
//! # Convert an Excel plan with German texts into another directory
//! LAUFPLAN_LANG=de LAUFPLAN_OUTPUT_DIR=~/calendars laufplan plan.xlsx
//!
//! # Non-interactive run
//! printf '190\n2024-01-01\n' | laufplan plan.csv
//! ```

mod helpers;

use clap::{CommandFactory, FromArgMatches, Parser};
use helpers::display;
use helpers::prompts::Prompter;
use laufplan::config::PlanConfig;
use laufplan::errors::AppResult;
use laufplan::i18n::{MessageKey, Messages};
use laufplan::logging;
use laufplan::pipeline::{PlanPipeline, PlanReport};
use laufplan::schedule::PlanContext;
use std::io;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::info;

#[derive(Parser)]
#[command(
    name = "laufplan",
    version,
    about = MessageKey::AppDescription.source_text()
)]
struct Cli {
    /// CSV or Excel file containing the training plan
    input_file: PathBuf,
}

impl Cli {
    /// Parse arguments with help texts taken from the message catalog
    fn parse_localized(messages: &Messages) -> Self {
        let command = Self::command()
            .about(messages.text(MessageKey::AppDescription).to_owned())
            .mut_arg("input_file", |arg| {
                arg.help(messages.text(MessageKey::InputFileHelp).to_owned())
            });
        let matches = command.get_matches();
        Self::from_arg_matches(&matches).unwrap_or_else(|e| e.exit())
    }
}

fn main() -> ExitCode {
    if let Err(e) = logging::init_from_env() {
        eprintln!("Failed to initialize logging: {e}");
    }

    let (config, messages) = match load_settings() {
        Ok((config, messages)) => (Ok(config), messages),
        Err(error) => (Err(error), Messages::source()),
    };
    let cli = Cli::parse_localized(&messages);

    let result = config.and_then(|config| run(&cli, &config, &messages));
    match result {
        Ok(report) => {
            display::print_generated(&messages, &report);
            ExitCode::SUCCESS
        }
        Err(error) => display::report_failure(&messages, &error),
    }
}

fn load_settings() -> AppResult<(PlanConfig, Messages)> {
    let config = PlanConfig::from_env()?;
    let messages = config.messages()?;
    Ok((config, messages))
}

fn run(cli: &Cli, config: &PlanConfig, messages: &Messages) -> AppResult<PlanReport> {
    info!(input = %cli.input_file.display(), "Laufplan started");
    let pipeline = PlanPipeline::new(config, messages);
    let rows = pipeline.load(&cli.input_file)?;

    let stdin = io::stdin();
    let mut prompter = Prompter::new(stdin.lock(), io::stdout());
    let max_heart_rate = prompter.max_heart_rate(messages)?;
    let start = prompter.start_date(messages)?;

    let context = PlanContext::new(max_heart_rate, start)?;
    display::print_start_moved(messages, &context);

    pipeline.convert(&rows, &context)
}
