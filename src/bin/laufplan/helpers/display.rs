// ABOUTME: Output helpers for the laufplan CLI
// ABOUTME: Localized success, notice and failure lines plus exit codes
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Laufplan Contributors

use laufplan::errors::AppError;
use laufplan::i18n::{MessageKey, Messages};
use laufplan::pipeline::PlanReport;
use laufplan::schedule::PlanContext;
use std::process::ExitCode;
use tracing::debug;

/// Tell the user the plan start was moved to the next Monday
pub fn print_start_moved(messages: &Messages, context: &PlanContext) {
    if context.requested_start() == context.start_monday() {
        return;
    }
    let requested = context.requested_start().to_string();
    let start = context.start_monday().to_string();
    println!(
        "{}",
        messages.render(
            MessageKey::StartMoved,
            &[("requested", &requested), ("start", &start)]
        )
    );
}

/// Display the success line naming the generated file
pub fn print_generated(messages: &Messages, report: &PlanReport) {
    let file_name = report.file_name();
    println!(
        "{}",
        messages.render(MessageKey::Generated, &[("ical_filename", &file_name)])
    );
}

/// Print `failure` on stderr and map it to the process exit code
pub fn report_failure(messages: &Messages, failure: &AppError) -> ExitCode {
    debug!(code = %failure.code, "{}", failure.message);
    let text = failure.to_string();
    eprintln!("{}", messages.render(MessageKey::ErrorLine, &[("error", &text)]));
    ExitCode::from(failure.exit_code())
}
