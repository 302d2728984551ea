// ABOUTME: Interactive prompts for the two per-run values
// ABOUTME: Reads maximum heart rate and start date line by line from any reader
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Laufplan Contributors

use chrono::NaiveDate;
use laufplan::errors::{AppError, AppResult};
use laufplan::i18n::{MessageKey, Messages};
use laufplan::schedule::parse_start_date;
use std::io::{BufRead, Write};

/// Asks questions on `output` and reads one answer line each from `input`
pub struct Prompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub const fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Print `prompt` and return the answer without its line ending
    fn ask(&mut self, prompt: &str) -> AppResult<String> {
        write!(self.output, "{prompt}")
            .and_then(|()| self.output.flush())
            .map_err(|e| AppError::internal("cannot write to standard output").with_source(e))?;

        let mut answer = String::new();
        let read = self
            .input
            .read_line(&mut answer)
            .map_err(|e| AppError::invalid_input("cannot read the answer").with_source(e))?;
        if read == 0 {
            return Err(AppError::invalid_input(
                "input ended before all questions were answered",
            ));
        }
        Ok(answer.trim().to_owned())
    }

    /// Maximum heart rate in bpm
    pub fn max_heart_rate(&mut self, messages: &Messages) -> AppResult<u32> {
        let answer = self.ask(messages.text(MessageKey::PromptMaxHeartRate))?;
        answer.parse::<u32>().map_err(|e| {
            AppError::invalid_input(format!(
                "maximum heart rate '{answer}' is not a whole number"
            ))
            .with_source(e)
        })
    }

    /// Plan start date as entered, not yet moved to a Monday
    pub fn start_date(&mut self, messages: &Messages) -> AppResult<NaiveDate> {
        let answer = self.ask(messages.text(MessageKey::PromptStartDate))?;
        parse_start_date(&answer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use laufplan::errors::ErrorCode;
    use std::io::Cursor;

    #[test]
    fn test_reads_both_answers() {
        let messages = Messages::source();
        let mut output = Vec::new();
        let mut prompter = Prompter::new(Cursor::new("190\n 2024-01-03 \n"), &mut output);

        assert_eq!(prompter.max_heart_rate(&messages).unwrap(), 190);
        assert_eq!(
            prompter.start_date(&messages).unwrap(),
            NaiveDate::from_ymd_opt(2024, 1, 3).unwrap()
        );
        drop(prompter);

        let shown = String::from_utf8(output).unwrap();
        assert!(shown.starts_with("Enter your maximum heart rate (in bpm): "));
    }

    #[test]
    fn test_invalid_and_missing_answers() {
        let messages = Messages::source();
        let mut prompter = Prompter::new(Cursor::new("fast\n"), Vec::new());
        let error = prompter.max_heart_rate(&messages).unwrap_err();
        assert_eq!(error.code, ErrorCode::InvalidInput);

        let error = prompter.start_date(&messages).unwrap_err();
        assert_eq!(error.code, ErrorCode::InvalidInput);
    }
}
