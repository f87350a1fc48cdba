//! Formatting utilities for terminal output

use crate::core::{LetterStatus, WORD_LENGTH};
use crate::game::Round;
use colored::Colorize;

/// Format a feedback row as emoji squares
#[must_use]
pub fn feedback_to_emoji(feedback: &[LetterStatus; WORD_LENGTH]) -> String {
    feedback
        .iter()
        .map(|status| match status {
            LetterStatus::Correct => '🟩',
            LetterStatus::Present => '🟨',
            LetterStatus::Absent | LetterStatus::Unset => '⬜',
        })
        .collect()
}

/// Format a round as a colored board line
///
/// Each letter is rendered as a cell tinted by its status: green for
/// correct, yellow for present, plain for absent or unset.
#[must_use]
pub fn round_line(round: &Round) -> String {
    let mut line = String::new();
    for (i, &byte) in round.guess().chars().iter().enumerate() {
        let cell = format!(" {} ", (byte as char).to_ascii_uppercase());
        let colored_cell = match round.status_at(i) {
            LetterStatus::Correct => cell.black().on_green().bold().to_string(),
            LetterStatus::Present => cell.black().on_yellow().bold().to_string(),
            LetterStatus::Absent | LetterStatus::Unset => cell.bold().to_string(),
        };
        line.push_str(&colored_cell);
        if i + 1 < WORD_LENGTH {
            line.push(' ');
        }
    }
    line
}
