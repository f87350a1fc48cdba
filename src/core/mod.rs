//! Core domain types for the Wordle assistant
//!
//! This module contains the fundamental domain types with zero external dependencies.
//! All types here are pure, testable, and have clear mathematical properties.

mod feedback;
mod word;

pub use feedback::{LetterStatus, WINNING_CLUE, WORD_LENGTH, serialize_clue};
pub use word::{Word, WordError};
