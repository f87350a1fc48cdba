//! Terminal output formatting
//!
//! Display utilities for the line-based interactive mode.

pub mod formatters;

pub use formatters::{feedback_to_emoji, round_line};
