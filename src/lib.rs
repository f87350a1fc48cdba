//! Wordle Assistant
//!
//! An interactive assistant for the daily Wordle puzzle: it fetches a
//! best-guess word from a remote solver service, lets you mark each letter
//! with the colors your puzzle showed, and submits that status to obtain
//! the next guess.
//!
//! # Quick Start
//!
//! ```rust
//! use wordle_assistant::game::GameSession;
//!
//! let mut session = GameSession::new();
//! let epoch = session.new_game();
//! session
//!     .resolve_first_guess(epoch, Ok("crane".to_string()))
//!     .unwrap();
//!
//! // Tap the first letter twice: Unset -> Present -> Correct
//! session.tap_cell(0);
//! session.tap_cell(0);
//! assert_eq!(session.rounds()[0].clue(), "gxxxx");
//! ```

// Core domain types
pub mod core;

// Game-session state machine
pub mod game;

// Remote solver boundary
pub mod solver;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
