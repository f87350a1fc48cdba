//! Wire types for the solver service
//!
//! The solver consumes the round history as an ordered JSON array of
//! `{word, clue}` pairs and answers with its next best guess.

use crate::game::GuessHistory;
use serde::{Deserialize, Serialize};

/// One round as the solver sees it: the guessed word and its 5-char clue
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GuessClue {
    pub word: String,
    pub clue: String,
}

/// The solver's reply
#[derive(Debug, Clone, Deserialize)]
pub struct SolverResponse {
    pub guess: String,
}

/// Project the history into the request payload
///
/// Every frozen round is included with the clue it was submitted with. The
/// open round is included only when every cell has been evaluated - a clue
/// whose `x` merely means "not looked at yet" would feed the solver false
/// negative information, so an incomplete open round is left out entirely.
#[must_use]
pub fn build_payload(history: &GuessHistory) -> Vec<GuessClue> {
    history
        .rounds()
        .iter()
        .enumerate()
        .filter(|(i, round)| !history.is_open(*i) || round.is_complete())
        .map(|(_, round)| GuessClue {
            word: round.guess().text().to_string(),
            clue: round.clue(),
        })
        .collect()
}
