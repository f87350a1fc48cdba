//! Solver error taxonomy and classification
//!
//! The solver service reports failures as prose. Classification matches the
//! raw text against an ordered table of known phrasings - first match wins -
//! and anything unrecognized lands in `Unclassified`, which keeps the raw
//! text for diagnostics but is only ever shown to the user generically.

use std::fmt;

/// Closed set of failure categories for a solver exchange
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SolverError {
    /// The accumulated clues eliminate every word the solver knows
    DictionaryExhausted,
    /// The solver service could not be reached
    TransportFailure,
    /// The request state was missing, not an array, or held invalid items
    MalformedRequestBody,
    /// A submitted word failed the 5-letter alphabetic constraint
    InvalidWordCharacters,
    /// A submitted clue was not exactly 5 characters over `{g, y, x}`
    InvalidClueCharacters,
    /// The solver's returned guess was missing or malformed
    InvalidSolverResponse,
    /// Anything else; carries the raw text for diagnostics
    Unclassified(String),
}

/// Known solver phrasings, checked in priority order; first match wins.
const MATCHERS: &[(&str, SolverError)] = &[
    (
        "no remaining words in the dictionary",
        SolverError::DictionaryExhausted,
    ),
    ("Failed to fetch", SolverError::TransportFailure),
    (
        "word string property with invalid characters",
        SolverError::InvalidWordCharacters,
    ),
    (
        "clue string property with invalid characters",
        SolverError::InvalidClueCharacters,
    ),
    (
        "word string property that is 5 characters long",
        SolverError::InvalidWordCharacters,
    ),
    (
        "clue string property that is 5 characters long",
        SolverError::InvalidClueCharacters,
    ),
    (
        "string property that is 5 characters long",
        SolverError::InvalidWordCharacters,
    ),
    (
        "must have a valid state object as the HTTP body",
        SolverError::MalformedRequestBody,
    ),
    ("state must be an array", SolverError::MalformedRequestBody),
    ("is not a valid object", SolverError::MalformedRequestBody),
];

/// Classify raw solver error text into the taxonomy
///
/// # Examples
/// ```
/// use wordle_assistant::solver::{SolverError, classify};
///
/// let err = classify("there are no remaining words in the dictionary");
/// assert_eq!(err, SolverError::DictionaryExhausted);
/// ```
#[must_use]
pub fn classify(raw: &str) -> SolverError {
    for (needle, category) in MATCHERS {
        if raw.contains(needle) {
            return category.clone();
        }
    }
    SolverError::Unclassified(raw.to_string())
}

impl SolverError {
    /// Raw diagnostic text, present only for unclassified errors
    #[must_use]
    pub fn detail(&self) -> Option<&str> {
        match self {
            Self::Unclassified(raw) => Some(raw),
            _ => None,
        }
    }
}

impl fmt::Display for SolverError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let message = match self {
            Self::DictionaryExhausted => {
                "The requested items eliminate all the words in the dictionary \
                 (i.e. not solvable), please re-check your selections."
            }
            Self::TransportFailure => {
                "Failed to fetch the next guess (API may be down or there was \
                 an issue in the request)"
            }
            Self::MalformedRequestBody => {
                "The solver rejected the request body. Please provide a valid \
                 array of guesses."
            }
            Self::InvalidWordCharacters => {
                "The word field is invalid. Words must be 5 letters using only \
                 alpha characters."
            }
            Self::InvalidClueCharacters => {
                "The clue field is invalid. Clues must be 5 characters using \
                 only \"g\", \"y\", or \"x\"."
            }
            Self::InvalidSolverResponse => {
                "The solver returned an invalid guess. Please try again."
            }
            Self::Unclassified(_) => "An unexpected error occurred while talking to the solver.",
        };
        write!(f, "{message}")
    }
}

impl std::error::Error for SolverError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classifies_dictionary_exhausted() {
        let err = classify("Error: no remaining words in the dictionary for this state");
        assert_eq!(err, SolverError::DictionaryExhausted);
    }

    #[test]
    fn classifies_transport_failure() {
        assert_eq!(classify("Failed to fetch"), SolverError::TransportFailure);
    }

    #[test]
    fn classifies_malformed_body_variants() {
        assert_eq!(
            classify("request must have a valid state object as the HTTP body"),
            SolverError::MalformedRequestBody
        );
        assert_eq!(
            classify("state must be an array"),
            SolverError::MalformedRequestBody
        );
        assert_eq!(
            classify("state must be an array with 0-5 items in it"),
            SolverError::MalformedRequestBody
        );
        assert_eq!(
            classify("state item at index 0 is not a valid object"),
            SolverError::MalformedRequestBody
        );
        assert_eq!(
            classify("state item at index 3 is not a valid object"),
            SolverError::MalformedRequestBody
        );
    }

    #[test]
    fn classifies_invalid_word() {
        assert_eq!(
            classify("state item has a word string property with invalid characters"),
            SolverError::InvalidWordCharacters
        );
        assert_eq!(
            classify("state item must have a word string property that is 5 characters long"),
            SolverError::InvalidWordCharacters
        );
    }

    #[test]
    fn classifies_invalid_clue() {
        assert_eq!(
            classify("state item has a clue string property with invalid characters"),
            SolverError::InvalidClueCharacters
        );
        assert_eq!(
            classify("state item must have a clue string property that is 5 characters long"),
            SolverError::InvalidClueCharacters
        );
    }

    #[test]
    fn first_match_wins_over_later_matchers() {
        // Contains both the dictionary phrase and an array phrase; the
        // dictionary matcher sits earlier in the table.
        let err = classify("no remaining words in the dictionary; state must be an array");
        assert_eq!(err, SolverError::DictionaryExhausted);
    }

    #[test]
    fn unknown_text_falls_through_to_unclassified() {
        let err = classify("disk on fire");
        assert_eq!(err, SolverError::Unclassified("disk on fire".to_string()));
        assert_eq!(err.detail(), Some("disk on fire"));
    }

    #[test]
    fn classified_errors_carry_no_detail() {
        assert_eq!(classify("Failed to fetch").detail(), None);
    }

    #[test]
    fn every_category_has_a_distinct_message() {
        let messages: Vec<String> = [
            SolverError::DictionaryExhausted,
            SolverError::TransportFailure,
            SolverError::MalformedRequestBody,
            SolverError::InvalidWordCharacters,
            SolverError::InvalidClueCharacters,
            SolverError::InvalidSolverResponse,
            SolverError::Unclassified(String::new()),
        ]
        .iter()
        .map(ToString::to_string)
        .collect();

        for (i, a) in messages.iter().enumerate() {
            for b in &messages[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }
}
