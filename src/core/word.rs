//! Guess word representation
//!
//! A Word stores a validated 5-letter word as it travels between the user,
//! the round history, and the solver service.

use super::feedback::WORD_LENGTH;
use std::fmt;

/// A validated 5-letter lowercase word
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Word {
    text: String,
    chars: [u8; WORD_LENGTH],
}

/// Error type for invalid words
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WordError {
    InvalidLength(usize),
    NonAscii,
    InvalidCharacters,
}

impl fmt::Display for WordError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidLength(len) => {
                write!(f, "Word must be exactly 5 letters, got {len}")
            }
            Self::NonAscii => write!(f, "Word must contain only ASCII letters"),
            Self::InvalidCharacters => write!(f, "Word contains invalid characters"),
        }
    }
}

impl std::error::Error for WordError {}

impl Word {
    /// Create a new Word from a string
    ///
    /// # Errors
    /// Returns `WordError` if:
    /// - Length is not exactly 5
    /// - Contains non-ASCII characters
    /// - Contains non-alphabetic characters
    ///
    /// # Examples
    /// ```
    /// use wordle_assistant::core::Word;
    ///
    /// let word = Word::new("crane").unwrap();
    /// assert_eq!(word.text(), "crane");
    ///
    /// assert!(Word::new("too long").is_err());
    /// assert!(Word::new("sh0rt").is_err());
    /// ```
    ///
    /// # Panics
    /// Will not panic - the `expect()` call is guaranteed safe by length validation.
    pub fn new(text: impl Into<String>) -> Result<Self, WordError> {
        let text: String = text.into().to_lowercase();

        // Validate length
        if text.len() != WORD_LENGTH {
            return Err(WordError::InvalidLength(text.len()));
        }

        // Validate ASCII and alphabetic
        if !text.is_ascii() {
            return Err(WordError::NonAscii);
        }

        if !text.chars().all(|c| c.is_ascii_lowercase()) {
            return Err(WordError::InvalidCharacters);
        }

        // Convert to bytes - safe to unwrap as we validated length == 5
        let chars: [u8; WORD_LENGTH] = text
            .as_bytes()
            .try_into()
            .expect("length already validated");

        Ok(Self { text, chars })
    }

    /// Get the word as a string slice
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Get the word as a byte array
    #[inline]
    #[must_use]
    pub const fn chars(&self) -> &[u8; WORD_LENGTH] {
        &self.chars
    }

    /// Get the character at a specific position (0-4)
    ///
    /// # Panics
    /// Panics if position >= 5
    #[inline]
    #[must_use]
    pub const fn char_at(&self, position: usize) -> u8 {
        self.chars[position]
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn word_creation_valid() {
        let word = Word::new("crane").unwrap();
        assert_eq!(word.text(), "crane");
        assert_eq!(word.chars(), b"crane");
    }

    #[test]
    fn word_creation_uppercase_normalized() {
        let word = Word::new("CRANE").unwrap();
        assert_eq!(word.text(), "crane");

        let word2 = Word::new("CrAnE").unwrap();
        assert_eq!(word2.text(), "crane");
    }

    #[test]
    fn word_creation_invalid_length() {
        assert!(matches!(
            Word::new("too long"),
            Err(WordError::InvalidLength(8))
        ));
        assert!(matches!(
            Word::new("shrt"),
            Err(WordError::InvalidLength(4))
        ));
        assert!(matches!(Word::new(""), Err(WordError::InvalidLength(0))));
    }

    #[test]
    fn word_creation_invalid_characters() {
        assert!(Word::new("cran3").is_err()); // Number
        assert!(Word::new("cran ").is_err()); // Space
        assert!(Word::new("cran!").is_err()); // Punctuation
    }

    #[test]
    fn word_char_at() {
        let word = Word::new("crane").unwrap();
        assert_eq!(word.char_at(0), b'c');
        assert_eq!(word.char_at(1), b'r');
        assert_eq!(word.char_at(2), b'a');
        assert_eq!(word.char_at(3), b'n');
        assert_eq!(word.char_at(4), b'e');
    }

    #[test]
    fn word_display() {
        let word = Word::new("crane").unwrap();
        assert_eq!(format!("{word}"), "crane");
    }

    #[test]
    fn word_equality() {
        let word1 = Word::new("crane").unwrap();
        let word2 = Word::new("crane").unwrap();
        let word3 = Word::new("CRANE").unwrap();
        let word4 = Word::new("slate").unwrap();

        assert_eq!(word1, word2);
        assert_eq!(word1, word3); // Case insensitive
        assert_ne!(word1, word4);
    }
}
