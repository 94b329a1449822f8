//! Secret word representation
//!
//! A `SecretWord` stores the round's word along with letter position indices so a
//! single guess can reveal every occurrence of a letter at once.

use rustc_hash::FxHashMap;
use std::fmt;
use thiserror::Error;

/// The word the player is trying to guess
///
/// Always uppercase letters, never empty. Immutable for the lifetime of a round.
/// Positions count chars, not bytes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SecretWord {
    text: String,
    len: usize,
    letter_positions: FxHashMap<char, Vec<usize>>,
}

/// Error type for text that cannot become a secret word
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WordError {
    #[error("word is empty")]
    Empty,
    #[error("word contains invalid character {0:?}")]
    InvalidCharacter(char),
}

impl SecretWord {
    /// Create a new secret word from a string
    ///
    /// Surrounding whitespace is trimmed and the word is uppercased.
    ///
    /// # Errors
    /// Returns `WordError` if:
    /// - Nothing is left after trimming
    /// - Any character is not a letter, or is a letter whose uppercase form
    ///   is more than one char (`ß`)
    ///
    /// # Examples
    /// ```
    /// use hangman::core::SecretWord;
    ///
    /// let word = SecretWord::new("apple").unwrap();
    /// assert_eq!(word.text(), "APPLE");
    ///
    /// assert_eq!(SecretWord::new("café").unwrap().text(), "CAFÉ");
    /// assert!(SecretWord::new("   ").is_err());
    /// assert!(SecretWord::new("ice cream").is_err());
    /// ```
    pub fn new(text: impl AsRef<str>) -> Result<Self, WordError> {
        let trimmed = text.as_ref().trim();

        if trimmed.is_empty() {
            return Err(WordError::Empty);
        }

        let mut text = String::with_capacity(trimmed.len());
        let mut letter_positions: FxHashMap<char, Vec<usize>> = FxHashMap::default();
        for (i, ch) in trimmed.chars().enumerate() {
            let upper = uppercase_letter(ch).ok_or(WordError::InvalidCharacter(ch))?;
            text.push(upper);
            letter_positions.entry(upper).or_default().push(i);
        }

        Ok(Self {
            len: trimmed.chars().count(),
            text,
            letter_positions,
        })
    }

    /// Get the word as a string slice
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Number of letters in the word
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Always false; kept for API symmetry with `len`
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Check if the word contains a specific uppercase letter
    #[inline]
    #[must_use]
    pub fn has_letter(&self, letter: char) -> bool {
        self.letter_positions.contains_key(&letter)
    }

    /// Get all positions where a letter appears
    ///
    /// Returns an empty slice if the letter doesn't appear.
    #[inline]
    #[must_use]
    pub fn positions_of(&self, letter: char) -> &[usize] {
        self.letter_positions
            .get(&letter)
            .map_or(&[], std::vec::Vec::as_slice)
    }
}

/// Uppercase form of `ch` if it is a letter that uppercases to a single char
///
/// Shared by word construction and guess parsing so every letter of a secret
/// word can be guessed.
pub(crate) fn uppercase_letter(ch: char) -> Option<char> {
    if !ch.is_alphabetic() {
        return None;
    }
    let mut upper = ch.to_uppercase();
    match (upper.next(), upper.next()) {
        (Some(u), None) => Some(u),
        _ => None,
    }
}

impl fmt::Display for SecretWord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}
