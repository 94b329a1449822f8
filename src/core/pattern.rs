//! Reveal pattern representation
//!
//! The pattern is what the player sees of the secret word: one slot per letter,
//! each either revealed or hidden behind the placeholder symbol.

use super::SecretWord;
use std::fmt;

/// Symbol shown for letters that have not been revealed yet
pub const PLACEHOLDER: char = '_';

/// Partially revealed rendering of a secret word
///
/// Slots hold `Some(letter)` once revealed. Only correct guesses mutate it.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RevealPattern {
    slots: Vec<Option<char>>,
}

impl RevealPattern {
    /// Create a fully hidden pattern for `word`
    ///
    /// # Examples
    /// ```
    /// use hangman::core::{RevealPattern, SecretWord};
    ///
    /// let word = SecretWord::new("cat").unwrap();
    /// let pattern = RevealPattern::hidden(&word);
    /// assert_eq!(pattern.to_string(), "___");
    /// assert!(!pattern.is_complete());
    /// ```
    #[must_use]
    pub fn hidden(word: &SecretWord) -> Self {
        Self {
            slots: vec![None; word.len()],
        }
    }

    /// Reveal `letter` at every position it occupies in `word`
    ///
    /// Returns the number of slots that changed from hidden to revealed.
    pub(crate) fn reveal(&mut self, word: &SecretWord, letter: char) -> usize {
        let mut revealed = 0;
        for &pos in word.positions_of(letter) {
            if let Some(slot) = self.slots.get_mut(pos)
                && slot.is_none()
            {
                *slot = Some(letter);
                revealed += 1;
            }
        }
        revealed
    }

    /// True once no placeholder remains
    #[inline]
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.slots.iter().all(Option::is_some)
    }

    /// Number of slots
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// True for a zero-length pattern, which a valid secret word never produces
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Iterate over the displayed characters, placeholders included
    pub fn chars(&self) -> impl Iterator<Item = char> + '_ {
        self.slots
            .iter()
            .map(|slot| slot.unwrap_or(PLACEHOLDER))
    }

    /// Render with a space between slots (`C _ T`)
    #[must_use]
    pub fn spaced(&self) -> String {
        let mut out = String::with_capacity(self.slots.len() * 2);
        for (i, ch) in self.chars().enumerate() {
            if i > 0 {
                out.push(' ');
            }
            out.push(ch);
        }
        out
    }
}

impl fmt::Display for RevealPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for ch in self.chars() {
            write!(f, "{ch}")?;
        }
        Ok(())
    }
}
