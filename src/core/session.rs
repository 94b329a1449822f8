//! Game session state machine
//!
//! One `GameSession` owns everything about a single round: the secret word,
//! the reveal pattern, the guessed letters, and the remaining tries. The round
//! outcome is always recomputed from the pattern and tries, never stored.

use super::word::uppercase_letter;
use super::{RevealPattern, SecretWord};
use log::debug;
use std::collections::BTreeSet;
use std::fmt;
use thiserror::Error;

/// Number of wrong guesses allowed before the round is lost
pub const MAX_TRIES: u8 = 6;

/// Outcome of a round
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Outcome {
    InProgress,
    Won,
    Lost,
}

impl Outcome {
    /// True for `Won` and `Lost`
    #[inline]
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::Won | Self::Lost)
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InProgress => write!(f, "in progress"),
            Self::Won => write!(f, "won"),
            Self::Lost => write!(f, "lost"),
        }
    }
}

/// Rejected guesses. Session state is left untouched in every case.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GuessError {
    #[error("the round is already {0}")]
    SessionTerminated(Outcome),
    #[error("{0:?} is not a single letter")]
    InvalidGuess(String),
    #[error("letter '{0}' was already guessed")]
    DuplicateGuess(char),
}

/// Result of an accepted guess
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GuessResult {
    /// The normalized (uppercase) letter
    pub letter: char,
    pub hit: bool,
    /// Number of positions this guess revealed
    pub revealed: usize,
    pub pattern: RevealPattern,
    /// Guessed letters in alphabetical order
    pub guessed: Vec<char>,
    pub tries_remaining: u8,
    pub outcome: Outcome,
}

/// A single round of hangman
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameSession {
    secret: SecretWord,
    pattern: RevealPattern,
    guessed: BTreeSet<char>,
    tries_remaining: u8,
}

/// Begin a fresh round with `word`
///
/// Equivalent to [`GameSession::new`]; a new round always replaces the previous
/// session value.
#[must_use]
pub fn start_new_round(word: SecretWord) -> GameSession {
    GameSession::new(word)
}

impl GameSession {
    /// Create a session in the `InProgress` state
    ///
    /// # Examples
    /// ```
    /// use hangman::core::{GameSession, Outcome, SecretWord};
    ///
    /// let mut session = GameSession::new(SecretWord::new("cat").unwrap());
    /// let result = session.submit_guess("c").unwrap();
    /// assert!(result.hit);
    /// assert_eq!(result.pattern.to_string(), "C__");
    /// assert_eq!(result.outcome, Outcome::InProgress);
    /// ```
    #[must_use]
    pub fn new(secret: SecretWord) -> Self {
        let pattern = RevealPattern::hidden(&secret);
        Self {
            secret,
            pattern,
            guessed: BTreeSet::new(),
            tries_remaining: MAX_TRIES,
        }
    }

    /// Submit one guess
    ///
    /// Validation runs in order: terminal session, single letter, not already
    /// guessed. The input is not trimmed; front ends strip line endings. A hit reveals every occurrence of the letter; a miss
    /// costs one try.
    ///
    /// # Errors
    /// - `SessionTerminated` if the round is already won or lost
    /// - `InvalidGuess` if the input is not exactly one letter, or its uppercase
    ///   form is more than one char
    /// - `DuplicateGuess` if the letter was submitted before this round
    pub fn submit_guess(&mut self, input: &str) -> Result<GuessResult, GuessError> {
        let outcome = self.outcome();
        if outcome.is_terminal() {
            return Err(GuessError::SessionTerminated(outcome));
        }

        let letter = parse_letter(input)?;
        if self.guessed.contains(&letter) {
            return Err(GuessError::DuplicateGuess(letter));
        }

        self.guessed.insert(letter);

        let hit = self.secret.has_letter(letter);
        let revealed = if hit {
            self.pattern.reveal(&self.secret, letter)
        } else {
            self.tries_remaining = self.tries_remaining.saturating_sub(1);
            0
        };

        let outcome = self.outcome();
        debug!(
            "guess {letter}: hit={hit} revealed={revealed} pattern={} tries={} outcome={outcome:?}",
            self.pattern, self.tries_remaining
        );

        Ok(GuessResult {
            letter,
            hit,
            revealed,
            pattern: self.pattern.clone(),
            guessed: self.guessed_letters(),
            tries_remaining: self.tries_remaining,
            outcome,
        })
    }

    /// Current outcome, derived from pattern and tries
    ///
    /// The win check runs first, so a completed pattern always wins.
    #[must_use]
    pub fn outcome(&self) -> Outcome {
        if self.pattern.is_complete() {
            Outcome::Won
        } else if self.tries_remaining == 0 {
            Outcome::Lost
        } else {
            Outcome::InProgress
        }
    }

    #[inline]
    #[must_use]
    pub fn is_over(&self) -> bool {
        self.outcome().is_terminal()
    }

    #[inline]
    #[must_use]
    pub fn secret(&self) -> &SecretWord {
        &self.secret
    }

    #[inline]
    #[must_use]
    pub fn pattern(&self) -> &RevealPattern {
        &self.pattern
    }

    /// Guessed letters in alphabetical order
    #[must_use]
    pub fn guessed_letters(&self) -> Vec<char> {
        self.guessed.iter().copied().collect()
    }

    #[inline]
    #[must_use]
    pub fn tries_remaining(&self) -> u8 {
        self.tries_remaining
    }

    /// Wrong guesses so far (0..=`MAX_TRIES`)
    #[inline]
    #[must_use]
    pub fn wrong_guesses(&self) -> u8 {
        MAX_TRIES - self.tries_remaining
    }
}

fn parse_letter(input: &str) -> Result<char, GuessError> {
    let mut chars = input.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => uppercase_letter(c),
        _ => None,
    }
    .ok_or_else(|| GuessError::InvalidGuess(input.to_string()))
}
