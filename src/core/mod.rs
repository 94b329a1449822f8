//! Core domain types for hangman
//!
//! This module contains the round state machine and the types it operates on.
//! Nothing here performs I/O; every failure is a typed value.

mod pattern;
mod session;
mod stats;
mod word;

pub use pattern::{PLACEHOLDER, RevealPattern};
pub use session::{GameSession, GuessError, GuessResult, MAX_TRIES, Outcome, start_new_round};
pub use stats::Statistics;
pub use word::{SecretWord, WordError};
