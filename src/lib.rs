//! Hangman
//!
//! A terminal hangman game. Words come from a remote word service with a
//! fallback to a local word file.
//!
//! # Quick Start
//!
//! ```rust
//! use hangman::core::{GameSession, Outcome, SecretWord};
//!
//! let mut session = GameSession::new(SecretWord::new("apple").unwrap());
//! for letter in ["a", "p", "l", "e"] {
//!     session.submit_guess(letter).unwrap();
//! }
//! assert_eq!(session.pattern().to_string(), "APPLE");
//! assert_eq!(session.outcome(), Outcome::Won);
//! ```

// Core domain types
pub mod core;

// Word sources
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;

// Logger setup
pub mod logging;
