//! Display functions for the line-mode front end

use super::formatters::{gallows, guessed_list, tries_bar};
use crate::core::{GameSession, GuessError, GuessResult, Outcome};
use crate::wordlists::{ResolveError, Resolution};
use colored::Colorize;
use std::io::{self, Write};

/// Print the banner shown once at startup
///
/// # Errors
///
/// Returns any error from writing to `out`.
pub fn print_banner<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out, "\n{}", "═".repeat(50).cyan())?;
    writeln!(out, "{}", "            H A N G M A N".bright_cyan().bold())?;
    writeln!(out, "{}", "═".repeat(50).cyan())?;
    writeln!(
        out,
        "Guess one letter at a time. Commands: 'new' for a new word, 'quit' to exit.\n"
    )
}

/// Print where the round's word came from, including any fallback notice
///
/// # Errors
///
/// Returns any error from writing to `out`.
pub fn print_round_start<W: Write>(out: &mut W, resolution: &Resolution) -> io::Result<()> {
    if let Some(reason) = &resolution.fallback {
        writeln!(out, "{} {reason}", "⚠".yellow().bold())?;
        writeln!(out, "  Falling back to the local word file.")?;
    }
    writeln!(
        out,
        "🔄 New round! Word chosen from the {}.\n",
        resolution.origin
    )
}

/// Print the gallows, pattern, guessed letters, and tries
///
/// # Errors
///
/// Returns any error from writing to `out`.
pub fn print_state<W: Write>(out: &mut W, session: &GameSession) -> io::Result<()> {
    writeln!(out, "{}", gallows(session.wrong_guesses()))?;
    writeln!(out, "\n   {}\n", session.pattern().spaced().bright_white().bold())?;
    writeln!(
        out,
        "Guessed: {}",
        guessed_list(&session.guessed_letters())
    )?;
    writeln!(
        out,
        "Tries:   {} ({} left)",
        tries_bar(session.tries_remaining()).red(),
        session.tries_remaining()
    )
}

/// Print feedback for an accepted guess
///
/// # Errors
///
/// Returns any error from writing to `out`.
pub fn print_guess_result<W: Write>(out: &mut W, result: &GuessResult) -> io::Result<()> {
    if result.hit {
        let times = match result.revealed {
            1 => "once".to_string(),
            n => format!("{n} times"),
        };
        writeln!(
            out,
            "{} '{}' appears {times}.",
            "✓".green().bold(),
            result.letter
        )
    } else {
        writeln!(
            out,
            "{} No '{}' in the word.",
            "✗".red().bold(),
            result.letter
        )
    }
}

/// Print why a guess was rejected
///
/// # Errors
///
/// Returns any error from writing to `out`.
pub fn print_guess_error<W: Write>(out: &mut W, err: &GuessError) -> io::Result<()> {
    let text = match err {
        GuessError::InvalidGuess(_) => "Please enter a single letter.".to_string(),
        GuessError::DuplicateGuess(letter) => {
            format!("You have already guessed the letter '{letter}'.")
        }
        GuessError::SessionTerminated(_) => {
            "The round is over. Type 'new' to play again.".to_string()
        }
    };
    writeln!(out, "{} {text}", "!".yellow().bold())
}

/// Print the end-of-round message revealing the word
///
/// Does nothing while the round is still in progress.
///
/// # Errors
///
/// Returns any error from writing to `out`.
pub fn print_outcome<W: Write>(out: &mut W, session: &GameSession) -> io::Result<()> {
    match session.outcome() {
        Outcome::Won => writeln!(
            out,
            "\n{} You guessed the word: {}\n",
            "🎉 Congratulations!".bright_green().bold(),
            session.secret().text().bright_yellow().bold()
        ),
        Outcome::Lost => writeln!(
            out,
            "\n{} The word was: {}\n",
            "💀 You lost!".bright_red().bold(),
            session.secret().text().bright_yellow().bold()
        ),
        Outcome::InProgress => Ok(()),
    }
}

/// Print a fatal resolution error
///
/// # Errors
///
/// Returns any error from writing to `out`.
pub fn print_resolve_error<W: Write>(out: &mut W, err: &ResolveError) -> io::Result<()> {
    let headline = match err {
        ResolveError::SourceNotFound(_) => "Word file not found!",
        ResolveError::SourceEmpty(_) => "Word file is empty!",
        ResolveError::SourceUnreadable { .. } | ResolveError::RemoteUnavailable(_) => {
            "Could not load a word!"
        }
    };
    writeln!(out, "{} {err}", headline.red().bold())?;
    writeln!(out, "Cannot start a round. Type 'new' to retry or 'quit' to exit.")
}
