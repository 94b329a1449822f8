//! Simple interactive CLI mode
//!
//! Line-based hangman without the TUI: one letter (or command) per line.

use crate::core::{GameSession, Statistics, start_new_round};
use crate::output::{
    print_banner, print_guess_error, print_guess_result, print_outcome, print_resolve_error,
    print_round_start, print_state,
};
use crate::wordlists::{SourceMode, WordResolver};
use indicatif::ProgressBar;
use log::debug;
use rand::Rng;
use std::io::{self, BufRead, Write};
use std::time::Duration;

/// Run the line-mode game until `quit` or end of input
///
/// Returns the tally of finished rounds.
///
/// # Errors
///
/// Returns an error if reading input or writing output fails. Word and guess
/// problems are reported to the player, never returned.
pub fn run_simple<R, W, G>(
    resolver: &WordResolver,
    rng: &mut G,
    input: &mut R,
    out: &mut W,
) -> io::Result<Statistics>
where
    R: BufRead,
    W: Write,
    G: Rng + ?Sized,
{
    let mut stats = Statistics::default();
    print_banner(out)?;
    let mut session = start_round(resolver, rng, out)?;

    loop {
        let prompt = match &session {
            Some(s) if !s.is_over() => "Guess a letter",
            _ => "Type 'new' or 'quit'",
        };
        let Some(line) = read_line(prompt, input, out)? else {
            break;
        };

        match line.to_lowercase().as_str() {
            "quit" | "exit" => {
                writeln!(out, "\n👋 Thanks for playing!\n")?;
                break;
            }
            "new" => {
                session = start_round(resolver, rng, out)?;
                continue;
            }
            _ => {}
        }

        let Some(s) = session.as_mut() else {
            writeln!(out, "No round in progress. Type 'new' to retry or 'quit' to exit.")?;
            continue;
        };

        match s.submit_guess(&line) {
            Ok(result) => {
                print_guess_result(out, &result)?;
                if result.outcome.is_terminal() {
                    stats.record(result.outcome);
                    print_state(out, s)?;
                    print_outcome(out, s)?;
                } else {
                    print_state(out, s)?;
                }
            }
            Err(e) => {
                debug!("guess rejected: {e}");
                print_guess_error(out, &e)?;
            }
        }
    }

    Ok(stats)
}

/// Resolve a word and print the opening state, or the reason no round can start
fn start_round<W, G>(
    resolver: &WordResolver,
    rng: &mut G,
    out: &mut W,
) -> io::Result<Option<GameSession>>
where
    W: Write,
    G: Rng + ?Sized,
{
    // Spinner only draws when stderr is a terminal
    let spinner = (resolver.config().mode == SourceMode::RemoteFirst).then(|| {
        let pb = ProgressBar::new_spinner();
        pb.set_message("Fetching a word...");
        pb.enable_steady_tick(Duration::from_millis(100));
        pb
    });

    let resolved = resolver.resolve(rng);
    if let Some(pb) = spinner {
        pb.finish_and_clear();
    }

    match resolved {
        Ok(resolution) => {
            print_round_start(out, &resolution)?;
            let session = start_new_round(resolution.word);
            print_state(out, &session)?;
            Ok(Some(session))
        }
        Err(e) => {
            print_resolve_error(out, &e)?;
            Ok(None)
        }
    }
}

/// Prompt and read one trimmed line; `None` at end of input
fn read_line<R: BufRead, W: Write>(
    prompt: &str,
    input: &mut R,
    out: &mut W,
) -> io::Result<Option<String>> {
    write!(out, "\n{prompt}: ")?;
    out.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}
