//! Formatting utilities for game state

use crate::core::MAX_TRIES;

/// Gallows drawings, one per wrong-guess count (0..=6)
const GALLOWS: [&str; MAX_TRIES as usize + 1] = [
    "  +---+\n      |\n      |\n      |\n     ===",
    "  +---+\n  O   |\n      |\n      |\n     ===",
    "  +---+\n  O   |\n  |   |\n      |\n     ===",
    "  +---+\n  O   |\n /|   |\n      |\n     ===",
    "  +---+\n  O   |\n /|\\  |\n      |\n     ===",
    "  +---+\n  O   |\n /|\\  |\n /    |\n     ===",
    "  +---+\n  O   |\n /|\\  |\n / \\  |\n     ===",
];

/// Gallows drawing for the given number of wrong guesses
///
/// Counts above the maximum clamp to the final drawing.
#[must_use]
pub fn gallows(wrong_guesses: u8) -> &'static str {
    GALLOWS[usize::from(wrong_guesses.min(MAX_TRIES))]
}

/// Format guessed letters as `A, D, M`
#[must_use]
pub fn guessed_list(letters: &[char]) -> String {
    letters
        .iter()
        .map(char::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Create a tries bar string, `♥` per remaining try and `·` per lost one
#[must_use]
pub fn tries_bar(tries_remaining: u8) -> String {
    let remaining = tries_remaining.min(MAX_TRIES);
    format!(
        "{}{}",
        "♥".repeat(usize::from(remaining)),
        "·".repeat(usize::from(MAX_TRIES - remaining))
    )
}
