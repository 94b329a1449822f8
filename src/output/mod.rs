//! Terminal output formatting
//!
//! Display utilities shared by the line-mode and TUI front ends.

pub mod display;
pub mod formatters;

pub use display::{
    print_banner, print_guess_error, print_guess_result, print_outcome, print_resolve_error,
    print_round_start, print_state,
};
