//! Logger setup
//!
//! `RUST_LOG` always wins. Without it the filter depends on where output goes:
//! the TUI owns the terminal, so it logs nothing unless a log file is given.

use anyhow::{Context, Result};
use env_logger::{Builder, Env, Target};
use std::fs::OpenOptions;
use std::path::Path;

/// Default filter when `RUST_LOG` is unset
#[must_use]
pub fn default_filter(log_file: Option<&Path>, owns_terminal: bool) -> &'static str {
    match (log_file, owns_terminal) {
        (Some(_), _) => "info",
        (None, true) => "off",
        (None, false) => "warn",
    }
}

/// Install the global logger
///
/// A second call is a no-op.
///
/// # Errors
///
/// Returns an error if the log file cannot be opened for appending.
pub fn init(log_file: Option<&Path>, owns_terminal: bool) -> Result<()> {
    let mut builder = Builder::from_env(
        Env::default().default_filter_or(default_filter(log_file, owns_terminal)),
    );

    if let Some(path) = log_file {
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .with_context(|| format!("opening log file {}", path.display()))?;
        builder.target(Target::Pipe(Box::new(file)));
    }

    builder.try_init().unwrap_or(());
    Ok(())
}
