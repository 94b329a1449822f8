//! Word sources for hangman rounds
//!
//! A round's secret word comes from the remote word service or from the local
//! word file. [`resolver`] decides between them.

pub mod loader;
pub mod remote;
pub mod resolver;

use std::io;
use std::path::PathBuf;
use thiserror::Error;

pub use loader::{DEFAULT_WORDS_PATH, choose_local_word, load_from_file, words_from_str};
pub use remote::{DEFAULT_ENDPOINT, DEFAULT_TIMEOUT, HttpWordFetcher, WordFetcher};
pub use resolver::{
    Resolution, SourceMode, WordOrigin, WordResolver, WordSourceConfig, resolve_word,
};

/// Failure modes for word resolution
#[derive(Debug, Error)]
pub enum ResolveError {
    /// Network, timeout, status, or body problem. Never fatal; triggers fallback.
    #[error("remote word service unavailable: {0}")]
    RemoteUnavailable(String),
    #[error("word file {} not found", .0.display())]
    SourceNotFound(PathBuf),
    #[error("word file {} has no usable words", .0.display())]
    SourceEmpty(PathBuf),
    #[error("failed to read word file {}", .path.display())]
    SourceUnreadable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl ResolveError {
    /// True when the round cannot start
    #[must_use]
    pub fn is_fatal(&self) -> bool {
        !matches!(self, Self::RemoteUnavailable(_))
    }
}
