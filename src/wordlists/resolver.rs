//! Word source resolution
//!
//! Decides which word becomes the secret word for a round: the remote source
//! first when configured, the local word file otherwise or on any remote failure.

use super::ResolveError;
use super::loader::{DEFAULT_WORDS_PATH, choose_local_word};
use super::remote::{DEFAULT_ENDPOINT, DEFAULT_TIMEOUT, HttpWordFetcher, WordFetcher};
use crate::core::SecretWord;
use clap::ValueEnum;
use log::{info, warn};
use rand::Rng;
use std::fmt;
use std::path::PathBuf;
use std::time::Duration;

/// Which sources the resolver may use
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum SourceMode {
    /// Try the remote endpoint once, then fall back to the word file
    #[default]
    #[value(name = "remote")]
    RemoteFirst,
    /// Only use the word file
    #[value(name = "local")]
    LocalOnly,
}

/// Explicit resolver configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordSourceConfig {
    pub mode: SourceMode,
    pub endpoint: String,
    pub timeout: Duration,
    pub words_path: PathBuf,
}

impl Default for WordSourceConfig {
    fn default() -> Self {
        Self {
            mode: SourceMode::default(),
            endpoint: DEFAULT_ENDPOINT.to_string(),
            timeout: DEFAULT_TIMEOUT,
            words_path: PathBuf::from(DEFAULT_WORDS_PATH),
        }
    }
}

impl WordSourceConfig {
    /// Local-only configuration reading `words_path`
    #[must_use]
    pub fn local(words_path: impl Into<PathBuf>) -> Self {
        Self {
            mode: SourceMode::LocalOnly,
            words_path: words_path.into(),
            ..Self::default()
        }
    }
}

/// Where a resolved word came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WordOrigin {
    Remote,
    Local,
}

impl fmt::Display for WordOrigin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Remote => write!(f, "remote word service"),
            Self::Local => write!(f, "local word file"),
        }
    }
}

/// A successfully resolved word
#[derive(Debug)]
pub struct Resolution {
    pub word: SecretWord,
    pub origin: WordOrigin,
    /// Set when the remote attempt failed and the local file was used instead
    pub fallback: Option<ResolveError>,
}

impl Resolution {
    #[must_use]
    pub fn fell_back(&self) -> bool {
        self.fallback.is_some()
    }
}

/// Resolve one secret word
///
/// At most one remote fetch and at most one read of the word file happen per call.
///
/// # Errors
///
/// Returns the local strategy's error (`SourceNotFound`, `SourceEmpty`,
/// `SourceUnreadable`) when no word could be produced. `RemoteUnavailable` is
/// never returned; it is reported through [`Resolution::fallback`].
pub fn resolve_word<F, R>(
    config: &WordSourceConfig,
    fetcher: &F,
    rng: &mut R,
) -> Result<Resolution, ResolveError>
where
    F: WordFetcher + ?Sized,
    R: Rng + ?Sized,
{
    let mut fallback = None;

    if config.mode == SourceMode::RemoteFirst {
        match fetcher.fetch_word() {
            Ok(word) => {
                info!("using word from {}", WordOrigin::Remote);
                return Ok(Resolution {
                    word,
                    origin: WordOrigin::Remote,
                    fallback: None,
                });
            }
            Err(e) => {
                warn!("{e}; falling back to {}", config.words_path.display());
                fallback = Some(e);
            }
        }
    }

    let word = choose_local_word(&config.words_path, rng)?;
    info!(
        "using word from {} ({})",
        WordOrigin::Local,
        config.words_path.display()
    );
    Ok(Resolution {
        word,
        origin: WordOrigin::Local,
        fallback,
    })
}

/// Configuration bundled with the fetcher it drives
///
/// Front ends keep one of these and call [`WordResolver::resolve`] per round.
pub struct WordResolver {
    config: WordSourceConfig,
    fetcher: Box<dyn WordFetcher>,
}

impl WordResolver {
    /// Resolver backed by the HTTP fetcher described in `config`
    #[must_use]
    pub fn new(config: WordSourceConfig) -> Self {
        let fetcher = HttpWordFetcher::new(config.endpoint.clone(), config.timeout);
        Self::with_fetcher(config, Box::new(fetcher))
    }

    #[must_use]
    pub fn with_fetcher(config: WordSourceConfig, fetcher: Box<dyn WordFetcher>) -> Self {
        Self { config, fetcher }
    }

    #[must_use]
    pub fn config(&self) -> &WordSourceConfig {
        &self.config
    }

    /// Resolve a word for a new round
    ///
    /// # Errors
    ///
    /// See [`resolve_word`].
    pub fn resolve<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<Resolution, ResolveError> {
        resolve_word(&self.config, self.fetcher.as_ref(), rng)
    }
}

impl fmt::Debug for WordResolver {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WordResolver")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use std::cell::Cell;
    use std::io::Write;
    use tempfile::NamedTempFile;

    struct StubFetcher {
        word: Option<&'static str>,
        calls: Cell<usize>,
    }

    impl StubFetcher {
        fn ok(word: &'static str) -> Self {
            Self {
                word: Some(word),
                calls: Cell::new(0),
            }
        }

        fn failing() -> Self {
            Self {
                word: None,
                calls: Cell::new(0),
            }
        }
    }

    impl WordFetcher for StubFetcher {
        fn fetch_word(&self) -> Result<SecretWord, ResolveError> {
            self.calls.set(self.calls.get() + 1);
            match self.word {
                Some(w) => Ok(SecretWord::new(w).unwrap()),
                None => Err(ResolveError::RemoteUnavailable("connection refused".into())),
            }
        }
    }

    fn word_file(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    fn config(mode: SourceMode, path: impl Into<PathBuf>) -> WordSourceConfig {
        WordSourceConfig {
            mode,
            words_path: path.into(),
            ..WordSourceConfig::default()
        }
    }

    #[test]
    fn remote_success_skips_local() {
        // The word file does not exist, so any local read would fail
        let dir = tempfile::tempdir().unwrap();
        let cfg = config(SourceMode::RemoteFirst, dir.path().join("absent.txt"));
        let fetcher = StubFetcher::ok("remote");

        let res = resolve_word(&cfg, &fetcher, &mut StdRng::seed_from_u64(0)).unwrap();
        assert_eq!(res.word.text(), "REMOTE");
        assert_eq!(res.origin, WordOrigin::Remote);
        assert!(!res.fell_back());
        assert_eq!(fetcher.calls.get(), 1);
    }

    #[test]
    fn remote_failure_falls_back() {
        let file = word_file("apple\n");
        let cfg = config(SourceMode::RemoteFirst, file.path());
        let fetcher = StubFetcher::failing();

        let res = resolve_word(&cfg, &fetcher, &mut StdRng::seed_from_u64(0)).unwrap();
        assert_eq!(res.word.text(), "APPLE");
        assert_eq!(res.origin, WordOrigin::Local);
        assert!(matches!(
            res.fallback,
            Some(ResolveError::RemoteUnavailable(_))
        ));
        assert_eq!(fetcher.calls.get(), 1);
    }

    #[test]
    fn remote_failure_with_missing_file_is_fatal() {
        let dir = tempfile::tempdir().unwrap();
        let cfg = config(SourceMode::RemoteFirst, dir.path().join("absent.txt"));

        let err = resolve_word(&cfg, &StubFetcher::failing(), &mut StdRng::seed_from_u64(0))
            .unwrap_err();
        assert!(matches!(err, ResolveError::SourceNotFound(_)));
        assert!(err.is_fatal());
    }

    #[test]
    fn local_only_never_calls_fetcher() {
        let file = word_file("pear\n");
        let cfg = config(SourceMode::LocalOnly, file.path());
        let fetcher = StubFetcher::ok("remote");

        let res = resolve_word(&cfg, &fetcher, &mut StdRng::seed_from_u64(0)).unwrap();
        assert_eq!(res.word.text(), "PEAR");
        assert_eq!(res.origin, WordOrigin::Local);
        assert!(!res.fell_back());
        assert_eq!(fetcher.calls.get(), 0);
    }

    #[test]
    fn local_only_empty_file() {
        let file = word_file("\n  \n");
        let cfg = config(SourceMode::LocalOnly, file.path());
        assert!(matches!(
            resolve_word(&cfg, &StubFetcher::failing(), &mut StdRng::seed_from_u64(0)),
            Err(ResolveError::SourceEmpty(_))
        ));
    }

    #[test]
    fn seeded_selection_is_repeatable() {
        let file = word_file("alpha\nbravo\ncharlie\ndelta\n");
        let cfg = WordSourceConfig::local(file.path());
        let fetcher = StubFetcher::failing();

        let a = resolve_word(&cfg, &fetcher, &mut StdRng::seed_from_u64(99)).unwrap();
        let b = resolve_word(&cfg, &fetcher, &mut StdRng::seed_from_u64(99)).unwrap();
        assert_eq!(a.word, b.word);
    }

    #[test]
    fn resolver_wraps_fetcher() {
        let file = word_file("kiwi\n");
        let resolver = WordResolver::with_fetcher(
            config(SourceMode::RemoteFirst, file.path()),
            Box::new(StubFetcher::failing()),
        );
        let res = resolver.resolve(&mut StdRng::seed_from_u64(3)).unwrap();
        assert_eq!(res.word.text(), "KIWI");
        assert!(res.fell_back());
        assert_eq!(resolver.config().mode, SourceMode::RemoteFirst);
    }

    #[test]
    fn default_config() {
        let cfg = WordSourceConfig::default();
        assert_eq!(cfg.mode, SourceMode::RemoteFirst);
        assert_eq!(cfg.endpoint, DEFAULT_ENDPOINT);
        assert_eq!(cfg.timeout, DEFAULT_TIMEOUT);
        assert_eq!(cfg.words_path, PathBuf::from(DEFAULT_WORDS_PATH));
    }

    #[test]
    fn origin_display() {
        assert_eq!(WordOrigin::Remote.to_string(), "remote word service");
        assert_eq!(WordOrigin::Local.to_string(), "local word file");
    }
}
