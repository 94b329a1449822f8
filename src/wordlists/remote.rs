//! Remote word fetching
//!
//! The remote service answers a GET with a JSON array holding exactly one word,
//! e.g. `["word"]`. Anything else counts as the remote being unavailable.

use super::ResolveError;
use crate::core::SecretWord;
use log::{debug, info};
use std::time::Duration;

/// Public random-word service used when no endpoint is configured
pub const DEFAULT_ENDPOINT: &str = "https://random-word-api.herokuapp.com/word";

/// Upper bound on a single fetch
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(5);

/// A source that can produce one word per call
///
/// Failures must be reported as `ResolveError::RemoteUnavailable`.
pub trait WordFetcher {
    /// Fetch a single word
    ///
    /// # Errors
    ///
    /// Returns `RemoteUnavailable` for any network, status, or body problem.
    fn fetch_word(&self) -> Result<SecretWord, ResolveError>;
}

/// Blocking HTTP fetcher
#[derive(Debug, Clone)]
pub struct HttpWordFetcher {
    endpoint: String,
    timeout: Duration,
}

impl HttpWordFetcher {
    #[must_use]
    pub fn new(endpoint: impl Into<String>, timeout: Duration) -> Self {
        Self {
            endpoint: endpoint.into(),
            timeout,
        }
    }
}

impl Default for HttpWordFetcher {
    fn default() -> Self {
        Self::new(DEFAULT_ENDPOINT, DEFAULT_TIMEOUT)
    }
}

impl WordFetcher for HttpWordFetcher {
    fn fetch_word(&self) -> Result<SecretWord, ResolveError> {
        debug!("fetching word from {}", self.endpoint);

        let client = reqwest::blocking::Client::builder()
            .timeout(self.timeout)
            .build()
            .map_err(|e| ResolveError::RemoteUnavailable(format!("http client: {e}")))?;

        let resp = client
            .get(&self.endpoint)
            .send()
            .map_err(|e| ResolveError::RemoteUnavailable(format!("request failed: {e}")))?;

        let status = resp.status();
        if !status.is_success() {
            return Err(ResolveError::RemoteUnavailable(format!(
                "unexpected status {status}"
            )));
        }

        let body = resp
            .text()
            .map_err(|e| ResolveError::RemoteUnavailable(format!("reading body: {e}")))?;
        let word = parse_word_response(&body)?;
        info!("fetched word from {}", self.endpoint);
        Ok(word)
    }
}

/// Parse a response body of the form `["word"]`
///
/// # Errors
///
/// Returns `RemoteUnavailable` unless the body is a JSON array with exactly one
/// string that is a valid secret word.
///
/// # Examples
/// ```
/// use hangman::wordlists::remote::parse_word_response;
///
/// let word = parse_word_response(r#"["lantern"]"#).unwrap();
/// assert_eq!(word.text(), "LANTERN");
/// assert!(parse_word_response("[]").is_err());
/// ```
pub fn parse_word_response(body: &str) -> Result<SecretWord, ResolveError> {
    let mut words: Vec<String> = serde_json::from_str(body)
        .map_err(|e| ResolveError::RemoteUnavailable(format!("malformed body: {e}")))?;

    if words.len() != 1 {
        return Err(ResolveError::RemoteUnavailable(format!(
            "expected exactly one word, got {}",
            words.len()
        )));
    }

    let word = words.remove(0);
    SecretWord::new(&word)
        .map_err(|e| ResolveError::RemoteUnavailable(format!("unusable word {word:?}: {e}")))
}
