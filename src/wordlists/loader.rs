//! Local word list loading
//!
//! Reads a plain-text word file (one word per line) and picks a word from it.
//! The file is read again on every call; nothing is cached between rounds.

use super::ResolveError;
use crate::core::SecretWord;
use log::debug;
use rand::Rng;
use std::fs;
use std::io;
use std::path::Path;

/// Default location of the local word file, relative to the working directory
pub const DEFAULT_WORDS_PATH: &str = "words.txt";

/// Load words from a file
///
/// Lines are trimmed; empty lines and lines that are not a single alphabetic
/// word are skipped.
///
/// # Errors
///
/// - `SourceNotFound` if the file does not exist
/// - `SourceUnreadable` if it exists but cannot be read as UTF-8 text
/// - `SourceEmpty` if no usable word remains after filtering
///
/// # Examples
/// ```no_run
/// use hangman::wordlists::loader::load_from_file;
///
/// let words = load_from_file("words.txt").unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Vec<SecretWord>, ResolveError> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|source| match source.kind() {
        io::ErrorKind::NotFound => ResolveError::SourceNotFound(path.to_path_buf()),
        _ => ResolveError::SourceUnreadable {
            path: path.to_path_buf(),
            source,
        },
    })?;

    let words = words_from_str(&content);
    debug!("loaded {} words from {}", words.len(), path.display());

    if words.is_empty() {
        return Err(ResolveError::SourceEmpty(path.to_path_buf()));
    }
    Ok(words)
}

/// Parse newline-delimited text into secret words, skipping unusable lines
///
/// # Examples
/// ```
/// use hangman::wordlists::loader::words_from_str;
///
/// let words = words_from_str("apple\n\n  pear \nice cream\n");
/// assert_eq!(words.len(), 2);
/// assert_eq!(words[1].text(), "PEAR");
/// ```
#[must_use]
pub fn words_from_str(content: &str) -> Vec<SecretWord> {
    content
        .lines()
        .filter_map(|line| {
            let trimmed = line.trim();
            if trimmed.is_empty() {
                None
            } else {
                SecretWord::new(trimmed).ok()
            }
        })
        .collect()
}

/// Pick one word uniformly at random
#[must_use]
pub fn pick_random<'a, R: Rng + ?Sized>(
    words: &'a [SecretWord],
    rng: &mut R,
) -> Option<&'a SecretWord> {
    if words.is_empty() {
        return None;
    }
    words.get(rng.random_range(0..words.len()))
}

/// Read the word file at `path` and choose one word from it
///
/// # Errors
///
/// Same as [`load_from_file`].
pub fn choose_local_word<P: AsRef<Path>, R: Rng + ?Sized>(
    path: P,
    rng: &mut R,
) -> Result<SecretWord, ResolveError> {
    let path = path.as_ref();
    let words = load_from_file(path)?;
    pick_random(&words, rng)
        .cloned()
        .ok_or_else(|| ResolveError::SourceEmpty(path.to_path_buf()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn word_file(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn words_from_str_trims_and_uppercases() {
        let words = words_from_str("  apple \nBanana\r\ncherry");
        let texts: Vec<&str> = words.iter().map(SecretWord::text).collect();
        assert_eq!(texts, vec!["APPLE", "BANANA", "CHERRY"]);
    }

    #[test]
    fn words_from_str_skips_empty_and_invalid() {
        let words = words_from_str("\n   \napple\nx-ray\nice cream\n42\npear\n");
        let texts: Vec<&str> = words.iter().map(SecretWord::text).collect();
        assert_eq!(texts, vec!["APPLE", "PEAR"]);
    }

    #[test]
    fn words_from_str_keeps_non_ascii_words() {
        let words = words_from_str("café\nnaïve\n");
        let texts: Vec<&str> = words.iter().map(SecretWord::text).collect();
        assert_eq!(texts, vec!["CAFÉ", "NAÏVE"]);
    }

    #[test]
    fn load_from_file_with_only_non_ascii_words() {
        let file = word_file("café\nnaïve\n");
        let word = choose_local_word(file.path(), &mut StdRng::seed_from_u64(3)).unwrap();
        assert!(["CAFÉ", "NAÏVE"].contains(&word.text()));
    }

    #[test]
    fn words_from_str_empty() {
        assert!(words_from_str("").is_empty());
    }

    #[test]
    fn load_from_file_reads_words() {
        let file = word_file("apple\npear\n");
        let words = load_from_file(file.path()).unwrap();
        assert_eq!(words.len(), 2);
    }

    #[test]
    fn load_from_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing.txt");
        assert!(matches!(
            load_from_file(&path),
            Err(ResolveError::SourceNotFound(p)) if p == path
        ));
    }

    #[test]
    fn load_from_blank_file() {
        let file = word_file("\n   \n\t\n");
        assert!(matches!(
            load_from_file(file.path()),
            Err(ResolveError::SourceEmpty(_))
        ));
    }

    #[test]
    fn load_from_non_utf8_file() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(&[0xff, 0xfe, 0x00, b'\n']).unwrap();
        assert!(matches!(
            load_from_file(file.path()),
            Err(ResolveError::SourceUnreadable { .. })
        ));
    }

    #[test]
    fn pick_random_empty() {
        let mut rng = StdRng::seed_from_u64(1);
        assert!(pick_random(&[], &mut rng).is_none());
    }

    #[test]
    fn pick_random_is_deterministic_with_seed() {
        let words = words_from_str("alpha\nbravo\ncharlie\ndelta\necho");
        let first = pick_random(&words, &mut StdRng::seed_from_u64(7)).cloned();
        let second = pick_random(&words, &mut StdRng::seed_from_u64(7)).cloned();
        assert_eq!(first, second);
        assert!(words.contains(&first.unwrap()));
    }

    #[test]
    fn pick_random_covers_every_word() {
        let words = words_from_str("alpha\nbravo\ncharlie");
        let mut rng = StdRng::seed_from_u64(42);
        let mut seen = std::collections::HashSet::new();
        for _ in 0..200 {
            seen.insert(pick_random(&words, &mut rng).unwrap().text().to_string());
        }
        assert_eq!(seen.len(), 3);
    }

    #[test]
    fn choose_local_word_single_entry() {
        let file = word_file("apple\n");
        let mut rng = StdRng::seed_from_u64(0);
        let word = choose_local_word(file.path(), &mut rng).unwrap();
        assert_eq!(word.text(), "APPLE");
    }
}
