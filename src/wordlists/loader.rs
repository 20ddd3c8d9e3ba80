//! Word list loading utilities
//!
//! Word lists are whitespace-delimited text. Order is preserved because the solver breaks
//! ties by list position.

use super::WordListError;
use crate::core::{Word, dedup_words};
use std::fs;
use std::io::Read;
use std::path::{Path, PathBuf};

/// A provider of the starting word list
pub trait WordSource {
    /// Load the ordered word list
    ///
    /// # Errors
    /// Fails if the source cannot be read or yields no valid word.
    fn load(&mut self) -> Result<Vec<Word>, WordListError>;
}

/// Words read from a file on disk
#[derive(Debug, Clone)]
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }
}

impl WordSource for FileSource {
    fn load(&mut self) -> Result<Vec<Word>, WordListError> {
        let content = fs::read_to_string(&self.path).map_err(|source| WordListError::Io {
            origin: self.path.display().to_string(),
            source,
        })?;
        log::debug!("read word list from {}", self.path.display());
        parse_words(&content)
    }
}

/// Words read to the end of any reader, such as stdin
#[derive(Debug)]
pub struct ReaderSource<R> {
    reader: R,
}

impl<R: Read> ReaderSource<R> {
    pub const fn new(reader: R) -> Self {
        Self { reader }
    }
}

impl<R: Read> WordSource for ReaderSource<R> {
    fn load(&mut self) -> Result<Vec<Word>, WordListError> {
        let mut content = String::new();
        self.reader
            .read_to_string(&mut content)
            .map_err(|source| WordListError::Io {
                origin: "input stream".to_string(),
                source,
            })?;
        parse_words(&content)
    }
}

/// Load words from a file
///
/// # Errors
///
/// Returns `WordListError` if the file cannot be read or holds no valid word.
///
/// # Examples
/// ```no_run
/// use wordle_expectation::wordlists::loader::load_from_file;
///
/// let words = load_from_file("words.txt").unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Vec<Word>, WordListError> {
    FileSource::new(path).load()
}

/// Parse whitespace-delimited text into words
///
/// Tokens that are not valid words are skipped with a warning. Repeated words are dropped,
/// keeping the first occurrence.
///
/// # Errors
///
/// Returns `WordListError::Empty` if no valid word remains.
pub fn parse_words(content: &str) -> Result<Vec<Word>, WordListError> {
    let mut skipped = 0usize;
    let mut total = 0usize;
    let words = dedup_words(content.split_whitespace().filter_map(|token| {
        match Word::new(token) {
            Ok(word) => {
                total += 1;
                Some(word)
            }
            Err(err) => {
                log::warn!("skipping '{token}': {err}");
                skipped += 1;
                None
            }
        }
    }));

    if words.is_empty() {
        return Err(WordListError::Empty);
    }

    let repeated = total - words.len();
    log::info!(
        "loaded {} words ({skipped} skipped, {repeated} repeated)",
        words.len()
    );
    Ok(words)
}

/// Convert an in-memory string slice to a Word vector, skipping invalid and repeated entries
///
/// # Examples
/// ```
/// use wordle_expectation::wordlists::loader::words_from_slice;
///
/// let words = words_from_slice(&["crane", "toolong", "slate"]);
/// assert_eq!(words.len(), 2);
/// ```
#[must_use]
pub fn words_from_slice(slice: &[&str]) -> Vec<Word> {
    dedup_words(slice.iter().filter_map(|&s| Word::new(s).ok()))
}
