//! Word lists for Wordle solving
//!
//! The starting candidate list comes from an external source; the solver cannot run without
//! a non-empty one.

pub mod loader;

pub use loader::{FileSource, ReaderSource, WordSource, load_from_file, parse_words};

use std::io;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum WordListError {
    #[error("cannot read word list from {origin}: {source}")]
    Io {
        origin: String,
        #[source]
        source: io::Error,
    },
    #[error("word list contains no valid words")]
    Empty,
}
