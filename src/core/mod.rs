//! Core domain types for Wordle
//!
//! Words, per-letter feedback, and the narrowing rule that connects them. Everything here
//! is pure and has no knowledge of the search.

mod filter;
mod verdict;
mod word;

pub use filter::{dedup_words, is_consistent, narrow};
pub use verdict::{Mark, Verdict, VerdictError};
pub use word::{WORD_LENGTH, Word, WordError};
