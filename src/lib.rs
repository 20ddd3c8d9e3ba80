//! Wordle Solver
//!
//! Picks the next Wordle guess by exhaustive expectation search: every candidate guess is
//! simulated against every still-possible answer, recursively, and the guess with the best
//! expected score under the remaining attempts wins.
//!
//! # Quick Start
//!
//! ```rust
//! use wordle_expectation::solver::{SearchConfig, Session};
//! use wordle_expectation::wordlists::loader::words_from_slice;
//!
//! let words = words_from_slice(&["abase", "abate", "abbey", "acres"]);
//! let mut session = Session::new(words, SearchConfig::default()).unwrap();
//!
//! let first = session.suggest().unwrap();
//! assert_eq!(first.word.as_str(), "abase");
//!
//! // The game answered: a green, b gray, then three yellows
//! session.record_feedback(first.word, "gbyyy").unwrap();
//! let next = session.suggest().unwrap();
//! assert_eq!(next.word.as_str(), "acres");
//! assert_eq!(next.score, 1.0);
//! ```

// Core domain types
pub mod core;

// Expectation search
pub mod solver;

// Feedback sources
pub mod oracle;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Stderr log backend for the binary
pub mod logging;
