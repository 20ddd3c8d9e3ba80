//! Expectation search for Wordle
//!
//! [`Solver`] scores guesses by recursive simulation, [`MemoCache`] remembers solved
//! states, and [`Session`] ties both to a game in progress.

mod cache;
mod config;
mod engine;
mod error;
mod session;
mod state;

pub use cache::MemoCache;
pub use config::{SearchConfig, SearchMode};
pub use engine::{ScoredGuess, Solver};
pub use error::SolveError;
pub use session::{GameReport, Session, TurnReport};
pub use state::{SearchState, Turn};
