//! Failures surfaced by the search and the session driving it

use crate::core::VerdictError;
use crate::oracle::OracleError;
use crate::wordlists::WordListError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SolveError {
    /// Every word has been eliminated, so no guess can be chosen
    #[error("no candidate words remain; the feedback so far is inconsistent with every word")]
    EmptyCandidateSet,

    /// The state already used every allowed attempt
    #[error("no attempts remain")]
    AttemptsExhausted,

    /// The search cannot start without a non-empty word list
    #[error("word list unavailable: {0}")]
    WordListUnavailable(#[from] WordListError),

    #[error("malformed feedback: {0}")]
    MalformedVerdict(#[from] VerdictError),

    /// The feedback channel failed for a reason other than malformed input
    #[error("feedback unavailable: {0}")]
    Feedback(OracleError),
}

impl From<OracleError> for SolveError {
    fn from(err: OracleError) -> Self {
        match err {
            OracleError::Malformed(verdict_err) => Self::MalformedVerdict(verdict_err),
            other => Self::Feedback(other),
        }
    }
}
