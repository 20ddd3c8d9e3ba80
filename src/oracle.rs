//! Feedback sources
//!
//! The solver never sees where feedback comes from. A game is driven either against a known
//! secret ([`SecretOracle`]) or by a person typing the colors the real game showed them
//! ([`InteractiveOracle`]).

use crate::core::{Verdict, VerdictError, Word};
use std::io::{self, BufRead, Write};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum OracleError {
    #[error(transparent)]
    Malformed(#[from] VerdictError),
    #[error("feedback input closed")]
    Closed,
    #[error(transparent)]
    Io(#[from] io::Error),
}

/// Anything that can answer "how did this guess do?"
pub trait Oracle {
    /// Feedback for `guess`
    ///
    /// # Errors
    /// Returns `OracleError` if no well-formed feedback can be obtained.
    fn feedback(&mut self, guess: &Word) -> Result<Verdict, OracleError>;
}

/// Compares guesses against a stored secret word
#[derive(Debug, Clone, Copy)]
pub struct SecretOracle {
    secret: Word,
}

impl SecretOracle {
    #[must_use]
    pub const fn new(secret: Word) -> Self {
        Self { secret }
    }
}

impl Oracle for SecretOracle {
    fn feedback(&mut self, guess: &Word) -> Result<Verdict, OracleError> {
        Ok(Verdict::compare(guess, &self.secret))
    }
}

/// Reads one line of `g`/`y`/`b` feedback per guess
///
/// Generic over its streams so it can be driven by stdin/stdout or by in-memory buffers.
pub struct InteractiveOracle<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> InteractiveOracle<R, W> {
    pub const fn new(input: R, output: W) -> Self {
        Self { input, output }
    }
}

impl InteractiveOracle<io::StdinLock<'static>, io::Stdout> {
    /// Oracle on the process's terminal
    #[must_use]
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> Oracle for InteractiveOracle<R, W> {
    fn feedback(&mut self, guess: &Word) -> Result<Verdict, OracleError> {
        write!(self.output, "Feedback for {guess} (g/y/b): ")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(OracleError::Closed);
        }
        Ok(line.parse()?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn secret_oracle_compares() {
        let mut oracle = SecretOracle::new(Word::new("acres").unwrap());
        let verdict = oracle.feedback(&Word::new("abase").unwrap()).unwrap();
        assert_eq!(verdict.to_string(), "gbyyy");
        assert!(oracle.feedback(&Word::new("acres").unwrap()).unwrap().is_solved());
    }

    #[test]
    fn interactive_oracle_reads_lines() {
        let input = Cursor::new("gbyyy\nGGGGG\n");
        let mut output = Vec::new();
        let mut oracle = InteractiveOracle::new(input, &mut output);
        let guess = Word::new("abase").unwrap();

        assert_eq!(oracle.feedback(&guess).unwrap().to_string(), "gbyyy");
        assert!(oracle.feedback(&guess).unwrap().is_solved());
        assert!(matches!(oracle.feedback(&guess), Err(OracleError::Closed)));

        let prompt = String::from_utf8(output).unwrap();
        assert!(prompt.starts_with("Feedback for abase"));
    }

    #[test]
    fn interactive_oracle_rejects_malformed_lines() {
        let input = Cursor::new("gbyy\ngbxyy\n");
        let mut oracle = InteractiveOracle::new(input, io::sink());
        let guess = Word::new("abase").unwrap();

        assert!(matches!(
            oracle.feedback(&guess),
            Err(OracleError::Malformed(VerdictError::WrongLength { .. }))
        ));
        assert!(matches!(
            oracle.feedback(&guess),
            Err(OracleError::Malformed(VerdictError::UnknownSymbol('x')))
        ));
    }
}
