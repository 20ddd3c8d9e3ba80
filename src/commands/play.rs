//! Interactive play mode
//!
//! Suggests a guess, asks for the colors the real game showed, and narrows until solved.

use crate::oracle::{Oracle, OracleError};
use crate::output::formatters::score_bar;
use crate::solver::Session;
use anyhow::Result;
use colored::Colorize;

/// Run the interactive loop on `oracle`
///
/// Malformed feedback is reported and asked for again. Closing the input ends the game.
///
/// # Errors
///
/// Returns an error if the search fails (typically after feedback that no word fits) or the
/// feedback stream breaks.
pub fn run_play(session: &mut Session, oracle: &mut impl Oracle) -> Result<()> {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "Wordle Solver - Interactive Mode".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());
    println!("\nAfter each guess, enter one letter per square:");
    println!("  g = green (right spot), y = yellow (wrong spot), b = gray (not in word)\n");

    session.reset();

    while !session.is_over() {
        let turn = session.state().attempts_used() + 1;
        let suggestion = session.suggest()?;

        println!("{}", "─".repeat(60).bright_black());
        println!(
            "Turn {turn}: {} candidates, {} attempts left",
            session.candidates().len(),
            session.remaining_attempts()
        );
        println!(
            "  Guess:  {}",
            suggestion.word.as_str().to_uppercase().bright_yellow().bold()
        );
        println!(
            "  Score:  [{}] {:.4}\n",
            score_bar(suggestion.score, 20).green(),
            suggestion.score
        );

        let verdict = loop {
            match oracle.feedback(&suggestion.word) {
                Ok(verdict) => break verdict,
                Err(OracleError::Malformed(err)) => println!("{} {err}", "✗".red()),
                Err(OracleError::Closed) => {
                    println!("\nInput closed, stopping.");
                    return Ok(());
                }
                Err(err) => return Err(err.into()),
            }
        };

        session.record(suggestion.word, verdict);
        println!("  {}\n", verdict.to_emoji());
    }

    if session.state().is_solved() {
        println!(
            "{}",
            format!("✅ Solved in {} guesses!", session.state().attempts_used())
                .green()
                .bold()
        );
    } else {
        println!("{}", "❌ Out of attempts".red().bold());
    }
    Ok(())
}
