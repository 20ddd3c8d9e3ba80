//! Benchmark command
//!
//! Plays simulated games against a random sample of secrets from the word list.

use super::solve::solve_word;
use crate::solver::Session;
use anyhow::Result;
use indicatif::{ProgressBar, ProgressStyle};
use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::IndexedRandom;
use std::collections::BTreeMap;
use std::time::{Duration, Instant};

/// Result of a benchmark run
pub struct BenchmarkResult {
    pub total_words: usize,
    pub solved: usize,
    pub failed: Vec<String>,
    pub average_guesses: f64,
    pub min_guesses: usize,
    pub max_guesses: usize,
    /// Guesses needed -> number of solved games
    pub distribution: BTreeMap<usize, usize>,
    pub duration: Duration,
    pub words_per_second: f64,
}

/// Solve `count` secrets drawn without replacement from the session's word list
///
/// The same `seed` always draws the same secrets. All games share the session's cache.
///
/// # Errors
///
/// Returns an error if a search fails.
pub fn run_benchmark(
    session: &mut Session,
    count: usize,
    seed: u64,
    show_progress: bool,
) -> Result<BenchmarkResult> {
    let mut rng = StdRng::seed_from_u64(seed);
    let secrets: Vec<String> = session
        .words()
        .choose_multiple(&mut rng, count)
        .map(ToString::to_string)
        .collect();

    let pb = if show_progress {
        ProgressBar::new(secrets.len() as u64)
    } else {
        ProgressBar::hidden()
    };
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")?
            .progress_chars("█▓▒░"),
    );

    let start = Instant::now();
    let mut distribution: BTreeMap<usize, usize> = BTreeMap::new();
    let mut failed = Vec::new();
    let mut total_guesses = 0;

    for secret in &secrets {
        let result = solve_word(session, secret)?;
        let used = result.report.guesses_used();

        if result.report.solved {
            total_guesses += used;
            *distribution.entry(used).or_insert(0) += 1;
        } else {
            log::info!("failed to solve '{secret}' in {used} guesses");
            failed.push(secret.clone());
        }

        pb.set_message(format!("{} cached states", session.cache().len()));
        pb.inc(1);
    }

    pb.finish_with_message("Complete!");

    let duration = start.elapsed();
    let solved = secrets.len() - failed.len();

    Ok(BenchmarkResult {
        total_words: secrets.len(),
        solved,
        failed,
        average_guesses: if solved > 0 {
            total_guesses as f64 / solved as f64
        } else {
            0.0
        },
        min_guesses: distribution.keys().next().copied().unwrap_or(0),
        max_guesses: distribution.keys().next_back().copied().unwrap_or(0),
        distribution,
        duration,
        words_per_second: secrets.len() as f64 / duration.as_secs_f64().max(f64::EPSILON),
    })
}
