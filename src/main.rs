//! Wordle Solver - CLI
//!
//! Suggests Wordle guesses by exhaustive expectation search over a word list.

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use std::io;
use wordle_expectation::{
    commands::{analyze_openings, run_benchmark, run_play, solve_word},
    core::Word,
    logging,
    oracle::InteractiveOracle,
    output::{print_analysis_result, print_benchmark_result, print_solve_result},
    solver::{SearchConfig, SearchMode, Session},
    wordlists::{FileSource, ReaderSource, WordSource},
};

#[derive(Parser)]
#[command(
    name = "wordle_expectation",
    about = "Wordle solver using exhaustive expectation search",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Word list file, one or more whitespace-separated words per line ('-' for stdin)
    #[arg(short = 'w', long, global = true, default_value = "words.txt")]
    words: String,

    /// Total guesses allowed per game
    #[arg(short = 'a', long, global = true, default_value_t = SearchConfig::DEFAULT_MAX_ATTEMPTS)]
    max_attempts: usize,

    /// Penalty per attempt already used when scoring a last-attempt guess
    #[arg(long, global = true, default_value_t = 0.0)]
    step_cost: f64,

    /// Search mode: full (default) or root-only
    #[arg(short, long, global = true, default_value = "full")]
    mode: String,

    /// Evaluate root guesses on a single thread
    #[arg(long, global = true)]
    sequential: bool,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive mode: suggest guesses and read feedback (default)
    Play,

    /// Solve a specific secret word
    Solve {
        /// The secret word to solve
        word: String,

        /// Show candidate counts for each turn
        #[arg(short = 'c', long)]
        candidates: bool,
    },

    /// Rank every opening guess by expected score
    Analyze {
        /// Number of guesses to show
        #[arg(short, long, default_value = "10")]
        top: usize,
    },

    /// Solve a random sample of secrets from the word list
    Benchmark {
        /// Number of secrets to test
        #[arg(short = 'n', long, default_value = "20")]
        count: usize,

        /// Seed for drawing the secrets
        #[arg(short, long, default_value = "0")]
        seed: u64,
    },
}

impl Cli {
    fn search_config(&self) -> Result<SearchConfig> {
        let Some(mode) = SearchMode::from_name(&self.mode) else {
            bail!("unknown search mode '{}' (expected full or root-only)", self.mode);
        };
        if self.max_attempts == 0 {
            bail!("--max-attempts must be at least 1");
        }
        if !self.step_cost.is_finite() {
            bail!("--step-cost must be a finite number, got {}", self.step_cost);
        }

        Ok(SearchConfig::new(self.max_attempts)
            .with_step_cost(self.step_cost)
            .with_mode(mode)
            .with_parallel(!self.sequential))
    }
}

/// Load the word list named by the -w flag
fn load_words(source: &str) -> Result<Vec<Word>> {
    let words = if source == "-" {
        ReaderSource::new(io::stdin().lock()).load()
    } else {
        FileSource::new(source).load()
    };
    words.with_context(|| format!("loading word list '{source}'"))
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    env_logger::Builder::new()
        .filter_level(logging::level_for(cli.verbose))
        .format_timestamp(None)
        .try_init()?;

    let config = cli.search_config()?;
    let words = load_words(&cli.words)?;
    let mut session = Session::new(words, config)?;

    // Default to Play mode if no command given
    match cli.command.unwrap_or(Commands::Play) {
        Commands::Play => {
            if cli.words == "-" {
                bail!("play reads feedback from stdin; pass the word list as a file");
            }
            run_play(&mut session, &mut InteractiveOracle::stdio())
        }
        Commands::Solve { word, candidates } => {
            let result = solve_word(&mut session, &word)?;
            print_solve_result(&result, candidates);
            Ok(())
        }
        Commands::Analyze { top } => {
            let result = analyze_openings(&mut session)?;
            print_analysis_result(&result, top);
            Ok(())
        }
        Commands::Benchmark { count, seed } => {
            println!("Running benchmark on {count} random words (seed {seed})...");
            let result = run_benchmark(&mut session, count, seed, true)?;
            print_benchmark_result(&result);
            Ok(())
        }
    }
}
