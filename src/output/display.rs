//! Display functions for command results

use super::formatters::score_bar;
use crate::commands::{AnalysisResult, BenchmarkResult, SolveResult};
use colored::Colorize;

/// Print the result of solving a word
pub fn print_solve_result(result: &SolveResult, verbose: bool) {
    println!("\n{}", "─".repeat(60).cyan());
    println!(
        "Solving: {}",
        result.secret.as_str().to_uppercase().bright_yellow().bold()
    );
    println!("{}", "─".repeat(60).cyan());

    for (i, step) in result.report.turns.iter().enumerate() {
        println!(
            "\nTurn {}: {} {}  (expected score {:.4})",
            i + 1,
            step.guess.as_str().to_uppercase(),
            step.verdict.to_emoji(),
            step.score
        );

        if verbose {
            println!(
                "  Candidates: {} → {}",
                step.candidates_before, step.candidates_after
            );
        }
    }

    println!();
    let used = result.report.guesses_used();
    if result.report.solved {
        println!("{}", format!("✅ Solved in {used} guesses!").green().bold());
    } else {
        println!(
            "{}",
            format!("❌ Failed to solve in {used} guesses").red().bold()
        );
    }
}

/// Print the ranked opening guesses
pub fn print_analysis_result(result: &AnalysisResult, top: usize) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "OPENING ANALYSIS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!(
        "\n📊 {} candidate answers, {} states searched in {:.2}s\n",
        result.total_candidates,
        result.cached_states,
        result.duration.as_secs_f64()
    );

    for (rank, scored) in result.ranked.iter().take(top).enumerate() {
        println!(
            "  {:>3}. {}  [{}] {}",
            rank + 1,
            scored.word.as_str().to_uppercase().bold(),
            score_bar(scored.score, 30).green(),
            format!("{:.4}", scored.score).bright_yellow()
        );
    }
}

/// Print the result of a benchmark
pub fn print_benchmark_result(result: &BenchmarkResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "BENCHMARK RESULTS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 {}", "Performance:".bright_cyan().bold());
    println!("   Words tested:     {}", result.total_words);
    println!(
        "   Solved:           {}",
        format!("{}/{}", result.solved, result.total_words).green()
    );
    println!(
        "   Average guesses:  {}",
        format!("{:.2}", result.average_guesses)
            .bright_yellow()
            .bold()
    );
    println!(
        "   Best case:        {}",
        format!("{}", result.min_guesses).green()
    );
    println!(
        "   Worst case:       {}",
        format!("{}", result.max_guesses).yellow()
    );
    println!("   Time taken:       {:.2}s", result.duration.as_secs_f64());
    println!("   Words/second:     {:.1}", result.words_per_second);

    if result.total_words > 0 {
        println!("\n📈 {}", "Distribution:".bright_cyan().bold());
        for (&guess_count, &count) in &result.distribution {
            let pct = (count as f64 / result.total_words as f64) * 100.0;
            let bar_width = (pct / 2.5) as usize;
            let bar = format!(
                "{}{}",
                "█".repeat(bar_width).green(),
                "░"
                    .repeat(40_usize.saturating_sub(bar_width))
                    .bright_black()
            );
            println!("   {guess_count}: {bar} {count:4} ({pct:5.1}%)");
        }
    }

    if !result.failed.is_empty() {
        println!("\n❌ {}", "Unsolved:".red().bold());
        println!("   {}", result.failed.join(", "));
    }
}
