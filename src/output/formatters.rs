//! Formatting utilities for terminal output

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    // Cast is safe: values are clamped to [0, width]
    let filled = ((value / max).max(0.0) * width as f64) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Expected score as a bar; scores fall in [0, 1] unless step costs push them negative
#[must_use]
pub fn score_bar(score: f64, width: usize) -> String {
    create_progress_bar(score, 1.0, width)
}
