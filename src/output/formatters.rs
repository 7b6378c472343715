//! Formatting utilities for terminal output

use crate::core::{CODE_LENGTH, Score};

/// Format a score as key pegs: ● exact, ○ wrong position, · empty
#[must_use]
pub fn score_to_pegs(score: Score) -> String {
    let exact = usize::from(score.exact());
    let partial = usize::from(score.partial());
    let empty = CODE_LENGTH.saturating_sub(exact + partial);

    format!("{}{}{}", "●".repeat(exact), "○".repeat(partial), "·".repeat(empty))
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    // Cast is safe: values are clamped to [0, width]
    let filled = ((value / max) * width as f64) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}
