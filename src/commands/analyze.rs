//! Guess analysis command
//!
//! Scores a guess against every possible secret and summarizes how well the
//! feedback splits them.

use crate::core::{CODE_SPACE, Code, CodeError, Palette, Score, Tally};
use rayon::prelude::*;
use rustc_hash::FxHashMap;
use std::collections::HashMap;
use std::hash::BuildHasher;
use tracing::info;

/// Result of analyzing a guess
pub struct AnalysisResult {
    pub guess: Code,
    pub total_secrets: usize,
    /// Secrets per feedback, most exact first
    pub partitions: Vec<(Score, usize)>,
    pub entropy: f64,
    pub expected_remaining: f64,
    pub max_partition: usize,
}

/// Analyze a guess against all 1296 possible secrets
///
/// # Errors
///
/// Returns `CodeError` if the guess fails to decode.
pub fn analyze_guess(guess: &str, palette: &Palette) -> Result<AnalysisResult, CodeError> {
    let guess = Code::decode(guess, palette)?;

    let scores: Vec<Score> = (0..CODE_SPACE)
        .into_par_iter()
        .map(|index| {
            let secret = Code::from_index(index, palette);
            let tally = Tally::build(&secret, palette);
            Score::calculate(&secret, &guess, &tally, palette)
        })
        .collect();

    let counts = group_by_score(&scores);
    let total = scores.len() as f64;

    let entropy = shannon_entropy(&counts);
    let expected_remaining: f64 = counts
        .values()
        .map(|&count| count as f64 * count as f64 / total)
        .sum();
    let max_partition = counts.values().copied().max().unwrap_or(0);

    let mut partitions: Vec<(Score, usize)> = counts.into_iter().collect();
    partitions.sort_by(|(a, _), (b, _)| b.cmp(a));

    info!(
        %guess,
        feedbacks = partitions.len(),
        entropy,
        max_partition,
        "guess analyzed"
    );

    Ok(AnalysisResult {
        guess,
        total_secrets: scores.len(),
        partitions,
        entropy,
        expected_remaining,
        max_partition,
    })
}

fn group_by_score(scores: &[Score]) -> FxHashMap<Score, usize> {
    let mut counts = FxHashMap::default();
    for &score in scores {
        *counts.entry(score).or_insert(0) += 1;
    }
    counts
}

/// Shannon entropy of a feedback distribution, in bits
///
/// H = -Σ p * log₂(p)
#[must_use]
pub fn shannon_entropy<S: BuildHasher>(counts: &HashMap<Score, usize, S>) -> f64 {
    let total = counts.values().sum::<usize>() as f64;

    if total == 0.0 {
        return 0.0;
    }

    counts
        .values()
        .filter(|&&count| count > 0)
        .map(|&count| {
            let p = count as f64 / total;
            -p * p.log2()
        })
        .sum()
}
