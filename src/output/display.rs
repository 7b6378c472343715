//! Display functions for the game shell and command results

use super::formatters::{create_progress_bar, score_to_pegs};
use crate::commands::AnalysisResult;
use crate::core::{CodeError, Palette};
use colored::Colorize;
use std::io::{self, Write};

/// Write the welcome banner and palette legend
///
/// # Errors
///
/// Returns an error if writing to `out` fails.
pub fn write_banner<W: Write>(out: &mut W, palette: &Palette) -> io::Result<()> {
    writeln!(out, "{}", "Hello! Welcome to Mastermind!".bright_cyan().bold())?;
    writeln!(out, "I have come up with an unguessable code!! MUAHAHA")?;
    writeln!(
        out,
        "The elements you can guess are {}",
        palette.legend().bright_white()
    )?;
    writeln!(out, "Enter your guess as a string of four capital letters")
}

/// Report an undecodable guess and ask again
///
/// # Errors
///
/// Returns an error if writing to `out` fails.
pub fn write_retry<W: Write>(out: &mut W, error: &CodeError) -> io::Result<()> {
    writeln!(out, "{} {}", "❌".red(), error.to_string().red())?;
    writeln!(out, "Try again:")
}

/// Print the result of guess analysis
pub fn print_analysis_result(result: &AnalysisResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(
        " {} {} ",
        "GUESS ANALYSIS:".bright_cyan().bold(),
        result.guess.letters().bright_yellow().bold()
    );
    println!("{}", "═".repeat(60).cyan());

    let max_entropy = (result.partitions.len().max(1) as f64).log2().max(1.0);
    let bar = create_progress_bar(result.entropy, max_entropy, 30);

    println!("\n📊 Against {} possible secrets:", result.total_secrets);
    println!(
        "   Entropy:     [{}] {}",
        bar.green(),
        format!("{:.3} bits", result.entropy).bright_yellow()
    );
    println!("   Feedbacks:   {}", result.partitions.len());
    println!(
        "   Expected:    {:.1} secrets remain",
        result.expected_remaining
    );
    println!(
        "   Worst case:  {} secrets remain",
        format!("{}", result.max_partition).yellow()
    );

    println!("\n📈 {}", "Distribution:".bright_cyan().bold());
    for (score, count) in &result.partitions {
        let pct = (*count as f64 / result.total_secrets as f64) * 100.0;
        println!(
            "   {} {}  {count:4} ({pct:5.1}%)",
            score_to_pegs(*score),
            score.to_string().bright_white()
        );
    }
}
