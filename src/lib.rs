//! Mastermind
//!
//! A single-turn Mastermind guess evaluator: a hidden four-peg code is drawn
//! from six colors and one guess is scored as (exact, wrong-position) matches.
//!
//! # Quick Start
//!
//! ```rust
//! use mastermind::core::{Code, Palette, Score, Tally};
//!
//! let palette = Palette::standard();
//! let secret = Code::decode("RGYB", &palette).unwrap();
//! let guess = Code::decode("BYGR", &palette).unwrap();
//!
//! let tally = Tally::build(&secret, &palette);
//! let score = Score::calculate(&secret, &guess, &tally, &palette);
//! assert_eq!(score.to_string(), "0 4");
//! ```

// Core domain types
pub mod core;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;
