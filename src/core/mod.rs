//! Core domain types for Mastermind
//!
//! Colors, codes, tallies and scores. Everything here is pure: no I/O, and the
//! only randomness comes from a generator the caller supplies.

mod code;
mod color;
mod score;
mod tally;

pub use code::{CODE_LENGTH, CODE_SPACE, Code, CodeError};
pub use color::{Color, PALETTE_SIZE, Palette};
pub use score::Score;
pub use tally::Tally;
