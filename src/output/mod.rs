//! Terminal output formatting
//!
//! Banner, prompts and pretty-printed command results.

pub mod display;
pub mod formatters;

pub use display::{print_analysis_result, write_banner, write_retry};
