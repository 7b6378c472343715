//! Command implementations

pub mod analyze;
pub mod play;
pub mod score;

pub use analyze::{AnalysisResult, analyze_guess};
pub use play::{GameConfig, PlayOutcome, run_play};
pub use score::score_codes;
