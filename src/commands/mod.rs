//! Command implementations

pub mod score;
pub mod simple;
pub mod stats;

pub use score::{run_score, score_words};
pub use simple::{run_simple, run_simple_with};
pub use stats::{load_statistics, run_reset, run_stats};
