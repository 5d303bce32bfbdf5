//! Terminal output formatting
//!
//! Coloured printing for the line-mode commands.

pub mod display;
pub mod formatters;

pub use display::{print_feedback, print_statistics, print_summary};
