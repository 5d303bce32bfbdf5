//! Core domain types for Wordle
//!
//! Pure, side-effect free types: words and the scoring of a guess against an answer.

mod feedback;
mod word;

pub use feedback::{Colour, Feedback};
pub use word::{WORD_LENGTH, Word, WordError};

/// Number of guesses allowed per game
pub const MAX_GUESSES: usize = 6;
