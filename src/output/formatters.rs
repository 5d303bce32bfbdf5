//! Formatting utilities for terminal output

use crate::core::{Colour, Feedback};
use colored::{ColoredString, Colorize};

/// Format a guess as coloured letter tiles, one tile per letter
#[must_use]
pub fn feedback_tiles(guess: &str, feedback: &Feedback) -> String {
    guess
        .chars()
        .zip(feedback.colours())
        .map(|(letter, &colour)| tile(letter, colour).to_string())
        .collect()
}

fn tile(letter: char, colour: Colour) -> ColoredString {
    let text = format!(" {letter} ");
    match colour {
        Colour::Correct => text.black().on_green().bold(),
        Colour::Present => text.black().on_yellow().bold(),
        Colour::Absent => text.white().on_bright_black().bold(),
    }
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    if max <= 0.0 {
        return "░".repeat(width);
    }
    // Cast is safe: values are clamped to [0, width]
    let filled = ((value / max) * width as f64).max(0.0) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}
