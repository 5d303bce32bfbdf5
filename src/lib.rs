//! Wordle Game
//!
//! A playable Wordle: six guesses at a hidden five-letter word, with
//! green/yellow/grey feedback, persisted progress and statistics.
//!
//! # Quick Start
//!
//! ```rust
//! use wordle_game::core::{Colour, Feedback, Word};
//!
//! let guess = Word::new("speed").unwrap();
//! let answer = Word::new("erase").unwrap();
//!
//! let feedback = Feedback::score(&guess, &answer);
//! assert_eq!(feedback.colours()[0], Colour::Present);
//! assert_eq!(feedback.to_emoji(), "🟨⬛🟨🟨⬛");
//! ```

// Core domain types
pub mod core;

// Answer lists and guess dictionary
pub mod words;

// Key/value persistence
pub mod store;

// Keyboard input and input sources
pub mod input;

// Game state machine
pub mod game;

// Input source bound to a game
pub mod session;

// Resolved settings
pub mod config;

// Tracing subscriber setup
pub mod logging;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
