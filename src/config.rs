//! Runtime configuration
//!
//! Resolved from command-line options in `main.rs`; library users build it directly.

use crate::game::JIGGLE_DURATION;
use std::path::PathBuf;
use std::time::Duration;

/// File name of the save file inside the data directory
pub const SAVE_FILE: &str = "save.json";

/// File name of the log written while the TUI owns the terminal
pub const LOG_FILE: &str = "wordle_game.log";

/// Tunables for a single game instance
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameConfig {
    /// How long a rejected row keeps jiggling
    pub jiggle: Duration,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            jiggle: JIGGLE_DURATION,
        }
    }
}

/// Where the guess dictionary comes from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Wordlist {
    /// Full embedded dictionary
    All,
    /// Only the answers are accepted as guesses
    Answers,
    /// Custom dictionary file, one word per line
    File(PathBuf),
}

impl Wordlist {
    /// Parse the `--wordlist` option: `all`, `answers`, or a path
    #[must_use]
    pub fn from_arg(arg: &str) -> Self {
        match arg {
            "all" => Self::All,
            "answers" => Self::Answers,
            path => Self::File(PathBuf::from(path)),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    pub save_path: PathBuf,
    pub wordlist: Wordlist,
    /// Shuffle the answer order with this seed
    pub seed: Option<u64>,
    pub verbose: bool,
    pub game: GameConfig,
}

impl Config {
    /// Default save file: `<data dir>/wordle_game/save.json`, or the working
    /// directory when the platform has no data directory
    #[must_use]
    pub fn default_save_path() -> PathBuf {
        dirs::data_dir()
            .map(|dir| dir.join("wordle_game"))
            .unwrap_or_default()
            .join(SAVE_FILE)
    }

    /// Log file next to the save file
    #[must_use]
    pub fn log_path(&self) -> PathBuf {
        self.save_path.with_file_name(LOG_FILE)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            save_path: Self::default_save_path(),
            wordlist: Wordlist::All,
            seed: None,
            verbose: false,
            game: GameConfig::default(),
        }
    }
}
