//! Render state exported to the presentation layer

use super::keys::KeyClasses;
use super::state::{Game, GameStatus};
use super::stats::{Statistic, Statistics};
use crate::core::{Colour, MAX_GUESSES, WORD_LENGTH};
use crate::input::Key;
use crate::store::Storage;

/// On-screen keyboard, top to bottom; `↵` and `⌫` are Submit and Delete
pub const KEYBOARD_LAYOUT: [&str; 3] = ["QWERTYUIOP", "ASDFGHJKL", "↵ZXCVBNM⌫"];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowView {
    pub letters: [Option<char>; WORD_LENGTH],
    pub colours: [Option<Colour>; WORD_LENGTH],
    pub jiggle: bool,
    /// Row currently receiving input
    pub active: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyView {
    pub key: Key,
    pub classes: KeyClasses,
}

/// How the finished game ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameResult {
    Won { guesses: usize },
    Lost,
}

/// Results shown once the game is over
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Summary {
    pub result: GameResult,
    pub answer: String,
    pub statistics: [Statistic; 4],
    pub distribution: [u32; MAX_GUESSES],
    /// Emoji grid of the submitted rows
    pub share: String,
}

impl Summary {
    fn new(result: GameResult, answer: &str, stats: &Statistics, share: String) -> Self {
        Self {
            result,
            answer: answer.to_string(),
            statistics: stats.entries(),
            distribution: stats.guess_distribution,
            share,
        }
    }
}

/// Everything needed to draw one frame
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameView {
    pub rows: [RowView; MAX_GUESSES],
    pub keyboard: Vec<Vec<KeyView>>,
    pub status: GameStatus,
    /// Present when the results modal should be visible
    pub modal: Option<Summary>,
}

impl<S: Storage> Game<S> {
    /// Snapshot the render state
    #[must_use]
    pub fn view(&self) -> GameView {
        let rows = std::array::from_fn(|i| {
            let row = &self.grid().rows()[i];
            let mut letters = [None; WORD_LENGTH];
            for (slot, c) in letters.iter_mut().zip(row.guess().chars()) {
                *slot = Some(c);
            }
            RowView {
                letters,
                colours: std::array::from_fn(|pos| row.colour(pos)),
                jiggle: self.should_jiggle(i),
                active: i == self.current_row() && !self.status().is_over(),
            }
        });

        let keyboard = KEYBOARD_LAYOUT
            .iter()
            .map(|line| {
                line.chars()
                    .filter_map(|c| match c {
                        '↵' => Some(Key::Submit),
                        '⌫' => Some(Key::Delete),
                        other => Key::letter(other),
                    })
                    .map(|key| KeyView {
                        key,
                        classes: self.key_classes(key),
                    })
                    .collect()
            })
            .collect();

        GameView {
            rows,
            keyboard,
            status: self.status(),
            modal: self.summary(),
        }
    }

    /// Results summary, once the game is over
    #[must_use]
    pub fn summary(&self) -> Option<Summary> {
        let result = match self.status() {
            GameStatus::Playing => return None,
            GameStatus::Won => GameResult::Won {
                guesses: self.current_row(),
            },
            GameStatus::Lost => GameResult::Lost,
        };
        Some(Summary::new(
            result,
            self.answer().text(),
            self.statistics(),
            self.grid().share_text(),
        ))
    }
}
