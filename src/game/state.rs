//! Game state machine
//!
//! Owns the grid, routes keys, scores submissions and persists progress
//! after every submission and new game.

use super::grid::Grid;
use super::jiggle::{Jiggle, JiggleTimer};
use super::keys::{KeyClasses, KeyColours};
use super::stats::Statistics;
use crate::config::GameConfig;
use crate::core::{Feedback, MAX_GUESSES, WORD_LENGTH, Word};
use crate::input::{Key, KeyEvent, RawKey, map_key_down};
use crate::store::saved::{
    STATISTICS_KEY, SavedGrid, load_answer, load_answer_index, load_grid, save_answer,
    save_answer_index, save_grid,
};
use crate::store::{Decoded, Storage, StoreError, read_json, write_json};
use crate::words::WordSource;
use std::time::Instant;
use thiserror::Error;
use tracing::{debug, info, warn};

/// Errors that escape the game: only failed persistence writes
#[derive(Debug, Error)]
pub enum GameError {
    #[error("failed to save game: {0}")]
    Store(#[from] StoreError),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    Playing,
    Won,
    Lost,
}

impl GameStatus {
    #[must_use]
    pub const fn is_over(self) -> bool {
        !matches!(self, Self::Playing)
    }
}

/// Why a submission was refused
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rejection {
    /// Fewer than 5 letters
    Incomplete,
    /// Not in the dictionary
    UnknownWord,
}

/// What a single input did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// No state change
    Ignored,
    Typed(u8),
    Deleted,
    Scored {
        row: usize,
        feedback: Feedback,
        status: GameStatus,
    },
    /// Submission refused; the row jiggles until `timer` fires
    Rejected {
        reason: Rejection,
        timer: JiggleTimer,
    },
    Started,
}

pub struct Game<S: Storage> {
    storage: S,
    words: WordSource,
    grid: Grid,
    current_row: usize,
    keys: KeyColours,
    jiggle: Jiggle,
    stats: Statistics,
}

impl<S: Storage> Game<S> {
    /// Create a game, resuming any progress saved in `storage`
    ///
    /// Unreadable saved state is logged and replaced by a fresh game.
    pub fn new(words: WordSource, storage: S, config: &GameConfig) -> Self {
        let mut game = Self {
            storage,
            words,
            grid: Grid::new(),
            current_row: 0,
            keys: KeyColours::new(),
            jiggle: Jiggle::new(config.jiggle),
            stats: Statistics::default(),
        };
        game.restore();
        game
    }

    fn restore(&mut self) {
        match load_answer_index(&self.storage) {
            Decoded::Found(index) => self.words.set_index(index),
            Decoded::Absent => {}
            Decoded::Malformed(reason) => warn!(%reason, "ignoring saved answer index"),
        }

        match read_json::<Statistics>(&self.storage, STATISTICS_KEY) {
            Decoded::Found(stats) => self.stats = stats,
            Decoded::Absent => {}
            Decoded::Malformed(reason) => warn!(%reason, "ignoring saved statistics"),
        }

        let saved = match load_grid(&self.storage) {
            Decoded::Found(saved) if saved.has_progress() => saved,
            Decoded::Found(_) | Decoded::Absent => {
                debug!("no saved game, starting fresh");
                return;
            }
            Decoded::Malformed(reason) => {
                warn!(%reason, "saved game is malformed, starting fresh");
                return;
            }
        };

        // The rows only make sense against the answer they were scored with
        let answer_index = match load_answer(&self.storage) {
            Decoded::Found(answer) => self
                .words
                .position(&answer)
                .ok_or_else(|| format!("{answer} is not in the answer list")),
            Decoded::Absent => Err("no answer saved".to_string()),
            Decoded::Malformed(reason) => Err(reason),
        };
        match answer_index {
            Ok(index) => self.words.set_index(index),
            Err(reason) => {
                warn!(%reason, "saved game has no known answer, starting fresh");
                return;
            }
        }

        self.grid = Grid::from_saved(&saved);
        self.current_row = saved.first_empty_row();

        for row in &self.grid.rows()[..self.current_row] {
            if let Some(feedback) = row.feedback() {
                for (letter, &colour) in row.guess().bytes().zip(feedback.colours()) {
                    self.keys.set_key_colour(letter, colour);
                }
            }
        }

        info!(
            rows = self.current_row,
            status = ?self.status(),
            "resumed saved game"
        );
    }

    /// Route a physical key event
    ///
    /// Key-down events with ctrl or meta are ignored entirely.
    ///
    /// # Errors
    /// Returns `GameError` if a submission could not be persisted.
    pub fn handle_event(&mut self, event: KeyEvent) -> Result<Outcome, GameError> {
        match event {
            KeyEvent::Down { key, ctrl, meta } => self.key_down(key, ctrl, meta),
            KeyEvent::Up => {
                self.key_up();
                Ok(Outcome::Ignored)
            }
        }
    }

    /// Physical key pressed: highlight it and route it
    ///
    /// # Errors
    /// Returns `GameError` if a submission could not be persisted.
    pub fn key_down(&mut self, key: RawKey, ctrl: bool, meta: bool) -> Result<Outcome, GameError> {
        let Some(key) = map_key_down(key, ctrl, meta) else {
            return Ok(Outcome::Ignored);
        };
        self.keys.set_active_key(Some(key));
        self.press(key)
    }

    /// Physical key released
    pub fn key_up(&mut self) {
        self.keys.set_active_key(None);
    }

    /// Route a logical key (physical or on-screen keyboard)
    ///
    /// # Errors
    /// Returns `GameError` if a submission could not be persisted.
    pub fn press(&mut self, key: Key) -> Result<Outcome, GameError> {
        match key {
            Key::Letter(letter) => Ok(self.type_letter(letter)),
            Key::Delete => Ok(self.delete_letter()),
            Key::Submit => self.submit(),
        }
    }

    fn type_letter(&mut self, letter: u8) -> Outcome {
        if self.status().is_over() || !letter.is_ascii_alphabetic() {
            return Outcome::Ignored;
        }
        let letter = letter.to_ascii_uppercase();
        if self.grid.push_letter(self.current_row, letter) {
            Outcome::Typed(letter)
        } else {
            Outcome::Ignored
        }
    }

    fn delete_letter(&mut self) -> Outcome {
        if !self.status().is_over() && self.grid.pop_letter(self.current_row) {
            Outcome::Deleted
        } else {
            Outcome::Ignored
        }
    }

    fn submit(&mut self) -> Result<Outcome, GameError> {
        if self.status().is_over() {
            return Ok(Outcome::Ignored);
        }

        let row = self.current_row;
        let guess = self.grid.rows()[row].guess();

        let word = if guess.len() < WORD_LENGTH {
            Err(Rejection::Incomplete)
        } else if self.words.is_guess_valid(guess) {
            Word::new(guess).map_err(|_| Rejection::UnknownWord)
        } else {
            Err(Rejection::UnknownWord)
        };

        let word = match word {
            Ok(word) => word,
            Err(reason) => {
                debug!(row, guess, ?reason, "submission rejected");
                let timer = self.jiggle.set(Instant::now());
                return Ok(Outcome::Rejected { reason, timer });
            }
        };

        let feedback = Feedback::score(&word, self.words.current_answer());
        self.grid.set_feedback(row, feedback);
        for (&letter, &colour) in word.chars().iter().zip(feedback.colours()) {
            self.keys.set_key_colour(letter, colour);
        }
        self.jiggle.clear();
        self.current_row += 1;

        let status = self.status();
        info!(row, guess = %word, feedback = %feedback.to_emoji(), ?status, "guess scored");

        match status {
            GameStatus::Won => self.stats.record_win(self.current_row),
            GameStatus::Lost => self.stats.record_loss(),
            GameStatus::Playing => {}
        }
        // Count the result before the grid that shows it is saved
        if status.is_over() {
            write_json(&mut self.storage, STATISTICS_KEY, &self.stats)?;
        }
        save_answer(&mut self.storage, self.words.current_answer().text())?;
        save_grid(&mut self.storage, &self.grid.to_saved())?;

        Ok(Outcome::Scored {
            row,
            feedback,
            status,
        })
    }

    /// Abandon the current game and start on the next answer
    ///
    /// Accepted in every state. The saved grid is overwritten with an empty one.
    ///
    /// # Errors
    /// Returns `GameError` if the reset could not be persisted.
    pub fn new_game(&mut self) -> Result<Outcome, GameError> {
        self.grid = Grid::new();
        self.current_row = 0;
        self.words.next_answer();
        self.keys.reset_key_colours();
        self.jiggle.clear();

        save_grid(&mut self.storage, &SavedGrid::default())?;
        save_answer(&mut self.storage, self.words.current_answer().text())?;
        save_answer_index(&mut self.storage, self.words.index())?;

        info!(answer_index = self.words.index(), "new game started");
        Ok(Outcome::Started)
    }

    /// Playing, Won or Lost, derived from the grid
    #[must_use]
    pub fn status(&self) -> GameStatus {
        let last_won = self
            .current_row
            .checked_sub(1)
            .and_then(|i| self.grid.row(i))
            .is_some_and(super::grid::Row::is_win);

        if last_won {
            GameStatus::Won
        } else if self.current_row >= MAX_GUESSES {
            GameStatus::Lost
        } else {
            GameStatus::Playing
        }
    }

    /// True once the game is won or attempts are exhausted
    #[must_use]
    pub fn should_show_modal(&self) -> bool {
        self.status().is_over()
    }

    /// True if `row` is the active row and the jiggle flag is set
    #[must_use]
    pub fn should_jiggle(&self, row: usize) -> bool {
        self.jiggle.is_set() && row == self.current_row
    }

    /// Deliver an auto-clear timer; stale timers are ignored
    pub fn fire_jiggle(&mut self, timer: JiggleTimer) -> bool {
        self.jiggle.fire(timer)
    }

    /// The timer that will clear the jiggle flag, if set
    #[must_use]
    pub fn pending_jiggle(&self) -> Option<JiggleTimer> {
        self.jiggle.pending()
    }

    #[must_use]
    pub const fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Index of the row receiving input; 6 when the grid is full
    #[must_use]
    pub const fn current_row(&self) -> usize {
        self.current_row
    }

    #[must_use]
    pub fn answer(&self) -> &Word {
        self.words.current_answer()
    }

    #[must_use]
    pub const fn words(&self) -> &WordSource {
        &self.words
    }

    #[must_use]
    pub const fn keys(&self) -> &KeyColours {
        &self.keys
    }

    /// Display classes for an on-screen key
    #[must_use]
    pub fn key_classes(&self, key: Key) -> KeyClasses {
        self.keys.key_classes(key)
    }

    #[must_use]
    pub const fn statistics(&self) -> &Statistics {
        &self.stats
    }

    #[must_use]
    pub const fn storage(&self) -> &S {
        &self.storage
    }

    /// Tear down the game, handing back its storage
    pub fn into_storage(self) -> S {
        self.storage
    }
}
