//! The 6-row board of guesses and their feedback

use crate::core::{Colour, Feedback, MAX_GUESSES, WORD_LENGTH};
use crate::store::saved::SavedGrid;

/// One row: the letters typed so far and, once submitted, their feedback
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Row {
    guess: String,
    feedback: Option<Feedback>,
}

impl Row {
    /// Letters in this row (0-5 uppercase)
    #[must_use]
    pub fn guess(&self) -> &str {
        &self.guess
    }

    /// Feedback, present once the row has been submitted
    #[must_use]
    pub const fn feedback(&self) -> Option<&Feedback> {
        self.feedback.as_ref()
    }

    /// Colour of one cell, `None` while unscored
    #[must_use]
    pub fn colour(&self, position: usize) -> Option<Colour> {
        self.feedback.map(|f| f.colours()[position])
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.guess.is_empty()
    }

    #[must_use]
    pub fn is_full(&self) -> bool {
        self.guess.len() == WORD_LENGTH
    }

    /// True if the row was scored all-correct
    #[must_use]
    pub fn is_win(&self) -> bool {
        self.feedback.is_some_and(|f| f.is_win())
    }
}

/// Exactly six rows, indexed 0-5
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Grid {
    rows: [Row; MAX_GUESSES],
}

impl Grid {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn rows(&self) -> &[Row; MAX_GUESSES] {
        &self.rows
    }

    /// Row at `index`, `None` past the last row
    #[must_use]
    pub fn row(&self, index: usize) -> Option<&Row> {
        self.rows.get(index)
    }

    /// Append a letter; returns false if the row is full or out of range
    pub fn push_letter(&mut self, index: usize, letter: u8) -> bool {
        match self.rows.get_mut(index) {
            Some(row) if !row.is_full() => {
                row.guess.push(char::from(letter.to_ascii_uppercase()));
                true
            }
            _ => false,
        }
    }

    /// Remove the last letter; returns false if there was none
    pub fn pop_letter(&mut self, index: usize) -> bool {
        self.rows
            .get_mut(index)
            .and_then(|row| row.guess.pop())
            .is_some()
    }

    /// Freeze a row with its feedback
    ///
    /// # Panics
    /// Panics if `index` >= 6
    pub fn set_feedback(&mut self, index: usize, feedback: Feedback) {
        self.rows[index].feedback = Some(feedback);
    }

    /// Snapshot in storage layout
    ///
    /// Only submitted rows are included; letters typed into an unsubmitted
    /// row are not part of the saved game.
    #[must_use]
    pub fn to_saved(&self) -> SavedGrid {
        let mut saved = SavedGrid::default();
        for (i, row) in self.rows.iter().enumerate() {
            if let Some(feedback) = row.feedback {
                saved.guesses[i].clone_from(&row.guess);
                saved.colours[i] = feedback.colours().map(Some);
            }
        }
        saved
    }

    /// Rebuild from a validated stored grid
    #[must_use]
    pub fn from_saved(saved: &SavedGrid) -> Self {
        let mut grid = Self::new();
        for (row, (guess, colours)) in grid
            .rows
            .iter_mut()
            .zip(saved.guesses.iter().zip(&saved.colours))
        {
            row.guess.clone_from(guess);
            row.feedback = colours_to_feedback(colours);
        }
        grid
    }

    /// Emoji share text for the submitted rows, one line per row
    #[must_use]
    pub fn share_text(&self) -> String {
        self.rows
            .iter()
            .filter_map(|row| row.feedback.map(|f| f.to_emoji()))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

fn colours_to_feedback(colours: &[Option<Colour>; WORD_LENGTH]) -> Option<Feedback> {
    let mut result = [Colour::Absent; WORD_LENGTH];
    for (slot, colour) in result.iter_mut().zip(colours) {
        *slot = (*colour)?;
    }
    Some(Feedback::new(result))
}
