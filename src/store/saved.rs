//! Persisted game layout
//!
//! - `guesses`: array of 6 strings, 0-5 uppercase letters each
//! - `colours`: array of 6 arrays of 5 labels (`"grey"`, `"yellow"`, `"green"`, `""` = unset)
//! - `answer`: the word the stored grid was scored against
//! - `answerIndex`: position of the active answer in the answer sequence
//! - `statistics`: cumulative results across games

use super::{Decoded, Storage, StoreError, read_json, write_json};
use crate::core::{Colour, MAX_GUESSES, WORD_LENGTH};

pub const GUESSES_KEY: &str = "guesses";
pub const COLOURS_KEY: &str = "colours";
pub const ANSWER_KEY: &str = "answer";
pub const ANSWER_INDEX_KEY: &str = "answerIndex";
pub const STATISTICS_KEY: &str = "statistics";

/// Colours of one stored row, `None` for unset cells
pub type SavedColours = [Option<Colour>; WORD_LENGTH];

/// The grid as stored: submitted guesses and their colours
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SavedGrid {
    pub guesses: [String; MAX_GUESSES],
    pub colours: [SavedColours; MAX_GUESSES],
}

impl Default for SavedGrid {
    fn default() -> Self {
        Self {
            guesses: Default::default(),
            colours: [[None; WORD_LENGTH]; MAX_GUESSES],
        }
    }
}

impl SavedGrid {
    /// Index of the first row without a guess, or 6 if every row is filled
    #[must_use]
    pub fn first_empty_row(&self) -> usize {
        self.guesses
            .iter()
            .position(String::is_empty)
            .unwrap_or(MAX_GUESSES)
    }

    /// True when row 0 holds a guess
    #[must_use]
    pub fn has_progress(&self) -> bool {
        !self.guesses[0].is_empty()
    }
}

/// Read and validate the stored grid
///
/// `Absent` unless both keys exist. Wrong-shaped data is `Malformed`.
pub fn load_grid(storage: &impl Storage) -> Decoded<SavedGrid> {
    let guesses = read_json::<Vec<String>>(storage, GUESSES_KEY);
    let colours = read_json::<Vec<Vec<String>>>(storage, COLOURS_KEY);

    match (guesses, colours) {
        (Decoded::Malformed(reason), _) | (_, Decoded::Malformed(reason)) => {
            Decoded::Malformed(reason)
        }
        (Decoded::Found(guesses), Decoded::Found(colours)) => {
            Decoded::Found((guesses, colours)).and_then(|(g, c)| decode_grid(g, c))
        }
        _ => Decoded::Absent,
    }
}

/// Write the grid under `guesses` and `colours`
///
/// # Errors
/// Returns `StoreError` if either write fails.
pub fn save_grid(storage: &mut impl Storage, grid: &SavedGrid) -> Result<(), StoreError> {
    let colours: Vec<Vec<&str>> = grid
        .colours
        .iter()
        .map(|row| row.iter().map(|c| c.map_or("", Colour::label)).collect())
        .collect();

    write_json(storage, GUESSES_KEY, &grid.guesses)?;
    write_json(storage, COLOURS_KEY, &colours)
}

/// Read the answer the stored grid belongs to
pub fn load_answer(storage: &impl Storage) -> Decoded<String> {
    read_json::<String>(storage, ANSWER_KEY).and_then(|answer| {
        if answer.len() == WORD_LENGTH && answer.bytes().all(|b| b.is_ascii_uppercase()) {
            Ok(answer)
        } else {
            Err(format!("invalid answer {answer:?}"))
        }
    })
}

/// Write the answer the grid is scored against
///
/// # Errors
/// Returns `StoreError` if the write fails.
pub fn save_answer(storage: &mut impl Storage, answer: &str) -> Result<(), StoreError> {
    write_json(storage, ANSWER_KEY, answer)
}

/// Read the stored answer position
pub fn load_answer_index(storage: &impl Storage) -> Decoded<usize> {
    read_json(storage, ANSWER_INDEX_KEY)
}

/// Write the answer position
///
/// # Errors
/// Returns `StoreError` if the write fails.
pub fn save_answer_index(storage: &mut impl Storage, index: usize) -> Result<(), StoreError> {
    write_json(storage, ANSWER_INDEX_KEY, &index)
}

fn decode_grid(guesses: Vec<String>, colours: Vec<Vec<String>>) -> Result<SavedGrid, String> {
    let guesses: [String; MAX_GUESSES] = guesses
        .try_into()
        .map_err(|g: Vec<String>| format!("expected {MAX_GUESSES} guesses, got {}", g.len()))?;

    if colours.len() != MAX_GUESSES {
        return Err(format!(
            "expected {MAX_GUESSES} colour rows, got {}",
            colours.len()
        ));
    }

    let mut grid = SavedGrid {
        guesses,
        ..SavedGrid::default()
    };

    for (row, labels) in colours.iter().enumerate() {
        if labels.len() != WORD_LENGTH {
            return Err(format!(
                "row {row}: expected {WORD_LENGTH} colours, got {}",
                labels.len()
            ));
        }
        for (col, label) in labels.iter().enumerate() {
            grid.colours[row][col] = match label.as_str() {
                "" => None,
                other => Some(
                    Colour::from_label(other)
                        .ok_or_else(|| format!("row {row}: unknown colour {other:?}"))?,
                ),
            };
        }
    }

    let filled = grid.first_empty_row();
    for (row, guess) in grid.guesses.iter().enumerate() {
        if !guess.bytes().all(|b| b.is_ascii_uppercase()) {
            return Err(format!("row {row}: invalid guess {guess:?}"));
        }
        let scored = grid.colours[row].iter().all(Option::is_some);
        if row < filled && (guess.len() != WORD_LENGTH || !scored) {
            return Err(format!("row {row}: guess {guess:?} was never scored"));
        }
        if row >= filled && !guess.is_empty() {
            return Err(format!("row {row}: guess after an empty row"));
        }
        if row >= filled && grid.colours[row].iter().any(Option::is_some) {
            return Err(format!("row {row}: colours without a guess"));
        }
    }

    Ok(grid)
}
