//! The game: state machine, key hints, statistics and render state

mod grid;
mod jiggle;
mod keys;
mod state;
mod stats;
mod view;

pub use grid::{Grid, Row};
pub use jiggle::{JIGGLE_DURATION, JiggleTimer};
pub use keys::{KeyClass, KeyClasses, KeyColours};
pub use state::{Game, GameError, GameStatus, Outcome, Rejection};
pub use stats::{Statistic, Statistics};
pub use view::{GameResult, GameView, KEYBOARD_LAYOUT, KeyView, RowView, Summary};
