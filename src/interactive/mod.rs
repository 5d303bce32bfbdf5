//! Interactive terminal interface
//!
//! A thin shell over [`crate::game::Game`]: draws its render state with
//! ratatui and feeds it keyboard events through a [`crate::session::Session`].

mod app;
mod rendering;

pub use app::{Message, MessageStyle, Messages, run_tui};
