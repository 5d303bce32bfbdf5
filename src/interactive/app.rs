//! TUI event loop and status messages

use crate::game::{Game, GameStatus, Outcome, Rejection};
use crate::input::TerminalInput;
use crate::session::{Session, Step};
use crate::store::Storage;
use anyhow::Result;
use crossterm::{
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use tracing::error;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

/// Recent status messages, newest last
#[derive(Debug, Clone, Default)]
pub struct Messages {
    items: Vec<Message>,
}

impl Messages {
    /// Number of messages kept
    pub const CAPACITY: usize = 5;

    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, text: impl Into<String>, style: MessageStyle) {
        self.items.push(Message {
            text: text.into(),
            style,
        });

        if self.items.len() > Self::CAPACITY {
            self.items.remove(0);
        }
    }

    #[must_use]
    pub fn items(&self) -> &[Message] {
        &self.items
    }

    /// Describe what an input did, for outcomes worth telling the player
    pub fn note<S: Storage>(&mut self, outcome: Outcome, game: &Game<S>) {
        match outcome {
            Outcome::Rejected {
                reason: Rejection::Incomplete,
                ..
            } => self.add("Not enough letters", MessageStyle::Error),
            Outcome::Rejected {
                reason: Rejection::UnknownWord,
                ..
            } => self.add("Not in word list", MessageStyle::Error),
            Outcome::Scored {
                status: GameStatus::Won,
                row,
                ..
            } => self.add(celebration(row + 1), MessageStyle::Success),
            Outcome::Scored {
                status: GameStatus::Lost,
                ..
            } => self.add(
                format!("The word was {}", game.answer()),
                MessageStyle::Error,
            ),
            Outcome::Started => self.add("New game started!", MessageStyle::Info),
            Outcome::Scored { .. } | Outcome::Typed(_) | Outcome::Deleted | Outcome::Ignored => {}
        }
    }
}

fn celebration(guesses: usize) -> &'static str {
    match guesses {
        1 => "🎯 HOLE IN ONE! Extraordinary! 🌟",
        2 => "🔥 MAGNIFICENT! Two guesses! 🔥",
        3 => "✨ SPLENDID! Three guesses! ✨",
        4 => "👏 GREAT JOB! Four guesses! 👏",
        5 => "🎉 NICE WORK! Five guesses! 🎉",
        _ => "😅 PHEW! Got it in six! 😅",
    }
}

/// Run the TUI until the player quits
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails, if there's an I/O error
/// during rendering or event handling, or if progress could not be saved.
pub fn run_tui<S: Storage>(game: &mut Game<S>) -> Result<()> {
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, game);

    // Restore terminal
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = &res {
        error!(error = %err, "TUI exited with error");
    }
    res
}

fn run_app<B: ratatui::backend::Backend, S: Storage>(
    terminal: &mut Terminal<B>,
    game: &mut Game<S>,
) -> Result<()> {
    let mut messages = Messages::new();
    messages.add(
        "Guess the word in six tries. Ctrl-N: new game, Esc: quit",
        MessageStyle::Info,
    );

    // Raw mode lasts exactly as long as the session
    let mut session = Session::new(game, TerminalInput::new())?;

    loop {
        let view = session.game().view();
        terminal.draw(|f| super::rendering::ui(f, &view, messages.items()))?;

        match session.step()? {
            Step::Quit => break,
            Step::Handled(outcome) => messages.note(outcome, session.game()),
            Step::Idle | Step::JiggleCleared => {}
        }
    }

    Ok(())
}
