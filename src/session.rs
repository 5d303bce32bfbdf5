//! Binding between an input source and a game
//!
//! A session subscribes to its input source once, when created, and
//! unsubscribes once, when dropped. Each call to [`Session::step`] handles one
//! event to completion, so transitions never interleave.

use crate::game::{Game, GameError, Outcome};
use crate::input::{InputEvent, InputSource};
use crate::store::Storage;
use std::io;
use std::time::Instant;
use thiserror::Error;
use tracing::{debug, error};

#[derive(Debug, Error)]
pub enum SessionError {
    #[error("input failed: {0}")]
    Input(#[from] io::Error),
    #[error(transparent)]
    Game(#[from] GameError),
}

/// Result of one step
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    /// Nothing arrived before the wait ended
    Idle,
    /// An input was routed to the game
    Handled(Outcome),
    /// The jiggle timer fired and lowered the flag
    JiggleCleared,
    /// The user asked to leave
    Quit,
}

pub struct Session<'g, S: Storage, I: InputSource> {
    game: &'g mut Game<S>,
    input: I,
}

impl<'g, S: Storage, I: InputSource> Session<'g, S, I> {
    /// Subscribe `input` and attach it to `game`
    ///
    /// # Errors
    /// Returns an I/O error if the input source cannot be subscribed.
    pub fn new(game: &'g mut Game<S>, mut input: I) -> io::Result<Self> {
        input.subscribe()?;
        debug!("session started");
        Ok(Self { game, input })
    }

    #[must_use]
    pub fn game(&self) -> &Game<S> {
        self.game
    }

    /// Wait for and handle one event
    ///
    /// While the jiggle flag is up the wait is bounded by its timer, which is
    /// fired here once its deadline passes.
    ///
    /// # Errors
    /// Returns `SessionError` if reading input or persisting the game fails.
    pub fn step(&mut self) -> Result<Step, SessionError> {
        let timeout = self
            .game
            .pending_jiggle()
            .map(|timer| timer.deadline().saturating_duration_since(Instant::now()));

        if timeout.is_some_and(|t| t.is_zero()) {
            return Ok(self.fire_due_jiggle());
        }

        match self.input.next_event(timeout)? {
            None => Ok(self.fire_due_jiggle()),
            Some(InputEvent::Quit) => Ok(Step::Quit),
            Some(InputEvent::NewGame) => Ok(Step::Handled(self.game.new_game()?)),
            Some(InputEvent::Key(event)) => Ok(Step::Handled(self.game.handle_event(event)?)),
        }
    }

    /// Handle events until the user quits
    ///
    /// # Errors
    /// Returns `SessionError` if reading input or persisting the game fails.
    pub fn run(&mut self) -> Result<(), SessionError> {
        while self.step()? != Step::Quit {}
        Ok(())
    }

    fn fire_due_jiggle(&mut self) -> Step {
        match self.game.pending_jiggle() {
            Some(timer) if timer.deadline() <= Instant::now() && self.game.fire_jiggle(timer) => {
                Step::JiggleCleared
            }
            _ => Step::Idle,
        }
    }
}

impl<S: Storage, I: InputSource> Drop for Session<'_, S, I> {
    fn drop(&mut self) {
        if let Err(e) = self.input.unsubscribe() {
            error!(error = %e, "failed to release input source");
        }
        debug!("session ended");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GameConfig;
    use crate::game::GameStatus;
    use crate::input::{KeyEvent, RawKey, ScriptedInput};
    use crate::store::MemoryStorage;
    use crate::words::WordSource;
    use crate::words::loader::words_from_slice;
    use std::time::Duration;

    fn game(jiggle: Duration) -> Game<MemoryStorage> {
        let words = WordSource::new(
            words_from_slice(&["erase", "llama"]),
            words_from_slice(&["crane"]),
        )
        .unwrap();
        Game::new(words, MemoryStorage::new(), &GameConfig { jiggle })
    }

    #[test]
    fn subscribes_once_and_unsubscribes_on_drop() {
        let mut game = game(Duration::from_millis(500));
        let input = ScriptedInput::typing("crane\n");
        let log = input.log();

        {
            let mut session = Session::new(&mut game, input).unwrap();
            assert!(log.is_active());
            session.run().unwrap();
            assert_eq!(log.subscribed(), 1);
            assert_eq!(log.unsubscribed(), 0);
        }

        assert_eq!(log.unsubscribed(), 1);
        assert_eq!(game.current_row(), 1);
    }

    #[test]
    fn unsubscribes_when_step_fails() {
        let mut storage = MemoryStorage::new();
        storage.set_read_only(true);
        let words = WordSource::new(words_from_slice(&["erase"]), []).unwrap();
        let mut game = Game::new(words, storage, &GameConfig::default());
        let input = ScriptedInput::typing("erase\n");
        let log = input.log();

        {
            let mut session = Session::new(&mut game, input).unwrap();
            assert!(matches!(session.run(), Err(SessionError::Game(_))));
        }
        assert!(!log.is_active());
    }

    #[test]
    fn routes_keys_and_shell_actions() {
        let mut game = game(Duration::from_millis(500));
        let mut input = ScriptedInput::typing("erase\n");
        input.push(InputEvent::NewGame);
        input.push(InputEvent::Key(KeyEvent::down(RawKey::Char('l'))));

        let mut session = Session::new(&mut game, input).unwrap();
        session.run().unwrap();
        drop(session);

        assert_eq!(game.status(), GameStatus::Playing);
        assert_eq!(game.answer().text(), "LLAMA");
        assert_eq!(game.grid().rows()[0].guess(), "L");
        assert_eq!(game.statistics().games_won, 1);
    }

    #[test]
    fn expired_jiggle_is_cleared_on_step() {
        let mut game = game(Duration::ZERO);
        let input = ScriptedInput::typing("\n");
        let mut session = Session::new(&mut game, input).unwrap();

        let step = session.step().unwrap();
        assert!(matches!(step, Step::Handled(Outcome::Rejected { .. })));
        assert!(session.game().should_jiggle(0));

        assert_eq!(session.step().unwrap(), Step::JiggleCleared);
        assert!(!session.game().should_jiggle(0));
    }
}
