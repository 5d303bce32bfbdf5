//! Input source capability
//!
//! A source is subscribed once when a session starts and unsubscribed once
//! when it ends. Between the two the session pulls events one at a time.

use super::{KeyEvent, RawKey};
use std::cell::Cell;
use std::collections::VecDeque;
use std::io;
use std::rc::Rc;
use std::time::Duration;

/// Event delivered to a session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    Key(KeyEvent),
    /// Shell action: abandon the current game and start the next one
    NewGame,
    /// Shell action: end the session
    Quit,
}

/// Source of raw input events
pub trait InputSource {
    /// Start delivering events
    ///
    /// # Errors
    /// Returns an I/O error if the underlying device cannot be acquired.
    fn subscribe(&mut self) -> io::Result<()>;

    /// Stop delivering events and release the device
    ///
    /// # Errors
    /// Returns an I/O error if the device cannot be restored.
    fn unsubscribe(&mut self) -> io::Result<()>;

    /// Wait up to `timeout` for the next event (`None` waits indefinitely)
    ///
    /// Returns `Ok(None)` when the timeout elapses first.
    ///
    /// # Errors
    /// Returns an I/O error if reading from the device fails.
    fn next_event(&mut self, timeout: Option<Duration>) -> io::Result<Option<InputEvent>>;
}

/// Shared counters recording subscribe/unsubscribe calls
#[derive(Debug, Default, Clone)]
pub struct SubscriptionLog {
    subscribed: Rc<Cell<u32>>,
    unsubscribed: Rc<Cell<u32>>,
}

impl SubscriptionLog {
    #[must_use]
    pub fn subscribed(&self) -> u32 {
        self.subscribed.get()
    }

    #[must_use]
    pub fn unsubscribed(&self) -> u32 {
        self.unsubscribed.get()
    }

    /// True while subscribed and not yet released
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.subscribed() > self.unsubscribed()
    }
}

/// Test double replaying a fixed list of events
///
/// Once the script runs out it reports `Quit`.
#[derive(Debug, Default)]
pub struct ScriptedInput {
    events: VecDeque<InputEvent>,
    log: SubscriptionLog,
}

impl ScriptedInput {
    #[must_use]
    pub fn new(events: impl IntoIterator<Item = InputEvent>) -> Self {
        Self {
            events: events.into_iter().collect(),
            log: SubscriptionLog::default(),
        }
    }

    /// Script typing `text` (press and release per character)
    ///
    /// `\n` presses Enter and `<` presses Backspace.
    #[must_use]
    pub fn typing(text: &str) -> Self {
        let events = text.chars().flat_map(|c| {
            let key = match c {
                '\n' => RawKey::Enter,
                '<' => RawKey::Backspace,
                other => RawKey::Char(other),
            };
            [
                InputEvent::Key(KeyEvent::down(key)),
                InputEvent::Key(KeyEvent::Up),
            ]
        });
        Self::new(events)
    }

    /// Append an event to the script
    pub fn push(&mut self, event: InputEvent) {
        self.events.push_back(event);
    }

    /// Handle onto the subscription counters
    #[must_use]
    pub fn log(&self) -> SubscriptionLog {
        self.log.clone()
    }
}

impl InputSource for ScriptedInput {
    fn subscribe(&mut self) -> io::Result<()> {
        self.log.subscribed.set(self.log.subscribed.get() + 1);
        Ok(())
    }

    fn unsubscribe(&mut self) -> io::Result<()> {
        self.log.unsubscribed.set(self.log.unsubscribed.get() + 1);
        Ok(())
    }

    fn next_event(&mut self, _timeout: Option<Duration>) -> io::Result<Option<InputEvent>> {
        Ok(Some(self.events.pop_front().unwrap_or(InputEvent::Quit)))
    }
}
