//! Terminal keyboard input via crossterm

use super::{InputEvent, InputSource, KeyEvent, RawKey};
use crossterm::event::{
    self, Event, KeyCode, KeyEventKind, KeyModifiers, KeyboardEnhancementFlags,
    PopKeyboardEnhancementFlags, PushKeyboardEnhancementFlags,
};
use crossterm::execute;
use crossterm::terminal::{disable_raw_mode, enable_raw_mode, supports_keyboard_enhancement};
use std::io;
use std::time::Duration;
use tracing::{debug, error};

/// How long a key counts as held when the terminal cannot report releases
const RELEASE_DELAY: Duration = Duration::from_millis(150);

/// Keyboard events from the controlling terminal
///
/// Subscribing switches the terminal to raw mode and, where supported, asks
/// for key release events. Unsubscribing restores both. Without release
/// reporting, a key-up is synthesised once input goes quiet after a key-down.
///
/// Shell shortcuts: Esc or Ctrl-C quits, Ctrl-N starts a new game.
#[derive(Debug, Default)]
pub struct TerminalInput {
    enhanced: bool,
    release_pending: bool,
}

impl TerminalInput {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl TerminalInput {
    /// Poll window: capped by `RELEASE_DELAY` while a synthetic release is owed
    fn wait_for(&self, timeout: Option<Duration>) -> Option<Duration> {
        if self.release_pending {
            Some(timeout.map_or(RELEASE_DELAY, |t| t.min(RELEASE_DELAY)))
        } else {
            timeout
        }
    }

    /// Nothing arrived in time; deliver the owed release, if any
    fn idle(&mut self) -> Option<InputEvent> {
        if std::mem::take(&mut self.release_pending) {
            Some(InputEvent::Key(KeyEvent::Up))
        } else {
            None
        }
    }

    fn track(&mut self, event: Option<InputEvent>) -> Option<InputEvent> {
        match event {
            Some(InputEvent::Key(KeyEvent::Down { .. })) if !self.enhanced => {
                self.release_pending = true;
            }
            Some(InputEvent::Key(KeyEvent::Up)) => self.release_pending = false,
            _ => {}
        }
        event
    }
}

/// Leave raw mode again if a later setup step failed
fn restore_on_error(
    result: io::Result<()>,
    restore: impl FnOnce() -> io::Result<()>,
) -> io::Result<()> {
    if result.is_err()
        && let Err(e) = restore()
    {
        error!(error = %e, "failed to leave raw mode");
    }
    result
}

impl InputSource for TerminalInput {
    fn subscribe(&mut self) -> io::Result<()> {
        enable_raw_mode()?;
        self.enhanced = supports_keyboard_enhancement().unwrap_or(false);
        self.release_pending = false;
        if self.enhanced {
            let pushed = execute!(
                io::stdout(),
                PushKeyboardEnhancementFlags(KeyboardEnhancementFlags::REPORT_EVENT_TYPES)
            );
            restore_on_error(pushed, disable_raw_mode)?;
        }
        debug!(key_release = self.enhanced, "terminal input subscribed");
        Ok(())
    }

    fn unsubscribe(&mut self) -> io::Result<()> {
        if self.enhanced {
            execute!(io::stdout(), PopKeyboardEnhancementFlags)?;
            self.enhanced = false;
        }
        disable_raw_mode()?;
        debug!("terminal input unsubscribed");
        Ok(())
    }

    fn next_event(&mut self, timeout: Option<Duration>) -> io::Result<Option<InputEvent>> {
        if let Some(wait) = self.wait_for(timeout)
            && !event::poll(wait)?
        {
            return Ok(self.idle());
        }

        let event = match event::read()? {
            Event::Key(key) => translate(key),
            _ => None,
        };
        Ok(self.track(event))
    }
}

fn translate(key: event::KeyEvent) -> Option<InputEvent> {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    let meta = key
        .modifiers
        .intersects(KeyModifiers::SUPER | KeyModifiers::META);

    if key.kind == KeyEventKind::Release {
        return Some(InputEvent::Key(KeyEvent::Up));
    }

    match key.code {
        KeyCode::Esc => Some(InputEvent::Quit),
        KeyCode::Char('c') if ctrl => Some(InputEvent::Quit),
        KeyCode::Char('n') if ctrl => Some(InputEvent::NewGame),
        code => {
            let raw = match code {
                KeyCode::Enter => RawKey::Enter,
                KeyCode::Backspace => RawKey::Backspace,
                KeyCode::Char(c) => RawKey::Char(c),
                _ => RawKey::Other,
            };
            Some(InputEvent::Key(KeyEvent::Down {
                key: raw,
                ctrl,
                meta,
            }))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyEventState;

    fn key(code: KeyCode, modifiers: KeyModifiers, kind: KeyEventKind) -> event::KeyEvent {
        event::KeyEvent {
            code,
            modifiers,
            kind,
            state: KeyEventState::NONE,
        }
    }

    #[test]
    fn press_translates_to_key_down() {
        let event = translate(key(
            KeyCode::Char('a'),
            KeyModifiers::NONE,
            KeyEventKind::Press,
        ));
        assert_eq!(
            event,
            Some(InputEvent::Key(KeyEvent::down(RawKey::Char('a'))))
        );
    }

    #[test]
    fn release_translates_to_key_up() {
        let event = translate(key(
            KeyCode::Char('a'),
            KeyModifiers::NONE,
            KeyEventKind::Release,
        ));
        assert_eq!(event, Some(InputEvent::Key(KeyEvent::Up)));
    }

    #[test]
    fn modifiers_are_carried() {
        let event = translate(key(
            KeyCode::Char('r'),
            KeyModifiers::SUPER,
            KeyEventKind::Press,
        ));
        assert_eq!(
            event,
            Some(InputEvent::Key(KeyEvent::Down {
                key: RawKey::Char('r'),
                ctrl: false,
                meta: true,
            }))
        );
    }

    #[test]
    fn release_is_synthesised_without_enhancement() {
        let mut input = TerminalInput::new();
        assert_eq!(input.wait_for(None), None);
        assert_eq!(input.idle(), None);

        let down = Some(InputEvent::Key(KeyEvent::down(RawKey::Char('a'))));
        assert_eq!(input.track(down), down);
        assert_eq!(input.wait_for(None), Some(RELEASE_DELAY));
        assert_eq!(
            input.wait_for(Some(Duration::from_millis(10))),
            Some(Duration::from_millis(10))
        );

        assert_eq!(input.idle(), Some(InputEvent::Key(KeyEvent::Up)));
        assert_eq!(input.idle(), None);
        assert_eq!(input.wait_for(None), None);
    }

    #[test]
    fn enhanced_terminal_reports_its_own_releases() {
        let mut input = TerminalInput {
            enhanced: true,
            release_pending: false,
        };
        input.track(Some(InputEvent::Key(KeyEvent::down(RawKey::Enter))));
        assert_eq!(input.idle(), None);
    }

    #[test]
    fn failed_setup_leaves_raw_mode() {
        let mut restored = 0;
        let result = restore_on_error(Err(io::Error::other("no tty")), || {
            restored += 1;
            Ok(())
        });
        assert!(result.is_err());
        assert_eq!(restored, 1);

        let result = restore_on_error(Ok(()), || {
            restored += 1;
            Ok(())
        });
        assert!(result.is_ok());
        assert_eq!(restored, 1);
    }

    #[test]
    fn shell_shortcuts() {
        assert_eq!(
            translate(key(KeyCode::Esc, KeyModifiers::NONE, KeyEventKind::Press)),
            Some(InputEvent::Quit)
        );
        assert_eq!(
            translate(key(
                KeyCode::Char('c'),
                KeyModifiers::CONTROL,
                KeyEventKind::Press
            )),
            Some(InputEvent::Quit)
        );
        assert_eq!(
            translate(key(
                KeyCode::Char('n'),
                KeyModifiers::CONTROL,
                KeyEventKind::Press
            )),
            Some(InputEvent::NewGame)
        );
    }
}
