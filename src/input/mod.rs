//! Keyboard input: raw key events and the logical keys the game understands
//!
//! Raw events come from an [`InputSource`]. Key-down events map to a logical
//! [`Key`]; events carrying ctrl or meta are ignored so OS shortcuts pass through.

mod source;
mod terminal;

pub use source::{InputEvent, InputSource, ScriptedInput, SubscriptionLog};
pub use terminal::TerminalInput;

use std::fmt;

/// Logical key routed to the game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    /// Uppercase ASCII letter A-Z
    Letter(u8),
    Submit,
    Delete,
}

impl Key {
    /// Letter key for `c`, case-insensitive; `None` for anything but A-Z
    #[must_use]
    pub fn letter(c: char) -> Option<Self> {
        c.is_ascii_alphabetic()
            .then(|| Self::Letter(c.to_ascii_uppercase() as u8))
    }

    /// Label used on the on-screen keyboard
    #[must_use]
    pub fn label(self) -> String {
        match self {
            Self::Letter(b) => char::from(b).to_string(),
            Self::Submit => "↵".to_string(),
            Self::Delete => "⌫".to_string(),
        }
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.label())
    }
}

/// Physical key as reported by the input source
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RawKey {
    Char(char),
    Enter,
    Backspace,
    Other,
}

/// Physical key press or release
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyEvent {
    Down { key: RawKey, ctrl: bool, meta: bool },
    Up,
}

impl KeyEvent {
    /// Key-down without modifiers
    #[must_use]
    pub const fn down(key: RawKey) -> Self {
        Self::Down {
            key,
            ctrl: false,
            meta: false,
        }
    }
}

/// Map a key-down to the logical key it triggers
///
/// Returns `None` for modifier chords and keys the game does not use.
#[must_use]
pub fn map_key_down(key: RawKey, ctrl: bool, meta: bool) -> Option<Key> {
    if ctrl || meta {
        return None;
    }
    match key {
        RawKey::Enter => Some(Key::Submit),
        RawKey::Backspace => Some(Key::Delete),
        RawKey::Char(c) => Key::letter(c),
        RawKey::Other => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn letters_map_case_insensitively() {
        assert_eq!(
            map_key_down(RawKey::Char('a'), false, false),
            Some(Key::Letter(b'A'))
        );
        assert_eq!(
            map_key_down(RawKey::Char('Z'), false, false),
            Some(Key::Letter(b'Z'))
        );
    }

    #[test]
    fn enter_and_backspace_map_to_actions() {
        assert_eq!(map_key_down(RawKey::Enter, false, false), Some(Key::Submit));
        assert_eq!(
            map_key_down(RawKey::Backspace, false, false),
            Some(Key::Delete)
        );
    }

    #[test]
    fn modifier_chords_are_ignored() {
        assert_eq!(map_key_down(RawKey::Char('r'), true, false), None);
        assert_eq!(map_key_down(RawKey::Char('c'), false, true), None);
        assert_eq!(map_key_down(RawKey::Enter, true, false), None);
    }

    #[test]
    fn unused_keys_are_ignored() {
        assert_eq!(map_key_down(RawKey::Char('1'), false, false), None);
        assert_eq!(map_key_down(RawKey::Char('é'), false, false), None);
        assert_eq!(map_key_down(RawKey::Other, false, false), None);
    }

    #[test]
    fn key_labels() {
        assert_eq!(Key::Letter(b'Q').label(), "Q");
        assert_eq!(Key::Submit.to_string(), "↵");
        assert_eq!(Key::Delete.to_string(), "⌫");
    }
}
