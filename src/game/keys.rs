//! Keyboard hint tracking
//!
//! Remembers the best colour seen for each letter across the game's guesses.
//! Colours only ever upgrade: `Correct > Present > Absent > unset`.

use crate::core::Colour;
use crate::input::Key;
use rustc_hash::FxHashMap;

/// Display class of an on-screen key
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum KeyClass {
    #[default]
    Unset,
    Absent,
    Present,
    Correct,
}

impl From<Option<Colour>> for KeyClass {
    fn from(colour: Option<Colour>) -> Self {
        match colour {
            None => Self::Unset,
            Some(Colour::Absent) => Self::Absent,
            Some(Colour::Present) => Self::Present,
            Some(Colour::Correct) => Self::Correct,
        }
    }
}

/// Classes for one key: its colour and whether it is held down
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct KeyClasses {
    pub class: KeyClass,
    pub active: bool,
}

/// Best colour per letter plus the currently pressed key
#[derive(Debug, Clone, Default)]
pub struct KeyColours {
    colours: FxHashMap<u8, Colour>,
    active: Option<Key>,
}

impl KeyColours {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record `colour` for `letter` if it ranks above what is stored
    pub fn set_key_colour(&mut self, letter: u8, colour: Colour) {
        let letter = letter.to_ascii_uppercase();
        let slot = self.colours.entry(letter).or_insert(colour);
        if colour > *slot {
            *slot = colour;
        }
    }

    /// Best colour seen for `letter`, if any
    #[must_use]
    pub fn colour(&self, letter: u8) -> Option<Colour> {
        self.colours.get(&letter.to_ascii_uppercase()).copied()
    }

    /// Display class for `letter`
    #[must_use]
    pub fn key_class(&self, letter: u8) -> KeyClass {
        self.colour(letter).into()
    }

    /// Display classes for any on-screen key
    #[must_use]
    pub fn key_classes(&self, key: Key) -> KeyClasses {
        let class = match key {
            Key::Letter(letter) => self.key_class(letter),
            Key::Submit | Key::Delete => KeyClass::Unset,
        };
        KeyClasses {
            class,
            active: self.active == Some(key),
        }
    }

    /// Forget every colour (new game); the pressed key is kept
    pub fn reset_key_colours(&mut self) {
        self.colours.clear();
    }

    /// Record the pressed key, or `None` on release
    pub fn set_active_key(&mut self, key: Option<Key>) {
        self.active = key;
    }

    #[must_use]
    pub const fn active_key(&self) -> Option<Key> {
        self.active
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unseen_letters_are_unset() {
        let keys = KeyColours::new();
        assert_eq!(keys.key_class(b'A'), KeyClass::Unset);
        assert_eq!(keys.colour(b'Q'), None);
    }

    #[test]
    fn colours_upgrade() {
        let mut keys = KeyColours::new();
        keys.set_key_colour(b'E', Colour::Absent);
        assert_eq!(keys.key_class(b'E'), KeyClass::Absent);

        keys.set_key_colour(b'E', Colour::Present);
        assert_eq!(keys.key_class(b'E'), KeyClass::Present);

        keys.set_key_colour(b'E', Colour::Correct);
        assert_eq!(keys.key_class(b'E'), KeyClass::Correct);
    }

    #[test]
    fn correct_is_never_downgraded() {
        let mut keys = KeyColours::new();
        keys.set_key_colour(b'S', Colour::Correct);
        keys.set_key_colour(b'S', Colour::Present);
        keys.set_key_colour(b'S', Colour::Absent);
        assert_eq!(keys.key_class(b'S'), KeyClass::Correct);
    }

    #[test]
    fn present_is_not_downgraded_to_absent() {
        let mut keys = KeyColours::new();
        keys.set_key_colour(b'L', Colour::Present);
        keys.set_key_colour(b'L', Colour::Absent);
        assert_eq!(keys.key_class(b'L'), KeyClass::Present);
    }

    #[test]
    fn letters_are_case_insensitive() {
        let mut keys = KeyColours::new();
        keys.set_key_colour(b'a', Colour::Present);
        assert_eq!(keys.key_class(b'A'), KeyClass::Present);
    }

    #[test]
    fn reset_clears_colours() {
        let mut keys = KeyColours::new();
        keys.set_key_colour(b'A', Colour::Correct);
        keys.set_key_colour(b'B', Colour::Absent);
        keys.reset_key_colours();

        for letter in b'A'..=b'Z' {
            assert_eq!(keys.key_class(letter), KeyClass::Unset);
        }
    }

    #[test]
    fn active_key_highlight() {
        let mut keys = KeyColours::new();
        keys.set_key_colour(b'A', Colour::Present);
        keys.set_active_key(Some(Key::Letter(b'A')));

        assert_eq!(
            keys.key_classes(Key::Letter(b'A')),
            KeyClasses {
                class: KeyClass::Present,
                active: true,
            }
        );
        assert!(!keys.key_classes(Key::Submit).active);

        keys.set_active_key(None);
        assert!(!keys.key_classes(Key::Letter(b'A')).active);
    }
}
