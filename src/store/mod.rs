//! Durable key-value storage for game progress
//!
//! The game sees storage only through the [`Storage`] capability: string keys
//! mapping to serialized JSON text. Reads fail closed (a broken value is
//! reported as [`Decoded::Malformed`] and treated as absent by the game);
//! writes report errors so they are never lost silently.

mod file;
mod memory;
pub mod saved;

pub use file::FileStorage;
pub use memory::MemoryStorage;

use serde::Serialize;
use serde::de::DeserializeOwned;
use std::io;
use thiserror::Error;

/// Errors raised by storage backends
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("storage I/O failed: {0}")]
    Io(#[from] io::Error),
    #[error("failed to encode value: {0}")]
    Encode(#[from] serde_json::Error),
    #[error("storage unavailable: {0}")]
    Unavailable(String),
}

/// Storage capability: get/set/remove by key
pub trait Storage {
    /// Read the raw value stored under `key`
    ///
    /// # Errors
    /// Returns `StoreError` if the backend cannot be read.
    fn get(&self, key: &str) -> Result<Option<String>, StoreError>;

    /// Store `value` under `key`, replacing any previous value
    ///
    /// # Errors
    /// Returns `StoreError` if the value could not be made durable.
    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError>;

    /// Remove `key` if present
    ///
    /// # Errors
    /// Returns `StoreError` if the backend cannot be written.
    fn remove(&mut self, key: &str) -> Result<(), StoreError>;

    /// Remove every key
    ///
    /// # Errors
    /// Returns `StoreError` if the backend cannot be written.
    fn clear(&mut self) -> Result<(), StoreError>;
}

impl<S: Storage + ?Sized> Storage for &mut S {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        (**self).get(key)
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        (**self).set(key, value)
    }

    fn remove(&mut self, key: &str) -> Result<(), StoreError> {
        (**self).remove(key)
    }

    fn clear(&mut self) -> Result<(), StoreError> {
        (**self).clear()
    }
}

/// Result of reading and decoding a stored value
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Decoded<T> {
    /// Value present and well-formed
    Found(T),
    /// Nothing stored under the key
    Absent,
    /// Value present but unreadable or of the wrong shape
    Malformed(String),
}

impl<T> Decoded<T> {
    /// Apply a fallible check to a found value
    pub fn and_then<U>(self, f: impl FnOnce(T) -> Result<U, String>) -> Decoded<U> {
        match self {
            Self::Found(value) => match f(value) {
                Ok(checked) => Decoded::Found(checked),
                Err(reason) => Decoded::Malformed(reason),
            },
            Self::Absent => Decoded::Absent,
            Self::Malformed(reason) => Decoded::Malformed(reason),
        }
    }
}

/// Read `key` and decode it as JSON
///
/// Backend read failures are reported as `Malformed`.
pub fn read_json<T: DeserializeOwned>(storage: &impl Storage, key: &str) -> Decoded<T> {
    match storage.get(key) {
        Ok(None) => Decoded::Absent,
        Ok(Some(raw)) => match serde_json::from_str(&raw) {
            Ok(value) => Decoded::Found(value),
            Err(e) => Decoded::Malformed(format!("{key}: {e}")),
        },
        Err(e) => Decoded::Malformed(format!("{key}: {e}")),
    }
}

/// Encode `value` as JSON and store it under `key`
///
/// # Errors
/// Returns `StoreError` if encoding or the backend write fails.
pub fn write_json<T: Serialize + ?Sized>(
    storage: &mut impl Storage,
    key: &str,
    value: &T,
) -> Result<(), StoreError> {
    let text = serde_json::to_string(value)?;
    storage.set(key, &text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn read_json_absent() {
        let storage = MemoryStorage::new();
        assert_eq!(read_json::<u32>(&storage, "missing"), Decoded::Absent);
    }

    #[test]
    fn read_json_found() {
        let mut storage = MemoryStorage::new();
        write_json(&mut storage, "n", &7u32).unwrap();
        assert_eq!(read_json::<u32>(&storage, "n"), Decoded::Found(7));
    }

    #[test]
    fn read_json_malformed() {
        let mut storage = MemoryStorage::new();
        storage.set("n", "{not json").unwrap();
        assert!(matches!(
            read_json::<u32>(&storage, "n"),
            Decoded::Malformed(_)
        ));
    }

    #[test]
    fn decoded_and_then_maps_check_failures() {
        let checked = Decoded::Found(9u32).and_then(|n| {
            if n < 5 {
                Ok(n)
            } else {
                Err("too big".to_string())
            }
        });
        assert_eq!(checked, Decoded::Malformed("too big".to_string()));
        assert_eq!(Decoded::<u32>::Absent.and_then(Ok::<u32, String>), Decoded::Absent);
    }

    #[test]
    fn error_display_messages() {
        let err = StoreError::Unavailable("disk full".into());
        assert_eq!(err.to_string(), "storage unavailable: disk full");
    }
}
