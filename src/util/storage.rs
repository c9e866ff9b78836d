//! Key/value preference storage.
//!
//! The browser implementation wraps `localStorage`. Tests use an in-memory
//! map behind the same trait.

#[cfg(test)]
#[path = "storage_test.rs"]
mod storage_test;

#[cfg(test)]
use std::cell::RefCell;
#[cfg(test)]
use std::collections::HashMap;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StorageError {
    #[error("web storage is unavailable")]
    Unavailable,
    #[error("storage read failed for {key}: {message}")]
    Read { key: String, message: String },
    #[error("storage write failed for {key}: {message}")]
    Write { key: String, message: String },
}

/// Synchronous string preference store.
pub trait PreferenceStore {
    fn read(&self, key: &str) -> Result<Option<String>, StorageError>;
    fn write(&self, key: &str, value: &str) -> Result<(), StorageError>;
}

#[cfg(test)]
#[derive(Debug, Default)]
pub struct MemoryStore {
    values: RefCell<HashMap<String, String>>,
}

#[cfg(test)]
impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_value(key: &str, value: &str) -> Self {
        let store = Self::new();
        store.values.borrow_mut().insert(key.to_owned(), value.to_owned());
        store
    }
}

#[cfg(test)]
impl PreferenceStore for MemoryStore {
    fn read(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.values.borrow().get(key).cloned())
    }

    fn write(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.values.borrow_mut().insert(key.to_owned(), value.to_owned());
        Ok(())
    }
}

/// `window.localStorage`, resolved on every call so a storage that is
/// disabled mid-session reports `Unavailable` instead of a stale handle.
#[cfg(feature = "hydrate")]
#[derive(Debug, Default, Clone, Copy)]
pub struct LocalStore;

#[cfg(feature = "hydrate")]
impl LocalStore {
    fn storage() -> Result<web_sys::Storage, StorageError> {
        let window = web_sys::window().ok_or(StorageError::Unavailable)?;
        match window.local_storage() {
            Ok(Some(storage)) => Ok(storage),
            _ => Err(StorageError::Unavailable),
        }
    }
}

#[cfg(feature = "hydrate")]
impl PreferenceStore for LocalStore {
    fn read(&self, key: &str) -> Result<Option<String>, StorageError> {
        Self::storage()?
            .get_item(key)
            .map_err(|e| StorageError::Read { key: key.to_owned(), message: format!("{e:?}") })
    }

    fn write(&self, key: &str, value: &str) -> Result<(), StorageError> {
        Self::storage()?
            .set_item(key, value)
            .map_err(|e| StorageError::Write { key: key.to_owned(), message: format!("{e:?}") })
    }
}
