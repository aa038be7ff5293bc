//! Key-value access to persisted browser state.
//!
//! Everything that touches `localStorage` goes through [`KeyValueStore`], so
//! the auth gate can be driven by an in-memory store in tests.

use gloo_storage::{LocalStorage, Storage};

/// Text values addressed by key.
///
/// Writing the credential record is the sign-in flow's job, so the gate only
/// needs to read and clear.
pub trait KeyValueStore {
    /// Returns the stored text, or `None` when the key is absent.
    fn get(&self, key: &str) -> Option<String>;

    /// Removes `key`. Removing an absent key is a no-op.
    fn remove(&self, key: &str);
}

impl<T: KeyValueStore + ?Sized> KeyValueStore for &T {
    fn get(&self, key: &str) -> Option<String> {
        (**self).get(key)
    }

    fn remove(&self, key: &str) {
        (**self).remove(key);
    }
}

/// `window.localStorage`.
///
/// Values are read as raw text. JSON handling belongs to the caller.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BrowserStorage;

impl KeyValueStore for BrowserStorage {
    fn get(&self, key: &str) -> Option<String> {
        LocalStorage::raw().get_item(key).ok().flatten()
    }

    fn remove(&self, key: &str) {
        LocalStorage::delete(key);
    }
}

/// In-memory store for tests.
#[cfg(test)]
#[derive(Debug, Default)]
pub struct MemoryStorage {
    entries: std::cell::RefCell<std::collections::HashMap<String, String>>,
}

#[cfg(test)]
impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-seeded with a single entry.
    pub fn with_entry(key: &str, value: &str) -> Self {
        let storage = Self::new();
        storage.insert(key, value);
        storage
    }

    /// Writes `value` under `key`, standing in for the sign-in flow.
    pub fn insert(&self, key: &str, value: &str) {
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
    }

    pub fn contains(&self, key: &str) -> bool {
        self.entries.borrow().contains_key(key)
    }
}

#[cfg(test)]
impl KeyValueStore for MemoryStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }

    fn remove(&self, key: &str) {
        self.entries.borrow_mut().remove(key);
    }
}
