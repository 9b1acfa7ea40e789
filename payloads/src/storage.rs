//! Durable client-side storage for the session credential.
//!
//! The browser keeps these in `localStorage`; native code and tests use
//! [`MemoryStorage`].

use std::cell::RefCell;
use std::collections::HashMap;

/// Storage key of the bearer token.
pub const TOKEN_KEY: &str = "token";
/// Storage key of the JSON serialized [`crate::Identity`].
pub const USER_KEY: &str = "user";

/// A string key-value store that outlives the page.
///
/// Writes are best effort: a full or unavailable store is not an error the
/// session can do anything about.
pub trait SessionStorage {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str);
    fn remove(&self, key: &str);

    fn token(&self) -> Option<String> {
        self.get(TOKEN_KEY).filter(|token| !token.is_empty())
    }

    /// Remove both session keys.
    fn purge_session(&self) {
        self.remove(TOKEN_KEY);
        self.remove(USER_KEY);
    }
}

#[derive(Debug, Default)]
pub struct MemoryStorage {
    entries: RefCell<HashMap<String, String>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.borrow().is_empty()
    }
}

impl SessionStorage for MemoryStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) {
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
    }

    fn remove(&self, key: &str) {
        self.entries.borrow_mut().remove(key);
    }
}
