//! Persistent storage abstraction.
//!
//! The answer store only needs string values under string keys. Anything
//! satisfying [`KeyValueStore`] can back it: the SQLite [`Database`] in
//! production, [`MemoryStore`] in tests or when nothing should touch disk.
//!
//! [`Database`]: crate::db::Database

use std::collections::HashMap;

use crate::error::Result;

/// Durable string key-value storage.
pub trait KeyValueStore {
    /// Returns the value under `key`, or `None` when it was never written.
    fn get(&self, key: &str) -> Result<Option<String>>;

    /// Stores `value` under `key`, replacing any previous value.
    fn set(&mut self, key: &str, value: &str) -> Result<()>;

    /// Removes `key`. Removing an absent key succeeds.
    fn remove(&mut self, key: &str) -> Result<()>;
}

/// Volatile [`KeyValueStore`] kept in a `HashMap`.
#[derive(Debug, Default, Clone)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seeds the store with a raw value, bypassing any serialization.
    pub fn with_entry(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.entries.insert(key.into(), value.into());
        self
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<()> {
        self.entries.remove(key);
        Ok(())
    }
}
