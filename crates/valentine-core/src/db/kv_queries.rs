//! Key-value queries against the `kv_store` table.

use rusqlite::{params, OptionalExtension};

use crate::{
    error::{DatabaseResultExt, Result},
    storage::KeyValueStore,
};

impl super::Database {
    /// Reads the value stored under `key`, if any.
    pub fn get_value(&self, key: &str) -> Result<Option<String>> {
        self.connection
            .query_row(
                "SELECT value FROM kv_store WHERE key = ?1",
                params![key],
                |row| row.get(0),
            )
            .optional()
            .db_context("Failed to read value")
    }

    /// Inserts or replaces the value stored under `key`.
    pub fn set_value(&mut self, key: &str, value: &str) -> Result<()> {
        self.connection
            .execute(
                "INSERT INTO kv_store (key, value) VALUES (?1, ?2)
                 ON CONFLICT(key) DO UPDATE SET value = excluded.value",
                params![key, value],
            )
            .db_context("Failed to write value")?;
        Ok(())
    }

    /// Deletes the value stored under `key`. Missing keys are not an error.
    pub fn remove_value(&mut self, key: &str) -> Result<()> {
        self.connection
            .execute("DELETE FROM kv_store WHERE key = ?1", params![key])
            .db_context("Failed to delete value")?;
        Ok(())
    }
}

impl KeyValueStore for super::Database {
    fn get(&self, key: &str) -> Result<Option<String>> {
        self.get_value(key)
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.set_value(key, value)
    }

    fn remove(&mut self, key: &str) -> Result<()> {
        self.remove_value(key)
    }
}
