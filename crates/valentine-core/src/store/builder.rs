//! Builder for creating and configuring AnswerStore instances.

use std::path::{Path, PathBuf};

use log::{debug, warn};

use super::AnswerStore;
use crate::{
    db::Database,
    email::EmailSender,
    error::{QuestionnaireError, Result},
    storage::{KeyValueStore, MemoryStore},
};

/// Storage key the record lives under unless overridden.
pub const DEFAULT_STORAGE_KEY: &str = "valentine_questionnaire_data";

/// Builder for creating and configuring AnswerStore instances.
#[derive(Default)]
pub struct StoreBuilder {
    database_path: Option<PathBuf>,
    storage: Option<Box<dyn KeyValueStore>>,
    email_sender: Option<Box<dyn EmailSender>>,
    storage_key: Option<String>,
}

impl StoreBuilder {
    /// Creates a new builder with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets a custom database file path.
    ///
    /// If not specified, uses XDG Base Directory specification:
    /// `$XDG_DATA_HOME/valentine/valentine.db` or
    /// `~/.local/share/valentine/valentine.db`
    pub fn with_database_path<P: AsRef<Path>>(mut self, path: Option<P>) -> Self {
        if let Some(path) = path {
            self.database_path = Some(path.as_ref().to_path_buf());
        }
        self
    }

    /// Uses the given storage instead of an SQLite database.
    ///
    /// Takes precedence over [`with_database_path`](Self::with_database_path).
    pub fn with_storage(mut self, storage: impl KeyValueStore + 'static) -> Self {
        self.storage = Some(Box::new(storage));
        self
    }

    /// Supplies the email relay. Without one, sending by email reports
    /// `EmailServiceUnavailable`.
    pub fn with_email_sender(mut self, sender: impl EmailSender + 'static) -> Self {
        self.email_sender = Some(Box::new(sender));
        self
    }

    /// Overrides the key the record is persisted under.
    pub fn with_storage_key(mut self, key: impl Into<String>) -> Self {
        self.storage_key = Some(key.into());
        self
    }

    /// Builds the configured store and loads any persisted record.
    ///
    /// # Errors
    ///
    /// Returns `QuestionnaireError::FileSystem` if the database directory
    /// cannot be created, `QuestionnaireError::XdgDirectory` if the default
    /// location cannot be resolved, and `QuestionnaireError::Database` if
    /// database initialization fails.
    pub fn build(mut self) -> Result<AnswerStore> {
        let storage = self.open_storage()?;
        Ok(self.finish(storage))
    }

    /// Builds the configured store, keeping answers in memory when the
    /// configured storage cannot be opened.
    ///
    /// The open error is returned alongside the store so the caller can tell
    /// the user their answers will not outlive the process.
    pub fn build_or_memory(mut self) -> (AnswerStore, Option<QuestionnaireError>) {
        match self.open_storage() {
            Ok(storage) => (self.finish(storage), None),
            Err(e) => {
                warn!("{e}; keeping answers in memory only");
                let storage = Box::new(MemoryStore::new()) as Box<dyn KeyValueStore>;
                (self.finish(storage), Some(e))
            }
        }
    }

    fn open_storage(&mut self) -> Result<Box<dyn KeyValueStore>> {
        if let Some(storage) = self.storage.take() {
            return Ok(storage);
        }

        let db_path = match self.database_path.take() {
            Some(path) => path,
            None => Self::default_database_path()?,
        };

        if let Some(parent) = db_path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| QuestionnaireError::FileSystem {
                path: parent.to_path_buf(),
                source: e,
            })?;
        }

        debug!("Opening answer database at {}", db_path.display());
        Ok(Box::new(Database::new(&db_path)?))
    }

    fn finish(self, storage: Box<dyn KeyValueStore>) -> AnswerStore {
        let storage_key = self
            .storage_key
            .unwrap_or_else(|| DEFAULT_STORAGE_KEY.to_string());

        AnswerStore::new(storage, storage_key, self.email_sender)
    }

    /// Returns the default database path following XDG Base Directory
    /// specification.
    fn default_database_path() -> Result<PathBuf> {
        xdg::BaseDirectories::with_prefix("valentine")
            .place_data_file("valentine.db")
            .map_err(|e| QuestionnaireError::XdgDirectory(e.to_string()))
    }
}
