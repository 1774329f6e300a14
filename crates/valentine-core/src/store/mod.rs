//! The Data Store: single source of truth for the Answer Record.
//!
//! [`AnswerStore`] owns the in-memory [`AnswerRecord`] and mediates every read
//! and write to persistent storage. It is constructed explicitly through
//! [`StoreBuilder`] and handed by reference to whoever needs it; there is no
//! process-wide instance.
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │ StepController  │    │   AnswerStore   │    │  KeyValueStore  │
//! │   / CLI cmds    │───▶│ (record_ops,    │───▶│ (SQLite, memory)│
//! │                 │    │  export, email) │    │                 │
//! └─────────────────┘    └────────┬────────┘    └─────────────────┘
//!                                 │
//!                                 ▼
//!                        ┌─────────────────┐
//!                        │   EmailSender   │
//!                        │   (optional)    │
//!                        └─────────────────┘
//! ```
//!
//! ## Submodules
//!
//! - [`builder`]: Factory for creating [`AnswerStore`] instances
//! - [`record_ops`]: Load, save, field setters, reload, and reset
//! - [`export_ops`]: Text and JSON projections and file export
//! - [`email_ops`]: Sending the answers through the email relay
//!
//! ## Failure policy
//!
//! Nothing here panics or aborts the user flow. Reads degrade to the default
//! record; writes, exports, and sends return a tagged
//! [`QuestionnaireError`](crate::QuestionnaireError) and leave the in-memory
//! record intact.
//!
//! # Usage
//!
//! ```rust
//! use valentine_core::{models::ValentineResponse, storage::MemoryStore, StoreBuilder};
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let mut store = StoreBuilder::new()
//!     .with_storage(MemoryStore::new())
//!     .build()?;
//!
//! store.set_valentine_response(ValentineResponse::Yes)?;
//! store.set_food(["Pizza", "Sushi"])?;
//!
//! let record = store.get_all();
//! assert_eq!(record.food.len(), 2);
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```

pub mod builder;
pub mod email_ops;
pub mod export_ops;
pub mod record_ops;

#[cfg(test)]
mod tests;

pub use builder::{StoreBuilder, DEFAULT_STORAGE_KEY};

use crate::{email::EmailSender, models::AnswerRecord, storage::KeyValueStore};

/// Owner of the Answer Record and its persisted copy.
pub struct AnswerStore {
    storage: Box<dyn KeyValueStore>,
    storage_key: String,
    record: AnswerRecord,
    email_sender: Option<Box<dyn EmailSender>>,
}

impl AnswerStore {
    /// Creates a store and loads the persisted record, if any.
    pub(crate) fn new(
        storage: Box<dyn KeyValueStore>,
        storage_key: String,
        email_sender: Option<Box<dyn EmailSender>>,
    ) -> Self {
        let mut store = Self {
            storage,
            storage_key,
            record: AnswerRecord::new(),
            email_sender,
        };
        store.record = store.load();
        store
    }

    /// The in-memory record, without touching storage.
    pub fn record(&self) -> &AnswerRecord {
        &self.record
    }

    /// Key the record is persisted under.
    pub fn storage_key(&self) -> &str {
        &self.storage_key
    }

    /// Whether an email relay was supplied at construction.
    pub fn has_email_sender(&self) -> bool {
        self.email_sender.is_some()
    }
}
