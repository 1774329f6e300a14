//! Record persistence and field updates.

use jiff::civil::Date;
use log::{debug, warn};

use super::AnswerStore;
use crate::{
    error::{QuestionnaireError, Result},
    models::{AnswerRecord, Category, ValentineResponse},
};

impl AnswerStore {
    /// Reads the persisted record.
    ///
    /// Never fails: an absent record yields a fresh default, and unreadable or
    /// malformed content is logged and treated as absent.
    pub fn load(&self) -> AnswerRecord {
        match self.read_persisted() {
            Ok(Some(record)) => record,
            Ok(None) => {
                debug!("No stored answers under '{}'", self.storage_key);
                AnswerRecord::new()
            }
            Err(e) => {
                warn!("{e}; starting from an empty record");
                AnswerRecord::new()
            }
        }
    }

    fn read_persisted(&self) -> Result<Option<AnswerRecord>> {
        let Some(raw) = self
            .storage
            .get(&self.storage_key)
            .map_err(QuestionnaireError::storage_read)?
        else {
            return Ok(None);
        };

        serde_json::from_str(&raw)
            .map(Some)
            .map_err(QuestionnaireError::storage_read)
    }

    /// Writes the in-memory record and verifies it by reading it back.
    ///
    /// # Errors
    ///
    /// Returns `QuestionnaireError::StorageWrite` if serialization, the
    /// write, or the verification read fails, or if the value read back
    /// differs from the one written.
    pub fn save(&mut self) -> Result<()> {
        let serialized =
            serde_json::to_string(&self.record).map_err(QuestionnaireError::storage_write)?;

        self.storage
            .set(&self.storage_key, &serialized)
            .map_err(QuestionnaireError::storage_write)?;

        let stored = self
            .storage
            .get(&self.storage_key)
            .map_err(QuestionnaireError::storage_write)?;
        if stored.as_deref() != Some(serialized.as_str()) {
            return Err(QuestionnaireError::storage_write(
                "stored value did not match after writing",
            ));
        }

        Ok(())
    }

    /// Refreshes the timestamp and persists after a field change.
    ///
    /// The in-memory change stands even if persisting fails.
    fn commit(&mut self, field: &str) -> Result<()> {
        self.record.touch();
        debug!("Updated {field}");
        self.save().map_err(|e| {
            warn!("Could not persist {field}: {e}");
            e
        })
    }

    /// Records the answer to the opening question.
    pub fn set_valentine_response(&mut self, response: ValentineResponse) -> Result<()> {
        self.record.valentine_response = response;
        self.commit("valentine response")
    }

    /// Records the chosen date, or clears it with `None`.
    pub fn set_date(&mut self, date: Option<Date>) -> Result<()> {
        self.record.date = date;
        self.commit("date")
    }

    /// Replaces the selection for `category`. Duplicates collapse.
    pub fn set_selection<I, S>(&mut self, category: Category, items: I) -> Result<()>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        *self.record.selection_mut(category) = items.into_iter().map(Into::into).collect();
        self.commit(category.as_str())
    }

    pub fn set_food<I, S>(&mut self, items: I) -> Result<()>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.set_selection(Category::Food, items)
    }

    pub fn set_dessert<I, S>(&mut self, items: I) -> Result<()>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.set_selection(Category::Dessert, items)
    }

    pub fn set_activities<I, S>(&mut self, items: I) -> Result<()>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.set_selection(Category::Activities, items)
    }

    /// Re-reads the record from storage and returns it.
    ///
    /// The durable value always wins: an absent or malformed record resets
    /// the in-memory one to a fresh default, like [`AnswerStore::load`].
    pub fn get_all(&mut self) -> &AnswerRecord {
        self.record = self.load();
        &self.record
    }

    /// Purges the persisted record and resets to an empty one.
    ///
    /// The in-memory record is reset even when the purge fails.
    pub fn clear(&mut self) -> Result<()> {
        self.record = AnswerRecord::new();
        self.storage
            .remove(&self.storage_key)
            .map_err(QuestionnaireError::storage_write)?;
        debug!("Cleared stored answers under '{}'", self.storage_key);
        Ok(())
    }
}
