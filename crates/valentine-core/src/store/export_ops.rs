//! Text and JSON projections of the record, and file export.

use std::{
    fs,
    path::{Path, PathBuf},
};

use jiff::Timestamp;
use log::info;

use super::AnswerStore;
use crate::error::{QuestionnaireError, Result};

impl AnswerStore {
    /// Human-readable rendition of the current record.
    pub fn format_as_text(&self) -> String {
        self.record.to_string()
    }

    /// Pretty-printed JSON rendition of the current record.
    pub fn format_as_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(&self.record)?)
    }

    /// File name for an export made at `now`.
    pub fn export_file_name(now: Timestamp) -> String {
        format!("valentine-questionnaire-{}.json", now.as_millisecond())
    }

    /// Writes the JSON projection into `directory` and returns the file path.
    ///
    /// The directory is created if needed. File names carry the epoch
    /// milliseconds of the export.
    ///
    /// # Errors
    ///
    /// Returns `QuestionnaireError::FileSystem` if the directory or file
    /// cannot be written.
    pub fn export_as_file(&self, directory: &Path) -> Result<PathBuf> {
        let json = self.format_as_json()?;

        fs::create_dir_all(directory).map_err(|e| QuestionnaireError::FileSystem {
            path: directory.to_path_buf(),
            source: e,
        })?;

        let path = directory.join(Self::export_file_name(Timestamp::now()));
        fs::write(&path, json).map_err(|e| QuestionnaireError::FileSystem {
            path: path.clone(),
            source: e,
        })?;

        info!("Exported answers to {}", path.display());
        Ok(path)
    }
}
