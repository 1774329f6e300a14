//! Wrapper types for the results step and operation outcomes.

use std::{fmt, path::PathBuf};

use super::models::join_selection;
use crate::models::{AnswerRecord, Category};

/// Compact summary rendered when the user reaches the results step.
///
/// Lists the date and the three selections; the yes/no response is implied
/// by having reached this far.
pub struct ResultsSummary<'a>(pub &'a AnswerRecord);

impl<'a> fmt::Display for ResultsSummary<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "- Date: {}", self.0.date_label())?;
        for category in Category::ALL {
            writeln!(
                f,
                "- {}: {}",
                category.label(),
                join_selection(self.0.selection(category))
            )?;
        }
        Ok(())
    }
}

/// Result of writing the answers to a JSON file.
pub struct ExportResult {
    pub path: PathBuf,
}

impl ExportResult {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }
}

impl fmt::Display for ExportResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Saved answers to {}", self.path.display())
    }
}

/// Result of resetting the questionnaire.
pub struct ClearResult;

impl fmt::Display for ClearResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Cleared all stored answers")
    }
}
