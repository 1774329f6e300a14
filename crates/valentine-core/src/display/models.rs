//! Display implementations for domain models.
//!
//! `Display` for [`AnswerRecord`] is the plain-text projection used both by
//! the `show` command and as the body of the results email.

use std::{collections::BTreeSet, fmt};

use super::datetime::LocalDateTime;
use crate::models::{AnswerRecord, Category, Step, ValentineResponse};

/// Separator between selected options in every text projection.
pub const SELECTION_SEPARATOR: &str = ", ";

/// Shown in place of an empty multi-select answer.
pub const SELECTION_PLACEHOLDER: &str = "None selected";

/// Shown in place of an unset date.
pub const DATE_PLACEHOLDER: &str = "Not selected";

/// Joins a selection with [`SELECTION_SEPARATOR`], or returns the
/// placeholder when nothing was chosen.
pub fn join_selection(items: &BTreeSet<String>) -> String {
    if items.is_empty() {
        SELECTION_PLACEHOLDER.to_string()
    } else {
        items
            .iter()
            .map(String::as_str)
            .collect::<Vec<_>>()
            .join(SELECTION_SEPARATOR)
    }
}

impl AnswerRecord {
    /// The chosen date as text, or the placeholder.
    pub fn date_label(&self) -> String {
        self.date
            .map(|date| date.to_string())
            .unwrap_or_else(|| DATE_PLACEHOLDER.to_string())
    }
}

impl fmt::Display for ValentineResponse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.title())
    }
}

impl fmt::Display for AnswerRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Valentine's Questionnaire Results")?;
        writeln!(f, "=================================")?;
        writeln!(f)?;
        writeln!(f, "Response: {}", self.valentine_response)?;
        writeln!(f, "Date Selected: {}", self.date_label())?;
        for category in Category::ALL {
            writeln!(
                f,
                "{}: {}",
                category.results_label(),
                join_selection(self.selection(category))
            )?;
        }
        writeln!(f)?;
        write!(f, "Completed on: {}", LocalDateTime(&self.timestamp))
    }
}
