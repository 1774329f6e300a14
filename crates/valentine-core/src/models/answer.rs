//! The Answer Record: every value the user has submitted so far.

use std::collections::BTreeSet;

use jiff::{civil::Date, Timestamp};
use serde::{Deserialize, Serialize};

use super::{Category, ValentineResponse};

/// All questionnaire answers plus the instant they were last modified.
///
/// Multi-select answers are sets: duplicates cannot occur and order carries
/// no meaning. They serialize as sorted JSON arrays.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnswerRecord {
    /// Creation or last modification instant (UTC)
    pub timestamp: Timestamp,

    /// Answer to the opening question
    #[serde(default)]
    pub valentine_response: ValentineResponse,

    /// Chosen date, if any
    #[serde(default)]
    pub date: Option<Date>,

    /// Chosen food options
    #[serde(default)]
    pub food: BTreeSet<String>,

    /// Chosen dessert options
    #[serde(default)]
    pub dessert: BTreeSet<String>,

    /// Chosen activities
    #[serde(default)]
    pub activities: BTreeSet<String>,
}

impl AnswerRecord {
    /// Creates an empty record stamped with the current instant.
    pub fn new() -> Self {
        Self {
            timestamp: Timestamp::now(),
            valentine_response: ValentineResponse::Unanswered,
            date: None,
            food: BTreeSet::new(),
            dessert: BTreeSet::new(),
            activities: BTreeSet::new(),
        }
    }

    /// The selected options for a multi-select category.
    pub fn selection(&self, category: Category) -> &BTreeSet<String> {
        match category {
            Category::Food => &self.food,
            Category::Dessert => &self.dessert,
            Category::Activities => &self.activities,
        }
    }

    pub fn selection_mut(&mut self, category: Category) -> &mut BTreeSet<String> {
        match category {
            Category::Food => &mut self.food,
            Category::Dessert => &mut self.dessert,
            Category::Activities => &mut self.activities,
        }
    }

    /// Refreshes the modification timestamp.
    pub fn touch(&mut self) {
        self.timestamp = Timestamp::now();
    }

    /// Compares answers only, ignoring when they were made.
    pub fn same_answers(&self, other: &AnswerRecord) -> bool {
        self.valentine_response == other.valentine_response
            && self.date == other.date
            && self.food == other.food
            && self.dessert == other.dessert
            && self.activities == other.activities
    }

    /// True while nothing has been answered.
    pub fn is_blank(&self) -> bool {
        self.same_answers(&AnswerRecord::new())
    }
}

impl Default for AnswerRecord {
    fn default() -> Self {
        Self::new()
    }
}
