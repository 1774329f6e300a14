//! The fixed, linear sequence of questionnaire steps.

use serde::{Deserialize, Serialize};

use super::Category;

/// One screen of the questionnaire.
///
/// Steps are visited in declaration order; [`Step::Results`] is terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Step {
    /// The opening yes/no question
    Intro,
    /// Thank-you screen after a "yes"
    Acknowledgment,
    /// Date picker
    Date,
    Food,
    Dessert,
    Activities,
    /// Read-only summary with export and email controls
    Results,
}

/// Which navigation controls a step shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavigationState {
    pub show_previous: bool,
    pub show_next: bool,
}

impl Step {
    /// Every step in order.
    pub const ALL: [Step; 7] = [
        Step::Intro,
        Step::Acknowledgment,
        Step::Date,
        Step::Food,
        Step::Dessert,
        Step::Activities,
        Step::Results,
    ];

    /// Number of steps in the questionnaire.
    pub const TOTAL: usize = Self::ALL.len();

    /// Zero-based position of the step.
    pub fn index(&self) -> usize {
        *self as usize
    }

    pub fn from_index(index: usize) -> Option<Step> {
        Self::ALL.get(index).copied()
    }

    /// The following step, or `None` on the terminal step.
    pub fn next(&self) -> Option<Step> {
        Self::from_index(self.index() + 1)
    }

    /// The preceding step, or `None` on the first step.
    pub fn previous(&self) -> Option<Step> {
        self.index().checked_sub(1).and_then(Self::from_index)
    }

    pub fn is_terminal(&self) -> bool {
        self.next().is_none()
    }

    /// The multi-select category captured on this step, if any.
    pub fn category(&self) -> Option<Category> {
        match self {
            Step::Food => Some(Category::Food),
            Step::Dessert => Some(Category::Dessert),
            Step::Activities => Some(Category::Activities),
            _ => None,
        }
    }

    /// Progress bar fill in percent.
    ///
    /// The acknowledgment screen counts for 15%, the remaining five steps
    /// share the other 85% evenly.
    pub fn progress_percent(&self) -> u8 {
        match self.index() {
            0 => 0,
            1 => 15,
            index => (15 + (index - 1) * 17) as u8,
        }
    }

    pub fn navigation(&self) -> NavigationState {
        match self {
            Step::Intro => NavigationState {
                show_previous: false,
                show_next: false,
            },
            step => NavigationState {
                show_previous: true,
                show_next: !step.is_terminal(),
            },
        }
    }

    /// Heading shown at the top of the step.
    pub fn title(&self) -> &'static str {
        match self {
            Step::Intro => "Will you be my Valentine?",
            Step::Acknowledgment => "Yay! Thank you!",
            Step::Date => "Pick a date",
            Step::Food => "What should we eat?",
            Step::Dessert => "And for dessert?",
            Step::Activities => "What should we do?",
            Step::Results => "Your answers",
        }
    }
}
