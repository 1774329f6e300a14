//! User actions delivered to the controller and what came of them.

use std::path::PathBuf;

use crate::{
    error::QuestionnaireError,
    models::{Step, ValentineResponse},
};

/// Left/right directional shortcut.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Left,
    Right,
}

/// A discrete user action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiEvent {
    /// Yes/no button on the opening question
    Respond(ValentineResponse),
    Next,
    Previous,
    /// Arrow key shortcut for previous/next
    Arrow(Direction),
    /// Download the answers as a JSON file
    Export,
    /// Show or hide the email form
    ToggleEmailForm,
    /// Send the answers to `to`
    SendEmail { to: String },
}

/// Result of handling one event.
#[derive(Debug)]
pub enum Outcome {
    /// The visible step changed
    Moved(Step),
    /// Nothing happened, e.g. navigating past either end
    Unchanged,
    /// "No" on the opening question; `count` refusals so far
    Nudged { count: u32 },
    /// Email form visibility toggled
    EmailFormToggled { visible: bool },
    Exported(PathBuf),
    EmailSent,
    /// The action failed; the failure was already shown to the user
    Rejected(QuestionnaireError),
}

impl Outcome {
    pub fn is_rejected(&self) -> bool {
        matches!(self, Outcome::Rejected(_))
    }
}
