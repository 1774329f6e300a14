//! The UI layer as seen by the controller.

use jiff::civil::Date;

use crate::{
    display::OperationStatus,
    models::{Category, NavigationState, Step},
};

/// Everything a surface needs to draw the current step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StepView {
    pub step: Step,
    pub progress_percent: u8,
    pub navigation: NavigationState,
}

impl StepView {
    pub fn for_step(step: Step) -> Self {
        Self {
            step,
            progress_percent: step.progress_percent(),
            navigation: step.navigation(),
        }
    }
}

/// State of the email controls on the results step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct EmailControl {
    /// The email form is shown
    pub visible: bool,
    /// A send is in flight; the send control is disabled and relabelled
    pub sending: bool,
}

impl EmailControl {
    /// Label for the send control.
    pub fn send_label(&self) -> &'static str {
        if self.sending {
            "Sending..."
        } else {
            "Send Email"
        }
    }
}

/// Input and output capabilities the controller needs from the UI.
///
/// Inputs are read only when the controller captures a step; outputs are
/// pushed whenever state changes.
pub trait StepSurface {
    /// Current value of the date input, if one was entered.
    fn date_input(&self) -> Option<Date>;

    /// Currently selected options for `category`.
    fn selected_items(&self, category: Category) -> Vec<String>;

    /// Makes `view` the visible step.
    fn show_step(&mut self, view: &StepView);

    /// Fills the results summary.
    fn show_summary(&mut self, summary: &str);

    /// Transient acknowledgment after a "no"; `count` grows with each refusal.
    fn show_nudge(&mut self, count: u32);

    /// Reports how an action went.
    fn show_status(&mut self, status: &OperationStatus);

    /// Updates the email form and send control.
    fn set_email_control(&mut self, control: EmailControl);

    /// Empties the recipient field after a successful send.
    fn clear_email_input(&mut self) {}
}
