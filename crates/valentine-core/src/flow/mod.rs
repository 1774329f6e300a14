//! The Step Controller: navigation through the fixed questionnaire sequence.
//!
//! [`StepController`] borrows the [`AnswerStore`] and drives a
//! [`StepSurface`]. It owns only UI state: the current [`Step`], the number of
//! "no" nudges, and the email control state. None of it is persisted, so a
//! new controller always starts on the opening question.
//!
//! ```text
//!  Intro ──yes──▶ Acknowledgment ──▶ Date ──▶ Food ──▶ Dessert ──▶ Activities ──▶ Results
//!    ▲ │                       ◀──────────── previous ──────────────
//!    └─┘ no (nudge)
//! ```
//!
//! Moving forward captures the current step's input into the store first;
//! moving back never captures, so earlier answers stay as saved until the
//! user edits them and moves forward again.

pub mod events;
pub mod surface;


use std::path::PathBuf;

use log::{debug, warn};

pub use events::{Direction, Outcome, UiEvent};
pub use surface::{EmailControl, StepSurface, StepView};

use crate::{
    config::EmailSettings,
    display::{OperationStatus, ResultsSummary},
    error::{QuestionnaireError, Result},
    models::{Step, ValentineResponse},
    store::AnswerStore,
};

/// Drives the questionnaire one step at a time.
pub struct StepController<'a> {
    store: &'a mut AnswerStore,
    email_settings: EmailSettings,
    export_dir: PathBuf,
    current: Step,
    nudges: u32,
    email_control: EmailControl,
}

impl<'a> StepController<'a> {
    /// Creates a controller positioned on the opening question.
    pub fn new(store: &'a mut AnswerStore) -> Self {
        Self {
            store,
            email_settings: EmailSettings::default(),
            export_dir: PathBuf::from("."),
            current: Step::Intro,
            nudges: 0,
            email_control: EmailControl::default(),
        }
    }

    /// Relay credentials used when the user sends their answers.
    pub fn with_email_settings(mut self, settings: EmailSettings) -> Self {
        self.email_settings = settings;
        self
    }

    /// Directory exports are written to.
    pub fn with_export_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.export_dir = dir.into();
        self
    }

    pub fn current_step(&self) -> Step {
        self.current
    }

    /// How many times "no" was chosen since the controller was created.
    pub fn nudges(&self) -> u32 {
        self.nudges
    }

    pub fn email_control(&self) -> EmailControl {
        self.email_control
    }

    pub fn store(&self) -> &AnswerStore {
        self.store
    }

    /// Shows the opening question.
    pub fn start<S: StepSurface + ?Sized>(&mut self, surface: &mut S) {
        self.current = Step::Intro;
        surface.show_step(&StepView::for_step(self.current));
    }

    /// Handles one user action.
    pub async fn dispatch<S: StepSurface + ?Sized>(
        &mut self,
        event: UiEvent,
        surface: &mut S,
    ) -> Outcome {
        debug!("Handling {event:?} on {:?}", self.current);
        match event {
            UiEvent::Respond(response) => self.respond(response, surface),
            UiEvent::Next => self.next(surface),
            UiEvent::Previous => self.previous(surface),
            UiEvent::Arrow(direction) => self.navigate(direction, surface),
            UiEvent::Export => self.export(surface),
            UiEvent::ToggleEmailForm => self.toggle_email_form(surface),
            UiEvent::SendEmail { to } => self.send_email(&to, surface).await,
        }
    }

    /// Answers the opening question.
    ///
    /// "Yes" records the answer and moves on. "No" records it too but stays,
    /// with a nudge. Ignored on every other step.
    pub fn respond<S: StepSurface + ?Sized>(
        &mut self,
        response: ValentineResponse,
        surface: &mut S,
    ) -> Outcome {
        if self.current != Step::Intro {
            return Outcome::Unchanged;
        }

        let saved = self.store.set_valentine_response(response);
        self.report_save_failure(saved, surface);

        match response {
            ValentineResponse::Yes => self.show(Step::Acknowledgment, surface),
            ValentineResponse::No => {
                self.nudges += 1;
                surface.show_nudge(self.nudges);
                Outcome::Nudged {
                    count: self.nudges,
                }
            }
            ValentineResponse::Unanswered => Outcome::Unchanged,
        }
    }

    /// Captures the current step's input, then advances unless on the last
    /// step.
    ///
    /// The opening question can only be left by answering "yes".
    pub fn next<S: StepSurface + ?Sized>(&mut self, surface: &mut S) -> Outcome {
        if self.current == Step::Intro
            && self.store.record().valentine_response != ValentineResponse::Yes
        {
            return Outcome::Unchanged;
        }

        self.capture(surface);

        match self.current.next() {
            Some(step) => self.show(step, surface),
            None => Outcome::Unchanged,
        }
    }

    /// Goes back one step without capturing anything.
    pub fn previous<S: StepSurface + ?Sized>(&mut self, surface: &mut S) -> Outcome {
        match self.current.previous() {
            Some(step) => self.show(step, surface),
            None => Outcome::Unchanged,
        }
    }

    /// Arrow keys behave exactly like the previous/next controls.
    pub fn navigate<S: StepSurface + ?Sized>(
        &mut self,
        direction: Direction,
        surface: &mut S,
    ) -> Outcome {
        match direction {
            Direction::Left => self.previous(surface),
            Direction::Right => self.next(surface),
        }
    }

    /// Writes the answers to a JSON file. Only available on the results step.
    pub fn export<S: StepSurface + ?Sized>(&mut self, surface: &mut S) -> Outcome {
        if self.current != Step::Results {
            return Outcome::Unchanged;
        }

        self.store.get_all();
        match self.store.export_as_file(&self.export_dir) {
            Ok(path) => {
                surface.show_status(&OperationStatus::success(format!(
                    "Downloaded! Saved to {}",
                    path.display()
                )));
                Outcome::Exported(path)
            }
            Err(e) => {
                surface.show_status(&OperationStatus::failure(format!("Error: {e}")));
                Outcome::Rejected(e)
            }
        }
    }

    /// Shows or hides the email form on the results step.
    pub fn toggle_email_form<S: StepSurface + ?Sized>(&mut self, surface: &mut S) -> Outcome {
        if self.current != Step::Results {
            return Outcome::Unchanged;
        }

        self.email_control.visible = !self.email_control.visible;
        surface.set_email_control(self.email_control);
        Outcome::EmailFormToggled {
            visible: self.email_control.visible,
        }
    }

    /// Sends the answers to `to` through the email relay.
    ///
    /// A blank `to` falls back to the configured default recipient.
    ///
    /// The send control is disabled for the duration of the call and
    /// restored afterwards, whatever the result. Failures are shown on the
    /// surface and returned as [`Outcome::Rejected`].
    pub async fn send_email<S: StepSurface + ?Sized>(&mut self, to: &str, surface: &mut S) -> Outcome {
        if self.current != Step::Results {
            return Outcome::Unchanged;
        }

        let to = match to.trim() {
            "" => self.email_settings.to_email.as_deref().unwrap_or("").trim(),
            to => to,
        };
        if to.is_empty() {
            surface.show_status(&OperationStatus::failure("Please enter an email address"));
            return Outcome::Rejected(
                QuestionnaireError::invalid_input("to_email")
                    .with_reason("an email address is required"),
            );
        }

        if !self.store.has_email_sender() {
            surface.show_status(&OperationStatus::failure(
                "Email is not configured. Use the export option to save your answers instead.",
            ));
            return Outcome::Rejected(QuestionnaireError::EmailServiceUnavailable);
        }

        self.email_control.sending = true;
        surface.set_email_control(self.email_control);

        let config = self.email_settings.email_config(to);
        let result = self.store.send_by_email(&config).await;

        self.email_control.sending = false;
        surface.set_email_control(self.email_control);

        match result {
            Ok(_) => {
                surface.show_status(&OperationStatus::success("Email sent successfully!"));
                surface.clear_email_input();
                Outcome::EmailSent
            }
            Err(e) => {
                let message = match &e {
                    QuestionnaireError::EmailSendFailed { reason } => format!("Error: {reason}"),
                    other => format!("Error: {other}"),
                };
                surface.show_status(&OperationStatus::failure(message));
                Outcome::Rejected(e)
            }
        }
    }

    /// Stores whatever the current step collects.
    fn capture<S: StepSurface + ?Sized>(&mut self, surface: &mut S) {
        let saved = match self.current {
            Step::Date => match surface.date_input() {
                Some(date) => self.store.set_date(Some(date)),
                None => Ok(()),
            },
            step => match step.category() {
                Some(category) => self
                    .store
                    .set_selection(category, surface.selected_items(category)),
                None => Ok(()),
            },
        };
        self.report_save_failure(saved, surface);
    }

    /// Moves to `step`, rendering the summary when it is the results step.
    fn show<S: StepSurface + ?Sized>(&mut self, step: Step, surface: &mut S) -> Outcome {
        self.current = step;
        surface.show_step(&StepView::for_step(step));

        if step == Step::Results {
            let record = self.store.get_all();
            surface.show_summary(&ResultsSummary(record).to_string());
        }

        Outcome::Moved(step)
    }

    fn report_save_failure<S: StepSurface + ?Sized>(&self, saved: Result<()>, surface: &mut S) {
        if let Err(e) = saved {
            warn!("Continuing without persisted answers: {e}");
            surface.show_status(&OperationStatus::warning(format!(
                "Your answers could not be saved: {e}"
            )));
        }
    }
}
