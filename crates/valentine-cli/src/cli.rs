//! Command handlers for the Valentine CLI
//!
//! [`Cli`] owns the answer store for the lifetime of the process and turns
//! each parsed command into store operations, rendering the outcome through
//! the [`TerminalRenderer`]. Core errors are wrapped with `anyhow` context at
//! this boundary.

use std::{io, path::PathBuf};

use anyhow::{bail, Context, Result};
use jiff::Zoned;
use log::info;
use valentine_core::{
    AnswerStore, ClearResult, ExportResult, OperationStatus, QuestionnaireError, Settings,
    StepController, StepSurface,
};

use crate::{
    args::{ClearArgs, SendArgs},
    renderer::TerminalRenderer,
    wizard::{self, TerminalSurface},
};

pub struct Cli {
    store: AnswerStore,
    renderer: TerminalRenderer,
    settings: Settings,
    export_dir: PathBuf,
    storage_error: Option<QuestionnaireError>,
}

impl Cli {
    pub fn new(
        store: AnswerStore,
        renderer: TerminalRenderer,
        settings: Settings,
        export_dir: PathBuf,
    ) -> Self {
        Self {
            store,
            renderer,
            settings,
            export_dir,
            storage_error: None,
        }
    }

    /// Records why the answer database could not be opened, if it could not.
    pub fn with_storage_error(mut self, error: Option<QuestionnaireError>) -> Self {
        self.storage_error = error;
        self
    }

    /// Walks through the questionnaire on stdin/stdout.
    pub async fn run_wizard(self) -> Result<()> {
        let Self {
            mut store,
            renderer,
            settings,
            export_dir,
            storage_error,
        } = self;

        let today = Zoned::now().date();
        let mut surface =
            TerminalSurface::new(io::stdout(), &renderer, settings.options.clone(), today)
                .with_record(store.record());
        if let Some(e) = storage_error {
            surface.show_status(&OperationStatus::warning(format!(
                "Your answers will not be saved after you quit: {e}"
            )));
        }

        let mut controller = StepController::new(&mut store)
            .with_email_settings(settings.email.clone())
            .with_export_dir(export_dir);

        info!("Starting interactive questionnaire");
        wizard::run(&mut controller, &mut surface, io::stdin().lock())
            .await
            .context("Failed to run the questionnaire")
    }

    /// Prints the saved answers as text.
    pub fn show(&mut self) -> Result<()> {
        self.store.get_all();
        let text = self.store.format_as_text();
        self.renderer
            .render(&format!("{text}\n"))
            .context("Failed to write output")
    }

    /// Prints the saved answers as JSON, without styling.
    pub fn json(&mut self) -> Result<()> {
        self.store.get_all();
        let json = self
            .store
            .format_as_json()
            .context("Failed to serialize answers")?;
        println!("{json}");
        Ok(())
    }

    pub fn export(&mut self) -> Result<()> {
        self.store.get_all();
        let path = self
            .store
            .export_as_file(&self.export_dir)
            .context("Failed to export answers")?;
        self.renderer
            .render(&ExportResult::new(path).to_string())
            .context("Failed to write output")
    }

    pub async fn send(&mut self, args: SendArgs) -> Result<()> {
        self.store.get_all();
        let config = self
            .settings
            .email
            .email_config(args.to.as_deref().unwrap_or_default());
        self.store
            .send_by_email(&config)
            .await
            .context("Failed to send email")?;
        let status = OperationStatus::success(format!("Email sent to {}", config.to_email));
        self.renderer
            .render(&status.to_string())
            .context("Failed to write output")
    }

    pub fn clear(&mut self, args: ClearArgs) -> Result<()> {
        if !args.confirm {
            bail!("Refusing to delete saved answers without --confirm");
        }
        self.store.clear().context("Failed to clear answers")?;
        self.renderer
            .render(&ClearResult.to_string())
            .context("Failed to write output")
    }
}
