//! Valentine CLI Application
//!
//! Runs the questionnaire interactively, or works on the saved answers
//! through subcommands.

mod args;
mod cli;
mod renderer;
mod wizard;

use anyhow::{Context, Result};
use args::{Args, Commands};
use clap::Parser;
use cli::Cli;
use log::info;
use renderer::TerminalRenderer;
use valentine_core::{EmailJsSender, Settings, StoreBuilder};

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();

    let Args {
        database_file,
        no_color,
        config,
        export_dir,
        command,
    } = Args::parse();

    let settings = Settings::load(config.as_deref()).context("Failed to load configuration")?;

    let mut builder = StoreBuilder::new().with_database_path(database_file);
    if let Some(sender) = EmailJsSender::from_settings(&settings.email) {
        builder = builder.with_email_sender(sender);
    }
    // The wizard can still run without a database; subcommands cannot.
    let (store, storage_error) = match command {
        None => builder.build_or_memory(),
        Some(_) => (
            builder.build().context("Failed to initialize answer store")?,
            None,
        ),
    };

    let export_dir = export_dir.unwrap_or_else(|| settings.export_dir());
    let renderer = TerminalRenderer::new(!no_color);

    info!("Valentine started");

    let mut cli = Cli::new(store, renderer, settings, export_dir).with_storage_error(storage_error);
    match command {
        Some(Commands::Show) => cli.show(),
        Some(Commands::Json) => cli.json(),
        Some(Commands::Export) => cli.export(),
        Some(Commands::Send(args)) => cli.send(args).await,
        Some(Commands::Clear(args)) => cli.clear(args),
        None => cli.run_wizard().await,
    }
}
