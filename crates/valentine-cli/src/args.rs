use std::path::PathBuf;

use clap::{Args as ClapArgs, Parser, Subcommand};

/// A step-by-step Valentine's questionnaire for the terminal
///
/// Run without a subcommand to answer the questionnaire interactively: the
/// opening question, a date, then food, dessert, and activity preferences,
/// ending on a summary you can export or email. Answers are saved after every
/// step, so the subcommands below can show or share them later.
#[derive(Parser)]
#[command(version, about, name = "valentine")]
pub struct Args {
    /// Path to the SQLite database file. Defaults to
    /// $XDG_DATA_HOME/valentine/valentine.db
    #[arg(long, global = true)]
    pub database_file: Option<PathBuf>,

    /// Disable colored output and use plain text
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Path to the configuration file. Defaults to
    /// $XDG_CONFIG_HOME/valentine/config.toml
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Directory exported answer files are written to. Overrides the
    /// configured export_dir
    #[arg(long, global = true)]
    pub export_dir: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands for the Valentine CLI
///
/// Each command works on the saved answers without walking through the
/// questionnaire:
/// - `show` / `json`: print the answers as text or JSON
/// - `export`: write the answers to a JSON file
/// - `send`: email the answers through the configured relay
/// - `clear`: forget every saved answer
#[derive(Subcommand)]
pub enum Commands {
    /// Show the saved answers
    #[command(alias = "s")]
    Show,
    /// Print the saved answers as JSON
    Json,
    /// Write the saved answers to a JSON file
    #[command(alias = "e")]
    Export,
    /// Email the saved answers
    Send(SendArgs),
    /// Delete all saved answers
    Clear(ClearArgs),
}

/// Email the saved answers through the configured relay
///
/// Needs an `[email]` section with service_id, template_id, and public_key in
/// the config file. Without one, use `export` instead.
#[derive(ClapArgs)]
pub struct SendArgs {
    /// Recipient address. Defaults to the configured to_email
    #[arg(long)]
    pub to: Option<String>,
}

/// Delete all saved answers
#[derive(ClapArgs)]
pub struct ClearArgs {
    /// Confirm deletion; nothing is removed without it
    #[arg(long)]
    pub confirm: bool,
}
