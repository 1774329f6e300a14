//! Configuration file loading.
//!
//! Settings come from a TOML file, by default
//! `$XDG_CONFIG_HOME/valentine/config.toml`. A missing default file simply
//! yields the built-in defaults; a file named explicitly must exist.
//!
//! ```toml
//! export_dir = "/home/me/Downloads"
//!
//! [email]
//! service_id = "service_abc"
//! template_id = "template_xyz"
//! public_key = "pk_123"
//! to_email = "me@example.com"
//!
//! [options]
//! food = ["Pizza", "Sushi"]
//! ```

use std::{
    fs,
    path::{Path, PathBuf},
};

use log::{debug, info};
use serde::Deserialize;

use crate::{
    email::EmailConfig,
    error::{QuestionnaireError, Result, ResultExt},
    models::OptionCatalog,
};

/// Relay credentials and defaults from the `[email]` section.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct EmailSettings {
    pub service_id: Option<String>,
    pub template_id: Option<String>,
    pub public_key: Option<String>,
    /// Overrides the relay endpoint, mainly for testing against a local server
    pub endpoint: Option<String>,
    /// Default recipient when none is entered
    pub to_email: Option<String>,
}

impl EmailSettings {
    /// All three relay credentials are present and non-empty.
    pub fn is_configured(&self) -> bool {
        [&self.service_id, &self.template_id, &self.public_key]
            .iter()
            .all(|value| value.as_deref().is_some_and(|v| !v.trim().is_empty()))
    }

    /// Relay config addressed to `to_email`, falling back to the configured
    /// default recipient when `to_email` is blank.
    pub fn email_config(&self, to_email: &str) -> EmailConfig {
        let to_email = if to_email.trim().is_empty() {
            self.to_email.clone().unwrap_or_default()
        } else {
            to_email.trim().to_string()
        };

        EmailConfig {
            service_id: self.service_id.clone().unwrap_or_default(),
            template_id: self.template_id.clone().unwrap_or_default(),
            public_key: self.public_key.clone().unwrap_or_default(),
            to_email,
        }
    }
}

/// Application settings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub email: EmailSettings,
    pub options: OptionCatalog,
    /// Directory exported JSON files are written to
    pub export_dir: Option<PathBuf>,
}

impl Settings {
    /// Loads settings from `path`, or from the default location when `None`.
    ///
    /// # Errors
    ///
    /// Returns `QuestionnaireError::Configuration` if an explicitly named file
    /// is missing or either file fails to parse, and
    /// `QuestionnaireError::FileSystem` if it cannot be read.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => {
                if !path.exists() {
                    return Err(QuestionnaireError::Configuration {
                        message: format!("config file '{}' does not exist", path.display()),
                    });
                }
                Self::from_file(path)
            }
            None => match Self::default_config_path() {
                Some(path) => Self::from_file(&path),
                None => {
                    debug!("No config file found, using defaults");
                    Ok(Self::default())
                }
            },
        }
    }

    /// Parses settings from TOML text.
    pub fn from_toml(contents: &str) -> Result<Self> {
        toml::from_str(contents).with_context("Failed to parse config file")
    }

    fn from_file(path: &Path) -> Result<Self> {
        info!("Loading config from {}", path.display());
        let contents = fs::read_to_string(path).map_err(|e| QuestionnaireError::FileSystem {
            path: path.to_path_buf(),
            source: e,
        })?;
        Self::from_toml(&contents)
    }

    /// Existing config file under the XDG config directories, if any.
    fn default_config_path() -> Option<PathBuf> {
        xdg::BaseDirectories::with_prefix("valentine").find_config_file("config.toml")
    }

    /// Export directory, defaulting to the current directory.
    pub fn export_dir(&self) -> PathBuf {
        self.export_dir
            .clone()
            .unwrap_or_else(|| PathBuf::from("."))
    }
}
