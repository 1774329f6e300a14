//! Email relay collaborator.
//!
//! Sending answers by email is delegated to a third-party relay. The store
//! only knows the [`EmailSender`] contract: given the relay credentials in an
//! [`EmailConfig`] and the named template variables in [`EmailParams`], the
//! sender either delivers or rejects with a [`RelayError`].
//!
//! [`EmailJsSender`] talks to the EmailJS REST API. Whether a sender exists at
//! all is decided once, when the store is built; a store without one reports
//! [`QuestionnaireError::EmailServiceUnavailable`] instead of probing.
//!
//! [`QuestionnaireError::EmailServiceUnavailable`]: crate::QuestionnaireError::EmailServiceUnavailable

use async_trait::async_trait;
use serde::Serialize;
use thiserror::Error;

pub mod emailjs;

pub use emailjs::{EmailJsSender, DEFAULT_EMAILJS_ENDPOINT};

/// Subject line of every results email.
pub const EMAIL_SUBJECT: &str = "Valentine's Questionnaire Results";

/// Relay credentials plus the recipient.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EmailConfig {
    pub service_id: String,
    pub template_id: String,
    pub public_key: String,
    pub to_email: String,
}

/// Named variables handed to the relay's email template.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EmailParams {
    pub to_email: String,
    pub subject: String,
    pub message: String,
    pub response: String,
    pub date: String,
    pub food: String,
    pub dessert: String,
    pub activities: String,
    pub timestamp: String,
}

/// What the relay answered on success.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmailReceipt {
    pub status: u16,
    pub text: String,
}

/// A rejection from the relay.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{message}")]
pub struct RelayError {
    /// HTTP status, when the relay answered at all
    pub status: Option<u16>,
    pub message: String,
}

impl RelayError {
    pub fn new(status: Option<u16>, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
        }
    }
}

/// Delivers formatted answers through an external relay.
#[async_trait]
pub trait EmailSender: Send + Sync {
    async fn send(
        &self,
        config: &EmailConfig,
        params: &EmailParams,
    ) -> Result<EmailReceipt, RelayError>;
}
