//! Sending answers through the email relay.

use log::{error, info};

use super::AnswerStore;
use crate::{
    display::{join_selection, LocalDateTime},
    email::{EmailConfig, EmailParams, EmailReceipt, EMAIL_SUBJECT},
    error::{QuestionnaireError, Result},
    models::Category,
};

impl AnswerStore {
    /// Template variables describing the current record.
    pub fn email_params(&self, config: &EmailConfig) -> EmailParams {
        let record = &self.record;
        EmailParams {
            to_email: config.to_email.clone(),
            subject: EMAIL_SUBJECT.to_string(),
            message: self.format_as_text(),
            response: record.valentine_response.label().to_string(),
            date: record.date_label(),
            food: join_selection(record.selection(Category::Food)),
            dessert: join_selection(record.selection(Category::Dessert)),
            activities: join_selection(record.selection(Category::Activities)),
            timestamp: LocalDateTime(&record.timestamp).to_string(),
        }
    }

    /// Hands the formatted answers to the email relay.
    ///
    /// The record is never modified, whatever the outcome.
    ///
    /// # Errors
    ///
    /// - `QuestionnaireError::EmailServiceUnavailable` if the store was built
    ///   without an email sender
    /// - `QuestionnaireError::InvalidInput` if no recipient is given
    /// - `QuestionnaireError::EmailSendFailed` if the relay rejects the send
    pub async fn send_by_email(&self, config: &EmailConfig) -> Result<EmailReceipt> {
        let Some(sender) = self.email_sender.as_deref() else {
            error!("Email relay is not configured");
            return Err(QuestionnaireError::EmailServiceUnavailable);
        };

        if config.to_email.trim().is_empty() {
            return Err(QuestionnaireError::invalid_input("to_email")
                .with_reason("an email address is required"));
        }

        let params = self.email_params(config);
        match sender.send(config, &params).await {
            Ok(receipt) => {
                info!("Results emailed to {}", config.to_email);
                Ok(receipt)
            }
            Err(e) => {
                error!("Error sending email: {e}");
                Err(QuestionnaireError::EmailSendFailed {
                    reason: e.to_string(),
                })
            }
        }
    }
}
