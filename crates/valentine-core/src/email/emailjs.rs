//! EmailJS REST API client.

use async_trait::async_trait;
use log::{debug, error};
use serde::Serialize;

use super::{EmailConfig, EmailParams, EmailReceipt, EmailSender, RelayError};
use crate::config::EmailSettings;

/// Public EmailJS send endpoint.
pub const DEFAULT_EMAILJS_ENDPOINT: &str = "https://api.emailjs.com/api/v1.0/email/send";

/// Request body accepted by the EmailJS send endpoint.
#[derive(Serialize)]
struct SendRequest<'a> {
    service_id: &'a str,
    template_id: &'a str,
    user_id: &'a str,
    template_params: &'a EmailParams,
}

/// [`EmailSender`] backed by EmailJS.
pub struct EmailJsSender {
    client: reqwest::Client,
    endpoint: String,
}

impl EmailJsSender {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            endpoint: endpoint.into(),
        }
    }

    /// Builds a sender when the settings carry complete relay credentials.
    ///
    /// Returns `None` otherwise, which leaves the store without an email
    /// capability.
    pub fn from_settings(settings: &EmailSettings) -> Option<Self> {
        if !settings.is_configured() {
            debug!("Email relay credentials incomplete; email sending disabled");
            return None;
        }
        let endpoint = settings
            .endpoint
            .clone()
            .unwrap_or_else(|| DEFAULT_EMAILJS_ENDPOINT.to_string());
        Some(Self::new(endpoint))
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl EmailSender for EmailJsSender {
    async fn send(
        &self,
        config: &EmailConfig,
        params: &EmailParams,
    ) -> Result<EmailReceipt, RelayError> {
        let body = SendRequest {
            service_id: &config.service_id,
            template_id: &config.template_id,
            user_id: &config.public_key,
            template_params: params,
        };

        debug!("Sending results email via {}", self.endpoint);
        let response = self
            .client
            .post(&self.endpoint)
            .json(&body)
            .send()
            .await
            .map_err(|e| {
                error!("Email relay request failed: {e}");
                RelayError::new(None, e.to_string())
            })?;

        let status = response.status();
        let text = response
            .text()
            .await
            .map_err(|e| RelayError::new(Some(status.as_u16()), e.to_string()))?;

        if status.is_success() {
            Ok(EmailReceipt {
                status: status.as_u16(),
                text,
            })
        } else {
            error!("Email relay rejected the request with {status}: {text}");
            let message = if text.trim().is_empty() {
                format!("relay responded with {status}")
            } else {
                text
            };
            Err(RelayError::new(Some(status.as_u16()), message))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn complete_settings() -> EmailSettings {
        EmailSettings {
            service_id: Some("service_abc".to_string()),
            template_id: Some("template_xyz".to_string()),
            public_key: Some("pk_123".to_string()),
            ..Default::default()
        }
    }

    #[test]
    fn test_sender_requires_complete_settings() {
        assert!(EmailJsSender::from_settings(&EmailSettings::default()).is_none());

        let mut partial = complete_settings();
        partial.public_key = None;
        assert!(EmailJsSender::from_settings(&partial).is_none());
    }

    #[test]
    fn test_sender_endpoint_defaults() {
        let sender = EmailJsSender::from_settings(&complete_settings()).unwrap();
        assert_eq!(sender.endpoint(), DEFAULT_EMAILJS_ENDPOINT);

        let mut custom = complete_settings();
        custom.endpoint = Some("http://localhost:9999/send".to_string());
        let sender = EmailJsSender::from_settings(&custom).unwrap();
        assert_eq!(sender.endpoint(), "http://localhost:9999/send");
    }

    #[test]
    fn test_request_body_shape() {
        let params = EmailParams {
            to_email: "me@example.com".to_string(),
            subject: "s".to_string(),
            message: "m".to_string(),
            response: "Yes".to_string(),
            date: "Not selected".to_string(),
            food: "Pizza".to_string(),
            dessert: "None selected".to_string(),
            activities: "None selected".to_string(),
            timestamp: "t".to_string(),
        };
        let body = SendRequest {
            service_id: "service_abc",
            template_id: "template_xyz",
            user_id: "pk_123",
            template_params: &params,
        };

        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(json["user_id"], "pk_123");
        assert_eq!(json["template_params"]["to_email"], "me@example.com");
        assert_eq!(json["template_params"]["food"], "Pizza");
    }
}
