//! Outbound email delivery.
//!
//! The site sends exactly one kind of mail: a contact-form message forwarded
//! to the owner. Delivery goes through the [`Mailer`] trait so handlers can
//! run against the Resend HTTP API in production and a recording mock in
//! tests.

use async_trait::async_trait;
use reqwest::header::{AUTHORIZATION, HeaderMap, HeaderValue};
use secrecy::{ExposeSecret, SecretString};
use serde::Serialize;
use thiserror::Error;

/// Resend API endpoint for sending a single email.
const RESEND_EMAILS_URL: &str = "https://api.resend.com/emails";

/// Errors that can occur when sending email.
#[derive(Debug, Error)]
pub enum MailerError {
    /// HTTP request failed.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Provider rejected the message.
    #[error("API error: {status} - {message}")]
    Api { status: u16, message: String },

    /// The configured API key cannot be sent as a header.
    #[error("invalid API key: {0}")]
    InvalidApiKey(String),

    /// No API key configured.
    #[error("email delivery is not configured")]
    NotConfigured,
}

/// A fully-addressed message ready for delivery.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OutgoingEmail {
    /// `From` header, e.g. `Portfolio Contact <noreply@example.com>`.
    pub from: String,
    pub to: Vec<String>,
    pub reply_to: Option<String>,
    pub subject: String,
    pub html: String,
}

/// Something that can deliver an [`OutgoingEmail`].
#[async_trait]
pub trait Mailer: Send + Sync {
    /// Deliver one message. Implementations make a single attempt.
    ///
    /// # Errors
    ///
    /// Returns a [`MailerError`] if the provider reports a failure or
    /// cannot be reached.
    async fn send(&self, email: &OutgoingEmail) -> Result<(), MailerError>;
}

/// Request body for `POST /emails`.
#[derive(Serialize)]
struct ResendRequest<'a> {
    from: &'a str,
    to: &'a [String],
    subject: &'a str,
    html: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    reply_to: Option<&'a str>,
}

impl<'a> From<&'a OutgoingEmail> for ResendRequest<'a> {
    fn from(email: &'a OutgoingEmail) -> Self {
        Self {
            from: &email.from,
            to: &email.to,
            subject: &email.subject,
            html: &email.html,
            reply_to: email.reply_to.as_deref(),
        }
    }
}

/// [`Mailer`] backed by the Resend HTTP API.
#[derive(Clone)]
pub struct ResendMailer {
    client: reqwest::Client,
    endpoint: String,
}

impl ResendMailer {
    /// Create a new Resend client.
    ///
    /// # Errors
    ///
    /// Returns error if the API key is not a valid header value or the HTTP
    /// client fails to build.
    pub fn new(api_key: &SecretString) -> Result<Self, MailerError> {
        Self::with_endpoint(api_key, RESEND_EMAILS_URL)
    }

    /// Create a client that posts to a custom endpoint.
    ///
    /// # Errors
    ///
    /// Same as [`ResendMailer::new`].
    pub fn with_endpoint(api_key: &SecretString, endpoint: &str) -> Result<Self, MailerError> {
        let mut headers = HeaderMap::new();

        let mut auth_value = HeaderValue::from_str(&format!("Bearer {}", api_key.expose_secret()))
            .map_err(|e| MailerError::InvalidApiKey(e.to_string()))?;
        auth_value.set_sensitive(true);
        headers.insert(AUTHORIZATION, auth_value);

        let client = reqwest::Client::builder()
            .default_headers(headers)
            .build()?;

        Ok(Self {
            client,
            endpoint: endpoint.to_owned(),
        })
    }
}

#[async_trait]
impl Mailer for ResendMailer {
    async fn send(&self, email: &OutgoingEmail) -> Result<(), MailerError> {
        let response = self
            .client
            .post(&self.endpoint)
            .json(&ResendRequest::from(email))
            .send()
            .await?;
        let status = response.status();

        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(MailerError::Api {
                status: status.as_u16(),
                message,
            });
        }

        tracing::info!(subject = %email.subject, "Email sent successfully");
        Ok(())
    }
}

/// [`Mailer`] used when no provider is configured. Every send fails.
#[derive(Debug, Clone, Copy, Default)]
pub struct DisabledMailer;

#[async_trait]
impl Mailer for DisabledMailer {
    async fn send(&self, email: &OutgoingEmail) -> Result<(), MailerError> {
        tracing::warn!(subject = %email.subject, "Email delivery not configured, dropping message");
        Err(MailerError::NotConfigured)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn sample_email(reply_to: Option<&str>) -> OutgoingEmail {
        OutgoingEmail {
            from: "Portfolio Contact <noreply@example.com>".to_string(),
            to: vec!["owner@example.com".to_string()],
            reply_to: reply_to.map(String::from),
            subject: "Hello".to_string(),
            html: "<p>Hi</p>".to_string(),
        }
    }

    #[test]
    fn test_resend_request_body() {
        let email = sample_email(Some("jo@x.com"));
        let body = serde_json::to_value(ResendRequest::from(&email)).unwrap();
        assert_eq!(
            body,
            serde_json::json!({
                "from": "Portfolio Contact <noreply@example.com>",
                "to": ["owner@example.com"],
                "subject": "Hello",
                "html": "<p>Hi</p>",
                "reply_to": "jo@x.com",
            })
        );
    }

    #[test]
    fn test_resend_request_omits_missing_reply_to() {
        let email = sample_email(None);
        let body = serde_json::to_value(ResendRequest::from(&email)).unwrap();
        assert!(body.get("reply_to").is_none());
    }

    #[test]
    fn test_resend_mailer_rejects_bad_key() {
        let result = ResendMailer::new(&SecretString::from("bad\nkey"));
        assert!(matches!(result, Err(MailerError::InvalidApiKey(_))));
    }

    #[tokio::test]
    async fn test_disabled_mailer_fails() {
        let result = DisabledMailer.send(&sample_email(None)).await;
        assert!(matches!(result, Err(MailerError::NotConfigured)));
    }
}
