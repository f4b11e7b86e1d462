//! Contact submission handling.
//!
//! Validates a visitor's message, renders it into the owner-facing email,
//! and hands it to the configured [`Mailer`] in a single attempt.

use std::sync::Arc;

use askama::Template;
use axum::http::StatusCode;
use portfolio_core::{ContactError, ContactMessage, ValidContact};
use thiserror::Error;

use super::mailer::{Mailer, MailerError, OutgoingEmail};
use crate::config::ContactConfig;

/// HTML body for a forwarded contact message.
#[derive(Template)]
#[template(path = "email/contact.html")]
struct ContactEmailHtml<'a> {
    contact: &'a ValidContact,
    message_lines: Vec<&'a str>,
}

/// Ways a submission can fail.
#[derive(Debug, Error)]
pub enum SubmitError {
    /// Name, email, or message missing.
    #[error(transparent)]
    Validation(#[from] ContactError),

    /// The email provider reported a failure.
    #[error("delivery failed: {0}")]
    Delivery(#[from] MailerError),

    /// Anything else: unreadable request, template failure.
    #[error("internal error: {0}")]
    Internal(String),
}

impl SubmitError {
    /// HTTP status reported to the submitter.
    #[must_use]
    pub const fn status(&self) -> StatusCode {
        match self {
            Self::Validation(_) => StatusCode::BAD_REQUEST,
            Self::Delivery(_) | Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Message safe to show the submitter.
    #[must_use]
    pub const fn public_message(&self) -> &'static str {
        match self {
            Self::Validation(_) => "Missing required fields",
            Self::Delivery(_) => "Failed to send email",
            Self::Internal(_) => "Server error",
        }
    }
}

impl From<askama::Error> for SubmitError {
    fn from(err: askama::Error) -> Self {
        Self::Internal(format!("template error: {err}"))
    }
}

/// Forwards contact messages to the site owner.
#[derive(Clone)]
pub struct ContactService {
    mailer: Arc<dyn Mailer>,
    from: String,
    recipient: String,
}

impl ContactService {
    #[must_use]
    pub fn new(config: &ContactConfig, mailer: Arc<dyn Mailer>) -> Self {
        Self {
            mailer,
            from: config.sender.mailbox(&config.sender_name),
            recipient: config.recipient.to_string(),
        }
    }

    /// Validate and forward one message.
    ///
    /// The mailer is called at most once, and only for valid input.
    ///
    /// # Errors
    ///
    /// - [`SubmitError::Validation`] if a required field is empty
    /// - [`SubmitError::Delivery`] if the mailer fails
    /// - [`SubmitError::Internal`] if the email body cannot be rendered
    pub async fn submit(&self, message: &ContactMessage) -> Result<(), SubmitError> {
        let contact = message.validate()?;
        let email = self.build_email(&contact)?;

        self.mailer.send(&email).await.map_err(|e| {
            tracing::error!(error = %e, "Failed to deliver contact message");
            SubmitError::from(e)
        })?;

        tracing::info!(subject = %email.subject, "Contact message forwarded");
        Ok(())
    }

    /// Address and render the email for a validated message.
    ///
    /// # Errors
    ///
    /// Returns an error if the body template fails to render.
    pub fn build_email(&self, contact: &ValidContact) -> Result<OutgoingEmail, SubmitError> {
        let html = ContactEmailHtml {
            contact,
            message_lines: contact.message_lines().collect(),
        }
        .render()?;

        Ok(OutgoingEmail {
            from: self.from.clone(),
            to: vec![self.recipient.clone()],
            reply_to: Some(contact.email().to_owned()),
            subject: contact.subject_or_default().to_owned(),
            html,
        })
    }
}
