//! Contact form submission.

use serde::{Deserialize, Serialize};

/// Subject used when the visitor leaves the subject blank.
pub const DEFAULT_SUBJECT: &str = "New Contact Form Message";

/// Subject line shown in the message body when none was given.
pub const NO_SUBJECT: &str = "(No subject)";

/// Errors that can occur when validating a [`ContactMessage`].
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum ContactError {
    /// Name, email, or message is empty.
    #[error("Missing required fields")]
    MissingFields,
}

/// A message composed by a visitor on the contact page.
///
/// Every field defaults to empty so that absent JSON keys and absent form
/// fields surface as a validation failure rather than a parse failure.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactMessage {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub subject: Option<String>,
    #[serde(default)]
    pub message: String,
}

impl ContactMessage {
    /// Check that name, email, and message are present.
    ///
    /// Only presence is checked, and accepted fields are kept exactly as
    /// submitted. A whitespace-only subject counts as no subject.
    ///
    /// # Errors
    ///
    /// Returns [`ContactError::MissingFields`] if name, email, or message is
    /// empty.
    pub fn validate(&self) -> Result<ValidContact, ContactError> {
        if self.name.is_empty() || self.email.is_empty() || self.message.is_empty() {
            return Err(ContactError::MissingFields);
        }

        let subject = self
            .subject
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_owned);

        Ok(ValidContact {
            name: self.name.clone(),
            email: self.email.clone(),
            subject,
            message: self.message.clone(),
        })
    }
}

/// A [`ContactMessage`] that passed validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidContact {
    name: String,
    email: String,
    subject: Option<String>,
    message: String,
}

impl ValidContact {
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The submitter's address, used as the reply-to of the forwarded mail.
    #[must_use]
    pub fn email(&self) -> &str {
        &self.email
    }

    #[must_use]
    pub fn subject(&self) -> Option<&str> {
        self.subject.as_deref()
    }

    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Subject line for the outgoing email.
    #[must_use]
    pub fn subject_or_default(&self) -> &str {
        self.subject().unwrap_or(DEFAULT_SUBJECT)
    }

    /// Subject as displayed inside the email body.
    #[must_use]
    pub fn subject_display(&self) -> &str {
        self.subject().unwrap_or(NO_SUBJECT)
    }

    /// Message split on every `\n`, for rendering with line breaks.
    ///
    /// A trailing newline yields a final empty line.
    pub fn message_lines(&self) -> impl Iterator<Item = &str> {
        self.message.split('\n')
    }
}
