//! Application state shared across handlers.

use std::sync::Arc;

use crate::config::SiteConfig;
use crate::services::{ContactService, DisabledMailer, Mailer, MailerError, ResendMailer};

/// Application state shared across all handlers.
///
/// This struct is cheaply cloneable via `Arc` and provides access to
/// configuration and the contact service.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    config: SiteConfig,
    contact: ContactService,
}

impl AppState {
    /// Create application state, choosing the mailer from configuration.
    ///
    /// Without a Resend API key, contact delivery is disabled and every
    /// submission fails with a delivery error.
    ///
    /// # Errors
    ///
    /// Returns an error if the Resend client cannot be built.
    pub fn new(config: SiteConfig) -> Result<Self, MailerError> {
        let mailer: Arc<dyn Mailer> = match &config.contact.resend_api_key {
            Some(key) => Arc::new(ResendMailer::new(key)?),
            None => {
                tracing::warn!("RESEND_API_KEY not set, contact form delivery disabled");
                Arc::new(DisabledMailer)
            }
        };
        Ok(Self::with_mailer(config, mailer))
    }

    /// Create application state with an explicit mailer.
    #[must_use]
    pub fn with_mailer(config: SiteConfig, mailer: Arc<dyn Mailer>) -> Self {
        let contact = ContactService::new(&config.contact, mailer);
        Self {
            inner: Arc::new(AppStateInner { config, contact }),
        }
    }

    /// Get a reference to the site configuration.
    #[must_use]
    pub fn config(&self) -> &SiteConfig {
        &self.inner.config
    }

    /// Get a reference to the contact service.
    #[must_use]
    pub fn contact(&self) -> &ContactService {
        &self.inner.contact
    }
}
