//! Site configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! ## Required
//! - `CONTACT_EMAIL` - Address contact-form messages are delivered to
//! - `SENDER_EMAIL` - Verified sender address at the email provider
//!
//! ## Optional
//! - `SITE_HOST` - Bind address (default: 127.0.0.1)
//! - `SITE_PORT` - Listen port (default: 3000)
//! - `SITE_BASE_URL` - Public URL of the site (default: <http://localhost:3000>)
//! - `SITE_STATIC_DIR` - Directory served under `/static` (default: crates/site/static)
//! - `SENDER_NAME` - Display name on outgoing mail (default: Portfolio Contact)
//! - `RESEND_API_KEY` - Resend API key; contact delivery is disabled without it
//! - `SENTRY_DSN` - Sentry error tracking DSN
//! - `SENTRY_ENVIRONMENT` - Sentry environment name

use std::net::{IpAddr, SocketAddr};
use std::path::PathBuf;

use portfolio_core::Email;
use secrecy::SecretString;
use thiserror::Error;
use url::Url;

/// Blocklist of common placeholder patterns (case-insensitive)
const PLACEHOLDER_PATTERNS: &[&str] = &[
    "your-",
    "changeme",
    "replace",
    "placeholder",
    "xxx",
    "todo",
    "fixme",
    "insert",
    "put-your",
    "add-your",
];

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Missing environment variable: {0}")]
    MissingEnvVar(String),
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
    #[error("Insecure secret in {0}: {1}")]
    InsecureSecret(String, String),
}

/// Site configuration.
#[derive(Debug, Clone)]
pub struct SiteConfig {
    /// IP address to bind the server to
    pub host: IpAddr,
    /// Port to listen on
    pub port: u16,
    /// Public base URL, used for absolute links (sitemap, robots.txt)
    pub base_url: Url,
    /// Directory of static assets
    pub static_dir: PathBuf,
    /// Contact form delivery
    pub contact: ContactConfig,
    /// Sentry DSN for error tracking
    pub sentry_dsn: Option<String>,
    /// Sentry environment name
    pub sentry_environment: Option<String>,
}

/// Contact form delivery configuration.
///
/// Implements `Debug` manually to redact the API key.
#[derive(Clone)]
pub struct ContactConfig {
    /// Where contact messages are delivered
    pub recipient: Email,
    /// Sender address registered with the email provider
    pub sender: Email,
    /// Display name on the From header
    pub sender_name: String,
    /// Resend API key; `None` disables delivery
    pub resend_api_key: Option<SecretString>,
}

impl std::fmt::Debug for ContactConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ContactConfig")
            .field("recipient", &self.recipient)
            .field("sender", &self.sender)
            .field("sender_name", &self.sender_name)
            .field(
                "resend_api_key",
                &self.resend_api_key.as_ref().map(|_| "[REDACTED]"),
            )
            .finish()
    }
}

impl SiteConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if required variables are missing or invalid,
    /// or if the API key looks like a placeholder.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        let host = get_env_or_default("SITE_HOST", "127.0.0.1")
            .parse::<IpAddr>()
            .map_err(|e| ConfigError::InvalidEnvVar("SITE_HOST".to_string(), e.to_string()))?;
        let port = get_env_or_default("SITE_PORT", "3000")
            .parse::<u16>()
            .map_err(|e| ConfigError::InvalidEnvVar("SITE_PORT".to_string(), e.to_string()))?;
        let base_url = parse_base_url(&get_env_or_default(
            "SITE_BASE_URL",
            "http://localhost:3000",
        ))?;
        let static_dir = PathBuf::from(get_env_or_default("SITE_STATIC_DIR", "crates/site/static"));

        Ok(Self {
            host,
            port,
            base_url,
            static_dir,
            contact: ContactConfig::from_env()?,
            sentry_dsn: get_optional_env("SENTRY_DSN"),
            sentry_environment: get_optional_env("SENTRY_ENVIRONMENT"),
        })
    }

    /// Returns the socket address for binding the server.
    #[must_use]
    pub const fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }

    /// Absolute URL for a site path such as `/about`.
    #[must_use]
    pub fn absolute_url(&self, path: &str) -> String {
        self.base_url
            .join(path)
            .map_or_else(|_| format!("{}{path}", self.base_url), String::from)
    }

    /// Whether cookies should carry the `Secure` attribute.
    #[must_use]
    pub fn secure_cookies(&self) -> bool {
        self.base_url.scheme() == "https"
    }
}

impl ContactConfig {
    fn from_env() -> Result<Self, ConfigError> {
        let resend_api_key = get_optional_env("RESEND_API_KEY")
            .filter(|key| !key.trim().is_empty())
            .map(|key| {
                validate_api_key(&key, "RESEND_API_KEY")?;
                Ok::<_, ConfigError>(SecretString::from(key))
            })
            .transpose()?;

        Ok(Self {
            recipient: get_required_email("CONTACT_EMAIL")?,
            sender: get_required_email("SENDER_EMAIL")?,
            sender_name: get_env_or_default("SENDER_NAME", "Portfolio Contact"),
            resend_api_key,
        })
    }
}

// =============================================================================
// Helper Functions
// =============================================================================

/// Get a required environment variable.
fn get_required_env(key: &str) -> Result<String, ConfigError> {
    std::env::var(key).map_err(|_| ConfigError::MissingEnvVar(key.to_string()))
}

/// Get a required environment variable holding an email address.
fn get_required_email(key: &str) -> Result<Email, ConfigError> {
    let value = get_required_env(key)?;
    Email::parse(&value).map_err(|e| ConfigError::InvalidEnvVar(key.to_string(), e.to_string()))
}

/// Get an optional environment variable.
fn get_optional_env(key: &str) -> Option<String> {
    std::env::var(key).ok()
}

/// Get an environment variable with a default value.
fn get_env_or_default(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

/// Parse the public base URL. Only http and https are accepted.
fn parse_base_url(value: &str) -> Result<Url, ConfigError> {
    let url = Url::parse(value)
        .map_err(|e| ConfigError::InvalidEnvVar("SITE_BASE_URL".to_string(), e.to_string()))?;
    if !matches!(url.scheme(), "http" | "https") {
        return Err(ConfigError::InvalidEnvVar(
            "SITE_BASE_URL".to_string(),
            format!("unsupported scheme '{}'", url.scheme()),
        ));
    }
    Ok(url)
}

/// Reject API keys that are obviously placeholders.
fn validate_api_key(key: &str, var_name: &str) -> Result<(), ConfigError> {
    let lower = key.to_lowercase();

    for pattern in PLACEHOLDER_PATTERNS {
        if lower.contains(pattern) {
            return Err(ConfigError::InsecureSecret(
                var_name.to_string(),
                format!("appears to be a placeholder (contains '{pattern}')"),
            ));
        }
    }

    Ok(())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn test_config(base_url: &str) -> SiteConfig {
        SiteConfig {
            host: "127.0.0.1".parse().unwrap(),
            port: 3000,
            base_url: parse_base_url(base_url).unwrap(),
            static_dir: PathBuf::from("static"),
            contact: ContactConfig {
                recipient: Email::parse("owner@example.com").unwrap(),
                sender: Email::parse("noreply@example.com").unwrap(),
                sender_name: "Portfolio Contact".to_string(),
                resend_api_key: Some(SecretString::from("re_live_key_value")),
            },
            sentry_dsn: None,
            sentry_environment: None,
        }
    }

    #[test]
    fn test_socket_addr() {
        let addr = test_config("http://localhost:3000").socket_addr();
        assert_eq!(addr.ip().to_string(), "127.0.0.1");
        assert_eq!(addr.port(), 3000);
    }

    #[test]
    fn test_absolute_url() {
        let config = test_config("https://portfolio.example.com");
        assert_eq!(
            config.absolute_url("/about"),
            "https://portfolio.example.com/about"
        );
    }

    #[test]
    fn test_secure_cookies_follow_scheme() {
        assert!(test_config("https://portfolio.example.com").secure_cookies());
        assert!(!test_config("http://localhost:3000").secure_cookies());
    }

    #[test]
    fn test_parse_base_url_rejects_other_schemes() {
        assert!(parse_base_url("ftp://example.com").is_err());
        assert!(parse_base_url("not a url").is_err());
    }

    #[test]
    fn test_validate_api_key_placeholder() {
        let err = validate_api_key("your-resend-key", "RESEND_API_KEY").unwrap_err();
        assert!(matches!(err, ConfigError::InsecureSecret(_, _)));
        assert!(validate_api_key("re_8f3kQ2mZ", "RESEND_API_KEY").is_ok());
    }

    #[test]
    fn test_contact_config_debug_redacts_key() {
        let debug_output = format!("{:?}", test_config("http://localhost:3000").contact);
        assert!(debug_output.contains("owner@example.com"));
        assert!(debug_output.contains("[REDACTED]"));
        assert!(!debug_output.contains("re_live_key_value"));
    }
}
