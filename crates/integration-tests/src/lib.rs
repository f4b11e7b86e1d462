//! Integration tests for the portfolio site.
//!
//! Most tests drive the full router in-process with `tower::ServiceExt`, so
//! they need no running server. Tests marked `#[ignore]` talk to a live
//! instance at `SITE_BASE_URL`.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p portfolio-integration-tests
//!
//! # Against a running server
//! SITE_BASE_URL=http://localhost:3000 cargo test -p portfolio-integration-tests -- --ignored
//! ```

#![allow(clippy::unwrap_used, clippy::missing_panics_doc)]

use std::path::PathBuf;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::{
    Router,
    body::Body,
    http::{HeaderMap, Request, Response, header},
};
use portfolio_core::Email;
use portfolio_site::{
    app,
    config::{ContactConfig, SiteConfig},
    services::{Mailer, MailerError, OutgoingEmail},
    state::AppState,
};
use tower::ServiceExt;
use url::Url;

/// Largest response body the helpers will buffer.
const BODY_LIMIT: usize = 1024 * 1024;

/// Mailer that keeps every message in memory.
#[derive(Default)]
pub struct MockMailer {
    sent: Mutex<Vec<OutgoingEmail>>,
    fail: bool,
}

impl MockMailer {
    /// A mailer whose provider rejects every message.
    #[must_use]
    pub fn failing() -> Self {
        Self {
            sent: Mutex::new(Vec::new()),
            fail: true,
        }
    }

    /// Messages handed to the provider so far.
    pub fn sent(&self) -> Vec<OutgoingEmail> {
        self.sent.lock().unwrap().clone()
    }
}

#[async_trait]
impl Mailer for MockMailer {
    async fn send(&self, email: &OutgoingEmail) -> Result<(), MailerError> {
        self.sent.lock().unwrap().push(email.clone());
        if self.fail {
            return Err(MailerError::Api {
                status: 500,
                message: "provider unavailable".to_string(),
            });
        }
        Ok(())
    }
}

/// Configuration used by every in-process test.
#[must_use]
pub fn test_config() -> SiteConfig {
    SiteConfig {
        host: "127.0.0.1".parse().unwrap(),
        port: 3000,
        base_url: Url::parse("http://localhost:3000").unwrap(),
        static_dir: PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../site/static"),
        contact: ContactConfig {
            recipient: Email::parse("owner@example.com").unwrap(),
            sender: Email::parse("noreply@example.com").unwrap(),
            sender_name: "Portfolio Contact".to_string(),
            resend_api_key: None,
        },
        sentry_dsn: None,
        sentry_environment: None,
    }
}

/// Router wired to a mock mailer.
pub struct TestApp {
    router: Router,
    pub mailer: Arc<MockMailer>,
}

impl TestApp {
    /// App whose mailer accepts every message.
    #[must_use]
    pub fn new() -> Self {
        Self::with_mailer(MockMailer::default())
    }

    /// App with a specific mailer.
    #[must_use]
    pub fn with_mailer(mailer: MockMailer) -> Self {
        let mailer = Arc::new(mailer);
        let state = AppState::with_mailer(test_config(), mailer.clone());
        Self {
            router: app(state),
            mailer,
        }
    }

    /// Send a request through the full middleware stack.
    pub async fn request(&self, request: Request<Body>) -> Response<Body> {
        self.router.clone().oneshot(request).await.unwrap()
    }

    /// `GET path`, optionally with a `Cookie` header.
    pub async fn get(&self, path: &str, cookie: Option<&str>) -> Response<Body> {
        let mut builder = Request::get(path);
        if let Some(cookie) = cookie {
            builder = builder.header(header::COOKIE, cookie);
        }
        self.request(builder.body(Body::empty()).unwrap()).await
    }

    /// `POST path` with a JSON body.
    pub async fn post_json(&self, path: &str, body: &str) -> Response<Body> {
        let request = Request::post(path)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap();
        self.request(request).await
    }
}

impl Default for TestApp {
    fn default() -> Self {
        Self::new()
    }
}

/// Read a response body as text.
pub async fn body_text(response: Response<Body>) -> String {
    let bytes = axum::body::to_bytes(response.into_body(), BODY_LIMIT)
        .await
        .unwrap();
    String::from_utf8(bytes.to_vec()).unwrap()
}

/// Read a response body as JSON.
pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    serde_json::from_str(&body_text(response).await).unwrap()
}

/// The `theme=...` pair from a `Set-Cookie` header, ready to send back.
#[must_use]
pub fn theme_cookie(headers: &HeaderMap) -> Option<String> {
    headers
        .get_all(header::SET_COOKIE)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .find(|value| value.starts_with("theme="))
        .and_then(|value| value.split(';').next())
        .map(str::to_string)
}

/// Base URL of a live server for ignored tests.
#[must_use]
pub fn live_base_url() -> String {
    std::env::var("SITE_BASE_URL").unwrap_or_else(|_| "http://localhost:3000".to_string())
}
