//! HTTP middleware stack for the site.
//!
//! # Middleware Order (bottom to top in Router)
//!
//! 1. Sentry layer (capture errors)
//! 2. `TraceLayer` (request tracing)
//! 3. Request ID (add unique ID to each request)
//! 4. Security headers (CSP, client hints, etc.)
//!
//! The [`Theme`] extractor is not a layer: handlers that render pages take
//! it as an argument so the preference is resolved before rendering.

pub mod request_id;
pub mod security_headers;
pub mod theme;

pub use request_id::request_id_middleware;
pub use security_headers::security_headers_middleware;
pub use theme::{ClientHint, CookieStore, RequestThemeManager, Theme, theme_manager};
