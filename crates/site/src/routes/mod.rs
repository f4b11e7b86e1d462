//! HTTP route handlers for the site.
//!
//! # Route Structure
//!
//! ```text
//! GET  /                       - Home page
//! GET  /about                  - Skills, experience, education
//! GET  /projects               - Project cards
//! GET  /contact                - Contact page with form
//! POST /contact                - Plain HTML form submission (no JS)
//! GET  /health                 - Health check
//!
//! # Theme
//! POST /theme/toggle           - Toggle preference, redirect back
//! GET  /api/theme              - Current preference as JSON
//! PUT  /api/theme              - Set preference
//! POST /api/theme/toggle       - Toggle preference, return JSON
//!
//! # Contact API
//! POST /api/contact            - Forward a message to the site owner
//!
//! # SEO
//! GET  /robots.txt             - Crawler rules
//! GET  /sitemap.xml            - Page list
//! ```

pub mod contact;
pub mod pages;
pub mod seo;
pub mod theme;

use axum::{
    Router,
    http::Uri,
    routing::{get, post},
};

use crate::error::AppError;
use crate::state::AppState;

/// Create the theme API routes router.
pub fn theme_api_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(theme::current).put(theme::set))
        .route("/toggle", post(theme::toggle_json))
}

/// Create all routes for the site.
pub fn routes() -> Router<AppState> {
    Router::new()
        // Pages
        .route("/", get(pages::home))
        .route("/about", get(pages::about))
        .route("/projects", get(pages::projects))
        .route("/contact", get(pages::contact).post(contact::submit_form))
        // Theme
        .route("/theme/toggle", post(theme::toggle_redirect))
        .nest("/api/theme", theme_api_routes())
        // Contact API
        .route("/api/contact", post(contact::submit_json))
        // SEO
        .route("/robots.txt", get(seo::robots))
        .route("/sitemap.xml", get(seo::sitemap))
        .fallback(not_found)
}

/// Fallback for unknown paths.
async fn not_found(uri: Uri) -> AppError {
    AppError::NotFound(uri.path().to_string())
}
