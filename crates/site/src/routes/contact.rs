//! Contact form route handlers.
//!
//! `POST /api/contact` is the JSON endpoint used by the contact page script.
//! `POST /contact` accepts the same fields as a plain form post and renders
//! the contact page with a notice, so the form works without JavaScript.

use axum::{
    Form, Json,
    body::Bytes,
    extract::{
        State,
        rejection::{BytesRejection, FormRejection},
    },
    http::StatusCode,
    response::IntoResponse,
};
use portfolio_core::ContactMessage;
use serde::Serialize;
use tracing::instrument;

use crate::error::Result;
use crate::middleware::Theme;
use crate::routes::pages::{ContactFormValues, ContactTemplate, Notice};
use crate::services::SubmitError;
use crate::state::AppState;

/// Success body for the JSON endpoint.
#[derive(Debug, Serialize)]
pub struct ContactResponse {
    pub success: bool,
}

/// Forward a contact message.
///
/// POST /api/contact
///
/// - 200 `{"success": true}` once the provider accepts the message
/// - 400 `{"error": "Missing required fields"}` if name, email, or message is empty
/// - 500 `{"error": "Failed to send email"}` if the provider reports an error
/// - 500 `{"error": "Server error"}` if the body cannot be read
///
/// The body is parsed as JSON whatever its `Content-Type`, so plain
/// `fetch` calls that send a string body (`text/plain`) are accepted.
///
/// # Errors
///
/// Returns an `AppError::Contact` carrying the status and public message.
#[instrument(skip_all)]
pub async fn submit_json(
    State(state): State<AppState>,
    body: std::result::Result<Bytes, BytesRejection>,
) -> Result<Json<ContactResponse>> {
    let body = body.map_err(|rejection| {
        tracing::warn!(error = %rejection.body_text(), "Unreadable contact body");
        SubmitError::Internal(rejection.body_text())
    })?;
    let message: ContactMessage = serde_json::from_slice(&body).map_err(|e| {
        tracing::warn!(error = %e, "Malformed contact payload");
        SubmitError::Internal(e.to_string())
    })?;

    state.contact().submit(&message).await?;

    Ok(Json(ContactResponse { success: true }))
}

/// Handle a contact form posted without JavaScript.
///
/// POST /contact
#[instrument(skip_all)]
pub async fn submit_form(
    State(state): State<AppState>,
    Theme(theme): Theme,
    payload: std::result::Result<Form<ContactMessage>, FormRejection>,
) -> impl IntoResponse {
    let mut page = ContactTemplate::new(theme);

    let result = match &payload {
        Ok(Form(message)) => state.contact().submit(message).await,
        Err(rejection) => {
            tracing::warn!(error = %rejection.body_text(), "Unreadable contact form");
            Err(SubmitError::Internal(rejection.body_text()))
        }
    };

    match result {
        Ok(()) => {
            page.notice = Some(Notice {
                success: true,
                message: "Thanks! Your message has been sent.".to_string(),
            });
            (StatusCode::OK, page)
        }
        Err(err) => {
            // Keep what the visitor typed so they can fix and resend
            if let Ok(Form(message)) = payload {
                page.form = ContactFormValues {
                    name: message.name,
                    email: message.email,
                    subject: message.subject.unwrap_or_default(),
                    message: message.message,
                };
            }
            page.notice = Some(Notice {
                success: false,
                message: err.public_message().to_string(),
            });
            (err.status(), page)
        }
    }
}
