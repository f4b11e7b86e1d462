//! Integration tests for contact form submission.

#![allow(clippy::unwrap_used)]

use axum::{
    body::Body,
    http::{Request, StatusCode, header},
};
use portfolio_integration_tests::{MockMailer, TestApp, body_json, body_text};
use serde_json::json;

#[tokio::test]
async fn test_contact_success_sends_one_email() {
    let app = TestApp::new();

    let resp = app
        .post_json(
            "/api/contact",
            r#"{"name":"Jo","email":"jo@x.com","subject":"","message":"Hi"}"#,
        )
        .await;

    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(body_json(resp).await, json!({"success": true}));

    let sent = app.mailer.sent();
    assert_eq!(sent.len(), 1);
    let email = &sent[0];
    assert_eq!(email.subject, "New Contact Form Message");
    assert_eq!(email.reply_to.as_deref(), Some("jo@x.com"));
    assert_eq!(email.to, vec!["owner@example.com".to_string()]);
    assert_eq!(email.from, "Portfolio Contact <noreply@example.com>");
    assert!(email.html.contains("(No subject)"));
    assert!(email.html.contains("Jo"));
}

#[tokio::test]
async fn test_contact_subject_is_forwarded() {
    let app = TestApp::new();

    let resp = app
        .post_json(
            "/api/contact",
            r#"{"name":"Jo","email":"jo@x.com","subject":"Work","message":"Hi"}"#,
        )
        .await;

    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(app.mailer.sent()[0].subject, "Work");
}

#[tokio::test]
async fn test_contact_missing_fields_rejected_without_sending() {
    let app = TestApp::new();

    for body in [
        r#"{"name":"","email":"a@b.c","message":"x"}"#,
        r#"{"name":"Jo","message":"x"}"#,
        r#"{"name":"Jo","email":"a@b.c","message":""}"#,
        "{}",
    ] {
        let resp = app.post_json("/api/contact", body).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST, "body: {body}");
        assert_eq!(
            body_json(resp).await,
            json!({"error": "Missing required fields"})
        );
    }

    assert!(app.mailer.sent().is_empty());
}

#[tokio::test]
async fn test_contact_whitespace_fields_are_forwarded_unaltered() {
    let app = TestApp::new();

    let resp = app
        .post_json(
            "/api/contact",
            r#"{"name":" ","email":"jo@x.com","message":"  indented\n"}"#,
        )
        .await;

    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(body_json(resp).await, json!({"success": true}));

    let sent = app.mailer.sent();
    assert_eq!(sent.len(), 1);
    assert!(sent[0].html.contains("  indented<br/>"));
}

#[tokio::test]
async fn test_contact_accepts_json_without_content_type() {
    let app = TestApp::new();
    let body = r#"{"name":"Jo","email":"jo@x.com","message":"Hi"}"#;

    let untyped = Request::post("/api/contact").body(Body::from(body)).unwrap();
    let resp = app.request(untyped).await;
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(body_json(resp).await, json!({"success": true}));

    let text = Request::post("/api/contact")
        .header(header::CONTENT_TYPE, "text/plain;charset=UTF-8")
        .body(Body::from(body))
        .unwrap();
    let resp = app.request(text).await;
    assert_eq!(resp.status(), StatusCode::OK);

    assert_eq!(app.mailer.sent().len(), 2);
}

#[tokio::test]
async fn test_contact_provider_failure() {
    let app = TestApp::with_mailer(MockMailer::failing());

    let resp = app
        .post_json(
            "/api/contact",
            r#"{"name":"Jo","email":"jo@x.com","message":"Hi"}"#,
        )
        .await;

    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body_json(resp).await, json!({"error": "Failed to send email"}));
    assert_eq!(app.mailer.sent().len(), 1);
}

#[tokio::test]
async fn test_contact_malformed_body() {
    let app = TestApp::new();

    let resp = app.post_json("/api/contact", "{not json").await;

    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body_json(resp).await, json!({"error": "Server error"}));
    assert!(app.mailer.sent().is_empty());
}

#[tokio::test]
async fn test_contact_markup_is_escaped_in_email() {
    let app = TestApp::new();

    let resp = app
        .post_json(
            "/api/contact",
            r#"{"name":"<script>alert(1)</script>","email":"jo@x.com","message":"line one\nline two"}"#,
        )
        .await;

    assert_eq!(resp.status(), StatusCode::OK);
    let html = &app.mailer.sent()[0].html;
    assert!(!html.contains("<script>"));
    assert!(html.contains("line one<br/>"));
}

#[tokio::test]
async fn test_contact_form_post_renders_notice() {
    let app = TestApp::new();

    let request = Request::post("/contact")
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
        .body(Body::from("name=Jo&email=jo%40x.com&subject=&message=Hi"))
        .unwrap();
    let resp = app.request(request).await;

    assert_eq!(resp.status(), StatusCode::OK);
    let html = body_text(resp).await;
    assert!(html.contains("Thanks! Your message has been sent."));
    assert_eq!(app.mailer.sent().len(), 1);
}

#[tokio::test]
async fn test_contact_form_post_keeps_values_on_error() {
    let app = TestApp::new();

    let request = Request::post("/contact")
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
        .body(Body::from("name=Jo&email=&subject=Hello&message=Hi"))
        .unwrap();
    let resp = app.request(request).await;

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let html = body_text(resp).await;
    assert!(html.contains("Missing required fields"));
    assert!(html.contains(r#"value="Hello""#));
    assert!(app.mailer.sent().is_empty());
}
