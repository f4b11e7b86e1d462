//! Integration tests for pages, SEO files, and the middleware stack.

#![allow(clippy::unwrap_used)]

use axum::http::{StatusCode, header};
use portfolio_integration_tests::{TestApp, body_text};

#[tokio::test]
async fn test_pages_render() {
    let app = TestApp::new();

    for (path, marker) in [
        ("/", "Software Engineer"),
        ("/about", "Skills &amp; Expertise"),
        ("/projects", "Featured"),
        ("/contact", "Get In Touch"),
    ] {
        let resp = app.get(path, None).await;
        assert_eq!(resp.status(), StatusCode::OK, "path: {path}");
        let html = body_text(resp).await;
        assert!(html.contains(marker), "path: {path}");
        assert!(html.contains(r#"action="/theme/toggle""#), "path: {path}");
    }
}

#[tokio::test]
async fn test_active_nav_link() {
    let app = TestApp::new();

    let html = body_text(app.get("/projects", None).await).await;

    assert!(html.contains(r#"<a href="/projects" class="active" aria-current="page">"#));
    assert!(!html.contains(r#"<a href="/about" class="active""#));
}

#[tokio::test]
async fn test_featured_projects_listed_first() {
    let app = TestApp::new();

    let html = body_text(app.get("/projects", None).await).await;

    let featured = html.find("EchoParrot").unwrap();
    let other = html.find("MatchMate").unwrap();
    assert!(featured < other);
}

#[tokio::test]
async fn test_health() {
    let app = TestApp::new();

    let resp = app.get("/health", None).await;

    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(body_text(resp).await, "ok");
}

#[tokio::test]
async fn test_unknown_path_is_not_found() {
    let app = TestApp::new();

    let resp = app.get("/nope", None).await;

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_robots_and_sitemap() {
    let app = TestApp::new();

    let robots = body_text(app.get("/robots.txt", None).await).await;
    assert!(robots.contains("Sitemap: http://localhost:3000/sitemap.xml"));

    let resp = app.get("/sitemap.xml", None).await;
    assert_eq!(
        resp.headers().get(header::CONTENT_TYPE).unwrap(),
        "application/xml"
    );
    let sitemap = body_text(resp).await;
    for path in ["/about", "/projects", "/contact"] {
        assert!(sitemap.contains(&format!("<loc>http://localhost:3000{path}</loc>")));
    }
}

#[tokio::test]
async fn test_security_and_hint_headers() {
    let app = TestApp::new();

    let resp = app.get("/", None).await;
    let headers = resp.headers();

    assert_eq!(headers.get("x-frame-options").unwrap(), "DENY");
    assert_eq!(headers.get("x-content-type-options").unwrap(), "nosniff");
    assert_eq!(
        headers.get("accept-ch").unwrap(),
        "Sec-CH-Prefers-Color-Scheme"
    );
    assert!(headers.get(header::CONTENT_SECURITY_POLICY).is_some());
    assert!(headers.get("x-request-id").is_some());
}

#[tokio::test]
async fn test_static_stylesheet_served() {
    let app = TestApp::new();

    let resp = app.get("/static/css/main.css", None).await;

    assert_eq!(resp.status(), StatusCode::OK);
    assert!(body_text(resp).await.contains("html.dark"));
}
