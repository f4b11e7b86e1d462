//! Per-request correlation IDs.
//!
//! Each request gets an `x-request-id`, reused from the proxy in front of
//! the site when it sent a sane one. The ID lands on the `http_request`
//! span, the Sentry scope and the response.

use axum::{
    extract::Request,
    http::{HeaderMap, HeaderValue},
    middleware::Next,
    response::Response,
};
use tracing::Span;
use uuid::Uuid;

/// The HTTP header name for request IDs.
pub const REQUEST_ID_HEADER: &str = "x-request-id";

/// Longest upstream request ID accepted verbatim.
const MAX_UPSTREAM_ID_LEN: usize = 128;

/// Upstream ID if usable, otherwise a fresh UUID v4.
///
/// Usable means non-empty, at most 128 bytes, and made only of ASCII
/// letters, digits, `-`, `_` and `.`, so it is safe to log and echo.
fn request_id_from(headers: &HeaderMap) -> String {
    headers
        .get(REQUEST_ID_HEADER)
        .and_then(|h| h.to_str().ok())
        .filter(|id| {
            !id.is_empty()
                && id.len() <= MAX_UPSTREAM_ID_LEN
                && id
                    .bytes()
                    .all(|b| b.is_ascii_alphanumeric() || matches!(b, b'-' | b'_' | b'.'))
        })
        .map_or_else(|| Uuid::new_v4().to_string(), String::from)
}

/// Tag the request and its response with a correlation ID.
pub async fn request_id_middleware(request: Request, next: Next) -> Response {
    let request_id = request_id_from(request.headers());

    Span::current().record("request_id", request_id.as_str());
    sentry::configure_scope(|scope| scope.set_tag("request_id", &request_id));

    let mut response = next.run(request).await;

    if let Ok(value) = HeaderValue::from_str(&request_id) {
        response.headers_mut().insert(REQUEST_ID_HEADER, value);
    }
    response
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn with_id(id: &str) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(REQUEST_ID_HEADER, HeaderValue::from_str(id).unwrap());
        headers
    }

    #[test]
    fn test_upstream_id_reused() {
        assert_eq!(request_id_from(&with_id("cf-8a1b.2c_3")), "cf-8a1b.2c_3");
    }

    #[test]
    fn test_generated_when_missing() {
        let id = request_id_from(&HeaderMap::new());
        assert!(Uuid::parse_str(&id).is_ok());
    }

    #[test]
    fn test_unusable_upstream_id_replaced() {
        for bad in ["", "has space", "new\tline", &"a".repeat(129)] {
            let id = request_id_from(&with_id(bad));
            assert!(Uuid::parse_str(&id).is_ok(), "kept {bad:?}");
        }
    }
}
