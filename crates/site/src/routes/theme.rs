//! Theme preference route handlers.

use axum::{
    Json,
    extract::State,
    http::{HeaderMap, header},
    response::{IntoResponse, Redirect},
};
use portfolio_core::ThemePreference;
use serde::{Deserialize, Serialize};
use tracing::instrument;
use url::Url;

use crate::middleware::{RequestThemeManager, Theme, theme_manager};
use crate::state::AppState;

/// JSON representation of the preference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThemeBody {
    pub theme: ThemePreference,
}

fn manager_for(state: &AppState, headers: &HeaderMap) -> RequestThemeManager {
    theme_manager(headers, state.config().secure_cookies())
}

/// Current preference.
///
/// GET /api/theme
pub async fn current(Theme(theme): Theme) -> Json<ThemeBody> {
    Json(ThemeBody { theme })
}

/// Set the preference explicitly.
///
/// PUT /api/theme
#[instrument(skip_all)]
pub async fn set(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(body): Json<ThemeBody>,
) -> impl IntoResponse {
    let mut manager = manager_for(&state, &headers);
    manager.set_preference(body.theme);
    let theme = manager.preference();

    (manager.into_store().into_jar(), Json(ThemeBody { theme }))
}

/// Toggle the preference for script-driven buttons.
///
/// POST /api/theme/toggle
#[instrument(skip_all)]
pub async fn toggle_json(State(state): State<AppState>, headers: HeaderMap) -> impl IntoResponse {
    let mut manager = manager_for(&state, &headers);
    let theme = manager.toggle();
    tracing::debug!(%theme, "Theme toggled");

    (manager.into_store().into_jar(), Json(ThemeBody { theme }))
}

/// Toggle the preference from a plain form button and go back.
///
/// POST /theme/toggle
#[instrument(skip_all)]
pub async fn toggle_redirect(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> impl IntoResponse {
    let mut manager = manager_for(&state, &headers);
    let theme = manager.toggle();
    tracing::debug!(%theme, "Theme toggled");

    let target = return_path(&headers, &state.config().base_url);
    (manager.into_store().into_jar(), Redirect::to(&target))
}

/// Path to send the visitor back to after a toggle.
///
/// Uses the `Referer` when it points at this site (same origin as the base
/// URL, or same host as the request). Anything else goes to `/`, as does a
/// path starting with `//`, which browsers read as another host.
fn return_path(headers: &HeaderMap, base_url: &Url) -> String {
    let Some(referer) = headers
        .get(header::REFERER)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| Url::parse(v).ok())
    else {
        return "/".to_string();
    };

    let request_host = headers.get(header::HOST).and_then(|v| v.to_str().ok());
    let referer_host = referer.host_str().map(|host| match referer.port() {
        Some(port) => format!("{host}:{port}"),
        None => host.to_string(),
    });

    let same_site = referer.origin() == base_url.origin()
        || (request_host.is_some() && request_host == referer_host.as_deref());

    let path = referer.path();
    if !same_site || path.starts_with("//") {
        return "/".to_string();
    }

    match referer.query() {
        Some(query) => format!("{path}?{query}"),
        None => path.to_string(),
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use axum::http::HeaderValue;

    use super::*;

    fn base() -> Url {
        Url::parse("https://portfolio.example.com").unwrap()
    }

    fn headers(referer: Option<&str>, host: Option<&str>) -> HeaderMap {
        let mut map = HeaderMap::new();
        if let Some(referer) = referer {
            map.insert(header::REFERER, HeaderValue::from_str(referer).unwrap());
        }
        if let Some(host) = host {
            map.insert(header::HOST, HeaderValue::from_str(host).unwrap());
        }
        map
    }

    #[test]
    fn test_return_path_same_origin() {
        let map = headers(Some("https://portfolio.example.com/about?x=1"), None);
        assert_eq!(return_path(&map, &base()), "/about?x=1");
    }

    #[test]
    fn test_return_path_matching_host_header() {
        let map = headers(Some("http://127.0.0.1:3000/projects"), Some("127.0.0.1:3000"));
        assert_eq!(return_path(&map, &base()), "/projects");
    }

    #[test]
    fn test_return_path_foreign_referer() {
        let map = headers(Some("https://evil.example.net/phish"), Some("portfolio.example.com"));
        assert_eq!(return_path(&map, &base()), "/");
    }

    #[test]
    fn test_return_path_protocol_relative() {
        let map = headers(Some("http://127.0.0.1:3000//evil.example/x"), Some("127.0.0.1:3000"));
        assert_eq!(return_path(&map, &base()), "/");

        let map = headers(Some("https://portfolio.example.com/\\evil.example/x"), None);
        assert_eq!(return_path(&map, &base()), "/");
    }

    #[test]
    fn test_return_path_missing_referer() {
        assert_eq!(return_path(&HeaderMap::new(), &base()), "/");
    }
}
