//! Theme preference plumbing for HTTP requests.
//!
//! The visitor's preference is persisted in a long-lived `theme` cookie and
//! falls back to the `Sec-CH-Prefers-Color-Scheme` client hint. Handlers
//! take the [`Theme`] extractor to get the resolved preference before any
//! template renders, or build a [`RequestThemeManager`] to change it.

use std::convert::Infallible;

use axum::{
    extract::{FromRef, FromRequestParts},
    http::{HeaderMap, HeaderName, request::Parts},
};
use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use portfolio_core::{
    ColorSchemeSignal, PreferenceStore, StoreError, ThemeManager, ThemePreference,
};

use crate::state::AppState;

/// Client hint carrying the system color scheme.
pub const PREFERS_COLOR_SCHEME: HeaderName =
    HeaderName::from_static("sec-ch-prefers-color-scheme");

/// How long the theme cookie lives.
const COOKIE_MAX_AGE_DAYS: i64 = 365;

/// [`PreferenceStore`] over the request's cookie jar.
///
/// Writes replace the `theme` cookie in the jar; the handler returns the
/// jar so the browser stores it.
#[derive(Debug, Clone, Default)]
pub struct CookieStore {
    jar: CookieJar,
    secure: bool,
}

impl CookieStore {
    #[must_use]
    pub const fn new(jar: CookieJar, secure: bool) -> Self {
        Self { jar, secure }
    }

    /// The jar including any cookies written through this store.
    #[must_use]
    pub fn into_jar(self) -> CookieJar {
        self.jar
    }
}

impl PreferenceStore for CookieStore {
    fn load(&self, key: &str) -> Result<Option<String>, StoreError> {
        Ok(self.jar.get(key).map(|c| c.value().to_owned()))
    }

    fn save(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        let cookie = Cookie::build((key.to_owned(), value.to_owned()))
            .path("/")
            .same_site(SameSite::Lax)
            .secure(self.secure)
            .max_age(time::Duration::days(COOKIE_MAX_AGE_DAYS));

        self.jar = std::mem::take(&mut self.jar).add(cookie);
        Ok(())
    }
}

/// System color scheme as reported by the client hint header.
#[derive(Debug, Clone, Copy, Default)]
pub struct ClientHint(Option<ThemePreference>);

impl ClientHint {
    #[must_use]
    pub fn from_headers(headers: &HeaderMap) -> Self {
        let hint = headers
            .get(&PREFERS_COLOR_SCHEME)
            .and_then(|v| v.to_str().ok())
            .and_then(|v| v.parse().ok());
        Self(hint)
    }
}

impl ColorSchemeSignal for ClientHint {
    fn prefers_dark(&self) -> Option<bool> {
        self.0.map(ThemePreference::is_dark)
    }
}

/// Theme manager scoped to one request.
pub type RequestThemeManager = ThemeManager<CookieStore, ClientHint>;

/// Build a theme manager from request headers.
#[must_use]
pub fn theme_manager(headers: &HeaderMap, secure: bool) -> RequestThemeManager {
    let store = CookieStore::new(CookieJar::from_headers(headers), secure);
    ThemeManager::with_signal(store, ClientHint::from_headers(headers))
}

/// The resolved theme preference for the current request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme(pub ThemePreference);

impl<S> FromRequestParts<S> for Theme
where
    AppState: FromRef<S>,
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let secure = AppState::from_ref(state).config().secure_cookies();
        Ok(Self(theme_manager(&parts.headers, secure).preference()))
    }
}
