//! Theme state manager.
//!
//! Holds one [`ThemePreference`] for the lifetime of a page view, resolves
//! it from a persisted store (or the client's system color-scheme signal)
//! on first read, and writes every change straight back to the store.
//!
//! Persistence is best-effort. Store failures are logged at debug level and
//! otherwise ignored; the in-memory value always reflects the caller's
//! last choice.
//!
//! ```
//! use portfolio_core::{MemoryStore, ThemeManager, ThemePreference};
//!
//! let mut manager = ThemeManager::new(MemoryStore::default());
//! assert_eq!(manager.preference(), ThemePreference::Light);
//!
//! manager.toggle();
//! assert_eq!(manager.preference(), ThemePreference::Dark);
//! assert_eq!(manager.display_class(), "dark");
//! ```

use std::collections::HashMap;

use crate::types::ThemePreference;

/// Key the preference is persisted under.
pub const THEME_KEY: &str = "theme";

/// Errors reported by a [`PreferenceStore`].
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// The store cannot be read or written right now.
    #[error("preference store unavailable: {0}")]
    Unavailable(String),
}

/// A per-device key-value store that outlives a single page view.
pub trait PreferenceStore {
    /// Read the value stored under `key`, if any.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] if the store cannot be read.
    fn load(&self, key: &str) -> Result<Option<String>, StoreError>;

    /// Store `value` under `key`, replacing any previous value.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] if the store cannot be written.
    fn save(&mut self, key: &str, value: &str) -> Result<(), StoreError>;
}

/// The host environment's color-scheme signal.
pub trait ColorSchemeSignal {
    /// `Some(true)` if the system prefers dark, `Some(false)` for light,
    /// `None` when the signal is unavailable.
    fn prefers_dark(&self) -> Option<bool>;
}

/// No signal available.
impl ColorSchemeSignal for () {
    fn prefers_dark(&self) -> Option<bool> {
        None
    }
}

impl ColorSchemeSignal for Option<bool> {
    fn prefers_dark(&self) -> Option<bool> {
        *self
    }
}

/// In-memory [`PreferenceStore`].
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    values: HashMap<String, String>,
}

impl MemoryStore {
    /// Raw stored value for `key`.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(String::as_str)
    }
}

impl PreferenceStore for MemoryStore {
    fn load(&self, key: &str) -> Result<Option<String>, StoreError> {
        Ok(self.values.get(key).cloned())
    }

    fn save(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        self.values.insert(key.to_owned(), value.to_owned());
        Ok(())
    }
}

/// Theme state for one page view.
///
/// Generic over the persisted store `S` and the system signal `C`.
#[derive(Debug)]
pub struct ThemeManager<S, C = ()> {
    store: S,
    signal: C,
    current: Option<ThemePreference>,
}

impl<S: PreferenceStore> ThemeManager<S> {
    /// Manager with no system color-scheme signal.
    pub const fn new(store: S) -> Self {
        Self::with_signal(store, ())
    }
}

impl<S: PreferenceStore, C: ColorSchemeSignal> ThemeManager<S, C> {
    pub const fn with_signal(store: S, signal: C) -> Self {
        Self {
            store,
            signal,
            current: None,
        }
    }

    /// Current preference.
    ///
    /// The first call resolves, in order: the persisted value, the system
    /// signal, then [`ThemePreference::Light`]. The result is cached.
    pub fn preference(&mut self) -> ThemePreference {
        if let Some(current) = self.current {
            return current;
        }
        let resolved = self
            .persisted()
            .or_else(|| self.signal.prefers_dark().map(ThemePreference::from))
            .unwrap_or_default();
        self.current = Some(resolved);
        resolved
    }

    /// Set the preference and persist it immediately.
    pub fn set_preference(&mut self, value: ThemePreference) {
        self.current = Some(value);
        if let Err(e) = self.store.save(THEME_KEY, value.as_str()) {
            tracing::debug!(error = %e, theme = %value, "Failed to persist theme preference");
        }
    }

    /// Switch to the opposite preference. Returns the new value.
    pub fn toggle(&mut self) -> ThemePreference {
        let next = self.preference().opposite();
        self.set_preference(next);
        next
    }

    /// Class for the document root reflecting the current preference.
    pub fn display_class(&mut self) -> &'static str {
        self.preference().css_class()
    }

    /// Borrow the underlying store.
    pub const fn store(&self) -> &S {
        &self.store
    }

    /// Consume the manager, returning the store with any pending writes.
    pub fn into_store(self) -> S {
        self.store
    }

    fn persisted(&self) -> Option<ThemePreference> {
        match self.store.load(THEME_KEY) {
            Ok(Some(raw)) => raw.parse().ok(),
            Ok(None) => None,
            Err(e) => {
                tracing::debug!(error = %e, "Failed to read theme preference");
                None
            }
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    /// Store whose every operation fails.
    struct BrokenStore;

    impl PreferenceStore for BrokenStore {
        fn load(&self, _key: &str) -> Result<Option<String>, StoreError> {
            Err(StoreError::Unavailable("quota exceeded".to_string()))
        }

        fn save(&mut self, _key: &str, _value: &str) -> Result<(), StoreError> {
            Err(StoreError::Unavailable("quota exceeded".to_string()))
        }
    }

    fn store_with(value: &str) -> MemoryStore {
        let mut store = MemoryStore::default();
        store.save(THEME_KEY, value).unwrap();
        store
    }

    #[test]
    fn test_defaults_to_light() {
        let mut manager = ThemeManager::new(MemoryStore::default());
        assert_eq!(manager.preference(), ThemePreference::Light);
    }

    #[test]
    fn test_falls_back_to_system_signal() {
        let mut manager = ThemeManager::with_signal(MemoryStore::default(), Some(true));
        assert_eq!(manager.preference(), ThemePreference::Dark);
    }

    #[test]
    fn test_persisted_value_beats_system_signal() {
        let mut manager = ThemeManager::with_signal(store_with("light"), Some(true));
        assert_eq!(manager.preference(), ThemePreference::Light);
    }

    #[test]
    fn test_garbage_persisted_value_is_ignored() {
        let mut manager = ThemeManager::with_signal(store_with("purple"), Some(true));
        assert_eq!(manager.preference(), ThemePreference::Dark);
    }

    #[test]
    fn test_set_preference_writes_through() {
        let mut manager = ThemeManager::new(MemoryStore::default());
        manager.set_preference(ThemePreference::Dark);
        assert_eq!(manager.store().get(THEME_KEY), Some("dark"));
        assert_eq!(manager.display_class(), "dark");
    }

    #[test]
    fn test_toggle_twice_restores_original() {
        let mut manager = ThemeManager::new(store_with("dark"));
        let original = manager.preference();

        assert_eq!(manager.toggle(), ThemePreference::Light);
        assert_eq!(manager.store().get(THEME_KEY), Some("light"));

        assert_eq!(manager.toggle(), original);
        assert_eq!(manager.preference(), original);
        assert_eq!(manager.store().get(THEME_KEY), Some("dark"));
    }

    #[test]
    fn test_set_then_fresh_load_round_trip() {
        let mut manager = ThemeManager::new(MemoryStore::default());
        manager.set_preference(ThemePreference::Dark);

        let mut reloaded = ThemeManager::new(manager.into_store());
        assert_eq!(reloaded.preference(), ThemePreference::Dark);
    }

    #[test]
    fn test_store_failures_are_swallowed() {
        let mut manager = ThemeManager::with_signal(BrokenStore, Some(true));
        assert_eq!(manager.preference(), ThemePreference::Dark);
        assert_eq!(manager.toggle(), ThemePreference::Light);
        assert_eq!(manager.preference(), ThemePreference::Light);
    }
}
