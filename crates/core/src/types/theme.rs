//! Light/dark display preference.

use core::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Error returned when a string is neither `"dark"` nor `"light"`.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown theme preference: {0:?}")]
pub struct ParseThemeError(pub String);

/// The visitor's chosen display mode.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemePreference {
    /// Dark backgrounds, light text.
    Dark,
    /// Light backgrounds, dark text.
    #[default]
    Light,
}

impl ThemePreference {
    /// The persisted string form.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Dark => "dark",
            Self::Light => "light",
        }
    }

    /// The other preference.
    #[must_use]
    pub const fn opposite(self) -> Self {
        match self {
            Self::Dark => Self::Light,
            Self::Light => Self::Dark,
        }
    }

    #[must_use]
    pub const fn is_dark(self) -> bool {
        matches!(self, Self::Dark)
    }

    /// Class placed on the document root; styling keys dark rules off it.
    #[must_use]
    pub const fn css_class(self) -> &'static str {
        match self {
            Self::Dark => "dark",
            Self::Light => "",
        }
    }

    /// Accessible label for a control that switches away from this preference.
    #[must_use]
    pub const fn toggle_label(self) -> &'static str {
        match self {
            Self::Dark => "Switch to light mode",
            Self::Light => "Switch to dark mode",
        }
    }
}

impl fmt::Display for ThemePreference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ThemePreference {
    type Err = ParseThemeError;

    /// Accepts `dark`/`light` in any ASCII case. Whitespace and the double
    /// quotes used by structured client-hint headers are ignored.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value = s.trim().trim_matches('"');
        if value.eq_ignore_ascii_case("dark") {
            Ok(Self::Dark)
        } else if value.eq_ignore_ascii_case("light") {
            Ok(Self::Light)
        } else {
            Err(ParseThemeError(s.to_owned()))
        }
    }
}

impl From<bool> for ThemePreference {
    /// `true` means dark.
    fn from(dark: bool) -> Self {
        if dark { Self::Dark } else { Self::Light }
    }
}
