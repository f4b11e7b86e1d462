//! Custom Askama template filters.

#![allow(clippy::unnecessary_wraps)]

use std::fmt::Display;

/// Returns the current year.
///
/// Usage in templates: `{{ ""|current_year }}`
#[askama::filter_fn]
pub fn current_year(_value: impl Display, _env: &dyn askama::Values) -> askama::Result<i32> {
    use chrono::Datelike;
    Ok(chrono::Utc::now().year())
}

/// Returns the content hash for a static asset.
///
/// The hashes are computed at build time from the file contents.
///
/// Usage in templates: `{{ "css"|asset_hash }}`, `{{ "theme"|asset_hash }}`
#[askama::filter_fn]
pub fn asset_hash(name: impl Display, _env: &dyn askama::Values) -> askama::Result<&'static str> {
    Ok(match name.to_string().as_str() {
        "css" => env!("CSS_HASH"),
        "theme" => env!("THEME_JS_HASH"),
        "contact" => env!("CONTACT_JS_HASH"),
        _ => "",
    })
}

/// Returns the uppercase initials of a name.
///
/// Usage in templates: `{{ owner|initials }}`
#[askama::filter_fn]
pub fn initials(name: impl Display, _env: &dyn askama::Values) -> askama::Result<String> {
    Ok(initials_of(&name.to_string()))
}

fn initials_of(name: &str) -> String {
    name.split_whitespace()
        .filter_map(|word| word.chars().next())
        .flat_map(char::to_uppercase)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initials_of() {
        assert_eq!(initials_of("Amal Maatoug"), "AM");
        assert_eq!(initials_of("  ada   lovelace "), "AL");
        assert_eq!(initials_of(""), "");
    }
}
