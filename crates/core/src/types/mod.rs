//! Core types for the portfolio site.
//!
//! This module provides type-safe wrappers for common domain concepts.

pub mod contact;
pub mod email;
pub mod theme;

pub use contact::{ContactError, ContactMessage, ValidContact};
pub use email::{Email, EmailError};
pub use theme::{ParseThemeError, ThemePreference};
