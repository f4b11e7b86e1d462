//! Portfolio Core - Shared types library.
//!
//! This crate provides the domain types used by the portfolio site:
//! - `site` - Public-facing pages and the contact endpoint
//! - `integration-tests` - End-to-end HTTP tests
//!
//! # Architecture
//!
//! The core crate contains only types and traits - no I/O, no HTTP
//! clients. Storage for the theme preference is reached through the
//! [`theme::PreferenceStore`] trait so the manager can run over a cookie
//! jar, an in-memory map, or anything else.
//!
//! # Modules
//!
//! - [`types`] - Theme preference, contact message, and email address types
//! - [`theme`] - Theme state manager with pluggable persistence

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod theme;
pub mod types;

pub use theme::{ColorSchemeSignal, MemoryStore, PreferenceStore, StoreError, ThemeManager};
pub use types::{
    ContactError, ContactMessage, Email, EmailError, ParseThemeError, ThemePreference, ValidContact,
};
