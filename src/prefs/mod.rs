// SPDX-License-Identifier: MPL-2.0
//! Preference controllers: the single sources of truth for the active
//! display language and color theme.
//!
//! Each controller is constructed once at the application root with its
//! host capabilities injected, and is handed to consumers through a
//! provider scope. Consumers read a snapshot and request mutation through
//! `set`/`toggle`; they never touch the underlying stores directly.
//! Accessing a controller outside an active provider scope is a
//! programming error and panics immediately.
//!
//! The execution model is single-threaded and event-driven: every
//! operation is synchronous, and a `set`/`toggle` issues its persistence
//! side effects before returning, so storage, URL, and document attributes
//! are never observed out of sync with the in-memory value.

pub mod language;
pub mod theme;

pub use language::{use_language, LanguagePreference, LanguageProvider};
pub use theme::{use_theme, Theme, ThemePreference, ThemeProvider};
