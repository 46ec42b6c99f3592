// SPDX-License-Identifier: MPL-2.0
//! Infrastructure layer adapters.
//!
//! This module contains concrete implementations of the port traits defined
//! in `application::port`, wrapping the settings file and the OS color
//! scheme probe.
//!
//! # Available Adapters
//!
//! - [`settings_store`]: settings.toml persistence (implements [`PreferenceStore`])
//! - [`system_scheme`]: OS dark mode detection via `dark-light` (implements [`SchemeDetector`])
//!
//! [`PreferenceStore`]: crate::application::port::PreferenceStore
//! [`SchemeDetector`]: crate::application::port::SchemeDetector

pub mod settings_store;
pub mod system_scheme;

// Re-export main types for convenience
pub use settings_store::SettingsStore;
pub use system_scheme::SystemScheme;
