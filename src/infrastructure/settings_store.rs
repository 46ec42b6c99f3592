// SPDX-License-Identifier: MPL-2.0
//! Settings-file preference store.
//!
//! [`SettingsStore`] adapts the `settings.toml` preference file (see
//! [`crate::config`]) to the [`PreferenceStore`] port. The file plays the
//! role browser local storage plays on the live site: a durable key-value
//! store surviving restarts within the same profile.
//!
//! Writes are fire-and-forget. A failed save is logged and swallowed so a
//! read-only config directory never breaks preference switching.

use crate::application::port::PreferenceStore;
use crate::config::{self, Config};
use crate::error::Result;
use std::cell::RefCell;
use std::path::PathBuf;
use tracing::warn;

/// [`PreferenceStore`] backed by the `settings.toml` file.
#[derive(Debug)]
pub struct SettingsStore {
    path: PathBuf,
    cached: RefCell<Config>,
}

impl SettingsStore {
    /// Opens the store at the default settings path, or inside
    /// `dir_override` when given (CLI `--config-dir`).
    ///
    /// # Errors
    ///
    /// Returns an error when no config directory can be determined.
    pub fn open(dir_override: Option<PathBuf>) -> Result<Self> {
        let dir = dir_override.or_else(config::get_config_dir).ok_or_else(|| {
            crate::error::Error::Config("no config directory available".to_string())
        })?;
        Ok(Self::from_path(config::settings_path(&dir)))
    }

    /// Opens the store at an explicit settings file path.
    ///
    /// A missing or malformed file yields an empty config, matching the
    /// "malformed persisted value is treated as absent" policy.
    #[must_use]
    pub fn from_path(path: PathBuf) -> Self {
        let cached = config::load_from_path(&path).unwrap_or_default();
        Self {
            path,
            cached: RefCell::new(cached),
        }
    }
}

impl PreferenceStore for SettingsStore {
    fn get(&self, key: &str) -> Option<String> {
        let cached = self.cached.borrow();
        match key {
            "lang" => cached.language.clone(),
            "theme" => cached.theme.clone(),
            _ => None,
        }
    }

    fn set(&self, key: &str, value: &str) {
        {
            let mut cached = self.cached.borrow_mut();
            match key {
                "lang" => cached.language = Some(value.to_string()),
                "theme" => cached.theme = Some(value.to_string()),
                _ => {
                    warn!("SettingsStore::set: unknown preference key {key:?}");
                    return;
                }
            }
        }
        if let Err(err) = config::save_to_path(&self.cached.borrow(), &self.path) {
            warn!("SettingsStore::set: failed to persist {key}: {err}");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn set_persists_to_the_settings_file() {
        let dir = tempdir().expect("failed to create temp dir");
        let path = dir.path().join("settings.toml");

        let store = SettingsStore::from_path(path.clone());
        store.set("lang", "en");
        store.set("theme", "dark");

        let reloaded = SettingsStore::from_path(path);
        assert_eq!(reloaded.get("lang").as_deref(), Some("en"));
        assert_eq!(reloaded.get("theme").as_deref(), Some("dark"));
    }

    #[test]
    fn missing_file_reads_as_empty() {
        let dir = tempdir().expect("failed to create temp dir");
        let store = SettingsStore::from_path(dir.path().join("settings.toml"));
        assert_eq!(store.get("lang"), None);
        assert_eq!(store.get("theme"), None);
    }

    #[test]
    fn unknown_key_is_ignored() {
        let dir = tempdir().expect("failed to create temp dir");
        let path = dir.path().join("settings.toml");

        let store = SettingsStore::from_path(path.clone());
        store.set("zoom", "200");

        assert_eq!(store.get("zoom"), None);
        assert!(!path.exists(), "unknown key must not create the file");
    }

    #[test]
    fn malformed_file_is_treated_as_absent() {
        let dir = tempdir().expect("failed to create temp dir");
        let path = dir.path().join("settings.toml");
        std::fs::write(&path, "not = valid = toml").expect("failed to write file");

        let store = SettingsStore::from_path(path);
        assert_eq!(store.get("lang"), None);
    }
}
