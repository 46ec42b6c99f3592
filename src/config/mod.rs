// SPDX-License-Identifier: MPL-2.0
//! This module handles the site's persisted preferences, including loading and
//! saving them to a `settings.toml` file.
//!
//! The file stores the last chosen display language and color theme. Both
//! fields are optional: a missing or malformed value simply means "no stored
//! preference" and the resolution priority falls through to the next source.
//!
//! # Path Resolution
//!
//! The settings file location is resolved in priority order:
//! 1. Explicit path passed to `load_from_path`/`save_to_path` (for tests)
//! 2. `FOLIO_CONFIG_DIR` environment variable (if set and non-empty)
//! 3. Platform config directory via the `dirs` crate

use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "settings.toml";
const APP_NAME: &str = "Folio";

/// Environment variable to override the config directory.
pub const ENV_CONFIG_DIR: &str = "FOLIO_CONFIG_DIR";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Last chosen display language (`"es"` or `"en"`).
    #[serde(default)]
    pub language: Option<String>,
    /// Last chosen color theme (`"light"` or `"dark"`).
    #[serde(default)]
    pub theme: Option<String>,
}

/// Returns the config directory, honoring the `FOLIO_CONFIG_DIR` override.
pub fn get_config_dir() -> Option<PathBuf> {
    if let Ok(env_path) = std::env::var(ENV_CONFIG_DIR) {
        if !env_path.is_empty() {
            return Some(PathBuf::from(env_path));
        }
    }
    dirs::config_dir().map(|mut path| {
        path.push(APP_NAME);
        path
    })
}

/// Returns the full path of the settings file inside `dir`.
pub fn settings_path(dir: &Path) -> PathBuf {
    dir.join(CONFIG_FILE)
}

pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    Ok(toml::from_str(&content).unwrap_or_default())
}

pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config)?;
    fs::write(path, content)?;
    Ok(())
}
