// SPDX-License-Identifier: MPL-2.0
//! This module handles the crate's configuration, including loading and saving
//! user preferences to a `settings.toml` file.
//!
//! # Examples
//!
//! ```no_run
//! use iced_primer::config::{self, Config};
//! use std::path::PathBuf;
//!
//! // Load existing configuration
//! let mut config = config::load().unwrap_or_default();
//!
//! // Modify a setting
//! config.language = Some("fr".to_string());
//!
//! // Save the modified configuration
//! config::save(&config).expect("Failed to save config");
//!
//! // To load/save from a specific path (e.g., for testing)
//! let temp_dir = PathBuf::from("./temp_config_dir");
//! std::fs::create_dir_all(&temp_dir).unwrap();
//! let temp_file = temp_dir.join("test_settings.toml");
//! config::save_to_path(&config, &temp_file).expect("Failed to save to path");
//! let loaded_config = config::load_from_path(&temp_file).expect("Failed to load from path");
//! assert_eq!(loaded_config.language, Some("fr".to_string()));
//! std::fs::remove_dir_all(&temp_dir).unwrap();
//! ```

pub mod defaults;

use crate::error::Result;
use crate::ui::snackbar::Timing;
use crate::ui::theming::ThemeMode;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

pub use defaults::*;

const CONFIG_FILE: &str = "settings.toml";
const APP_NAME: &str = "IcedPrimer";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    pub language: Option<String>,
    #[serde(default)]
    pub theme_mode: ThemeMode,
    #[serde(default)]
    pub notifications: NotificationConfig,
    #[serde(default)]
    pub select: SelectConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            language: None,
            theme_mode: ThemeMode::default(),
            notifications: NotificationConfig::default(),
            select: SelectConfig::default(),
        }
    }
}

/// Snackbar timing, in milliseconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NotificationConfig {
    pub enter_delay_ms: u64,
    pub exit_delay_ms: u64,
    /// Used by notifications that do not set their own duration. `0` keeps
    /// them on screen until dismissed.
    pub default_duration_ms: u64,
}

impl Default for NotificationConfig {
    fn default() -> Self {
        Self {
            enter_delay_ms: DEFAULT_ENTER_DELAY_MS,
            exit_delay_ms: DEFAULT_EXIT_DELAY_MS,
            default_duration_ms: DEFAULT_NOTIFICATION_DURATION_MS,
        }
    }
}

impl NotificationConfig {
    /// Converts the persisted values into lifecycle timing, clamping anything
    /// a hand-edited file could push out of range.
    #[must_use]
    pub fn timing(&self) -> Timing {
        let default_duration = match self.default_duration_ms {
            0 => None,
            ms => Some(Duration::from_millis(ms.clamp(
                MIN_NOTIFICATION_DURATION_MS,
                MAX_NOTIFICATION_DURATION_MS,
            ))),
        };

        Timing {
            enter_delay: Duration::from_millis(self.enter_delay_ms.min(MAX_ENTER_DELAY_MS)),
            exit_delay: Duration::from_millis(self.exit_delay_ms.min(MAX_EXIT_DELAY_MS)),
            default_duration,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SelectConfig {
    pub searchable: bool,
}

impl Default for SelectConfig {
    fn default() -> Self {
        Self {
            searchable: DEFAULT_SELECT_SEARCHABLE,
        }
    }
}

fn get_default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|mut path| {
        path.push(APP_NAME);
        path.push(CONFIG_FILE);
        path
    })
}

pub fn load() -> Result<Config> {
    if let Some(path) = get_default_config_path() {
        if path.exists() {
            return load_from_path(&path);
        }
    }
    Ok(Config::default())
}

pub fn save(config: &Config) -> Result<()> {
    if let Some(path) = get_default_config_path() {
        return save_to_path(config, &path);
    }
    Ok(())
}

pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    match toml::from_str(&content) {
        Ok(config) => Ok(config),
        Err(err) => {
            tracing::warn!(path = %path.display(), error = %err, "invalid settings file, using defaults");
            Ok(Config::default())
        }
    }
}

pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config)?;
    fs::write(path, content)?;
    Ok(())
}
