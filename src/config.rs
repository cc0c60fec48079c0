// SPDX-License-Identifier: MPL-2.0
//! This module handles the application's configuration, including loading and
//! saving overlay timing preferences to a `settings.toml` file.
//!
//! # Examples
//!
//! ```no_run
//! use iced_alerts::config::{self, Config};
//!
//! // Load existing configuration
//! let mut config = config::load().unwrap_or_default();
//!
//! // Shorten the default toast display time
//! config.toast_duration_ms = Some(1500);
//!
//! // Save the modified configuration
//! config::save(&config).expect("Failed to save config");
//! ```

use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

const CONFIG_FILE: &str = "settings.toml";
const APP_NAME: &str = "IcedAlerts";

pub const DEFAULT_TOAST_DURATION_MS: u64 = 3000;
pub const DEFAULT_ANIMATION_MS: u64 = 300;

#[derive(Debug, Serialize, Deserialize)]
pub struct Config {
    /// How long an auto-hiding toast stays up, in milliseconds.
    #[serde(default)]
    pub toast_duration_ms: Option<u64>,
    /// Length of the in/out animation tween, in milliseconds.
    #[serde(default)]
    pub animation_ms: Option<u64>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            toast_duration_ms: Some(DEFAULT_TOAST_DURATION_MS),
            animation_ms: Some(DEFAULT_ANIMATION_MS),
        }
    }
}

impl Config {
    /// Returns the toast display duration, falling back to the default.
    #[must_use]
    pub fn toast_duration(&self) -> Duration {
        Duration::from_millis(self.toast_duration_ms.unwrap_or(DEFAULT_TOAST_DURATION_MS))
    }

    /// Returns the animation duration, falling back to the default.
    #[must_use]
    pub fn animation(&self) -> Duration {
        Duration::from_millis(self.animation_ms.unwrap_or(DEFAULT_ANIMATION_MS))
    }
}

fn get_default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|mut path| {
        path.push(APP_NAME);
        path.push(CONFIG_FILE);
        path
    })
}

/// Resolves the config file path, honoring an optional directory override
/// from the launcher.
fn resolve_config_path(dir_override: Option<&str>) -> Option<PathBuf> {
    match dir_override {
        Some(dir) => Some(Path::new(dir).join(CONFIG_FILE)),
        None => get_default_config_path(),
    }
}

pub fn load() -> Result<Config> {
    load_with_override(None)
}

/// Loads the configuration from the override directory if given, otherwise
/// from the platform config directory. Missing files yield the defaults.
pub fn load_with_override(dir_override: Option<&str>) -> Result<Config> {
    if let Some(path) = resolve_config_path(dir_override) {
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

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn save_and_load_round_trip_preserves_durations() {
        let config = Config {
            toast_duration_ms: Some(1500),
            animation_ms: Some(200),
        };
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("nested").join("settings.toml");

        save_to_path(&config, &config_path).expect("failed to save config");
        let loaded = load_from_path(&config_path).expect("failed to load config");

        assert_eq!(loaded.toast_duration_ms, config.toast_duration_ms);
        assert_eq!(loaded.animation_ms, config.animation_ms);
    }

    #[test]
    fn load_from_path_returns_default_on_invalid_toml() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");
        fs::write(&config_path, "not = valid = toml").expect("failed to write invalid toml");

        let loaded = load_from_path(&config_path).expect("load should not error");
        assert_eq!(loaded.toast_duration_ms, Some(DEFAULT_TOAST_DURATION_MS));
    }

    #[test]
    fn save_to_path_creates_parent_directories() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("deep").join("path").join("settings.toml");
        let config = Config::default();

        save_to_path(&config, &config_path).expect("save should create directories");
        assert!(config_path.exists());
    }

    #[test]
    fn load_with_override_reads_from_given_directory() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config = Config {
            toast_duration_ms: Some(500),
            animation_ms: None,
        };
        save_to_path(&config, &temp_dir.path().join(CONFIG_FILE)).expect("failed to save");

        let loaded = load_with_override(temp_dir.path().to_str()).expect("load should work");
        assert_eq!(loaded.toast_duration_ms, Some(500));
    }

    #[test]
    fn missing_values_fall_back_to_defaults() {
        let config = Config {
            toast_duration_ms: None,
            animation_ms: None,
        };
        assert_eq!(
            config.toast_duration(),
            Duration::from_millis(DEFAULT_TOAST_DURATION_MS)
        );
        assert_eq!(config.animation(), Duration::from_millis(DEFAULT_ANIMATION_MS));
    }
}
