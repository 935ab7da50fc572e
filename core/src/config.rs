//! User settings.
//!
//! Read from `config.json` in `$SAFETY_HOME` if set, otherwise `~/.safety/`.
//! A missing file means defaults; every field is optional.

use log::debug;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

pub const CONFIG_FILE_NAME: &str = "config.json";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Could not determine home directory")]
    Home,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Pause before the chat assistant replies.
    pub chat_delay_ms: u64,
    /// Pause before a risk assessment is shown.
    pub assess_delay_ms: u64,
    /// How many control measures to display. 0 shows all.
    pub max_remediations: usize,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            chat_delay_ms: 1000,
            assess_delay_ms: 1500,
            max_remediations: 4,
        }
    }
}

/// Return the settings directory.
///
/// Uses `$SAFETY_HOME` if set, otherwise `~/.safety/`.
pub fn get_config_root() -> Result<PathBuf, ConfigError> {
    if let Ok(safety_home) = std::env::var("SAFETY_HOME") {
        return Ok(PathBuf::from(safety_home));
    }
    let home = dirs::home_dir().ok_or(ConfigError::Home)?;
    Ok(home.join(".safety"))
}

pub fn load_settings() -> Result<Settings, ConfigError> {
    let root = get_config_root()?;
    load_settings_from(&root.join(CONFIG_FILE_NAME))
}

pub fn load_settings_from(path: &Path) -> Result<Settings, ConfigError> {
    if !path.exists() {
        debug!("[load_settings] {} not found, using defaults", path.display());
        return Ok(Settings::default());
    }
    let content = fs::read_to_string(path)?;
    let settings: Settings = serde_json::from_str(&content)?;
    debug!("[load_settings] loaded {}", path.display());
    Ok(settings)
}

/// Write settings (atomic: write tmp + rename).
pub fn save_settings_to(path: &Path, settings: &Settings) -> Result<(), ConfigError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let tmp_path = path.with_extension("json.tmp");
    fs::write(&tmp_path, serde_json::to_string_pretty(settings)?)?;
    fs::rename(&tmp_path, path)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let settings = load_settings_from(&dir.path().join(CONFIG_FILE_NAME)).unwrap();
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE_NAME);
        fs::write(&path, r#"{"max_remediations": 3}"#).unwrap();

        let settings = load_settings_from(&path).unwrap();
        assert_eq!(settings.max_remediations, 3);
        assert_eq!(settings.chat_delay_ms, 1000);
        assert_eq!(settings.assess_delay_ms, 1500);
    }

    #[test]
    fn test_malformed_file_is_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE_NAME);
        fs::write(&path, "{not json").unwrap();

        assert!(matches!(load_settings_from(&path), Err(ConfigError::Json(_))));
    }

    #[test]
    fn test_save_then_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join(CONFIG_FILE_NAME);
        let settings = Settings {
            chat_delay_ms: 0,
            assess_delay_ms: 250,
            max_remediations: 0,
        };

        save_settings_to(&path, &settings).unwrap();
        assert_eq!(load_settings_from(&path).unwrap(), settings);
        assert!(!path.with_extension("json.tmp").exists());
    }
}
