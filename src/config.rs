//! Configuration management for the CLI surface
//!
//! This module provides runtime configuration loading from JSON files with
//! defaults fallback. Only ambient concerns are configurable (where the
//! history log lives, how many entries it keeps); the classifier thresholds
//! are fixed constants and deliberately not exposed here.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::history::DEFAULT_MAX_ENTRIES;

/// Default config file looked up next to the working directory
pub const DEFAULT_CONFIG_FILE: &str = "soundwrench.json";

/// Complete application configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub history: HistoryConfig,
}

/// History log configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HistoryConfig {
    /// Path of the JSON history log
    pub file: PathBuf,
    /// Most recent entries retained
    pub max_entries: usize,
}

impl Default for HistoryConfig {
    fn default() -> Self {
        Self {
            file: PathBuf::from("soundwrench_history.json"),
            max_entries: DEFAULT_MAX_ENTRIES,
        }
    }
}

impl Default for AppConfig {
    /// Default configuration values (fallback if config file not found)
    fn default() -> Self {
        Self {
            history: HistoryConfig::default(),
        }
    }
}

impl AppConfig {
    /// Load configuration from a JSON file
    ///
    /// # Arguments
    /// * `path` - Path to JSON config file
    ///
    /// # Returns
    /// Loaded configuration; if the file doesn't exist or the JSON is
    /// invalid, returns the default config
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Self {
        match fs::read_to_string(&path) {
            Ok(contents) => match serde_json::from_str(&contents) {
                Ok(config) => {
                    log::info!("[Config] Loaded configuration from {:?}", path.as_ref());
                    config
                }
                Err(err) => {
                    log::warn!(
                        "[Config] Failed to parse JSON from {:?}: {}. Using defaults.",
                        path.as_ref(),
                        err
                    );
                    Self::default()
                }
            },
            Err(err) => {
                log::debug!(
                    "[Config] No config file at {:?} ({}). Using defaults.",
                    path.as_ref(),
                    err
                );
                Self::default()
            }
        }
    }

    /// Load configuration from the default location
    pub fn load() -> Self {
        Self::load_from_file(DEFAULT_CONFIG_FILE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert_eq!(
            config.history.file,
            PathBuf::from("soundwrench_history.json")
        );
        assert_eq!(config.history.max_entries, 20);
    }

    #[test]
    fn test_json_roundtrip() {
        let config = AppConfig::default();
        let json = serde_json::to_string_pretty(&config).unwrap();
        let parsed: AppConfig = serde_json::from_str(&json).unwrap();

        assert_eq!(parsed.history.file, config.history.file);
        assert_eq!(parsed.history.max_entries, config.history.max_entries);
    }

    #[test]
    fn test_missing_file_falls_back_to_defaults() {
        let config = AppConfig::load_from_file("definitely/not/a/real/config.json");
        assert_eq!(config.history.max_entries, DEFAULT_MAX_ENTRIES);
    }
}
