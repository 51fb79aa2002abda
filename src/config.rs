//! Application configuration.
//!
//! Loaded from a TOML file in the platform config directory when present,
//! with an environment-variable override for the data path. Defaults are
//! usable without any file on disk.

use std::path::PathBuf;

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

/// Environment variable overriding the workout data file path.
pub const DATA_PATH_ENV: &str = "TRAINLOAD_DATA";

/// Server configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Path to the JSON workout log.
    pub data_path: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_path: default_data_path(),
        }
    }
}

impl Config {
    /// Load configuration: config file if present, then environment override.
    pub fn load() -> Self {
        let mut config = Self::from_config_file().unwrap_or_default();

        if let Ok(path) = std::env::var(DATA_PATH_ENV) {
            if !path.is_empty() {
                config.data_path = PathBuf::from(path);
            }
        }

        config
    }

    fn from_config_file() -> Option<Self> {
        let path = config_file_path()?;
        let data = std::fs::read_to_string(&path).ok()?;
        match toml::from_str(&data) {
            Ok(config) => {
                tracing::info!(path = %path.display(), "loaded config file");
                Some(config)
            }
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "ignoring malformed config file");
                None
            }
        }
    }
}

/// Path of the optional TOML config file.
pub fn config_file_path() -> Option<PathBuf> {
    ProjectDirs::from("com", "providence-it", "trainload")
        .map(|dirs| dirs.config_dir().join("config.toml"))
}

fn default_data_path() -> PathBuf {
    ProjectDirs::from("com", "providence-it", "trainload")
        .map(|dirs| dirs.data_dir().join("workouts.json"))
        .unwrap_or_else(|| PathBuf::from("workouts.json"))
}
