use serde::Deserialize;
use std::env;
use std::fs;
use std::path::PathBuf;

use crate::core::policy::DEFAULT_HOURS_PER_DAY;
use crate::errors::{AppError, AppResult};

#[derive(Debug, Deserialize)]
pub struct Config {
    /// Daily hour quota used by the balance policy.
    #[serde(default = "default_hours_per_day")]
    pub hours_per_day: i64,
    /// Default report language; the CLI `--lang` flag wins.
    #[serde(default)]
    pub language: Option<String>,
}

fn default_hours_per_day() -> i64 {
    DEFAULT_HOURS_PER_DAY
}

impl Default for Config {
    fn default() -> Self {
        Self {
            hours_per_day: default_hours_per_day(),
            language: None,
        }
    }
}

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        if cfg!(target_os = "windows") {
            let appdata = env::var("APPDATA").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(appdata).join("tracksheet")
        } else {
            let home = env::var("HOME").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(home).join(".tracksheet")
        }
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("tracksheet.conf")
    }

    /// Load configuration from file, or return defaults if not found
    pub fn load() -> AppResult<Self> {
        let path = Self::config_file();

        if path.exists() {
            let content = fs::read_to_string(&path)?;
            serde_yaml::from_str(&content)
                .map_err(|e| AppError::Config(format!("Failed to parse {}: {}", path.display(), e)))
        } else {
            Ok(Self::default())
        }
    }
}
