use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{DevTagsError, Result};

/// Configuration for git-devtags.
///
/// Every field has a default reproducing the standard behavior, so running
/// without a config file is the common case.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct Config {
    /// Remote that tag deletions are also pushed to.
    #[serde(default = "default_remote")]
    pub remote: String,

    /// How many of the newest official releases keep their dev tags.
    #[serde(default = "default_keep_releases")]
    pub keep_releases: usize,
}

fn default_remote() -> String {
    "origin".to_string()
}

fn default_keep_releases() -> usize {
    2
}

impl Default for Config {
    fn default() -> Self {
        Config {
            remote: default_remote(),
            keep_releases: default_keep_releases(),
        }
    }
}

impl Config {
    fn validate(self) -> Result<Self> {
        if self.keep_releases == 0 {
            return Err(DevTagsError::config("keep_releases must be at least 1"));
        }
        if self.remote.is_empty() {
            return Err(DevTagsError::config("remote must not be empty"));
        }
        Ok(self)
    }
}

/// Loads configuration from file or returns defaults.
///
/// Attempts to load configuration in the following order:
/// 1. Custom path provided as parameter
/// 2. `devtags.toml` in current directory
/// 3. `.devtags.toml` in the user config directory
/// 4. Default configuration if no file found
///
/// # Arguments
/// * `config_path` - Optional path to custom configuration file
///
/// # Returns
/// * `Ok(Config)` - Loaded or default configuration
/// * `Err` - If a file exists but cannot be read, parsed, or validated
pub fn load_config(config_path: Option<&str>) -> Result<Config> {
    let config_str = if let Some(path) = config_path {
        fs::read_to_string(path)?
    } else if Path::new("./devtags.toml").exists() {
        fs::read_to_string("./devtags.toml")?
    } else if let Some(config_dir) = dirs::config_dir() {
        let config_path = config_dir.join(".devtags.toml");
        if config_path.exists() {
            fs::read_to_string(config_path)?
        } else {
            return Ok(Config::default());
        }
    } else {
        return Ok(Config::default());
    };

    let config: Config = toml::from_str(&config_str)
        .map_err(|e| DevTagsError::config(format!("invalid config file: {}", e)))?;
    config.validate()
}
