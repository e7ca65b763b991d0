//! Configuration loading and management

use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::domain::BadgeRule;
use crate::source::SimulatorProfile;

/// Name of the config file looked up in a directory.
pub const CONFIG_FILE_NAME: &str = "gamify.toml";

/// Main configuration structure
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Badge rules, evaluated in order
    #[serde(default = "BadgeRule::defaults")]
    pub badges: Vec<BadgeRule>,

    /// Synthetic activity profile
    #[serde(default)]
    pub simulator: SimulatorProfile,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            badges: BadgeRule::defaults(),
            simulator: SimulatorProfile::default(),
        }
    }
}

impl Config {
    /// Load configuration from a file
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        Ok(config)
    }

    /// Load configuration from a directory
    /// Looks for `gamify.toml`; falls back to defaults when absent
    pub fn from_dir(dir: &Path) -> Result<Self> {
        let path = dir.join(CONFIG_FILE_NAME);
        if path.exists() {
            return Self::from_file(&path);
        }

        Ok(Self::with_defaults())
    }

    /// Create a config with sensible defaults
    pub fn with_defaults() -> Self {
        Self::default()
    }
}
