//! Configuration file support for the calculator.
//!
//! Configuration is loaded from `$XDG_CONFIG_HOME/carbon-footprint/config.toml`.
//! Emission factors are fixed and intentionally not configurable.

use crate::goal::DEFAULT_TARGET_KG_PER_DAY;
use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Application configuration
#[derive(Clone, Debug, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub goal: GoalConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Daily reduction goal
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct GoalConfig {
    #[serde(default = "default_target_kg_per_day")]
    pub target_kg_per_day: f64,
}

impl Default for GoalConfig {
    fn default() -> Self {
        Self {
            target_kg_per_day: default_target_kg_per_day(),
        }
    }
}

/// Log filtering used when RUST_LOG is not set
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

fn default_target_kg_per_day() -> f64 {
    DEFAULT_TARGET_KG_PER_DAY
}

fn default_log_level() -> String {
    crate::logging::DEFAULT_LEVEL.into()
}

impl Config {
    /// Load configuration from the standard config path
    pub fn load() -> Result<Self> {
        match Self::default_config_path() {
            Some(config_path) if config_path.exists() => Self::load_from(&config_path),
            other => {
                tracing::info!("No config file found at {:?}, using defaults", other);
                Ok(Self::default())
            }
        }
    }

    /// Load configuration from a specific path
    pub fn load_from(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&contents)?;
        config.validate()?;
        tracing::info!("Loaded config from {:?}", path);
        Ok(config)
    }

    /// Get the default config file path, if a config directory is known
    pub fn default_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|base| base.join("carbon-footprint").join("config.toml"))
    }

    /// Reject values the calculator cannot compare against
    pub fn validate(&self) -> Result<()> {
        validate_target(self.goal.target_kg_per_day)
    }
}

/// A goal target must be a finite number
pub fn validate_target(target_kg_per_day: f64) -> Result<()> {
    if target_kg_per_day.is_finite() {
        Ok(())
    } else {
        Err(Error::Config(format!(
            "goal target must be a finite number, got {}",
            target_kg_per_day
        )))
    }
}
