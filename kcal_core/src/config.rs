//! Configuration file support for kcal.
//!
//! Configuration is loaded from `$XDG_CONFIG_HOME/kcal/config.toml`.

use crate::expenditure::MetTable;
use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// Application configuration
#[derive(Clone, Debug, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub data: DataConfig,

    #[serde(default)]
    pub profile: ProfileConfig,

    #[serde(default)]
    pub expenditure: ExpenditureConfig,
}

/// Data storage configuration
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct DataConfig {
    #[serde(default = "default_data_dir")]
    pub data_dir: PathBuf,
}

impl Default for DataConfig {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
        }
    }
}

/// Default profile used when a command is given no `--profile`
#[derive(Clone, Debug, Serialize, Deserialize, Default)]
pub struct ProfileConfig {
    #[serde(default)]
    pub path: Option<PathBuf>,
}

/// Extra or replacement MET coefficients, keyed by activity name
#[derive(Clone, Debug, Serialize, Deserialize, Default)]
pub struct ExpenditureConfig {
    #[serde(default)]
    pub coefficients: HashMap<String, f64>,
}

// Default value functions
fn default_data_dir() -> PathBuf {
    let base = dirs::data_local_dir()
        .or_else(|| dirs::home_dir().map(|home| home.join(".local/share")))
        .unwrap_or_else(|| PathBuf::from("."));
    base.join("kcal")
}

impl Config {
    /// Load configuration from the standard config path
    pub fn load() -> Result<Self> {
        let config_path = Self::default_config_path();
        if config_path.exists() {
            Self::load_from(&config_path)
        } else {
            tracing::info!(
                "No config file found at {:?}, using defaults",
                config_path
            );
            Ok(Self::default())
        }
    }

    /// Load and validate configuration from a specific path
    pub fn load_from(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&contents)?;
        config.validate()?;
        tracing::info!("Loaded config from {:?}", path);
        Ok(config)
    }

    /// Get the default config file path
    pub fn default_config_path() -> PathBuf {
        let base = dirs::config_dir()
            .or_else(|| dirs::home_dir().map(|home| home.join(".config")))
            .unwrap_or_else(|| PathBuf::from("."));
        base.join("kcal").join("config.toml")
    }

    /// Check values that TOML alone cannot constrain
    pub fn validate(&self) -> Result<()> {
        for (name, met) in &self.expenditure.coefficients {
            if !met.is_finite() || *met <= 0.0 {
                return Err(Error::Config(format!(
                    "coefficient for '{}' must be a positive number, got {}",
                    name, met
                )));
            }
        }
        Ok(())
    }

    /// Built-in MET table with this config's overrides applied
    pub fn met_table(&self) -> MetTable {
        MetTable::builtin().with_overrides(&self.expenditure.coefficients)
    }
}
