//! Configuration management for weighcheck
//!
//! Config stored at: ~/.config/weighcheck/config.json

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::debug;
use weighcheck_domain::service::LimitTable;
use weighcheck_types::{ConfigError, Jurisdiction, OutputFormat, Result};

/// Application configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Jurisdiction used when a request does not name one
    #[serde(default = "default_jurisdiction")]
    pub default_jurisdiction: String,

    /// Default output format (json, table)
    #[serde(default = "default_output_format")]
    pub output_format: OutputFormat,

    /// TOML file with per-state limit overrides
    #[serde(default)]
    pub limits_file: Option<PathBuf>,
}

fn default_jurisdiction() -> String {
    "US".to_string()
}

fn default_output_format() -> OutputFormat {
    OutputFormat::Table
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_jurisdiction: default_jurisdiction(),
            output_format: default_output_format(),
            limits_file: None,
        }
    }
}

impl Config {
    /// Get the config directory path
    pub fn config_dir() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or(ConfigError::NotFound)?
            .join("weighcheck");
        Ok(config_dir)
    }

    /// Get the config file path
    pub fn config_path() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join("config.json"))
    }

    /// Load config from file, or create default
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if path.exists() {
            let content = std::fs::read_to_string(path)?;
            let config: Config = serde_json::from_str(&content)
                .map_err(|e| ConfigError::ParseError(format!("{}: {}", path.display(), e)))?;
            debug!(path = %path.display(), "loaded config");
            Ok(config)
        } else {
            Ok(Config::default())
        }
    }

    /// Save config to file
    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path()?)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        // Ensure directory exists
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)
            .map_err(|e| ConfigError::SaveError(format!("{}: {}", path.display(), e)))?;
        Ok(())
    }

    pub fn jurisdiction(&self) -> Jurisdiction {
        Jurisdiction::from_code(&self.default_jurisdiction)
    }

    /// Point at a new overrides file; rejected if it does not load
    pub fn set_limits_file(&mut self, path: PathBuf) -> Result<()> {
        weighcheck_infra::load_limit_overrides(&path)?;
        self.limits_file = Some(path);
        Ok(())
    }

    /// Built-in limit table with any configured overrides applied
    pub fn limit_table(&self) -> Result<LimitTable> {
        weighcheck_infra::load_limit_table(self.limits_file.as_deref())
    }
}
