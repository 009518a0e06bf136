//! Application configuration.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::PosegradeResult;

/// Global application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Logging configuration.
    #[serde(default)]
    pub logging: LoggingConfig,

    /// Default report output settings.
    #[serde(default)]
    pub report: ReportDefaults,
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Log level filter (e.g., "info", "debug", "posegrade=debug,warn").
    pub level: String,

    /// Whether to output structured JSON logs.
    pub json: bool,

    /// Optional log file path.
    pub file: Option<PathBuf>,
}

/// Defaults for grade reports written by the CLI.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ReportDefaults {
    /// Pretty-print report JSON.
    pub pretty: bool,

    /// Attach a sequence summary to every report.
    pub include_summary: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            json: false,
            file: None,
        }
    }
}

impl Default for ReportDefaults {
    fn default() -> Self {
        Self {
            pretty: true,
            include_summary: false,
        }
    }
}

impl AppConfig {
    /// Load config from the standard location, falling back to defaults.
    pub fn load() -> Self {
        Self::load_from(&config_file_path())
    }

    /// Load config from an explicit path, falling back to defaults.
    ///
    /// Read and parse failures are logged at warn level, so a subscriber
    /// must already be installed for them to be seen. Binaries that set up
    /// logging from this config use [`AppConfig::try_load_from`] instead.
    pub fn load_from(config_path: &Path) -> Self {
        Self::try_load_from(config_path).unwrap_or_else(|e| {
            tracing::warn!(path = %config_path.display(), error = %e, "Failed to load config, using defaults");
            Self::default()
        })
    }

    /// Load config from the standard location.
    pub fn try_load() -> PosegradeResult<Self> {
        Self::try_load_from(&config_file_path())
    }

    /// Load config from an explicit path. A missing file yields defaults.
    pub fn try_load_from(config_path: &Path) -> PosegradeResult<Self> {
        if !config_path.exists() {
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(config_path)?;
        Ok(serde_json::from_str(&content)?)
    }

    /// Save config to the standard location.
    pub fn save(&self) -> Result<(), std::io::Error> {
        self.save_to(&config_file_path())
    }

    /// Save config to an explicit path.
    pub fn save_to(&self, config_path: &Path) -> Result<(), std::io::Error> {
        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(self).map_err(std::io::Error::other)?;
        std::fs::write(config_path, json)
    }
}

/// Standard config file location.
pub fn config_file_path() -> PathBuf {
    let base = std::env::var("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|_| {
            let home = std::env::var("HOME").unwrap_or_else(|_| "/tmp".to_string());
            PathBuf::from(home).join(".config")
        });
    base.join("posegrade").join("config.json")
}
