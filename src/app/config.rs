//! Startup Configuration
//!
//! Window geometry and logging options read from `folio-gui.toml` in the
//! platform config directory. Language and theme are not configurable: the
//! page always opens in Malay with the dark theme.

use crate::constants::{DEFAULT_WINDOW_HEIGHT, DEFAULT_WINDOW_WIDTH, MIN_WINDOW_HEIGHT, MIN_WINDOW_WIDTH};
use crate::error::Result;
use crate::helpers::get_or_create_config_dir;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use tracing::{error, info};

const CONFIG_FILE_NAME: &str = "folio-gui.toml";

fn get_config_path() -> Result<PathBuf> {
    let config_dir = get_or_create_config_dir()?;
    let path = config_dir.join(CONFIG_FILE_NAME);
    if !path.exists() {
        std::fs::write(&path, "")?;
    }
    Ok(path)
}

/// Startup options
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FolioConfig {
    /// Initial window width in pixels
    pub window_width: f32,
    /// Initial window height in pixels
    pub window_height: f32,
    /// Default tracing directive, overridden by `RUST_LOG`
    pub log_level: String,
    /// Also write a daily-rotated log file to the data directory
    pub log_to_file: bool,
}

impl Default for FolioConfig {
    fn default() -> Self {
        Self {
            window_width: DEFAULT_WINDOW_WIDTH,
            window_height: DEFAULT_WINDOW_HEIGHT,
            log_level: "info".to_string(),
            log_to_file: false,
        }
    }
}

impl FolioConfig {
    /// Load the config file, creating an empty one on first run
    pub fn try_load() -> Result<Self> {
        let path = get_config_path()?;
        info!(path = ?path, "Loading config file");
        let value = std::fs::read_to_string(&path)?;
        Self::parse(&value).inspect_err(|e| {
            error!(error = %e, path = ?path, "Failed to parse config file");
        })
    }

    /// Load the config file, falling back to defaults on any error
    pub fn load_or_default() -> Self {
        Self::try_load().unwrap_or_else(|e| {
            tracing::warn!(error = %e, "Using default configuration");
            Self::default()
        })
    }

    /// Parse config text; blank text yields the defaults
    pub fn parse(value: &str) -> Result<Self> {
        if value.trim().is_empty() {
            return Ok(Self::default());
        }
        let config: Self = toml::from_str(value)?;
        Ok(config.clamped())
    }

    /// Keep the window no smaller than the minimum layout
    fn clamped(mut self) -> Self {
        self.window_width = self.window_width.max(MIN_WINDOW_WIDTH);
        self.window_height = self.window_height.max(MIN_WINDOW_HEIGHT);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_is_default() {
        assert_eq!(FolioConfig::parse("").ok(), Some(FolioConfig::default()));
        assert_eq!(FolioConfig::parse("  \n").ok(), Some(FolioConfig::default()));
    }

    #[test]
    fn test_partial_file_keeps_defaults() {
        let config = FolioConfig::parse("log_level = \"debug\"\n").ok();
        let expected = FolioConfig {
            log_level: "debug".to_string(),
            ..FolioConfig::default()
        };
        assert_eq!(config, Some(expected));
    }

    #[test]
    fn test_window_is_clamped() {
        let config = FolioConfig::parse("window_width = 10.0\nwindow_height = 20.0\n").ok();
        let config = config.unwrap_or_default();
        assert_eq!(config.window_width, MIN_WINDOW_WIDTH);
        assert_eq!(config.window_height, MIN_WINDOW_HEIGHT);
    }

    #[test]
    fn test_invalid_toml_is_error() {
        assert!(FolioConfig::parse("window_width = \"wide\"").is_err());
        assert!(FolioConfig::parse("[[[").is_err());
    }
}
