use std::fs;
use std::ops::RangeInclusive;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::config::types::Config;

const TICK_RATE_RANGE: RangeInclusive<u64> = 16..=5000;

/// Errors that can occur when loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file '{path}': {source}")]
    ReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config file '{path}': {source}")]
    ParseError {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Config validation failed: {message}")]
    ValidationError { message: String },
}

impl Config {
    /// Returns the path to the configuration file.
    ///
    /// Uses `~/.config/rollcall/config.toml` on Linux, or the platform
    /// equivalent via `dirs::config_dir()`. Falls back to the current
    /// directory if config_dir is unavailable.
    pub fn config_path() -> PathBuf {
        let config_dir = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
        config_dir.join("rollcall").join("config.toml")
    }

    /// Default log file for the terminal UI.
    pub fn default_log_path() -> PathBuf {
        let data_dir = dirs::data_dir().unwrap_or_else(|| PathBuf::from("."));
        data_dir.join("rollcall").join("rollcall.log")
    }

    /// Loads configuration from the default config file.
    ///
    /// A missing file yields `Config::default()`.
    pub fn load() -> Result<Self, ConfigError> {
        let path = Self::config_path();

        if !path.exists() {
            return Ok(Config::default());
        }

        Self::load_from(&path)
    }

    /// Loads and validates an explicit config file, which must exist.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
            path: path.to_path_buf(),
            source: e,
        })?;

        let config: Config = toml::from_str(&content).map_err(|e| ConfigError::ParseError {
            path: path.to_path_buf(),
            source: e,
        })?;

        config.validate()?;
        Ok(config)
    }

    /// Checks:
    /// - `api.base_url` is an http(s) URL
    /// - both API timeouts are positive
    /// - `ui.tick_rate_ms` is within 16..=5000
    pub fn validate(&self) -> Result<(), ConfigError> {
        let base_url = &self.api.base_url;
        if !(base_url.starts_with("http://") || base_url.starts_with("https://")) {
            return Err(ConfigError::ValidationError {
                message: format!("api.base_url '{}' must start with http:// or https://", base_url),
            });
        }

        if self.api.timeout_seconds == 0 || self.api.connect_timeout_seconds == 0 {
            return Err(ConfigError::ValidationError {
                message: "API timeouts must be greater than zero".to_string(),
            });
        }

        if !TICK_RATE_RANGE.contains(&self.ui.tick_rate_ms) {
            return Err(ConfigError::ValidationError {
                message: format!(
                    "ui.tick_rate_ms {} is outside {}..={}",
                    self.ui.tick_rate_ms,
                    TICK_RATE_RANGE.start(),
                    TICK_RATE_RANGE.end()
                ),
            });
        }

        Ok(())
    }

    /// Log file path with the default applied.
    pub fn log_file(&self) -> PathBuf {
        self.logging
            .file
            .clone()
            .unwrap_or_else(Self::default_log_path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        let config = Config::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.api.base_url, "http://localhost:4001");
        assert_eq!(config.ui.tick_rate_ms, 250);
    }

    #[test]
    fn rejects_non_http_base_url() {
        let mut config = Config::default();
        config.api.base_url = "ftp://example.com".to_string();
        assert!(matches!(
            config.validate(),
            Err(ConfigError::ValidationError { .. })
        ));
    }

    #[test]
    fn rejects_zero_timeout() {
        let mut config = Config::default();
        config.api.connect_timeout_seconds = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn rejects_tick_rate_out_of_range() {
        let mut config = Config::default();
        config.ui.tick_rate_ms = 10;
        assert!(config.validate().is_err());
        config.ui.tick_rate_ms = 5000;
        assert!(config.validate().is_ok());
    }

    #[test]
    fn explicit_log_file_wins() {
        let mut config = Config::default();
        assert!(config.log_file().ends_with("rollcall/rollcall.log"));
        config.logging.file = Some(PathBuf::from("/tmp/roll.log"));
        assert_eq!(config.log_file(), PathBuf::from("/tmp/roll.log"));
    }
}
