use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::config::types::Config;

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
    /// Uses `~/.config/guidedesk/config.toml` on Unix/macOS, or the
    /// equivalent on other platforms via `dirs::config_dir()`. Falls back
    /// to the current directory if config_dir is unavailable.
    pub fn config_path() -> PathBuf {
        let config_dir = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
        config_dir.join("guidedesk").join("config.toml")
    }

    /// Loads configuration from the default config file.
    ///
    /// - If the file doesn't exist, returns `Config::default()`.
    /// - If the file exists, parses it as TOML and validates.
    /// - Returns an error if reading, parsing, or validation fails.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(&Self::config_path())
    }

    /// Loads configuration from an explicit path.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Ok(Config::default());
        }

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

    /// Validates the configuration.
    ///
    /// Checks:
    /// - The API base URL is non-empty and has no trailing slash
    /// - Resource paths start with '/'
    /// - Page size and timer intervals are at least 1
    /// - Facet thresholds are ordered (medium below high)
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.api.base_url.is_empty() {
            return Err(ConfigError::ValidationError {
                message: "api.base_url must not be empty".to_string(),
            });
        }
        if self.api.base_url.ends_with('/') {
            return Err(ConfigError::ValidationError {
                message: "api.base_url must not end with '/'".to_string(),
            });
        }
        for (name, path) in [
            ("api.countries_path", &self.api.countries_path),
            ("api.testimonials_path", &self.api.testimonials_path),
        ] {
            if !path.starts_with('/') {
                return Err(ConfigError::ValidationError {
                    message: format!("{} must start with '/'", name),
                });
            }
        }
        if self.browse.page_size == 0 {
            return Err(ConfigError::ValidationError {
                message: "browse.page_size must be at least 1".to_string(),
            });
        }
        if self.browse.medium_threshold >= self.browse.high_threshold {
            return Err(ConfigError::ValidationError {
                message: "browse.medium_threshold must be below browse.high_threshold"
                    .to_string(),
            });
        }
        if self.carousel.interval_seconds == 0 {
            return Err(ConfigError::ValidationError {
                message: "carousel.interval_seconds must be at least 1".to_string(),
            });
        }
        if self.carousel.cooldown_seconds == 0 {
            return Err(ConfigError::ValidationError {
                message: "carousel.cooldown_seconds must be at least 1".to_string(),
            });
        }
        Ok(())
    }
}
