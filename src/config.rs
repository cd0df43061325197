//! Configuration System
//!
//! Handles loading configuration from files and environment variables.
//! Supports TOML config files and environment variable overrides.

use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::client::ClientConfig;
use crate::dataset::DEFAULT_API_BASE;
use crate::render::text::TextOptions;

/// Main configuration structure
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub api: ApiConfig,

    #[serde(default)]
    pub dashboard: DashboardConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Analytics service configuration
#[derive(Debug, Clone, Deserialize)]
pub struct ApiConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Unset means a hung request keeps the dashboard loading
    #[serde(default)]
    pub request_timeout_secs: Option<u64>,
}

fn default_base_url() -> String {
    DEFAULT_API_BASE.to_string()
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            request_timeout_secs: None,
        }
    }
}

impl ApiConfig {
    /// Client settings derived from this section
    pub fn client_config(&self) -> ClientConfig {
        ClientConfig {
            base_url: self.base_url.clone(),
            request_timeout_ms: self.request_timeout_secs.map(|s| s.saturating_mul(1000)),
        }
    }
}

/// Terminal dashboard configuration
#[derive(Debug, Clone, Deserialize)]
pub struct DashboardConfig {
    #[serde(default = "default_sidebar_open")]
    pub sidebar_open: bool,

    #[serde(default = "default_color")]
    pub color: bool,

    #[serde(default = "default_bar_width")]
    pub bar_width: usize,

    #[serde(default = "default_output_format")]
    pub format: String,
}

fn default_sidebar_open() -> bool {
    true
}

fn default_color() -> bool {
    true
}

fn default_bar_width() -> usize {
    40
}

fn default_output_format() -> String {
    "text".to_string()
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            sidebar_open: default_sidebar_open(),
            color: default_color(),
            bar_width: default_bar_width(),
            format: default_output_format(),
        }
    }
}

impl DashboardConfig {
    /// Drawing options for the text renderer
    pub fn text_options(&self) -> TextOptions {
        TextOptions {
            bar_width: self.bar_width.max(1),
            color: self.color,
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,

    #[serde(default = "default_log_format")]
    pub format: String,
}

fn default_log_level() -> String {
    "warn".to_string()
}

fn default_log_format() -> String {
    "pretty".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

impl Config {
    /// Load configuration from a file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            error: e.to_string(),
        })?;

        let config: Config = toml::from_str(&content).map_err(|e| ConfigError::Parse {
            path: path.to_path_buf(),
            error: e.to_string(),
        })?;

        Ok(config)
    }

    /// Load configuration from environment variables only
    pub fn from_env() -> Self {
        let mut config = Config::default();
        config.apply_env_overrides();
        config
    }

    /// Load configuration with environment variable overrides
    pub fn load_with_env(path: &Path) -> Result<Self, ConfigError> {
        let mut config = Self::load(path)?;
        config.apply_env_overrides();
        Ok(config)
    }

    /// Load from default locations or environment
    pub fn load_default() -> Self {
        for path in Self::default_paths() {
            if path.exists() {
                match Self::load_with_env(&path) {
                    Ok(config) => {
                        tracing::info!("Loaded config from {:?}", path);
                        return config;
                    }
                    Err(e) => {
                        tracing::warn!("Failed to load config from {:?}: {}", path, e);
                    }
                }
            }
        }

        // Fall back to environment-only config
        tracing::debug!("Using default config with environment overrides");
        Self::from_env()
    }

    /// Config file locations, in search order
    pub fn default_paths() -> Vec<PathBuf> {
        [
            dirs::config_dir().map(|p| p.join("ytviz").join("config.toml")),
            Some(PathBuf::from("./ytviz.toml")),
        ]
        .into_iter()
        .flatten()
        .collect()
    }

    /// Apply environment variable overrides to an existing config
    fn apply_env_overrides(&mut self) {
        if let Ok(url) = std::env::var("YTVIZ_API_URL") {
            self.api.base_url = url;
        }
        if let Ok(level) = std::env::var("YTVIZ_LOG_LEVEL") {
            self.logging.level = level;
        }
        if let Ok(format) = std::env::var("YTVIZ_LOG_FORMAT") {
            self.logging.format = format;
        }
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path:?}: {error}")]
    Io { path: PathBuf, error: String },

    #[error("Failed to parse config file {path:?}: {error}")]
    Parse { path: PathBuf, error: String },
}

/// Generate a default config file content
pub fn generate_default_config() -> String {
    r#"# YTube Data Visualizer Configuration
#
# Environment variables override these settings:
# - YTVIZ_API_URL
# - YTVIZ_LOG_LEVEL
# - YTVIZ_LOG_FORMAT

[api]
# Analytics service root
base_url = "http://127.0.0.1:5328"

# Request timeout in seconds (unset: wait indefinitely)
# request_timeout_secs = 30

[dashboard]
# Show the dataset menu when the shell starts
sidebar_open = true

# Colored chart swatches
color = true

# Width of the longest bar, in columns
bar_width = 40

# Output of one-shot commands: text or json
format = "text"

[logging]
# Log level: trace, debug, info, warn, error
level = "warn"

# Log format: pretty or json
format = "pretty"
"#
    .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.api.base_url, "http://127.0.0.1:5328");
        assert!(config.api.request_timeout_secs.is_none());
        assert!(config.dashboard.sidebar_open);
        assert_eq!(config.dashboard.bar_width, 40);
        assert_eq!(config.logging.level, "warn");
    }

    #[test]
    fn test_generated_config_parses() {
        let config: Config = toml::from_str(&generate_default_config()).unwrap();
        assert_eq!(config.api.base_url, "http://127.0.0.1:5328");
        assert_eq!(config.dashboard.format, "text");
        assert_eq!(config.logging.format, "pretty");
    }

    #[test]
    fn test_load_partial_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            "[api]\nbase_url = \"http://analytics:9000\"\nrequest_timeout_secs = 5\n\n[dashboard]\ncolor = false"
        )
        .unwrap();

        let config = Config::load(file.path()).unwrap();
        assert_eq!(config.api.base_url, "http://analytics:9000");
        assert_eq!(config.api.client_config().request_timeout_ms, Some(5000));
        assert!(!config.dashboard.color);
        assert!(config.dashboard.sidebar_open);
        assert_eq!(config.logging.level, "warn");
    }

    #[test]
    fn test_load_errors() {
        let missing = Path::new("/nonexistent/ytviz.toml");
        assert!(matches!(Config::load(missing), Err(ConfigError::Io { .. })));

        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[api\nbase_url = 1").unwrap();
        assert!(matches!(
            Config::load(file.path()),
            Err(ConfigError::Parse { .. })
        ));
    }

    #[test]
    fn test_text_options_minimum_width() {
        let dashboard = DashboardConfig {
            bar_width: 0,
            ..Default::default()
        };
        assert_eq!(dashboard.text_options().bar_width, 1);
    }

    #[test]
    fn test_huge_timeout_saturates() {
        let api = ApiConfig {
            request_timeout_secs: Some(u64::MAX),
            ..Default::default()
        };
        assert_eq!(api.client_config().request_timeout_ms, Some(u64::MAX));
    }
}
