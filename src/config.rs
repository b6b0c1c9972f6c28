//! Configuration management for the application.
//!
//! This module handles loading, validating, and saving application configuration
//! in TOML format with platform-specific directory resolution.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::constants::{CONFIG_DIR_ENV, CONFIG_DIR_NAME};

/// Theme display mode preference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    /// Automatically detect OS theme (dark/light)
    #[default]
    Auto,
    /// Always use dark theme
    Dark,
    /// Always use light theme
    Light,
}

impl std::str::FromStr for ThemeMode {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "auto" => Ok(Self::Auto),
            "dark" => Ok(Self::Dark),
            "light" => Ok(Self::Light),
            _ => anyhow::bail!("Invalid theme mode '{s}'. Must be 'auto', 'light', or 'dark'"),
        }
    }
}

/// Which catalog source to use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ProviderMode {
    /// Synthetic in-memory catalog for previews
    #[default]
    Mock,
    /// Live bridge service over HTTP
    Http,
}

impl std::str::FromStr for ProviderMode {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "mock" => Ok(Self::Mock),
            "http" => Ok(Self::Http),
            _ => anyhow::bail!("Invalid provider '{s}'. Must be 'mock' or 'http'"),
        }
    }
}

/// Bridge service connection settings.
///
/// Each credential field can also come from the environment; see
/// [`Credentials::resolve`](crate::provider::Credentials::resolve).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BridgeConfig {
    /// Bridge base URL (e.g., "https://bridge.example.com")
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base_url: Option<String>,
    /// Device code the catalog is scoped to
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub device_code: Option<String>,
    /// Auth token (prefer the environment over storing it here)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub auth_token: Option<String>,
    /// Path of the config endpoint, appended to the base URL
    #[serde(default = "default_endpoint_path")]
    pub endpoint_path: String,
    /// Request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
    /// Fall back to built-in development credentials when nothing is configured
    #[serde(default)]
    pub allow_dev_credentials: bool,
}

fn default_endpoint_path() -> String {
    "/api/device/config".to_string()
}

const fn default_timeout_secs() -> u64 {
    15
}

impl Default for BridgeConfig {
    fn default() -> Self {
        Self {
            base_url: None,
            device_code: None,
            auth_token: None,
            endpoint_path: default_endpoint_path(),
            timeout_secs: default_timeout_secs(),
            allow_dev_credentials: false,
        }
    }
}

/// Catalog provider selection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProviderConfig {
    /// Provider implementation
    #[serde(default)]
    pub mode: ProviderMode,
    /// Artificial delay of the mock provider in milliseconds
    #[serde(default = "default_mock_delay_ms")]
    pub mock_delay_ms: u64,
}

const fn default_mock_delay_ms() -> u64 {
    800
}

impl Default for ProviderConfig {
    fn default() -> Self {
        Self {
            mode: ProviderMode::default(),
            mock_delay_ms: default_mock_delay_ms(),
        }
    }
}

/// UI preferences configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UiConfig {
    /// Display help on startup
    pub show_help_on_startup: bool,
    /// Theme mode preference (Auto, Dark, Light)
    #[serde(default)]
    pub theme_mode: ThemeMode,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            show_help_on_startup: false,
            theme_mode: ThemeMode::default(),
        }
    }
}

/// Log output settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Default level filter ("error", "warn", "info", "debug", "trace")
    #[serde(default = "default_log_level")]
    pub level: String,
    /// Log file used while the terminal UI owns the screen
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file: Option<PathBuf>,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            file: None,
        }
    }
}

impl LoggingConfig {
    /// Resolves the log file path, defaulting to `styledeck.log` in the config directory.
    pub fn log_file_path(&self) -> Result<PathBuf> {
        match &self.file {
            Some(path) => Ok(path.clone()),
            None => Ok(Config::config_dir()?.join("styledeck.log")),
        }
    }
}

/// Application configuration.
///
/// # File Location
///
/// - `$STYLEDECK_CONFIG_DIR/config.toml` when the variable is set
/// - Linux: `~/.config/StyleDeck/config.toml`
/// - macOS: `~/Library/Application Support/StyleDeck/config.toml`
/// - Windows: `%APPDATA%\StyleDeck\config.toml`
///
/// # Validation
///
/// - `bridge.base_url`, when set, must be an absolute URL
/// - `bridge.endpoint_path` must start with `/`
/// - `bridge.timeout_secs` must be greater than zero
/// - `logging.level` must be a valid level filter
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Config {
    /// Bridge connection settings
    #[serde(default)]
    pub bridge: BridgeConfig,
    /// Provider selection
    #[serde(default)]
    pub provider: ProviderConfig,
    /// UI preferences
    #[serde(default)]
    pub ui: UiConfig,
    /// Logging settings
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Config {
    /// Creates a new Config with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Gets the config directory path.
    ///
    /// `STYLEDECK_CONFIG_DIR` takes precedence over the platform directory.
    pub fn config_dir() -> Result<PathBuf> {
        if let Some(dir) = std::env::var_os(CONFIG_DIR_ENV) {
            return Ok(PathBuf::from(dir));
        }

        let config_dir = dirs::config_dir()
            .context("Failed to determine config directory")?
            .join(CONFIG_DIR_NAME);

        Ok(config_dir)
    }

    /// Gets the full path to the config file.
    pub fn config_file_path() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join("config.toml"))
    }

    /// Loads configuration from the config file.
    ///
    /// If the file doesn't exist, returns default configuration.
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_file_path()?)
    }

    /// Loads configuration from an explicit path.
    pub fn load_from(config_path: &Path) -> Result<Self> {
        if !config_path.exists() {
            return Ok(Self::new());
        }

        let content = fs::read_to_string(config_path).context(format!(
            "Failed to read config file: {}",
            config_path.display()
        ))?;

        let config: Self = toml::from_str(&content).context(format!(
            "Failed to parse config file: {}",
            config_path.display()
        ))?;

        config.validate()?;

        Ok(config)
    }

    /// Saves configuration to the config file using atomic write.
    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_file_path()?)
    }

    /// Saves configuration to an explicit path using temp file + rename.
    pub fn save_to(&self, config_path: &Path) -> Result<()> {
        self.validate()?;

        if let Some(config_dir) = config_path.parent() {
            fs::create_dir_all(config_dir).context(format!(
                "Failed to create config directory: {}",
                config_dir.display()
            ))?;
        }

        let content = toml::to_string_pretty(self).context("Failed to serialize configuration")?;

        let temp_path = config_path.with_extension("toml.tmp");

        fs::write(&temp_path, content).context(format!(
            "Failed to write temp config file: {}",
            temp_path.display()
        ))?;

        fs::rename(&temp_path, config_path).context(format!(
            "Failed to rename temp config file to: {}",
            config_path.display()
        ))?;

        Ok(())
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<()> {
        if let Some(base_url) = &self.bridge.base_url {
            reqwest::Url::parse(base_url)
                .with_context(|| format!("Invalid bridge base URL: {base_url}"))?;
        }

        if !self.bridge.endpoint_path.starts_with('/') {
            anyhow::bail!(
                "Bridge endpoint path must start with '/': {}",
                self.bridge.endpoint_path
            );
        }

        if self.bridge.timeout_secs == 0 {
            anyhow::bail!("Bridge timeout must be greater than zero seconds");
        }

        self.logging
            .level
            .parse::<tracing::level_filters::LevelFilter>()
            .map_err(|_| anyhow::anyhow!("Invalid log level: {}", self.logging.level))?;

        Ok(())
    }
}
