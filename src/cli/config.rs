//! Configuration management CLI commands.

use crate::cli::common::{print_json, CliError, CliResult};
use crate::config::{Config, ProviderMode, ThemeMode};
use clap::{Args, Subcommand};
use serde::Serialize;

/// Configuration management commands
#[derive(Args, Debug)]
pub struct ConfigArgs {
    #[command(subcommand)]
    command: ConfigCommand,
}

#[derive(Subcommand, Debug)]
enum ConfigCommand {
    /// Display current configuration
    Show(ConfigShowArgs),
    /// Set configuration values
    Set(ConfigSetArgs),
}

/// Display current configuration
#[derive(Args, Debug)]
pub struct ConfigShowArgs {
    /// Output as JSON
    #[arg(long)]
    json: bool,
}

/// Set configuration values
#[derive(Args, Debug)]
pub struct ConfigSetArgs {
    /// Bridge base URL
    #[arg(long, value_name = "URL")]
    bridge_url: Option<String>,

    /// Device code sent with every catalog request
    #[arg(long, value_name = "CODE")]
    device: Option<String>,

    /// Catalog source (mock or http)
    #[arg(long, value_name = "MODE")]
    provider: Option<String>,

    /// Theme mode (auto, light, or dark)
    #[arg(long, value_name = "MODE")]
    theme: Option<String>,

    /// Simulated mock provider latency in milliseconds
    #[arg(long, value_name = "MS")]
    mock_latency_ms: Option<u64>,
}

/// JSON-serializable configuration for output.
///
/// The auth token is reported as set or unset, never echoed.
#[derive(Serialize, Debug)]
struct ConfigOutput {
    bridge: BridgeOutput,
    provider: ProviderOutput,
    ui: UiOutput,
    logging: LoggingOutput,
}

#[derive(Serialize, Debug)]
struct BridgeOutput {
    #[serde(skip_serializing_if = "Option::is_none")]
    base_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    device_code: Option<String>,
    auth_token_set: bool,
    endpoint_path: String,
    timeout_secs: u64,
    allow_dev_credentials: bool,
}

#[derive(Serialize, Debug)]
struct ProviderOutput {
    mode: ProviderMode,
    mock_delay_ms: u64,
}

#[derive(Serialize, Debug)]
struct UiOutput {
    theme: ThemeMode,
    show_help_on_startup: bool,
}

#[derive(Serialize, Debug)]
struct LoggingOutput {
    level: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    file: Option<String>,
}

impl From<&Config> for ConfigOutput {
    fn from(config: &Config) -> Self {
        Self {
            bridge: BridgeOutput {
                base_url: config.bridge.base_url.clone(),
                device_code: config.bridge.device_code.clone(),
                auth_token_set: config
                    .bridge
                    .auth_token
                    .as_deref()
                    .is_some_and(|token| !token.is_empty()),
                endpoint_path: config.bridge.endpoint_path.clone(),
                timeout_secs: config.bridge.timeout_secs,
                allow_dev_credentials: config.bridge.allow_dev_credentials,
            },
            provider: ProviderOutput {
                mode: config.provider.mode,
                mock_delay_ms: config.provider.mock_delay_ms,
            },
            ui: UiOutput {
                theme: config.ui.theme_mode,
                show_help_on_startup: config.ui.show_help_on_startup,
            },
            logging: LoggingOutput {
                level: config.logging.level.clone(),
                file: config
                    .logging
                    .file
                    .as_ref()
                    .map(|p| p.to_string_lossy().to_string()),
            },
        }
    }
}

impl ConfigArgs {
    /// Execute config subcommand
    pub fn execute(&self) -> CliResult<()> {
        match &self.command {
            ConfigCommand::Show(args) => args.execute(),
            ConfigCommand::Set(args) => args.execute(),
        }
    }
}

impl ConfigShowArgs {
    /// Execute show command
    pub fn execute(&self) -> CliResult<()> {
        let config = Config::load()
            .map_err(|e| CliError::validation(format!("Failed to load configuration: {e}")))?;

        if self.json {
            print_json(&ConfigOutput::from(&config))
        } else {
            output_human_readable(&config);
            Ok(())
        }
    }
}

impl ConfigSetArgs {
    fn is_empty(&self) -> bool {
        self.bridge_url.is_none()
            && self.device.is_none()
            && self.provider.is_none()
            && self.theme.is_none()
            && self.mock_latency_ms.is_none()
    }

    /// Applies the given options to `config`.
    fn apply(&self, config: &mut Config) -> CliResult<()> {
        if let Some(url) = &self.bridge_url {
            config.bridge.base_url = Some(url.trim().to_string());
        }
        if let Some(code) = &self.device {
            let code = code.trim();
            if code.is_empty() {
                return Err(CliError::validation("Device code must not be empty"));
            }
            config.bridge.device_code = Some(code.to_string());
        }
        if let Some(mode) = &self.provider {
            config.provider.mode = mode
                .parse()
                .map_err(|e: anyhow::Error| CliError::validation(e.to_string()))?;
        }
        if let Some(theme) = &self.theme {
            config.ui.theme_mode = theme
                .parse()
                .map_err(|e: anyhow::Error| CliError::validation(e.to_string()))?;
        }
        if let Some(delay) = self.mock_latency_ms {
            config.provider.mock_delay_ms = delay;
        }

        config
            .validate()
            .map_err(|e| CliError::validation(format!("{e:#}")))
    }

    /// Execute set command
    pub fn execute(&self) -> CliResult<()> {
        if self.is_empty() {
            return Err(CliError::validation(
                "At least one configuration option must be specified: --bridge-url, --device, --provider, --theme, or --mock-latency-ms",
            ));
        }

        let mut config = Config::load().unwrap_or_default();
        self.apply(&mut config)?;

        config
            .save()
            .map_err(|e| CliError::io(format!("Failed to save configuration: {e}")))?;

        println!("Configuration updated successfully.");
        Ok(())
    }
}

/// Output configuration in human-readable format
fn output_human_readable(config: &Config) {
    let unset = "(not configured)";

    println!("StyleDeck Configuration");
    println!("=======================");
    println!();

    println!("Bridge:");
    println!(
        "  Base URL:      {}",
        config.bridge.base_url.as_deref().unwrap_or(unset)
    );
    println!(
        "  Device Code:   {}",
        config.bridge.device_code.as_deref().unwrap_or(unset)
    );
    println!(
        "  Auth Token:    {}",
        if config.bridge.auth_token.is_some() {
            "******"
        } else {
            unset
        }
    );
    println!("  Endpoint Path: {}", config.bridge.endpoint_path);
    println!("  Timeout:       {}s", config.bridge.timeout_secs);
    println!();

    println!("Provider:");
    println!(
        "  Mode:          {}",
        format!("{:?}", config.provider.mode).to_lowercase()
    );
    println!("  Mock Delay:    {}ms", config.provider.mock_delay_ms);
    println!();

    println!("UI:");
    println!(
        "  Theme Mode:    {}",
        format!("{:?}", config.ui.theme_mode).to_lowercase()
    );
    println!();

    println!("Logging:");
    println!("  Level:         {}", config.logging.level);
    if let Some(file) = &config.logging.file {
        println!("  File:          {}", file.display());
    }
    println!();
}

#[cfg(test)]
mod tests {
    use super::*;

    fn set_args() -> ConfigSetArgs {
        ConfigSetArgs {
            bridge_url: None,
            device: None,
            provider: None,
            theme: None,
            mock_latency_ms: None,
        }
    }

    #[test]
    fn test_apply_values() {
        let mut config = Config::default();
        let args = ConfigSetArgs {
            bridge_url: Some(" https://bridge.example.com ".to_string()),
            device: Some("booth-7".to_string()),
            provider: Some("HTTP".to_string()),
            theme: Some("light".to_string()),
            mock_latency_ms: Some(0),
        };
        args.apply(&mut config).unwrap();

        assert_eq!(
            config.bridge.base_url.as_deref(),
            Some("https://bridge.example.com")
        );
        assert_eq!(config.bridge.device_code.as_deref(), Some("booth-7"));
        assert_eq!(config.provider.mode, ProviderMode::Http);
        assert_eq!(config.ui.theme_mode, ThemeMode::Light);
        assert_eq!(config.provider.mock_delay_ms, 0);
    }

    #[test]
    fn test_apply_rejects_invalid() {
        let mut config = Config::default();
        let args = ConfigSetArgs {
            theme: Some("purple".to_string()),
            ..set_args()
        };
        assert!(args.apply(&mut config).is_err());

        let args = ConfigSetArgs {
            bridge_url: Some("not a url".to_string()),
            ..set_args()
        };
        assert!(args.apply(&mut config).is_err());

        let args = ConfigSetArgs {
            device: Some("  ".to_string()),
            ..set_args()
        };
        assert!(args.apply(&mut config).is_err());
    }

    #[test]
    fn test_output_hides_token() {
        let mut config = Config::default();
        config.bridge.auth_token = Some("secret".to_string());
        let json = serde_json::to_string(&ConfigOutput::from(&config)).unwrap();
        assert!(!json.contains("secret"));
        assert!(json.contains("\"auth_token_set\":true"));
    }

    #[test]
    fn test_empty_set_detected() {
        assert!(set_args().is_empty());
    }
}
