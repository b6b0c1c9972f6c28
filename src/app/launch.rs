use anyhow::Result;
use tokio::runtime::Runtime;
use tracing::{info, warn};

use crate::app::loader::CatalogLoader;
use crate::config::{Config, ProviderMode};
use crate::models::DeviceConfigResponse;
use crate::provider::{build_provider, CredentialOverrides, Credentials, FetchError};
use crate::tui;

/// Command-line choices that adjust the loaded configuration for one run.
#[derive(Debug, Clone, Default)]
pub struct LaunchOptions {
    /// Force the mock provider regardless of configuration
    pub force_mock: bool,
    /// Override the mock provider delay
    pub mock_delay_ms: Option<u64>,
    /// Explicit credential values
    pub overrides: CredentialOverrides,
    /// Allow built-in development credentials as the last fallback
    pub dev_credentials: bool,
}

impl LaunchOptions {
    /// Applies run-scoped overrides to `config` (never persisted).
    pub fn apply(&self, config: &mut Config) {
        if self.force_mock {
            config.provider.mode = ProviderMode::Mock;
        }
        if let Some(delay) = self.mock_delay_ms {
            config.provider.mock_delay_ms = delay;
        }
        if self.dev_credentials {
            config.bridge.allow_dev_credentials = true;
        }
    }

    /// Resolves credentials from overrides, environment and `config`.
    pub fn credentials(&self, config: &Config) -> Result<Credentials, FetchError> {
        let credentials = Credentials::from_env(
            &self.overrides,
            &config.bridge,
            config.bridge.allow_dev_credentials,
        )?;
        if credentials.is_dev_default() {
            warn!("Using built-in development credentials");
        }
        Ok(credentials)
    }
}

/// Fetches the catalog once, blocking on `runtime`. Used by headless commands.
pub fn fetch_catalog_blocking(
    runtime: &Runtime,
    config: &Config,
    options: &LaunchOptions,
) -> Result<DeviceConfigResponse, FetchError> {
    let provider = build_provider(config.provider.mode, config)?;
    let credentials = options.credentials(config)?;
    runtime.block_on(provider.fetch_catalog(&credentials))
}

/// Starts the background fetch and runs the terminal UI until the user quits.
pub fn launch_browser(config: Config, options: &LaunchOptions, runtime: &Runtime) -> Result<()> {
    let provider = build_provider(config.provider.mode, &config)?;
    let credentials = options.credentials(&config);

    info!(
        provider = provider.name(),
        credentials_resolved = credentials.is_ok(),
        "Launching browser"
    );

    let mut loader = CatalogLoader::new(runtime.handle().clone(), provider, credentials);
    let mut app_state = tui::AppState::new(config, loader.device_code().map(str::to_string));
    loader.start();

    let mut terminal = tui::setup_terminal()?;
    let result = tui::run_tui(&mut app_state, &mut loader, &mut terminal);
    tui::restore_terminal(terminal)?;

    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_apply_overrides() {
        let mut config = Config::default();
        config.provider.mode = ProviderMode::Http;
        let options = LaunchOptions {
            force_mock: true,
            mock_delay_ms: Some(0),
            dev_credentials: true,
            ..LaunchOptions::default()
        };
        options.apply(&mut config);

        assert_eq!(config.provider.mode, ProviderMode::Mock);
        assert_eq!(config.provider.mock_delay_ms, 0);
        assert!(config.bridge.allow_dev_credentials);
    }

    #[test]
    fn test_fetch_blocking_with_overrides() {
        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .unwrap();
        let mut config = Config::default();
        let options = LaunchOptions {
            force_mock: true,
            mock_delay_ms: Some(0),
            overrides: CredentialOverrides {
                base_url: Some("https://bridge.test".to_string()),
                auth_token: Some("token".to_string()),
                device_code: Some("booth".to_string()),
            },
            dev_credentials: false,
        };
        options.apply(&mut config);

        let catalog = fetch_catalog_blocking(&runtime, &config, &options).unwrap();
        assert_eq!(catalog.uistyle.len(), 4);
    }
}
