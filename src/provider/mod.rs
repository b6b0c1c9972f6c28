//! Catalog sources.
//!
//! A [`ConfigProvider`] turns [`Credentials`] into a [`DeviceConfigResponse`]
//! in one asynchronous call. Providers do not cache and do not retry; retry
//! policy belongs to the caller. Two implementations share the contract:
//!
//! - [`MockConfigProvider`] returns a synthetic catalog after a fixed delay
//! - [`HttpConfigProvider`] queries the bridge service

pub mod credentials;
pub mod error;
pub mod http;
pub mod mock;

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;

use crate::config::{Config, ProviderMode};
use crate::models::DeviceConfigResponse;

pub use credentials::{CredentialOverrides, Credentials};
pub use error::{FailureKind, FetchError};
pub use http::HttpConfigProvider;
pub use mock::MockConfigProvider;

/// Single-shot catalog fetch.
#[async_trait]
pub trait ConfigProvider: Send + Sync {
    /// Short provider name for logs ("mock", "http")
    fn name(&self) -> &'static str;

    /// Fetches the full catalog.
    ///
    /// Empty credentials fail with [`FetchError::Configuration`] before any I/O.
    async fn fetch_catalog(
        &self,
        credentials: &Credentials,
    ) -> Result<DeviceConfigResponse, FetchError>;
}

/// Shared handle to a provider, cheap to move into fetch tasks.
pub type SharedProvider = Arc<dyn ConfigProvider>;

/// Builds the provider selected by `mode`.
pub fn build_provider(mode: ProviderMode, config: &Config) -> Result<SharedProvider, FetchError> {
    match mode {
        ProviderMode::Mock => Ok(Arc::new(MockConfigProvider::new(Duration::from_millis(
            config.provider.mock_delay_ms,
        )))),
        ProviderMode::Http => Ok(Arc::new(HttpConfigProvider::new(
            config.bridge.endpoint_path.clone(),
            Duration::from_secs(config.bridge.timeout_secs),
        )?)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_provider() {
        let config = Config::new();
        assert_eq!(
            build_provider(ProviderMode::Mock, &config).unwrap().name(),
            "mock"
        );
        assert_eq!(
            build_provider(ProviderMode::Http, &config).unwrap().name(),
            "http"
        );
    }
}
