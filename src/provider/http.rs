//! Live bridge client over HTTP.
//!
//! Issues `GET {base_url}{endpoint_path}?deviceCode=...` with a bearer token
//! and decodes either the bridge envelope (`{"ok": .., "value": ..}`) or a
//! bare `{"uistyle": [...]}` body.

use std::time::{Duration, Instant};

use async_trait::async_trait;
use reqwest::{header, Url};
use serde::Deserialize;
use tracing::{debug, info, warn};

use crate::models::{DeviceConfigResponse, StyleCategory};

use super::{ConfigProvider, Credentials, FetchError};

/// Body shapes accepted from the bridge.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum BridgePayload {
    Envelope {
        ok: bool,
        #[serde(default)]
        value: Option<DeviceConfigResponse>,
        #[serde(default)]
        error: Option<serde_json::Value>,
    },
    Bare {
        uistyle: Vec<StyleCategory>,
    },
}

impl BridgePayload {
    fn into_response(self) -> Result<DeviceConfigResponse, FetchError> {
        match self {
            Self::Envelope {
                ok: true,
                value: Some(value),
                ..
            } => Ok(value),
            Self::Envelope {
                ok: true,
                value: None,
                ..
            } => Err(FetchError::Server(
                "bridge reported success without a value".to_string(),
            )),
            Self::Envelope {
                ok: false, error, ..
            } => {
                let detail = match error {
                    Some(serde_json::Value::String(msg)) => msg,
                    Some(other) => other.to_string(),
                    None => "no error detail".to_string(),
                };
                Err(FetchError::Server(format!("bridge reported failure: {detail}")))
            }
            Self::Bare { uistyle } => Ok(DeviceConfigResponse::new(uistyle)),
        }
    }
}

/// Fetches the catalog from the bridge service.
#[derive(Debug, Clone)]
pub struct HttpConfigProvider {
    client: reqwest::Client,
    endpoint_path: String,
}

impl HttpConfigProvider {
    /// Creates a client with the given endpoint path and request timeout.
    pub fn new(endpoint_path: impl Into<String>, timeout: Duration) -> Result<Self, FetchError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .user_agent(concat!("styledeck/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| FetchError::Configuration(format!("failed to create HTTP client: {e}")))?;

        Ok(Self {
            client,
            endpoint_path: endpoint_path.into(),
        })
    }

    /// Builds the request URL for the given credentials.
    pub fn config_url(&self, credentials: &Credentials) -> Result<Url, FetchError> {
        let joined = format!(
            "{}{}",
            credentials.base_url.trim_end_matches('/'),
            self.endpoint_path
        );
        let mut url = Url::parse(&joined).map_err(|e| {
            FetchError::Configuration(format!(
                "invalid base URL '{}': {e}",
                credentials.base_url
            ))
        })?;
        url.query_pairs_mut()
            .append_pair("deviceCode", &credentials.device_code);
        Ok(url)
    }
}

fn transport_error(err: &reqwest::Error) -> FetchError {
    if err.is_timeout() {
        FetchError::Transport("request timed out".to_string())
    } else if err.is_connect() {
        FetchError::Transport(format!("could not connect to bridge: {err}"))
    } else {
        FetchError::Transport(err.to_string())
    }
}

#[async_trait]
impl ConfigProvider for HttpConfigProvider {
    fn name(&self) -> &'static str {
        "http"
    }

    async fn fetch_catalog(
        &self,
        credentials: &Credentials,
    ) -> Result<DeviceConfigResponse, FetchError> {
        credentials.validate()?;
        let url = self.config_url(credentials)?;

        info!(device_code = %credentials.device_code, url = %url, "Fetching catalog from bridge");
        let started = Instant::now();

        let response = self
            .client
            .get(url)
            .bearer_auth(&credentials.auth_token)
            .header(header::ACCEPT, "application/json")
            .send()
            .await
            .map_err(|e| transport_error(&e))?;

        let status = response.status();
        if !status.is_success() {
            warn!(%status, "Bridge returned non-success status");
            return Err(FetchError::Server(format!("bridge returned HTTP {status}")));
        }

        let body = response.bytes().await.map_err(|e| transport_error(&e))?;
        debug!(bytes = body.len(), "Received bridge response");

        let payload: BridgePayload = serde_json::from_slice(&body)
            .map_err(|e| FetchError::Server(format!("malformed payload: {e}")))?;
        let catalog = payload.into_response()?;

        catalog
            .validate()
            .map_err(|e| FetchError::Server(format!("invalid catalog: {e}")))?;

        info!(
            categories = catalog.uistyle.len(),
            styles = catalog.style_count(),
            elapsed_ms = started.elapsed().as_millis(),
            "Catalog fetched"
        );

        Ok(catalog)
    }
}
