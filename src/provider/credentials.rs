//! Bridge credentials and their one-shot resolution at startup.

use std::fmt;

use crate::config::BridgeConfig;
use crate::constants::{ENV_AUTH_TOKEN, ENV_BASE_URL, ENV_DEVICE_CODE};

use super::FetchError;

/// Development fallback for the base URL, only used with explicit opt-in.
pub const DEV_BASE_URL: &str = "http://127.0.0.1:8787";
/// Development fallback for the auth token, only used with explicit opt-in.
pub const DEV_AUTH_TOKEN: &str = "dev-preview-token";
/// Development fallback for the device code, only used with explicit opt-in.
pub const DEV_DEVICE_CODE: &str = "dev-preview";

/// Opaque `(base_url, auth_token, device_code)` triple needed for a fetch.
///
/// `Debug` redacts the token so credentials can be logged safely.
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    /// Bridge base URL
    pub base_url: String,
    /// Bearer token passed through to the bridge
    pub auth_token: String,
    /// Device the catalog is scoped to
    pub device_code: String,
}

/// Values given explicitly on the command line; they win over everything else.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CredentialOverrides {
    /// `--base-url`
    pub base_url: Option<String>,
    /// `--auth-token`
    pub auth_token: Option<String>,
    /// `--device-code`
    pub device_code: Option<String>,
}

impl Credentials {
    /// Creates credentials from raw values.
    pub fn new(
        base_url: impl Into<String>,
        auth_token: impl Into<String>,
        device_code: impl Into<String>,
    ) -> Self {
        Self {
            base_url: base_url.into(),
            auth_token: auth_token.into(),
            device_code: device_code.into(),
        }
    }

    /// Boundary check: every field must be non-empty.
    pub fn validate(&self) -> Result<(), FetchError> {
        let fields = [
            ("base URL", &self.base_url),
            ("auth token", &self.auth_token),
            ("device code", &self.device_code),
        ];
        for (label, value) in fields {
            if value.trim().is_empty() {
                return Err(FetchError::Configuration(format!("{label} is empty")));
            }
        }
        Ok(())
    }

    /// Resolves each field through the cascade
    /// override → environment → config file → development default.
    ///
    /// `lookup` reads an environment variable; empty values count as unset.
    /// Development defaults apply only when `allow_dev` is true.
    pub fn resolve<F>(
        overrides: &CredentialOverrides,
        bridge: &BridgeConfig,
        lookup: F,
        allow_dev: bool,
    ) -> Result<Self, FetchError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let pick = |explicit: &Option<String>,
                    env_key: &str,
                    configured: &Option<String>,
                    dev: &str,
                    flag: &str|
         -> Result<String, FetchError> {
            explicit
                .clone()
                .filter(|v| !v.is_empty())
                .or_else(|| lookup(env_key).filter(|v| !v.is_empty()))
                .or_else(|| configured.clone().filter(|v| !v.is_empty()))
                .or_else(|| allow_dev.then(|| dev.to_string()))
                .ok_or_else(|| {
                    FetchError::Configuration(format!(
                        "missing {flag}: set {env_key} or pass --{flag}"
                    ))
                })
        };

        Ok(Self {
            base_url: pick(
                &overrides.base_url,
                ENV_BASE_URL,
                &bridge.base_url,
                DEV_BASE_URL,
                "base-url",
            )?,
            auth_token: pick(
                &overrides.auth_token,
                ENV_AUTH_TOKEN,
                &bridge.auth_token,
                DEV_AUTH_TOKEN,
                "auth-token",
            )?,
            device_code: pick(
                &overrides.device_code,
                ENV_DEVICE_CODE,
                &bridge.device_code,
                DEV_DEVICE_CODE,
                "device-code",
            )?,
        })
    }

    /// [`resolve`](Self::resolve) against the process environment.
    pub fn from_env(
        overrides: &CredentialOverrides,
        bridge: &BridgeConfig,
        allow_dev: bool,
    ) -> Result<Self, FetchError> {
        Self::resolve(overrides, bridge, |key| std::env::var(key).ok(), allow_dev)
    }

    /// True when every field equals the built-in development default.
    #[must_use]
    pub fn is_dev_default(&self) -> bool {
        self.base_url == DEV_BASE_URL
            && self.auth_token == DEV_AUTH_TOKEN
            && self.device_code == DEV_DEVICE_CODE
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("base_url", &self.base_url)
            .field(
                "auth_token",
                &if self.auth_token.is_empty() {
                    "MISSING"
                } else {
                    "******"
                },
            )
            .field("device_code", &self.device_code)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn env(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_validate_empty_fields() {
        assert!(Credentials::new("https://b", "t", "d").validate().is_ok());

        let err = Credentials::new("https://b", "", "d").validate().unwrap_err();
        assert!(matches!(err, FetchError::Configuration(_)));
        assert!(err.message().contains("auth token"));

        assert!(Credentials::new("  ", "t", "d").validate().is_err());
    }

    #[test]
    fn test_resolve_from_environment() {
        let lookup = env(&[
            (ENV_BASE_URL, "https://bridge.example.com"),
            (ENV_AUTH_TOKEN, "secret"),
            (ENV_DEVICE_CODE, "dbfe65"),
        ]);
        let creds = Credentials::resolve(
            &CredentialOverrides::default(),
            &BridgeConfig::default(),
            lookup,
            false,
        )
        .unwrap();
        assert_eq!(creds.base_url, "https://bridge.example.com");
        assert_eq!(creds.auth_token, "secret");
        assert_eq!(creds.device_code, "dbfe65");
    }

    #[test]
    fn test_resolve_precedence() {
        let overrides = CredentialOverrides {
            device_code: Some("from-flag".to_string()),
            ..CredentialOverrides::default()
        };
        let bridge = BridgeConfig {
            base_url: Some("https://from-config".to_string()),
            device_code: Some("from-config".to_string()),
            auth_token: Some("config-token".to_string()),
            ..BridgeConfig::default()
        };
        let lookup = env(&[(ENV_AUTH_TOKEN, "env-token"), (ENV_BASE_URL, "")]);

        let creds = Credentials::resolve(&overrides, &bridge, lookup, false).unwrap();
        assert_eq!(creds.device_code, "from-flag");
        assert_eq!(creds.auth_token, "env-token");
        // Empty environment values fall through to the config file
        assert_eq!(creds.base_url, "https://from-config");
    }

    #[test]
    fn test_resolve_missing_without_opt_in() {
        let err = Credentials::resolve(
            &CredentialOverrides::default(),
            &BridgeConfig::default(),
            env(&[]),
            false,
        )
        .unwrap_err();
        assert!(matches!(err, FetchError::Configuration(_)));
        assert!(err.message().contains(ENV_BASE_URL));
    }

    #[test]
    fn test_resolve_dev_defaults_with_opt_in() {
        let creds = Credentials::resolve(
            &CredentialOverrides::default(),
            &BridgeConfig::default(),
            env(&[]),
            true,
        )
        .unwrap();
        assert!(creds.is_dev_default());
    }

    #[test]
    fn test_debug_redacts_token() {
        let creds = Credentials::new("https://b", "super-secret", "d");
        let debug = format!("{creds:?}");
        assert!(!debug.contains("super-secret"));
        assert!(debug.contains("******"));
    }
}
