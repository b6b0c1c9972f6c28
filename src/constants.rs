//! Application-wide constants.
//!
//! This module defines constants used throughout the application,
//! including the application name and environment variable names.

/// The display name of the application (human-readable, with proper capitalization).
pub const APP_NAME: &str = "StyleDeck";

/// The binary name of the application (used in command examples).
pub const APP_BINARY_NAME: &str = "styledeck";

/// Directory name under the platform config directory.
pub const CONFIG_DIR_NAME: &str = "StyleDeck";

/// Overrides the config directory (used by tests and portable installs).
pub const CONFIG_DIR_ENV: &str = "STYLEDECK_CONFIG_DIR";

/// Environment variable holding the bridge base URL.
pub const ENV_BASE_URL: &str = "STYLEDECK_BASE_URL";

/// Environment variable holding the bridge auth token.
pub const ENV_AUTH_TOKEN: &str = "STYLEDECK_AUTH_TOKEN";

/// Environment variable holding the device code.
pub const ENV_DEVICE_CODE: &str = "STYLEDECK_DEVICE_CODE";
