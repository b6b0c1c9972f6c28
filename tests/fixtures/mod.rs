//! Shared test fixtures for catalog, provider and CLI tests.
#![allow(dead_code)] // Not every test binary uses every fixture

use std::path::Path;
use std::process::Command;
use std::sync::Arc;

use styledeck::catalog::CatalogIndex;
use styledeck::config::{Config, ProviderMode};
use styledeck::models::{DeviceConfigResponse, StyleCategory, StyleItem};
use tempfile::TempDir;

/// Environment variables that would leak real credentials into a test run.
pub const CREDENTIAL_ENV: [&str; 3] = [
    "STYLEDECK_BASE_URL",
    "STYLEDECK_AUTH_TOKEN",
    "STYLEDECK_DEVICE_CODE",
];

/// Creates a style with a name and price (in cents).
pub fn style(id: &str, name: Option<&str>, price: Option<u32>) -> StyleItem {
    StyleItem {
        id: id.to_string(),
        style_name: name.map(str::to_string),
        price,
        resolution: Some("1920x1080".to_string()),
        ..StyleItem::default()
    }
}

/// Creates a category with the given styles.
pub fn category(id: &str, name: &str, styles: Vec<StyleItem>) -> StyleCategory {
    StyleCategory {
        id: id.to_string(),
        cat_name: name.to_string(),
        lst_style: styles,
        ..StyleCategory::default()
    }
}

/// Three categories: one with an unnamed item, one empty, one small.
///
/// `portrait` reuses the ID `s1` from `classic` on purpose.
pub fn sample_catalog() -> DeviceConfigResponse {
    DeviceConfigResponse::new(vec![
        category(
            "classic",
            "Classic",
            vec![
                style("s1", Some("Vintage Film"), Some(0)),
                style("s2", Some("Film Noir"), Some(150)),
                style("s3", None, Some(299)),
                style("s4", Some("Pastel Dream"), None),
            ],
        ),
        category("empty", "Empty", Vec::new()),
        category(
            "portrait",
            "Portrait",
            vec![
                style("s1", Some("Soft Light"), Some(500)),
                style("p2", Some("Studio FILM"), Some(0)),
            ],
        ),
    ])
}

/// Index over [`sample_catalog`].
pub fn sample_index() -> CatalogIndex {
    CatalogIndex::new(Arc::new(sample_catalog()))
}

/// Wire JSON for [`sample_catalog`] wrapped in the bridge envelope.
pub fn envelope_json() -> String {
    serde_json::json!({ "ok": true, "value": sample_catalog() }).to_string()
}

/// Creates an empty config directory.
pub fn temp_config_dir() -> TempDir {
    TempDir::new().expect("Failed to create temp dir")
}

/// Writes a config file with the given provider mode into `dir`.
pub fn write_config(dir: &Path, mode: ProviderMode) -> Config {
    let mut config = Config::new();
    config.provider.mode = mode;
    config.provider.mock_delay_ms = 0;
    config
        .save_to(&dir.join("config.toml"))
        .expect("Failed to write config");
    config
}

/// Path to the styledeck binary.
pub fn styledeck_bin() -> String {
    std::env::var("CARGO_BIN_EXE_styledeck")
        .unwrap_or_else(|_| "target/release/styledeck".to_string())
}

/// Creates a Command with an isolated config directory and no credentials
/// inherited from the environment.
pub fn isolated_command(args: &[&str], config_dir: &Path) -> Command {
    let mut cmd = Command::new(styledeck_bin());
    cmd.env("STYLEDECK_CONFIG_DIR", config_dir);
    for key in CREDENTIAL_ENV {
        cmd.env_remove(key);
    }
    cmd.env_remove("RUST_LOG");
    cmd.args(args);
    cmd
}

/// Same as [`isolated_command`], with the instant mock catalog and
/// development credentials enabled.
pub fn mock_command(args: &[&str], config_dir: &Path) -> Command {
    let mut full = vec!["--mock", "--mock-delay-ms", "0", "--dev-credentials"];
    full.extend_from_slice(args);
    isolated_command(&full, config_dir)
}
