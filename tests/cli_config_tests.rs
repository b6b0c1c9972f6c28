//! End-to-end tests for `styledeck config` commands.

use std::fs;

use styledeck::config::{Config, ProviderMode, ThemeMode};

mod fixtures;
use fixtures::*;

// ============================================================================
// Show Command Tests
// ============================================================================

#[test]
fn test_config_show_default() {
    let dir = temp_config_dir();
    let output = isolated_command(&["config", "show"], dir.path())
        .output()
        .expect("Failed to execute command");

    assert_eq!(
        output.status.code(),
        Some(0),
        "Show config should succeed. stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("StyleDeck Configuration"));
    assert!(stdout.contains("/api/device/config"));
    assert!(stdout.contains("(not configured)"));
}

#[test]
fn test_config_show_json_format() {
    let dir = temp_config_dir();
    let output = isolated_command(&["config", "show", "--json"], dir.path())
        .output()
        .expect("Failed to execute command");

    assert_eq!(output.status.code(), Some(0));

    let json: serde_json::Value =
        serde_json::from_slice(&output.stdout).expect("Output should be valid JSON");
    assert_eq!(json["provider"]["mode"], "mock");
    assert_eq!(json["provider"]["mock_delay_ms"], 800);
    assert_eq!(json["bridge"]["timeout_secs"], 15);
    assert_eq!(json["bridge"]["auth_token_set"], false);
    assert_eq!(json["ui"]["theme"], "auto");
}

#[test]
fn test_config_show_never_prints_token() {
    let dir = temp_config_dir();
    let mut config = Config::new();
    config.bridge.auth_token = Some("super-secret-token".to_string());
    config.save_to(&dir.path().join("config.toml")).unwrap();

    for args in [&["config", "show"][..], &["config", "show", "--json"][..]] {
        let output = isolated_command(args, dir.path())
            .output()
            .expect("Failed to execute command");
        assert_eq!(output.status.code(), Some(0));
        assert!(!String::from_utf8_lossy(&output.stdout).contains("super-secret-token"));
    }

    let output = isolated_command(&["config", "show", "--json"], dir.path())
        .output()
        .unwrap();
    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["bridge"]["auth_token_set"], true);
}

// ============================================================================
// Set Command Tests
// ============================================================================

#[test]
fn test_config_set_persists_values() {
    let dir = temp_config_dir();
    let output = isolated_command(
        &[
            "config",
            "set",
            "--bridge-url",
            "https://bridge.example.com",
            "--device",
            "booth-7",
            "--provider",
            "http",
            "--theme",
            "dark",
            "--mock-latency-ms",
            "50",
        ],
        dir.path(),
    )
    .output()
    .expect("Failed to execute command");

    assert_eq!(
        output.status.code(),
        Some(0),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    assert!(String::from_utf8_lossy(&output.stdout).contains("Configuration updated successfully"));

    let config = Config::load_from(&dir.path().join("config.toml")).unwrap();
    assert_eq!(
        config.bridge.base_url.as_deref(),
        Some("https://bridge.example.com")
    );
    assert_eq!(config.bridge.device_code.as_deref(), Some("booth-7"));
    assert_eq!(config.provider.mode, ProviderMode::Http);
    assert_eq!(config.provider.mock_delay_ms, 50);
    assert_eq!(config.ui.theme_mode, ThemeMode::Dark);
}

#[test]
fn test_config_set_keeps_unrelated_values() {
    let dir = temp_config_dir();
    let mut config = write_config(dir.path(), ProviderMode::Http);
    config.bridge.device_code = Some("booth-1".to_string());
    config.save_to(&dir.path().join("config.toml")).unwrap();

    let output = isolated_command(&["config", "set", "--theme", "light"], dir.path())
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(0));

    let config = Config::load_from(&dir.path().join("config.toml")).unwrap();
    assert_eq!(config.ui.theme_mode, ThemeMode::Light);
    assert_eq!(config.provider.mode, ProviderMode::Http);
    assert_eq!(config.bridge.device_code.as_deref(), Some("booth-1"));
}

#[test]
fn test_config_set_requires_an_option() {
    let dir = temp_config_dir();
    let output = isolated_command(&["config", "set"], dir.path())
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stderr).contains("At least one"));
}

#[test]
fn test_config_set_rejects_invalid_values() {
    let dir = temp_config_dir();
    for args in [
        &["config", "set", "--provider", "carrier-pigeon"][..],
        &["config", "set", "--theme", "sepia"][..],
        &["config", "set", "--bridge-url", "not a url"][..],
    ] {
        let output = isolated_command(args, dir.path()).output().unwrap();
        assert_eq!(output.status.code(), Some(1), "{args:?} should fail");
    }

    // Nothing was written
    assert!(!dir.path().join("config.toml").exists());
}

#[test]
fn test_config_show_reports_invalid_file() {
    let dir = temp_config_dir();
    fs::write(dir.path().join("config.toml"), "this is [not toml").unwrap();

    let output = isolated_command(&["config", "show", "--json"], dir.path())
        .output()
        .unwrap();

    // `config show` reports the parse failure as a validation error
    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stderr).contains("Failed to load configuration"));
}
