#![allow(clippy::unwrap_used)]
//! Configuration contract tests.
//!
//! Verifies resolution precedence (settings file over built-in fallbacks),
//! base-URL normalization, and settings-file round-trips.

use serial_test::serial;
use tempfile::TempDir;

use tcheck_cli::config::{
    AiSettings, Configuration, DEFAULT_TIMEOUT_SECS, DefaultsSettings, FALLBACK_BASE_URL,
    FALLBACK_MODEL, SettingsFile, SettingsManager, normalize_base_url,
};

#[test]
fn unset_settings_resolve_to_transport_fallbacks() {
    let config = Configuration::resolve(&AiSettings::default());

    assert_eq!(config.base_url, FALLBACK_BASE_URL);
    assert_eq!(config.api_key, "");
    assert_eq!(config.model, FALLBACK_MODEL);
    assert_eq!(config.timeout_secs, DEFAULT_TIMEOUT_SECS);
}

#[test]
fn explicit_settings_win_over_fallbacks() {
    let settings = AiSettings {
        api_key: Some("sk-test".to_string()),
        base_url: Some("http://localhost:1234/v1".to_string()),
        model: Some("my-model".to_string()),
        timeout_secs: Some(30),
    };

    let config = Configuration::resolve(&settings);

    assert_eq!(config.base_url, "http://localhost:1234/v1");
    assert_eq!(config.api_key, "sk-test");
    assert_eq!(config.model, "my-model");
    assert_eq!(config.timeout_secs, 30);
}

#[test]
fn pasted_completion_endpoints_are_repaired() {
    assert_eq!(
        normalize_base_url("http://x/v1/chat/completions/"),
        "http://x/v1"
    );
    assert_eq!(normalize_base_url("http://x/v1/completions"), "http://x/v1");
    assert_eq!(normalize_base_url("http://x/v1/v1"), "http://x/v1");
}

#[test]
fn normalization_is_idempotent() {
    let raw = "http://x/v1/chat/completions/";
    let once = normalize_base_url(raw);
    assert_eq!(once, "http://x/v1");
    assert_eq!(normalize_base_url(&once), "http://x/v1");
}

#[test]
#[serial]
fn settings_round_trip_through_manager() {
    let temp_dir = TempDir::new().unwrap();
    let original = std::env::var("XDG_CONFIG_HOME").ok();
    unsafe { std::env::set_var("XDG_CONFIG_HOME", temp_dir.path()) };

    let manager = SettingsManager::new().unwrap();

    // Fresh environment: defaults, no error
    let settings = manager.load_or_default();
    assert!(settings.ai.api_key.is_none());

    let settings = SettingsFile {
        ai: AiSettings {
            api_key: Some("sk-test".to_string()),
            base_url: Some("http://localhost:1234/v1".to_string()),
            ..AiSettings::default()
        },
        defaults: DefaultsSettings {
            mode: Some("paraphrase".to_string()),
            ..DefaultsSettings::default()
        },
    };

    manager.save(&settings).unwrap();

    let reloaded = manager.load().unwrap();
    assert_eq!(reloaded.ai.api_key, Some("sk-test".to_string()));
    assert_eq!(
        reloaded.ai.base_url,
        Some("http://localhost:1234/v1".to_string())
    );
    assert_eq!(reloaded.defaults.mode, Some("paraphrase".to_string()));

    if let Some(val) = original {
        unsafe { std::env::set_var("XDG_CONFIG_HOME", val) };
    } else {
        unsafe { std::env::remove_var("XDG_CONFIG_HOME") };
    }
}

#[test]
#[serial]
fn resolution_reflects_saved_settings() {
    let temp_dir = TempDir::new().unwrap();
    let original = std::env::var("XDG_CONFIG_HOME").ok();
    unsafe { std::env::set_var("XDG_CONFIG_HOME", temp_dir.path()) };

    let manager = SettingsManager::new().unwrap();

    // A pasted full endpoint is normalized at resolution time
    let settings = SettingsFile {
        ai: AiSettings {
            base_url: Some("http://localhost:1234/v1/chat/completions".to_string()),
            ..AiSettings::default()
        },
        ..SettingsFile::default()
    };
    manager.save(&settings).unwrap();

    let config = Configuration::resolve(&manager.load_or_default().ai);
    assert_eq!(config.base_url, "http://localhost:1234/v1");
    assert!(config.is_loopback());
    assert!(!config.missing_credentials());

    if let Some(val) = original {
        unsafe { std::env::set_var("XDG_CONFIG_HOME", val) };
    } else {
        unsafe { std::env::remove_var("XDG_CONFIG_HOME") };
    }
}
