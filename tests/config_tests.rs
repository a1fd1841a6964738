// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

use std::time::Duration;

use tempfile::TempDir;
use tutor::config::Settings;
use tutor::TutorError;

#[test]
fn test_settings_default_values() {
    let settings = Settings::default();
    assert_eq!(settings.service.endpoint, "http://localhost:8000");
    assert!(settings.service.request_timeout().is_none());
    assert_eq!(settings.ui.history_size, 100);
    assert_eq!(settings.ui.tick_ms, 50);
}

#[test]
fn test_settings_save_and_load_round_trip() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("nested").join("settings.json");

    let mut settings = Settings::default();
    settings.service.endpoint = "https://tutor.example.com".to_string();
    settings.service.request_timeout_secs = Some(15);
    settings.ui.history_size = 10;

    settings.save_to(&path).unwrap();
    assert!(path.exists());

    let loaded = Settings::load_from(&path).unwrap();
    assert_eq!(loaded, settings);
    assert_eq!(
        loaded.service.request_timeout(),
        Some(Duration::from_secs(15))
    );
}

#[test]
fn test_settings_missing_file_yields_defaults() {
    let temp_dir = TempDir::new().unwrap();
    let loaded = Settings::load_from(&temp_dir.path().join("absent.json")).unwrap();
    assert_eq!(loaded, Settings::default());
}

#[test]
fn test_settings_malformed_file_is_json_error() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("settings.json");
    std::fs::write(&path, "{ not json").unwrap();

    let err = Settings::load_from(&path).unwrap_err();
    assert!(matches!(err, TutorError::Json(_)));
}

#[test]
fn test_settings_partial_file_fills_defaults() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("settings.json");
    std::fs::write(&path, r#"{"ui": {"tick_ms": 20}}"#).unwrap();

    let loaded = Settings::load_from(&path).unwrap();
    assert_eq!(loaded.ui.tick_ms, 20);
    assert_eq!(loaded.ui.history_size, 100);
    assert_eq!(loaded.service.endpoint, "http://localhost:8000");
}

#[test]
fn test_endpoint_precedence() {
    let mut settings = Settings::default();
    settings.service.endpoint = "http://file:1".to_string();

    assert_eq!(
        settings.endpoint_with_overrides(None, None).unwrap(),
        "http://file:1"
    );
    assert_eq!(
        settings
            .endpoint_with_overrides(None, Some("http://env:2"))
            .unwrap(),
        "http://env:2"
    );
    assert_eq!(
        settings
            .endpoint_with_overrides(Some("http://cli:3/"), Some("http://env:2"))
            .unwrap(),
        "http://cli:3"
    );
}

#[test]
fn test_invalid_file_endpoint_is_config_error() {
    let mut settings = Settings::default();
    settings.service.endpoint = "localhost:8000".to_string();
    let err = settings.endpoint_with_overrides(None, None).unwrap_err();
    assert!(matches!(err, TutorError::Config(_)));
}
