//! Tests for TOML config loading, creation, and path resolution.

use super::*;
use crate::schema::LogLevel;
use std::path::Path;

#[test]
fn load_from_nonexistent_returns_file_not_found() {
    let result = load_from_path(Path::new("/tmp/nonexistent_showroom_config.toml"));
    let err = result.unwrap_err();
    assert!(matches!(err, showroom_common::ConfigError::FileNotFound(_)));
}

#[test]
fn load_or_default_tolerates_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let config = load_or_default(&dir.path().join("absent.toml")).unwrap();
    assert_eq!(config.server.port, 8888);
    assert!(!dir.path().join("absent.toml").exists());
}

#[test]
fn load_valid_partial_toml() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("showroom.toml");
    std::fs::write(
        &path,
        r#"
[server]
port = 9000

[catalog]
feed_url = "https://feeds.example.com/cars.xml"

[logging]
level = "debug"
"#,
    )
    .unwrap();

    let config = load_from_path(&path).unwrap();
    assert_eq!(config.server.port, 9000);
    assert_eq!(config.catalog.feed_url, "https://feeds.example.com/cars.xml");
    assert_eq!(config.logging.level, LogLevel::Debug);
    // Defaults preserved
    assert_eq!(config.server.chat_path, "/api/chat");
    assert_eq!(config.catalog.max_results, 4);
}

#[test]
fn load_invalid_toml_returns_parse_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("showroom.toml");
    std::fs::write(&path, "this is not valid toml {{{").unwrap();

    let err = load_or_default(&path).unwrap_err();
    assert!(matches!(err, showroom_common::ConfigError::ParseError(_)));
}

#[test]
fn create_and_load_default_config() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nested").join("showroom.toml");

    create_default_config(&path).unwrap();
    assert!(path.exists());

    let config = load_from_path(&path).unwrap();
    assert_eq!(config.assistant.budget_ms, 9500);
    assert_eq!(config.server.port, 8888);
}

#[test]
fn default_config_toml_is_valid() {
    let config: crate::schema::ShowroomConfig = toml::from_str(default_config_toml()).unwrap();
    assert_eq!(config.catalog.timeout_secs, 7);
}

#[test]
fn explicit_path_wins_resolution() {
    let path = resolve_config_path(Some(Path::new("/etc/showroom/prod.toml")));
    assert_eq!(path, Path::new("/etc/showroom/prod.toml"));
}
