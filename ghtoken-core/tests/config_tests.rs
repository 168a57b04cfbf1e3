//! Unit tests for configuration parsing and validation

use ghtoken_core::config::toml_config::{load_config_from_path, resolve_token_path};
use ghtoken_core::config::{Config, GithubConfig, TokenConfig, DEFAULT_NOTE};
use ghtoken_core::error::{ConfigError, GhTokenError};
use std::path::PathBuf;
use tempfile::tempdir;

#[test]
fn test_default_config() {
    let config = Config::default();
    assert_eq!(config.github.api_root, "https://api.github.com");
    assert_eq!(config.github.timeout, 30);
    assert_eq!(config.token.note, DEFAULT_NOTE);
    assert_eq!(config.token.scopes, vec!["repo"]);
    assert!(config.token.path.is_none());
    assert!(config.validate().is_ok());
}

#[test]
fn test_empty_file_uses_defaults() {
    let config: Config = toml::from_str("").unwrap();
    assert_eq!(config, Config::default());
}

#[test]
fn test_parse_complete_config() {
    let toml_str = r#"
        [github]
        api_root = "https://ghe.example.com/api/v3"
        timeout = 10

        [token]
        path = "/var/lib/me/token.json"
        note = "my-app"
        scopes = ["repo", "read:org"]
    "#;

    let config: Config = toml::from_str(toml_str).unwrap();

    assert_eq!(config.github.api_root, "https://ghe.example.com/api/v3");
    assert_eq!(config.github.timeout, 10);
    assert_eq!(config.token.path, Some(PathBuf::from("/var/lib/me/token.json")));
    assert_eq!(config.token.note, "my-app");
    assert_eq!(config.token.scopes, vec!["repo", "read:org"]);
}

#[test]
fn test_partial_section_fills_defaults() {
    let config: Config = toml::from_str("[token]\nnote = \"my-app\"\n").unwrap();

    assert_eq!(config.token.note, "my-app");
    assert_eq!(config.token.scopes, vec!["repo"]);
    assert_eq!(config.github, GithubConfig::default());
}

#[test]
fn test_empty_scopes_are_allowed() {
    let config: Config = toml::from_str("[token]\nscopes = []\n").unwrap();
    assert!(config.token.scopes.is_empty());
    assert!(config.validate().is_ok());
}

#[test]
fn test_empty_note_is_invalid() {
    let token = TokenConfig {
        note: "".to_string(),
        ..TokenConfig::default()
    };
    assert_eq!(token.validate().unwrap_err(), "Note cannot be empty");
}

#[test]
fn test_zero_timeout_is_invalid() {
    let github = GithubConfig {
        timeout: 0,
        ..GithubConfig::default()
    };
    assert_eq!(github.validate().unwrap_err(), "Timeout cannot be zero");
}

#[test]
fn test_non_http_api_root_is_invalid() {
    let github = GithubConfig {
        api_root: "ftp://api.github.com".to_string(),
        ..GithubConfig::default()
    };
    assert!(github.validate().is_err());

    let github = GithubConfig {
        api_root: "api.github.com".to_string(),
        ..GithubConfig::default()
    };
    assert!(github.validate().is_err());
}

#[test]
fn test_load_missing_file_fails() {
    let temp_dir = tempdir().unwrap();
    let err = load_config_from_path(temp_dir.path().join("config.toml")).unwrap_err();
    assert!(matches!(err, GhTokenError::Config(ConfigError::LoadFailed { .. })));
}

#[test]
fn test_load_malformed_file_fails() {
    let temp_dir = tempdir().unwrap();
    let path = temp_dir.path().join("config.toml");
    std::fs::write(&path, "[github\napi_root = ").unwrap();

    let err = load_config_from_path(&path).unwrap_err();
    assert!(matches!(err, GhTokenError::Config(ConfigError::Parse { .. })));
}

#[test]
fn test_load_invalid_values_fails_validation() {
    let temp_dir = tempdir().unwrap();
    let path = temp_dir.path().join("config.toml");
    std::fs::write(&path, "[github]\ntimeout = 0\n").unwrap();

    let err = load_config_from_path(&path).unwrap_err();
    assert!(matches!(err, GhTokenError::Config(ConfigError::ValidationError { .. })));
}

#[test]
fn test_explicit_token_path_is_used() {
    let token = TokenConfig {
        path: Some(PathBuf::from("relative/token.json")),
        ..TokenConfig::default()
    };
    assert_eq!(resolve_token_path(&token).unwrap(), PathBuf::from("relative/token.json"));
}
