//! Builder basics: defaults, overrides and base URL normalization.

use crate::constants::{DEFAULT_MAX_RETRIES, DEFAULT_TIMEOUT_SECS};
use crate::loader::builder::ConfigLoader;
use crate::loader::error::ConfigError;
use secrecy::ExposeSecret;
use std::path::PathBuf;
use std::time::Duration;

#[test]
fn test_build_with_defaults() {
    let config = ConfigLoader::new()
        .with_base_url("https://localhost:8089".to_string())
        .build()
        .unwrap();

    assert_eq!(config.connection.base_url, "https://localhost:8089");
    assert_eq!(
        config.connection.timeout,
        Duration::from_secs(DEFAULT_TIMEOUT_SECS)
    );
    assert_eq!(config.connection.max_retries, DEFAULT_MAX_RETRIES);
    assert!(!config.connection.skip_verify);
    assert!(config.auth.api_token.is_none());
    assert!(config.messages_path.is_none());
}

#[test]
fn test_build_with_all_overrides() {
    let config = ConfigLoader::new()
        .with_base_url("http://search.example.com:8000".to_string())
        .with_api_token("faketoken".to_string())
        .with_skip_verify(true)
        .with_timeout(Duration::from_secs(5))
        .with_max_retries(0)
        .with_messages_path(PathBuf::from("/tmp/messages.json"))
        .build()
        .unwrap();

    assert_eq!(config.connection.base_url, "http://search.example.com:8000");
    assert_eq!(
        config.auth.api_token.as_ref().map(|t| t.expose_secret()),
        Some("faketoken")
    );
    assert!(config.connection.skip_verify);
    assert_eq!(config.connection.timeout, Duration::from_secs(5));
    assert_eq!(config.connection.max_retries, 0);
    assert_eq!(
        config.messages_path,
        Some(PathBuf::from("/tmp/messages.json"))
    );
}

#[test]
fn test_missing_base_url() {
    let result = ConfigLoader::new().build();
    assert!(matches!(result, Err(ConfigError::MissingBaseUrl)));
}

#[test]
fn test_blank_base_url_is_missing() {
    let result = ConfigLoader::new()
        .with_base_url("   ".to_string())
        .build();
    assert!(matches!(result, Err(ConfigError::MissingBaseUrl)));
}

#[test]
fn test_base_url_trailing_slash_stripped() {
    let config = ConfigLoader::new()
        .with_base_url(" https://localhost:8089/ ".to_string())
        .build()
        .unwrap();
    assert_eq!(config.connection.base_url, "https://localhost:8089");
}

#[test]
fn test_base_url_rejects_other_schemes() {
    let result = ConfigLoader::new()
        .with_base_url("ftp://localhost".to_string())
        .build();
    match result {
        Err(ConfigError::InvalidValue { var, message }) => {
            assert_eq!(var, "base_url");
            assert!(message.contains("scheme"), "unexpected message: {message}");
        }
        other => panic!("Expected InvalidValue, got {:?}", other),
    }
}

#[test]
fn test_base_url_rejects_relative() {
    let result = ConfigLoader::new()
        .with_base_url("localhost:8089/path".to_string())
        .build();
    assert!(matches!(result, Err(ConfigError::InvalidValue { .. })));
}
