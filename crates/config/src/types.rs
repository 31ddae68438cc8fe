//! Configuration types for the save-search TUI.
//!
//! Responsibilities:
//! - Define connection settings (URL, TLS verification, timeout, retries).
//! - Define auth settings (optional API token).
//! - Define the top-level `Config` combining both plus the message catalog path.
//!
//! Does NOT handle:
//! - Loading from env or `.env` files (see `loader` module).
//! - Network connections (see client crate).
//!
//! Invariants:
//! - `AuthConfig::api_token` is `None` when the user is unauthenticated; this is
//!   a valid configuration, not an error.
//! - Secrets are held as `SecretString` and never appear in `Debug` output.

mod theme;

pub use theme::Theme;

use crate::constants::{DEFAULT_MAX_RETRIES, DEFAULT_TIMEOUT_SECS};
use secrecy::SecretString;
use std::path::PathBuf;
use std::time::Duration;

/// Connection configuration for the saved-search service.
#[derive(Debug, Clone)]
pub struct ConnectionConfig {
    /// Base URL of the server (e.g., https://localhost:8089), no trailing slash
    pub base_url: String,
    /// Whether to skip TLS verification (for self-signed certificates)
    pub skip_verify: bool,
    /// Request timeout
    pub timeout: Duration,
    /// Maximum number of retries for rate-limited requests
    pub max_retries: usize,
}

impl Default for ConnectionConfig {
    fn default() -> Self {
        Self {
            base_url: "https://localhost:8089".to_string(),
            skip_verify: false,
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            max_retries: DEFAULT_MAX_RETRIES,
        }
    }
}

/// Authentication configuration.
#[derive(Debug, Clone, Default)]
pub struct AuthConfig {
    /// Bearer token used for saving searches. `None` means unauthenticated.
    pub api_token: Option<SecretString>,
}

/// Fully resolved configuration.
#[derive(Debug, Clone, Default)]
pub struct Config {
    pub connection: ConnectionConfig,
    pub auth: AuthConfig,
    /// Optional JSON message catalog overriding the built-in strings.
    pub messages_path: Option<PathBuf>,
}

impl Config {
    /// Convenience constructor used by tests and tooling.
    pub fn with_api_token(base_url: impl Into<String>, token: impl Into<String>) -> Self {
        Self {
            connection: ConnectionConfig {
                base_url: base_url.into(),
                ..ConnectionConfig::default()
            },
            auth: AuthConfig {
                api_token: Some(SecretString::new(token.into().into())),
            },
            messages_path: None,
        }
    }
}
