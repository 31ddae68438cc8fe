//! Configuration management for the save-search TUI.
//!
//! This crate provides the connection/auth configuration loader, the
//! runtime color theme and the localizable message catalog.

pub mod constants;
mod loader;
pub mod messages;
pub mod types;

pub use loader::{
    ConfigError, ConfigLoader, ENV_API_TOKEN, ENV_BASE_URL, ENV_MAX_RETRIES, ENV_MESSAGES_PATH,
    ENV_SKIP_VERIFY, ENV_TIMEOUT, env_var_or_none,
};
pub use messages::{MessageKey, Messages};
pub use types::{AuthConfig, Config, ConnectionConfig, Theme};
