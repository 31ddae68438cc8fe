//! Configuration loading for the TUI.
//!
//! Responsibilities:
//! - Load configuration with `.env`, environment and CLI overrides.
//! - Load the message catalog and pick a color theme.
//!
//! Invariants:
//! - Configuration precedence: CLI args > env vars > `.env` > defaults.
//! - A broken message catalog never prevents startup; built-in strings are used.

use anyhow::{Context, Result};
use savesearch_config::{Config, ConfigLoader, Messages, Theme};

use crate::cli::Cli;

/// Load configuration, applying CLI overrides last.
pub fn load_config(cli: &Cli) -> Result<Config> {
    let mut loader = ConfigLoader::new()
        .load_dotenv()
        .context("Failed to load .env file")?
        .from_env()
        .context("Failed to read environment configuration")?;

    if let Some(base_url) = &cli.base_url {
        loader = loader.with_base_url(base_url.clone());
    }
    if let Some(path) = &cli.messages {
        loader = loader.with_messages_path(path.clone());
    }

    loader.build().context("Invalid configuration")
}

/// Load the message catalog named by the configuration, if any.
pub fn load_messages(config: &Config) -> Messages {
    let Some(path) = &config.messages_path else {
        return Messages::new();
    };

    match Messages::from_file(path) {
        Ok(messages) => {
            tracing::info!(path = %path.display(), "Loaded message catalog");
            messages
        }
        Err(e) => {
            tracing::warn!("{}. Using built-in messages.", e);
            Messages::new()
        }
    }
}

/// Monochrome when `NO_COLOR` is set to a non-empty value.
pub fn select_theme() -> Theme {
    match std::env::var_os("NO_COLOR") {
        Some(v) if !v.is_empty() => Theme::monochrome(),
        _ => Theme::default(),
    }
}
