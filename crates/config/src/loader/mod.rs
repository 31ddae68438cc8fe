//! Configuration loader for environment variables and `.env` files.
//!
//! Responsibilities:
//! - Load configuration from `.env` files, environment variables and builder overrides.
//! - Enforce the `DOTENV_DISABLED` gate to prevent accidental dotenv loading in tests.
//!
//! Invariants / Assumptions:
//! - Builder overrides applied after `from_env()` win over environment variables.
//! - `load_dotenv()` must be called explicitly to enable `.env` file loading.

mod builder;
mod env;
mod error;

#[cfg(test)]
mod tests;

pub use builder::ConfigLoader;
pub use env::{
    ENV_API_TOKEN, ENV_BASE_URL, ENV_MAX_RETRIES, ENV_MESSAGES_PATH, ENV_SKIP_VERIFY,
    ENV_TIMEOUT, env_var_or_none,
};
pub use error::ConfigError;
