//! Command-line argument parsing for savesearch-tui.
//!
//! Responsibilities:
//! - Define CLI argument structure using clap derive macros.
//!
//! Does NOT handle:
//! - Configuration loading or validation (see `runtime::config`).
//! - Environment variable parsing (handled by `savesearch_config`).
//!
//! Invariants:
//! - CLI arguments are parsed once at startup via `Cli::parse()`.

use clap::Parser;
use std::path::PathBuf;

/// Command-line arguments for savesearch-tui.
///
/// Configuration precedence (highest to lowest):
/// 1. CLI arguments (e.g., --base-url, --messages)
/// 2. Environment variables (e.g., SAVESEARCH_BASE_URL)
/// 3. `.env` file
/// 4. Default values
#[derive(Debug, Parser)]
#[command(
    name = "savesearch-tui",
    about = "Name and save search queries from the terminal",
    version,
    after_help = "Examples:\n  savesearch-tui --base-url https://localhost:8089\n  savesearch-tui --messages ./messages.fr.json\n  savesearch-tui --log-dir /var/log/savesearch --no-mouse\n"
)]
pub struct Cli {
    /// Base URL of the server (overrides SAVESEARCH_BASE_URL)
    #[arg(long)]
    pub base_url: Option<String>,

    /// JSON message catalog overriding the built-in strings
    #[arg(long, value_name = "FILE")]
    pub messages: Option<PathBuf>,

    /// Directory for log files
    #[arg(long, default_value = "logs")]
    pub log_dir: PathBuf,

    /// Disable mouse support
    #[arg(long)]
    pub no_mouse: bool,

    /// Enable Prometheus metrics endpoint and bind address (e.g., "127.0.0.1:9090")
    #[arg(long, env = "SAVESEARCH_METRICS_BIND")]
    pub metrics_bind: Option<String>,
}
