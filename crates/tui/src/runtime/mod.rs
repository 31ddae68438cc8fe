//! Runtime components for the TUI application.
//!
//! - Terminal management (TerminalGuard)
//! - Client creation
//! - Configuration and message catalog loading
//! - Async side effect handlers for saves
//!
//! Does NOT handle:
//! - UI rendering or input handling (see `savesearch_tui::app` and `savesearch_tui::ui`).
//!
//! Invariants:
//! - Side effects run in separate tokio tasks to avoid blocking the UI.

pub mod client;
pub mod config;
pub mod side_effects;
pub mod terminal;
