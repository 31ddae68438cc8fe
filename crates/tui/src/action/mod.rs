//! Action protocol for async TUI event handling.
//!
//! Actions represent both user inputs and async save results. They flow
//! through a bounded `tokio::sync::mpsc` channel into the main loop.
//!
//! # Security Note
//!
//! When logging Actions, use `RedactedAction(&action)` instead of `?action`
//! so search queries and names are not written to log files.

pub mod redaction;
pub mod variants;

pub use redaction::RedactedAction;
pub use variants::Action;
