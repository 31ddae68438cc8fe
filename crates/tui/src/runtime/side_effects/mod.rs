//! Async side effect handlers for TUI actions.
//!
//! Responsibilities:
//! - Run saves triggered by the dialog without blocking the UI.
//! - Send results back via the action channel for state updates.
//!
//! Does NOT handle:
//! - Direct application state modification (sends actions to do that).
//! - UI rendering or terminal management.
//!
//! Invariants:
//! - Every save runs in its own tokio task.
//! - Every `Loading(true)` is followed by exactly one `SearchSaved`.
//! - The session is read when the save starts, not when the dialog opened.

mod dispatcher;
mod searches;
mod types;

pub use dispatcher::handle_side_effects;
pub use types::{SharedOperation, SharedSession, SideEffectContext};
