//! Action enum definition.

use crossterm::event::{KeyEvent, MouseEvent};
use savesearch_client::{ClientError, SaveSearchRequest, SavedSearchCreated};
use std::sync::Arc;

/// Unified action type for the TUI event loop.
///
/// Errors are wrapped in `Arc` so the enum stays `Clone`.
#[derive(Debug, Clone)]
pub enum Action {
    /// Exit the application.
    Quit,
    /// Raw keyboard input (press events only).
    Input(KeyEvent),
    /// Raw mouse input.
    Mouse(MouseEvent),
    /// Terminal resized to (width, height).
    Resize(u16, u16),
    /// Persist the given search. Emitted by the modal, executed by side effects.
    SaveSearch(SaveSearchRequest),
    /// Outcome of a `SaveSearch`.
    SearchSaved(Result<SavedSearchCreated, Arc<ClientError>>),
    /// Posted by the parent `on_save` callback after a successful save.
    SavedSearchRecorded(SavedSearchCreated),
    /// A save started (`true`) or finished (`false`).
    Loading(bool),
}
