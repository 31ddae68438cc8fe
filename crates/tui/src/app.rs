//! Application state and rendering.
//!
//! The module is organized into submodules:
//! - `save_search`: the save-search dialog state machine
//! - `actions`: applying async results to state
//! - `input`: keyboard handling for the main screen
//! - `popups`: keyboard handling inside the dialog
//! - `mouse`: mouse hit-testing
//! - `render`: frame layout and drawing

pub mod save_search;

mod actions;
mod input;
mod mouse;
mod popups;
mod render;

pub use save_search::{
    HIDDEN_CLASS, ModalVisibility, OnSave, SaveSearchModal, SubmissionState, ValidationError,
};

use ratatui::layout::Rect;
use savesearch_client::SavedSearchCreated;
use savesearch_config::{Messages, Theme};

use crate::ui::popup::ModalHitAreas;

/// Height of the header row.
pub const HEADER_HEIGHT: u16 = 1;

/// Height of the footer row.
pub const FOOTER_HEIGHT: u16 = 1;

/// Connection details shown in the header.
#[derive(Debug, Clone, Default)]
pub struct ConnectionContext {
    /// Base URL of the server
    pub base_url: String,
    /// Whether a session token is configured
    pub signed_in: bool,
}

/// Main application state.
pub struct App {
    pub save_search: SaveSearchModal,
    /// The search query the dialog saves.
    pub search_input: String,
    /// Searches saved during this session, newest last.
    pub saved_searches: Vec<SavedSearchCreated>,
    pub loading: bool,
    /// Display text of the most recent save failure.
    pub last_error: Option<String>,
    pub messages: Messages,
    pub theme: Theme,
    pub connection: ConnectionContext,
    pub mouse_enabled: bool,

    // Layout captured during the last render, used for mouse hit-testing.
    pub last_area: Rect,
    pub(crate) toggle_area: Rect,
    pub(crate) modal_hits: Option<ModalHitAreas>,
}

impl App {
    /// Create the application.
    ///
    /// `on_save` is invoked once for every search the dialog saves successfully.
    pub fn new(connection: ConnectionContext, messages: Messages, on_save: Option<OnSave>) -> Self {
        Self {
            save_search: SaveSearchModal::new(on_save),
            search_input: String::new(),
            saved_searches: Vec::new(),
            loading: false,
            last_error: None,
            messages,
            theme: Theme::default(),
            connection,
            mouse_enabled: true,
            last_area: Rect::default(),
            toggle_area: Rect::default(),
            modal_hits: None,
        }
    }

    /// Screen region of the toggle control from the last render.
    pub fn toggle_area(&self) -> Rect {
        self.toggle_area
    }

    /// Screen regions of the dialog controls from the last render, if shown.
    pub fn modal_hit_areas(&self) -> Option<ModalHitAreas> {
        self.modal_hits
    }
}
