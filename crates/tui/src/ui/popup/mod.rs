//! Modal dialog rendering.
//!
//! Responsibilities:
//! - Lay out and draw the save-search dialog over the content area.
//! - Report the screen regions of its controls for mouse hit-testing.
//!
//! Does NOT handle:
//! - Dialog state transitions (see `app::save_search`).
//! - Input handling (see `app::popups`).

mod render;
mod save_search_field;

pub use render::{ModalHitAreas, render_save_search_modal};
pub use save_search_field::ModalField;

/// Dialog width as a percentage of the available area.
pub const POPUP_WIDTH_PERCENT: u16 = 60;

/// Dialog height in rows, borders included.
pub const POPUP_HEIGHT_ROWS: u16 = 10;
