//! Popup input handling.

mod save_search;
