//! UI widgets for the save-search TUI.

pub mod popup;
