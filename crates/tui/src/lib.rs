//! Save Search TUI library.
//!
//! Application state, the save-search dialog, rendering and the async
//! runtime that performs saves.
//!
//! # Example
//!
//! ```rust
//! use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
//! use savesearch_config::Messages;
//! use savesearch_tui::{Action, App, ConnectionContext};
//!
//! let mut app = App::new(ConnectionContext::default(), Messages::new(), None);
//! let action = app.handle_input(KeyEvent::new(KeyCode::Char('q'), KeyModifiers::CONTROL));
//! assert!(matches!(action, Some(Action::Quit)));
//! ```

pub mod action;
pub mod app;
pub mod cli;
pub mod runtime;
pub mod ui;

// Re-export commonly used types at the crate root
pub use action::{Action, RedactedAction};
pub use app::{App, ConnectionContext, ModalVisibility, SaveSearchModal, SubmissionState};
pub use ui::popup::ModalField;
