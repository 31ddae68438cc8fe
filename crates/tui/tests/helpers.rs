//! Test helpers for TUI testing.
//!
//! Keyboard/mouse event constructors, app fixtures and a TestBackend
//! renderer that returns the screen as text.

#![allow(dead_code)]

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use ratatui::{Terminal, backend::TestBackend, layout::Rect};
use savesearch_client::SavedSearchCreated;
use savesearch_config::Messages;
use savesearch_tui::{Action, App, ConnectionContext};
use std::sync::{Arc, Mutex};

/// Create a character key event.
pub fn key(c: char) -> KeyEvent {
    KeyEvent::new(KeyCode::Char(c), KeyModifiers::NONE)
}

/// Create a Ctrl+<c> key event.
pub fn ctrl_key(c: char) -> KeyEvent {
    KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL)
}

/// Create an Enter key event.
pub fn enter_key() -> KeyEvent {
    KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE)
}

/// Create an Escape key event.
pub fn esc_key() -> KeyEvent {
    KeyEvent::new(KeyCode::Esc, KeyModifiers::NONE)
}

/// Create a Tab key event.
pub fn tab_key() -> KeyEvent {
    KeyEvent::new(KeyCode::Tab, KeyModifiers::NONE)
}

/// Create a left-button press at the given cell.
pub fn left_click(column: u16, row: u16) -> MouseEvent {
    MouseEvent {
        kind: MouseEventKind::Down(MouseButton::Left),
        column,
        row,
        modifiers: KeyModifiers::NONE,
    }
}

/// Left click in the middle of `area`.
pub fn click_center(area: Rect) -> MouseEvent {
    left_click(area.x + area.width / 2, area.y + area.height / 2)
}

/// Feed every character of `text` to the app as key presses.
pub fn type_text(app: &mut App, text: &str) -> Vec<Action> {
    text.chars().filter_map(|c| app.handle_input(key(c))).collect()
}

/// App whose `on_save` callback records every saved search.
pub fn recording_app() -> (App, Arc<Mutex<Vec<SavedSearchCreated>>>) {
    let calls = Arc::new(Mutex::new(Vec::new()));
    let sink = calls.clone();
    let app = App::new(
        ConnectionContext {
            base_url: "http://localhost:8089".to_string(),
            signed_in: true,
        },
        Messages::keys(),
        Some(Box::new(move |created: &SavedSearchCreated| {
            sink.lock().unwrap().push(created.clone());
        })),
    );
    (app, calls)
}

pub fn test_terminal() -> Terminal<TestBackend> {
    Terminal::new(TestBackend::new(80, 24)).expect("test terminal")
}

/// Draw a frame and return the screen contents, one line per row.
pub fn render(app: &mut App, terminal: &mut Terminal<TestBackend>) -> String {
    terminal.draw(|f| app.render(f)).expect("draw");
    let buffer = terminal.backend().buffer();
    let area = buffer.area;
    let mut out = String::new();
    for y in area.top()..area.bottom() {
        for x in area.left()..area.right() {
            out.push_str(buffer[(x, y)].symbol());
        }
        out.push('\n');
    }
    out
}
