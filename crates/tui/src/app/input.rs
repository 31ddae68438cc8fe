//! Keyboard handling for the main screen.
//!
//! Responsibilities:
//! - Global shortcuts (toggle dialog, quit).
//! - Editing the current search query.
//! - Routing keys to the dialog while it is shown.

use crate::action::Action;
use crate::app::App;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

impl App {
    /// Handle keyboard input - returns Action if one should be dispatched.
    pub fn handle_input(&mut self, key: KeyEvent) -> Option<Action> {
        if key.modifiers.contains(KeyModifiers::CONTROL) {
            match key.code {
                KeyCode::Char('c') | KeyCode::Char('q') => return Some(Action::Quit),
                KeyCode::Char('s') => {
                    self.save_search.toggle();
                    return None;
                }
                _ => {}
            }
        }

        if !self.save_search.is_hidden() {
            return self.handle_save_search_popup(key);
        }

        self.handle_search_input(key)
    }

    fn handle_search_input(&mut self, key: KeyEvent) -> Option<Action> {
        match key.code {
            KeyCode::Char(c) if is_plain_char(key.modifiers) => {
                self.search_input.push(c);
            }
            KeyCode::Backspace => {
                self.search_input.pop();
            }
            KeyCode::Enter => {
                self.save_search.open();
            }
            KeyCode::Esc => {
                self.search_input.clear();
            }
            _ => {}
        }
        None
    }
}

/// Characters typed without Ctrl/Alt (Shift is allowed for capitals).
pub(crate) fn is_plain_char(modifiers: KeyModifiers) -> bool {
    !modifiers.intersects(KeyModifiers::CONTROL | KeyModifiers::ALT)
}
