//! Save-search dialog key handlers.
//!
//! Responsibilities:
//! - Edit the name, move focus, activate Save / Cancel.
//!
//! Does NOT handle:
//! - Does NOT render the dialog (handled by ui::popup module)
//! - Does NOT perform the save (returns `Action::SaveSearch`)

use crate::action::Action;
use crate::app::App;
use crate::app::input::is_plain_char;
use crate::ui::popup::ModalField;
use crossterm::event::{KeyCode, KeyEvent};

impl App {
    /// Handle keys while the save-search dialog is shown.
    pub fn handle_save_search_popup(&mut self, key: KeyEvent) -> Option<Action> {
        let focused = self.save_search.focused_field();
        match key.code {
            KeyCode::Esc => {
                self.save_search.cancel();
                None
            }
            KeyCode::Tab | KeyCode::Down => {
                self.save_search.focus_next();
                None
            }
            KeyCode::BackTab | KeyCode::Up => {
                self.save_search.focus_previous();
                None
            }
            KeyCode::Enter => self.activate_modal_field(focused),
            KeyCode::Backspace if focused == ModalField::Name => {
                self.save_search.delete_char();
                None
            }
            KeyCode::Char(c) if focused == ModalField::Name && is_plain_char(key.modifiers) => {
                self.save_search.insert_char(c);
                None
            }
            _ => None,
        }
    }

    /// Activate a dialog control. Enter in the name field submits.
    pub(crate) fn activate_modal_field(&mut self, field: ModalField) -> Option<Action> {
        match field {
            ModalField::Name | ModalField::Save => self
                .save_search
                .submit(&self.search_input)
                .map(Action::SaveSearch),
            ModalField::Cancel => {
                self.save_search.cancel();
                None
            }
        }
    }
}
