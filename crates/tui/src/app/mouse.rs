//! Mouse event handling for the TUI app.
//!
//! Hit regions come from the last render, so a click is only meaningful
//! after at least one frame has been drawn.

use crate::action::Action;
use crate::app::App;
use crate::ui::popup::ModalField;
use crossterm::event::{MouseButton, MouseEvent, MouseEventKind};
use ratatui::layout::Position;

impl App {
    /// Handle mouse input - returns Action if one should be dispatched.
    pub fn handle_mouse(&mut self, mouse: MouseEvent) -> Option<Action> {
        if !self.mouse_enabled {
            return None;
        }
        let MouseEventKind::Down(MouseButton::Left) = mouse.kind else {
            return None;
        };
        let (col, row) = (mouse.column, mouse.row);

        if !self.save_search.is_hidden()
            && let Some(hits) = self.modal_hits
            && hits.contains(col, row)
        {
            return match hits.field_at(col, row) {
                Some(ModalField::Name) => {
                    self.save_search.focus(ModalField::Name);
                    None
                }
                Some(field) => {
                    self.save_search.focus(field);
                    self.activate_modal_field(field)
                }
                None => None,
            };
        }

        if self.toggle_area.contains(Position::new(col, row)) {
            self.save_search.toggle();
        }
        None
    }
}
