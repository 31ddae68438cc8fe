//! Rendering logic for the TUI app.
//!
//! Responsibilities:
//! - Render the main layout (header, search input, toggle, saved list, footer)
//! - Overlay the save-search dialog when shown
//! - Record hit regions for mouse handling
//!
//! Non-responsibilities:
//! - Does NOT handle input

use crate::app::{App, FOOTER_HEIGHT, HEADER_HEIGHT};
use crate::ui::popup::render_save_search_modal;
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Position, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph},
};
use savesearch_config::MessageKey;

impl App {
    /// Render the application UI.
    pub fn render(&mut self, f: &mut Frame) {
        self.last_area = f.area();
        let theme = self.theme;

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(HEADER_HEIGHT),
                Constraint::Length(3),
                Constraint::Length(1),
                Constraint::Min(0),
                Constraint::Length(FOOTER_HEIGHT),
            ])
            .split(f.area());

        // Header
        let auth_label = if self.connection.signed_in {
            Span::styled("signed in", Style::default().fg(theme.success))
        } else {
            Span::styled("not signed in", Style::default().fg(theme.error))
        };
        let header = Paragraph::new(Line::from(vec![
            Span::styled(
                "Save Search",
                Style::default().fg(theme.title).add_modifier(Modifier::BOLD),
            ),
            Span::raw(" | "),
            Span::styled(
                self.connection.base_url.as_str(),
                Style::default().fg(theme.text_dim),
            ),
            Span::raw(" | "),
            auth_label,
        ]));
        f.render_widget(header, chunks[0]);

        // Current search
        let search_block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme.border))
            .title(" Search ");
        f.render_widget(
            Paragraph::new(self.search_input.as_str())
                .style(Style::default().fg(theme.text))
                .block(search_block),
            chunks[1],
        );
        if self.save_search.is_hidden() {
            let typed = self.search_input.chars().count() as u16;
            let max_x = chunks[1].right().saturating_sub(2);
            f.set_cursor_position(Position::new(
                (chunks[1].x + 1 + typed).min(max_x),
                chunks[1].y + 1,
            ));
        }

        // Toggle control, always drawn
        let toggle_label = format!("[ {} ]", self.messages.get(MessageKey::ToggleText));
        let toggle_width = (toggle_label.chars().count() as u16).min(chunks[2].width);
        self.toggle_area = Rect::new(chunks[2].x, chunks[2].y, toggle_width, chunks[2].height);
        f.render_widget(
            Paragraph::new(toggle_label).style(
                Style::default()
                    .fg(theme.accent)
                    .add_modifier(Modifier::BOLD),
            ),
            self.toggle_area,
        );

        // Searches saved this session
        let items: Vec<ListItem> = self
            .saved_searches
            .iter()
            .rev()
            .map(|s| {
                ListItem::new(Line::from(vec![
                    Span::styled(s.name.as_str(), Style::default().fg(theme.text)),
                    Span::styled(format!("  ({})", s.id), Style::default().fg(theme.text_dim)),
                ]))
            })
            .collect();
        let list = List::new(items).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(theme.border))
                .title(format!(" Saved this session ({}) ", self.saved_searches.len())),
        );
        f.render_widget(list, chunks[3]);

        // Footer
        let footer = if self.loading {
            Line::from(Span::styled(
                self.messages.get(MessageKey::SavingText),
                Style::default().fg(theme.info),
            ))
        } else if self.last_error.is_some() {
            // Error details go to the log only
            Line::from(Span::styled(
                self.messages.get(MessageKey::ApiError),
                Style::default().fg(theme.error),
            ))
        } else {
            Line::from(Span::styled(
                "Ctrl+S save search | Enter open | Esc close/clear | Ctrl+Q quit",
                Style::default().fg(theme.text_dim),
            ))
        };
        f.render_widget(Paragraph::new(footer), chunks[4]);

        // Dialog overlay, drawn over the saved list only so the toggle stays visible
        self.modal_hits =
            render_save_search_modal(f, chunks[3], &self.save_search, &self.messages, &theme);
    }
}
