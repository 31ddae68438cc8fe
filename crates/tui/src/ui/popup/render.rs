//! Save-search dialog rendering.

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Position, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
};
use savesearch_config::{MessageKey, Messages, Theme};

use crate::app::save_search::{SaveSearchModal, SubmissionState};
use crate::ui::popup::{ModalField, POPUP_HEIGHT_ROWS, POPUP_WIDTH_PERCENT};

/// Screen regions of the dialog's interactive controls.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ModalHitAreas {
    pub dialog: Rect,
    pub name: Rect,
    pub save: Rect,
    pub cancel: Rect,
}

impl ModalHitAreas {
    /// Which control, if any, lies under the given cell.
    pub fn field_at(&self, column: u16, row: u16) -> Option<ModalField> {
        let pos = Position::new(column, row);
        if self.save.contains(pos) {
            Some(ModalField::Save)
        } else if self.cancel.contains(pos) {
            Some(ModalField::Cancel)
        } else if self.name.contains(pos) {
            Some(ModalField::Name)
        } else {
            None
        }
    }

    pub fn contains(&self, column: u16, row: u16) -> bool {
        self.dialog.contains(Position::new(column, row))
    }
}

/// Render the dialog centered in `area`.
///
/// Returns `None` without drawing anything when the dialog is hidden.
pub fn render_save_search_modal(
    f: &mut Frame,
    area: Rect,
    modal: &SaveSearchModal,
    messages: &Messages,
    theme: &Theme,
) -> Option<ModalHitAreas> {
    if modal.is_hidden() {
        return None;
    }

    let dialog = centered_rect(POPUP_WIDTH_PERCENT, POPUP_HEIGHT_ROWS, area);
    f.render_widget(Clear, dialog);

    let border_color = match modal.submission() {
        SubmissionState::Failed(_) | SubmissionState::ValidationFailed(_) => theme.error,
        SubmissionState::Succeeded(_) => theme.success,
        _ => theme.border,
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color))
        .title(Span::styled(
            format!(" {} ", messages.get(MessageKey::Title)),
            Style::default().fg(theme.title).add_modifier(Modifier::BOLD),
        ));
    let inner = block.inner(dialog);
    f.render_widget(block, dialog);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Length(1),
        ])
        .split(inner);

    f.render_widget(
        Paragraph::new(messages.get(MessageKey::NameLabel))
            .style(Style::default().fg(theme.text_dim)),
        rows[0],
    );

    let name_focused = modal.focused_field() == ModalField::Name;
    let input_border = if name_focused {
        theme.accent
    } else {
        theme.border
    };
    let input = Paragraph::new(modal.name()).style(Style::default().fg(theme.text)).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(input_border)),
    );
    f.render_widget(input, rows[1]);

    if name_focused && !modal.is_in_flight() {
        let typed = modal.name().chars().count() as u16;
        let max_x = rows[1].right().saturating_sub(2);
        f.set_cursor_position(Position::new(
            (rows[1].x + 1 + typed).min(max_x),
            rows[1].y + 1,
        ));
    }

    f.render_widget(
        Paragraph::new(status_lines(modal, messages, theme)).wrap(Wrap { trim: true }),
        rows[2],
    );

    let save_label = if modal.is_in_flight() {
        format!("[ {} ]", messages.get(MessageKey::SavingText))
    } else {
        format!("[ {} ]", messages.get(MessageKey::SaveText))
    };
    let cancel_label = format!("[ {} ]", messages.get(MessageKey::CancelText));

    let buttons = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(save_label.chars().count() as u16),
            Constraint::Length(2),
            Constraint::Length(cancel_label.chars().count() as u16),
            Constraint::Min(0),
        ])
        .split(rows[3]);

    let save_style = if modal.is_in_flight() {
        Style::default().fg(theme.disabled)
    } else {
        button_style(modal.focused_field() == ModalField::Save, theme)
    };
    f.render_widget(Paragraph::new(save_label).style(save_style), buttons[0]);
    f.render_widget(
        Paragraph::new(cancel_label)
            .style(button_style(modal.focused_field() == ModalField::Cancel, theme)),
        buttons[2],
    );

    Some(ModalHitAreas {
        dialog,
        name: rows[1],
        save: buttons[0],
        cancel: buttons[2],
    })
}

fn button_style(focused: bool, theme: &Theme) -> Style {
    if focused {
        Style::default()
            .fg(theme.highlight_fg)
            .bg(theme.highlight_bg)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(theme.text)
    }
}

fn status_lines<'a>(modal: &SaveSearchModal, messages: &'a Messages, theme: &Theme) -> Vec<Line<'a>> {
    match modal.submission() {
        SubmissionState::Idle => Vec::new(),
        SubmissionState::ValidationFailed(_) => vec![Line::from(Span::styled(
            messages.get(MessageKey::EmptyNameError),
            Style::default().fg(theme.error),
        ))],
        SubmissionState::InFlight => vec![Line::from(Span::styled(
            messages.get(MessageKey::SavingText),
            Style::default().fg(theme.info),
        ))],
        SubmissionState::Succeeded(_) => vec![
            Line::from(Span::styled(
                messages.get(MessageKey::SuccessTitle),
                Style::default().fg(theme.success).add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(
                messages.get(MessageKey::SuccessDescription),
                Style::default().fg(theme.text),
            )),
        ],
        SubmissionState::Failed(_) => vec![Line::from(Span::styled(
            messages.get(MessageKey::ApiError),
            Style::default().fg(theme.error),
        ))],
    }
}

/// Center a rect of `percent_x` width and `height` rows inside `r`.
fn centered_rect(percent_x: u16, height: u16, r: Rect) -> Rect {
    let height = height.min(r.height);
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Fill(1),
            Constraint::Length(height),
            Constraint::Fill(1),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}
