//! Runtime color palette.
//!
//! Invariants:
//! - Colors are semantically named (error/success/info) for consistent usage.

use ratatui::style::Color;

/// Expanded runtime theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    // Global / chrome
    pub text: Color,
    pub text_dim: Color,
    pub border: Color,
    pub title: Color,
    pub accent: Color,

    // Selection / highlight
    pub highlight_fg: Color,
    pub highlight_bg: Color,

    // Semantics
    pub success: Color,
    pub error: Color,
    pub info: Color,
    pub disabled: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            text: Color::White,
            text_dim: Color::Gray,
            border: Color::Cyan,
            title: Color::Cyan,
            accent: Color::Yellow,

            highlight_fg: Color::Yellow,
            highlight_bg: Color::DarkGray,

            success: Color::Green,
            error: Color::Red,
            info: Color::Cyan,
            disabled: Color::DarkGray,
        }
    }
}

impl Theme {
    /// Palette without color, for terminals or users that disable it.
    pub fn monochrome() -> Self {
        Self {
            text: Color::White,
            text_dim: Color::Gray,
            border: Color::White,
            title: Color::White,
            accent: Color::White,
            highlight_fg: Color::Black,
            highlight_bg: Color::White,
            success: Color::White,
            error: Color::White,
            info: Color::White,
            disabled: Color::Gray,
        }
    }
}
