//! Terminal state management and cleanup.
//!
//! Responsibilities:
//! - Enter raw mode and the alternate screen (optionally with mouse capture).
//! - Restore the terminal on drop, including during panics.
//!
//! Invariants / Assumptions:
//! - Must live for the duration of the TUI session.
//! - Drop implementation must not panic.

use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};

/// Guard that owns the terminal's raw/alternate-screen state.
pub struct TerminalGuard {
    mouse_capture: bool,
}

impl TerminalGuard {
    /// Switch the terminal into TUI mode.
    ///
    /// If entering the alternate screen fails, raw mode is undone before returning.
    pub fn enter(mouse_capture: bool) -> std::io::Result<Self> {
        enable_raw_mode()?;
        // Built before the screen switch so an error below still drops it.
        let guard = Self { mouse_capture };
        let mut stdout = std::io::stdout();
        if mouse_capture {
            execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
        } else {
            execute!(stdout, EnterAlternateScreen)?;
        }
        Ok(guard)
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        // Errors are ignored; there is nothing left to report them to.
        let _ = disable_raw_mode();
        let mut stdout = std::io::stdout();
        if self.mouse_capture {
            let _ = execute!(stdout, LeaveAlternateScreen, DisableMouseCapture);
        } else {
            let _ = execute!(stdout, LeaveAlternateScreen);
        }
    }
}
