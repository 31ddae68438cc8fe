//! Redaction wrapper for Action logging.
//!
//! `RedactedAction` implements `Debug` so search text and search names are
//! replaced by size indicators before reaching log files.
//!
//! # Invariants
//!
//! - Variants carrying user-typed text MUST be handled explicitly.
//! - Key events are logged without the character typed.

use crate::action::variants::Action;
use crossterm::event::KeyCode;
use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

/// Show only length and a short hash so log lines can be correlated.
fn redact_text(text: &str) -> String {
    let mut hasher = DefaultHasher::new();
    text.hash(&mut hasher);
    format!("<{} chars, hash={:08x}>", text.chars().count(), hasher.finish())
}

/// Redacted wrapper for Action that prevents sensitive payloads from being logged.
///
/// # Example
/// ```ignore
/// tracing::info!("Handling action: {:?}", RedactedAction(&action));
/// ```
pub struct RedactedAction<'a>(pub &'a Action);

impl std::fmt::Debug for RedactedAction<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.0 {
            Action::Input(key) => match key.code {
                KeyCode::Char(_) => write!(f, "Input(Char(<redacted>), {:?})", key.modifiers),
                code => write!(f, "Input({:?}, {:?})", code, key.modifiers),
            },
            Action::SaveSearch(request) => write!(
                f,
                "SaveSearch {{ name: {}, search: {} }}",
                redact_text(&request.name),
                redact_text(&request.search)
            ),
            Action::SearchSaved(Ok(created)) => {
                write!(f, "SearchSaved(Ok(id={}))", redact_text(&created.id))
            }
            Action::SearchSaved(Err(e)) => write!(f, "SearchSaved(Err({}))", e),
            Action::SavedSearchRecorded(created) => {
                write!(f, "SavedSearchRecorded(id={})", redact_text(&created.id))
            }
            other => write!(f, "{:?}", other),
        }
    }
}
