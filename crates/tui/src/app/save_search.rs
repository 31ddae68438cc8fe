//! Save-search dialog state.
//!
//! Responsibilities:
//! - Track visibility, the typed name, keyboard focus and the submission state.
//! - Validate the name locally before any save is issued.
//! - Apply save results and notify the parent through `on_save`.
//!
//! Does NOT handle:
//! - Rendering (see `ui::popup`).
//! - Performing the save (see `runtime::side_effects`).
//!
//! Invariants:
//! - Visibility and submission state are independent.
//! - At most one save is in flight; `submit` while in flight returns `None`.
//! - `on_save` runs exactly once per successful result.

use std::fmt;
use std::sync::Arc;

use savesearch_client::{ClientError, SaveSearchRequest, SavedSearchCreated};
use savesearch_config::constants::MAX_SEARCH_NAME_CHARS;

use crate::ui::popup::ModalField;

/// CSS-like marker exposed while the dialog is hidden.
pub const HIDDEN_CLASS: &str = "is-hidden";

/// Parent callback invoked with each successfully saved search.
pub type OnSave = Box<dyn FnMut(&SavedSearchCreated) + Send>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ModalVisibility {
    #[default]
    Hidden,
    Shown,
}

/// Local validation failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    EmptyName,
}

/// Progress of the current (or last) save attempt.
#[derive(Debug, Clone, Default)]
pub enum SubmissionState {
    #[default]
    Idle,
    ValidationFailed(ValidationError),
    InFlight,
    Succeeded(SavedSearchCreated),
    Failed(Arc<ClientError>),
}

/// The save-search dialog.
#[derive(Default)]
pub struct SaveSearchModal {
    visibility: ModalVisibility,
    name: String,
    focus: ModalField,
    submission: SubmissionState,
    on_save: Option<OnSave>,
}

impl fmt::Debug for SaveSearchModal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SaveSearchModal")
            .field("visibility", &self.visibility)
            .field("name_chars", &self.name.chars().count())
            .field("focus", &self.focus)
            .field("submission", &self.submission)
            .field("on_save", &self.on_save.is_some())
            .finish()
    }
}

impl SaveSearchModal {
    pub fn new(on_save: Option<OnSave>) -> Self {
        Self {
            on_save,
            ..Self::default()
        }
    }

    pub fn visibility(&self) -> ModalVisibility {
        self.visibility
    }

    pub fn is_hidden(&self) -> bool {
        self.visibility == ModalVisibility::Hidden
    }

    /// `"is-hidden"` while hidden, empty otherwise.
    pub fn dialog_class(&self) -> &'static str {
        if self.is_hidden() { HIDDEN_CLASS } else { "" }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn focused_field(&self) -> ModalField {
        self.focus
    }

    pub fn submission(&self) -> &SubmissionState {
        &self.submission
    }

    pub fn is_in_flight(&self) -> bool {
        matches!(self.submission, SubmissionState::InFlight)
    }

    /// Show the dialog. A fresh form is presented unless a save is still running.
    pub fn open(&mut self) {
        if !self.is_in_flight() {
            self.name.clear();
            self.submission = SubmissionState::Idle;
        }
        self.focus = ModalField::Name;
        self.visibility = ModalVisibility::Shown;
    }

    /// Hide the dialog. Submission state is kept.
    pub fn cancel(&mut self) {
        self.visibility = ModalVisibility::Hidden;
    }

    pub fn toggle(&mut self) {
        match self.visibility {
            ModalVisibility::Hidden => self.open(),
            ModalVisibility::Shown => self.cancel(),
        }
    }

    pub fn focus(&mut self, field: ModalField) {
        self.focus = field;
    }

    pub fn focus_next(&mut self) {
        self.focus = self.focus.next();
    }

    pub fn focus_previous(&mut self) {
        self.focus = self.focus.previous();
    }

    /// Append a character to the name. Ignored while saving or at the length limit.
    pub fn insert_char(&mut self, c: char) {
        if self.is_in_flight() || self.name.chars().count() >= MAX_SEARCH_NAME_CHARS {
            return;
        }
        self.name.push(c);
        self.clear_validation();
    }

    pub fn delete_char(&mut self) {
        if self.is_in_flight() {
            return;
        }
        if self.name.pop().is_some() {
            self.clear_validation();
        }
    }

    fn clear_validation(&mut self) {
        if matches!(self.submission, SubmissionState::ValidationFailed(_)) {
            self.submission = SubmissionState::Idle;
        }
    }

    /// Validate and start a save of `search` under the typed name.
    ///
    /// Returns the request to execute, or `None` when validation failed or a
    /// save is already running.
    pub fn submit(&mut self, search: &str) -> Option<SaveSearchRequest> {
        if self.is_in_flight() {
            tracing::debug!("Save already in flight, ignoring submit");
            return None;
        }

        let name = self.name.trim();
        if name.is_empty() {
            self.submission = SubmissionState::ValidationFailed(ValidationError::EmptyName);
            return None;
        }

        let request = SaveSearchRequest::new(name, search);
        self.submission = SubmissionState::InFlight;
        Some(request)
    }

    /// Apply the outcome of the running save.
    ///
    /// Results arriving when no save is in flight are dropped.
    pub fn apply_result(&mut self, result: Result<SavedSearchCreated, Arc<ClientError>>) {
        if !self.is_in_flight() {
            tracing::warn!("Dropping save result with no save in flight");
            return;
        }

        match result {
            Ok(created) => {
                if let Some(on_save) = self.on_save.as_mut() {
                    on_save(&created);
                }
                self.submission = SubmissionState::Succeeded(created);
            }
            Err(e) => {
                self.submission = SubmissionState::Failed(e);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    fn recording_modal() -> (SaveSearchModal, Arc<Mutex<Vec<SavedSearchCreated>>>) {
        let calls = Arc::new(Mutex::new(Vec::new()));
        let sink = calls.clone();
        let modal = SaveSearchModal::new(Some(Box::new(move |created: &SavedSearchCreated| {
            sink.lock().unwrap().push(created.clone());
        })));
        (modal, calls)
    }

    fn created(id: &str) -> SavedSearchCreated {
        SavedSearchCreated {
            id: id.to_string(),
            name: "save search name".to_string(),
        }
    }

    fn type_name(modal: &mut SaveSearchModal, name: &str) {
        for c in name.chars() {
            modal.insert_char(c);
        }
    }

    #[test]
    fn test_starts_hidden_and_idle() {
        let modal = SaveSearchModal::default();
        assert!(modal.is_hidden());
        assert_eq!(modal.dialog_class(), HIDDEN_CLASS);
        assert!(matches!(modal.submission(), SubmissionState::Idle));
    }

    #[test]
    fn test_toggle_shows_and_hides() {
        let mut modal = SaveSearchModal::default();
        modal.toggle();
        assert_eq!(modal.visibility(), ModalVisibility::Shown);
        assert_eq!(modal.dialog_class(), "");
        modal.toggle();
        assert!(modal.is_hidden());
    }

    #[test]
    fn test_whitespace_name_fails_validation() {
        let mut modal = SaveSearchModal::default();
        modal.open();
        type_name(&mut modal, "   ");

        assert!(modal.submit("index=main").is_none());
        assert!(matches!(
            modal.submission(),
            SubmissionState::ValidationFailed(ValidationError::EmptyName)
        ));
    }

    #[test]
    fn test_editing_clears_validation_error() {
        let mut modal = SaveSearchModal::default();
        modal.open();
        assert!(modal.submit("").is_none());

        modal.insert_char('a');
        assert!(matches!(modal.submission(), SubmissionState::Idle));
    }

    #[test]
    fn test_submit_trims_name() {
        let mut modal = SaveSearchModal::default();
        modal.open();
        type_name(&mut modal, "  save search name ");

        let request = modal.submit("index=main").unwrap();
        assert_eq!(request.name, "save search name");
        assert_eq!(request.search, "index=main");
        assert!(modal.is_in_flight());
    }

    #[test]
    fn test_submit_while_in_flight_is_ignored() {
        let mut modal = SaveSearchModal::default();
        modal.open();
        type_name(&mut modal, "first");
        assert!(modal.submit("").is_some());
        assert!(modal.submit("").is_none());
        assert!(modal.is_in_flight());
    }

    #[test]
    fn test_success_calls_on_save_once() {
        let (mut modal, calls) = recording_modal();
        modal.open();
        type_name(&mut modal, "save search name");
        modal.submit("").unwrap();

        modal.apply_result(Ok(created("123")));
        modal.apply_result(Ok(created("456")));

        let calls = calls.lock().unwrap();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].id, "123");
        assert!(matches!(modal.submission(), SubmissionState::Succeeded(c) if c.id == "123"));
    }

    #[test]
    fn test_failure_does_not_call_on_save() {
        let (mut modal, calls) = recording_modal();
        modal.open();
        type_name(&mut modal, "save search name");
        modal.submit("").unwrap();

        modal.apply_result(Err(Arc::new(ClientError::Unauthenticated)));

        assert!(calls.lock().unwrap().is_empty());
        assert!(matches!(modal.submission(), SubmissionState::Failed(_)));
    }

    #[test]
    fn test_cancel_keeps_state_and_reopen_resets() {
        let mut modal = SaveSearchModal::default();
        modal.open();
        type_name(&mut modal, "draft");
        assert!(modal.submit("").is_some());
        modal.apply_result(Err(Arc::new(ClientError::Unauthenticated)));

        modal.cancel();
        assert_eq!(modal.name(), "draft");
        assert!(matches!(modal.submission(), SubmissionState::Failed(_)));

        modal.open();
        assert_eq!(modal.name(), "");
        assert!(matches!(modal.submission(), SubmissionState::Idle));
    }

    #[test]
    fn test_close_during_flight_still_applies_result() {
        let (mut modal, calls) = recording_modal();
        modal.open();
        type_name(&mut modal, "save search name");
        modal.submit("").unwrap();

        modal.cancel();
        modal.open();
        assert_eq!(modal.name(), "save search name");
        assert!(modal.is_in_flight());

        modal.apply_result(Ok(created("123")));
        assert_eq!(calls.lock().unwrap().len(), 1);
    }

    #[test]
    fn test_name_length_is_capped() {
        let mut modal = SaveSearchModal::default();
        modal.open();
        type_name(&mut modal, &"x".repeat(MAX_SEARCH_NAME_CHARS + 20));
        assert_eq!(modal.name().chars().count(), MAX_SEARCH_NAME_CHARS);
    }

    #[test]
    fn test_debug_hides_name() {
        let mut modal = SaveSearchModal::default();
        type_name(&mut modal, "secret name");
        assert!(!format!("{:?}", modal).contains("secret name"));
    }
}
