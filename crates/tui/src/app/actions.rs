//! Applying actions to application state.
//!
//! Input actions are handled by `handle_input` / `handle_mouse`; this module
//! only covers results posted back by the runtime.

use crate::action::Action;
use crate::app::App;

impl App {
    /// Apply an action to state.
    pub fn update(&mut self, action: Action) {
        match action {
            Action::Loading(is_loading) => {
                self.loading = is_loading;
            }
            Action::SearchSaved(result) => {
                self.loading = false;
                match &result {
                    Ok(created) => {
                        tracing::info!(id = %created.id, "Search saved");
                        self.last_error = None;
                    }
                    Err(e) => {
                        tracing::warn!(error = %e, "Saving search failed");
                        self.last_error = Some(e.to_string());
                    }
                }
                self.save_search.apply_result(result);
            }
            Action::SavedSearchRecorded(created) => {
                self.saved_searches.push(created);
            }
            Action::Resize(width, height) => {
                self.last_area.width = width;
                self.last_area.height = height;
            }
            Action::Quit | Action::Input(_) | Action::Mouse(_) | Action::SaveSearch(_) => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::{ConnectionContext, SubmissionState};
    use savesearch_client::{ClientError, SavedSearchCreated};
    use savesearch_config::Messages;
    use std::sync::Arc;

    fn in_flight_app() -> App {
        let mut app = App::new(ConnectionContext::default(), Messages::keys(), None);
        app.save_search.open();
        for c in "save search name".chars() {
            app.save_search.insert_char(c);
        }
        assert!(app.save_search.submit("").is_some());
        app.update(Action::Loading(true));
        app
    }

    #[test]
    fn test_loading_flag() {
        let mut app = App::new(ConnectionContext::default(), Messages::keys(), None);
        app.update(Action::Loading(true));
        assert!(app.loading);
        app.update(Action::Loading(false));
        assert!(!app.loading);
    }

    #[test]
    fn test_search_saved_ok_clears_loading() {
        let mut app = in_flight_app();
        app.update(Action::SearchSaved(Ok(SavedSearchCreated {
            id: "123".to_string(),
            name: "save search name".to_string(),
        })));

        assert!(!app.loading);
        assert!(app.last_error.is_none());
        assert!(matches!(
            app.save_search.submission(),
            SubmissionState::Succeeded(_)
        ));
    }

    #[test]
    fn test_search_saved_err_records_error() {
        let mut app = in_flight_app();
        app.update(Action::SearchSaved(Err(Arc::new(
            ClientError::Unauthenticated,
        ))));

        assert!(!app.loading);
        assert!(app.last_error.is_some());
        assert!(matches!(
            app.save_search.submission(),
            SubmissionState::Failed(_)
        ));
    }

    #[test]
    fn test_recorded_search_is_listed() {
        let mut app = App::new(ConnectionContext::default(), Messages::keys(), None);
        app.update(Action::SavedSearchRecorded(SavedSearchCreated {
            id: "123".to_string(),
            name: "save search name".to_string(),
        }));
        assert_eq!(app.saved_searches.len(), 1);
    }
}
