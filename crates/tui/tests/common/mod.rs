//! Common test utilities for TUI side effects tests.
//!
//! Provides an in-memory save operation, session fixtures and a harness
//! that runs `handle_side_effects` and collects the actions it sends.
//!
//! # Invariants
//! - Each test gets its own isolated channel (and mock server when used)
//!
//! # What this does NOT handle
//! - TUI rendering (see `helpers`)

#![allow(dead_code)]

use async_trait::async_trait;
use secrecy::{ExposeSecret, SecretString};
use std::sync::{Arc, Mutex};
use tokio::sync::mpsc;

pub use savesearch_client::{
    ClientError, SaveSearchOperation, SaveSearchRequest, SavedSearchClient, SavedSearchCreated,
    StaticSession, UserSession,
};
pub use savesearch_tui::action::Action;
pub use savesearch_tui::runtime::side_effects::{
    SharedOperation, SharedSession, SideEffectContext, handle_side_effects,
};
pub use tokio::sync::mpsc::{Receiver, Sender};
pub use wiremock::{Mock, MockServer, ResponseTemplate};

/// What the in-memory save operation answers with.
#[derive(Debug, Clone)]
pub enum MockOutcome {
    Resolve { id: String },
    Reject,
}

/// In-memory `SaveSearchOperation` recording every call.
pub struct MockSaveOperation {
    outcome: MockOutcome,
    calls: Mutex<Vec<(SaveSearchRequest, String)>>,
}

impl MockSaveOperation {
    pub fn resolving(id: &str) -> Arc<Self> {
        Arc::new(Self {
            outcome: MockOutcome::Resolve { id: id.to_string() },
            calls: Mutex::new(Vec::new()),
        })
    }

    pub fn rejecting() -> Arc<Self> {
        Arc::new(Self {
            outcome: MockOutcome::Reject,
            calls: Mutex::new(Vec::new()),
        })
    }

    /// Recorded (request, token) pairs.
    pub fn calls(&self) -> Vec<(SaveSearchRequest, String)> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl SaveSearchOperation for MockSaveOperation {
    async fn save_search(
        &self,
        request: &SaveSearchRequest,
        token: &SecretString,
    ) -> savesearch_client::Result<SavedSearchCreated> {
        self.calls
            .lock()
            .unwrap()
            .push((request.clone(), token.expose_secret().to_string()));

        match &self.outcome {
            MockOutcome::Resolve { id } => Ok(SavedSearchCreated {
                id: id.clone(),
                name: request.name.clone(),
            }),
            MockOutcome::Reject => Err(ClientError::ApiError {
                status: 500,
                url: "http://localhost/services/saved/searches".to_string(),
                message: "rejected".to_string(),
            }),
        }
    }
}

/// Session for the "faketoken" user.
pub fn signed_in_session() -> SharedSession {
    Arc::new(StaticSession::signed_in(UserSession::new("faketoken")))
}

pub fn anonymous_session() -> SharedSession {
    Arc::new(StaticSession::anonymous())
}

/// Test harness for side effects testing.
pub struct SideEffectsTestHarness {
    /// Receiver for actions sent by the side effect handlers
    pub action_rx: Receiver<Action>,
    /// Sender for actions (clone this to pass to handlers)
    pub action_tx: Sender<Action>,
    pub ctx: SideEffectContext,
}

impl SideEffectsTestHarness {
    pub fn new(operation: SharedOperation, session: SharedSession) -> Self {
        let (action_tx, action_rx) = mpsc::channel::<Action>(100);
        Self {
            action_rx,
            action_tx,
            ctx: SideEffectContext::new(operation, session),
        }
    }

    /// Harness whose save operation is a real client pointed at `server`.
    pub fn with_server(server: &MockServer, session: SharedSession) -> Self {
        let client = SavedSearchClient::builder()
            .base_url(server.uri())
            .timeout(std::time::Duration::from_secs(5))
            .build()
            .expect("Failed to build test client");
        Self::new(Arc::new(client), session)
    }

    /// Handle an action and collect resulting actions until `SearchSaved` arrives.
    ///
    /// `handle_side_effects` must return promptly; network work belongs in
    /// spawned tasks.
    pub async fn handle_and_collect(&mut self, action: Action, timeout_secs: u64) -> Vec<Action> {
        let handle_future = handle_side_effects(action, self.ctx.clone(), self.action_tx.clone());
        if tokio::time::timeout(tokio::time::Duration::from_millis(100), handle_future)
            .await
            .is_err()
        {
            panic!("handle_side_effects timed out - it may be blocking instead of spawning tasks");
        }

        let mut actions = Vec::new();
        let deadline = tokio::time::Instant::now() + tokio::time::Duration::from_secs(timeout_secs);

        while tokio::time::Instant::now() < deadline {
            match tokio::time::timeout(
                tokio::time::Duration::from_millis(100),
                self.action_rx.recv(),
            )
            .await
            {
                Ok(Some(action)) => {
                    let done = matches!(action, Action::SearchSaved(_));
                    actions.push(action);
                    if done {
                        break;
                    }
                }
                Ok(None) => break,
                Err(_) => tokio::task::yield_now().await,
            }
        }

        actions
    }
}
