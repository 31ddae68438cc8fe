//! Shared types for side effect handlers.

use savesearch_client::{SaveSearchOperation, SessionProvider};
use std::sync::Arc;

/// Save operation shared with spawned tasks.
pub type SharedOperation = Arc<dyn SaveSearchOperation>;

/// Session accessor shared with spawned tasks.
pub type SharedSession = Arc<dyn SessionProvider>;

/// Collaborators the side effect handlers need.
#[derive(Clone)]
pub struct SideEffectContext {
    pub operation: SharedOperation,
    pub session: SharedSession,
}

impl SideEffectContext {
    pub fn new(operation: SharedOperation, session: SharedSession) -> Self {
        Self { operation, session }
    }
}
