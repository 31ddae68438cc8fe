//! The save operation seam.
//!
//! The TUI never talks HTTP directly. It holds an `Arc<dyn SaveSearchOperation>`
//! so tests can substitute an in-memory implementation.

use async_trait::async_trait;
use secrecy::SecretString;

use crate::error::Result;
use crate::models::{SaveSearchRequest, SavedSearchCreated};

/// Persists a named search query on behalf of a signed-in user.
#[async_trait]
pub trait SaveSearchOperation: Send + Sync {
    /// Save `request` using `token` as the user's credential.
    async fn save_search(
        &self,
        request: &SaveSearchRequest,
        token: &SecretString,
    ) -> Result<SavedSearchCreated>;
}
