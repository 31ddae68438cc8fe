//! Save-search side effect handler.
//!
//! Does NOT handle:
//! - Validation of the name (done by the dialog before the action is emitted).
//! - Direct state modification (sends actions for that).

use crate::action::Action;
use savesearch_client::{ClientError, SaveSearchRequest};
use std::sync::Arc;
use tokio::sync::mpsc::Sender;

use super::SideEffectContext;

/// Handle saving a search for the current user.
///
/// A missing session is reported as `ClientError::Unauthenticated` without
/// calling the save operation.
pub async fn handle_save_search(
    ctx: SideEffectContext,
    tx: Sender<Action>,
    request: SaveSearchRequest,
) {
    let _ = tx.send(Action::Loading(true)).await;
    tokio::spawn(async move {
        let result = match ctx.session.current_user() {
            Some(user) => ctx.operation.save_search(&request, user.token()).await,
            None => {
                tracing::warn!("Save requested without a signed-in user");
                Err(ClientError::Unauthenticated)
            }
        };

        if let Err(e) = &result {
            tracing::debug!(error = %e, "Save search failed");
        }

        let _ = tx.send(Action::SearchSaved(result.map_err(Arc::new))).await;
    });
}
