//! Side effect dispatcher.
//!
//! Routes actions to their handler functions.

use crate::action::Action;
use crate::runtime::side_effects::{SideEffectContext, searches};
use std::time::Instant;
use tokio::sync::mpsc::Sender;
use tracing::{Instrument, info_span};

/// Handle side effects for actions.
///
/// Actions without a side effect are ignored.
///
/// # Arguments
///
/// * `action` - The action to handle
/// * `ctx` - The save operation and session accessor
/// * `tx` - The action channel sender for sending results
pub async fn handle_side_effects(action: Action, ctx: SideEffectContext, tx: Sender<Action>) {
    let action_name = action_type_name(&action);
    let start = Instant::now();

    let span = info_span!(
        "tui.handle_action",
        action_type = action_name,
        duration_ms = tracing::field::Empty,
    );

    async move {
        handle_action(action, ctx, tx).await;

        let duration = start.elapsed().as_millis() as i64;
        tracing::Span::current().record("duration_ms", duration);
    }
    .instrument(span)
    .await;
}

/// Get a safe action name for tracing (no sensitive data).
fn action_type_name(action: &Action) -> &'static str {
    match action {
        Action::Quit => "Quit",
        Action::Input(_) => "Input",
        Action::Mouse(_) => "Mouse",
        Action::Resize(_, _) => "Resize",
        Action::SaveSearch(_) => "SaveSearch",
        Action::SearchSaved(_) => "SearchSaved",
        Action::SavedSearchRecorded(_) => "SavedSearchRecorded",
        Action::Loading(_) => "Loading",
    }
}

async fn handle_action(action: Action, ctx: SideEffectContext, tx: Sender<Action>) {
    if let Action::SaveSearch(request) = action {
        searches::handle_save_search(ctx, tx, request).await;
    }
}
