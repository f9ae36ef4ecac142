use api_types::budget::{BudgetResponse, BudgetUpdate};
use axum::{Json, extract::State};

use crate::{server::ServerState, views};

pub async fn update(
    State(state): State<ServerState>,
    Json(payload): Json<BudgetUpdate>,
) -> Json<BudgetResponse> {
    let mut session = state.session.lock().await;
    let outcome = session.ledger.set_budget_str(&payload.value);
    let reason = outcome.rejection().map(ToString::to_string);
    if let Some(reason) = &reason {
        tracing::info!("budget update refused: {reason}");
    }

    Json(BudgetResponse {
        accepted: outcome.is_accepted(),
        reason,
        budget: views::amount(session.ledger.budget()),
    })
}
