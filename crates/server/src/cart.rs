//! Cart API endpoints.

use api_types::cart::{AddResponse, CartView, DesignSelect, ExtraSelect, ItemKeyBody, ItemNew};
use axum::{Json, extract::State, http::StatusCode};
use engine::{ItemKey, Money, Proposal};

use crate::{ServerError, server::ServerState, views};

pub async fn get(State(state): State<ServerState>) -> Json<CartView> {
    let session = state.session.lock().await;
    Json(views::cart(&session.ledger))
}

async fn propose(state: &ServerState, proposal: Proposal) -> Json<AddResponse> {
    let mut session = state.session.lock().await;
    let outcome = session.ledger.try_add(proposal);
    if let Some(reason) = outcome.rejection() {
        tracing::info!("addition refused: {reason}");
    }
    Json(views::add_response(&outcome, &session.ledger))
}

pub async fn item_new(
    State(state): State<ServerState>,
    Json(payload): Json<ItemNew>,
) -> Json<AddResponse> {
    let mut proposal =
        Proposal::new(payload.name, Money::new(payload.price_minor)).quantity(payload.quantity);
    if let Some(group) = payload.group {
        proposal = proposal.group(group);
    }
    propose(&state, proposal).await
}

pub async fn design_select(
    State(state): State<ServerState>,
    Json(payload): Json<DesignSelect>,
) -> Result<Json<AddResponse>, ServerError> {
    let proposal = state.catalog.design(&payload.room, &payload.design)?;
    Ok(propose(&state, proposal).await)
}

pub async fn extra_select(
    State(state): State<ServerState>,
    Json(payload): Json<ExtraSelect>,
) -> Result<Json<AddResponse>, ServerError> {
    let proposal = state.catalog.extra(
        &payload.room,
        &payload.design,
        &payload.extra,
        payload.quantity,
    )?;
    Ok(propose(&state, proposal).await)
}

pub async fn remove_one(
    State(state): State<ServerState>,
    Json(payload): Json<ItemKeyBody>,
) -> StatusCode {
    let key = ItemKey::normalized(&payload.name, payload.group.as_deref());
    let mut session = state.session.lock().await;
    if session.ledger.remove_one(&key).is_none() {
        tracing::debug!(item = %key, "nothing to remove");
    }
    StatusCode::NO_CONTENT
}

pub async fn clear(State(state): State<ServerState>) -> StatusCode {
    state.session.lock().await.ledger.clear();
    StatusCode::NO_CONTENT
}
