use api_types::catalog::CatalogView;
use axum::{Json, extract::State};

use crate::{server::ServerState, views};

pub async fn get(State(state): State<ServerState>) -> Json<CatalogView> {
    Json(views::catalog(&state.catalog))
}
