//! Invoice API endpoints.
//!
//! Every endpoint renders the invoice from the ledger at request time; only the
//! printable document consumes an invoice number.

use api_types::invoice::InvoiceView;
use axum::{
    Json,
    extract::State,
    http::header,
    response::{IntoResponse, Response},
};
use chrono::Local;

use crate::{ServerError, server::ServerState, views};

pub async fn get(State(state): State<ServerState>) -> Json<InvoiceView> {
    let session = state.session.lock().await;
    Json(views::invoice(&engine::render(&session.ledger)))
}

pub async fn csv(State(state): State<ServerState>) -> Result<Response, ServerError> {
    let bytes = {
        let session = state.session.lock().await;
        engine::render(&session.ledger).to_csv()?
    };

    Ok((
        [
            (header::CONTENT_TYPE, "text/csv; charset=utf-8"),
            (
                header::CONTENT_DISPOSITION,
                "attachment; filename=\"invoice.csv\"",
            ),
        ],
        bytes,
    )
        .into_response())
}

pub async fn document(State(state): State<ServerState>) -> Response {
    let issued = {
        let mut session = state.session.lock().await;
        session.issue_invoice(Local::now().date_naive())
    };

    (
        [(header::CONTENT_TYPE, "text/plain; charset=utf-8")],
        issued.text,
    )
        .into_response()
}
