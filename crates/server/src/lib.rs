use axum::{Json, http::StatusCode, response::IntoResponse};
use engine::EngineError;

use serde::Serialize;
pub use server::{ServerState, router, run_with_listener, spawn_with_listener};
pub use submit::{LogSink, SinkError, SubmissionSink, validate_contact};

mod budget;
mod cart;
mod catalog;
mod invoice;
mod server;
mod submit;
mod views;

pub mod types {
    pub mod cart {
        pub use api_types::cart::{
            AddResponse, CartItemView, CartView, DesignSelect, ExtraSelect, GroupView,
            ItemKeyBody, ItemNew,
        };
    }

    pub mod budget {
        pub use api_types::budget::{BudgetResponse, BudgetUpdate};
    }

    pub mod invoice {
        pub use api_types::invoice::{InvoiceLineView, InvoiceView};
    }

    pub mod submission {
        pub use api_types::submission::{
            ContactSubmission, Submission, SubmissionItem, SubmitResponse,
        };
    }
}

#[derive(Debug)]
pub enum ServerError {
    Engine(EngineError),
    /// The cart cannot be checked out in its current state.
    Checkout(String),
    /// The submission could not be handed over.
    Delivery(String),
    Generic(String),
}

#[derive(Serialize)]
struct Error {
    error: String,
}

fn status_for_engine_error(err: &EngineError) -> StatusCode {
    match err {
        EngineError::UnknownDesign(_) => StatusCode::NOT_FOUND,
        EngineError::Export(_) => StatusCode::INTERNAL_SERVER_ERROR,
        EngineError::InvalidAmount(_)
        | EngineError::InvalidQuantity(_)
        | EngineError::CurrencyMismatch(_) => StatusCode::UNPROCESSABLE_ENTITY,
    }
}

fn message_for_engine_error(err: EngineError) -> String {
    match err {
        EngineError::Export(reason) => {
            tracing::error!("export error: {reason}");
            "internal server error".to_string()
        }
        other => other.to_string(),
    }
}

impl IntoResponse for ServerError {
    fn into_response(self) -> axum::response::Response {
        let (status, error) = match self {
            ServerError::Engine(err) => (
                status_for_engine_error(&err),
                message_for_engine_error(err),
            ),
            ServerError::Checkout(err) => (StatusCode::CONFLICT, err),
            ServerError::Delivery(err) => (StatusCode::BAD_GATEWAY, err),
            ServerError::Generic(err) => (StatusCode::BAD_REQUEST, err),
        };

        (status, Json(Error { error })).into_response()
    }
}

impl From<EngineError> for ServerError {
    fn from(value: EngineError) -> Self {
        Self::Engine(value)
    }
}
