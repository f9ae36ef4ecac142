//! Checkout submission.
//!
//! Contact details are checked here, before the session is touched. A
//! submission is handed to a [`SubmissionSink`]; the cart is only cleared once
//! the sink has taken it.

use api_types::submission::{ContactSubmission, Submission, SubmitResponse};
use axum::{Json, extract::State};
use thiserror::Error;

use crate::{ServerError, server::ServerState, views};

#[derive(Debug, Error)]
#[error("submission not delivered: {0}")]
pub struct SinkError(pub String);

/// Receiver of completed checkouts.
pub trait SubmissionSink: Send + Sync {
    fn deliver(&self, submission: &Submission) -> Result<(), SinkError>;
}

/// Sink that only records the submission in the log.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogSink;

impl SubmissionSink for LogSink {
    fn deliver(&self, submission: &Submission) -> Result<(), SinkError> {
        tracing::info!(
            email = %submission.email,
            phone = %submission.phone,
            items = submission.items.len(),
            total = %submission.invoice.total.formatted,
            "submission received"
        );
        Ok(())
    }
}

/// `something@something.something`, whitespace not allowed.
fn valid_email(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }
    email.char_indices().any(|(at, c)| {
        if c != '@' || at == 0 {
            return false;
        }
        let domain = &email[at + 1..];
        domain
            .char_indices()
            .any(|(dot, c)| c == '.' && dot > 0 && dot + 1 < domain.len())
    })
}

fn valid_phone(phone: &str) -> bool {
    phone.len() == 10 && phone.bytes().all(|b| b.is_ascii_digit())
}

/// Check the contact details entered at checkout.
pub fn validate_contact(contact: &ContactSubmission) -> Result<(), ServerError> {
    if contact.email.trim().is_empty() || contact.phone.trim().is_empty() {
        return Err(ServerError::Generic(
            "Please enter both email and phone.".to_string(),
        ));
    }
    if !valid_email(contact.email.trim()) {
        return Err(ServerError::Generic("Email address is not valid.".to_string()));
    }
    if !valid_phone(contact.phone.trim()) {
        return Err(ServerError::Generic(
            "Phone number must be exactly 10 digits.".to_string(),
        ));
    }
    Ok(())
}

pub async fn submit(
    State(state): State<ServerState>,
    Json(payload): Json<ContactSubmission>,
) -> Result<Json<SubmitResponse>, ServerError> {
    if let Err(err) = validate_contact(&payload) {
        tracing::warn!("submission refused: invalid contact details");
        return Err(err);
    }

    let mut session = state.session.lock().await;
    let ledger = &session.ledger;
    if ledger.is_empty() {
        tracing::warn!("submission refused: empty cart");
        return Err(ServerError::Checkout("The cart is empty.".to_string()));
    }
    if ledger.is_over_budget() {
        tracing::warn!("submission refused: cart over budget");
        return Err(ServerError::Checkout(
            "The cart exceeds the budget.".to_string(),
        ));
    }

    let total = ledger.total_cost();
    let submission = Submission {
        email: payload.email.trim().to_string(),
        phone: payload.phone.trim().to_string(),
        items: views::submission_items(ledger),
        total_cost_minor: total.minor(),
        invoice: views::invoice(&engine::render(ledger)),
    };

    if let Err(err) = state.sink.deliver(&submission) {
        tracing::error!("{err}");
        return Err(ServerError::Delivery(
            "Failed to deliver the submission.".to_string(),
        ));
    }

    session.ledger.clear();
    Ok(Json(SubmitResponse {
        message: "Details submitted successfully".to_string(),
        total: views::amount(total),
    }))
}
