//! The module contains the error the engine can throw.
//!
//! Errors are reserved for malformed input and failures outside the ledger
//! rules. Refusals that are part of normal planning (not enough budget, a
//! budget below the current total) are reported as outcomes instead, see
//! [`AddOutcome`] and [`BudgetOutcome`].
//!
//! The errors are:
//!
//! - [`InvalidAmount`] thrown when a money value cannot be parsed or is out of
//!   range.
//! - [`UnknownDesign`] thrown when a catalog lookup does not match anything.
//!
//!  [`InvalidAmount`]: EngineError::InvalidAmount
//!  [`UnknownDesign`]: EngineError::UnknownDesign
//!  [`AddOutcome`]: crate::AddOutcome
//!  [`BudgetOutcome`]: crate::BudgetOutcome
use thiserror::Error;

/// Engine custom errors.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EngineError {
    #[error("Invalid amount: {0}")]
    InvalidAmount(String),
    #[error("Invalid quantity: {0}")]
    InvalidQuantity(String),
    #[error("\"{0}\" not found in catalog!")]
    UnknownDesign(String),
    #[error("Currency mismatch: {0}")]
    CurrencyMismatch(String),
    #[error("Export failed: {0}")]
    Export(String),
}

impl From<csv::Error> for EngineError {
    fn from(value: csv::Error) -> Self {
        Self::Export(value.to_string())
    }
}
