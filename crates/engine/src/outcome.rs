//! Results of ledger mutations.
//!
//! A refused mutation is an expected result of planning under a budget, so it
//! is returned as a value the caller has to look at rather than as an
//! [`EngineError`](crate::EngineError). A rejected operation never changes the
//! ledger.
use thiserror::Error;

use crate::{ItemKey, Money};

/// Result of [`Ledger::try_add`](crate::Ledger::try_add).
#[derive(Clone, Debug, PartialEq, Eq)]
#[must_use]
pub enum AddOutcome {
    /// A new entry was created.
    Added(ItemKey),
    /// The key already existed: its quantity grew, its price was kept.
    Merged { key: ItemKey, quantity: u32 },
    Rejected(AddRejection),
}

impl AddOutcome {
    pub fn is_accepted(&self) -> bool {
        !matches!(self, AddOutcome::Rejected(_))
    }

    pub fn rejection(&self) -> Option<&AddRejection> {
        match self {
            AddOutcome::Rejected(reason) => Some(reason),
            _ => None,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum AddRejection {
    #[error("not enough budget: requested {requested}, remaining {remaining}")]
    InsufficientBudget { requested: Money, remaining: Money },
    #[error("quantity must be at least 1")]
    ZeroQuantity,
    #[error("price must not be negative")]
    NegativePrice,
    #[error("item name must not be empty")]
    EmptyName,
    #[error("selection cost is too large")]
    Overflow,
}

/// Result of a budget update.
#[derive(Clone, Debug, PartialEq, Eq)]
#[must_use]
pub enum BudgetOutcome {
    Accepted { previous: Money, current: Money },
    Rejected(BudgetRejection),
}

impl BudgetOutcome {
    pub fn is_accepted(&self) -> bool {
        matches!(self, BudgetOutcome::Accepted { .. })
    }

    pub fn rejection(&self) -> Option<&BudgetRejection> {
        match self {
            BudgetOutcome::Rejected(reason) => Some(reason),
            BudgetOutcome::Accepted { .. } => None,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum BudgetRejection {
    #[error("budget must be a number: {0}")]
    NotANumber(String),
    #[error("budget must not be negative")]
    Negative,
    #[error("budget {requested} is below the current total {total}")]
    BelowTotal { requested: Money, total: Money },
}
