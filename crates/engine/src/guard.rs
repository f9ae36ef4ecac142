//! Affordability rules consulted before the ledger changes.
//!
//! Every function here is a pure predicate over a ledger snapshot; none of
//! them mutates anything. Additions are gated by [`can_afford`], budget
//! changes by [`can_set_budget`]. Removals are never gated.
use crate::{Ledger, Money};

/// `true` when the budget left after the current selection covers
/// `added_cost`: `budget - total_cost >= added_cost`.
#[must_use]
pub fn can_afford(ledger: &Ledger, added_cost: Money) -> bool {
    match ledger.budget().checked_sub(ledger.total_cost()) {
        Some(remaining) => remaining >= added_cost,
        None => false,
    }
}

/// `true` when `new_budget` still covers the current selection.
#[must_use]
pub fn can_set_budget(ledger: &Ledger, new_budget: Money) -> bool {
    !new_budget.is_negative() && new_budget >= ledger.total_cost()
}

/// Cost of `quantity` units at `unit_price`, `None` on overflow.
#[must_use]
pub fn cost_of(unit_price: Money, quantity: u32) -> Option<Money> {
    unit_price.checked_mul(quantity)
}
