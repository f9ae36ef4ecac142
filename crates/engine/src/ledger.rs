//! The module contains the selection ledger.
//!
//! The ledger maps each [`ItemKey`] to one [`Entry`] and carries the budget
//! the selection must fit in. It is the only place where selections change.
use indexmap::IndexMap;
use serde::Serialize;

use crate::{
    AddOutcome, AddRejection, BudgetOutcome, BudgetRejection, EngineError, ItemKey, Money,
    ResultEngine, grouping::Group, guard,
};

/// Budget a new planning session starts with: ₹1,00,000.
pub const DEFAULT_BUDGET: Money = Money::from_major(100_000);

/// One selected item.
///
/// `unit_price` is fixed by the first addition under the key; later additions
/// only add to `quantity`. `quantity` is never 0 while the entry lives.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Entry {
    pub key: ItemKey,
    pub unit_price: Money,
    pub quantity: u32,
}

impl Entry {
    pub fn name(&self) -> &str {
        self.key.name()
    }

    pub fn group(&self) -> Option<&str> {
        self.key.group()
    }

    /// `unit_price × quantity`.
    pub fn line_total(&self) -> Money {
        guard::cost_of(self.unit_price, self.quantity).unwrap_or(Money::new(i64::MAX))
    }
}

/// A proposed addition, as produced by a catalog or any other caller.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Proposal {
    pub name: String,
    pub unit_price: Money,
    pub quantity: u32,
    pub group: Option<String>,
}

impl Proposal {
    /// One unit of `name` at `unit_price`, without group.
    pub fn new(name: impl Into<String>, unit_price: Money) -> Self {
        Self {
            name: name.into(),
            unit_price,
            quantity: 1,
            group: None,
        }
    }

    pub fn quantity(mut self, quantity: u32) -> Self {
        self.quantity = quantity;
        self
    }

    pub fn group(mut self, group: impl Into<String>) -> Self {
        self.group = Some(group.into());
        self
    }

    /// Cost this proposal adds to the ledger.
    pub fn cost(&self) -> Option<Money> {
        guard::cost_of(self.unit_price, self.quantity)
    }

    /// The key this proposal merges into, see [`ItemKey::normalized`].
    pub fn key(&self) -> ItemKey {
        ItemKey::normalized(&self.name, self.group.as_deref())
    }
}

/// The selection ledger of one planning session.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Ledger {
    entries: IndexMap<ItemKey, Entry>,
    budget: Money,
}

impl Default for Ledger {
    fn default() -> Self {
        Self {
            entries: IndexMap::new(),
            budget: DEFAULT_BUDGET,
        }
    }
}

impl Ledger {
    /// An empty ledger with the given budget. The budget must not be negative.
    pub fn new(budget: Money) -> ResultEngine<Self> {
        if budget.is_negative() {
            return Err(EngineError::InvalidAmount(format!(
                "budget must not be negative, got {budget}"
            )));
        }
        Ok(Self {
            entries: IndexMap::new(),
            budget,
        })
    }

    pub fn budget(&self) -> Money {
        self.budget
    }

    /// `Σ unit_price × quantity` over the live entries.
    pub fn total_cost(&self) -> Money {
        self.entries.values().map(Entry::line_total).sum()
    }

    /// Budget left, negative when over budget.
    pub fn remaining(&self) -> Money {
        self.budget - self.total_cost()
    }

    pub fn is_over_budget(&self) -> bool {
        self.remaining().is_negative()
    }

    /// Entries in first-insertion order.
    pub fn entries(&self) -> impl Iterator<Item = &Entry> {
        self.entries.values()
    }

    pub fn entry(&self, key: &ItemKey) -> Option<&Entry> {
        self.entries.get(key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries gathered by group label, see [`crate::groups_of`].
    pub fn groups(&self) -> Vec<Group<'_>> {
        crate::groups_of(self)
    }

    /// Check the budget and, if it allows, add the proposal.
    ///
    /// The budget is checked against the proposed `unit_price × quantity`. An
    /// existing key then keeps its unit price and gains `quantity`, so a merge
    /// can move the total past the budget. A new key is inserted at the end.
    /// On rejection nothing changes.
    pub fn try_add(&mut self, proposal: Proposal) -> AddOutcome {
        let key = proposal.key();
        if key.name().is_empty() {
            return AddOutcome::Rejected(AddRejection::EmptyName);
        }
        if proposal.quantity == 0 {
            return AddOutcome::Rejected(AddRejection::ZeroQuantity);
        }
        if proposal.unit_price.is_negative() {
            return AddOutcome::Rejected(AddRejection::NegativePrice);
        }

        let Some(cost) = guard::cost_of(proposal.unit_price, proposal.quantity) else {
            return AddOutcome::Rejected(AddRejection::Overflow);
        };

        if !guard::can_afford(self, cost) {
            tracing::debug!(
                item = %key,
                quantity = proposal.quantity,
                cost = %cost,
                remaining = %self.remaining(),
                "addition rejected: not enough budget"
            );
            return AddOutcome::Rejected(AddRejection::InsufficientBudget {
                requested: cost,
                remaining: self.remaining(),
            });
        }

        self.add_item(key, proposal.unit_price, proposal.quantity)
    }

    /// Mutation half of [`Ledger::try_add`]: the budget has already been
    /// checked by the caller.
    fn add_item(&mut self, key: ItemKey, unit_price: Money, quantity: u32) -> AddOutcome {
        let total = self.total_cost();
        match self.entries.get_mut(&key) {
            Some(entry) => {
                // The kept price must still yield a representable total.
                let merged = entry.quantity.checked_add(quantity).filter(|merged| {
                    guard::cost_of(entry.unit_price, *merged).is_some()
                        && guard::cost_of(entry.unit_price, quantity)
                            .and_then(|added| total.checked_add(added))
                            .is_some()
                });
                let Some(merged) = merged else {
                    return AddOutcome::Rejected(AddRejection::Overflow);
                };
                entry.quantity = merged;
                tracing::debug!(item = %key, quantity = merged, "merged into existing entry");
                AddOutcome::Merged {
                    key,
                    quantity: merged,
                }
            }
            None => {
                tracing::debug!(item = %key, quantity, price = %unit_price, "new entry");
                self.entries.insert(
                    key.clone(),
                    Entry {
                        key: key.clone(),
                        unit_price,
                        quantity,
                    },
                );
                AddOutcome::Added(key)
            }
        }
    }

    /// Take one unit of `key` away, dropping the entry when none is left.
    ///
    /// Returns the quantity left, or `None` when the key was not in the ledger
    /// (nothing happens in that case).
    pub fn remove_one(&mut self, key: &ItemKey) -> Option<u32> {
        let entry = self.entries.get_mut(key)?;
        entry.quantity -= 1;
        let left = entry.quantity;
        if left == 0 {
            // Keep the order of the remaining entries.
            self.entries.shift_remove(key);
        }
        tracing::debug!(item = %key, left, "removed one unit");
        Some(left)
    }

    /// Drop every entry. The budget stays as it is.
    pub fn clear(&mut self) {
        tracing::debug!(entries = self.entries.len(), "ledger cleared");
        self.entries.clear();
    }

    /// Replace the budget, provided it still covers the current total.
    pub fn set_budget(&mut self, new_budget: Money) -> BudgetOutcome {
        if new_budget.is_negative() {
            return BudgetOutcome::Rejected(BudgetRejection::Negative);
        }
        if !guard::can_set_budget(self, new_budget) {
            return BudgetOutcome::Rejected(BudgetRejection::BelowTotal {
                requested: new_budget,
                total: self.total_cost(),
            });
        }

        let previous = self.budget;
        self.budget = new_budget;
        tracing::debug!(previous = %previous, current = %new_budget, "budget updated");
        BudgetOutcome::Accepted {
            previous,
            current: new_budget,
        }
    }

    /// [`Ledger::set_budget`] for raw user input such as `"150000"`.
    pub fn set_budget_str(&mut self, raw: &str) -> BudgetOutcome {
        match raw.parse::<Money>() {
            Ok(value) => self.set_budget(value),
            Err(err) => BudgetOutcome::Rejected(BudgetRejection::NotANumber(err.to_string())),
        }
    }
}
