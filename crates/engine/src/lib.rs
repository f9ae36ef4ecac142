//! Budget-constrained selection ledger for room planning.
//!
//! A [`Session`] owns one [`Ledger`]: items are proposed (see [`Proposal`] and
//! [`Catalog`]), checked against the remaining budget by the [`guard`] rules
//! and merged by [`ItemKey`]. Display groups ([`groups_of`]) and the
//! [`Invoice`] ([`render`]) are derived from the ledger on demand and never
//! stored.
//!
//! ```rust
//! use engine::{Ledger, Money, Proposal, render};
//!
//! let mut ledger = Ledger::new(Money::from_major(500)).unwrap();
//! assert!(ledger.try_add(Proposal::new("A", Money::from_major(100)).quantity(2)).is_accepted());
//! assert!(ledger.try_add(Proposal::new("B", Money::from_major(50))).is_accepted());
//! assert!(!ledger.try_add(Proposal::new("C", Money::from_major(251))).is_accepted());
//!
//! let invoice = render(&ledger);
//! assert_eq!(invoice.subtotal.plain(), "225.00");
//! assert_eq!(invoice.tax.plain(), "25.00");
//! assert_eq!(invoice.total.plain(), "250.00");
//! ```
pub use catalog::{Catalog, Design, Extra, Room};
pub use currency::Currency;
pub use document::InvoiceDocument;
pub use error::EngineError;
pub use grouping::{Group, groups_of};
pub use invoice::{Invoice, InvoiceLine, render};
pub use key::ItemKey;
pub use ledger::{DEFAULT_BUDGET, Entry, Ledger, Proposal};
pub use money::Money;
pub use outcome::{AddOutcome, AddRejection, BudgetOutcome, BudgetRejection};
pub use session::{IssuedInvoice, Session};

mod catalog;
mod currency;
mod document;
mod error;
mod grouping;
pub mod guard;
mod invoice;
mod key;
mod ledger;
mod money;
mod outcome;
mod session;

type ResultEngine<T> = Result<T, EngineError>;
