//! A planning session: one ledger plus the invoices issued from it.
use chrono::NaiveDate;

use crate::{Invoice, InvoiceDocument, Ledger, Money, ResultEngine, render};

/// An invoice issued by a [`Session`], with its number and printable text.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct IssuedInvoice {
    pub number: u32,
    pub issued_on: NaiveDate,
    pub invoice: Invoice,
    pub text: String,
}

/// State owned by one user interaction.
///
/// Sessions never share their ledger; clone the session to duplicate it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Session {
    pub ledger: Ledger,
    next_invoice: u32,
}

impl Default for Session {
    fn default() -> Self {
        Self {
            ledger: Ledger::default(),
            next_invoice: 1,
        }
    }
}

impl Session {
    pub fn new(budget: Money) -> ResultEngine<Self> {
        Ok(Self {
            ledger: Ledger::new(budget)?,
            next_invoice: 1,
        })
    }

    /// Render the current ledger and number it. The ledger is left as it is.
    pub fn issue_invoice(&mut self, issued_on: NaiveDate) -> IssuedInvoice {
        let number = self.next_invoice;
        self.next_invoice = self.next_invoice.saturating_add(1);

        let invoice = render(&self.ledger);
        let text = InvoiceDocument::new(&invoice, number, issued_on).to_string();
        tracing::info!(number, total = %invoice.total, lines = invoice.lines.len(), "invoice issued");

        IssuedInvoice {
            number,
            issued_on,
            invoice,
            text,
        }
    }
}
