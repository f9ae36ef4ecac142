//! Invoice derivation.
//!
//! An [`Invoice`] is a copy of the ledger at the moment it is rendered. The
//! total comes straight from the ledger; subtotal and tax are a presentational
//! 90/10 split of that total, each rounded on its own, so
//! `subtotal + tax == total` is not guaranteed to the paisa.
use serde::Serialize;

use crate::{Currency, Entry, Ledger, Money, ResultEngine};

/// Share of the total printed as subtotal, in tenths.
pub const SUBTOTAL_TENTHS: i64 = 9;
/// Share of the total printed as tax, in tenths.
pub const TAX_TENTHS: i64 = 1;

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct InvoiceLine {
    pub name: String,
    pub group: Option<String>,
    pub unit_price: Money,
    pub quantity: u32,
    pub line_total: Money,
}

impl InvoiceLine {
    /// Text printed in the description column: `group: name` for extras.
    pub fn description(&self) -> String {
        match &self.group {
            Some(group) => format!("{group}: {}", self.name),
            None => self.name.clone(),
        }
    }
}

impl From<&Entry> for InvoiceLine {
    fn from(entry: &Entry) -> Self {
        Self {
            name: entry.name().to_string(),
            group: entry.group().map(ToString::to_string),
            unit_price: entry.unit_price,
            quantity: entry.quantity,
            line_total: entry.line_total(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Invoice {
    pub currency: Currency,
    pub lines: Vec<InvoiceLine>,
    pub subtotal: Money,
    pub tax: Money,
    pub total: Money,
}

/// Render the invoice for the current state of `ledger`.
pub fn render(ledger: &Ledger) -> Invoice {
    let lines: Vec<InvoiceLine> = ledger.entries().map(InvoiceLine::from).collect();
    let total = ledger.total_cost();

    Invoice {
        currency: Currency::default(),
        lines,
        subtotal: total.share(SUBTOTAL_TENTHS, 10),
        tax: total.share(TAX_TENTHS, 10),
        total,
    }
}

#[derive(Serialize)]
struct CsvRow<'a> {
    description: String,
    unit_price: &'a str,
    quantity: u32,
    total: &'a str,
}

impl Invoice {
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Format an amount of this invoice with its currency symbol.
    pub fn format(&self, amount: Money) -> String {
        amount.format(self.currency)
    }

    /// Export the invoice lines as CSV with the columns
    /// `description,unit_price,quantity,total`.
    pub fn to_csv(&self) -> ResultEngine<Vec<u8>> {
        let mut writer = csv::Writer::from_writer(vec![]);
        for line in &self.lines {
            let unit_price = line.unit_price.plain();
            let total = line.line_total.plain();
            writer.serialize(CsvRow {
                description: line.description(),
                unit_price: &unit_price,
                quantity: line.quantity,
                total: &total,
            })?;
        }
        // The header is only written with the first row.
        if self.lines.is_empty() {
            writer.write_record(["description", "unit_price", "quantity", "total"])?;
        }

        writer
            .into_inner()
            .map_err(|err| crate::EngineError::Export(err.to_string()))
    }
}
