//! Conversions from engine values to wire types.

use api_types::{
    Amount,
    catalog::{CatalogView, DesignView, ExtraView, RoomView},
    cart::{AddResponse, CartItemView, CartView, GroupView},
    invoice::{InvoiceLineView, InvoiceView},
    submission::SubmissionItem,
};
use engine::{AddOutcome, Catalog, Entry, Group, Invoice, InvoiceLine, Ledger, Money};

pub fn amount(value: Money) -> Amount {
    Amount {
        minor: value.minor(),
        formatted: value.to_string(),
    }
}

pub fn catalog(catalog: &Catalog) -> CatalogView {
    CatalogView {
        rooms: catalog
            .rooms
            .iter()
            .map(|room| RoomView {
                name: room.name.clone(),
                designs: room
                    .designs
                    .iter()
                    .map(|design| DesignView {
                        name: design.name.clone(),
                        price: amount(design.price),
                        extras: design
                            .extras
                            .iter()
                            .map(|extra| ExtraView {
                                name: extra.name.clone(),
                                price: amount(extra.price),
                            })
                            .collect(),
                    })
                    .collect(),
            })
            .collect(),
    }
}

fn cart_item(entry: &Entry) -> CartItemView {
    CartItemView {
        name: entry.name().to_string(),
        group: entry.group().map(ToString::to_string),
        unit_price: amount(entry.unit_price),
        quantity: entry.quantity,
        line_total: amount(entry.line_total()),
    }
}

fn group(group: &Group<'_>) -> GroupView {
    GroupView {
        label: group.label.to_string(),
        total: amount(group.total()),
        items: group.entries.iter().map(|e| cart_item(e)).collect(),
    }
}

pub fn cart(ledger: &Ledger) -> CartView {
    CartView {
        budget: amount(ledger.budget()),
        total_cost: amount(ledger.total_cost()),
        remaining: amount(ledger.remaining()),
        over_budget: ledger.is_over_budget(),
        groups: ledger.groups().iter().map(group).collect(),
    }
}

pub fn add_response(outcome: &AddOutcome, ledger: &Ledger) -> AddResponse {
    AddResponse {
        accepted: outcome.is_accepted(),
        reason: outcome.rejection().map(ToString::to_string),
        remaining: amount(ledger.remaining()),
    }
}

fn invoice_line(line: &InvoiceLine) -> InvoiceLineView {
    InvoiceLineView {
        description: line.description(),
        name: line.name.clone(),
        group: line.group.clone(),
        unit_price: amount(line.unit_price),
        quantity: line.quantity,
        line_total: amount(line.line_total),
    }
}

pub fn invoice(invoice: &Invoice) -> InvoiceView {
    InvoiceView {
        currency: invoice.currency.code().to_string(),
        lines: invoice.lines.iter().map(invoice_line).collect(),
        subtotal: amount(invoice.subtotal),
        tax: amount(invoice.tax),
        total: amount(invoice.total),
    }
}

pub fn submission_items(ledger: &Ledger) -> Vec<SubmissionItem> {
    ledger
        .entries()
        .map(|entry| SubmissionItem {
            name: entry.name().to_string(),
            group: entry.group().map(ToString::to_string),
            price_minor: entry.unit_price.minor(),
            quantity: entry.quantity,
        })
        .collect()
}
