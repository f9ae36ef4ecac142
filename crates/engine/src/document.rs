//! Printable invoice document.
use std::fmt;

use chrono::NaiveDate;

use crate::Invoice;

const WIDTH: usize = 72;
const DESCRIPTION_WIDTH: usize = 34;
const PRICE_WIDTH: usize = 14;
const QTY_WIDTH: usize = 6;
const TOTAL_WIDTH: usize = 16;

/// An invoice laid out as a fixed-width text page.
///
/// Issue date and due date are the same day.
#[derive(Clone, Debug)]
pub struct InvoiceDocument<'a> {
    pub invoice: &'a Invoice,
    pub number: u32,
    pub issued_on: NaiveDate,
}

impl<'a> InvoiceDocument<'a> {
    pub fn new(invoice: &'a Invoice, number: u32, issued_on: NaiveDate) -> Self {
        Self {
            invoice,
            number,
            issued_on,
        }
    }

    /// Zero-padded invoice number, e.g. `00001`.
    pub fn number_label(&self) -> String {
        format!("{:05}", self.number)
    }
}

fn truncate(text: &str, width: usize) -> String {
    if text.chars().count() <= width {
        return text.to_string();
    }
    let mut cut: String = text.chars().take(width.saturating_sub(1)).collect();
    cut.push('…');
    cut
}

impl fmt::Display for InvoiceDocument<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let invoice = self.invoice;
        let date = self.issued_on.format("%d/%m/%Y");
        let rule = "-".repeat(WIDTH);

        writeln!(f, "{:>WIDTH$}", "INVOICE")?;
        writeln!(f)?;
        writeln!(f, "{:>WIDTH$}", format!("INVOICE NO: {}", self.number_label()))?;
        writeln!(f, "{:>WIDTH$}", format!("DATE: {date}"))?;
        writeln!(f, "{:>WIDTH$}", format!("DUE DATE: {date}"))?;
        writeln!(f)?;

        writeln!(
            f,
            "{:<DESCRIPTION_WIDTH$}{:>PRICE_WIDTH$}{:>QTY_WIDTH$}{:>TOTAL_WIDTH$}",
            "DESCRIPTION", "UNIT PRICE", "QTY", "TOTAL"
        )?;
        writeln!(f, "{rule}")?;
        for line in &invoice.lines {
            writeln!(
                f,
                "{:<DESCRIPTION_WIDTH$}{:>PRICE_WIDTH$}{:>QTY_WIDTH$}{:>TOTAL_WIDTH$}",
                truncate(&line.description(), DESCRIPTION_WIDTH - 1),
                invoice.format(line.unit_price),
                line.quantity,
                invoice.format(line.line_total)
            )?;
        }
        writeln!(f, "{rule}")?;

        let label_width = WIDTH - TOTAL_WIDTH;
        writeln!(
            f,
            "{:>label_width$}{:>TOTAL_WIDTH$}",
            "SUBTOTAL",
            invoice.format(invoice.subtotal)
        )?;
        writeln!(
            f,
            "{:>label_width$}{:>TOTAL_WIDTH$}",
            "Tax (10%)",
            invoice.format(invoice.tax)
        )?;
        writeln!(
            f,
            "{:>label_width$}{:>TOTAL_WIDTH$}",
            "TOTAL",
            invoice.format(invoice.total)
        )?;
        writeln!(f)?;
        writeln!(
            f,
            "{:<half$}{:>half$}",
            "Thank you for your business!",
            "Authorized Signature",
            half = WIDTH / 2
        )
    }
}
