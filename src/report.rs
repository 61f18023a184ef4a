//! Report
//!
//! Terminal rendering of a [`Quote`].

use std::io;

use tabled::{
    builder::Builder,
    settings::{Alignment, Color, Style, object::Columns},
};
use thiserror::Error;

use crate::quotes::{Quote, QuoteError};

/// Errors that can occur while writing a report.
#[derive(Debug, Error)]
pub enum ReportError {
    /// Writing to the output failed.
    #[error("failed to write report: {0}")]
    Io(#[from] io::Error),

    /// Prices could not be derived from the quote.
    #[error(transparent)]
    Quote(#[from] QuoteError),
}

/// Write a table describing `quote`, followed by a summary line.
///
/// A quote for an unknown property produces a single explanatory line.
///
/// # Errors
///
/// Returns a [`ReportError`] if the output cannot be written.
pub fn write_quote(mut out: impl io::Write, quote: &Quote) -> Result<(), ReportError> {
    let Some(property) = quote.property() else {
        writeln!(
            out,
            "No property named {:?}; nothing to quote.",
            quote.requested_property()
        )?;

        return Ok(());
    };

    let offer = quote.offer();
    let mut builder = Builder::default();

    builder.push_record([
        "Property",
        "Check-in",
        "Nights",
        "Offer",
        "Kind",
        "Nightly Rate",
        "List Price",
        "Final Price",
        "Savings",
    ]);

    builder.push_record([
        property.name().to_string(),
        quote.check_in().to_string(),
        quote.nights().to_string(),
        offer.promotional_text().to_string(),
        offer.kind().to_string(),
        format_amount(property.nightly_rate()),
        format_amount(quote.undiscounted_price()?),
        format_amount(quote.final_price()?),
        format_amount(quote.savings()?),
    ]);

    let mut table = builder.build();

    table.with(Style::modern_rounded());
    table.modify(Columns::new(5..9), Alignment::right());
    table.modify((0, 0), Color::BOLD);

    if offer.is_no_offer() {
        table.modify((1, 3), Color::FG_BRIGHT_BLACK);
    }

    writeln!(out, "{table}")?;
    writeln!(out, "{}", quote.summary()?)?;

    Ok(())
}

fn format_amount(amount: i64) -> String {
    if amount < 0 {
        format!("-${}", amount.unsigned_abs())
    } else {
        format!("${amount}")
    }
}
