use std::{
    io::{self, Write},
    path::PathBuf,
};

use anyhow::Context;
use clap::Parser;
use concierge::{
    quotes::StayRequest,
    records::{RecordError, load_catalog_file, parse_date},
    report::write_quote,
};
use jiff::civil::Date;
use tracing::info;

mod logging;

use logging::LoggingArgs;

/// Find the best offer a property has for a stay.
#[derive(Debug, Parser)]
#[command(name = "concierge", version, long_about = None)]
pub(crate) struct Cli {
    /// Catalog file, one offer per line
    catalog: PathBuf,

    /// Property name, matched exactly
    property: String,

    /// Check-in date (YYYY-MM-DD)
    #[arg(value_parser = parse_check_in)]
    check_in: Date,

    /// Stay length in nights
    nights: u32,

    /// Print a one-line summary instead of a table
    #[arg(long)]
    summary: bool,

    #[command(flatten)]
    logging: LoggingArgs,
}

impl Cli {
    pub(crate) fn run(self) -> anyhow::Result<()> {
        logging::init_subscriber(&self.logging)?;

        let catalog = load_catalog_file(&self.catalog)?;

        info!(
            catalog = %self.catalog.display(),
            properties = catalog.len(),
            "catalog loaded"
        );

        let request = StayRequest::new(self.property, Some(self.check_in), self.nights)?;
        let quote = catalog.quote(&request);

        let stdout = io::stdout();
        let mut handle = stdout.lock();

        if self.summary && quote.property().is_some() {
            writeln!(handle, "{}", quote.summary()?).context("failed to write summary")?;
        } else {
            write_quote(&mut handle, &quote)?;
        }

        Ok(())
    }
}

fn parse_check_in(value: &str) -> Result<Date, RecordError> {
    parse_date(value.trim(), "check-in date")
}
