//! Concierge CLI

use clap::Parser;

mod cli;

fn main() -> anyhow::Result<()> {
    let _env = dotenvy::dotenv();

    cli::Cli::parse().run()
}
