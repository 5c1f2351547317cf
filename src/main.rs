//! Interactive console front desk for an in-memory movie rental catalog.

mod cli;

use clap::Parser as _;
use cli::Cli;

fn main() -> anyhow::Result<()> {
    Cli::parse().run()
}
