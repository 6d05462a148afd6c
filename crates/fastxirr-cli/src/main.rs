//! fastxirr CLI - XIRR for dated cash flows from a CSV file.
//!
//! # Usage
//!
//! ```bash
//! # Solve (Brent, falling back to bisection)
//! fastxirr solve --input flows.csv
//!
//! # Solve by bisection with a tighter tolerance
//! fastxirr solve --input flows.csv --method bisection --tolerance 1e-10
//!
//! # NPV at 8%
//! fastxirr npv --input flows.csv --rate 0.08
//!
//! # Where does NPV change sign?
//! fastxirr --format json bracket --input flows.csv
//! ```
//!
//! Input files have a `date,amount` header; dates are `YYYY-MM-DD` or unix
//! timestamps in seconds. Set `RUST_LOG=fastxirr=debug` to trace fallbacks.

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod cli;
mod commands;
mod error;
mod input;
mod output;

use cli::{Cli, Commands};

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "warn".into()),
        ))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    let format = cli.format;
    let config = commands::load_config(cli.config.as_deref())?;

    match cli.command {
        Commands::Solve(args) => commands::solve::execute(args, format, config)?,
        Commands::Npv(args) => commands::npv::execute(args, format)?,
        Commands::Bracket(args) => commands::bracket::execute(args, format, &config)?,
    }

    Ok(())
}
