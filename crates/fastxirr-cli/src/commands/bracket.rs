//! Bracket command implementation.
//!
//! Runs the same scan the solver falls back to, so a user can see where
//! (or whether) NPV changes sign before solving.

use std::path::PathBuf;

use anyhow::Result;
use clap::Args;
use serde::Serialize;

use fastxirr::bracket::{find_bracket_with, Bracket};
use fastxirr::XirrConfig;

use crate::cli::OutputFormat;
use crate::input::read_cashflows;
use crate::output::{print_header, print_json, print_success, print_table, print_warning, KeyValue};

/// Arguments for the bracket command.
#[derive(Args, Debug)]
pub struct BracketArgs {
    /// Cash-flow CSV file with a `date,amount` header
    #[arg(short, long)]
    pub input: PathBuf,
}

#[derive(Debug, Serialize)]
struct BracketReport {
    bracket: Option<Bracket>,
    flows: usize,
}

/// Execute the bracket command.
pub fn execute(args: BracketArgs, format: OutputFormat, config: &XirrConfig) -> Result<()> {
    let flows = read_cashflows(&args.input)?.without_zero_amounts();
    let bracket = find_bracket_with(&flows, &config.scan);

    match format {
        OutputFormat::Table => {
            print_header("Bracket Search");
            match bracket {
                Some(b) => {
                    print_table(&[
                        KeyValue::new("Low", b.low.to_string()),
                        KeyValue::new("High", b.high.to_string()),
                    ]);
                    print_success("NPV changes sign");
                }
                None => print_warning("no sign change in the scanned range"),
            }
        }
        OutputFormat::Json => print_json(&BracketReport {
            bracket,
            flows: flows.len(),
        })?,
        OutputFormat::Minimal => match bracket {
            Some(b) => println!("{},{}", b.low, b.high),
            None => println!("none"),
        },
    }

    Ok(())
}
