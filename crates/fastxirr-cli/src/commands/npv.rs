//! NPV command implementation.

use std::path::PathBuf;

use anyhow::Result;
use clap::Args;
use serde::Serialize;

use fastxirr::npv::xnpv;
use fastxirr_core::Date;

use crate::cli::OutputFormat;
use crate::input::read_cashflows;
use crate::output::{format_rate, print_header, print_json, print_table, KeyValue};

/// Arguments for the npv command.
#[derive(Args, Debug)]
pub struct NpvArgs {
    /// Cash-flow CSV file with a `date,amount` header
    #[arg(short, long)]
    pub input: PathBuf,

    /// Annual discount rate as a decimal (0.08 for 8%)
    #[arg(short, long, allow_hyphen_values = true)]
    pub rate: f64,
}

#[derive(Debug, Serialize)]
struct NpvReport {
    rate: f64,
    npv: f64,
    reference_date: Option<Date>,
    flows: usize,
}

/// Execute the npv command.
pub fn execute(args: NpvArgs, format: OutputFormat) -> Result<()> {
    let flows = read_cashflows(&args.input)?;
    let report = NpvReport {
        rate: args.rate,
        npv: xnpv(args.rate, &flows),
        reference_date: flows.reference_date(),
        flows: flows.len(),
    };

    match format {
        OutputFormat::Table => {
            print_header("Net Present Value");
            let reference = report
                .reference_date
                .map_or_else(|| "-".to_string(), |d| d.to_string());
            print_table(&[
                KeyValue::new("Rate", format_rate(report.rate)),
                KeyValue::new("NPV", format!("{:.6}", report.npv)),
                KeyValue::new("Reference date", reference),
                KeyValue::new("Cash flows", report.flows.to_string()),
            ]);
        }
        OutputFormat::Json => print_json(&report)?,
        OutputFormat::Minimal => println!("{}", report.npv),
    }

    Ok(())
}
