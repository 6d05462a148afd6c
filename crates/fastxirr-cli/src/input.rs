//! Cash-flow CSV loading.
//!
//! ```text
//! date,amount
//! 2020-01-01,-1000
//! 1609372800,1200
//! ```

use std::path::Path;

use fastxirr_core::{CashFlow, CashFlows, Date};
use serde::Deserialize;

use crate::error::{CliError, CliResult};

#[derive(Debug, Deserialize)]
struct CashFlowRecord {
    date: String,
    amount: f64,
}

/// Reads `date,amount` rows in file order.
pub fn read_cashflows(path: &Path) -> CliResult<CashFlows> {
    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_path(path)?;
    let headers = reader.headers()?.clone();

    let mut flows = Vec::new();
    for record in reader.records() {
        let record = record?;
        let line = record.position().map_or(0, csv::Position::line);
        let row: CashFlowRecord = record.deserialize(Some(&headers))?;

        let date = parse_date(&row.date).ok_or_else(|| CliError::InvalidDate {
            line,
            value: row.date.clone(),
        })?;
        let flow = CashFlow::try_new(date, row.amount).map_err(|_| CliError::InvalidAmount {
            line,
            amount: row.amount,
        })?;
        flows.push(flow);
    }

    tracing::debug!(path = %path.display(), flows = flows.len(), "loaded cash flows");
    Ok(CashFlows::new(flows))
}

/// Parses `YYYY-MM-DD` or a unix timestamp in seconds.
fn parse_date(value: &str) -> Option<Date> {
    match value.parse::<i64>() {
        Ok(seconds) => Date::from_timestamp(seconds).ok(),
        Err(_) => Date::parse(value).ok(),
    }
}
