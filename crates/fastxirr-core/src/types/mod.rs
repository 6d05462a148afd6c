//! Domain types for XIRR calculations.
//!
//! - [`Date`]: Calendar date with day resolution
//! - [`CashFlow`]: Dated cash flow amount
//! - [`CashFlows`]: Order-preserving collection of cash flows

mod cashflow;
mod date;

pub use cashflow::{CashFlow, CashFlows};
pub use date::Date;
