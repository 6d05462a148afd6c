//! # fastxirr
//!
//! Extended internal rate of return (XIRR) for irregular dated cash flows.
//!
//! The XIRR is the annual rate at which the net present value of every flow,
//! discounted on an ACT/365 Fixed basis from the earliest flow date, is zero.
//!
//! This crate provides:
//!
//! - **NPV**: [`npv::xnpv`] and a prepared [`npv::NpvEvaluator`]
//! - **Bracketing**: [`bracket::find_bracket`] scans rates from just above
//!   -100% to 1,000,000% for a sign change
//! - **Solvers**: Brent's method and bisection over a cash-flow series
//! - **Orchestration**: [`XirrSolver`] retries from a scanned bracket when the
//!   default interval fails, and [`XirrSolver::calculate`] falls back from
//!   Brent to bisection
//! - **Boundary API**: NaN-returning functions over `(amount, timestamp)` pairs
//!   for host bindings
//!
//! ## Example
//!
//! ```rust
//! use fastxirr::prelude::*;
//!
//! let flows = CashFlows::new(vec![
//!     CashFlow::new(Date::from_ymd(2020, 1, 1).unwrap(), -1000.0),
//!     CashFlow::new(Date::from_ymd(2020, 12, 31).unwrap(), 1200.0),
//! ]);
//!
//! let solution = xirr(&flows).unwrap();
//! assert!((solution.rate - 0.20).abs() < 1e-6);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::doc_markdown)]
#![allow(clippy::float_cmp)]
#![allow(clippy::uninlined_format_args)]

pub mod boundary;
pub mod bracket;
pub mod config;
pub mod error;
pub mod npv;
pub mod solvers;
pub mod xirr;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::bracket::{find_bracket, Bracket, ScanSchedule, ScanSegment};
    pub use crate::config::XirrConfig;
    pub use crate::error::{XirrError, XirrResult};
    pub use crate::npv::{xnpv, NpvEvaluator};
    pub use crate::xirr::{calculate, xirr, XirrMethod, XirrSolution, XirrSolver};
    pub use fastxirr_core::{CashFlow, CashFlows, Date};
}

pub use config::XirrConfig;
pub use error::{XirrError, XirrResult};
pub use xirr::{calculate, xirr, XirrMethod, XirrSolution, XirrSolver};

// Re-export the building blocks
pub use fastxirr_core;
pub use fastxirr_math;
