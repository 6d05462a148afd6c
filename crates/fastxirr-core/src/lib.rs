//! # fastxirr Core
//!
//! Core types for the fastxirr XIRR solver.
//!
//! This crate provides the building blocks the solver crates share:
//!
//! - **Types**: [`Date`], [`CashFlow`] and the order-preserving [`CashFlows`] collection
//! - **Day Count Conventions**: ACT/365 Fixed, the convention XIRR discounts with
//!
//! ## Example
//!
//! ```rust
//! use fastxirr_core::prelude::*;
//!
//! let flows = CashFlows::new(vec![
//!     CashFlow::new(Date::from_ymd(2020, 1, 1).unwrap(), -1000.0),
//!     CashFlow::new(Date::from_ymd(2021, 1, 1).unwrap(), 1100.0),
//! ]);
//! assert_eq!(flows.reference_date(), Some(Date::from_ymd(2020, 1, 1).unwrap()));
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::doc_markdown)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::uninlined_format_args)]
#![allow(clippy::trivially_copy_pass_by_ref)]

pub mod daycounts;
pub mod error;
pub mod types;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::daycounts::{Act365Fixed, DayCount};
    pub use crate::error::{CoreError, CoreResult};
    pub use crate::types::{CashFlow, CashFlows, Date};
}

// Re-export commonly used types at crate root
pub use error::{CoreError, CoreResult};
pub use types::{CashFlow, CashFlows, Date};
