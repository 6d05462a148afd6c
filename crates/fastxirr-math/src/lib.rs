//! # fastxirr Math
//!
//! Numerical building blocks for the fastxirr XIRR solver.
//!
//! This crate provides:
//!
//! - **Solvers**: Bracketing root finders (Bisection, Brent)
//! - **Bracketing**: Grid scanning for an interval where a function changes sign
//!
//! Everything here works on plain `Fn(f64) -> f64` closures; the cash-flow
//! specific code lives in the `fastxirr` crate.

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
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::similar_names)]
#![allow(clippy::many_single_char_names)]
#![allow(clippy::float_cmp)]
#![allow(clippy::uninlined_format_args)]

pub mod bracket;
pub mod error;
pub mod solvers;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::bracket::{find_sign_change, grid_len, stepped_grid};
    pub use crate::error::{MathError, MathResult};
    pub use crate::solvers::{
        bisection, brent, BisectionSolver, BracketingSolver, BrentSolver, SolverConfig,
        SolverResult,
    };
}

pub use error::{MathError, MathResult};
