//! CLI error types.

use fastxirr::XirrError;
use thiserror::Error;

/// CLI error type.
#[derive(Debug, Error)]
pub enum CliError {
    /// Invalid date in the input file.
    #[error("Invalid date on line {line}: {value}. Use YYYY-MM-DD or a unix timestamp.")]
    InvalidDate {
        /// One-based line number, header included.
        line: u64,
        /// The rejected text.
        value: String,
    },

    /// Invalid amount in the input file.
    #[error("Invalid amount on line {line}: {amount}")]
    InvalidAmount {
        /// One-based line number, header included.
        line: u64,
        /// The rejected amount.
        amount: f64,
    },

    /// Malformed CSV.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// Solver or configuration error.
    #[error(transparent)]
    Xirr(#[from] XirrError),
}

/// CLI result type.
pub type CliResult<T> = Result<T, CliError>;
