//! Error types for the core types.

use thiserror::Error;

/// A specialized Result type for core operations.
pub type CoreResult<T> = Result<T, CoreError>;

/// Errors raised while constructing core types.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CoreError {
    /// Error in date construction or parsing.
    #[error("Invalid date: {message}")]
    InvalidDate {
        /// Description of the date error.
        message: String,
    },

    /// Cash flow amount is not a finite number.
    #[error("Invalid cash flow amount {amount} on {date}")]
    InvalidAmount {
        /// The rejected amount.
        amount: f64,
        /// Date of the rejected flow.
        date: String,
    },
}

impl CoreError {
    /// Creates an invalid date error.
    #[must_use]
    pub fn invalid_date(message: impl Into<String>) -> Self {
        Self::InvalidDate {
            message: message.into(),
        }
    }
}
