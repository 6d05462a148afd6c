//! Error types for XIRR solving.
//!
//! Errors fall into two classes. Numeric failures ([`XirrError::NotBracketed`],
//! [`XirrError::NotConverged`], [`XirrError::NoBracketFound`]) describe the
//! cash-flow series and are recovered by re-bracketing once. Input errors
//! describe the call itself and are never retried.

use fastxirr_core::CoreError;
use fastxirr_math::MathError;
use thiserror::Error;

/// A specialized Result type for XIRR operations.
pub type XirrResult<T> = Result<T, XirrError>;

/// Errors that can occur while solving for XIRR.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum XirrError {
    /// NPV has the same sign at both ends of the interval.
    #[error("Root not bracketed: NPV({low}) = {npv_low:.6e} and NPV({high}) = {npv_high:.6e}")]
    NotBracketed {
        /// Lower rate.
        low: f64,
        /// Upper rate.
        high: f64,
        /// NPV at the lower rate.
        npv_low: f64,
        /// NPV at the upper rate.
        npv_high: f64,
    },

    /// The iteration budget ran out before the tolerance was met.
    #[error("Solver did not converge after {iterations} iterations (residual: {residual:.2e})")]
    NotConverged {
        /// Iterations attempted.
        iterations: u32,
        /// Last evaluated NPV magnitude.
        residual: f64,
    },

    /// The bracket scan found no sign change in NPV.
    #[error("No rate interval with an NPV sign change was found")]
    NoBracketFound,

    /// A caller bracket did not hold exactly two values.
    #[error("Bracket must contain exactly 2 elements, got {len}")]
    InvalidBracketShape {
        /// Number of values supplied.
        len: usize,
    },

    /// A bracket bound is unusable.
    #[error("Invalid bracket [{low}, {high}]: {reason}")]
    InvalidBracket {
        /// Lower bound.
        low: f64,
        /// Upper bound.
        high: f64,
        /// Why the bracket was rejected.
        reason: String,
    },

    /// Solver configuration is invalid.
    #[error("Invalid configuration: {reason}")]
    InvalidConfig {
        /// Description of the problem.
        reason: String,
    },

    /// Configuration file could not be read or parsed.
    #[error("Configuration file error: {0}")]
    ConfigFile(String),

    /// Invalid cash-flow input.
    #[error(transparent)]
    Core(#[from] CoreError),
}

impl XirrError {
    /// Creates an invalid configuration error.
    #[must_use]
    pub fn invalid_config(reason: impl Into<String>) -> Self {
        Self::InvalidConfig {
            reason: reason.into(),
        }
    }

    /// Returns true for failures that describe the cash-flow series rather
    /// than the call, i.e. the ones a re-bracket retry can recover.
    #[must_use]
    pub fn is_numeric(&self) -> bool {
        matches!(
            self,
            Self::NotBracketed { .. } | Self::NotConverged { .. } | Self::NoBracketFound
        )
    }
}

impl From<MathError> for XirrError {
    fn from(err: MathError) -> Self {
        match err {
            MathError::InvalidBracket { a, b, fa, fb } => Self::NotBracketed {
                low: a,
                high: b,
                npv_low: fa,
                npv_high: fb,
            },
            MathError::ConvergenceFailed {
                iterations,
                residual,
            } => Self::NotConverged {
                iterations,
                residual,
            },
            MathError::InvalidInput { reason } => Self::InvalidConfig { reason },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_numeric_classification() {
        assert!(XirrError::NoBracketFound.is_numeric());
        assert!(XirrError::NotConverged {
            iterations: 10,
            residual: 1.0
        }
        .is_numeric());
        assert!(!XirrError::InvalidBracketShape { len: 3 }.is_numeric());
        assert!(!XirrError::invalid_config("tolerance").is_numeric());
    }

    #[test]
    fn test_math_error_mapping() {
        let err: XirrError = MathError::InvalidBracket {
            a: -0.5,
            b: 1.0,
            fa: 10.0,
            fb: 5.0,
        }
        .into();
        assert!(matches!(err, XirrError::NotBracketed { low, .. } if low == -0.5));

        let err: XirrError = MathError::convergence_failed(7, 0.1).into();
        assert_eq!(
            err,
            XirrError::NotConverged {
                iterations: 7,
                residual: 0.1
            }
        );

        let err: XirrError = MathError::invalid_input("bad tolerance").into();
        assert!(matches!(err, XirrError::InvalidConfig { .. }));
    }

    #[test]
    fn test_error_display() {
        let err = XirrError::InvalidBracketShape { len: 3 };
        assert_eq!(err.to_string(), "Bracket must contain exactly 2 elements, got 3");
    }
}
