//! Plain-value entry points for host bindings.
//!
//! Cash flows arrive as `(amount, unix_timestamp_seconds)` pairs and a
//! failed solve is reported as `f64::NAN`, the convention host languages
//! expect from a numeric kernel. Only a malformed call to [`solve_brent`]
//! is an error.
//!
//! Each call uses the default [`XirrConfig`] with the caller's tolerance
//! and iteration budget. Budgets above `u32::MAX` saturate.

use fastxirr_core::CashFlows;

use crate::bracket::Bracket;
use crate::config::XirrConfig;
use crate::error::XirrResult;
use crate::xirr::XirrSolver;

/// Solves by bisection, returning NaN on any failure.
///
/// # Example
///
/// ```rust
/// use fastxirr::boundary::solve_bisection;
///
/// // 2020-01-01 and 2020-12-31
/// let flows = [(-1000.0, 1_577_836_800), (1200.0, 1_609_372_800)];
/// let rate = solve_bisection(&flows, 1e-7, 1000);
/// assert!((rate - 0.2).abs() < 1e-6);
///
/// assert!(solve_bisection(&[(100.0, 0), (50.0, 86_400)], 1e-7, 1000).is_nan());
/// ```
pub fn solve_bisection(cashflows: &[(f64, i64)], tolerance: f64, max_iterations: u64) -> f64 {
    solver(tolerance, max_iterations)
        .and_then(|solver| {
            let flows = CashFlows::from_timestamps(cashflows)?;
            solver.solve_bisection(&flows)
        })
        .map_or(f64::NAN, |solution| solution.rate)
}

/// Solves with Brent's method.
///
/// `bracket`, when given, must hold exactly two rates. Numeric failures
/// yield `Ok(f64::NAN)`.
///
/// # Errors
///
/// - `XirrError::InvalidBracketShape` if `bracket` is not two values long
/// - `XirrError::InvalidBracket` if a bound is not finite or is at or below -1
/// - `XirrError::InvalidConfig` for a tolerance that is not positive
/// - `XirrError::Core` for a timestamp outside the supported date range
pub fn solve_brent(
    cashflows: &[(f64, i64)],
    tolerance: f64,
    max_iterations: u64,
    bracket: Option<&[f64]>,
) -> XirrResult<f64> {
    let bracket = bracket.map(Bracket::from_slice).transpose()?;
    let solver = solver(tolerance, max_iterations)?;
    let flows = CashFlows::from_timestamps(cashflows)?;

    match solver.solve_brent(&flows, bracket) {
        Ok(solution) => Ok(solution.rate),
        Err(err) if err.is_numeric() => {
            tracing::debug!(error = %err, "brent produced no rate");
            Ok(f64::NAN)
        }
        Err(err) => Err(err),
    }
}

/// Brent's method with bisection fallback, returning NaN on any failure.
pub fn calculate(cashflows: &[(f64, i64)], tolerance: f64, max_iterations: u64) -> f64 {
    solver(tolerance, max_iterations)
        .and_then(|solver| {
            let flows = CashFlows::from_timestamps(cashflows)?;
            solver.calculate(&flows)
        })
        .map_or(f64::NAN, |solution| solution.rate)
}

fn solver(tolerance: f64, max_iterations: u64) -> XirrResult<XirrSolver> {
    let max_iterations = u32::try_from(max_iterations).unwrap_or(u32::MAX);
    XirrSolver::new(
        XirrConfig::default()
            .with_tolerance(tolerance)
            .with_max_iterations(max_iterations),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::XirrError;
    use approx::assert_relative_eq;

    const DAY: i64 = 86_400;
    // 1985-01-01, 1990-01-01, 1995-01-01
    const OK_FLOWS: [(f64, i64); 3] = [
        (-1000.0, 473_385_600),
        (600.0, 631_152_000),
        (6000.0, 788_918_400),
    ];

    #[test]
    fn test_solve_brent() {
        let rate = solve_brent(&OK_FLOWS, 1e-7, 1000, None).unwrap();
        assert_relative_eq!(rate, 0.225_683, epsilon = 1e-6);

        let rate = solve_brent(&OK_FLOWS, 1e-7, 1000, Some(&[-0.5, 1.0])).unwrap();
        assert_relative_eq!(rate, 0.225_683, epsilon = 1e-6);
    }

    #[test]
    fn test_solve_bisection_and_calculate() {
        assert_relative_eq!(solve_bisection(&OK_FLOWS, 1e-7, 1000), 0.225_683, epsilon = 1e-6);
        assert_relative_eq!(calculate(&OK_FLOWS, 1e-7, 1000), 0.225_683, epsilon = 1e-6);
    }

    #[test]
    fn test_bracket_shape_checked() {
        assert_eq!(
            solve_brent(&OK_FLOWS, 1e-7, 1000, Some(&[-0.5, 0.5, 1.0])),
            Err(XirrError::InvalidBracketShape { len: 3 })
        );
        assert_eq!(
            solve_brent(&OK_FLOWS, 1e-7, 1000, Some(&[])),
            Err(XirrError::InvalidBracketShape { len: 0 })
        );
    }

    #[test]
    fn test_numeric_failure_is_nan() {
        let positive = [(100.0, 0), (50.0, 365 * DAY)];
        assert!(solve_brent(&positive, 1e-7, 1000, None).unwrap().is_nan());
        assert!(solve_bisection(&positive, 1e-7, 1000).is_nan());
        assert!(calculate(&positive, 1e-7, 1000).is_nan());
    }

    #[test]
    fn test_zero_iterations_is_nan() {
        assert!(solve_brent(&OK_FLOWS, 1e-7, 0, None).unwrap().is_nan());
        assert!(solve_bisection(&OK_FLOWS, 1e-7, 0).is_nan());
    }

    #[test]
    fn test_huge_budget_saturates() {
        let rate = solve_brent(&OK_FLOWS, 1e-7, u64::MAX, None).unwrap();
        assert_relative_eq!(rate, 0.225_683, epsilon = 1e-6);
    }

    #[test]
    fn test_invalid_tolerance() {
        assert!(matches!(
            solve_brent(&OK_FLOWS, 0.0, 1000, None),
            Err(XirrError::InvalidConfig { .. })
        ));
        assert!(solve_bisection(&OK_FLOWS, f64::NAN, 1000).is_nan());
    }

    #[test]
    fn test_empty_is_zero() {
        assert_eq!(solve_brent(&[], 1e-7, 1000, None).unwrap(), 0.0);
        assert_eq!(solve_bisection(&[], 1e-7, 1000), 0.0);
    }
}
