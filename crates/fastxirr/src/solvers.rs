//! Bisection and Brent's method applied to the NPV of a cash-flow series.
//!
//! These run a single solve on a single interval. Bracket defaults, zero
//! flow filtering and the re-bracket retry belong to
//! [`XirrSolver`](crate::xirr::XirrSolver).

use fastxirr_core::CashFlows;
use fastxirr_math::solvers::{
    BisectionSolver, BracketingSolver, BrentSolver, SolverConfig, SolverResult,
};

use crate::bracket::Bracket;
use crate::error::XirrResult;
use crate::npv::NpvEvaluator;

/// Finds the rate where NPV is zero by bisection on `[low, high]`.
///
/// An empty series solves to a rate of zero.
///
/// # Errors
///
/// Returns `XirrError::NotBracketed` if NPV has the same sign at both
/// bounds, `XirrError::NotConverged` if `max_iterations` runs out, and
/// `XirrError::InvalidConfig` for a tolerance that is not positive.
///
/// # Example
///
/// ```rust
/// use fastxirr::solvers::bisection;
/// use fastxirr_core::{CashFlow, CashFlows, Date};
///
/// let start = Date::from_ymd(2021, 1, 1).unwrap();
/// let flows = CashFlows::new(vec![
///     CashFlow::new(start, -1000.0),
///     CashFlow::new(start + 365, 1100.0),
/// ]);
/// let result = bisection(&flows, 1e-9, 1000, -0.5, 1.0).unwrap();
/// assert!((result.root - 0.10).abs() < 1e-8);
/// ```
pub fn bisection(
    cashflows: &CashFlows,
    tolerance: f64,
    max_iterations: u32,
    low: f64,
    high: f64,
) -> XirrResult<SolverResult> {
    solve_on(
        &BisectionSolver,
        &NpvEvaluator::new(cashflows),
        &SolverConfig::new(tolerance, max_iterations),
        Bracket { low, high },
    )
}

/// Finds the rate where NPV is zero with Brent's method on `[low, high]`.
///
/// An empty series solves to a rate of zero.
///
/// # Errors
///
/// Same as [`bisection`].
pub fn brent(
    cashflows: &CashFlows,
    tolerance: f64,
    max_iterations: u32,
    low: f64,
    high: f64,
) -> XirrResult<SolverResult> {
    solve_on(
        &BrentSolver,
        &NpvEvaluator::new(cashflows),
        &SolverConfig::new(tolerance, max_iterations),
        Bracket { low, high },
    )
}

/// Runs `solver` on the NPV of prepared flows.
pub(crate) fn solve_on<S: BracketingSolver>(
    solver: &S,
    evaluator: &NpvEvaluator,
    config: &SolverConfig,
    bracket: Bracket,
) -> XirrResult<SolverResult> {
    config.validate()?;

    if evaluator.is_empty() {
        return Ok(SolverResult {
            root: 0.0,
            iterations: 0,
            residual: 0.0,
        });
    }

    let result = solver.solve(|rate| evaluator.npv(rate), bracket.low, bracket.high, config)?;
    tracing::trace!(
        solver = solver.name(),
        rate = result.root,
        iterations = result.iterations,
        "solved"
    );
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::XirrError;
    use approx::assert_relative_eq;
    use fastxirr_core::{CashFlow, Date};

    fn date(y: i32, m: u32, d: u32) -> Date {
        Date::from_ymd(y, m, d).unwrap()
    }

    fn ok_flows() -> CashFlows {
        CashFlows::new(vec![
            CashFlow::new(date(1985, 1, 1), -1000.0),
            CashFlow::new(date(1990, 1, 1), 600.0),
            CashFlow::new(date(1995, 1, 1), 6000.0),
        ])
    }

    #[test]
    fn test_brent_on_default_bracket() {
        let flows = ok_flows();
        let result = brent(&flows, 1e-7, 1000, -0.9999, 10.0).unwrap();
        assert_relative_eq!(result.root, 0.225_683, epsilon = 1e-6);
        // The tolerance bounds the rate, not the NPV: the root must sit
        // inside a sign change one step either side.
        let below = crate::npv::xnpv(result.root - 1e-6, &flows);
        let above = crate::npv::xnpv(result.root + 1e-6, &flows);
        assert!(below * above <= 0.0);
        assert!(result.residual.abs() <= below.abs().max(above.abs()));
    }

    #[test]
    fn test_bisection_on_default_bracket() {
        let result = bisection(&ok_flows(), 1e-7, 1000, -0.999_999, 100.0).unwrap();
        assert_relative_eq!(result.root, 0.225_683, epsilon = 1e-6);
    }

    #[test]
    fn test_both_agree() {
        let flows = ok_flows();
        let a = brent(&flows, 1e-10, 1000, -0.5, 1.0).unwrap();
        let b = bisection(&flows, 1e-10, 1000, -0.5, 1.0).unwrap();
        assert_relative_eq!(a.root, b.root, epsilon = 1e-7);
    }

    #[test]
    fn test_empty_series_is_zero() {
        let flows = CashFlows::default();
        assert_eq!(brent(&flows, 1e-7, 1000, -0.9999, 10.0).unwrap().root, 0.0);
        assert_eq!(bisection(&flows, 1e-7, 1000, -0.9999, 10.0).unwrap().root, 0.0);
    }

    #[test]
    fn test_not_bracketed() {
        // Root at 22.5%, both bounds above it
        let err = brent(&ok_flows(), 1e-7, 1000, 0.5, 1.0).unwrap_err();
        assert!(matches!(err, XirrError::NotBracketed { low, high, .. } if low == 0.5 && high == 1.0));
        assert!(err.is_numeric());
    }

    #[test]
    fn test_iteration_budget() {
        let err = bisection(&ok_flows(), 1e-12, 3, -0.5, 1.0).unwrap_err();
        assert!(matches!(err, XirrError::NotConverged { iterations: 3, .. }));

        let err = brent(&ok_flows(), 1e-7, 0, -0.5, 1.0).unwrap_err();
        assert!(matches!(err, XirrError::NotConverged { iterations: 0, .. }));
    }

    #[test]
    fn test_invalid_tolerance() {
        let err = brent(&ok_flows(), 0.0, 1000, -0.5, 1.0).unwrap_err();
        assert!(matches!(err, XirrError::InvalidConfig { .. }));
        assert!(!err.is_numeric());
    }
}
