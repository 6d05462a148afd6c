//! XIRR solving with automatic bracket recovery.
//!
//! [`XirrSolver`] wraps the single-interval solvers of [`crate::solvers`]:
//!
//! 1. Zero-amount flows are dropped (they do not move the root).
//! 2. The solver runs on the caller's bracket, or the configured default.
//! 3. If that fails numerically, the bracket scan looks for an interval
//!    where NPV changes sign and the solver runs once more on it. A series
//!    whose amounts all share one sign skips the scan: it has no root.
//!
//! Input errors (a malformed bracket, a bad tolerance) are returned
//! immediately and never retried.
//!
//! # Example
//!
//! ```rust
//! use fastxirr::prelude::*;
//!
//! let flows = CashFlows::new(vec![
//!     CashFlow::new(Date::from_ymd(1985, 1, 1).unwrap(), -1000.0),
//!     CashFlow::new(Date::from_ymd(1990, 1, 1).unwrap(), 600.0),
//!     CashFlow::new(Date::from_ymd(1995, 1, 1).unwrap(), 6000.0),
//! ]);
//!
//! let solution = XirrSolver::default().calculate(&flows).unwrap();
//! assert!((solution.rate - 0.225683).abs() < 1e-6);
//! assert_eq!(solution.method, XirrMethod::Brent);
//! ```

use std::fmt;

use fastxirr_core::CashFlows;
use fastxirr_math::solvers::{BisectionSolver, BrentSolver, SolverConfig, SolverResult};
use serde::{Deserialize, Serialize};

use crate::bracket::{scan, Bracket};
use crate::config::XirrConfig;
use crate::error::{XirrError, XirrResult};
use crate::npv::NpvEvaluator;
use crate::solvers::solve_on;

/// Root-finding method.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum XirrMethod {
    /// Brent's method.
    #[default]
    Brent,
    /// Interval bisection.
    Bisection,
}

impl XirrMethod {
    /// Returns the method name.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Self::Brent => "brent",
            Self::Bisection => "bisection",
        }
    }
}

impl fmt::Display for XirrMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// A solved XIRR.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct XirrSolution {
    /// Annualized rate.
    pub rate: f64,
    /// Method that produced the rate.
    pub method: XirrMethod,
    /// Iterations used by the successful run.
    pub iterations: u32,
    /// NPV at `rate`.
    pub residual: f64,
    /// Interval the successful run started from.
    pub bracket: Bracket,
    /// True if the interval came from the bracket scan.
    pub rebracketed: bool,
}

impl XirrSolution {
    fn new(method: XirrMethod, result: SolverResult, bracket: Bracket, rebracketed: bool) -> Self {
        Self {
            rate: result.root,
            method,
            iterations: result.iterations,
            residual: result.residual,
            bracket,
            rebracketed,
        }
    }
}

/// XIRR solver bound to a validated configuration.
#[derive(Debug, Clone, Default)]
pub struct XirrSolver {
    config: XirrConfig,
}

impl XirrSolver {
    /// Creates a solver.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration does not validate.
    pub fn new(config: XirrConfig) -> XirrResult<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Returns the configuration.
    #[must_use]
    pub fn config(&self) -> &XirrConfig {
        &self.config
    }

    /// Solves with Brent's method, then falls back to bisection.
    ///
    /// # Errors
    ///
    /// Returns the bisection error when both methods fail numerically.
    pub fn calculate(&self, cashflows: &CashFlows) -> XirrResult<XirrSolution> {
        self.calculate_from(cashflows, None)
    }

    /// Like [`calculate`](Self::calculate), with a caller bracket for the
    /// Brent attempt. The bisection fallback always starts from its default.
    pub fn calculate_from(
        &self,
        cashflows: &CashFlows,
        bracket: Option<Bracket>,
    ) -> XirrResult<XirrSolution> {
        match self.solve_brent(cashflows, bracket) {
            Err(err) if err.is_numeric() => {
                tracing::debug!(error = %err, "brent failed, falling back to bisection");
                self.solve_bisection(cashflows)
            }
            other => other,
        }
    }

    /// Solves with Brent's method.
    ///
    /// A caller bracket may be given in either order; it replaces the
    /// configured default for the first attempt only.
    pub fn solve_brent(
        &self,
        cashflows: &CashFlows,
        bracket: Option<Bracket>,
    ) -> XirrResult<XirrSolution> {
        self.solve(XirrMethod::Brent, cashflows, bracket)
    }

    /// Solves by bisection from the configured default bracket.
    pub fn solve_bisection(&self, cashflows: &CashFlows) -> XirrResult<XirrSolution> {
        self.solve(XirrMethod::Bisection, cashflows, None)
    }

    /// Solves with `method`, re-bracketing once on numeric failure.
    ///
    /// # Errors
    ///
    /// - `XirrError::InvalidBracket` for an unusable caller bracket
    /// - `XirrError::NoBracketFound` when the first attempt fails and the
    ///   scan finds no sign change
    /// - the retry's `NotBracketed` or `NotConverged` error otherwise
    pub fn solve(
        &self,
        method: XirrMethod,
        cashflows: &CashFlows,
        bracket: Option<Bracket>,
    ) -> XirrResult<XirrSolution> {
        let bracket = match bracket {
            Some(bracket) => {
                bracket.validate()?;
                bracket
            }
            None => self.config.default_bracket(method),
        };

        let flows = cashflows.without_zero_amounts();
        let evaluator = NpvEvaluator::new(&flows);
        let solver_config = self.config.solver_config();

        let err = match run(method, &evaluator, &solver_config, bracket) {
            Ok(result) => return Ok(XirrSolution::new(method, result, bracket, false)),
            Err(err) if err.is_numeric() => err,
            Err(err) => return Err(err),
        };

        // A retry with no iterations cannot converge either
        if solver_config.max_iterations == 0 {
            return Err(err);
        }

        tracing::debug!(
            %method,
            low = bracket.low,
            high = bracket.high,
            error = %err,
            "first attempt failed, scanning for a bracket"
        );

        // Single-signed amounts keep NPV away from zero at every rate
        if !flows.has_sign_change() {
            tracing::debug!(%method, flows = evaluator.len(), "amounts never change sign");
            return Err(XirrError::NoBracketFound);
        }

        let Some(found) = scan(&evaluator, &self.config.scan) else {
            tracing::debug!(%method, flows = evaluator.len(), "no bracket found");
            return Err(XirrError::NoBracketFound);
        };

        run(method, &evaluator, &solver_config, found)
            .map(|result| XirrSolution::new(method, result, found, true))
    }
}

fn run(
    method: XirrMethod,
    evaluator: &NpvEvaluator,
    config: &SolverConfig,
    bracket: Bracket,
) -> XirrResult<SolverResult> {
    match method {
        XirrMethod::Brent => solve_on(&BrentSolver, evaluator, config, bracket),
        XirrMethod::Bisection => solve_on(&BisectionSolver, evaluator, config, bracket),
    }
}

/// Solves with Brent's method and the default configuration.
pub fn xirr(cashflows: &CashFlows) -> XirrResult<XirrSolution> {
    XirrSolver::default().solve_brent(cashflows, None)
}

/// Brent with bisection fallback, default configuration.
pub fn calculate(cashflows: &CashFlows) -> XirrResult<XirrSolution> {
    XirrSolver::default().calculate(cashflows)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bracket::{ScanSchedule, ScanSegment};
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

    fn very_good_flows() -> CashFlows {
        let today = date(2024, 6, 30);
        CashFlows::new(vec![
            CashFlow::new(today - 180, -1_000_000.0),
            CashFlow::new(today - 60, 2_200_000.0),
            CashFlow::new(today - 30, 800_000.0),
        ])
    }

    #[test]
    fn test_types_are_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<XirrSolver>();
        assert_send_sync::<XirrSolution>();
        assert_send_sync::<XirrError>();
    }

    #[test]
    fn test_default_bracket_success() {
        let solution = xirr(&ok_flows()).unwrap();
        assert_relative_eq!(solution.rate, 0.225_683, epsilon = 1e-6);
        assert_eq!(solution.method, XirrMethod::Brent);
        assert_eq!(solution.bracket, XirrConfig::default().brent.default_bracket);
        assert!(!solution.rebracketed);
    }

    #[test]
    fn test_rebracket_above_default_range() {
        let solver = XirrSolver::default();

        let solution = solver.solve_brent(&very_good_flows(), None).unwrap();
        assert_relative_eq!(solution.rate, 22.352_206, epsilon = 1e-5);
        assert!(solution.rebracketed);
        assert_eq!((solution.bracket.low, solution.bracket.high), (20.0, 30.0));

        let solution = solver.solve_bisection(&very_good_flows()).unwrap();
        assert_relative_eq!(solution.rate, 22.352_206, epsilon = 1e-5);
        assert!(!solution.rebracketed);
    }

    #[test]
    fn test_caller_bracket_without_root_recovers() {
        let bracket = Bracket::new(1.0, 2.0).unwrap();
        let solution = XirrSolver::default()
            .solve_brent(&ok_flows(), Some(bracket))
            .unwrap();
        assert_relative_eq!(solution.rate, 0.225_683, epsilon = 1e-6);
        assert!(solution.rebracketed);
    }

    #[test]
    fn test_reversed_caller_bracket() {
        let bracket = Bracket::from((1.0, -0.5));
        let solution = XirrSolver::default()
            .solve_brent(&ok_flows(), Some(bracket))
            .unwrap();
        assert_relative_eq!(solution.rate, 0.225_683, epsilon = 1e-6);
        assert!(!solution.rebracketed);
    }

    #[test]
    fn test_invalid_caller_bracket_not_retried() {
        let bracket = Bracket::from((-2.0, 1.0));
        let err = XirrSolver::default()
            .solve_brent(&ok_flows(), Some(bracket))
            .unwrap_err();
        assert!(matches!(err, XirrError::InvalidBracket { .. }));
    }

    #[test]
    fn test_no_root() {
        let flows = CashFlows::new(vec![
            CashFlow::new(date(2020, 1, 1), 100.0),
            CashFlow::new(date(2021, 1, 1), 50.0),
        ]);
        assert_eq!(xirr(&flows), Err(XirrError::NoBracketFound));
        assert_eq!(calculate(&flows), Err(XirrError::NoBracketFound));
    }

    #[test]
    fn test_single_signed_series_has_no_bracket() {
        // Only inflows remain once the zero flow is dropped
        let flows = CashFlows::new(vec![
            CashFlow::new(date(2020, 1, 1), 0.0),
            CashFlow::new(date(2020, 6, 1), 100.0),
            CashFlow::new(date(2021, 1, 1), 50.0),
        ]);
        let solver = XirrSolver::default();
        let bracket = Bracket::new(-0.5, 0.5).unwrap();

        assert_eq!(
            solver.solve_brent(&flows, Some(bracket)),
            Err(XirrError::NoBracketFound)
        );
        assert_eq!(
            solver.solve_bisection(&flows),
            Err(XirrError::NoBracketFound)
        );

        let outflows = CashFlows::new(vec![CashFlow::new(date(2020, 1, 1), -100.0)]);
        assert_eq!(xirr(&outflows), Err(XirrError::NoBracketFound));
    }

    #[test]
    fn test_zero_iterations_skips_scan() {
        let config = XirrConfig::default().with_max_iterations(0);
        let solver = XirrSolver::new(config).unwrap();
        let err = solver.solve_brent(&ok_flows(), None).unwrap_err();
        assert!(matches!(err, XirrError::NotConverged { iterations: 0, .. }));
    }

    #[test]
    fn test_zero_amounts_ignored() {
        let mut flows: Vec<CashFlow> = ok_flows().into_iter().collect();
        flows.push(CashFlow::new(date(1980, 6, 1), 0.0));
        let with_zero = CashFlows::new(flows);

        let a = xirr(&ok_flows()).unwrap();
        let b = xirr(&with_zero).unwrap();
        assert_relative_eq!(a.rate, b.rate, epsilon = 1e-12);
    }

    #[test]
    fn test_empty_series() {
        let solution = calculate(&CashFlows::default()).unwrap();
        assert_eq!(solution.rate, 0.0);
        assert_eq!(solution.iterations, 0);
    }

    #[test]
    fn test_calculate_falls_back_to_bisection() {
        // Root near 2235%: outside Brent's default bracket and the narrowed
        // scan, inside the bisection default
        let config = XirrConfig::default()
            .with_scan(ScanSchedule::new(vec![ScanSegment::new(0.0, 1.0, 0.5)]));
        let solver = XirrSolver::new(config).unwrap();

        assert_eq!(
            solver.solve_brent(&very_good_flows(), None),
            Err(XirrError::NoBracketFound)
        );
        let solution = solver.calculate(&very_good_flows()).unwrap();
        assert_eq!(solution.method, XirrMethod::Bisection);
        assert_relative_eq!(solution.rate, 22.352_206, epsilon = 1e-5);
    }

    #[test]
    fn test_invalid_config_rejected() {
        let config = XirrConfig::default().with_tolerance(-1.0);
        assert!(matches!(
            XirrSolver::new(config),
            Err(XirrError::InvalidConfig { .. })
        ));
    }

    #[test]
    fn test_method_display() {
        assert_eq!(XirrMethod::Brent.to_string(), "brent");
        assert_eq!(XirrMethod::Bisection.to_string(), "bisection");
    }

    #[test]
    fn test_solution_serializes() {
        let solution = xirr(&ok_flows()).unwrap();
        let json = serde_json::to_value(solution).unwrap();
        assert_eq!(json["method"], "brent");
        assert_eq!(json["rebracketed"], false);
        assert_eq!(json["bracket"][1], 10.0);
    }
}
