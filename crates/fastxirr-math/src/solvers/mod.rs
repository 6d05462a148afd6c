//! Bracketing root-finding algorithms.
//!
//! - [`bisection`]: Simple and reliable interval halving
//! - [`brent`]: Bisection combined with secant and inverse quadratic steps
//!
//! Both require a bracket `[a, b]` on which the function changes sign.
//!
//! | Solver | Speed | Reliability | Requires |
//! |--------|-------|-------------|----------|
//! | Brent | Fast (superlinear) | Guaranteed | Bracket |
//! | Bisection | Slow (linear) | Guaranteed | Bracket |
//!
//! # Example
//!
//! ```rust
//! use fastxirr_math::solvers::{brent, SolverConfig};
//!
//! // One period: -100 today, +110 in a year
//! let npv = |r: f64| -100.0 + 110.0 / (1.0 + r);
//!
//! let result = brent(npv, -0.5, 1.0, &SolverConfig::default()).unwrap();
//! assert!((result.root - 0.10).abs() < 1e-9);
//! ```

mod bisection;
mod brent;

pub use bisection::bisection;
pub use brent::brent;

use crate::error::{MathError, MathResult};

/// Default tolerance for root-finding algorithms.
pub const DEFAULT_TOLERANCE: f64 = 1e-10;

/// Default maximum iterations for root-finding algorithms.
pub const DEFAULT_MAX_ITERATIONS: u32 = 100;

/// Configuration for root-finding algorithms.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SolverConfig {
    /// Tolerance for convergence.
    pub tolerance: f64,
    /// Maximum number of iterations. Zero always fails to converge.
    pub max_iterations: u32,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            tolerance: DEFAULT_TOLERANCE,
            max_iterations: DEFAULT_MAX_ITERATIONS,
        }
    }
}

impl SolverConfig {
    /// Creates a new solver configuration.
    #[must_use]
    pub fn new(tolerance: f64, max_iterations: u32) -> Self {
        Self {
            tolerance,
            max_iterations,
        }
    }

    /// Sets the tolerance.
    #[must_use]
    pub fn with_tolerance(mut self, tolerance: f64) -> Self {
        self.tolerance = tolerance;
        self
    }

    /// Sets the maximum iterations.
    #[must_use]
    pub fn with_max_iterations(mut self, max_iterations: u32) -> Self {
        self.max_iterations = max_iterations;
        self
    }

    /// Checks that the tolerance is a positive finite number.
    pub fn validate(&self) -> MathResult<()> {
        if !(self.tolerance.is_finite() && self.tolerance > 0.0) {
            return Err(MathError::invalid_input(format!(
                "tolerance must be positive and finite, got {}",
                self.tolerance
            )));
        }
        Ok(())
    }
}

/// Trait for root finders that work on a sign-changing interval.
///
/// # Example
///
/// ```rust
/// use fastxirr_math::solvers::{BracketingSolver, BisectionSolver, SolverConfig};
///
/// let solver = BisectionSolver;
/// let result = solver.solve(|x: f64| x * x - 2.0, 1.0, 2.0, &SolverConfig::default()).unwrap();
/// assert!((result.root - std::f64::consts::SQRT_2).abs() < 1e-9);
/// ```
pub trait BracketingSolver: Send + Sync {
    /// Finds a root of `f` inside `[a, b]`.
    fn solve<F>(&self, f: F, a: f64, b: f64, config: &SolverConfig) -> MathResult<SolverResult>
    where
        F: Fn(f64) -> f64;

    /// Returns the name of the solver.
    fn name(&self) -> &'static str;
}

/// Brent's method solver implementation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BrentSolver;

impl BracketingSolver for BrentSolver {
    fn solve<F>(&self, f: F, a: f64, b: f64, config: &SolverConfig) -> MathResult<SolverResult>
    where
        F: Fn(f64) -> f64,
    {
        brent(f, a, b, config)
    }

    fn name(&self) -> &'static str {
        "Brent"
    }
}

/// Bisection solver implementation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BisectionSolver;

impl BracketingSolver for BisectionSolver {
    fn solve<F>(&self, f: F, a: f64, b: f64, config: &SolverConfig) -> MathResult<SolverResult>
    where
        F: Fn(f64) -> f64,
    {
        bisection(f, a, b, config)
    }

    fn name(&self) -> &'static str {
        "Bisection"
    }
}

/// Result of a root-finding iteration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SolverResult {
    /// The root found.
    pub root: f64,
    /// Number of iterations used.
    pub iterations: u32,
    /// Final residual (function value at root).
    pub residual: f64,
}
