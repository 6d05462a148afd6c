//! Bisection root-finding algorithm.

use crate::error::{MathError, MathResult};
use crate::solvers::{SolverConfig, SolverResult};

/// Bisection root-finding algorithm.
///
/// Repeatedly halves the interval, keeping the half whose endpoints still
/// have opposite signs.
///
/// Requires: `f(a) * f(b) <= 0`. A NaN at either end is reported as an
/// invalid bracket. An endpoint where `f` is exactly zero is
/// returned without iterating, provided `max_iterations` is non-zero; a
/// zero budget fails right after the bracket check.
///
/// Converges when `|f(mid)| < tolerance` or the interval width drops below
/// `tolerance`. Exhausting `max_iterations` is an error; the last midpoint
/// is never returned as a root.
///
/// # Arguments
///
/// * `f` - The function for which to find a root
/// * `a` - One end of the bracket
/// * `b` - The other end of the bracket
/// * `config` - Solver configuration
///
/// # Example
///
/// ```rust
/// use fastxirr_math::solvers::{bisection, SolverConfig};
///
/// // Find root of x^2 - 2 (i.e., sqrt(2))
/// let f = |x: f64| x * x - 2.0;
///
/// let result = bisection(f, 1.0, 2.0, &SolverConfig::default()).unwrap();
/// assert!((result.root - std::f64::consts::SQRT_2).abs() < 1e-9);
/// ```
pub fn bisection<F>(f: F, a: f64, b: f64, config: &SolverConfig) -> MathResult<SolverResult>
where
    F: Fn(f64) -> f64,
{
    let mut lo = a.min(b);
    let mut hi = a.max(b);

    let mut f_lo = f(lo);
    let f_hi = f(hi);

    // Check that root is bracketed; a NaN endpoint brackets nothing
    let product = f_lo * f_hi;
    if product > 0.0 || product.is_nan() {
        return Err(MathError::InvalidBracket {
            a: lo,
            b: hi,
            fa: f_lo,
            fb: f_hi,
        });
    }

    if config.max_iterations == 0 {
        return Err(MathError::convergence_failed(0, f_lo.abs().min(f_hi.abs())));
    }

    // Handle case where endpoint is the root
    if f_lo == 0.0 {
        return Ok(SolverResult {
            root: lo,
            iterations: 0,
            residual: f_lo,
        });
    }
    if f_hi == 0.0 {
        return Ok(SolverResult {
            root: hi,
            iterations: 0,
            residual: f_hi,
        });
    }

    let mut residual = f_lo.abs().min(f_hi.abs());

    for iteration in 0..config.max_iterations {
        let mid = (lo + hi) / 2.0;
        let f_mid = f(mid);

        // Check for convergence
        if f_mid.abs() < config.tolerance || (hi - lo).abs() < config.tolerance {
            tracing::trace!(root = mid, iterations = iteration + 1, "bisection converged");
            return Ok(SolverResult {
                root: mid,
                iterations: iteration + 1,
                residual: f_mid,
            });
        }
        residual = f_mid.abs();

        // Keep the half that still changes sign
        if f_lo * f_mid < 0.0 {
            hi = mid;
        } else {
            lo = mid;
            f_lo = f_mid;
        }
    }

    Err(MathError::convergence_failed(config.max_iterations, residual))
}
