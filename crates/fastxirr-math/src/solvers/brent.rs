//! Brent's root-finding algorithm.

use crate::error::{MathError, MathResult};
use crate::solvers::{SolverConfig, SolverResult};

/// Brent's root-finding algorithm.
///
/// Combines the reliability of bisection with the speed of the secant method
/// and inverse quadratic interpolation. Three abscissas are tracked: `b` is
/// the current best estimate (returned on convergence), `a` the previous
/// one, and `c` the point that keeps the root bracketed against `b`.
///
/// Each iteration:
///
/// 1. If `f(b)` and `f(c)` share a sign, `c` is reset to `a`.
/// 2. The points are rotated so that `|f(b)| <= |f(c)|`.
/// 3. With `tol1 = 2 * tolerance * |b| + 0.5 * tolerance` and
///    `m = (c - b) / 2`, the search stops when `|m| <= tol1` or `f(b) == 0`.
/// 4. A secant (two distinct points) or inverse quadratic step is taken when
///    it stays well inside the bracket, otherwise the step is a bisection.
/// 5. `b` moves by the step, or by `tol1` towards `c` when the step is tiny.
///
/// Requires: `f(a) * f(b) <= 0`. A NaN at either end is reported as an
/// invalid bracket.
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
/// use fastxirr_math::solvers::{brent, SolverConfig};
///
/// // Find root of x^3 - x - 2
/// let f = |x: f64| x * x * x - x - 2.0;
///
/// let result = brent(f, 1.0, 2.0, &SolverConfig::default()).unwrap();
/// assert!((f(result.root)).abs() < 1e-10);
/// ```
pub fn brent<F>(f: F, a: f64, b: f64, config: &SolverConfig) -> MathResult<SolverResult>
where
    F: Fn(f64) -> f64,
{
    let tolerance = config.tolerance;
    let mut a = a;
    let mut b = b;
    let mut fa = f(a);
    let mut fb = f(b);

    // Check that root is bracketed
    let product = fa * fb;
    if product > 0.0 || product.is_nan() {
        return Err(MathError::InvalidBracket { a, b, fa, fb });
    }

    let mut c = a;
    let mut fc = fa;
    let mut d = 0.0_f64;
    let mut e = 0.0_f64;

    for iteration in 0..config.max_iterations {
        // Restart the bracket around b
        if (fb > 0.0 && fc > 0.0) || (fb < 0.0 && fc < 0.0) {
            c = a;
            fc = fa;
            d = b - a;
            e = d;
        }

        // Keep the smallest residual in b
        if fc.abs() < fb.abs() {
            a = b;
            b = c;
            c = a;
            fa = fb;
            fb = fc;
            fc = fa;
        }

        let tol1 = 2.0 * tolerance * b.abs() + 0.5 * tolerance;
        let m = 0.5 * (c - b);

        // Check for convergence
        if m.abs() <= tol1 || fb == 0.0 {
            tracing::trace!(root = b, iterations = iteration, "brent converged");
            return Ok(SolverResult {
                root: b,
                iterations: iteration,
                residual: fb,
            });
        }

        if e.abs() >= tol1 && fa.abs() > fb.abs() {
            let s = fb / fa;
            let (mut p, mut q) = if a == c {
                // Secant method
                (2.0 * m * s, 1.0 - s)
            } else {
                // Inverse quadratic interpolation
                let q = fa / fc;
                let r = fb / fc;
                (
                    s * (2.0 * m * q * (q - r) - (b - a) * (r - 1.0)),
                    (q - 1.0) * (r - 1.0) * (s - 1.0),
                )
            };

            if p > 0.0 {
                q = -q;
            }
            p = p.abs();

            if 2.0 * p < (3.0 * m * q - (tol1 * q).abs()).min((e * q).abs()) {
                // Accept interpolation
                e = d;
                d = p / q;
            } else {
                d = m;
                e = m;
            }
        } else {
            d = m;
            e = m;
        }

        // Move last best guess to a
        a = b;
        fa = fb;

        // Minimum step of tol1 towards c
        if d.abs() > tol1 {
            b += d;
        } else {
            b += tol1.copysign(m);
        }
        fb = f(b);
    }

    Err(MathError::convergence_failed(
        config.max_iterations,
        fb.abs(),
    ))
}
