//! Bracket search by grid scanning.
//!
//! A continuous function that has opposite signs at two points has a root
//! between them. [`find_sign_change`] walks a grid of sample points and
//! returns the first adjacent pair whose values have a non-positive product.

/// Number of points [`stepped_grid`] yields for the same arguments.
///
/// Returns `None` for a non-positive or non-finite step, an empty range, or
/// a range so long relative to the step that the count does not fit in a
/// `usize`.
///
/// # Example
///
/// ```rust
/// use fastxirr_math::bracket::grid_len;
///
/// assert_eq!(grid_len(10.0, 40.0, 10.0), Some(4));
/// assert_eq!(grid_len(0.0, 1e300, 1e-300), None);
/// ```
#[must_use]
pub fn grid_len(start: f64, end: f64, step: f64) -> Option<usize> {
    if !(step > 0.0 && step.is_finite() && start.is_finite() && end >= start) {
        return None;
    }
    // Small slack so an end point that is an exact multiple survives rounding
    let span = ((end - start) / step + 1e-9).floor();
    if !span.is_finite() || span >= usize::MAX as f64 {
        return None;
    }
    (span as usize).checked_add(1)
}

/// Sample points `start + i * step` for `i = 0, 1, ...` while they stay within `end`.
///
/// Points are computed from the index rather than by repeated addition so a
/// long grid does not drift. A grid [`grid_len`] rejects yields no points.
///
/// # Example
///
/// ```rust
/// use fastxirr_math::bracket::stepped_grid;
///
/// let points: Vec<f64> = stepped_grid(10.0, 40.0, 10.0).collect();
/// assert_eq!(points, vec![10.0, 20.0, 30.0, 40.0]);
/// ```
pub fn stepped_grid(start: f64, end: f64, step: f64) -> impl Iterator<Item = f64> {
    let count = grid_len(start, end, step).unwrap_or(0);
    (0..count).map(move |i| start + i as f64 * step)
}

/// Finds the first adjacent pair of grid points where `f` changes sign.
///
/// A pair `(x0, x1)` brackets a root when `f(x0) * f(x1) <= 0`, which also
/// accepts a sample where `f` is exactly zero. A NaN product never brackets.
/// Returns `None` when the whole grid keeps one sign.
///
/// # Example
///
/// ```rust
/// use fastxirr_math::bracket::{find_sign_change, stepped_grid};
///
/// let f = |x: f64| x - 2.5;
/// let bracket = find_sign_change(f, stepped_grid(0.0, 10.0, 1.0));
/// assert_eq!(bracket, Some((2.0, 3.0)));
/// ```
pub fn find_sign_change<F, I>(f: F, points: I) -> Option<(f64, f64)>
where
    F: Fn(f64) -> f64,
    I: IntoIterator<Item = f64>,
{
    let mut previous: Option<(f64, f64)> = None;

    for x in points {
        let fx = f(x);
        if let Some((x_prev, f_prev)) = previous {
            if f_prev * fx <= 0.0 {
                tracing::trace!(low = x_prev, high = x, "sign change found");
                return Some((x_prev, x));
            }
        }
        previous = Some((x, fx));
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use proptest::prelude::*;

    #[test]
    fn test_grid_includes_exact_end() {
        let points: Vec<f64> = stepped_grid(10.0, 10000.0, 10.0).collect();
        assert_eq!(points.len(), 1000);
        assert_eq!(points[0], 10.0);
        assert_eq!(*points.last().unwrap(), 10000.0);
    }

    #[test]
    fn test_grid_stops_before_end() {
        let points: Vec<f64> = stepped_grid(-0.99999999, 10.0, 0.0001).collect();
        assert_eq!(points.len(), 110_000);
        let last = *points.last().unwrap();
        assert!(last <= 10.0);
        assert_relative_eq!(last, 9.99990001, epsilon = 1e-9);
    }

    #[test]
    fn test_degenerate_grids_are_empty() {
        assert_eq!(stepped_grid(0.0, 1.0, 0.0).count(), 0);
        assert_eq!(stepped_grid(0.0, 1.0, -0.5).count(), 0);
        assert_eq!(stepped_grid(2.0, 1.0, 0.5).count(), 0);
        assert_eq!(stepped_grid(0.0, 1.0, f64::NAN).count(), 0);
        assert_eq!(stepped_grid(1.0, 1.0, 0.5).count(), 1);
    }

    #[test]
    fn test_grid_len_matches_grid() {
        assert_eq!(grid_len(10.0, 10000.0, 10.0), Some(1000));
        assert_eq!(grid_len(-0.99999999, 10.0, 0.0001), Some(110_000));
        assert_eq!(grid_len(1.0, 1.0, 0.5), Some(1));
        assert_eq!(grid_len(2.0, 1.0, 0.5), None);
    }

    #[test]
    fn test_oversized_grid_is_rejected() {
        assert_eq!(grid_len(0.0, 1e300, 1e-300), None);
        assert_eq!(grid_len(-f64::MAX, f64::MAX, 1.0), None);
        assert_eq!(stepped_grid(0.0, 1e300, 1e-300).count(), 0);
        assert_eq!(stepped_grid(0.0, f64::INFINITY, 1.0).count(), 0);
    }

    #[test]
    fn test_finds_first_sign_change() {
        // Roots at 1.5 and 3.5: the first one wins
        let f = |x: f64| (x - 1.5) * (x - 3.5);
        assert_eq!(
            find_sign_change(f, stepped_grid(0.0, 5.0, 1.0)),
            Some((1.0, 2.0))
        );
    }

    #[test]
    fn test_zero_sample_brackets() {
        let f = |x: f64| x - 2.0;
        assert_eq!(
            find_sign_change(f, stepped_grid(0.0, 5.0, 1.0)),
            Some((1.0, 2.0))
        );
    }

    #[test]
    fn test_no_sign_change() {
        let f = |x: f64| x * x + 1.0;
        assert_eq!(find_sign_change(f, stepped_grid(-5.0, 5.0, 0.5)), None);
    }

    #[test]
    fn test_nan_samples_never_bracket() {
        let f = |x: f64| if x < 3.0 { f64::NAN } else { 1.0 };
        assert_eq!(find_sign_change(f, stepped_grid(0.0, 5.0, 1.0)), None);
    }

    #[test]
    fn test_chained_grids_compare_across_the_seam() {
        // Sign flips between the last point of the first grid and the first of the second
        let f = |x: f64| x - 4.5;
        let points = stepped_grid(0.0, 4.0, 1.0).chain(stepped_grid(5.0, 10.0, 5.0));
        assert_eq!(find_sign_change(f, points), Some((4.0, 5.0)));
    }

    proptest! {
        #[test]
        fn prop_bracket_contains_root(root in -0.9_f64..9.9) {
            let f = |x: f64| x - root;
            let (lo, hi) = find_sign_change(f, stepped_grid(-1.0, 10.0, 0.01)).unwrap();
            prop_assert!(lo <= root && root <= hi);
            prop_assert!(f(lo) * f(hi) <= 0.0);
        }
    }
}
