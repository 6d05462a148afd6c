//! Rate brackets and the automatic bracket search.
//!
//! [`find_bracket`] scans candidate rates for an adjacent pair where the NPV
//! changes sign. The default [`ScanSchedule`] samples finely from just above
//! -100% up to 1000%, then coarsely up to 1,000,000%:
//!
//! | Segment | Start | End | Step |
//! |---------|-------|-----|------|
//! | Fine | -0.99999999 | 10.0 | 0.0001 |
//! | Coarse | 10.0 | 10000.0 | 10.0 |
//!
//! Segments are chained, so the last fine sample is compared with the first
//! coarse one. Every segment applies the same test: a non-positive product
//! of neighbouring NPV values.

use fastxirr_core::CashFlows;
use fastxirr_math::bracket::{find_sign_change, grid_len, stepped_grid};
use serde::{Deserialize, Serialize};

use crate::error::{XirrError, XirrResult};
use crate::npv::NpvEvaluator;

/// Lowest meaningful rate; NPV is undefined at or below it.
pub const MIN_RATE: f64 = -1.0;

/// A rate interval `[low, high]` handed to a solver.
///
/// Serializes as a two-element array, e.g. `[-0.9999, 10.0]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(from = "(f64, f64)", into = "(f64, f64)")]
pub struct Bracket {
    /// Lower rate.
    pub low: f64,
    /// Upper rate.
    pub high: f64,
}

impl Bracket {
    /// Creates a validated bracket.
    ///
    /// # Errors
    ///
    /// Returns `XirrError::InvalidBracket` if a bound is not finite or is at
    /// or below -1.
    pub fn new(low: f64, high: f64) -> XirrResult<Self> {
        let bracket = Self { low, high };
        bracket.validate()?;
        Ok(bracket)
    }

    /// Builds a bracket from a caller-supplied slice of bounds.
    ///
    /// # Errors
    ///
    /// Returns `XirrError::InvalidBracketShape` unless exactly two values are
    /// given, and `XirrError::InvalidBracket` for unusable bounds.
    ///
    /// # Example
    ///
    /// ```rust
    /// use fastxirr::bracket::Bracket;
    ///
    /// assert!(Bracket::from_slice(&[-0.5, 2.0]).is_ok());
    /// assert!(Bracket::from_slice(&[-0.5, 1.0, 2.0]).is_err());
    /// ```
    pub fn from_slice(bounds: &[f64]) -> XirrResult<Self> {
        match *bounds {
            [low, high] => Self::new(low, high),
            _ => Err(XirrError::InvalidBracketShape { len: bounds.len() }),
        }
    }

    /// Checks that both bounds are finite and above -1.
    pub fn validate(&self) -> XirrResult<()> {
        let reason = if !(self.low.is_finite() && self.high.is_finite()) {
            "bounds must be finite"
        } else if self.low <= MIN_RATE || self.high <= MIN_RATE {
            "bounds must be greater than -1"
        } else {
            return Ok(());
        };
        Err(XirrError::InvalidBracket {
            low: self.low,
            high: self.high,
            reason: reason.to_string(),
        })
    }

    /// Returns the interval width.
    #[must_use]
    pub fn width(&self) -> f64 {
        (self.high - self.low).abs()
    }
}

impl From<(f64, f64)> for Bracket {
    fn from((low, high): (f64, f64)) -> Self {
        Self { low, high }
    }
}

impl From<Bracket> for (f64, f64) {
    fn from(bracket: Bracket) -> Self {
        (bracket.low, bracket.high)
    }
}

impl TryFrom<&[f64]> for Bracket {
    type Error = XirrError;

    fn try_from(bounds: &[f64]) -> Result<Self, Self::Error> {
        Self::from_slice(bounds)
    }
}

/// One evenly spaced run of candidate rates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScanSegment {
    /// First rate sampled.
    pub start: f64,
    /// Last rate that may be sampled.
    pub end: f64,
    /// Distance between samples.
    pub step: f64,
}

impl ScanSegment {
    /// Creates a segment.
    #[must_use]
    pub const fn new(start: f64, end: f64, step: f64) -> Self {
        Self { start, end, step }
    }

    /// Returns the sample rates of this segment.
    pub fn points(&self) -> impl Iterator<Item = f64> {
        stepped_grid(self.start, self.end, self.step)
    }
}

/// Upper limit on the number of sample rates in one schedule.
///
/// The default schedule takes 111,000 samples.
pub const MAX_SCAN_POINTS: usize = 10_000_000;

/// Fine scan just above -100% up to 1000%.
pub const FINE_SCAN: ScanSegment = ScanSegment::new(-0.999_999_99, 10.0, 0.0001);

/// Coarse scan from 1000% to 1,000,000%.
pub const COARSE_SCAN: ScanSegment = ScanSegment::new(10.0, 10_000.0, 10.0);

/// Ordered scan segments used to search for a bracket.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScanSchedule {
    /// Segments, scanned in order as one chained grid.
    pub segments: Vec<ScanSegment>,
}

impl Default for ScanSchedule {
    fn default() -> Self {
        Self {
            segments: vec![FINE_SCAN, COARSE_SCAN],
        }
    }
}

impl ScanSchedule {
    /// Creates a schedule from segments.
    #[must_use]
    pub fn new(segments: Vec<ScanSegment>) -> Self {
        Self { segments }
    }

    /// Returns every sample rate in scan order.
    pub fn points(&self) -> impl Iterator<Item = f64> + '_ {
        self.segments.iter().flat_map(ScanSegment::points)
    }

    /// Checks that every segment is usable and the whole schedule stays
    /// within [`MAX_SCAN_POINTS`] samples.
    pub fn validate(&self) -> XirrResult<()> {
        if self.segments.is_empty() {
            return Err(XirrError::invalid_config("scan schedule has no segments"));
        }
        let mut total = 0usize;
        for segment in &self.segments {
            if !(segment.step.is_finite() && segment.step > 0.0) {
                return Err(XirrError::invalid_config(format!(
                    "scan step must be positive, got {}",
                    segment.step
                )));
            }
            if !(segment.start.is_finite() && segment.end.is_finite()) || segment.end < segment.start {
                return Err(XirrError::invalid_config(format!(
                    "scan segment [{}, {}] is empty or not finite",
                    segment.start, segment.end
                )));
            }
            if segment.start <= MIN_RATE {
                return Err(XirrError::invalid_config(format!(
                    "scan segment starts at {}, rates must be greater than -1",
                    segment.start
                )));
            }
            let Some(points) = grid_len(segment.start, segment.end, segment.step)
                .and_then(|len| total.checked_add(len))
                .filter(|&sum| sum <= MAX_SCAN_POINTS)
            else {
                return Err(XirrError::invalid_config(format!(
                    "scan schedule exceeds {MAX_SCAN_POINTS} sample rates at segment [{}, {}] step {}",
                    segment.start, segment.end, segment.step
                )));
            };
            total = points;
        }
        Ok(())
    }
}

/// Searches the default schedule for a rate interval where NPV changes sign.
///
/// Returns `None` when there is no sign change between -100% and
/// 1,000,000%: either no root exists or it lies outside that range.
///
/// # Example
///
/// ```rust
/// use fastxirr::bracket::find_bracket;
/// use fastxirr_core::{CashFlow, CashFlows, Date};
///
/// let start = Date::from_ymd(2020, 1, 1).unwrap();
/// let flows = CashFlows::new(vec![
///     CashFlow::new(start, -1000.0),
///     CashFlow::new(start + 365, 1200.0),
/// ]);
/// let bracket = find_bracket(&flows).unwrap();
/// assert!(bracket.low <= 0.2 && 0.2 <= bracket.high);
/// ```
pub fn find_bracket(cashflows: &CashFlows) -> Option<Bracket> {
    find_bracket_with(cashflows, &ScanSchedule::default())
}

/// Searches `schedule` for a rate interval where NPV changes sign.
pub fn find_bracket_with(cashflows: &CashFlows, schedule: &ScanSchedule) -> Option<Bracket> {
    scan(&NpvEvaluator::new(cashflows), schedule)
}

/// Scans with a prepared evaluator.
pub(crate) fn scan(evaluator: &NpvEvaluator, schedule: &ScanSchedule) -> Option<Bracket> {
    find_sign_change(|rate| evaluator.npv(rate), schedule.points()).map(Bracket::from)
}
