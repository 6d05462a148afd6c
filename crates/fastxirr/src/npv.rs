//! Net present value of dated cash flows.
//!
//! Each flow is discounted by `(1 + rate) ^ years`, where `years` is the
//! whole number of days from the reference date divided by 365 (ACT/365F).
//! The reference date is the earliest flow date; flows may sit before it
//! only when a caller supplies its own reference to [`npv`].
//!
//! Rates at or below -1 have no real discount factor for fractional
//! exponents and produce NaN or infinite values by construction.

use fastxirr_core::daycounts::{Act365Fixed, DayCount};
use fastxirr_core::types::{CashFlows, Date};

/// Computes the NPV of `cashflows` at `rate`, discounted to `reference_date`.
///
/// # Example
///
/// ```rust
/// use fastxirr::npv::npv;
/// use fastxirr_core::{CashFlow, CashFlows, Date};
///
/// let start = Date::from_ymd(2021, 1, 1).unwrap();
/// let flows = CashFlows::new(vec![
///     CashFlow::new(start, -1000.0),
///     CashFlow::new(start + 365, 1100.0),
/// ]);
/// assert!(npv(0.10, &flows, start).abs() < 1e-9);
/// ```
pub fn npv(rate: f64, cashflows: &CashFlows, reference_date: Date) -> f64 {
    let day_count = Act365Fixed;
    cashflows
        .iter()
        .map(|cf| cf.amount() / (1.0 + rate).powf(day_count.year_fraction(reference_date, cf.date())))
        .sum()
}

/// Computes the NPV discounted to the earliest flow date.
///
/// An empty collection has an NPV of zero at every rate.
pub fn xnpv(rate: f64, cashflows: &CashFlows) -> f64 {
    cashflows
        .reference_date()
        .map_or(0.0, |reference| npv(rate, cashflows, reference))
}

/// NPV as a function of the rate, with year fractions computed once.
///
/// The solvers and the bracket scan evaluate NPV many times for the same
/// flows; this keeps the date arithmetic out of that loop. Evaluation is
/// identical to [`xnpv`].
#[derive(Debug, Clone, PartialEq)]
pub struct NpvEvaluator {
    /// `(amount, years from the reference date)` in caller order.
    terms: Vec<(f64, f64)>,
}

impl NpvEvaluator {
    /// Prepares the evaluator for `cashflows`.
    #[must_use]
    pub fn new(cashflows: &CashFlows) -> Self {
        let day_count = Act365Fixed;
        let terms = match cashflows.reference_date() {
            Some(reference) => cashflows
                .iter()
                .map(|cf| (cf.amount(), day_count.year_fraction(reference, cf.date())))
                .collect(),
            None => Vec::new(),
        };
        Self { terms }
    }

    /// Evaluates the NPV at `rate`.
    #[must_use]
    pub fn npv(&self, rate: f64) -> f64 {
        self.terms
            .iter()
            .map(|&(amount, years)| amount / (1.0 + rate).powf(years))
            .sum()
    }

    /// Returns the number of flows.
    #[must_use]
    pub fn len(&self) -> usize {
        self.terms.len()
    }

    /// Returns true if there are no flows.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }
}
