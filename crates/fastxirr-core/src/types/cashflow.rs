//! Cash flow types for XIRR calculations.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::Date;
use crate::error::{CoreError, CoreResult};

/// A single dated cash flow.
///
/// Negative amounts are outflows (investments), positive amounts are
/// inflows (returns). Immutable once constructed.
///
/// # Example
///
/// ```rust
/// use fastxirr_core::types::{CashFlow, Date};
///
/// let cf = CashFlow::new(Date::from_ymd(2025, 6, 15).unwrap(), -1000.0);
/// assert_eq!(cf.amount(), -1000.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CashFlow {
    /// Payment date
    date: Date,
    /// Signed amount
    amount: f64,
}

impl CashFlow {
    /// Creates a new cash flow.
    #[must_use]
    pub fn new(date: Date, amount: f64) -> Self {
        Self { date, amount }
    }

    /// Creates a cash flow, rejecting non-finite amounts.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::InvalidAmount` for NaN or infinite amounts.
    pub fn try_new(date: Date, amount: f64) -> CoreResult<Self> {
        if !amount.is_finite() {
            return Err(CoreError::InvalidAmount {
                amount,
                date: date.to_string(),
            });
        }
        Ok(Self::new(date, amount))
    }

    /// Returns the payment date.
    #[must_use]
    pub fn date(&self) -> Date {
        self.date
    }

    /// Returns the signed amount.
    #[must_use]
    pub fn amount(&self) -> f64 {
        self.amount
    }

    /// Returns true if the amount is exactly zero.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.amount == 0.0
    }
}

impl fmt::Display for CashFlow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {:.2}", self.date, self.amount)
    }
}

/// An order-preserving collection of cash flows.
///
/// The discounting reference date is derived from the collection (its
/// earliest date) and is never supplied independently. An empty collection
/// is representable and has no reference date.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CashFlows(Vec<CashFlow>);

impl CashFlows {
    /// Creates a collection from flows in caller order.
    #[must_use]
    pub fn new(flows: Vec<CashFlow>) -> Self {
        Self(flows)
    }

    /// Builds a collection from `(amount, unix_timestamp_seconds)` pairs.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::InvalidDate` if a timestamp is out of range.
    pub fn from_timestamps(pairs: &[(f64, i64)]) -> CoreResult<Self> {
        pairs
            .iter()
            .map(|&(amount, seconds)| Ok(CashFlow::new(Date::from_timestamp(seconds)?, amount)))
            .collect::<CoreResult<Vec<_>>>()
            .map(Self)
    }

    /// Returns the earliest date in the collection.
    #[must_use]
    pub fn reference_date(&self) -> Option<Date> {
        self.0.iter().map(CashFlow::date).min()
    }

    /// Returns a copy without the flows whose amount is exactly zero.
    #[must_use]
    pub fn without_zero_amounts(&self) -> Self {
        Self(self.0.iter().filter(|cf| !cf.is_zero()).copied().collect())
    }

    /// Returns true if the collection holds both a positive and a negative amount.
    ///
    /// Without a sign change in the amounts the NPV cannot cross zero.
    #[must_use]
    pub fn has_sign_change(&self) -> bool {
        let positive = self.0.iter().any(|cf| cf.amount > 0.0);
        let negative = self.0.iter().any(|cf| cf.amount < 0.0);
        positive && negative
    }

    /// Returns the number of flows.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns true if there are no flows.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns an iterator over the flows in caller order.
    pub fn iter(&self) -> std::slice::Iter<'_, CashFlow> {
        self.0.iter()
    }

    /// Returns the flows as a slice.
    #[must_use]
    pub fn as_slice(&self) -> &[CashFlow] {
        &self.0
    }
}

impl From<Vec<CashFlow>> for CashFlows {
    fn from(flows: Vec<CashFlow>) -> Self {
        Self(flows)
    }
}

impl FromIterator<CashFlow> for CashFlows {
    fn from_iter<I: IntoIterator<Item = CashFlow>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a CashFlows {
    type Item = &'a CashFlow;
    type IntoIter = std::slice::Iter<'a, CashFlow>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl IntoIterator for CashFlows {
    type Item = CashFlow;
    type IntoIter = std::vec::IntoIter<CashFlow>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}
