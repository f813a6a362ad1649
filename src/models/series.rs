//! Month series
//!
//! A fixed twelve-point series for one calendar year, index 0 = January.
//! `None` marks a gap (a month not yet reached), which renderers must draw
//! as a gap and never as zero.

use serde::{Deserialize, Serialize};

use super::money::Money;

/// Number of points in a series
pub const MONTHS: usize = 12;

/// Short month labels, index 0 = January
pub const MONTH_LABELS: [&str; MONTHS] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

/// Twelve monthly values for one year
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MonthSeries([Option<Money>; MONTHS]);

impl MonthSeries {
    /// A series with every month empty
    pub const fn empty() -> Self {
        Self([None; MONTHS])
    }

    /// A flat series with every month set to `value`
    pub const fn flat(value: Money) -> Self {
        Self([Some(value); MONTHS])
    }

    /// A series of twelve zeros
    pub const fn zeros() -> Self {
        Self::flat(Money::zero())
    }

    /// Value for a month; out-of-range indices read as a gap
    pub fn get(&self, month: usize) -> Option<Money> {
        self.0.get(month).copied().flatten()
    }

    /// Set every month strictly before `month` to `value`
    pub fn fill_before(&mut self, month: usize, value: Money) {
        for slot in self.0.iter_mut().take(month.min(MONTHS)) {
            *slot = Some(value);
        }
    }

    /// Set every month in `from..=to` to `value`
    pub fn fill_range(&mut self, from: usize, to: usize, value: Money) {
        let end = to.min(MONTHS - 1);
        for slot in self.0.iter_mut().take(end + 1).skip(from) {
            *slot = Some(value);
        }
    }

    /// Add `amount` into a month, treating a gap as zero
    pub fn accumulate(&mut self, month: usize, amount: Money) {
        if let Some(slot) = self.0.get_mut(month) {
            *slot = Some(slot.unwrap_or_default() + amount);
        }
    }

    /// Sum of all present values
    pub fn total(&self) -> Money {
        self.0.iter().flatten().copied().sum()
    }

    /// True when every month is a gap
    pub fn is_empty(&self) -> bool {
        self.0.iter().all(Option::is_none)
    }

    pub fn iter(&self) -> impl Iterator<Item = Option<Money>> + '_ {
        self.0.iter().copied()
    }
}
