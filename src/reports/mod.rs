//! Reports module for ledger-trends
//!
//! The trend report is the heart of the tool: it rebuilds month-by-month
//! account balances, or sums monthly income and expenses, for one year.

pub mod trend;

pub use trend::{
    SeriesKey, TrendAggregator, TrendKind, TrendQuery, TrendReport, TrendSeries, TrendStatus,
};
