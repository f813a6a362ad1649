//! Trend service
//!
//! Fetches a snapshot of accounts and transactions, runs the aggregator and
//! memoizes the report per query until the next write. Repeat queries only
//! hit the memo when they share a `Storage`, as a long-running caller does.

use tracing::debug;

use crate::error::TrendsResult;
use crate::reports::{TrendAggregator, TrendQuery, TrendReport};
use crate::storage::Storage;

/// Service for building trend reports
pub struct TrendService<'a> {
    storage: &'a Storage,
}

impl<'a> TrendService<'a> {
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    /// Build (or reuse) the report for a query
    pub fn report(&self, query: &TrendQuery) -> TrendsResult<TrendReport> {
        if let Some(report) = self.storage.trend_cache.get(query)? {
            debug!(year = query.year, kind = %query.kind, "trend cache hit");
            return Ok(report);
        }

        let accounts = self.storage.accounts.get_all()?;
        let transactions = self.storage.transactions.get_all()?;
        let report = TrendAggregator::new(&accounts, &transactions).aggregate(query);

        self.storage.trend_cache.insert(*query, report.clone())?;
        Ok(report)
    }

    /// Forget every cached report
    pub fn invalidate(&self) -> TrendsResult<()> {
        self.storage.trend_cache.clear()
    }
}
