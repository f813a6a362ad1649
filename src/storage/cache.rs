//! Memo of computed trend reports
//!
//! Reports are cached per query and dropped wholesale whenever accounts or
//! transactions change.
//!
//! The memo lives as long as its `Storage`. A single `trends` invocation asks
//! for one report, so hits come from library callers that keep one `Storage`
//! open and query it repeatedly.

use std::collections::HashMap;
use std::sync::RwLock;

use crate::error::TrendsError;
use crate::reports::{TrendQuery, TrendReport};

#[derive(Default)]
pub struct TrendCache {
    reports: RwLock<HashMap<TrendQuery, TrendReport>>,
}

impl TrendCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, query: &TrendQuery) -> Result<Option<TrendReport>, TrendsError> {
        let reports = self
            .reports
            .read()
            .map_err(|e| TrendsError::Storage(format!("Failed to acquire read lock: {}", e)))?;
        Ok(reports.get(query).cloned())
    }

    pub fn insert(&self, query: TrendQuery, report: TrendReport) -> Result<(), TrendsError> {
        let mut reports = self
            .reports
            .write()
            .map_err(|e| TrendsError::Storage(format!("Failed to acquire write lock: {}", e)))?;
        reports.insert(query, report);
        Ok(())
    }

    /// Drop every cached report
    pub fn clear(&self) -> Result<(), TrendsError> {
        let mut reports = self
            .reports
            .write()
            .map_err(|e| TrendsError::Storage(format!("Failed to acquire write lock: {}", e)))?;
        reports.clear();
        Ok(())
    }

    pub fn len(&self) -> Result<usize, TrendsError> {
        let reports = self
            .reports
            .read()
            .map_err(|e| TrendsError::Storage(format!("Failed to acquire read lock: {}", e)))?;
        Ok(reports.len())
    }
}
