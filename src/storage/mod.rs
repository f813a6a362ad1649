//! Storage layer for ledger-trends
//!
//! JSON file storage for accounts and transactions with atomic writes and
//! automatic directory creation. This is the fetch layer the trend service
//! reads its snapshots from.

pub mod accounts;
pub mod cache;
pub mod file_io;
pub mod transactions;

pub use accounts::AccountRepository;
pub use cache::TrendCache;
pub use file_io::{read_json, write_json_atomic};
pub use transactions::TransactionRepository;

use crate::config::paths::TrendsPaths;
use crate::error::TrendsError;

/// Main storage coordinator that provides access to all repositories
pub struct Storage {
    paths: TrendsPaths,
    pub accounts: AccountRepository,
    pub transactions: TransactionRepository,
    pub trend_cache: TrendCache,
}

impl Storage {
    /// Create a new Storage instance
    pub fn new(paths: TrendsPaths) -> Result<Self, TrendsError> {
        paths.ensure_directories()?;

        Ok(Self {
            accounts: AccountRepository::new(paths.accounts_file()),
            transactions: TransactionRepository::new(paths.transactions_file()),
            trend_cache: TrendCache::new(),
            paths,
        })
    }

    /// Get the paths configuration
    pub fn paths(&self) -> &TrendsPaths {
        &self.paths
    }

    /// Load all data from disk
    pub fn load_all(&mut self) -> Result<(), TrendsError> {
        self.accounts.load()?;
        self.transactions.load()?;
        self.trend_cache.clear()
    }

    /// Save all data to disk
    pub fn save_all(&self) -> Result<(), TrendsError> {
        self.accounts.save()?;
        self.transactions.save()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_storage_creation() {
        let temp_dir = TempDir::new().unwrap();
        let paths = TrendsPaths::with_base_dir(temp_dir.path().to_path_buf());
        let mut storage = Storage::new(paths).unwrap();
        storage.load_all().unwrap();

        assert!(temp_dir.path().join("data").exists());
        assert_eq!(storage.accounts.count().unwrap(), 0);
        storage.save_all().unwrap();
        assert!(storage.paths().accounts_file().exists());
        assert!(storage.paths().transactions_file().exists());
    }
}
