//! Transaction repository for JSON storage
//!
//! Manages loading and saving transactions to transactions.json. The ledger
//! is kept sorted ascending by date (ties by creation time), which is the
//! order the trend aggregator and listings receive it in. Rows that no
//! longer deserialize are dropped on load with a warning instead of failing
//! the whole ledger.

use std::path::PathBuf;
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use tracing::warn;

use crate::error::TrendsError;
use crate::models::{Transaction, TransactionId};

use super::file_io::{read_json, write_json_atomic};

#[derive(Debug, Clone, Default, serde::Serialize)]
struct TransactionData {
    transactions: Vec<Transaction>,
}

/// On-disk shape read row by row, so one bad row cannot sink the rest
#[derive(Debug, Default, serde::Deserialize)]
struct RawTransactionData {
    #[serde(default)]
    transactions: Vec<serde_json::Value>,
}

/// Repository for transaction persistence
pub struct TransactionRepository {
    path: PathBuf,
    data: RwLock<Vec<Transaction>>,
}

fn ledger_order(a: &Transaction, b: &Transaction) -> std::cmp::Ordering {
    a.date.cmp(&b.date).then(a.created_at.cmp(&b.created_at))
}

impl TransactionRepository {
    /// Create a new transaction repository
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            data: RwLock::new(Vec::new()),
        }
    }

    fn read(&self) -> Result<RwLockReadGuard<'_, Vec<Transaction>>, TrendsError> {
        self.data
            .read()
            .map_err(|e| TrendsError::Storage(format!("Failed to acquire read lock: {}", e)))
    }

    fn write(&self) -> Result<RwLockWriteGuard<'_, Vec<Transaction>>, TrendsError> {
        self.data
            .write()
            .map_err(|e| TrendsError::Storage(format!("Failed to acquire write lock: {}", e)))
    }

    /// Load transactions from disk
    pub fn load(&self) -> Result<(), TrendsError> {
        let raw: RawTransactionData = read_json(&self.path)?;

        let mut transactions = Vec::with_capacity(raw.transactions.len());
        for (index, row) in raw.transactions.into_iter().enumerate() {
            match serde_json::from_value::<Transaction>(row) {
                Ok(txn) => transactions.push(txn),
                Err(e) => warn!(
                    path = %self.path.display(),
                    index,
                    error = %e,
                    "dropping unreadable transaction"
                ),
            }
        }

        transactions.sort_by(ledger_order);
        *self.write()? = transactions;
        Ok(())
    }

    /// Save transactions to disk
    pub fn save(&self) -> Result<(), TrendsError> {
        let file_data = TransactionData {
            transactions: self.read()?.clone(),
        };
        write_json_atomic(&self.path, &file_data)
    }

    /// Get a transaction by ID
    pub fn get(&self, id: TransactionId) -> Result<Option<Transaction>, TrendsError> {
        Ok(self.read()?.iter().find(|t| t.id == id).cloned())
    }

    /// Get the whole ledger, ascending by date
    pub fn get_all(&self) -> Result<Vec<Transaction>, TrendsError> {
        Ok(self.read()?.clone())
    }

    /// Get transactions dated in a calendar year
    pub fn get_by_year(&self, year: i32) -> Result<Vec<Transaction>, TrendsError> {
        Ok(self
            .read()?
            .iter()
            .filter(|t| t.year() == year)
            .cloned()
            .collect())
    }

    /// Insert a transaction at its place in date order
    pub fn insert(&self, txn: Transaction) -> Result<(), TrendsError> {
        let mut data = self.write()?;
        let pos = data.partition_point(|t| ledger_order(t, &txn).is_le());
        data.insert(pos, txn);
        Ok(())
    }

    /// Insert many transactions, re-sorting once
    pub fn insert_batch(&self, txns: Vec<Transaction>) -> Result<(), TrendsError> {
        let mut data = self.write()?;
        data.extend(txns);
        data.sort_by(ledger_order);
        Ok(())
    }

    /// Delete a transaction, returning whether it existed
    pub fn delete(&self, id: TransactionId) -> Result<bool, TrendsError> {
        let mut data = self.write()?;
        let before = data.len();
        data.retain(|t| t.id != id);
        Ok(data.len() != before)
    }

    pub fn count(&self) -> Result<usize, TrendsError> {
        Ok(self.read()?.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{AccountId, Money, TransactionKind};
    use chrono::NaiveDate;
    use std::fs;
    use tempfile::TempDir;

    fn create_test_repo() -> (TempDir, TransactionRepository) {
        let temp_dir = TempDir::new().unwrap();
        let repo = TransactionRepository::new(temp_dir.path().join("transactions.json"));
        repo.load().unwrap();
        (temp_dir, repo)
    }

    fn txn(y: i32, m: u32, d: u32) -> Transaction {
        Transaction::new(
            TransactionKind::Expenses,
            Money::from_units(-1),
            NaiveDate::from_ymd_opt(y, m, d).unwrap(),
        )
    }

    #[test]
    fn test_insert_keeps_date_order() {
        let (_temp_dir, repo) = create_test_repo();
        repo.insert(txn(2026, 5, 1)).unwrap();
        repo.insert(txn(2025, 1, 1)).unwrap();
        repo.insert(txn(2026, 2, 1)).unwrap();

        let dates: Vec<_> = repo.get_all().unwrap().iter().map(|t| t.date.to_string()).collect();
        assert_eq!(dates, vec!["2025-01-01", "2026-02-01", "2026-05-01"]);
    }

    #[test]
    fn test_filters() {
        let (_temp_dir, repo) = create_test_repo();
        let account = AccountId::new();
        repo.insert_batch(vec![
            txn(2026, 1, 1).with_account(account),
            txn(2025, 1, 1).with_account(account),
            txn(2026, 3, 1),
        ])
        .unwrap();

        assert_eq!(repo.get_by_year(2026).unwrap().len(), 2);
        let owned = repo
            .get_all()
            .unwrap()
            .iter()
            .filter(|t| t.account_id == Some(account))
            .count();
        assert_eq!(owned, 2);
        assert_eq!(repo.get_all().unwrap()[0].year(), 2025);
    }

    #[test]
    fn test_save_reload_and_delete() {
        let (temp_dir, repo) = create_test_repo();
        let keep = txn(2026, 1, 1);
        let drop = txn(2026, 1, 2);
        repo.insert(keep.clone()).unwrap();
        repo.insert(drop.clone()).unwrap();
        assert!(repo.delete(drop.id).unwrap());
        repo.save().unwrap();

        let reloaded = TransactionRepository::new(temp_dir.path().join("transactions.json"));
        reloaded.load().unwrap();
        assert_eq!(reloaded.count().unwrap(), 1);
        assert!(reloaded.get(keep.id).unwrap().is_some());
        assert!(reloaded.get(drop.id).unwrap().is_none());
    }

    #[test]
    fn test_unreadable_rows_are_dropped_on_load() {
        let (temp_dir, repo) = create_test_repo();
        let good = txn(2026, 3, 1);
        let mut odd_day = serde_json::to_value(txn(2026, 1, 1)).unwrap();
        odd_day["date"] = "2026-02-30".into();
        let mut garbage = serde_json::to_value(txn(2026, 1, 1)).unwrap();
        garbage["date"] = "someday".into();

        let ledger = serde_json::json!({
            "transactions": [serde_json::to_value(&good).unwrap(), odd_day, garbage]
        });
        let path = temp_dir.path().join("transactions.json");
        fs::write(&path, ledger.to_string()).unwrap();

        repo.load().unwrap();
        let loaded = repo.get_all().unwrap();
        assert_eq!(loaded.len(), 2);
        assert_eq!(loaded[0].date, NaiveDate::from_ymd_opt(2026, 2, 1).unwrap());
        assert_eq!(loaded[1].id, good.id);
    }
}
