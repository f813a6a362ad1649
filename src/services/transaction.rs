//! Transaction service
//!
//! Adds, lists and deletes ledger entries. The account reference, when
//! given, must name an existing account at the time of entry.

use tracing::info;

use crate::error::{TrendsError, TrendsResult};
use crate::models::{Transaction, TransactionId};
use crate::storage::Storage;

/// Service for transaction management
pub struct TransactionService<'a> {
    storage: &'a Storage,
}

impl<'a> TransactionService<'a> {
    /// Create a new transaction service
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    /// Add a transaction to the ledger
    pub fn add(&self, txn: Transaction) -> TrendsResult<Transaction> {
        if txn.amount.is_zero() {
            return Err(TrendsError::Validation(
                "Transaction amount cannot be zero".into(),
            ));
        }

        if let Some(account_id) = txn.account_id {
            if self.storage.accounts.get(account_id)?.is_none() {
                return Err(TrendsError::account_not_found(account_id.to_string()));
            }
        }

        self.storage.transactions.insert(txn.clone())?;
        self.storage.transactions.save()?;
        self.storage.trend_cache.clear()?;

        info!(date = %txn.date, kind = %txn.kind, amount = %txn.amount, "added transaction");
        Ok(txn)
    }

    /// Get a transaction by ID
    pub fn get(&self, id: TransactionId) -> TrendsResult<Option<Transaction>> {
        self.storage.transactions.get(id)
    }

    /// Find a transaction by full ID or short `txn-` ID
    pub fn find(&self, identifier: &str) -> TrendsResult<Option<Transaction>> {
        if let Ok(id) = identifier.parse::<TransactionId>() {
            return self.storage.transactions.get(id);
        }

        let input = identifier.trim();
        Ok(self
            .storage
            .transactions
            .get_all()?
            .into_iter()
            .find(|t| t.id.short().eq_ignore_ascii_case(input)))
    }

    /// List the ledger ascending by date, optionally limited to one year
    pub fn list(&self, year: Option<i32>) -> TrendsResult<Vec<Transaction>> {
        match year {
            Some(year) => self.storage.transactions.get_by_year(year),
            None => self.storage.transactions.get_all(),
        }
    }

    /// Delete a transaction
    pub fn delete(&self, id: TransactionId) -> TrendsResult<Transaction> {
        let txn = self
            .storage
            .transactions
            .get(id)?
            .ok_or_else(|| TrendsError::transaction_not_found(id.to_string()))?;

        self.storage.transactions.delete(id)?;
        self.storage.transactions.save()?;
        self.storage.trend_cache.clear()?;

        info!(date = %txn.date, amount = %txn.amount, "deleted transaction");
        Ok(txn)
    }
}
