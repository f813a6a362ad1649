//! Account service
//!
//! Provides business logic for account management: creation, lookup,
//! balance updates and deletion. Every write invalidates cached trends.

use chrono::NaiveDate;
use tracing::info;

use crate::error::{TrendsError, TrendsResult};
use crate::models::{Account, AccountId, AccountType, Money};
use crate::storage::Storage;

/// Service for account management
pub struct AccountService<'a> {
    storage: &'a Storage,
}

impl<'a> AccountService<'a> {
    /// Create a new account service
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    /// Create a new account holding `balance` as of `today`
    pub fn create(
        &self,
        name: &str,
        account_type: AccountType,
        balance: Money,
        today: NaiveDate,
    ) -> TrendsResult<Account> {
        let name = name.trim();
        if name.is_empty() {
            return Err(TrendsError::Validation(
                "Account name cannot be empty".into(),
            ));
        }

        if self.storage.accounts.name_exists(name, None)? {
            return Err(TrendsError::Duplicate {
                entity_type: "Account",
                identifier: name.to_string(),
            });
        }

        let mut account = Account::new(name, account_type);
        account.set_balance(balance, today);
        account
            .validate()
            .map_err(|e| TrendsError::Validation(e.to_string()))?;

        self.storage.accounts.upsert(account.clone())?;
        self.storage.accounts.save()?;
        self.storage.trend_cache.clear()?;

        info!(account = %account.name, kind = %account.account_type, "created account");
        Ok(account)
    }

    /// Get an account by ID
    pub fn get(&self, id: AccountId) -> TrendsResult<Option<Account>> {
        self.storage.accounts.get(id)
    }

    /// Find an account by name, full ID or short `acc-` ID
    pub fn find(&self, identifier: &str) -> TrendsResult<Option<Account>> {
        if let Some(account) = self.storage.accounts.get_by_name(identifier)? {
            return Ok(Some(account));
        }

        Ok(self
            .storage
            .accounts
            .get_all()?
            .into_iter()
            .find(|a| a.id.matches(identifier)))
    }

    /// Like [`find`](Self::find) but a miss is an error
    pub fn resolve(&self, identifier: &str) -> TrendsResult<Account> {
        self.find(identifier)?
            .ok_or_else(|| TrendsError::account_not_found(identifier))
    }

    /// All accounts in creation order
    pub fn list(&self) -> TrendsResult<Vec<Account>> {
        self.storage.accounts.get_all()
    }

    /// Record a new live balance effective on `date`
    pub fn set_balance(&self, id: AccountId, balance: Money, date: NaiveDate) -> TrendsResult<Account> {
        let mut account = self
            .storage
            .accounts
            .get(id)?
            .ok_or_else(|| TrendsError::account_not_found(id.to_string()))?;

        let previous = account.balance;
        account.set_balance(balance, date);

        self.storage.accounts.upsert(account.clone())?;
        self.storage.accounts.save()?;
        self.storage.trend_cache.clear()?;

        info!(account = %account.name, %previous, %balance, "updated balance");
        Ok(account)
    }

    /// Delete an account. Its transactions stay in the ledger but no longer
    /// contribute to account trends.
    pub fn delete(&self, id: AccountId) -> TrendsResult<Account> {
        let account = self
            .storage
            .accounts
            .get(id)?
            .ok_or_else(|| TrendsError::account_not_found(id.to_string()))?;

        self.storage.accounts.delete(id)?;
        self.storage.accounts.save()?;
        self.storage.trend_cache.clear()?;

        info!(account = %account.name, "deleted account");
        Ok(account)
    }

    pub fn count(&self) -> TrendsResult<usize> {
        self.storage.accounts.count()
    }
}
