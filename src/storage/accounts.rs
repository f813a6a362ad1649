//! Account repository for JSON storage
//!
//! Manages loading and saving accounts to accounts.json. Accounts keep their
//! creation order, which is also the order of series in an accounts trend.

use std::path::PathBuf;
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::error::TrendsError;
use crate::models::{Account, AccountId};

use super::file_io::{read_json, write_json_atomic};

#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
struct AccountData {
    accounts: Vec<Account>,
}

/// Repository for account persistence
pub struct AccountRepository {
    path: PathBuf,
    data: RwLock<Vec<Account>>,
}

impl AccountRepository {
    /// Create a new account repository
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            data: RwLock::new(Vec::new()),
        }
    }

    fn read(&self) -> Result<RwLockReadGuard<'_, Vec<Account>>, TrendsError> {
        self.data
            .read()
            .map_err(|e| TrendsError::Storage(format!("Failed to acquire read lock: {}", e)))
    }

    fn write(&self) -> Result<RwLockWriteGuard<'_, Vec<Account>>, TrendsError> {
        self.data
            .write()
            .map_err(|e| TrendsError::Storage(format!("Failed to acquire write lock: {}", e)))
    }

    /// Load accounts from disk
    pub fn load(&self) -> Result<(), TrendsError> {
        let file_data: AccountData = read_json(&self.path)?;
        *self.write()? = file_data.accounts;
        Ok(())
    }

    /// Save accounts to disk
    pub fn save(&self) -> Result<(), TrendsError> {
        let file_data = AccountData {
            accounts: self.read()?.clone(),
        };
        write_json_atomic(&self.path, &file_data)
    }

    /// Get an account by ID
    pub fn get(&self, id: AccountId) -> Result<Option<Account>, TrendsError> {
        Ok(self.read()?.iter().find(|a| a.id == id).cloned())
    }

    /// Get all accounts in creation order
    pub fn get_all(&self) -> Result<Vec<Account>, TrendsError> {
        Ok(self.read()?.clone())
    }

    /// Get an account by name (case-insensitive)
    pub fn get_by_name(&self, name: &str) -> Result<Option<Account>, TrendsError> {
        let name_lower = name.trim().to_lowercase();
        Ok(self
            .read()?
            .iter()
            .find(|a| a.name.to_lowercase() == name_lower)
            .cloned())
    }

    /// Check whether another account already uses this name
    pub fn name_exists(&self, name: &str, exclude: Option<AccountId>) -> Result<bool, TrendsError> {
        let name_lower = name.trim().to_lowercase();
        Ok(self
            .read()?
            .iter()
            .any(|a| Some(a.id) != exclude && a.name.to_lowercase() == name_lower))
    }

    /// Insert a new account or replace the one with the same ID in place
    pub fn upsert(&self, account: Account) -> Result<(), TrendsError> {
        let mut data = self.write()?;
        match data.iter_mut().find(|a| a.id == account.id) {
            Some(existing) => *existing = account,
            None => data.push(account),
        }
        Ok(())
    }

    /// Delete an account, returning whether it existed
    pub fn delete(&self, id: AccountId) -> Result<bool, TrendsError> {
        let mut data = self.write()?;
        let before = data.len();
        data.retain(|a| a.id != id);
        Ok(data.len() != before)
    }

    pub fn count(&self) -> Result<usize, TrendsError> {
        Ok(self.read()?.len())
    }
}
