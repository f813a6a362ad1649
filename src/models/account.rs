//! Account model
//!
//! Represents financial accounts with a live balance and a history of
//! balance snapshots. Balances change only through explicit user updates;
//! they are never derived from the transaction ledger.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::AccountId;
use super::money::Money;

/// Type of financial account
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AccountType {
    /// Checking account
    #[default]
    Checking,
    /// Savings account
    Savings,
    /// Cash/wallet
    Cash,
    /// Investment account
    Investment,
    /// Credit card
    Credit,
    /// Loan (mortgage, auto, student)
    Loan,
    /// Line of credit
    LineOfCredit,
    /// Other asset
    Other,
}

impl AccountType {
    /// Returns true for liability-like types.
    ///
    /// This is the single classification used for both the chart series flag
    /// and the sign of an account in net worth.
    pub fn is_liability(&self) -> bool {
        matches!(self, Self::Credit | Self::Loan | Self::LineOfCredit)
    }

    /// Sign applied to this account's balance when summing net worth
    pub fn net_worth_sign(&self) -> i64 {
        if self.is_liability() {
            -1
        } else {
            1
        }
    }

    /// Parse account type from string
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "checking" => Some(Self::Checking),
            "savings" => Some(Self::Savings),
            "cash" => Some(Self::Cash),
            "investment" | "brokerage" => Some(Self::Investment),
            "asset" | "other" => Some(Self::Other),
            "credit" | "credit_card" | "creditcard" => Some(Self::Credit),
            "loan" | "mortgage" => Some(Self::Loan),
            "line_of_credit" | "lineofcredit" | "loc" | "liability" => Some(Self::LineOfCredit),
            _ => None,
        }
    }
}

impl fmt::Display for AccountType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Checking => "Checking",
            Self::Savings => "Savings",
            Self::Cash => "Cash",
            Self::Investment => "Investment",
            Self::Credit => "Credit Card",
            Self::Loan => "Loan",
            Self::LineOfCredit => "Line of Credit",
            Self::Other => "Other",
        };
        f.pad(label)
    }
}

/// A recorded balance, effective from the given date
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BalanceSnapshot {
    pub balance: Money,
    pub effective_date: NaiveDate,
}

/// A financial account
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Account {
    /// Unique identifier
    pub id: AccountId,

    /// Account name (e.g., "Chase Checking")
    pub name: String,

    /// Type of account
    #[serde(rename = "type")]
    pub account_type: AccountType,

    /// Live balance. Liability balances hold the amount owed as a positive number.
    pub balance: Money,

    /// Balance snapshots, oldest first
    #[serde(default)]
    pub history: Vec<BalanceSnapshot>,

    /// When the account was created
    pub created_at: DateTime<Utc>,

    /// When the account was last modified
    pub updated_at: DateTime<Utc>,
}

impl Account {
    /// Create a new account with a zero balance
    pub fn new(name: impl Into<String>, account_type: AccountType) -> Self {
        let now = Utc::now();
        Self {
            id: AccountId::new(),
            name: name.into(),
            account_type,
            balance: Money::zero(),
            history: Vec::new(),
            created_at: now,
            updated_at: now,
        }
    }

    /// Create a new account holding the given balance
    pub fn with_balance(name: impl Into<String>, account_type: AccountType, balance: Money) -> Self {
        let mut account = Self::new(name, account_type);
        account.balance = balance;
        account
    }

    pub fn is_liability(&self) -> bool {
        self.account_type.is_liability()
    }

    /// Record a new live balance, keeping the history ordered by effective date
    pub fn set_balance(&mut self, balance: Money, effective_date: NaiveDate) {
        let snapshot = BalanceSnapshot {
            balance,
            effective_date,
        };
        let pos = self
            .history
            .partition_point(|s| s.effective_date <= effective_date);
        self.history.insert(pos, snapshot);
        self.balance = balance;
        self.updated_at = Utc::now();
    }

    /// The most recent recorded balance effective on or before `date`
    pub fn balance_on(&self, date: NaiveDate) -> Option<Money> {
        self.history
            .iter()
            .rev()
            .find(|s| s.effective_date <= date)
            .map(|s| s.balance)
    }

    /// Validate the account
    pub fn validate(&self) -> Result<(), AccountValidationError> {
        if self.name.trim().is_empty() {
            return Err(AccountValidationError::EmptyName);
        }

        if self.name.len() > 100 {
            return Err(AccountValidationError::NameTooLong(self.name.len()));
        }

        Ok(())
    }
}

impl fmt::Display for Account {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.account_type)
    }
}

/// Validation errors for accounts
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AccountValidationError {
    EmptyName,
    NameTooLong(usize),
}

impl fmt::Display for AccountValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyName => write!(f, "Account name cannot be empty"),
            Self::NameTooLong(len) => {
                write!(f, "Account name too long ({} chars, max 100)", len)
            }
        }
    }
}

impl std::error::Error for AccountValidationError {}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_liability_partition() {
        let all = [
            AccountType::Checking,
            AccountType::Savings,
            AccountType::Cash,
            AccountType::Investment,
            AccountType::Other,
            AccountType::Credit,
            AccountType::Loan,
            AccountType::LineOfCredit,
        ];
        let liabilities: Vec<_> = all
            .iter()
            .filter(|t| t.is_liability())
            .collect();
        assert_eq!(
            liabilities,
            vec![&AccountType::Credit, &AccountType::Loan, &AccountType::LineOfCredit]
        );
        assert_eq!(AccountType::Loan.net_worth_sign(), -1);
        assert_eq!(AccountType::Savings.net_worth_sign(), 1);
    }

    #[test]
    fn test_account_type_parsing() {
        assert_eq!(AccountType::parse("checking"), Some(AccountType::Checking));
        assert_eq!(AccountType::parse(" Mortgage "), Some(AccountType::Loan));
        assert_eq!(AccountType::parse("asset"), Some(AccountType::Other));
        assert_eq!(AccountType::parse("liability"), Some(AccountType::LineOfCredit));
        assert_eq!(AccountType::parse("crypto"), None);
    }

    #[test]
    fn test_set_balance_keeps_history_ordered() {
        let mut account = Account::new("Checking", AccountType::Checking);
        account.set_balance(Money::from_units(300), date(2026, 5, 1));
        account.set_balance(Money::from_units(100), date(2026, 1, 1));

        assert_eq!(account.balance, Money::from_units(100));
        assert_eq!(account.history[0].effective_date, date(2026, 1, 1));
        assert_eq!(account.history[1].effective_date, date(2026, 5, 1));
    }

    #[test]
    fn test_balance_on() {
        let mut account = Account::new("Savings", AccountType::Savings);
        account.set_balance(Money::from_units(100), date(2026, 1, 10));
        account.set_balance(Money::from_units(250), date(2026, 3, 10));

        assert_eq!(account.balance_on(date(2026, 1, 1)), None);
        assert_eq!(account.balance_on(date(2026, 2, 1)), Some(Money::from_units(100)));
        assert_eq!(account.balance_on(date(2026, 3, 10)), Some(Money::from_units(250)));
    }

    #[test]
    fn test_validation() {
        let mut account = Account::new("Valid Name", AccountType::Checking);
        assert!(account.validate().is_ok());

        account.name = "  ".into();
        assert_eq!(account.validate(), Err(AccountValidationError::EmptyName));

        account.name = "a".repeat(101);
        assert!(matches!(
            account.validate(),
            Err(AccountValidationError::NameTooLong(101))
        ));
    }

    #[test]
    fn test_serialization_uses_type_key() {
        let account = Account::with_balance("Visa", AccountType::Credit, Money::from_units(5));
        let json = serde_json::to_value(&account).unwrap();
        assert_eq!(json["type"], "credit");
        assert_eq!(json["balance"], 500);

        let back: Account = serde_json::from_value(json).unwrap();
        assert_eq!(back.id, account.id);
        assert!(back.is_liability());
    }
}
