//! Transaction model
//!
//! A ledger entry: a signed amount, an `Income`/`Expenses` kind, a calendar
//! date and optional references to the owning account and budget category.

use chrono::{DateTime, Datelike, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::date::deserialize_ledger_date;
use super::ids::{AccountId, BudgetId, TransactionId};
use super::money::Money;

/// Whether a transaction brought money in or sent it out
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TransactionKind {
    Income,
    Expenses,
}

impl TransactionKind {
    /// Parse a kind label (case-insensitive, singular or plural)
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "income" | "inflow" | "in" => Some(Self::Income),
            "expenses" | "expense" | "outflow" | "out" => Some(Self::Expenses),
            _ => None,
        }
    }

    /// Infer the kind from an amount's sign: negative amounts are expenses
    pub fn from_sign(amount: Money) -> Self {
        if amount.is_negative() {
            Self::Expenses
        } else {
            Self::Income
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Income => "Income",
            Self::Expenses => "Expenses",
        }
    }
}

impl fmt::Display for TransactionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.label())
    }
}

/// A financial transaction
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Transaction {
    /// Unique identifier
    pub id: TransactionId,

    /// Signed amount as entered; only its magnitude matters for trends
    pub amount: Money,

    /// Income or Expenses
    #[serde(rename = "type")]
    pub kind: TransactionKind,

    /// Calendar date of the transaction
    #[serde(deserialize_with = "deserialize_ledger_date")]
    pub date: NaiveDate,

    /// Owning account, if any
    #[serde(default)]
    pub account_id: Option<AccountId>,

    /// Owning budget category, if any
    #[serde(default)]
    pub budget_id: Option<BudgetId>,

    #[serde(default)]
    pub memo: String,

    /// When the transaction was recorded
    pub created_at: DateTime<Utc>,
}

impl Transaction {
    /// Create a new transaction with no account or budget reference
    pub fn new(kind: TransactionKind, amount: Money, date: NaiveDate) -> Self {
        Self {
            id: TransactionId::new(),
            amount,
            kind,
            date,
            account_id: None,
            budget_id: None,
            memo: String::new(),
            created_at: Utc::now(),
        }
    }

    /// Attach an owning account
    pub fn with_account(mut self, account_id: AccountId) -> Self {
        self.account_id = Some(account_id);
        self
    }

    /// Attach an owning budget category
    pub fn with_budget(mut self, budget_id: BudgetId) -> Self {
        self.budget_id = Some(budget_id);
        self
    }

    pub fn with_memo(mut self, memo: impl Into<String>) -> Self {
        self.memo = memo.into();
        self
    }

    pub fn year(&self) -> i32 {
        self.date.year()
    }

    /// Zero-based month index (0 = January)
    pub fn month_index(&self) -> usize {
        self.date.month0() as usize
    }

    /// Change this transaction made to its account's balance.
    ///
    /// Income raised the balance by the absolute amount, expenses lowered it,
    /// whatever sign the amount was entered with.
    pub fn balance_effect(&self) -> Money {
        match self.kind {
            TransactionKind::Income => self.amount.abs(),
            TransactionKind::Expenses => -self.amount.abs(),
        }
    }
}

impl fmt::Display for Transaction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.date, self.kind, self.amount)
    }
}
