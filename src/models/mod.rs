//! Core data models for ledger-trends
//!
//! Accounts, transactions, money, ledger dates and the twelve-month series
//! the trend aggregator produces.

pub mod account;
pub mod date;
pub mod ids;
pub mod money;
pub mod series;
pub mod transaction;

pub use account::{Account, AccountType, BalanceSnapshot};
pub use date::parse_ledger_date;
pub use ids::{AccountId, BudgetId, TransactionId};
pub use money::Money;
pub use series::{MonthSeries, MONTHS, MONTH_LABELS};
pub use transaction::{Transaction, TransactionKind};
