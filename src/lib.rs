//! ledger-trends - month-by-month balance and budget trends
//!
//! This library rebuilds the end-of-month balance of every account for a
//! calendar year by walking a transaction ledger backward from today's
//! balances, and totals income and expenses per month. The results feed a
//! terminal table, a bar chart or a CSV/JSON/YAML export.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Configuration and path management
//! - `error`: Custom error types
//! - `models`: Core data models (accounts, transactions, money, month series)
//! - `reports`: The trend aggregator
//! - `storage`: JSON file storage layer and report cache
//! - `services`: Business logic layer
//! - `display`: Terminal formatting
//! - `export`: CSV, JSON and YAML writers
//! - `cli`: Command handlers for the `trends` binary
//!
//! # Example
//!
//! ```rust
//! use chrono::NaiveDate;
//! use ledger_trends::models::{Account, AccountType, Money, Transaction, TransactionKind};
//! use ledger_trends::reports::{TrendAggregator, TrendKind, TrendQuery};
//!
//! let account = Account::with_balance("Checking", AccountType::Checking, Money::from_units(500));
//! let ledger = vec![Transaction::new(
//!     TransactionKind::Expenses,
//!     Money::from_units(-100),
//!     NaiveDate::from_ymd_opt(2026, 3, 1).unwrap(),
//! )
//! .with_account(account.id)];
//! let accounts = vec![account];
//!
//! let today = NaiveDate::from_ymd_opt(2026, 10, 19).unwrap();
//! let report = TrendAggregator::new(&accounts, &ledger)
//!     .aggregate(&TrendQuery::new(2026, TrendKind::Accounts, today));
//!
//! assert_eq!(report.series[0].points.get(0), Some(Money::from_units(600)));
//! assert_eq!(report.net_worth, Some(Money::from_units(500)));
//! ```

pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod export;
pub mod models;
pub mod reports;
pub mod services;
pub mod storage;

pub use error::{TrendsError, TrendsResult};
