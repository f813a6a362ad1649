//! Display formatting for terminal output
//!
//! Provides utilities for formatting accounts, the transaction register and
//! trend reports for terminal display.

pub mod account;
pub mod report;
pub mod transaction;
pub mod trend;

pub use account::{format_account_details, format_account_list};
pub use transaction::format_transaction_register;
pub use trend::{format_trend_report, TrendDisplayOptions};
