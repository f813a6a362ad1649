//! CLI command handlers
//!
//! This module contains the implementation of CLI commands,
//! bridging the clap argument parsing with the service layer.

pub mod account;
pub mod import;
pub mod transaction;
pub mod trend;

pub use account::{handle_account_command, AccountCommands};
pub use import::{handle_import_command, ImportArgs};
pub use transaction::{handle_transaction_command, TransactionCommands};
pub use trend::{handle_trend_command, ExportFormat, TrendArgs};
