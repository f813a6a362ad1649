//! Service layer for ledger-trends
//!
//! The service layer provides business logic on top of the storage layer,
//! handling validation, lookups by name or ID, and trend cache invalidation.

pub mod account;
pub mod import;
pub mod transaction;
pub mod trend;

pub use account::AccountService;
pub use import::{ImportResult, ImportService};
pub use transaction::TransactionService;
pub use trend::TrendService;
