//! Configuration module for ledger-trends
//!
//! This module provides configuration management including:
//! - XDG-compliant path resolution
//! - User settings persistence

pub mod paths;
pub mod settings;

pub use paths::TrendsPaths;
pub use settings::Settings;
