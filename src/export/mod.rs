//! Export module for ledger-trends
//!
//! Writes a trend report in several formats:
//! - CSV: one row per series (spreadsheet-compatible)
//! - JSON: versioned, machine-readable
//! - YAML: versioned, human-readable

pub mod csv;
pub mod json;
pub mod yaml;

pub use self::csv::export_trend_csv;
pub use json::{export_trend_json, TrendExport, EXPORT_SCHEMA_VERSION};
pub use yaml::export_trend_yaml;
