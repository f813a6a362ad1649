//! JSON Export functionality
//!
//! Wraps a trend report in a versioned envelope and writes it as JSON.

use std::io::Write;

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::error::{TrendsError, TrendsResult};
use crate::reports::TrendReport;

/// Current export schema version
pub const EXPORT_SCHEMA_VERSION: &str = "1.0.0";

/// Exported trend report with provenance
#[derive(Debug, Clone, Serialize)]
pub struct TrendExport<'a> {
    /// Schema version for compatibility checking
    pub schema_version: &'static str,

    pub exported_at: DateTime<Utc>,

    /// Application version that created the export
    pub app_version: &'static str,

    pub report: &'a TrendReport,
}

impl<'a> TrendExport<'a> {
    pub fn new(report: &'a TrendReport) -> Self {
        Self {
            schema_version: EXPORT_SCHEMA_VERSION,
            exported_at: Utc::now(),
            app_version: env!("CARGO_PKG_VERSION"),
            report,
        }
    }
}

/// Export a trend report to JSON
pub fn export_trend_json<W: Write>(
    report: &TrendReport,
    writer: &mut W,
    pretty: bool,
) -> TrendsResult<()> {
    let export = TrendExport::new(report);

    let result = if pretty {
        serde_json::to_writer_pretty(&mut *writer, &export)
    } else {
        serde_json::to_writer(&mut *writer, &export)
    };
    result.map_err(|e| TrendsError::Export(e.to_string()))?;

    writeln!(writer).map_err(|e| TrendsError::Export(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Account, AccountType, Money};
    use crate::reports::{TrendAggregator, TrendKind, TrendQuery};
    use chrono::NaiveDate;

    #[test]
    fn test_export_json_shape() {
        let accounts = vec![Account::with_balance(
            "a1",
            AccountType::Checking,
            Money::from_units(500),
        )];
        let today = NaiveDate::from_ymd_opt(2026, 10, 19).unwrap();
        let report = TrendAggregator::new(&accounts, &[])
            .aggregate(&TrendQuery::new(2026, TrendKind::Accounts, today));

        let mut buffer = Vec::new();
        export_trend_json(&report, &mut buffer, true).unwrap();

        let value: serde_json::Value = serde_json::from_slice(&buffer).unwrap();
        assert_eq!(value["schema_version"], EXPORT_SCHEMA_VERSION);
        assert_eq!(value["report"]["kind"], "accounts");
        assert_eq!(value["report"]["status"], "ready");
        assert_eq!(value["report"]["net_worth"], 50000);
        assert_eq!(value["report"]["series"][0]["points"][0], 50000);
        assert_eq!(value["report"]["series"][0]["label"], "a1");
    }
}
