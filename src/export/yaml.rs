//! YAML Export functionality
//!
//! Same envelope as the JSON export, for reading by humans.

use std::io::Write;

use crate::error::{TrendsError, TrendsResult};
use crate::export::json::TrendExport;
use crate::reports::TrendReport;

/// Export a trend report to YAML
pub fn export_trend_yaml<W: Write>(report: &TrendReport, writer: &mut W) -> TrendsResult<()> {
    let export = TrendExport::new(report);
    let map_err = |e: std::io::Error| TrendsError::Export(e.to_string());

    writeln!(writer, "# ledger-trends {} trend for {}", report.kind, report.year).map_err(map_err)?;
    writeln!(writer, "# Generated: {}", export.exported_at).map_err(map_err)?;
    writeln!(writer, "# Amounts are in cents; null marks a month with no value.").map_err(map_err)?;

    serde_yaml::to_writer(writer, &export).map_err(|e| TrendsError::Export(e.to_string()))
}
