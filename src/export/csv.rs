//! CSV Export functionality
//!
//! One row per series with a column per month. Gaps are empty cells.

use std::io::Write;

use crate::error::{TrendsError, TrendsResult};
use crate::models::MONTH_LABELS;
use crate::reports::TrendReport;

/// Export a trend report to CSV
pub fn export_trend_csv<W: Write>(report: &TrendReport, writer: W) -> TrendsResult<()> {
    let mut out = csv::Writer::from_writer(writer);
    let map_err = |e: csv::Error| TrendsError::Export(e.to_string());

    let mut header = vec!["series", "label", "liability"];
    header.extend(MONTH_LABELS);
    out.write_record(&header).map_err(map_err)?;

    for series in &report.series {
        let mut record = vec![
            series.key.to_string(),
            series.label.clone(),
            series.liability.to_string(),
        ];
        record.extend(
            series
                .points
                .iter()
                .map(|value| value.map(|m| m.format_with_symbol("")).unwrap_or_default()),
        );
        out.write_record(&record).map_err(map_err)?;
    }

    out.flush().map_err(|e| TrendsError::Export(e.to_string()))
}
