//! Trend CLI command
//!
//! Shows a year of account balances or income and expenses, or writes the
//! report to a file in one of the export formats.

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

use chrono::{Datelike, NaiveDate};
use clap::{Args, ValueEnum};
use tracing::info;

use crate::config::Settings;
use crate::display::{format_trend_report, TrendDisplayOptions};
use crate::error::{TrendsError, TrendsResult};
use crate::export::{export_trend_csv, export_trend_json, export_trend_yaml};
use crate::models::BudgetId;
use crate::reports::{TrendKind, TrendQuery};
use crate::services::TrendService;
use crate::storage::Storage;

/// Export format options
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum ExportFormat {
    /// CSV, one row per series
    Csv,
    /// JSON (pretty-printed)
    Json,
    /// YAML, human-readable
    Yaml,
}

impl ExportFormat {
    fn extension(self) -> &'static str {
        match self {
            Self::Csv => "csv",
            Self::Json => "json",
            Self::Yaml => "yaml",
        }
    }
}

/// Arguments of `trends trend`
#[derive(Args, Debug, Default)]
pub struct TrendArgs {
    /// accounts or budgets (default from settings)
    #[arg(short, long)]
    pub kind: Option<String>,

    /// Calendar year (default: the current year)
    #[arg(short, long)]
    pub year: Option<i32>,

    /// Limit a budgets trend to one budget category ID
    #[arg(short, long)]
    pub budget: Option<String>,

    /// Draw a bar chart of the monthly net below the table
    #[arg(long)]
    pub chart: bool,

    /// Write the report in this format instead of a table
    #[arg(short, long, value_enum)]
    pub format: Option<ExportFormat>,

    /// Output file for --format (default: stdout)
    #[arg(short, long, requires = "format")]
    pub output: Option<PathBuf>,

    /// Save --format output as <kind>-<year>.<ext> in the export directory
    #[arg(short, long, requires = "format", conflicts_with = "output")]
    pub save: bool,
}

/// Handle the trend command
pub fn handle_trend_command(
    storage: &Storage,
    settings: &Settings,
    args: TrendArgs,
    today: NaiveDate,
) -> TrendsResult<()> {
    let kind = match args.kind.as_deref() {
        Some(raw) => TrendKind::parse(raw).ok_or_else(|| {
            TrendsError::Validation(format!("Invalid trend kind '{}'. Use accounts or budgets", raw))
        })?,
        None => settings.default_kind,
    };

    let mut query = TrendQuery::new(args.year.unwrap_or_else(|| today.year()), kind, today);
    if let Some(budget) = args.budget.as_deref() {
        let budget = budget
            .parse::<BudgetId>()
            .map_err(|_| TrendsError::Validation(format!("Invalid budget id '{}'", budget)))?;
        query = query.with_budget(budget);
    }

    let report = TrendService::new(storage).report(&query)?;

    let Some(format) = args.format else {
        let options = TrendDisplayOptions {
            currency_symbol: settings.currency_symbol.clone(),
            chart_width: args.chart.then_some(settings.chart_width),
        };
        print!("{}", format_trend_report(&report, &options));
        return Ok(());
    };

    let output = if args.save {
        let dir = storage.paths().export_dir();
        std::fs::create_dir_all(&dir).map_err(|e| {
            TrendsError::Export(format!("Cannot create {}: {}", dir.display(), e))
        })?;
        Some(dir.join(format!("{}-{}.{}", report.kind, report.year, format.extension())))
    } else {
        args.output
    };

    let mut writer: Box<dyn Write> = match &output {
        Some(path) => {
            let file = File::create(path).map_err(|e| {
                TrendsError::Export(format!("Cannot create {}: {}", path.display(), e))
            })?;
            Box::new(BufWriter::new(file))
        }
        None => Box::new(io::stdout().lock()),
    };

    match format {
        ExportFormat::Csv => export_trend_csv(&report, &mut writer)?,
        ExportFormat::Json => export_trend_json(&report, &mut writer, true)?,
        ExportFormat::Yaml => export_trend_yaml(&report, &mut writer)?,
    }
    writer
        .flush()
        .map_err(|e| TrendsError::Export(e.to_string()))?;

    if let Some(path) = &output {
        info!(path = %path.display(), ?format, "exported trend report");
        eprintln!("Wrote {} trend for {} to {}", report.kind, report.year, path.display());
    }

    Ok(())
}
