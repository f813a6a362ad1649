//! Trend display formatting
//!
//! Renders a [`TrendReport`] as a twelve-column month table. Gaps print as
//! `-`, never as zero.

use crate::models::{Money, MonthSeries, MONTHS, MONTH_LABELS};
use crate::reports::{TrendKind, TrendReport, TrendStatus};

use super::report::{format_bar, format_header, separator, truncate};

const LABEL_WIDTH: usize = 18;
const CELL_WIDTH: usize = 11;

/// Rendering options
#[derive(Debug, Clone)]
pub struct TrendDisplayOptions {
    pub currency_symbol: String,
    /// Bar chart width; `None` omits the chart
    pub chart_width: Option<usize>,
}

impl Default for TrendDisplayOptions {
    fn default() -> Self {
        Self {
            currency_symbol: "$".to_string(),
            chart_width: None,
        }
    }
}

fn cell(value: Option<Money>, symbol: &str) -> String {
    match value {
        Some(value) => value.format_with_symbol(symbol),
        None => "-".to_string(),
    }
}

fn format_row(label: &str, points: &MonthSeries, symbol: &str) -> String {
    let mut row = format!("{:<width$}", truncate(label, LABEL_WIDTH), width = LABEL_WIDTH);
    for value in points.iter() {
        row.push_str(&format!("{:>width$}", cell(value, symbol), width = CELL_WIDTH));
    }
    row.push('\n');
    row
}

/// Format a trend report as a terminal table
pub fn format_trend_report(report: &TrendReport, options: &TrendDisplayOptions) -> String {
    let symbol = options.currency_symbol.as_str();
    let title = match report.kind {
        TrendKind::Accounts => format!("Account balances {}", report.year),
        TrendKind::Budgets => format!("Income and expenses {}", report.year),
    };

    match report.status {
        TrendStatus::NoAccounts => {
            return format!("{}\n\nNo accounts yet. Add one with `trends account create`.\n", title)
        }
        TrendStatus::NoTransactions => {
            return format!(
                "{}\n\nNo transactions recorded. Add one with `trends transaction add`.\n",
                title
            )
        }
        TrendStatus::Ready => {}
    }

    let width = LABEL_WIDTH + CELL_WIDTH * MONTHS;
    let mut output = String::new();
    output.push_str(&format_header(&title, width));
    output.push('\n');

    output.push_str(&format!("{:<width$}", "", width = LABEL_WIDTH));
    for label in MONTH_LABELS {
        output.push_str(&format!("{:>width$}", label, width = CELL_WIDTH));
    }
    output.push('\n');
    output.push_str(&separator(width));
    output.push('\n');

    for series in &report.series {
        let label = if series.liability {
            format!("{} (L)", series.label)
        } else {
            series.label.clone()
        };
        output.push_str(&format_row(&label, &series.points, symbol));
    }

    output.push_str(&separator(width));
    output.push('\n');

    let net = report.monthly_net();
    let net_label = match report.kind {
        TrendKind::Accounts => "Net worth",
        TrendKind::Budgets => "Net",
    };
    output.push_str(&format_row(net_label, &net, symbol));

    if let (Some(net_worth), Some(month)) = (report.net_worth, report.reference_month) {
        output.push_str(&format!(
            "\nNet worth at end of {}: {}\n",
            MONTH_LABELS[month],
            net_worth.format_with_symbol(symbol)
        ));
    }

    if let Some(chart_width) = options.chart_width {
        output.push('\n');
        output.push_str(&format_net_chart(&net, symbol, chart_width));
    }

    output
}

/// One bar per month, scaled to the largest magnitude
pub fn format_net_chart(net: &MonthSeries, symbol: &str, width: usize) -> String {
    let max = net
        .iter()
        .flatten()
        .map(|m| m.as_units_f64().abs())
        .fold(0.0_f64, f64::max);

    let mut output = String::new();
    for (month, value) in net.iter().enumerate() {
        let bar = match value {
            Some(value) => format_bar(value.as_units_f64(), max, width),
            None => " ".repeat(width),
        };
        output.push_str(&format!(
            "{} {} {:>12}\n",
            MONTH_LABELS[month],
            bar,
            cell(value, symbol)
        ));
    }
    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Account, AccountType, Transaction, TransactionKind};
    use crate::reports::{TrendAggregator, TrendQuery};
    use chrono::NaiveDate;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 10, 19).unwrap()
    }

    #[test]
    fn test_gaps_render_as_dash() {
        let account = Account::with_balance("a1", AccountType::Checking, Money::from_units(500));
        let txns = vec![Transaction::new(
            TransactionKind::Expenses,
            Money::from_units(-100),
            NaiveDate::from_ymd_opt(2026, 3, 1).unwrap(),
        )
        .with_account(account.id)];
        let accounts = vec![account];
        let report = TrendAggregator::new(&accounts, &txns)
            .aggregate(&TrendQuery::new(2026, TrendKind::Accounts, today()));

        let output = format_trend_report(&report, &TrendDisplayOptions::default());
        let row = output.lines().find(|l| l.starts_with("a1")).unwrap();
        assert!(row.contains("$600.00"));
        assert!(row.contains("$500.00"));
        assert!(row.trim_end().ends_with('-'));
        assert!(output.contains("Net worth at end of Oct: $500.00"));
    }

    #[test]
    fn test_empty_states_have_distinct_messages() {
        let accounts_report = TrendAggregator::new(&[], &[])
            .aggregate(&TrendQuery::new(2026, TrendKind::Accounts, today()));
        let budgets_report = TrendAggregator::new(&[], &[])
            .aggregate(&TrendQuery::new(2026, TrendKind::Budgets, today()));

        let options = TrendDisplayOptions::default();
        assert!(format_trend_report(&accounts_report, &options).contains("No accounts yet"));
        assert!(format_trend_report(&budgets_report, &options).contains("No transactions recorded"));
    }

    #[test]
    fn test_liability_marker_and_chart() {
        let card = Account::with_balance("Visa", AccountType::Credit, Money::from_units(300));
        let accounts = vec![card];
        let report = TrendAggregator::new(&accounts, &[])
            .aggregate(&TrendQuery::new(2025, TrendKind::Accounts, today()));

        let options = TrendDisplayOptions {
            currency_symbol: "€".to_string(),
            chart_width: Some(10),
        };
        let output = format_trend_report(&report, &options);
        assert!(output.contains("Visa (L)"));
        assert!(output.contains("-€300.00"));
        assert!(output.contains("Jan ▒▒▒▒▒▒▒▒▒▒"));
    }
}
