//! Ledger date parsing
//!
//! Dates arrive as ISO-8601 strings, sometimes with a time part attached.
//! They are calendar labels, not instants: only the `YYYY-MM-DD` text before
//! any `T` is used, and no timezone conversion is ever applied. A bare
//! `YYYY-MM` label, or one whose day is out of range, is read as the first
//! day of that month.

use chrono::NaiveDate;
use serde::{Deserialize, Deserializer};
use std::fmt;

/// Parse a ledger date string into a calendar date
pub fn parse_ledger_date(input: &str) -> Result<NaiveDate, DateParseError> {
    let label = input.trim();
    let label = label.split(['T', ' ']).next().unwrap_or(label);

    if let Ok(date) = NaiveDate::parse_from_str(label, "%Y-%m-%d") {
        return Ok(date);
    }

    // The month bucket only needs `YYYY-MM`, so an impossible day such as
    // `2026-02-30` still lands on the first of its month.
    if let (Some(month), Some(rest)) = (label.get(..7), label.get(7..)) {
        if rest.is_empty() || rest.starts_with('-') {
            if let Ok(date) = NaiveDate::parse_from_str(&format!("{}-01", month), "%Y-%m-%d") {
                return Ok(date);
            }
        }
    }

    Err(DateParseError(input.to_string()))
}

/// Parse with a caller-supplied strftime format, falling back to the ISO rules
pub fn parse_with_format(input: &str, format: &str) -> Result<NaiveDate, DateParseError> {
    NaiveDate::parse_from_str(input.trim(), format).or_else(|_| parse_ledger_date(input))
}

/// Serde helper so stored transactions may carry full timestamps
pub fn deserialize_ledger_date<'de, D>(deserializer: D) -> Result<NaiveDate, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    parse_ledger_date(&raw).map_err(serde::de::Error::custom)
}

/// A date string that is not a recognizable calendar label
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DateParseError(pub String);

impl fmt::Display for DateParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Invalid date '{}'. Use YYYY-MM-DD", self.0)
    }
}

impl std::error::Error for DateParseError {}
