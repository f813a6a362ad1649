//! User settings for ledger-trends
//!
//! Manages user preferences: currency symbol, the default trend kind shown
//! by `trends trend`, chart width and the date format used by CSV import.

use serde::{Deserialize, Serialize};

use super::paths::TrendsPaths;
use crate::error::TrendsError;
use crate::reports::TrendKind;

/// User settings for ledger-trends
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Currency symbol used when rendering amounts
    #[serde(default = "default_currency")]
    pub currency_symbol: String,

    /// Trend kind used when none is given on the command line
    #[serde(default)]
    pub default_kind: TrendKind,

    /// Width of the monthly bar chart in characters
    #[serde(default = "default_chart_width")]
    pub chart_width: usize,

    /// Date format for CSV import (strftime format)
    #[serde(default = "default_import_date_format")]
    pub import_date_format: String,
}

fn default_schema_version() -> u32 {
    1
}

fn default_currency() -> String {
    "$".to_string()
}

fn default_chart_width() -> usize {
    40
}

fn default_import_date_format() -> String {
    "%Y-%m-%d".to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            currency_symbol: default_currency(),
            default_kind: TrendKind::default(),
            chart_width: default_chart_width(),
            import_date_format: default_import_date_format(),
        }
    }
}

impl Settings {
    /// Load settings from disk, or return defaults if the file doesn't exist
    pub fn load_or_create(paths: &TrendsPaths) -> Result<Self, TrendsError> {
        let settings_path = paths.settings_file();

        if !settings_path.exists() {
            // Don't save yet - let caller decide when to persist
            return Ok(Settings::default());
        }

        let contents = std::fs::read_to_string(&settings_path)
            .map_err(|e| TrendsError::Io(format!("Failed to read settings file: {}", e)))?;

        serde_json::from_str(&contents)
            .map_err(|e| TrendsError::Config(format!("Failed to parse settings file: {}", e)))
    }

    /// Save settings to disk
    pub fn save(&self, paths: &TrendsPaths) -> Result<(), TrendsError> {
        paths.ensure_directories()?;

        let contents = serde_json::to_string_pretty(self)
            .map_err(|e| TrendsError::Config(format!("Failed to serialize settings: {}", e)))?;

        std::fs::write(paths.settings_file(), contents)
            .map_err(|e| TrendsError::Io(format!("Failed to write settings file: {}", e)))?;

        Ok(())
    }
}
