//! User settings for fintrack
//!
//! Display preferences and an optional default data file, persisted as JSON.

use std::fmt::Write;
use std::path::PathBuf;

use chrono::format::{Item, StrftimeItems};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::paths::TrackerPaths;
use crate::error::TrackerError;

/// User settings for fintrack
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    /// Currency symbol prepended to amounts
    #[serde(default = "default_currency")]
    pub currency_symbol: String,

    /// Date format preference (strftime format)
    #[serde(default = "default_date_format")]
    pub date_format: String,

    /// Data file used when `--db` is not given
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_db: Option<PathBuf>,
}

fn default_currency() -> String {
    "$".to_string()
}

fn default_date_format() -> String {
    "%Y-%m-%d".to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            currency_symbol: default_currency(),
            date_format: default_date_format(),
            default_db: None,
        }
    }
}

impl Settings {
    /// Load settings from disk, falling back to defaults if the file doesn't exist
    pub fn load_or_default(paths: &TrackerPaths) -> Result<Self, TrackerError> {
        let settings_path = paths.settings_file();

        if !settings_path.exists() {
            return Ok(Settings::default());
        }

        let contents = std::fs::read_to_string(&settings_path)
            .map_err(|e| TrackerError::Io(format!("Failed to read settings file: {}", e)))?;

        let settings: Settings = serde_json::from_str(&contents).map_err(|e| {
            TrackerError::Config(format!(
                "Failed to parse settings file {}: {}",
                settings_path.display(),
                e
            ))
        })?;

        settings.validate()?;
        Ok(settings)
    }

    /// Reject settings that would break output formatting
    ///
    /// A format must parse and must render a plain date; time fields such as
    /// `%H` parse fine but have nothing to print for a date.
    pub fn validate(&self) -> Result<(), TrackerError> {
        let invalid = || TrackerError::Config(format!("Invalid date format: '{}'", self.date_format));

        if StrftimeItems::new(&self.date_format).any(|item| matches!(item, Item::Error)) {
            return Err(invalid());
        }
        render_date(NaiveDate::MIN, &self.date_format).ok_or_else(invalid)?;
        Ok(())
    }

    /// Render a date with the configured format
    ///
    /// Falls back to `YYYY-MM-DD` for a format that cannot render dates.
    pub fn format_date(&self, date: NaiveDate) -> String {
        render_date(date, &self.date_format).unwrap_or_else(|| date.format("%Y-%m-%d").to_string())
    }
}

fn render_date(date: NaiveDate, format: &str) -> Option<String> {
    let mut rendered = String::new();
    write!(rendered, "{}", date.format(format)).ok()?;
    Some(rendered)
}
