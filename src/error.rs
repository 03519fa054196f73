//! Custom error types for fintrack
//!
//! This module defines the error hierarchy for the application using thiserror
//! for ergonomic error definitions.

use thiserror::Error;

/// SQLite extended result code for a failed `CHECK` constraint.
const SQLITE_CONSTRAINT_CHECK: i32 = 275;

/// The main error type for fintrack operations
#[derive(Error, Debug)]
pub enum TrackerError {
    /// Invalid input: amount, kind, date, category, or a malformed stored row
    #[error("Validation error: {0}")]
    Validation(String),

    /// The data file could not be created, opened, read or written
    #[error("Storage unavailable: {0}")]
    StorageUnavailable(String),

    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// Export errors
    #[error("Export error: {0}")]
    Export(String),
}

impl TrackerError {
    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }

    /// Check if this is a storage error
    pub fn is_storage(&self) -> bool {
        matches!(self, Self::StorageUnavailable(_))
    }
}

impl From<rusqlite::Error> for TrackerError {
    fn from(err: rusqlite::Error) -> Self {
        match err {
            rusqlite::Error::SqliteFailure(ref sql_error, ref message)
                if sql_error.extended_code == SQLITE_CONSTRAINT_CHECK =>
            {
                Self::Validation(format!(
                    "rejected by data file constraint: {}",
                    message.as_deref().unwrap_or("CHECK constraint failed")
                ))
            }
            rusqlite::Error::FromSqlConversionFailure(column, _, inner) => Self::Validation(
                format!("malformed value in stored column {}: {}", column, inner),
            ),
            rusqlite::Error::InvalidColumnType(column, name, sql_type) => Self::Validation(
                format!(
                    "malformed value in stored column {} ({}): unexpected {}",
                    column, name, sql_type
                ),
            ),
            e => Self::StorageUnavailable(e.to_string()),
        }
    }
}

impl From<std::io::Error> for TrackerError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for TrackerError {
    fn from(err: serde_json::Error) -> Self {
        Self::Export(err.to_string())
    }
}

impl From<csv::Error> for TrackerError {
    fn from(err: csv::Error) -> Self {
        Self::Export(err.to_string())
    }
}

/// Result type alias for fintrack operations
pub type TrackerResult<T> = Result<T, TrackerError>;
