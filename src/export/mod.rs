//! Export module for fintrack
//!
//! Writes records in machine-readable formats:
//! - CSV: one row per transaction (spreadsheet-compatible)
//! - JSON: records plus export metadata
//! - YAML: same document as JSON, human-readable

pub mod csv;
pub mod json;
pub mod yaml;

use serde::{Deserialize, Serialize};

use crate::models::Transaction;

pub use self::csv::export_transactions_csv;
pub use self::json::{export_json, FullExport, EXPORT_SCHEMA_VERSION};
pub use self::yaml::export_yaml;

/// Flat, format-neutral view of one transaction
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExportRecord {
    pub id: i64,
    pub date: String,
    pub kind: String,
    pub category: String,
    /// Decimal text with two fractional digits, e.g. `12.50`
    pub amount: String,
    pub description: String,
    pub created_at: String,
}

impl From<&Transaction> for ExportRecord {
    fn from(txn: &Transaction) -> Self {
        Self {
            id: txn.id.get(),
            date: txn.date.format("%Y-%m-%d").to_string(),
            kind: txn.kind.as_str().to_string(),
            category: txn.category.clone(),
            amount: txn.amount.to_string(),
            description: txn.description.clone(),
            created_at: txn.created_at.to_rfc3339(),
        }
    }
}
