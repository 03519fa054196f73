//! JSON Export functionality
//!
//! Exports records together with metadata describing the export itself.

use std::io::Write;

use chrono::Utc;
use serde::{Deserialize, Serialize};

use crate::error::{TrackerError, TrackerResult};
use crate::models::Transaction;

use super::ExportRecord;

/// Version of the export document layout
pub const EXPORT_SCHEMA_VERSION: u32 = 1;

/// Complete export document
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FullExport {
    pub schema_version: u32,
    pub app_version: String,
    pub exported_at: String,
    pub record_count: usize,
    pub transactions: Vec<ExportRecord>,
}

impl FullExport {
    /// Build an export document from records
    pub fn from_transactions(transactions: &[Transaction]) -> Self {
        Self {
            schema_version: EXPORT_SCHEMA_VERSION,
            app_version: env!("CARGO_PKG_VERSION").to_string(),
            exported_at: Utc::now().to_rfc3339(),
            record_count: transactions.len(),
            transactions: transactions.iter().map(ExportRecord::from).collect(),
        }
    }
}

/// Export records as a JSON document
pub fn export_json<W: Write>(
    transactions: &[Transaction],
    mut writer: W,
    pretty: bool,
) -> TrackerResult<()> {
    let export = FullExport::from_transactions(transactions);

    if pretty {
        serde_json::to_writer_pretty(&mut writer, &export)?;
    } else {
        serde_json::to_writer(&mut writer, &export)?;
    }
    writeln!(writer).map_err(|e| TrackerError::Export(e.to_string()))?;

    Ok(())
}
