//! YAML Export functionality

use std::io::Write;

use crate::error::{TrackerError, TrackerResult};
use crate::models::Transaction;

use super::json::FullExport;

/// Export records as a YAML document
pub fn export_yaml<W: Write>(transactions: &[Transaction], mut writer: W) -> TrackerResult<()> {
    let export = FullExport::from_transactions(transactions);

    writeln!(writer, "# fintrack export")
        .and_then(|_| writeln!(writer, "# Generated: {}", export.exported_at))
        .map_err(|e| TrackerError::Export(e.to_string()))?;

    serde_yaml::to_writer(writer, &export).map_err(|e| TrackerError::Export(e.to_string()))?;

    Ok(())
}
