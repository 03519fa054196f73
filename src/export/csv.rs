//! CSV Export functionality

use std::io::Write;

use crate::error::{TrackerError, TrackerResult};
use crate::models::Transaction;

use super::ExportRecord;

/// Export transactions to CSV, header row first
pub fn export_transactions_csv<W: Write>(
    transactions: &[Transaction],
    writer: W,
) -> TrackerResult<()> {
    let mut csv_writer = ::csv::Writer::from_writer(writer);

    if transactions.is_empty() {
        // serde only emits the header alongside the first record
        csv_writer.write_record([
            "id",
            "date",
            "kind",
            "category",
            "amount",
            "description",
            "created_at",
        ])?;
    }

    for txn in transactions {
        csv_writer.serialize(ExportRecord::from(txn))?;
    }

    csv_writer
        .flush()
        .map_err(|e| TrackerError::Export(e.to_string()))?;
    Ok(())
}
