//! CLI command for data export

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::PathBuf;

use clap::{Args, ValueEnum};
use tracing::info;

use crate::error::{TrackerError, TrackerResult};
use crate::export::{export_json, export_transactions_csv, export_yaml};
use crate::models::Transaction;
use crate::services::{FilterInput, TransactionService};
use crate::storage::TransactionRepository;

/// Export format options
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ExportFormat {
    /// CSV, one row per transaction
    Csv,
    /// JSON document with export metadata
    Json,
    /// YAML document with export metadata
    Yaml,
}

/// Arguments for `export`
#[derive(Args, Debug)]
pub struct ExportArgs {
    /// Export format
    #[arg(short, long, value_enum, default_value = "csv")]
    pub format: ExportFormat,
    /// Output file path; standard output if omitted
    #[arg(short, long)]
    pub output: Option<PathBuf>,
    /// Pretty-print JSON output
    #[arg(long)]
    pub pretty: bool,
    /// Start date (YYYY-MM-DD), inclusive
    #[arg(long)]
    pub from: Option<String>,
    /// End date (YYYY-MM-DD), inclusive
    #[arg(long)]
    pub to: Option<String>,
    /// Only export this category
    #[arg(long)]
    pub category: Option<String>,
}

/// Handle `export`
pub fn handle_export_command(repo: &TransactionRepository, args: ExportArgs) -> TrackerResult<()> {
    let transactions = TransactionService::new(repo).list(FilterInput {
        from: args.from,
        to: args.to,
        category: args.category,
    })?;

    match &args.output {
        Some(path) => {
            let file = File::create(path).map_err(|e| {
                TrackerError::Export(format!("Failed to create file {}: {}", path.display(), e))
            })?;
            write_export(&transactions, args.format, args.pretty, BufWriter::new(file))?;
            info!(path = %path.display(), records = transactions.len(), "export written");
            eprintln!(
                "Exported {} transaction(s) to: {}",
                transactions.len(),
                path.display()
            );
        }
        None => {
            let stdout = std::io::stdout();
            write_export(&transactions, args.format, args.pretty, stdout.lock())?;
        }
    }

    Ok(())
}

fn write_export<W: Write>(
    transactions: &[Transaction],
    format: ExportFormat,
    pretty: bool,
    mut writer: W,
) -> TrackerResult<()> {
    match format {
        ExportFormat::Csv => export_transactions_csv(transactions, &mut writer)?,
        ExportFormat::Json => export_json(transactions, &mut writer, pretty)?,
        ExportFormat::Yaml => export_yaml(transactions, &mut writer)?,
    }
    writer
        .flush()
        .map_err(|e| TrackerError::Export(e.to_string()))
}
