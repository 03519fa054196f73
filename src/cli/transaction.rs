//! Transaction CLI commands
//!
//! Implements the `add`, `list` and `summary` commands.

use clap::Args;
use tracing::debug;

use crate::config::Settings;
use crate::display::transaction::{format_transaction_added, format_transaction_list};
use crate::error::TrackerResult;
use crate::services::{CreateTransactionInput, FilterInput, TransactionService};
use crate::storage::TransactionRepository;

/// Arguments for `add`
#[derive(Args, Debug)]
pub struct AddArgs {
    /// Transaction type: income or expense
    pub kind: String,
    /// Amount, a positive number (e.g., "12.50")
    #[arg(allow_negative_numbers = true)]
    pub amount: String,
    /// Category (food, rent, salary, ...)
    pub category: String,
    /// Transaction date (YYYY-MM-DD), defaults to today
    #[arg(short, long)]
    pub date: Option<String>,
    /// Free-text note
    #[arg(short, long, visible_alias = "description")]
    pub comment: Option<String>,
}

/// Arguments for `list`
#[derive(Args, Debug)]
pub struct ListArgs {
    /// Start date (YYYY-MM-DD), inclusive
    #[arg(long)]
    pub from: Option<String>,
    /// End date (YYYY-MM-DD), inclusive
    #[arg(long)]
    pub to: Option<String>,
    /// Only show this category
    #[arg(long)]
    pub category: Option<String>,
}

/// Arguments for `summary`
#[derive(Args, Debug)]
pub struct SummaryArgs {
    /// Start date (YYYY-MM-DD), inclusive
    #[arg(long)]
    pub from: Option<String>,
    /// End date (YYYY-MM-DD), inclusive
    #[arg(long)]
    pub to: Option<String>,
}

/// Handle `add`
pub fn handle_add_command(
    repo: &TransactionRepository,
    settings: &Settings,
    args: AddArgs,
) -> TrackerResult<()> {
    let service = TransactionService::new(repo);

    let txn = service.create(CreateTransactionInput {
        kind: args.kind,
        amount: args.amount,
        category: args.category,
        date: args.date,
        description: args.comment,
    })?;

    print!("{}", format_transaction_added(&txn, settings));
    Ok(())
}

/// Handle `list`
pub fn handle_list_command(
    repo: &TransactionRepository,
    settings: &Settings,
    args: ListArgs,
) -> TrackerResult<()> {
    let service = TransactionService::new(repo);

    let transactions = service.list(FilterInput {
        from: args.from,
        to: args.to,
        category: args.category,
    })?;

    print!("{}", format_transaction_list(&transactions, settings));
    Ok(())
}

/// Handle `summary`
pub fn handle_summary_command(
    repo: &TransactionRepository,
    settings: &Settings,
    args: SummaryArgs,
) -> TrackerResult<()> {
    let service = TransactionService::new(repo);

    let summary = service.summarize(args.from, args.to)?;
    debug!(categories = summary.by_category.len(), "summary computed");

    print!("{}", summary.format_terminal(&settings.currency_symbol));
    Ok(())
}
