//! Transaction display formatting
//!
//! Formats transactions for terminal output as a table and as the echo
//! printed after an add.

use tabled::settings::object::Columns;
use tabled::settings::{Alignment, Style};
use tabled::{Table, Tabled};

use crate::config::Settings;
use crate::models::Transaction;

#[derive(Tabled)]
struct TransactionRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Date")]
    date: String,
    #[tabled(rename = "Type")]
    kind: &'static str,
    #[tabled(rename = "Category")]
    category: String,
    #[tabled(rename = "Amount")]
    amount: String,
    #[tabled(rename = "Description")]
    description: String,
}

impl TransactionRow {
    fn new(txn: &Transaction, settings: &Settings) -> Self {
        Self {
            id: txn.id.to_string(),
            date: settings.format_date(txn.date),
            kind: txn.kind.label(),
            category: truncate(&txn.category, 24),
            amount: txn.amount.format_with_symbol(&settings.currency_symbol),
            description: truncate(&txn.description, 40),
        }
    }
}

/// Format a list of transactions as a table
pub fn format_transaction_list(transactions: &[Transaction], settings: &Settings) -> String {
    if transactions.is_empty() {
        return "No transactions found.\n".to_string();
    }

    let rows = transactions
        .iter()
        .map(|txn| TransactionRow::new(txn, settings));

    let mut table = Table::new(rows);
    table
        .with(Style::psql())
        .modify(Columns::single(0), Alignment::right())
        .modify(Columns::single(4), Alignment::right());

    format!("{}\n", table)
}

/// Format the confirmation printed after a transaction is added
pub fn format_transaction_added(txn: &Transaction, settings: &Settings) -> String {
    let mut output = String::new();

    output.push_str(&format!("Added transaction #{}\n", txn.id));
    output.push_str(&format!("  Date:     {}\n", settings.format_date(txn.date)));
    output.push_str(&format!("  Type:     {}\n", txn.kind.label()));
    output.push_str(&format!(
        "  Amount:   {}\n",
        txn.amount.format_with_symbol(&settings.currency_symbol)
    ));
    output.push_str(&format!("  Category: {}\n", txn.category));

    if !txn.description.is_empty() {
        output.push_str(&format!("  Note:     {}\n", txn.description));
    }

    output
}

const ELLIPSIS: &str = "...";

/// Truncate a string to at most `max_len` characters
///
/// Limits too short to hold the ellipsis cut the text without one.
fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else if max_len < ELLIPSIS.len() {
        s.chars().take(max_len).collect()
    } else {
        let kept: String = s.chars().take(max_len - ELLIPSIS.len()).collect();
        format!("{}{}", kept, ELLIPSIS)
    }
}
