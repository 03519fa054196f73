//! Transaction repository for SQLite storage
//!
//! Appends records to, and reads them back from, a single data file. Every
//! operation opens its own connection and closes it before returning, so there
//! is no long-lived handle and each statement commits on its own.

use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use rusqlite::types::{Type, Value};
use rusqlite::{params, params_from_iter, Connection, Row};
use tracing::{debug, info};

use crate::error::{TrackerError, TrackerResult};
use crate::models::{Money, NewTransaction, Transaction, TransactionValidationError};

use super::init::initialize_schema;

const SELECT_COLUMNS: &str =
    "SELECT id, date, amount, kind, category, description, created_at FROM transactions";

/// Optional filters for listing transactions
///
/// All supplied filters must match. Date bounds are inclusive.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TransactionFilter {
    /// Earliest date to include
    pub from: Option<NaiveDate>,
    /// Latest date to include
    pub to: Option<NaiveDate>,
    /// Exact category label
    pub category: Option<String>,
}

impl TransactionFilter {
    /// Create a new empty filter
    pub fn new() -> Self {
        Self::default()
    }

    /// Only include transactions on or after `date`
    pub fn from(mut self, date: NaiveDate) -> Self {
        self.from = Some(date);
        self
    }

    /// Only include transactions on or before `date`
    pub fn to(mut self, date: NaiveDate) -> Self {
        self.to = Some(date);
        self
    }

    /// Filter by date range
    pub fn date_range(self, start: NaiveDate, end: NaiveDate) -> Self {
        self.from(start).to(end)
    }

    /// Only include transactions with this category
    pub fn category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    /// Build the WHERE clause and its positional parameters
    fn where_clause(&self) -> (String, Vec<Value>) {
        let mut clauses = Vec::new();
        let mut parameters = Vec::new();

        if let Some(from) = self.from {
            parameters.push(Value::Text(from.format("%Y-%m-%d").to_string()));
            clauses.push(format!("date >= ?{}", parameters.len()));
        }
        if let Some(to) = self.to {
            parameters.push(Value::Text(to.format("%Y-%m-%d").to_string()));
            clauses.push(format!("date <= ?{}", parameters.len()));
        }
        if let Some(category) = &self.category {
            parameters.push(Value::Text(category.clone()));
            clauses.push(format!("category = ?{}", parameters.len()));
        }

        if clauses.is_empty() {
            (String::new(), parameters)
        } else {
            (format!(" WHERE {}", clauses.join(" AND ")), parameters)
        }
    }
}

/// Repository for transaction persistence
#[derive(Debug, Clone)]
pub struct TransactionRepository {
    path: PathBuf,
}

impl TransactionRepository {
    /// Open the data file at `path`, creating it and its schema if needed
    ///
    /// Calling this repeatedly on the same path never touches existing records.
    ///
    /// # Errors
    /// Returns [`TrackerError::StorageUnavailable`] if the file or its parent
    /// directory cannot be created, or the file is not a usable database.
    pub fn open(path: impl Into<PathBuf>) -> TrackerResult<Self> {
        let path = path.into();

        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(|e| {
                TrackerError::StorageUnavailable(format!(
                    "Failed to create directory {}: {}",
                    parent.display(),
                    e
                ))
            })?;
        }

        let repo = Self { path };
        let connection = repo.connect()?;
        initialize_schema(&connection).map_err(|e| {
            TrackerError::StorageUnavailable(format!(
                "Failed to initialize {}: {}",
                repo.path.display(),
                e
            ))
        })?;
        debug!(path = %repo.path.display(), "data file ready");

        Ok(repo)
    }

    /// Path of the backing data file
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn connect(&self) -> TrackerResult<Connection> {
        Connection::open(&self.path).map_err(|e| {
            TrackerError::StorageUnavailable(format!(
                "Failed to open {}: {}",
                self.path.display(),
                e
            ))
        })
    }

    /// Append a transaction and return it with its assigned id
    ///
    /// # Errors
    /// Returns [`TrackerError::Validation`] if the amount is not positive or the
    /// category is empty; nothing is written in that case.
    pub fn add(&self, txn: NewTransaction) -> TrackerResult<Transaction> {
        txn.validate()
            .map_err(|e| TrackerError::Validation(e.to_string()))?;

        let connection = self.connect()?;
        let id = connection.query_row(
            "INSERT INTO transactions (date, amount, kind, category, description, created_at)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6)
             RETURNING id",
            params![
                txn.date,
                txn.amount,
                txn.kind,
                txn.category,
                txn.description,
                txn.created_at,
            ],
            |row| row.get(0),
        )?;

        let stored = txn.into_stored(id);
        info!(
            id = %stored.id,
            kind = %stored.kind,
            amount = %stored.amount,
            category = %stored.category,
            "transaction added"
        );
        Ok(stored)
    }

    /// List transactions matching `filter`, ordered by date then id
    pub fn list(&self, filter: &TransactionFilter) -> TrackerResult<Vec<Transaction>> {
        let (where_clause, parameters) = filter.where_clause();
        let query = format!("{}{} ORDER BY date ASC, id ASC", SELECT_COLUMNS, where_clause);

        let connection = self.connect()?;
        let mut statement = connection.prepare(&query)?;
        let transactions = statement
            .query_map(params_from_iter(parameters.iter()), map_row)?
            .collect::<Result<Vec<_>, _>>()?;

        debug!(?filter, rows = transactions.len(), "transactions listed");
        Ok(transactions)
    }

    /// List every stored transaction
    pub fn get_all(&self) -> TrackerResult<Vec<Transaction>> {
        self.list(&TransactionFilter::default())
    }

    /// Count stored transactions
    pub fn count(&self) -> TrackerResult<usize> {
        let connection = self.connect()?;
        let count = connection.query_row("SELECT COUNT(*) FROM transactions", [], |row| {
            row.get(0)
        })?;
        Ok(count)
    }
}

/// Build a transaction from a row selected with [`SELECT_COLUMNS`]
///
/// Values that no valid record could hold are rejected here, not only on write.
fn map_row(row: &Row) -> rusqlite::Result<Transaction> {
    let amount: Money = row.get(2)?;
    if !amount.is_positive() {
        return Err(rusqlite::Error::FromSqlConversionFailure(
            2,
            Type::Integer,
            Box::new(TransactionValidationError::NonPositiveAmount(amount)),
        ));
    }

    Ok(Transaction {
        id: row.get(0)?,
        date: row.get(1)?,
        amount,
        kind: row.get(3)?,
        category: row.get(4)?,
        description: row.get::<_, Option<String>>(5)?.unwrap_or_default(),
        created_at: row.get(6)?,
    })
}
