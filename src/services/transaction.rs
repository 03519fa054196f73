//! Transaction service
//!
//! Turns raw command-line input into validated records and filters, then hands
//! them to the repository. Bad input is rejected here before anything touches
//! the data file.

use chrono::{Local, NaiveDate, Utc};

use crate::error::{TrackerError, TrackerResult};
use crate::models::{Money, NewTransaction, Transaction, TransactionKind};
use crate::reports::Summary;
use crate::storage::{TransactionFilter, TransactionRepository};

/// Service for transaction management
pub struct TransactionService<'a> {
    repo: &'a TransactionRepository,
}

/// Unparsed input for creating a new transaction
#[derive(Debug, Clone, Default)]
pub struct CreateTransactionInput {
    pub kind: String,
    pub amount: String,
    pub category: String,
    /// `YYYY-MM-DD`; today if absent
    pub date: Option<String>,
    pub description: Option<String>,
}

/// Unparsed filter options
#[derive(Debug, Clone, Default)]
pub struct FilterInput {
    pub from: Option<String>,
    pub to: Option<String>,
    pub category: Option<String>,
}

impl<'a> TransactionService<'a> {
    /// Create a new transaction service
    pub fn new(repo: &'a TransactionRepository) -> Self {
        Self { repo }
    }

    /// Validate the input and append a new transaction
    pub fn create(&self, input: CreateTransactionInput) -> TrackerResult<Transaction> {
        let kind = TransactionKind::parse(&input.kind).ok_or_else(|| {
            TrackerError::Validation(format!(
                "Invalid transaction type: '{}'. Valid types: income, expense",
                input.kind
            ))
        })?;

        let amount = Money::parse(&input.amount).map_err(|e| {
            TrackerError::Validation(format!(
                "Invalid amount: '{}'. Use a positive number like '12.50'. Error: {}",
                input.amount, e
            ))
        })?;
        if !amount.is_positive() {
            return Err(TrackerError::Validation(format!(
                "Amount must be greater than zero, got '{}'",
                input.amount
            )));
        }

        let date = match input.date.as_deref() {
            Some(s) => parse_date(s, "date")?,
            None => Local::now().date_naive(),
        };

        let category = input.category.trim();
        if category.is_empty() {
            return Err(TrackerError::Validation("Category must not be empty".into()));
        }

        let txn = NewTransaction::new(date, amount, kind, category)
            .with_description(input.description.unwrap_or_default())
            .with_created_at(Utc::now());

        self.repo.add(txn)
    }

    /// List transactions matching the filter
    pub fn list(&self, filter: FilterInput) -> TrackerResult<Vec<Transaction>> {
        let filter = build_filter(filter)?;
        self.repo.list(&filter)
    }

    /// Summarize transactions in an optional date range
    ///
    /// Category filters are not applied to summaries.
    pub fn summarize(&self, from: Option<String>, to: Option<String>) -> TrackerResult<Summary> {
        let filter = build_filter(FilterInput {
            from,
            to,
            category: None,
        })?;
        let transactions = self.repo.list(&filter)?;
        Summary::from_transactions(&transactions)
    }
}

/// Parse a `YYYY-MM-DD` date
///
/// `field` names the option in the error message.
pub fn parse_date(s: &str, field: &str) -> TrackerResult<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d").map_err(|_| {
        TrackerError::Validation(format!(
            "Invalid {} format: '{}'. Use YYYY-MM-DD",
            field, s
        ))
    })
}

/// Parse filter options into a repository filter
pub fn build_filter(input: FilterInput) -> TrackerResult<TransactionFilter> {
    let mut filter = TransactionFilter::new();

    if let Some(from) = input.from.as_deref() {
        filter = filter.from(parse_date(from, "from date")?);
    }
    if let Some(to) = input.to.as_deref() {
        filter = filter.to(parse_date(to, "to date")?);
    }
    if let (Some(from), Some(to)) = (filter.from, filter.to) {
        if from > to {
            return Err(TrackerError::Validation(format!(
                "Start date {} is after end date {}",
                from, to
            )));
        }
    }
    if let Some(category) = input.category {
        filter = filter.category(category);
    }

    Ok(filter)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn create_test_repo() -> (TempDir, TransactionRepository) {
        let temp_dir = TempDir::new().unwrap();
        let repo = TransactionRepository::open(temp_dir.path().join("finance.db")).unwrap();
        (temp_dir, repo)
    }

    fn input(kind: &str, amount: &str, category: &str, date: &str) -> CreateTransactionInput {
        CreateTransactionInput {
            kind: kind.into(),
            amount: amount.into(),
            category: category.into(),
            date: Some(date.into()),
            description: None,
        }
    }

    #[test]
    fn test_create_transaction() {
        let (_temp_dir, repo) = create_test_repo();
        let service = TransactionService::new(&repo);

        let txn = service
            .create(CreateTransactionInput {
                description: Some("monthly pass".into()),
                ..input("expense", "12.50", "transport", "2024-03-01")
            })
            .unwrap();

        assert_eq!(txn.kind, TransactionKind::Expense);
        assert_eq!(txn.amount, Money::from_cents(1250));
        assert_eq!(txn.date, NaiveDate::from_ymd_opt(2024, 3, 1).unwrap());
        assert_eq!(txn.description, "monthly pass");
        assert_eq!(repo.count().unwrap(), 1);
    }

    #[test]
    fn test_create_defaults_to_today() {
        let (_temp_dir, repo) = create_test_repo();
        let service = TransactionService::new(&repo);

        let txn = service
            .create(CreateTransactionInput {
                date: None,
                ..input("income", "100", "salary", "")
            })
            .unwrap();
        assert_eq!(txn.date, Local::now().date_naive());
        assert_eq!(txn.description, "");
    }

    #[test]
    fn test_create_rejects_bad_input() {
        let (_temp_dir, repo) = create_test_repo();
        let service = TransactionService::new(&repo);

        let cases = [
            input("transfer", "10", "misc", "2024-03-01"),
            input("expense", "0", "food", "2024-03-01"),
            input("expense", "-5", "food", "2024-03-01"),
            input("expense", "ten", "food", "2024-03-01"),
            input("expense", "10", "food", "2024-02-30"),
            input("expense", "10", "food", "01/03/2024"),
            input("expense", "10", "  ", "2024-03-01"),
        ];

        for case in cases {
            let err = service.create(case.clone()).unwrap_err();
            assert!(err.is_validation(), "expected validation error for {:?}", case);
        }
        assert_eq!(repo.count().unwrap(), 0);
    }

    #[test]
    fn test_create_rounds_extra_decimals() {
        let (_temp_dir, repo) = create_test_repo();
        let service = TransactionService::new(&repo);

        let txn = service
            .create(input("expense", "12.345", "food", "2024-03-01"))
            .unwrap();
        assert_eq!(txn.amount, Money::from_cents(1235));

        let txn = service
            .create(input("income", "1.5e3", "salary", "2024-03-01"))
            .unwrap();
        assert_eq!(txn.amount, Money::from_cents(150_000));
    }

    #[test]
    fn test_create_rejects_amount_rounding_to_zero() {
        let (_temp_dir, repo) = create_test_repo();
        let service = TransactionService::new(&repo);

        let err = service
            .create(input("expense", "0.004", "food", "2024-03-01"))
            .unwrap_err();
        assert!(err.is_validation());
        assert_eq!(repo.count().unwrap(), 0);
    }

    #[test]
    fn test_summarize_reports_overflowing_totals() {
        let (_temp_dir, repo) = create_test_repo();
        let service = TransactionService::new(&repo);
        service
            .create(input("income", "90000000000000000", "salary", "2024-03-01"))
            .unwrap();
        service
            .create(input("income", "90000000000000000", "bonus", "2024-03-02"))
            .unwrap();

        let err = service.summarize(None, None).unwrap_err();
        assert!(err.is_validation());
    }

    #[test]
    fn test_category_is_trimmed() {
        let (_temp_dir, repo) = create_test_repo();
        let service = TransactionService::new(&repo);

        let txn = service
            .create(input("expense", "3", "  coffee ", "2024-03-01"))
            .unwrap();
        assert_eq!(txn.category, "coffee");
    }

    #[test]
    fn test_build_filter() {
        let filter = build_filter(FilterInput {
            from: Some("2024-01-01".into()),
            to: Some("2024-01-31".into()),
            category: Some("food".into()),
        })
        .unwrap();

        assert_eq!(filter.from, NaiveDate::from_ymd_opt(2024, 1, 1));
        assert_eq!(filter.to, NaiveDate::from_ymd_opt(2024, 1, 31));
        assert_eq!(filter.category.as_deref(), Some("food"));
    }

    #[test]
    fn test_build_filter_rejects_inverted_range() {
        let err = build_filter(FilterInput {
            from: Some("2024-02-01".into()),
            to: Some("2024-01-01".into()),
            category: None,
        })
        .unwrap_err();
        assert!(err.is_validation());
    }

    #[test]
    fn test_summarize_ignores_records_outside_range() {
        let (_temp_dir, repo) = create_test_repo();
        let service = TransactionService::new(&repo);
        service.create(input("income", "100", "salary", "2024-03-01")).unwrap();
        service.create(input("expense", "30", "food", "2024-03-02")).unwrap();
        service.create(input("expense", "20", "food", "2024-03-03")).unwrap();
        service.create(input("expense", "999", "rent", "2024-04-01")).unwrap();

        let summary = service
            .summarize(Some("2024-03-01".into()), Some("2024-03-31".into()))
            .unwrap();

        assert_eq!(summary.total_income, Money::from_cents(10000));
        assert_eq!(summary.total_expenses, Money::from_cents(5000));
        assert_eq!(summary.balance, Money::from_cents(5000));
        assert_eq!(summary.by_category.len(), 1);
        assert_eq!(summary.by_category["food"], Money::from_cents(5000));
    }
}
