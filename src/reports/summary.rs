//! Period Summary
//!
//! Aggregates income, expenses and balance over an already-filtered set of
//! transactions, with expenses broken down by category.

use std::collections::BTreeMap;

use crate::error::{TrackerError, TrackerResult};
use crate::models::{Money, Transaction, TransactionKind};

/// Aggregate totals over a set of transactions
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Summary {
    /// Sum of income amounts
    pub total_income: Money,
    /// Sum of expense amounts (positive)
    pub total_expenses: Money,
    /// Income minus expenses
    pub balance: Money,
    /// Summed expense amount per category; income is never broken out
    pub by_category: BTreeMap<String, Money>,
}

impl Summary {
    /// Summarize a set of transactions
    ///
    /// The result does not depend on the order of `transactions`.
    ///
    /// # Errors
    /// Returns [`TrackerError::Validation`] if a total does not fit in the
    /// money range.
    pub fn from_transactions(transactions: &[Transaction]) -> TrackerResult<Self> {
        let mut total_income = Money::zero();
        let mut total_expenses = Money::zero();
        let mut by_category: BTreeMap<String, Money> = BTreeMap::new();

        for txn in transactions {
            match txn.kind {
                TransactionKind::Income => {
                    total_income = accumulate(total_income, txn.amount, "total income")?;
                }
                TransactionKind::Expense => {
                    total_expenses = accumulate(total_expenses, txn.amount, "total expenses")?;
                    let entry = by_category.entry(txn.category.clone()).or_default();
                    *entry = entry.checked_add(txn.amount).ok_or_else(|| {
                        overflow(&format!("expenses for category '{}'", txn.category))
                    })?;
                }
            }
        }

        let balance = total_income
            .checked_sub(total_expenses)
            .ok_or_else(|| overflow("balance"))?;

        Ok(Self {
            total_income,
            total_expenses,
            balance,
            by_category,
        })
    }

    /// Check if there were no transactions at all
    pub fn is_empty(&self) -> bool {
        self.total_income.is_zero() && self.total_expenses.is_zero()
    }

    /// Expense categories, largest first; equal amounts in name order
    pub fn category_breakdown(&self) -> Vec<(&str, Money)> {
        let mut rows: Vec<(&str, Money)> = self
            .by_category
            .iter()
            .map(|(name, amount)| (name.as_str(), *amount))
            .collect();
        rows.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));
        rows
    }

    /// Share of total expenses for an amount, in percent
    pub fn expense_share(&self, amount: Money) -> f64 {
        if self.total_expenses.is_zero() {
            0.0
        } else {
            amount.cents() as f64 / self.total_expenses.cents() as f64 * 100.0
        }
    }

    /// Format the summary for terminal display
    pub fn format_terminal(&self, currency_symbol: &str) -> String {
        let money = |m: Money| m.format_with_symbol(currency_symbol);
        let mut output = String::new();

        output.push_str("=== Summary ===\n");
        output.push_str(&format!("Income:   {:>14}\n", money(self.total_income)));
        output.push_str(&format!("Expenses: {:>14}\n", money(self.total_expenses)));
        output.push_str(&format!("Balance:  {:>14}\n", money(self.balance)));
        output.push('\n');

        if self.by_category.is_empty() {
            output.push_str("No expenses to show by category.\n");
            return output;
        }

        output.push_str("Expenses by category:\n");
        for (category, amount) in self.category_breakdown() {
            output.push_str(&format!(
                " - {:<20} {:>14} {:>6.1}%\n",
                category,
                money(amount),
                self.expense_share(amount)
            ));
        }

        output
    }
}

fn accumulate(total: Money, amount: Money, what: &str) -> TrackerResult<Money> {
    total.checked_add(amount).ok_or_else(|| overflow(what))
}

fn overflow(what: &str) -> TrackerError {
    TrackerError::Validation(format!("{} is too large to compute", what))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{NewTransaction, TransactionId};
    use chrono::NaiveDate;

    fn txn(id: i64, kind: TransactionKind, cents: i64, category: &str) -> Transaction {
        NewTransaction::new(
            NaiveDate::from_ymd_opt(2024, 3, 1).unwrap(),
            Money::from_cents(cents),
            kind,
            category,
        )
        .into_stored(TransactionId::from_raw(id))
    }

    #[test]
    fn test_empty_summary() {
        let summary = Summary::from_transactions(&[]).unwrap();
        assert_eq!(summary.total_income, Money::zero());
        assert_eq!(summary.total_expenses, Money::zero());
        assert_eq!(summary.balance, Money::zero());
        assert!(summary.by_category.is_empty());
        assert!(summary.is_empty());
    }

    #[test]
    fn test_income_and_expenses() {
        let transactions = vec![
            txn(1, TransactionKind::Income, 10000, "salary"),
            txn(2, TransactionKind::Expense, 3000, "food"),
            txn(3, TransactionKind::Expense, 2000, "food"),
        ];

        let summary = Summary::from_transactions(&transactions).unwrap();
        assert_eq!(summary.total_income, Money::from_cents(10000));
        assert_eq!(summary.total_expenses, Money::from_cents(5000));
        assert_eq!(summary.balance, Money::from_cents(5000));
        assert_eq!(summary.by_category.len(), 1);
        assert_eq!(summary.by_category["food"], Money::from_cents(5000));
    }

    #[test]
    fn test_negative_balance() {
        let transactions = vec![
            txn(1, TransactionKind::Income, 1000, "gift"),
            txn(2, TransactionKind::Expense, 2500, "rent"),
        ];

        let summary = Summary::from_transactions(&transactions).unwrap();
        assert_eq!(summary.balance, Money::from_cents(-1500));
    }

    #[test]
    fn test_income_is_not_broken_out() {
        let transactions = vec![txn(1, TransactionKind::Income, 500, "freelance")];
        let summary = Summary::from_transactions(&transactions).unwrap();
        assert!(summary.by_category.is_empty());
        assert!(!summary.is_empty());
    }

    #[test]
    fn test_order_independent() {
        let mut transactions = vec![
            txn(1, TransactionKind::Income, 10000, "salary"),
            txn(2, TransactionKind::Expense, 333, "food"),
            txn(3, TransactionKind::Expense, 667, "rent"),
            txn(4, TransactionKind::Expense, 1, "food"),
        ];
        let forward = Summary::from_transactions(&transactions).unwrap();
        transactions.reverse();
        let backward = Summary::from_transactions(&transactions).unwrap();
        assert_eq!(forward, backward);
    }

    #[test]
    fn test_breakdown_sorted_descending_with_name_tiebreak() {
        let transactions = vec![
            txn(1, TransactionKind::Expense, 500, "travel"),
            txn(2, TransactionKind::Expense, 2000, "rent"),
            txn(3, TransactionKind::Expense, 500, "books"),
            txn(4, TransactionKind::Expense, 700, "food"),
        ];

        let summary = Summary::from_transactions(&transactions).unwrap();
        let names: Vec<_> = summary
            .category_breakdown()
            .into_iter()
            .map(|(name, _)| name)
            .collect();
        assert_eq!(names, vec!["rent", "food", "books", "travel"]);
    }

    #[test]
    fn test_totals_near_limit() {
        let half = i64::MAX / 2;
        let transactions = vec![
            txn(1, TransactionKind::Income, half, "salary"),
            txn(2, TransactionKind::Income, half, "bonus"),
            txn(3, TransactionKind::Expense, half, "rent"),
        ];

        let summary = Summary::from_transactions(&transactions).unwrap();
        assert_eq!(summary.total_income, Money::from_cents(half * 2));
        assert_eq!(summary.balance, Money::from_cents(half));
    }

    #[test]
    fn test_income_overflow_is_an_error() {
        let transactions = vec![
            txn(1, TransactionKind::Income, 9_000_000_000_000_000_000, "salary"),
            txn(2, TransactionKind::Income, 9_000_000_000_000_000_000, "salary"),
        ];

        let err = Summary::from_transactions(&transactions).unwrap_err();
        assert!(err.is_validation());
        assert!(err.to_string().contains("total income"));
    }

    #[test]
    fn test_category_overflow_is_an_error() {
        let transactions = vec![
            txn(1, TransactionKind::Expense, i64::MAX, "rent"),
            txn(2, TransactionKind::Expense, 1, "rent"),
        ];

        let err = Summary::from_transactions(&transactions).unwrap_err();
        assert!(err.is_validation());
    }

    #[test]
    fn test_format_terminal() {
        let transactions = vec![
            txn(1, TransactionKind::Income, 10000, "salary"),
            txn(2, TransactionKind::Expense, 5000, "food"),
        ];

        let output = Summary::from_transactions(&transactions).unwrap().format_terminal("$");
        assert!(output.contains("$100.00"));
        assert!(output.contains("$50.00"));
        assert!(output.contains("food"));
        assert!(output.contains("100.0%"));
    }

    #[test]
    fn test_format_terminal_without_expenses() {
        let output = Summary::from_transactions(&[]).unwrap().format_terminal("$");
        assert!(output.contains("$0.00"));
        assert!(output.contains("No expenses to show by category."));
    }
}
