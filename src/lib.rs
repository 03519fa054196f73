//! fintrack - command-line personal finance tracker
//!
//! This library provides the core functionality for the fintrack CLI. It logs
//! income and expense transactions to a local SQLite file and summarizes them
//! over a period.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Settings file and data file path resolution
//! - `error`: Custom error types
//! - `models`: Core data models (money, transactions)
//! - `storage`: SQLite record store
//! - `services`: Input parsing and validation
//! - `reports`: Period summaries
//! - `display`: Terminal formatting
//! - `export`: CSV, JSON and YAML export
//! - `cli`: Command handlers
//!
//! # Example
//!
//! ```rust,no_run
//! use fintrack::reports::Summary;
//! use fintrack::storage::{TransactionFilter, TransactionRepository};
//!
//! # fn main() -> fintrack::TrackerResult<()> {
//! let repo = TransactionRepository::open("finance.db")?;
//! let transactions = repo.list(&TransactionFilter::new().category("food"))?;
//! let summary = Summary::from_transactions(&transactions)?;
//! println!("{}", summary.balance);
//! # Ok(())
//! # }
//! ```

pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod export;
pub mod logging;
pub mod models;
pub mod reports;
pub mod services;
pub mod storage;

pub use error::{TrackerError, TrackerResult};
