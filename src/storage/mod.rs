//! Storage layer for fintrack
//!
//! Records live in a single SQLite data file whose path is always supplied by
//! the caller. The schema is created on first use.

pub mod init;
pub mod transactions;

pub use init::initialize_schema;
pub use transactions::{TransactionFilter, TransactionRepository};
