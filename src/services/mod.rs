//! Service layer for fintrack
//!
//! The service layer sits between the command line and the storage layer,
//! parsing and validating user input before it reaches the data file.

pub mod transaction;

pub use transaction::{
    build_filter, parse_date, CreateTransactionInput, FilterInput, TransactionService,
};
