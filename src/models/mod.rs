//! Core data models for fintrack
//!
//! This module contains the data structures for the tracker domain: money
//! amounts, record identifiers and the transaction record itself.

pub mod ids;
pub mod money;
pub mod transaction;

pub use ids::TransactionId;
pub use money::{Money, MoneyParseError};
pub use transaction::{
    NewTransaction, Transaction, TransactionKind, TransactionValidationError, UnknownKind,
};
