//! Display formatting for terminal output
//!
//! Provides utilities for formatting records for terminal display.

pub mod transaction;

pub use transaction::{format_transaction_added, format_transaction_list};
