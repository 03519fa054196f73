//! Reports module for fintrack
//!
//! Aggregations computed over records that the storage layer has already
//! filtered.

pub mod summary;

pub use summary::Summary;
