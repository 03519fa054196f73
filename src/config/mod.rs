//! Configuration module for fintrack
//!
//! This module provides configuration management including:
//! - XDG-compliant settings path resolution
//! - Data file selection
//! - User settings persistence

pub mod paths;
pub mod settings;

pub use paths::{resolve_db_path, TrackerPaths, DEFAULT_DB_FILE};
pub use settings::Settings;
