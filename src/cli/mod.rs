//! CLI command handlers
//!
//! This module contains the implementation of CLI commands,
//! bridging the clap argument parsing with the service layer.

pub mod export;
pub mod transaction;

pub use export::{handle_export_command, ExportArgs, ExportFormat};
pub use transaction::{
    handle_add_command, handle_list_command, handle_summary_command, AddArgs, ListArgs,
    SummaryArgs,
};
