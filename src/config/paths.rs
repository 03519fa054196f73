//! Path management for fintrack
//!
//! Resolves where the settings file lives and which data file a run uses.
//!
//! ## Config directory resolution order
//!
//! 1. `FINTRACK_CONFIG_DIR` environment variable (if set)
//! 2. Unix (Linux/macOS): `$XDG_CONFIG_HOME/fintrack` or `~/.config/fintrack`
//! 3. Windows: `%APPDATA%\fintrack`
//!
//! ## Data file resolution order
//!
//! 1. `--db` flag or `FINTRACK_DB` environment variable
//! 2. `default_db` from the settings file
//! 3. [`DEFAULT_DB_FILE`] in the working directory

use std::path::{Path, PathBuf};

use super::settings::Settings;
use crate::error::TrackerError;

/// Data file name used when nothing else is configured
pub const DEFAULT_DB_FILE: &str = "finance.db";

/// Manages the paths used by fintrack
#[derive(Debug, Clone)]
pub struct TrackerPaths {
    /// Directory holding the settings file
    config_dir: PathBuf,
}

impl TrackerPaths {
    /// Create a new TrackerPaths instance
    ///
    /// # Errors
    ///
    /// Returns an error if no config directory can be determined.
    pub fn new() -> Result<Self, TrackerError> {
        let config_dir = match std::env::var_os("FINTRACK_CONFIG_DIR") {
            Some(custom) => PathBuf::from(custom),
            None => resolve_default_path()?,
        };

        Ok(Self { config_dir })
    }

    /// Create TrackerPaths with a custom config directory (useful for testing)
    pub fn with_config_dir(config_dir: PathBuf) -> Self {
        Self { config_dir }
    }

    /// Get the config directory
    pub fn config_dir(&self) -> &Path {
        &self.config_dir
    }

    /// Get the path to the settings file
    pub fn settings_file(&self) -> PathBuf {
        self.config_dir.join("config.json")
    }
}

/// Pick the data file for this run
pub fn resolve_db_path(explicit: Option<PathBuf>, settings: &Settings) -> PathBuf {
    explicit
        .or_else(|| settings.default_db.clone())
        .unwrap_or_else(|| PathBuf::from(DEFAULT_DB_FILE))
}

/// Resolve the default config directory based on platform
#[cfg(not(windows))]
fn resolve_default_path() -> Result<PathBuf, TrackerError> {
    let config_base = match std::env::var_os("XDG_CONFIG_HOME") {
        Some(xdg) => PathBuf::from(xdg),
        None => {
            let home = std::env::var_os("HOME").ok_or_else(|| {
                TrackerError::Config("HOME environment variable not set".into())
            })?;
            PathBuf::from(home).join(".config")
        }
    };
    Ok(config_base.join("fintrack"))
}

/// Resolve the default config directory based on platform
#[cfg(windows)]
fn resolve_default_path() -> Result<PathBuf, TrackerError> {
    let appdata = std::env::var_os("APPDATA")
        .ok_or_else(|| TrackerError::Config("Could not determine APPDATA directory".into()))?;
    Ok(PathBuf::from(appdata).join("fintrack"))
}
