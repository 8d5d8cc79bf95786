//! Path resolution for focusdesk configuration and data files.
//!
//! All focusdesk data is stored in `~/.focusdesk/` (or `$FOCUSDESK_HOME`):
//! - `config.yaml` - Main configuration file
//! - `focusdesk.db` - `SQLite` key-value store (planner tasks)
//! - `logs/` - Log files written while the dashboard is open

use std::path::PathBuf;

use crate::error::DeskError;

/// Environment variable overriding the data root.
pub const HOME_ENV: &str = "FOCUSDESK_HOME";

/// Paths to focusdesk configuration and data directories.
#[derive(Debug, Clone)]
pub struct Paths {
    /// Root directory: `~/.focusdesk/`
    pub root: PathBuf,
    /// Config file: `~/.focusdesk/config.yaml`
    pub config_file: PathBuf,
    /// Database file: `~/.focusdesk/focusdesk.db`
    pub database: PathBuf,
    /// Log directory: `~/.focusdesk/logs/`
    pub logs: PathBuf,
}

impl Paths {
    /// Resolve paths from `$FOCUSDESK_HOME`, falling back to `$HOME/.focusdesk`.
    ///
    /// # Errors
    ///
    /// Returns an error if neither variable is set.
    pub fn new() -> Result<Self, DeskError> {
        if let Some(root) = std::env::var_os(HOME_ENV).filter(|v| !v.is_empty()) {
            return Ok(Self::with_root(PathBuf::from(root)));
        }

        let home = std::env::var("HOME").map_err(|_| {
            DeskError::Config("Could not determine home directory".to_string())
        })?;

        Ok(Self::with_root(PathBuf::from(home).join(".focusdesk")))
    }

    /// Create paths with a custom root directory (useful for testing).
    #[must_use]
    pub fn with_root(root: PathBuf) -> Self {
        Self {
            config_file: root.join("config.yaml"),
            database: root.join("focusdesk.db"),
            logs: root.join("logs"),
            root,
        }
    }

    /// Log file used by the terminal dashboard.
    #[must_use]
    pub fn log_file(&self) -> PathBuf {
        self.logs.join("focusdesk.log")
    }

    /// Ensure all directories exist, creating them if necessary.
    ///
    /// # Errors
    ///
    /// Returns an error if directory creation fails.
    pub fn ensure_dirs(&self) -> Result<(), DeskError> {
        for dir in [&self.root, &self.logs] {
            if !dir.exists() {
                std::fs::create_dir_all(dir).map_err(|e| {
                    DeskError::Config(format!("Failed to create directory {}: {e}", dir.display()))
                })?;
            }
        }

        Ok(())
    }
}

impl Default for Paths {
    fn default() -> Self {
        Self::new().unwrap_or_else(|_| {
            // Fallback to current directory if home cannot be determined
            Self::with_root(PathBuf::from(".focusdesk"))
        })
    }
}
