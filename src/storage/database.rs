//! `SQLite` database connection.
//!
//! The database is stored at `~/.focusdesk/focusdesk.db`. Its only table is
//! the flat key-value store behind [`KvStore`](super::KvStore).

use chrono::Utc;
use rusqlite::{params, Connection, OptionalExtension};
use tracing::debug;

use crate::config::Paths;
use crate::error::DeskError;

use super::kv::KvStore;
use super::migrations;

/// Database connection wrapper.
pub struct Database {
    conn: Connection,
}

impl Database {
    /// Open the database at the default location.
    ///
    /// Creates the database file and runs migrations if necessary.
    ///
    /// # Errors
    ///
    /// Returns an error if the database cannot be opened or migrations fail.
    pub fn open() -> Result<Self, DeskError> {
        let paths = Paths::new()?;
        paths.ensure_dirs()?;
        Self::open_at(&paths.database)
    }

    /// Open the database at a specific path.
    ///
    /// Creates the database file and runs migrations if necessary.
    ///
    /// # Errors
    ///
    /// Returns an error if the database cannot be opened or migrations fail.
    pub fn open_at(path: &std::path::Path) -> Result<Self, DeskError> {
        let conn = Connection::open(path).map_err(|e| {
            DeskError::Database(format!("Failed to open database {}: {e}", path.display()))
        })?;

        debug!(path = %path.display(), "opened database");
        Self::from_connection(conn)
    }

    /// Open an in-memory database (useful for testing).
    ///
    /// # Errors
    ///
    /// Returns an error if the database cannot be opened or migrations fail.
    pub fn open_in_memory() -> Result<Self, DeskError> {
        let conn = Connection::open_in_memory().map_err(|e| {
            DeskError::Database(format!("Failed to open in-memory database: {e}"))
        })?;

        Self::from_connection(conn)
    }

    fn from_connection(conn: Connection) -> Result<Self, DeskError> {
        migrations::run(&conn)?;
        Ok(Self { conn })
    }

    /// Get the current schema version.
    ///
    /// # Errors
    ///
    /// Returns an error if the version cannot be read.
    pub fn schema_version(&self) -> Result<i32, DeskError> {
        migrations::get_version(&self.conn)
    }
}

impl KvStore for Database {
    fn get(&self, key: &str) -> Result<Option<String>, DeskError> {
        self.conn
            .query_row(
                "SELECT value FROM kv_store WHERE key = ?1",
                params![key],
                |row| row.get(0),
            )
            .optional()
            .map_err(|e| DeskError::Database(format!("Failed to read key '{key}': {e}")))
    }

    fn set(&self, key: &str, value: &str) -> Result<(), DeskError> {
        let now = Utc::now().to_rfc3339();
        self.conn
            .execute(
                "INSERT INTO kv_store (key, value, updated_at) VALUES (?1, ?2, ?3)
                 ON CONFLICT(key) DO UPDATE SET value = excluded.value, updated_at = excluded.updated_at",
                params![key, value, now],
            )
            .map_err(|e| DeskError::Database(format!("Failed to write key '{key}': {e}")))?;
        Ok(())
    }
}
