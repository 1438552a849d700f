//! Durable SQLite-backed key-value storage.

use std::path::{Path, PathBuf};

use dirs::data_dir;
use rusqlite::{params, Connection};

use super::backend::StorageBackend;
use crate::error::{Result, TeamupError};

/// Key-value backend persisted in a single SQLite table.
pub struct SqliteBackend {
    pub(crate) conn: Connection,
}

impl SqliteBackend {
    /// Open the default database under the platform data directory,
    /// creating it (and its parent directory) on first use.
    pub fn new() -> Result<Self> {
        Self::open(Self::database_path()?)
    }

    /// Open a database at an explicit path.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        if let Some(parent) = path.as_ref().parent() {
            std::fs::create_dir_all(parent)?;
        }

        let conn = Connection::open(path)?;
        let mut backend = Self { conn };
        backend.initialize_schema()?;
        Ok(backend)
    }

    /// Open an in-memory database, used for testing.
    pub fn new_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        let mut backend = Self { conn };
        backend.initialize_schema()?;
        Ok(backend)
    }

    /// Get the path to the default database file
    fn database_path() -> Result<PathBuf> {
        let data_dir = data_dir().ok_or_else(|| TeamupError::Storage {
            message: "Could not determine data directory".to_string(),
        })?;
        Ok(data_dir.join("teamup").join("teamup.db"))
    }

    /// Initialize the database schema
    pub(crate) fn initialize_schema(&mut self) -> Result<()> {
        self.conn.execute(
            "CREATE TABLE IF NOT EXISTS kv_entries (
                key TEXT PRIMARY KEY,
                value TEXT NOT NULL
            )",
            [],
        )?;

        Ok(())
    }
}

impl StorageBackend for SqliteBackend {
    fn get(&self, key: &str) -> Result<Option<String>> {
        let mut stmt = self
            .conn
            .prepare("SELECT value FROM kv_entries WHERE key = ?")?;

        let result = stmt.query_row(params![key], |row| row.get::<_, String>(0));

        match result {
            Ok(value) => Ok(Some(value)),
            Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.conn.execute(
            "INSERT OR REPLACE INTO kv_entries (key, value) VALUES (?, ?)",
            params![key, value],
        )?;
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<()> {
        self.conn
            .execute("DELETE FROM kv_entries WHERE key = ?", params![key])?;
        Ok(())
    }
}
