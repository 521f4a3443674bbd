//! SQLite connection wrapper (lightweight for CLI usage) and key-value backend.

use crate::db::migrate::run_pending_migrations;
use crate::errors::{AppError, AppResult};
use crate::store::kv::KeyValueStore;
use chrono::Utc;
use rusqlite::{Connection, OptionalExtension, params};
use std::path::Path;

pub struct DbPool {
    pub conn: Connection,
}

impl DbPool {
    /// Open (or create) the database file and bring its schema up to date.
    pub fn new(path: &str) -> AppResult<Self> {
        let conn = Connection::open(Path::new(path))
            .map_err(|e| AppError::StorageUnavailable(format!("{path}: {e}")))?;
        // sqlite opens lazily: a non-database file only fails on first query
        run_pending_migrations(&conn)
            .map_err(|e| AppError::StorageUnavailable(format!("{path}: {e}")))?;
        Ok(Self { conn })
    }

    /// In-memory database, mostly useful for tests.
    pub fn in_memory() -> AppResult<Self> {
        let conn = Connection::open_in_memory()
            .map_err(|e| AppError::StorageUnavailable(e.to_string()))?;
        run_pending_migrations(&conn).map_err(|e| AppError::StorageUnavailable(e.to_string()))?;
        Ok(Self { conn })
    }
}

impl KeyValueStore for DbPool {
    fn read(&self, key: &str) -> AppResult<Option<String>> {
        let value = self
            .conn
            .query_row(
                "SELECT value FROM kv_store WHERE key = ?1",
                [key],
                |row| row.get::<_, String>(0),
            )
            .optional()?;
        Ok(value)
    }

    fn write(&mut self, key: &str, value: &str) -> AppResult<()> {
        self.conn
            .execute(
                "INSERT INTO kv_store (key, value, updated_at)
                 VALUES (?1, ?2, ?3)
                 ON CONFLICT(key) DO UPDATE SET
                    value = excluded.value,
                    updated_at = excluded.updated_at",
                params![key, value, Utc::now().to_rfc3339()],
            )
            .map_err(|e| AppError::StorageUnavailable(format!("write '{key}': {e}")))?;
        Ok(())
    }
}
