//! # Form Store
//!
//! SQLite persistence for forms and their submissions.
//!
//! `FormStore` is a cheap, clonable handle holding the database path. Every
//! operation opens its own connection, so concurrent requests never share a
//! connection and correctness under concurrency comes from SQLite itself:
//!
//! - counters are bumped with single `UPDATE ... SET n = n + 1` statements;
//! - owner-scoped reads and writes filter on `user_id` and `id` in one `WHERE`;
//! - submitting runs inside one `BEGIN IMMEDIATE` transaction (see `submissions`).
//!
//! Writers that collide wait on SQLite's busy handler instead of failing.

mod forms;
mod submissions;

pub use forms::NewForm;
pub use submissions::SubmitOutcome;

use chrono::{DateTime, Utc};
use log::debug;
use rusqlite::{Connection, Row, Transaction, TransactionBehavior};
use std::path::{Path, PathBuf};
use std::time::Duration;
use thiserror::Error;

const BUSY_TIMEOUT: Duration = Duration::from_secs(5);

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("io: {0}")]
    Io(#[from] std::io::Error),
    #[error("sqlite: {0}")]
    Sql(#[from] rusqlite::Error),
}

#[derive(Debug, Clone)]
pub struct FormStore {
    path: PathBuf,
}

impl FormStore {
    /// Opens (creating if needed) the database at `path` and applies the schema.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, StoreError> {
        let path = path.as_ref().to_path_buf();
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)?;
        }
        let store = Self { path };
        store.migrate()?;
        Ok(store)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn connect(&self) -> Result<Connection, StoreError> {
        let conn = Connection::open(&self.path)?;
        conn.busy_timeout(BUSY_TIMEOUT)?;
        conn.execute_batch("PRAGMA foreign_keys = ON;")?;
        Ok(conn)
    }

    fn migrate(&self) -> Result<(), StoreError> {
        debug!("applying schema to {}", self.path.display());
        let conn = self.connect()?;
        conn.execute_batch(
            r#"
            PRAGMA journal_mode=WAL;

            CREATE TABLE IF NOT EXISTS forms (
              id            INTEGER PRIMARY KEY AUTOINCREMENT,
              user_id       TEXT    NOT NULL,
              name          TEXT    NOT NULL,
              description   TEXT,
              content       TEXT    NOT NULL DEFAULT '',
              published     INTEGER NOT NULL DEFAULT 0,
              share_url     TEXT    NOT NULL UNIQUE,
              visits        INTEGER NOT NULL DEFAULT 0,
              submissions   INTEGER NOT NULL DEFAULT 0,
              created_at_ms INTEGER NOT NULL
            );
            CREATE INDEX IF NOT EXISTS idx_forms_user ON forms(user_id, created_at_ms);

            CREATE TABLE IF NOT EXISTS form_submissions (
              id            INTEGER PRIMARY KEY AUTOINCREMENT,
              form_id       INTEGER NOT NULL REFERENCES forms(id),
              content       TEXT    NOT NULL,
              created_at_ms INTEGER NOT NULL
            );
            CREATE INDEX IF NOT EXISTS idx_form_submissions_form ON form_submissions(form_id);
            "#,
        )?;
        Ok(())
    }

    /// Runs `operation` inside a transaction; it commits only if the closure
    /// returns `Ok`. Dropping the transaction on the error path rolls it back.
    fn in_transaction<T, F>(&self, behavior: TransactionBehavior, operation: F) -> Result<T, StoreError>
    where
        F: FnOnce(&Transaction) -> Result<T, StoreError>,
    {
        let mut conn = self.connect()?;
        let tx = conn.transaction_with_behavior(behavior)?;
        let result = operation(&tx)?;
        tx.commit()?;
        Ok(result)
    }
}

pub(crate) fn now_ms() -> i64 {
    Utc::now().timestamp_millis()
}

fn timestamp_at(row: &Row<'_>, idx: usize) -> rusqlite::Result<DateTime<Utc>> {
    let ms: i64 = row.get(idx)?;
    DateTime::from_timestamp_millis(ms).ok_or(rusqlite::Error::IntegralValueOutOfRange(idx, ms))
}
