//! SQLite storage layer for cooking emission reports.
//!
//! This crate implements the [`PersistenceGateway`](cce_core::PersistenceGateway)
//! seam over a `rusqlite` connection. Each user owns a collection of
//! reports; nothing here ever updates or deletes a report once written.
//!
//! # Usage
//!
//! ```rust
//! use cce_core::{calculate, FuelType, NewRecord, RawInput, User};
//! use cce_db::Database;
//!
//! let db = Database::new().unwrap();
//! let user = User::new("u1", Some("cook@example.com".to_string()));
//! let input = RawInput::new(FuelType::Wood, 10.0, 2.0);
//! let result = calculate(input.fuel_type, input.meals_number, input.cooking_duration);
//!
//! db.append_report(&user, &NewRecord::cooking(&input, &result)).unwrap();
//! let reports = db.list_reports("u1").unwrap();
//! assert_eq!(reports.len(), 1);
//! ```
//!
//! # Tables
//!
//! See [`schema::create_schema`] for the full SQL schema.

pub mod schema;
mod loader;
mod queries;
pub mod models;

use cce_core::PersistenceError;
use rusqlite::Connection;
use std::cell::RefCell;
use std::path::Path;
use std::rc::Rc;

/// SQLite-backed report store.
///
/// Cheaply cloneable (via `Rc`); clones share one connection. Meant for a
/// single-threaded runtime, which is all the command layer uses.
#[derive(Clone)]
pub struct Database {
    conn: Rc<RefCell<Connection>>,
}

impl Database {
    /// Create a new in-memory database with the full schema applied.
    pub fn new() -> anyhow::Result<Self> {
        let conn = Connection::open_in_memory()?;
        Self::with_connection(conn)
    }

    /// Open (or create) a database file and apply the schema.
    pub fn open(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let conn = Connection::open(path)?;
        log::info!("[CCE] db: opened {}", path.display());
        Self::with_connection(conn)
    }

    fn with_connection(conn: Connection) -> anyhow::Result<Self> {
        conn.execute_batch(schema::create_schema())?;
        Ok(Self {
            conn: Rc::new(RefCell::new(conn)),
        })
    }
}

/// Wrap a backend failure.
pub(crate) fn backend_error(err: impl std::fmt::Display) -> PersistenceError {
    PersistenceError::Backend(err.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use cce_core::{calculate, FuelType, NewRecord, RawInput, User};

    fn sample_record() -> NewRecord {
        let input = RawInput::new(FuelType::Charcoal, 3.0, 1.0);
        let result = calculate(input.fuel_type, input.meals_number, input.cooking_duration);
        NewRecord::cooking(&input, &result)
    }

    #[test]
    fn database_creates_successfully() {
        let db = Database::new();
        assert!(db.is_ok(), "Database should create without errors");
    }

    #[test]
    fn database_is_cloneable() {
        let db = Database::new().unwrap();
        let db2 = db.clone();
        let user = User::new("u1", None);
        db.append_report(&user, &sample_record()).unwrap();
        let reports = db2.list_reports("u1").unwrap();
        assert_eq!(reports.len(), 1, "Clone should see same data via shared Rc");
    }

    #[test]
    fn database_starts_empty() {
        let db = Database::new().unwrap();
        assert!(db.list_reports("u1").unwrap().is_empty());
    }

    #[test]
    fn file_database_persists_between_opens() {
        let path = std::env::temp_dir().join(format!(
            "cce-db-test-{}-{:?}.sqlite3",
            std::process::id(),
            std::thread::current().id()
        ));
        let _ = std::fs::remove_file(&path);
        {
            let db = Database::open(&path).unwrap();
            db.append_report(&User::new("u1", None), &sample_record()).unwrap();
        }
        let reopened = Database::open(&path).unwrap();
        assert_eq!(reopened.list_reports("u1").unwrap().len(), 1);
        let _ = std::fs::remove_file(&path);
    }
}
