//! SQL schema definitions for the report store.
//!
//! Reports live in a per-user collection: every row in `reports` belongs to
//! exactly one row in `users`, and all reads are keyed by owner. The schema
//! is applied as a single batch when the database is opened.

/// Returns the full SQL schema as a single batch string.
///
/// - `users` - Signed-in users seen so far (uid, email)
/// - `reports` - One row per completed calculation. `inputs` holds the JSON
///   snapshot, `server_ts` the insert time in epoch milliseconds assigned by
///   SQLite, `created_at` an optional client-supplied creation string.
pub fn create_schema() -> &'static str {
    r#"
    PRAGMA foreign_keys = ON;

    CREATE TABLE IF NOT EXISTS users (
        uid TEXT PRIMARY KEY,
        email TEXT
    );

    CREATE TABLE IF NOT EXISTS reports (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        owner_id TEXT NOT NULL REFERENCES users(uid),
        section TEXT NOT NULL,
        inputs TEXT NOT NULL,
        total_emissions REAL NOT NULL,
        created_at TEXT,
        server_ts INTEGER
    );
    CREATE INDEX IF NOT EXISTS idx_reports_owner ON reports(owner_id);
    "#
}
