//! Append and list operations on the per-user report collection.

use crate::{backend_error, Database};
use cce_core::{
    NewRecord, PersistenceError, PersistenceGateway, RecordId, ReportInputs, Section,
    StoredRecord, User,
};
use rusqlite::{params, Connection};

/// Insert time in epoch milliseconds, computed by SQLite.
const INSERT_REPORT_SERVER_TS: &str =
    "INSERT INTO reports (owner_id, section, inputs, total_emissions, created_at, server_ts)
     VALUES (?1, ?2, ?3, ?4, ?5, CAST((julianday('now') - 2440587.5) * 86400000 AS INTEGER))";

const INSERT_REPORT_NO_SERVER_TS: &str =
    "INSERT INTO reports (owner_id, section, inputs, total_emissions, created_at, server_ts)
     VALUES (?1, ?2, ?3, ?4, ?5, NULL)";

/// Raw columns of one report row before decoding.
type ReportColumns = (
    i64,
    String,
    Option<String>,
    String,
    String,
    f64,
    Option<i64>,
    Option<String>,
);

/// Whether a new row gets a server timestamp.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) enum ServerTime {
    Assign,
    Absent,
}

impl Database {
    /// Append a report to `owner`'s collection and return its id.
    ///
    /// The owner row is created on first use and its email refreshed when a
    /// new one is supplied. SQLite assigns the server timestamp.
    pub fn append_report(
        &self,
        owner: &User,
        record: &NewRecord,
    ) -> Result<RecordId, PersistenceError> {
        let conn = self.conn.borrow();
        let tx = conn.unchecked_transaction().map_err(backend_error)?;
        let id = insert_report(&tx, owner, record, ServerTime::Assign)?;
        tx.commit().map_err(backend_error)?;
        log::info!(
            "[CCE] query: appended report {} for {} (total {})",
            id,
            owner.id,
            record.total_emissions
        );
        Ok(id)
    }

    /// Every report owned by `owner_id`, in insertion order.
    ///
    /// Rows that no longer decode are logged and left out so the rest of the
    /// history stays readable.
    pub fn list_reports(&self, owner_id: &str) -> Result<Vec<StoredRecord>, PersistenceError> {
        let conn = self.conn.borrow();
        let mut stmt = conn
            .prepare(
                "SELECT r.id, r.owner_id, u.email, r.section, r.inputs, r.total_emissions,
                        r.server_ts, r.created_at
                 FROM reports r
                 INNER JOIN users u ON u.uid = r.owner_id
                 WHERE r.owner_id = ?1
                 ORDER BY r.id",
            )
            .map_err(backend_error)?;
        let rows: Vec<ReportColumns> = stmt
            .query_map(params![owner_id], |row| {
                Ok((
                    row.get(0)?,
                    row.get(1)?,
                    row.get(2)?,
                    row.get(3)?,
                    row.get(4)?,
                    row.get(5)?,
                    row.get(6)?,
                    row.get(7)?,
                ))
            })
            .map_err(backend_error)?
            .collect::<Result<Vec<_>, _>>()
            .map_err(backend_error)?;

        let mut records = Vec::with_capacity(rows.len());
        for columns in rows {
            match decode_report(columns) {
                Ok(record) => records.push(record),
                Err(err) => log::warn!("[CCE] query: skipping report: {}", err),
            }
        }
        log::info!(
            "[CCE] query: list_reports returned {} records for {}",
            records.len(),
            owner_id
        );
        Ok(records)
    }
}

/// Upsert the owner and insert one report. Callers own the transaction.
pub(crate) fn insert_report(
    conn: &Connection,
    owner: &User,
    record: &NewRecord,
    server_time: ServerTime,
) -> Result<RecordId, PersistenceError> {
    check_finite(record)?;
    let inputs = serde_json::to_string(&record.inputs).map_err(backend_error)?;
    conn.execute(
        "INSERT INTO users (uid, email) VALUES (?1, ?2)
         ON CONFLICT(uid) DO UPDATE SET email = COALESCE(excluded.email, users.email)",
        params![owner.id, owner.email],
    )
    .map_err(backend_error)?;
    let sql = match server_time {
        ServerTime::Assign => INSERT_REPORT_SERVER_TS,
        ServerTime::Absent => INSERT_REPORT_NO_SERVER_TS,
    };
    conn.execute(
        sql,
        params![
            owner.id,
            record.section.as_str(),
            inputs,
            record.total_emissions,
            record.created_at
        ],
    )
    .map_err(backend_error)?;
    Ok(conn.last_insert_rowid())
}

/// JSON has no infinity or NaN, so such a snapshot could never be read back.
fn check_finite(record: &NewRecord) -> Result<(), PersistenceError> {
    let inputs = &record.inputs;
    let values = [
        record.total_emissions,
        inputs.meals_number,
        inputs.cooking_duration,
        inputs.meals_emission,
        inputs.duration_emission,
        inputs.total,
    ];
    if values.iter().all(|v| v.is_finite()) {
        Ok(())
    } else {
        Err(PersistenceError::Conversion(format!(
            "report total {} is not a finite number",
            record.total_emissions
        )))
    }
}

fn decode_report(columns: ReportColumns) -> Result<StoredRecord, PersistenceError> {
    let (id, owner_id, owner_email, section, inputs, total_emissions, server_ts, created_at) =
        columns;
    let section = Section::parse(&section).ok_or_else(|| PersistenceError::Corrupt {
        id,
        reason: format!("unknown section '{}'", section),
    })?;
    let inputs: ReportInputs =
        serde_json::from_str(&inputs).map_err(|e| PersistenceError::Corrupt {
            id,
            reason: e.to_string(),
        })?;
    Ok(StoredRecord {
        id,
        owner_id,
        owner_email,
        section,
        inputs,
        total_emissions,
        server_ts_millis: server_ts,
        created_at,
    })
}

impl PersistenceGateway for Database {
    async fn append(&self, owner: &User, record: &NewRecord) -> Result<RecordId, PersistenceError> {
        self.append_report(owner, record)
    }

    async fn list(&self, owner_id: &str) -> Result<Vec<StoredRecord>, PersistenceError> {
        self.list_reports(owner_id)
    }
}
