//! CSV import and export of a user's report history.
//!
//! # CSV Formats
//!
//! - **Import** (has headers): `created_at,fuel_type,meals_number,cooking_duration`.
//!   Emissions are recalculated from the inputs; imported rows carry no server
//!   timestamp, only the creation string.
//! - **Export** (has headers): see [`ExportRow`].

use crate::models::{ExportRow, ImportRow};
use crate::queries::{insert_report, ServerTime};
use crate::{backend_error, Database};
use cce_core::{FuelType, NewRecord, PersistenceError, RawInput, User};
use cce_utils::dates::{format_timestamp, from_millis};

impl Database {
    /// Load report history from CSV into `owner`'s collection.
    ///
    /// Rows are validated like live input; the first bad row aborts the
    /// import and nothing from that file is kept. Returns the row count.
    ///
    /// # Example CSV
    /// ```text
    /// created_at,fuel_type,meals_number,cooking_duration
    /// 2024-01-15T08:00:00Z,wood,3,1.5
    /// ```
    pub fn import_reports(&self, owner: &User, csv_data: &str) -> Result<usize, PersistenceError> {
        let mut rdr = csv::ReaderBuilder::new()
            .has_headers(true)
            .trim(csv::Trim::All)
            .from_reader(csv_data.as_bytes());

        let mut records = Vec::new();
        for (index, result) in rdr.deserialize::<ImportRow>().enumerate() {
            let row_number = index + 2;
            let row = result
                .map_err(|e| PersistenceError::Conversion(format!("row {}: {}", row_number, e)))?;
            let input = RawInput::new(
                FuelType::from_key(&row.fuel_type),
                row.meals_number,
                row.cooking_duration,
            );
            let validated = input
                .validate()
                .map_err(|e| PersistenceError::Conversion(format!("row {}: {}", row_number, e)))?;
            let mut record = NewRecord::cooking(validated.raw(), &validated.calculate());
            if !row.created_at.is_empty() {
                record = record.with_created_at(row.created_at);
            }
            records.push(record);
        }

        let conn = self.conn.borrow();
        let tx = conn.unchecked_transaction().map_err(backend_error)?;
        for record in &records {
            insert_report(&tx, owner, record, ServerTime::Absent)?;
        }
        tx.commit().map_err(backend_error)?;
        log::info!(
            "[CCE] loader: Imported {} reports for {}",
            records.len(),
            owner.id
        );
        Ok(records.len())
    }

    /// Write `owner_id`'s report history as CSV, in insertion order.
    pub fn export_reports(&self, owner_id: &str) -> Result<String, PersistenceError> {
        let reports = self.list_reports(owner_id)?;
        let mut wtr = csv::Writer::from_writer(Vec::new());
        for report in &reports {
            let created_at = report
                .server_ts_millis
                .and_then(from_millis)
                .map(|dt| format_timestamp(&dt))
                .or_else(|| report.created_at.clone())
                .unwrap_or_default();
            wtr.serialize(ExportRow {
                id: report.id,
                created_at,
                section: report.section.to_string(),
                fuel_type: report.inputs.fuel_type.to_string(),
                meals_number: report.inputs.meals_number,
                cooking_duration: report.inputs.cooking_duration,
                meals_emission: report.inputs.meals_emission,
                duration_emission: report.inputs.duration_emission,
                total_emissions: report.total_emissions,
            })
            .map_err(|e| PersistenceError::Conversion(e.to_string()))?;
        }
        let bytes = wtr
            .into_inner()
            .map_err(|e| PersistenceError::Conversion(e.to_string()))?;
        log::info!(
            "[CCE] loader: Exported {} reports for {}",
            reports.len(),
            owner_id
        );
        String::from_utf8(bytes).map_err(|e| PersistenceError::Conversion(e.to_string()))
    }
}
