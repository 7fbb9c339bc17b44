//! Row models for CSV import and export of report history.

use serde::{Deserialize, Serialize};

/// One report as read from an imported history CSV.
///
/// Columns are matched by header name; extra columns (such as those written
/// by [`ExportRow`]) are ignored, so an export can be imported again.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct ImportRow {
    /// Creation time string; empty when unknown
    #[serde(default)]
    pub created_at: String,
    pub fuel_type: String,
    pub meals_number: f64,
    pub cooking_duration: f64,
}

/// One report as written to an exported history CSV.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ExportRow {
    pub id: i64,
    /// Resolved creation time (RFC 3339), empty when the report has none
    pub created_at: String,
    pub section: String,
    pub fuel_type: String,
    pub meals_number: f64,
    pub cooking_duration: f64,
    pub meals_emission: f64,
    pub duration_emission: f64,
    pub total_emissions: f64,
}
