//! Report history aggregation for the dashboard.
//!
//! The summary is recomputed from the full record set on every load and is
//! never stored. Records are charted oldest first: a record's time is the
//! server timestamp when it converts to a real instant, else its creation
//! string when that parses, else the epoch. Sorting is stable, so records
//! with equal (or missing) times keep their arrival order.

use cce_core::emission::DAYS_PER_MONTH;
use cce_core::StoredRecord;
use cce_utils::dates::{from_millis, parse_timestamp, to_millis};
use cce_utils::numbers::to_fixed_1;
use serde::Serialize;

/// Prefix for the x-axis labels (`Report 1`, `Report 2`, ...).
pub const REPORT_LABEL_PREFIX: &str = "Report";

/// A single bar in the history chart.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct SeriesPoint {
    pub label: String,
    /// Monthly kg CO₂e of that report
    pub value: f64,
}

/// Totals and chart series for a user with at least one report.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct History {
    /// Sum of every report's monthly total
    pub total: f64,
    pub count: usize,
    /// Oldest report first
    pub series: Vec<SeriesPoint>,
}

/// Dashboard state. Having no reports reads differently from having reports
/// that add up to zero, so it is its own variant.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(tag = "state", content = "history", rename_all = "snake_case")]
pub enum HistorySummary {
    NoData,
    HasData(History),
}

impl History {
    pub fn average_per_report(&self) -> f64 {
        self.total / self.count as f64
    }

    /// Average kg CO₂e per day across the reports.
    pub fn daily_average(&self) -> f64 {
        self.average_per_report() / DAYS_PER_MONTH
    }

    /// Labels and values as parallel vectors for a bar chart.
    pub fn chart_series(&self) -> (Vec<String>, Vec<f64>) {
        self.series
            .iter()
            .map(|point| (point.label.clone(), point.value))
            .unzip()
    }

    pub fn summary_text(&self) -> String {
        format!(
            "Total Emissions: {} kg CO₂e (from {} report(s))",
            to_fixed_1(self.total),
            self.count
        )
    }
}

impl HistorySummary {
    pub fn text(&self) -> String {
        match self {
            HistorySummary::NoData => "No emissions recorded yet.".to_string(),
            HistorySummary::HasData(history) => history.summary_text(),
        }
    }
}

/// Resolve a record's time in epoch milliseconds; 0 when nothing usable is present.
pub fn resolve_timestamp(record: &StoredRecord) -> i64 {
    if let Some(millis) = record.server_ts_millis {
        if from_millis(millis).is_some() {
            return millis;
        }
    }
    record
        .created_at
        .as_deref()
        .and_then(|s| parse_timestamp(s).ok())
        .map(|dt| to_millis(&dt))
        .unwrap_or(0)
}

/// Fold a user's records into the dashboard summary.
pub fn aggregate(records: &[StoredRecord]) -> HistorySummary {
    if records.is_empty() {
        return HistorySummary::NoData;
    }

    let total = records.iter().fold(0.0, |sum, r| sum + r.total_emissions);

    let mut ordered: Vec<(i64, &StoredRecord)> =
        records.iter().map(|r| (resolve_timestamp(r), r)).collect();
    ordered.sort_by_key(|(ts, _)| *ts);

    let series = ordered
        .iter()
        .enumerate()
        .map(|(rank, (_, record))| SeriesPoint {
            label: format!("{} {}", REPORT_LABEL_PREFIX, rank + 1),
            value: record.total_emissions,
        })
        .collect();

    log::debug!("history: aggregated {} reports, total {}", records.len(), total);

    HistorySummary::HasData(History {
        total,
        count: records.len(),
        series,
    })
}
