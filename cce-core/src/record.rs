//! Persisted report types.

use crate::emission::{Category, EmissionResult};
use crate::fuel::FuelType;
use crate::input::RawInput;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier the storage backend assigns to a report.
pub type RecordId = i64;

/// A signed-in user, as reported by the auth provider.
#[derive(Debug, PartialEq, Eq, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub email: Option<String>,
}

impl User {
    pub fn new(id: impl Into<String>, email: Option<String>) -> Self {
        Self {
            id: id.into(),
            email,
        }
    }

    /// Email when known, otherwise the id.
    pub fn display_name(&self) -> &str {
        self.email.as_deref().unwrap_or(&self.id)
    }
}

/// Calculator section a report came from. Only cooking exists.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Section {
    #[default]
    Cooking,
}

impl Section {
    pub fn as_str(self) -> &'static str {
        match self {
            Section::Cooking => "cooking",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "cooking" => Some(Section::Cooking),
            _ => None,
        }
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Snapshot of what the user entered and what it produced.
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportInputs {
    pub fuel_type: FuelType,
    /// Meals per day as entered
    pub meals_number: f64,
    /// Cooking hours per day as entered
    pub cooking_duration: f64,
    /// Monthly kg CO₂e from meals
    pub meals_emission: f64,
    /// Monthly kg CO₂e from cooking time
    pub duration_emission: f64,
    pub total: f64,
}

impl ReportInputs {
    pub fn snapshot(input: &RawInput, result: &EmissionResult) -> Self {
        Self {
            fuel_type: input.fuel_type,
            meals_number: input.meals_number,
            cooking_duration: input.cooking_duration,
            meals_emission: result.get(Category::MealsNumber).unwrap_or(0.0),
            duration_emission: result.get(Category::CookingDuration).unwrap_or(0.0),
            total: result.total(),
        }
    }
}

/// A report ready to be appended for the signed-in user.
#[derive(Debug, PartialEq, Clone)]
pub struct NewRecord {
    pub section: Section,
    pub inputs: ReportInputs,
    pub total_emissions: f64,
    /// Client-side creation time, used only when the backend has no timestamp of its own
    pub created_at: Option<String>,
}

impl NewRecord {
    /// Build the cooking report for a finished calculation.
    pub fn cooking(input: &RawInput, result: &EmissionResult) -> Self {
        Self {
            section: Section::Cooking,
            inputs: ReportInputs::snapshot(input, result),
            total_emissions: result.total(),
            created_at: None,
        }
    }

    pub fn with_created_at(mut self, created_at: impl Into<String>) -> Self {
        self.created_at = Some(created_at.into());
        self
    }
}

/// A report as listed back from storage. Never mutated after creation.
#[derive(Debug, PartialEq, Clone, Serialize)]
pub struct StoredRecord {
    pub id: RecordId,
    pub owner_id: String,
    pub owner_email: Option<String>,
    pub section: Section,
    pub inputs: ReportInputs,
    pub total_emissions: f64,
    /// Raw server timestamp in epoch milliseconds, if the backend assigned one
    pub server_ts_millis: Option<i64>,
    pub created_at: Option<String>,
}
