//! Monthly emission calculation.
//!
//! Meals are weighted by the fuel factor; cooking duration always uses the
//! fixed [`DURATION_FACTOR`] regardless of fuel. Both are scaled to a
//! 30-day month.

use crate::fuel::FuelType;
use crate::input::{COOKING_DURATION, MEALS_NUMBER};
use serde::ser::{Serialize, SerializeMap, Serializer};

/// Days in the month every estimate is scaled to.
pub const DAYS_PER_MONTH: f64 = 30.0;

/// Emission factor per hour of cooking, independent of fuel.
pub const DURATION_FACTOR: f64 = 0.4;

/// An emission category shown in the results breakdown.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum Category {
    MealsNumber,
    CookingDuration,
}

impl Category {
    pub fn key(self) -> &'static str {
        match self {
            Category::MealsNumber => MEALS_NUMBER,
            Category::CookingDuration => COOKING_DURATION,
        }
    }

    /// Heading used in the results panel.
    pub fn label(self) -> &'static str {
        match self {
            Category::MealsNumber => "Cooking Emissions",
            Category::CookingDuration => "Duration Emissions",
        }
    }
}

/// Monthly kg CO₂e per category.
///
/// The total is never stored; [`EmissionResult::total`] sums the entries, so
/// it stays correct whatever categories are present.
#[derive(Debug, PartialEq, Clone)]
pub struct EmissionResult {
    entries: Vec<(Category, f64)>,
}

impl EmissionResult {
    pub fn from_entries(entries: Vec<(Category, f64)>) -> Self {
        Self { entries }
    }

    /// Entries in display order.
    pub fn entries(&self) -> &[(Category, f64)] {
        &self.entries
    }

    pub fn get(&self, category: Category) -> Option<f64> {
        self.entries
            .iter()
            .find(|(c, _)| *c == category)
            .map(|(_, v)| *v)
    }

    pub fn total(&self) -> f64 {
        self.entries.iter().fold(0.0, |sum, (_, v)| sum + v)
    }
}

/// Serializes as `{ "mealsNumber": .., "cookingDuration": .., "total": .. }`.
impl Serialize for EmissionResult {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len() + 1))?;
        for (category, value) in &self.entries {
            map.serialize_entry(category.key(), value)?;
        }
        map.serialize_entry("total", &self.total())?;
        map.end()
    }
}

/// Monthly emissions for the given fuel, meals per day and cooking hours per day.
///
/// Pure; callers are expected to validate first (see [`crate::RawInput::validate`]).
pub fn calculate(fuel: FuelType, meals_number: f64, cooking_duration: f64) -> EmissionResult {
    let meals_emission = meals_number * fuel.factor() * DAYS_PER_MONTH;
    let duration_emission = cooking_duration * DURATION_FACTOR * DAYS_PER_MONTH;
    EmissionResult::from_entries(vec![
        (Category::MealsNumber, meals_emission),
        (Category::CookingDuration, duration_emission),
    ])
}
