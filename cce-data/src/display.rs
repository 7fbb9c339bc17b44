//! Display-ready figures for a single calculation.
//!
//! Every figure is rendered with one decimal place using
//! [`to_fixed_1`](cce_utils::numbers::to_fixed_1). Percentages divide by the
//! *rounded* total text (`total_kg`), not the raw total, so the breakdown
//! matches what the browser front end has always shown. The bias this adds is
//! small but systematic; keep it unless output parity is dropped.

use cce_core::emission::{Category, EmissionResult, DAYS_PER_MONTH};
use cce_utils::numbers::to_fixed_1;
use serde::Serialize;

/// Months per year used for the annual projection.
pub const MONTHS_PER_YEAR: f64 = 12.0;

pub const KG_PER_TONNE: f64 = 1000.0;

/// One row of the results breakdown.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct CategoryLine {
    #[serde(skip)]
    pub category: Category,
    pub label: &'static str,
    /// Monthly kg CO₂e
    pub monthly_kg: f64,
    /// Share of the rounded total, in percent
    pub percentage: f64,
}

impl CategoryLine {
    pub fn value_text(&self) -> String {
        format!("{} kg CO₂e/month", to_fixed_1(self.monthly_kg))
    }

    pub fn percentage_text(&self) -> String {
        format!("{}% of total", to_fixed_1(self.percentage))
    }
}

/// Everything the results panel shows for one calculation.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct DisplayData {
    pub categories: Vec<CategoryLine>,
    /// Monthly total, already rounded to one decimal
    pub total_kg: String,
    /// kg CO₂e per day
    pub daily_average: f64,
    /// Tonnes CO₂e per year
    pub annual_tonnes: f64,
}

impl DisplayData {
    pub fn annual_text(&self) -> String {
        format!(
            "Total Annual Emissions: {} Tonnes CO₂e/Year",
            to_fixed_1(self.annual_tonnes)
        )
    }

    pub fn daily_text(&self) -> String {
        format!("Daily Average: {} kg CO₂e/day", to_fixed_1(self.daily_average))
    }

    /// The panel as plain text lines, breakdown first.
    pub fn lines(&self) -> Vec<String> {
        let mut lines = Vec::with_capacity(self.categories.len() * 3 + 2);
        for line in &self.categories {
            lines.push(line.label.to_string());
            lines.push(format!("  {}", line.value_text()));
            lines.push(format!("  {}", line.percentage_text()));
        }
        lines.push(self.annual_text());
        lines.push(self.daily_text());
        lines
    }
}

/// Percentage of `value` against the one-decimal total text.
///
/// A zero (or unparseable) denominator yields 0 rather than NaN.
pub fn percentage_of(value: f64, total_kg: &str) -> f64 {
    let denominator = total_kg.parse::<f64>().unwrap_or(0.0);
    if denominator == 0.0 {
        return 0.0;
    }
    (value / denominator) * 100.0
}

/// Derive the display figures from a calculation.
pub fn format_result(result: &EmissionResult) -> DisplayData {
    let total = result.total();
    let total_kg = to_fixed_1(total);
    let categories = result
        .entries()
        .iter()
        .map(|&(category, monthly_kg)| CategoryLine {
            category,
            label: category.label(),
            monthly_kg,
            percentage: percentage_of(monthly_kg, &total_kg),
        })
        .collect();

    DisplayData {
        categories,
        total_kg,
        daily_average: total / DAYS_PER_MONTH,
        annual_tonnes: total * MONTHS_PER_YEAR / KG_PER_TONNE,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cce_core::{calculate, FuelType};

    #[test]
    fn wood_example_figures() {
        let display = format_result(&calculate(FuelType::Wood, 10.0, 2.0));
        assert_eq!(display.total_kg, "384.0");
        assert_eq!(display.daily_average, 384.0 / 30.0);
        assert_eq!(display.annual_tonnes, 384.0 * 12.0 / 1000.0);
        assert_eq!(display.categories.len(), 2);
        assert_eq!(display.categories[0].label, "Cooking Emissions");
        assert_eq!(display.categories[0].value_text(), "360.0 kg CO₂e/month");
        assert_eq!(display.categories[0].percentage_text(), "93.8% of total");
        assert_eq!(display.categories[1].value_text(), "24.0 kg CO₂e/month");
        assert_eq!(display.categories[1].percentage_text(), "6.3% of total");
    }

    #[test]
    fn panel_text() {
        let display = format_result(&calculate(FuelType::Wood, 10.0, 2.0));
        assert_eq!(display.annual_text(), "Total Annual Emissions: 4.6 Tonnes CO₂e/Year");
        assert_eq!(display.daily_text(), "Daily Average: 12.8 kg CO₂e/day");
        let lines = display.lines();
        assert_eq!(lines.len(), 8);
        assert_eq!(lines[0], "Cooking Emissions");
        assert_eq!(lines[7], "Daily Average: 12.8 kg CO₂e/day");
    }

    #[test]
    fn derived_figures_hold_for_many_totals() {
        for meals in [0.0, 1.0, 3.0, 9.5] {
            for duration in [0.0, 0.7, 2.0] {
                let result = calculate(FuelType::Lpg, meals, duration);
                let display = format_result(&result);
                assert_eq!(display.daily_average, result.total() / 30.0);
                assert_eq!(display.annual_tonnes, result.total() * 12.0 / 1000.0);
            }
        }
    }

    #[test]
    fn zero_total_gives_zero_percentages() {
        let display = format_result(&calculate(FuelType::Wood, 0.0, 0.0));
        assert_eq!(display.total_kg, "0.0");
        for line in &display.categories {
            assert_eq!(line.percentage, 0.0);
            assert_eq!(line.percentage_text(), "0.0% of total");
        }
    }

    #[test]
    fn percentage_uses_rounded_total() {
        // raw total 10.04 rounds to "10.0", so the share is 10.04 / 10.0
        let pct = percentage_of(10.04, &to_fixed_1(10.04));
        assert_eq!(pct, (10.04 / 10.0) * 100.0);
        assert!(pct > 100.0);
    }

    #[test]
    fn serializes_for_json_output() {
        let display = format_result(&calculate(FuelType::Charcoal, 2.0, 1.0));
        let json = serde_json::to_value(&display).unwrap();
        assert_eq!(json["total_kg"], "72.0");
        assert_eq!(json["categories"][0]["label"], "Cooking Emissions");
        assert!(json["categories"][0].get("category").is_none());
    }
}
