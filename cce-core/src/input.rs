//! Raw slider input and the validator that guards the calculator.

use crate::emission::{calculate, EmissionResult};
use crate::error::{InvalidInputError, InvalidReason};
use crate::fuel::FuelType;
use cce_utils::numbers::parse_or_nan;
use serde::Serialize;

/// Field key for the number of meals per day.
pub const MEALS_NUMBER: &str = "mealsNumber";

/// Field key for the cooking duration in hours per day.
pub const COOKING_DURATION: &str = "cookingDuration";

/// Values collected from the selector and the two sliders.
///
/// Nothing here is checked yet; see [`RawInput::validate`].
#[derive(Debug, PartialEq, Clone, Copy, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RawInput {
    pub fuel_type: FuelType,
    pub meals_number: f64,
    pub cooking_duration: f64,
}

/// Input that passed validation. Only obtainable through [`RawInput::validate`].
#[derive(Debug, PartialEq, Clone, Copy)]
pub struct ValidatedInput(RawInput);

impl RawInput {
    pub fn new(fuel_type: FuelType, meals_number: f64, cooking_duration: f64) -> Self {
        Self {
            fuel_type,
            meals_number,
            cooking_duration,
        }
    }

    /// Collect input from the text shown next to each slider.
    ///
    /// Text that is not a number is kept as NaN so the validator can name the
    /// field; collection itself never fails.
    pub fn from_text(fuel: &str, meals: &str, duration: &str) -> Self {
        Self::new(FuelType::from_key(fuel), parse_or_nan(meals), parse_or_nan(duration))
    }

    /// Numeric fields in validation order.
    pub fn fields(&self) -> [(&'static str, f64); 2] {
        [
            (MEALS_NUMBER, self.meals_number),
            (COOKING_DURATION, self.cooking_duration),
        ]
    }

    /// Check every field, then make sure the emissions they produce are finite.
    pub fn validate(self) -> Result<ValidatedInput, InvalidInputError> {
        validate_inputs(&self.fields())?;
        let validated = ValidatedInput(self);
        check_result_range(&validated.calculate())?;
        Ok(validated)
    }
}

impl ValidatedInput {
    pub fn raw(&self) -> &RawInput {
        &self.0
    }

    pub fn calculate(&self) -> EmissionResult {
        calculate(self.0.fuel_type, self.0.meals_number, self.0.cooking_duration)
    }
}

/// Reject the first field, in slice order, that is not a finite non-negative number.
///
/// Returns the fields unchanged on success.
pub fn validate_inputs<'a>(
    fields: &'a [(&'static str, f64)],
) -> Result<&'a [(&'static str, f64)], InvalidInputError> {
    for &(field, value) in fields {
        if !value.is_finite() {
            return Err(InvalidInputError {
                field,
                reason: InvalidReason::NotANumber,
            });
        }
        if value < 0.0 {
            return Err(InvalidInputError {
                field,
                reason: InvalidReason::Negative,
            });
        }
    }
    Ok(fields)
}

/// Reject results that overflowed; the first infinite category names the field.
fn check_result_range(result: &EmissionResult) -> Result<(), InvalidInputError> {
    if result.total().is_finite() {
        return Ok(());
    }
    let field = result
        .entries()
        .iter()
        .find(|(_, value)| !value.is_finite())
        .map(|(category, _)| category.key())
        .unwrap_or(MEALS_NUMBER);
    Err(InvalidInputError {
        field,
        reason: InvalidReason::OutOfRange,
    })
}
