//! Error types for the cooking emissions core
use cce_utils::text::humanize_field;
use thiserror::Error;

/// Why a field failed validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvalidReason {
    /// NaN, infinite, or text that did not parse as a number
    NotANumber,
    Negative,
    /// Valid on its own but the monthly emissions overflow
    OutOfRange,
}

/// A raw input field was rejected before any computation ran.
///
/// The message is the one shown to the user, naming the field in plain words.
#[derive(Error, Debug, Clone, PartialEq)]
#[error("Please enter a valid number for {}", humanize_field(.field))]
pub struct InvalidInputError {
    /// Field key as it appears in the input mapping (e.g. `mealsNumber`)
    pub field: &'static str,
    pub reason: InvalidReason,
}

/// Failures from the persistence backend.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum PersistenceError {
    /// The storage backend rejected or failed the operation
    #[error("storage backend failed: {0}")]
    Backend(String),

    /// A stored report could not be decoded
    #[error("stored report {id} is unreadable: {reason}")]
    Corrupt { id: i64, reason: String },

    /// CSV import/export failed
    #[error("failed to convert report history: {0}")]
    Conversion(String),
}
