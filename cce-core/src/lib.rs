//! Core types for the cooking emissions estimator.
//!
//! Leaves first: [`fuel`] holds the fixed factor table, [`input`] collects
//! and validates slider values, [`emission`] turns validated input into
//! per-category monthly emissions, and [`record`] describes what gets
//! persisted per user. The [`gateway`] and [`auth`] traits are the seams to
//! the storage backend and the sign-in provider.

pub mod auth;
pub mod emission;
pub mod error;
pub mod fuel;
pub mod gateway;
pub mod input;
pub mod record;

pub use emission::{calculate, Category, EmissionResult};
pub use error::{InvalidInputError, InvalidReason, PersistenceError};
pub use fuel::FuelType;
pub use input::{RawInput, ValidatedInput};
pub use record::{NewRecord, RecordId, ReportInputs, Section, StoredRecord, User};
pub use auth::{AuthEvent, AuthProvider};
pub use gateway::PersistenceGateway;
