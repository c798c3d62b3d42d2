//! Contract layer - public types for settings records
//!
//! Transport-agnostic model and error types.
//! NO serde derives on models - these are pure domain types.

pub mod error;
pub mod model;

pub use error::{ExpectedType, FieldPath, FieldViolation, ValidationError, ValueKind, ViolationKind};
pub use model::{AccessPatterns, SettingsRecord};
