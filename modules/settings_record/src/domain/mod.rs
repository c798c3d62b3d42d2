//! Domain layer - record validation

pub mod validation;

pub use validation::{validate_record, RecordValidator};
