//! Settings Record
//!
//! A shape-validated configuration value with an optional `type_name` and a
//! mapping of `access_patterns`. Records are built once from structured
//! input (JSON/YAML text, files, or a `serde_json::Value`) and are immutable
//! afterwards.

// Public exports
pub mod contract;
pub use contract::{
    AccessPatterns, ExpectedType, FieldPath, FieldViolation, SettingsRecord, ValidationError,
    ValueKind, ViolationKind,
};

pub mod api;
pub use api::{from_json_str, from_path, from_yaml_str, LoadError, RecordLoader, SettingsRecordDto, SourceFormat};

pub mod config;
pub use config::Config;

pub mod domain;
pub use domain::{validate_record, RecordValidator};
