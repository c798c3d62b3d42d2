//! Contract error types for settings records
//!
//! Validation is the only way constructing a record can fail. A single
//! [`ValidationError`] carries every offending field found in one input.

use serde_json::Value;
use std::fmt;
use thiserror::Error;

/// Location of a violation inside the input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldPath {
    /// The input value itself
    Root,
    /// A top-level key of the input mapping
    Field(String),
}

impl FieldPath {
    pub fn field(name: impl Into<String>) -> Self {
        Self::Field(name.into())
    }

    /// Field name, or `None` for the root
    pub fn name(&self) -> Option<&str> {
        match self {
            Self::Root => None,
            Self::Field(name) => Some(name),
        }
    }
}

impl fmt::Display for FieldPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Root => write!(f, "input"),
            Self::Field(name) => write!(f, "field '{}'", name),
        }
    }
}

/// Shape a field was required to have
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExpectedType {
    /// A string, or null/absent
    OptionalString,
    /// A mapping with string keys
    Mapping,
}

impl fmt::Display for ExpectedType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OptionalString => write!(f, "string or null"),
            Self::Mapping => write!(f, "mapping"),
        }
    }
}

/// Kind of value actually supplied
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueKind {
    Null,
    Boolean,
    Number,
    String,
    List,
    Mapping,
}

impl ValueKind {
    pub fn of(value: &Value) -> Self {
        match value {
            Value::Null => Self::Null,
            Value::Bool(_) => Self::Boolean,
            Value::Number(_) => Self::Number,
            Value::String(_) => Self::String,
            Value::Array(_) => Self::List,
            Value::Object(_) => Self::Mapping,
        }
    }
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Null => "null",
            Self::Boolean => "boolean",
            Self::Number => "number",
            Self::String => "string",
            Self::List => "list",
            Self::Mapping => "mapping",
        };
        f.write_str(name)
    }
}

/// What was wrong with a field
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViolationKind {
    /// Value present but of the wrong type
    WrongType {
        expected: ExpectedType,
        found: ValueKind,
    },
    /// Key not part of the record (only reported in strict mode)
    UnknownField,
}

/// A single offending field
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldViolation {
    pub field: FieldPath,
    pub kind: ViolationKind,
}

impl FieldViolation {
    pub fn wrong_type(field: FieldPath, expected: ExpectedType, found: &Value) -> Self {
        Self {
            field,
            kind: ViolationKind::WrongType {
                expected,
                found: ValueKind::of(found),
            },
        }
    }

    pub fn unknown_field(name: impl Into<String>) -> Self {
        Self {
            field: FieldPath::field(name),
            kind: ViolationKind::UnknownField,
        }
    }
}

impl fmt::Display for FieldViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            ViolationKind::WrongType { expected, found } => {
                write!(f, "{}: expected {}, found {}", self.field, expected, found)
            }
            ViolationKind::UnknownField => write!(f, "{}: unknown field", self.field),
        }
    }
}

/// Settings record validation failure
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Validation error: {}", join_violations(.violations))]
pub struct ValidationError {
    violations: Vec<FieldViolation>,
}

impl ValidationError {
    /// Build an error from collected violations
    ///
    /// Returns `None` when nothing was violated, so callers never hold an
    /// error that names no field.
    pub fn from_violations(violations: Vec<FieldViolation>) -> Option<Self> {
        if violations.is_empty() {
            None
        } else {
            Some(Self { violations })
        }
    }

    pub fn single(violation: FieldViolation) -> Self {
        Self {
            violations: vec![violation],
        }
    }

    pub fn violations(&self) -> &[FieldViolation] {
        &self.violations
    }

    /// Names of the offending fields; the root is skipped
    pub fn fields(&self) -> impl Iterator<Item = &str> {
        self.violations.iter().filter_map(|v| v.field.name())
    }

    pub fn has_field(&self, name: &str) -> bool {
        self.fields().any(|field| field == name)
    }
}

fn join_violations(violations: &[FieldViolation]) -> String {
    violations
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}
