//! Shape validation for settings record input

use crate::config::Config;
use crate::contract::{
    AccessPatterns, ExpectedType, FieldPath, FieldViolation, SettingsRecord, ValidationError,
};
use serde_json::Value;

pub const TYPE_NAME_FIELD: &str = "type_name";
pub const ACCESS_PATTERNS_FIELD: &str = "access_patterns";

/// Validates structured input and builds [`SettingsRecord`]s
#[derive(Debug, Clone, Default)]
pub struct RecordValidator {
    config: Config,
}

impl RecordValidator {
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Validate `input` and build a record
    ///
    /// Every violation in the input is collected before failing, so the
    /// error names all offending fields at once.
    pub fn validate(&self, input: &Value) -> Result<SettingsRecord, ValidationError> {
        let Some(object) = input.as_object() else {
            let violation = FieldViolation::wrong_type(FieldPath::Root, ExpectedType::Mapping, input);
            tracing::debug!(%violation, "settings record rejected");
            return Err(ValidationError::single(violation));
        };

        let mut violations = Vec::new();

        let type_name = match object.get(TYPE_NAME_FIELD) {
            None | Some(Value::Null) => None,
            Some(Value::String(name)) => Some(name.clone()),
            Some(other) => {
                violations.push(FieldViolation::wrong_type(
                    FieldPath::field(TYPE_NAME_FIELD),
                    ExpectedType::OptionalString,
                    other,
                ));
                None
            }
        };

        let access_patterns = match object.get(ACCESS_PATTERNS_FIELD) {
            None => AccessPatterns::new(),
            Some(Value::Object(patterns)) => patterns.clone(),
            Some(other) => {
                violations.push(FieldViolation::wrong_type(
                    FieldPath::field(ACCESS_PATTERNS_FIELD),
                    ExpectedType::Mapping,
                    other,
                ));
                AccessPatterns::new()
            }
        };

        if self.config.deny_unknown_fields {
            violations.extend(
                object
                    .keys()
                    .filter(|key| !is_known_field(key))
                    .map(FieldViolation::unknown_field),
            );
        }

        if let Some(error) = ValidationError::from_violations(violations) {
            tracing::debug!(%error, "settings record rejected");
            return Err(error);
        }

        tracing::debug!(
            type_name = type_name.as_deref().unwrap_or("<none>"),
            access_patterns = access_patterns.len(),
            "settings record validated"
        );
        Ok(SettingsRecord::new(type_name, access_patterns))
    }
}

fn is_known_field(key: &str) -> bool {
    key == TYPE_NAME_FIELD || key == ACCESS_PATTERNS_FIELD
}

/// Validate `input` with the default configuration
pub fn validate_record(input: &Value) -> Result<SettingsRecord, ValidationError> {
    RecordValidator::default().validate(input)
}
