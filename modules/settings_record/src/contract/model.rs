//! Contract models for settings records
//!
//! These models are transport-agnostic.
//! NO serde derives - serde support lives in `api::mapper`.

use serde_json::{Map, Value};

/// Mapping of access pattern name to an application-defined descriptor
pub type AccessPatterns = Map<String, Value>;

/// Shape-validated settings value
///
/// Built once from external input and never mutated afterwards. Fields are
/// private so the only ways in are [`SettingsRecord::new`] (typed, cannot
/// violate the shape) and the validating constructors.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SettingsRecord {
    type_name: Option<String>,
    access_patterns: AccessPatterns,
}

impl SettingsRecord {
    /// Create a record from already-typed parts
    pub fn new(type_name: Option<String>, access_patterns: AccessPatterns) -> Self {
        Self {
            type_name,
            access_patterns,
        }
    }

    /// Validate structured input with the default configuration
    pub fn from_value(input: &Value) -> Result<Self, super::ValidationError> {
        crate::domain::validate_record(input)
    }

    /// Identifying name, if one was supplied
    pub fn type_name(&self) -> Option<&str> {
        self.type_name.as_deref()
    }

    /// Access pattern entries; empty when none were supplied
    pub fn access_patterns(&self) -> &AccessPatterns {
        &self.access_patterns
    }

    /// Look up a single access pattern by name
    pub fn access_pattern(&self, name: &str) -> Option<&Value> {
        self.access_patterns.get(name)
    }

    pub fn has_access_patterns(&self) -> bool {
        !self.access_patterns.is_empty()
    }

    /// Split the record back into its parts
    pub fn into_parts(self) -> (Option<String>, AccessPatterns) {
        (self.type_name, self.access_patterns)
    }
}

impl TryFrom<&Value> for SettingsRecord {
    type Error = super::ValidationError;

    fn try_from(input: &Value) -> Result<Self, Self::Error> {
        Self::from_value(input)
    }
}

impl TryFrom<Value> for SettingsRecord {
    type Error = super::ValidationError;

    fn try_from(input: Value) -> Result<Self, Self::Error> {
        Self::from_value(&input)
    }
}
