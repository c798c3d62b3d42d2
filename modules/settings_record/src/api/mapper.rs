//! Conversions between DTOs and contract models
//!
//! Also hosts the serde impls for [`SettingsRecord`]: serialization goes
//! through [`SettingsRecordDto`], deserialization through the validator so
//! embedded records report the same field-level errors.

use super::dto::SettingsRecordDto;
use crate::contract::SettingsRecord;
use crate::domain::validate_record;
use crate::domain::validation::{ACCESS_PATTERNS_FIELD, TYPE_NAME_FIELD};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;

impl From<SettingsRecord> for SettingsRecordDto {
    fn from(record: SettingsRecord) -> Self {
        let (type_name, access_patterns) = record.into_parts();
        Self {
            type_name,
            access_patterns,
        }
    }
}

impl From<&SettingsRecord> for SettingsRecordDto {
    fn from(record: &SettingsRecord) -> Self {
        Self {
            type_name: record.type_name().map(str::to_owned),
            access_patterns: record.access_patterns().clone(),
        }
    }
}

impl From<SettingsRecordDto> for SettingsRecord {
    fn from(dto: SettingsRecordDto) -> Self {
        SettingsRecord::new(dto.type_name, dto.access_patterns)
    }
}

impl SettingsRecord {
    /// Dump the record as a structured value
    pub fn to_value(&self) -> Value {
        let mut object = serde_json::Map::new();
        object.insert(
            TYPE_NAME_FIELD.to_string(),
            self.type_name()
                .map_or(Value::Null, |name| Value::String(name.to_owned())),
        );
        object.insert(
            ACCESS_PATTERNS_FIELD.to_string(),
            Value::Object(self.access_patterns().clone()),
        );
        Value::Object(object)
    }
}

impl Serialize for SettingsRecord {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        SettingsRecordDto::from(self).serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for SettingsRecord {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Value::deserialize(deserializer)?;
        validate_record(&value).map_err(serde::de::Error::custom)
    }
}
