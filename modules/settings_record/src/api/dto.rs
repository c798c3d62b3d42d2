//! Serde DTOs for settings records

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Wire form of a settings record
///
/// `type_name` is written as `null` when absent so the dumped shape always
/// carries both keys.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SettingsRecordDto {
    /// Identifying name
    #[serde(default)]
    pub type_name: Option<String>,

    /// Access pattern entries
    #[serde(default)]
    pub access_patterns: Map<String, Value>,
}

// Note: conversions live in mapper.rs
