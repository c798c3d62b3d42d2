//! Configuration for settings record validation

use serde::Deserialize;

/// Settings record validation configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Reject input keys other than `type_name` and `access_patterns`
    #[serde(default)]
    pub deny_unknown_fields: bool,
}

impl Config {
    /// Strict configuration that reports unknown keys
    pub fn strict() -> Self {
        Self {
            deny_unknown_fields: true,
        }
    }
}
