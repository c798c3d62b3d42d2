//! Loading settings records from JSON and YAML sources

use crate::config::Config;
use crate::contract::{SettingsRecord, ValidationError};
use crate::domain::RecordValidator;
use serde_json::Value;
use std::fmt;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Supported text formats
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceFormat {
    Json,
    Yaml,
}

impl SourceFormat {
    /// Pick a format from a file extension (case-insensitive)
    pub fn from_path(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?.to_ascii_lowercase();
        match ext.as_str() {
            "json" => Some(Self::Json),
            "yaml" | "yml" => Some(Self::Yaml),
            _ => None,
        }
    }
}

impl fmt::Display for SourceFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Json => write!(f, "JSON"),
            Self::Yaml => write!(f, "YAML"),
        }
    }
}

/// Errors raised while loading a record from text or a file
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse {format} settings: {message}")]
    Parse {
        format: SourceFormat,
        message: String,
    },

    #[error("unsupported settings file extension: {}", path.display())]
    UnsupportedFormat { path: PathBuf },

    #[error(transparent)]
    Validation(#[from] ValidationError),
}

/// Parses text sources and validates them into records
#[derive(Debug, Clone, Default)]
pub struct RecordLoader {
    validator: RecordValidator,
}

impl RecordLoader {
    pub fn new(config: Config) -> Self {
        Self {
            validator: RecordValidator::new(config),
        }
    }

    pub fn load_json(&self, text: &str) -> Result<SettingsRecord, LoadError> {
        self.load_str(text, SourceFormat::Json)
    }

    pub fn load_yaml(&self, text: &str) -> Result<SettingsRecord, LoadError> {
        self.load_str(text, SourceFormat::Yaml)
    }

    /// Parse `text` as `format`, then validate
    pub fn load_str(&self, text: &str, format: SourceFormat) -> Result<SettingsRecord, LoadError> {
        let value = parse(text, format)?;
        Ok(self.validator.validate(&value)?)
    }

    /// Read a file, choosing the format from its extension
    pub fn load_path(&self, path: impl AsRef<Path>) -> Result<SettingsRecord, LoadError> {
        let path = path.as_ref();
        let format = SourceFormat::from_path(path).ok_or_else(|| LoadError::UnsupportedFormat {
            path: path.to_path_buf(),
        })?;
        tracing::debug!(path = %path.display(), %format, "loading settings record");

        let text = std::fs::read_to_string(path).map_err(|source| LoadError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        self.load_str(&text, format)
    }
}

fn parse(text: &str, format: SourceFormat) -> Result<Value, LoadError> {
    let parsed = match format {
        SourceFormat::Json => serde_json::from_str::<Value>(text).map_err(|e| e.to_string()),
        SourceFormat::Yaml => serde_yaml::from_str::<Value>(text).map_err(|e| e.to_string()),
    };
    parsed.map_err(|message| LoadError::Parse { format, message })
}

/// Load a record from JSON text with the default configuration
pub fn from_json_str(text: &str) -> Result<SettingsRecord, LoadError> {
    RecordLoader::default().load_json(text)
}

/// Load a record from YAML text with the default configuration
pub fn from_yaml_str(text: &str) -> Result<SettingsRecord, LoadError> {
    RecordLoader::default().load_yaml(text)
}

/// Load a record from a `.json`, `.yaml` or `.yml` file with the default configuration
pub fn from_path(path: impl AsRef<Path>) -> Result<SettingsRecord, LoadError> {
    RecordLoader::default().load_path(path)
}
