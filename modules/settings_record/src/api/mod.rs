//! API layer - serde mapping and text/file loading

pub mod dto;
pub mod loader;
pub mod mapper;

pub use dto::SettingsRecordDto;
pub use loader::{from_json_str, from_path, from_yaml_str, LoadError, RecordLoader, SourceFormat};
