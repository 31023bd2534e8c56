//! wayfarer-catalog — Destination catalog and mood table loading.
//!
//! Parses TOML catalogs into validated [`wayfarer_core::Destination`] lists
//! and mood-table overrides into a [`wayfarer_core::MoodMappingRegistry`].

pub mod catalog;
pub mod moods;

pub use catalog::Catalog;

use thiserror::Error;
use wayfarer_core::{MappingError, RangeError};

#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid TOML: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("destination `{id}`: {axis} {source}")]
    InvalidRange {
        id: String,
        axis: &'static str,
        #[source]
        source: RangeError,
    },
    #[error("destination `{id}` has an empty {field}")]
    EmptyField { id: String, field: &'static str },
    #[error("duplicate destination id `{0}`")]
    DuplicateId(String),
    #[error("unknown mood category `{0}`")]
    UnknownCategory(String),
    #[error("mood table: {0}")]
    Mapping(#[from] MappingError),
}
