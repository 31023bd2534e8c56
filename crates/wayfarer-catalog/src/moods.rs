//! Mood table overrides.
//!
//! A mood table file has one top-level table per category, keyed by the
//! category's snake_case name:
//!
//! ```toml
//! [calm_peaceful]
//! label = "Calm & Peaceful"
//! energy = [1, 4]
//! social = [1, 5]
//! adventure = [1, 4]
//! tags = ["spa", "lake"]
//! rationale = "You look relaxed and {emotion}."
//! ```

use crate::CatalogError;
use std::collections::BTreeMap;
use std::path::Path;
use wayfarer_core::{MoodCategory, MoodMappingEntry, MoodMappingRegistry};

/// Parse and validate a complete mood table.
pub fn from_toml_str(src: &str) -> Result<MoodMappingRegistry, CatalogError> {
    let raw: BTreeMap<String, MoodMappingEntry> = toml::from_str(src)?;
    let entries = raw
        .into_iter()
        .map(|(key, entry)| {
            let category = key
                .parse::<MoodCategory>()
                .map_err(|e| CatalogError::UnknownCategory(e.0))?;
            Ok((category, entry))
        })
        .collect::<Result<Vec<_>, CatalogError>>()?;
    Ok(MoodMappingRegistry::from_entries(entries)?)
}

/// Load a mood table file.
pub fn load(path: impl AsRef<Path>) -> Result<MoodMappingRegistry, CatalogError> {
    let path = path.as_ref();
    let src = std::fs::read_to_string(path).map_err(|source| CatalogError::Io {
        path: path.display().to_string(),
        source,
    })?;
    let registry = from_toml_str(&src)?;
    tracing::info!(path = %path.display(), "loaded mood table");
    Ok(registry)
}
