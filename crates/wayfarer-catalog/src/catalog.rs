//! Destination catalog.
//!
//! Catalogs are TOML files with one `[[destination]]` table per entry. A
//! default catalog is embedded at compile time from
//! `contrib/catalog/destinations.toml`.

use crate::CatalogError;
use serde::Deserialize;
use std::collections::HashSet;
use std::path::Path;
use std::sync::OnceLock;
use wayfarer_core::{Destination, ScoreRange};

const EMBEDDED_CATALOG: &str = include_str!("../../../contrib/catalog/destinations.toml");

static EMBEDDED: OnceLock<Catalog> = OnceLock::new();

/// Top-level catalog file structure.
#[derive(Debug, Deserialize)]
struct CatalogFile {
    #[serde(default)]
    destination: Vec<RawDestination>,
}

/// One `[[destination]]` table before range validation.
#[derive(Debug, Deserialize)]
struct RawDestination {
    id: String,
    title: String,
    #[serde(default)]
    tags: Vec<String>,
    energy: [u8; 2],
    social: [u8; 2],
    adventure: [u8; 2],
}

impl RawDestination {
    fn validate(self) -> Result<Destination, CatalogError> {
        if self.id.trim().is_empty() {
            return Err(CatalogError::EmptyField {
                id: self.id,
                field: "id",
            });
        }
        if self.title.trim().is_empty() {
            return Err(CatalogError::EmptyField {
                id: self.id,
                field: "title",
            });
        }
        if self.tags.iter().any(|t| t.trim().is_empty()) {
            return Err(CatalogError::EmptyField {
                id: self.id,
                field: "tag",
            });
        }
        let energy = range(&self.id, "energy", self.energy)?;
        let social = range(&self.id, "social", self.social)?;
        let adventure = range(&self.id, "adventure", self.adventure)?;
        Ok(Destination {
            id: self.id,
            title: self.title,
            tags: self.tags,
            energy,
            social,
            adventure,
        })
    }
}

fn range(id: &str, axis: &'static str, [low, high]: [u8; 2]) -> Result<ScoreRange, CatalogError> {
    ScoreRange::new(low, high).map_err(|source| CatalogError::InvalidRange {
        id: id.to_string(),
        axis,
        source,
    })
}

/// Immutable, validated list of destinations in file order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Catalog {
    destinations: Vec<Destination>,
}

impl Catalog {
    /// Build from already-constructed destinations, rejecting duplicate ids.
    pub fn new(destinations: Vec<Destination>) -> Result<Self, CatalogError> {
        let mut seen = HashSet::new();
        for d in &destinations {
            if !seen.insert(d.id.as_str()) {
                return Err(CatalogError::DuplicateId(d.id.clone()));
            }
        }
        Ok(Self { destinations })
    }

    pub fn from_toml_str(src: &str) -> Result<Self, CatalogError> {
        let file: CatalogFile = toml::from_str(src)?;
        let destinations = file
            .destination
            .into_iter()
            .map(RawDestination::validate)
            .collect::<Result<Vec<_>, _>>()?;
        Self::new(destinations)
    }

    /// Load and validate a catalog file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let path = path.as_ref();
        let src = std::fs::read_to_string(path).map_err(|source| CatalogError::Io {
            path: path.display().to_string(),
            source,
        })?;
        let catalog = Self::from_toml_str(&src)?;
        tracing::info!(path = %path.display(), destinations = catalog.len(), "loaded catalog");
        Ok(catalog)
    }

    /// The compile-time embedded default catalog.
    ///
    /// Parsed once on first use. A malformed embedded file is logged and
    /// yields an empty catalog.
    pub fn embedded() -> &'static Catalog {
        EMBEDDED.get_or_init(|| match Self::from_toml_str(EMBEDDED_CATALOG) {
            Ok(catalog) => catalog,
            Err(e) => {
                tracing::error!(error = %e, "bad embedded catalog");
                Catalog::default()
            }
        })
    }

    pub fn get(&self, id: &str) -> Option<&Destination> {
        self.destinations.iter().find(|d| d.id == id)
    }

    pub fn destinations(&self) -> &[Destination] {
        &self.destinations
    }

    pub fn len(&self) -> usize {
        self.destinations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.destinations.is_empty()
    }

    pub fn into_destinations(self) -> Vec<Destination> {
        self.destinations
    }
}
