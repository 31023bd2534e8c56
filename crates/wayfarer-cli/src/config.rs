use std::path::PathBuf;
use wayfarer_core::DEFAULT_LIMIT;

/// CLI configuration, loaded from environment variables.
///
/// Command-line flags take precedence over these values.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Destination catalog TOML (default: embedded catalog).
    pub catalog_path: Option<PathBuf>,
    /// Mood table TOML (default: built-in table).
    pub mood_table_path: Option<PathBuf>,
    /// Maximum number of recommended destinations.
    pub match_limit: usize,
}

impl Config {
    /// Load configuration from `WAYFARER_*` environment variables with defaults.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let path = |key: &str| lookup(key).filter(|v| !v.is_empty()).map(PathBuf::from);
        Self {
            catalog_path: path("WAYFARER_CATALOG_PATH"),
            mood_table_path: path("WAYFARER_MOOD_TABLE"),
            match_limit: lookup("WAYFARER_MATCH_LIMIT")
                .and_then(|v| v.parse().ok())
                .unwrap_or(DEFAULT_LIMIT),
        }
    }
}
