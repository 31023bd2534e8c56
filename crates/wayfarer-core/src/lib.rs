//! wayfarer-core — Mood classification and destination matching engine.
//!
//! Fuses per-face emotion vectors, classifies the result into a travel mood
//! with an ordered rule table, derives energy/social/adventure/confidence
//! scores, and shortlists destinations from an injected catalog.

pub mod classifier;
pub mod engine;
pub mod fusion;
pub mod mapping;
pub mod matcher;
pub mod scores;
pub mod types;

pub use engine::{AnalysisResult, DestinationSummary, EngineError, MoodEngine};
pub use fusion::{fuse, PrimaryIndexError};
pub use mapping::{MappingError, MoodMappingEntry, MoodMappingRegistry};
pub use matcher::{DestinationMatcher, TagOverlapMatcher, DEFAULT_LIMIT};
pub use types::{
    DerivedScores, Destination, Emotion, EmotionReading, EmotionVector, MoodCategory, RangeError,
    ScoreRange, ValidationError,
};
