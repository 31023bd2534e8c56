//! Analysis entry point: fusion, classification, scoring and matching.

use crate::classifier;
use crate::fusion::{self, PrimaryIndexError};
use crate::mapping::MoodMappingRegistry;
use crate::matcher::{DestinationMatcher, TagOverlapMatcher, DEFAULT_LIMIT};
use crate::scores;
use crate::types::{Destination, EmotionReading, EmotionVector, MoodCategory, ValidationError};
use serde::Serialize;
use std::sync::Arc;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum EngineError {
    #[error("face {face}: {source}")]
    Validation {
        face: usize,
        #[source]
        source: ValidationError,
    },
    #[error("invalid argument: {0}")]
    InvalidArgument(#[from] PrimaryIndexError),
}

/// Compact destination record returned with an analysis.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DestinationSummary {
    pub id: String,
    pub title: String,
    pub tags: Vec<String>,
}

impl From<&Destination> for DestinationSummary {
    fn from(d: &Destination) -> Self {
        Self {
            id: d.id.clone(),
            title: d.title.clone(),
            tags: d.tags.clone(),
        }
    }
}

/// Output of one analysis. Serializes to the response JSON shape.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResult {
    /// Display label of the assigned mood.
    pub detected_mood: String,
    pub mood_category: MoodCategory,
    pub confidence: f64,
    /// The fused vector the decision was made on.
    pub emotions: EmotionVector,
    pub energy_level: u8,
    pub social_score: u8,
    pub adventure_score: u8,
    pub reasoning: String,
    pub recommended_keys: Vec<String>,
    /// `None` when no catalog is attached; `Some(vec![])` when nothing matched.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recommendations: Option<Vec<DestinationSummary>>,
}

/// Stateless analysis engine over an injected mood table and optional catalog.
///
/// Cheap to clone; the tables are shared read-only.
#[derive(Debug, Clone)]
pub struct MoodEngine {
    registry: Arc<MoodMappingRegistry>,
    catalog: Option<Arc<[Destination]>>,
    limit: usize,
}

impl MoodEngine {
    pub fn new(registry: impl Into<Arc<MoodMappingRegistry>>) -> Self {
        Self {
            registry: registry.into(),
            catalog: None,
            limit: DEFAULT_LIMIT,
        }
    }

    pub fn with_catalog(mut self, catalog: impl Into<Arc<[Destination]>>) -> Self {
        self.catalog = Some(catalog.into());
        self
    }

    pub fn with_limit(mut self, limit: usize) -> Self {
        self.limit = limit;
        self
    }

    pub fn registry(&self) -> &MoodMappingRegistry {
        &self.registry
    }

    pub fn catalog(&self) -> Option<&[Destination]> {
        self.catalog.as_deref()
    }

    pub fn limit(&self) -> usize {
        self.limit
    }

    /// Validate wire readings, then analyze them.
    pub fn analyze_readings(
        &self,
        readings: Vec<EmotionReading>,
        primary_index: usize,
    ) -> Result<AnalysisResult, EngineError> {
        let faces = readings
            .into_iter()
            .enumerate()
            .map(|(face, r)| {
                EmotionVector::try_from(r).map_err(|source| EngineError::Validation { face, source })
            })
            .collect::<Result<Vec<_>, _>>()?;
        self.analyze(&faces, primary_index)
    }

    /// Analyze zero or more faces.
    ///
    /// Every face is validated and `primary_index` is checked before fusion.
    /// No faces is not an error: the neutral fallback vector is used.
    pub fn analyze(
        &self,
        faces: &[EmotionVector],
        primary_index: usize,
    ) -> Result<AnalysisResult, EngineError> {
        for (face, v) in faces.iter().enumerate() {
            v.validate()
                .map_err(|source| EngineError::Validation { face, source })?;
        }

        if faces.is_empty() {
            tracing::info!("no face detected; analyzing neutral fallback");
        }

        let fused = fusion::fuse(faces, primary_index)?;
        let category = classifier::classify(&fused);
        let derived = scores::derive_scores(&fused);
        let entry = self.registry.lookup(category);

        tracing::debug!(
            category = %category,
            energy = derived.energy,
            social = derived.social,
            adventure = derived.adventure,
            confidence = derived.confidence,
            "analysis scored"
        );

        let recommendations = self.catalog.as_deref().map(|catalog| {
            let found = TagOverlapMatcher.shortlist(&derived, &entry.tags, catalog, self.limit);
            if found.is_empty() {
                tracing::info!(category = %category, "no destinations matched");
            }
            found.into_iter().map(DestinationSummary::from).collect::<Vec<_>>()
        });

        Ok(AnalysisResult {
            detected_mood: entry.label.clone(),
            mood_category: category,
            confidence: derived.confidence,
            emotions: fused,
            energy_level: derived.energy,
            social_score: derived.social,
            adventure_score: derived.adventure,
            reasoning: entry.render_rationale(fused.dominant()),
            recommended_keys: entry.tags.clone(),
            recommendations,
        })
    }
}

impl Default for MoodEngine {
    fn default() -> Self {
        Self::new(MoodMappingRegistry::builtin())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Emotion, ScoreRange};

    fn dest(id: &str, tags: &[&str], lo: u8, hi: u8) -> Destination {
        let r = ScoreRange::new(lo, hi).unwrap();
        Destination {
            id: id.to_string(),
            title: id.to_string(),
            tags: tags.iter().map(|t| t.to_string()).collect(),
            energy: r,
            social: r,
            adventure: r,
        }
    }

    fn joyful() -> EmotionVector {
        EmotionVector { happy: 0.9, surprised: 0.5, neutral: 0.1, ..Default::default() }
    }

    #[test]
    fn test_analyze_joyful_face() {
        let result = MoodEngine::default().analyze(&[joyful()], 0).unwrap();
        assert_eq!(result.mood_category, MoodCategory::HappyExcited);
        assert_eq!(result.detected_mood, "Happy & Excited");
        assert_eq!(result.energy_level, 10);
        assert_eq!(result.social_score, 10);
        assert_eq!(result.adventure_score, 10);
        assert_eq!(result.confidence, 0.5);
        assert_eq!(result.emotions, joyful());
        assert!(result.reasoning.contains("happy"));
        assert!(!result.reasoning.contains("{emotion}"));
        assert_eq!(result.recommended_keys[0], "beach");
        assert!(result.recommendations.is_none());
    }

    #[test]
    fn test_no_faces_uses_neutral_fallback() {
        let result = MoodEngine::default().analyze(&[], 0).unwrap();
        assert_eq!(result.emotions, EmotionVector::NEUTRAL);
        assert_eq!(result.mood_category, MoodCategory::CalmPeaceful);
    }

    #[test]
    fn test_invalid_face_reports_index() {
        let bad = EmotionVector { angry: 1.5, ..Default::default() };
        let err = MoodEngine::default().analyze(&[joyful(), bad], 0).unwrap_err();
        assert_eq!(
            err,
            EngineError::Validation {
                face: 1,
                source: ValidationError::OutOfRange { field: Emotion::Angry, value: 1.5 },
            }
        );
    }

    #[test]
    fn test_primary_index_out_of_range() {
        let err = MoodEngine::default().analyze(&[joyful(), joyful()], 5).unwrap_err();
        assert_eq!(err, EngineError::InvalidArgument(PrimaryIndexError { index: 5, len: 2 }));
    }

    #[test]
    fn test_analyze_readings_missing_field() {
        let reading = EmotionReading {
            happy: Some(0.5),
            sad: Some(0.0),
            angry: Some(0.0),
            surprised: Some(0.0),
            neutral: None,
            fear: Some(0.0),
            disgust: Some(0.0),
        };
        let err = MoodEngine::default().analyze_readings(vec![reading], 0).unwrap_err();
        assert_eq!(
            err,
            EngineError::Validation { face: 0, source: ValidationError::MissingField(Emotion::Neutral) }
        );
    }

    #[test]
    fn test_catalog_shortlist_attached() {
        let catalog = vec![
            dest("quiet", &["spa"], 1, 4),
            dest("party", &["beach", "nightlife"], 7, 10),
            dest("fair", &["festival"], 8, 10),
            dest("hike", &["mountain"], 7, 10),
        ];
        let engine = MoodEngine::default().with_catalog(catalog);
        let result = engine.analyze(&[joyful()], 0).unwrap();
        let ids: Vec<_> = result
            .recommendations
            .unwrap()
            .into_iter()
            .map(|d| d.id)
            .collect();
        assert_eq!(ids, vec!["party", "fair"]);
    }

    #[test]
    fn test_empty_shortlist_is_some_empty() {
        let engine = MoodEngine::default().with_catalog(vec![dest("quiet", &["spa"], 1, 4)]);
        let result = engine.analyze(&[joyful()], 0).unwrap();
        assert_eq!(result.recommendations, Some(vec![]));
    }

    #[test]
    fn test_limit_is_respected() {
        let catalog: Vec<_> = (0..5).map(|i| dest(&format!("b{i}"), &["beach"], 1, 10)).collect();
        let engine = MoodEngine::default().with_catalog(catalog).with_limit(2);
        let result = engine.analyze(&[joyful()], 0).unwrap();
        assert_eq!(result.recommendations.unwrap().len(), 2);
    }

    #[test]
    fn test_json_shape() {
        let engine = MoodEngine::default().with_catalog(vec![dest("party", &["beach"], 1, 10)]);
        let result = engine.analyze(&[joyful()], 0).unwrap();
        let json = serde_json::to_value(&result).unwrap();
        for key in [
            "detectedMood",
            "moodCategory",
            "confidence",
            "emotions",
            "energyLevel",
            "socialScore",
            "adventureScore",
            "reasoning",
            "recommendedKeys",
            "recommendations",
        ] {
            assert!(json.get(key).is_some(), "missing {key}");
        }
        assert_eq!(json["moodCategory"], "happy_excited");
        assert_eq!(json["emotions"]["happy"], 0.9);
        assert_eq!(json["recommendations"][0]["id"], "party");
    }

    #[test]
    fn test_json_omits_recommendations_without_catalog() {
        let result = MoodEngine::default().analyze(&[joyful()], 0).unwrap();
        let json = serde_json::to_value(&result).unwrap();
        assert!(json.get("recommendations").is_none());
    }
}
