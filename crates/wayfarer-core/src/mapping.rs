//! Mood mapping registry: one immutable entry per [`MoodCategory`].

use crate::types::{Emotion, MoodCategory, ScoreRange};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Placeholder in rationale templates, replaced by the dominant emotion.
pub const EMOTION_PLACEHOLDER: &str = "{emotion}";

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MappingError {
    #[error("mood table has no entry for `{0}`")]
    MissingCategory(MoodCategory),
    #[error("mood table lists `{0}` more than once")]
    DuplicateCategory(MoodCategory),
    #[error("mood `{0}` has no recommended tags")]
    NoTags(MoodCategory),
    #[error("mood `{0}` has an empty recommended tag")]
    EmptyTag(MoodCategory),
}

/// Display label, score bands, recommended tags and rationale for one mood.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MoodMappingEntry {
    pub label: String,
    pub energy: ScoreRange,
    pub social: ScoreRange,
    pub adventure: ScoreRange,
    /// Display order only; matching ignores it.
    pub tags: Vec<String>,
    pub rationale: String,
}

impl MoodMappingEntry {
    /// Rationale text with `{emotion}` filled in.
    pub fn render_rationale(&self, dominant: Emotion) -> String {
        self.rationale.replace(EMOTION_PLACEHOLDER, dominant.as_str())
    }
}

/// Read-only table covering every mood category exactly once.
///
/// Lookup is total: construction guarantees all six entries exist.
#[derive(Debug, Clone, PartialEq)]
pub struct MoodMappingRegistry {
    // Indexed by `MoodCategory::index()`.
    entries: Vec<MoodMappingEntry>,
}

impl MoodMappingRegistry {
    /// Build a registry, checking coverage and tag lists.
    pub fn from_entries(
        entries: impl IntoIterator<Item = (MoodCategory, MoodMappingEntry)>,
    ) -> Result<Self, MappingError> {
        let mut slots: Vec<Option<MoodMappingEntry>> = vec![None; MoodCategory::ALL.len()];

        for (category, entry) in entries {
            if entry.tags.is_empty() {
                return Err(MappingError::NoTags(category));
            }
            if entry.tags.iter().any(|t| t.trim().is_empty()) {
                return Err(MappingError::EmptyTag(category));
            }
            let slot = &mut slots[category.index()];
            if slot.is_some() {
                return Err(MappingError::DuplicateCategory(category));
            }
            *slot = Some(entry);
        }

        let entries = MoodCategory::ALL
            .into_iter()
            .zip(slots)
            .map(|(category, slot)| slot.ok_or(MappingError::MissingCategory(category)))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self { entries })
    }

    /// The literal six-entry table shipped with the engine.
    pub fn builtin() -> Self {
        Self {
            entries: MoodCategory::ALL.into_iter().map(builtin_entry).collect(),
        }
    }

    pub fn lookup(&self, category: MoodCategory) -> &MoodMappingEntry {
        &self.entries[category.index()]
    }

    /// Entries in decision-tree order.
    pub fn iter(&self) -> impl Iterator<Item = (MoodCategory, &MoodMappingEntry)> {
        MoodCategory::ALL.into_iter().zip(self.entries.iter())
    }
}

impl Default for MoodMappingRegistry {
    fn default() -> Self {
        Self::builtin()
    }
}

struct BuiltinMood {
    category: MoodCategory,
    label: &'static str,
    energy: (u8, u8),
    social: (u8, u8),
    adventure: (u8, u8),
    tags: &'static [&'static str],
    rationale: &'static str,
}

// Same order as `MoodCategory::ALL`.
const BUILTIN: [BuiltinMood; 6] = [
    BuiltinMood {
        category: MoodCategory::HappyExcited,
        label: "Happy & Excited",
        energy: (7, 10),
        social: (6, 10),
        adventure: (6, 10),
        tags: &["beach", "nightlife", "festival", "theme park", "island"],
        rationale: "Your {emotion} expression is bright and lively, so these picks are vibrant \
                    places with plenty to celebrate.",
    },
    BuiltinMood {
        category: MoodCategory::CalmPeaceful,
        label: "Calm & Peaceful",
        energy: (1, 4),
        social: (1, 5),
        adventure: (1, 4),
        tags: &["spa", "lake", "countryside", "retreat", "garden"],
        rationale: "You look relaxed and {emotion}. Slow, quiet places will keep that calm going.",
    },
    BuiltinMood {
        category: MoodCategory::CuriousExplorative,
        label: "Curious & Explorative",
        energy: (4, 7),
        social: (3, 7),
        adventure: (5, 9),
        tags: &["museum", "heritage", "old town", "market", "culture"],
        rationale: "A hint of surprise under a {emotion} face reads as curiosity. These places \
                    reward wandering and discovery.",
    },
    BuiltinMood {
        category: MoodCategory::Energetic,
        label: "Energetic",
        energy: (7, 10),
        social: (5, 9),
        adventure: (7, 10),
        tags: &["hiking", "trek", "surf", "safari", "mountain"],
        rationale: "Plenty of {emotion} energy with little tension: time for something active \
                    outdoors.",
    },
    BuiltinMood {
        category: MoodCategory::ReflectiveThoughtful,
        label: "Reflective & Thoughtful",
        energy: (1, 5),
        social: (1, 4),
        adventure: (2, 6),
        tags: &["temple", "monastery", "library", "coast", "forest"],
        rationale: "Your {emotion} expression suggests a thoughtful frame of mind. These places \
                    leave room to think.",
    },
    BuiltinMood {
        category: MoodCategory::NeutralBalanced,
        label: "Neutral & Balanced",
        energy: (3, 7),
        social: (3, 7),
        adventure: (3, 7),
        tags: &["city", "food", "park", "culture"],
        rationale: "Your mood reads as balanced, led by {emotion}. A well-rounded city break fits.",
    },
];

fn builtin_entry(category: MoodCategory) -> MoodMappingEntry {
    let m = &BUILTIN[category.index()];
    debug_assert_eq!(m.category, category);
    MoodMappingEntry {
        label: m.label.to_string(),
        energy: ScoreRange::literal(m.energy.0, m.energy.1),
        social: ScoreRange::literal(m.social.0, m.social.1),
        adventure: ScoreRange::literal(m.adventure.0, m.adventure.1),
        tags: m.tags.iter().map(|t| t.to_string()).collect(),
        rationale: m.rationale.to_string(),
    }
}
