//! Ordered decision table mapping an emotion vector to a [`MoodCategory`].
//!
//! Rules are evaluated top to bottom and the first match wins. Several rules
//! overlap (e.g. `happy=0.7, surprised=0.4, neutral=0.5` satisfies both the
//! happy/excited and the energetic rule), so the order in [`RULES`] decides
//! the outcome and must not be rearranged.

use crate::types::{EmotionVector, MoodCategory};

/// Aggregates the rules are written against.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Signals {
    pub happy: f64,
    pub sad: f64,
    pub surprised: f64,
    /// The `neutral` channel.
    pub calm: f64,
    /// `sad + angry + fear + disgust`.
    pub negative: f64,
}

impl Signals {
    pub fn from_vector(v: &EmotionVector) -> Self {
        Self {
            happy: v.happy,
            sad: v.sad,
            surprised: v.surprised,
            calm: v.neutral,
            negative: v.sad + v.angry + v.fear + v.disgust,
        }
    }
}

/// One guard in the decision table.
pub struct MoodRule {
    pub category: MoodCategory,
    pub guard: fn(&Signals) -> bool,
    /// Human-readable form of `guard`, for logs and diagnostics.
    pub condition: &'static str,
}

/// Category assigned when no rule matches.
pub const FALLBACK: MoodCategory = MoodCategory::NeutralBalanced;

pub static RULES: [MoodRule; 5] = [
    MoodRule {
        category: MoodCategory::HappyExcited,
        guard: |s: &Signals| s.happy > 0.6 && s.surprised > 0.3,
        condition: "happy > 0.6 && surprised > 0.3",
    },
    MoodRule {
        category: MoodCategory::CalmPeaceful,
        guard: |s: &Signals| s.calm > 0.5 && s.happy < 0.2,
        condition: "calm > 0.5 && happy < 0.2",
    },
    MoodRule {
        category: MoodCategory::CuriousExplorative,
        guard: |s: &Signals| s.calm > 0.4 && s.surprised > 0.2 && s.happy < 0.4,
        condition: "calm > 0.4 && surprised > 0.2 && happy < 0.4",
    },
    MoodRule {
        category: MoodCategory::Energetic,
        guard: |s: &Signals| s.happy > 0.5 && s.calm > 0.2 && s.negative < 0.2,
        condition: "happy > 0.5 && calm > 0.2 && negative < 0.2",
    },
    MoodRule {
        category: MoodCategory::ReflectiveThoughtful,
        guard: |s: &Signals| (s.calm > 0.4 || s.sad > 0.3) && s.happy < 0.3 && s.surprised < 0.2,
        condition: "(calm > 0.4 || sad > 0.3) && happy < 0.3 && surprised < 0.2",
    },
];

/// Index into [`RULES`] of the first matching rule, or `None` for the fallback.
pub fn matching_rule(v: &EmotionVector) -> Option<usize> {
    let signals = Signals::from_vector(v);
    RULES.iter().position(|rule| (rule.guard)(&signals))
}

/// Classify a fused vector. Total over all inputs; never fails.
pub fn classify(v: &EmotionVector) -> MoodCategory {
    match matching_rule(v) {
        Some(idx) => {
            let rule = &RULES[idx];
            tracing::debug!(rule = idx, condition = rule.condition, category = %rule.category, "mood rule matched");
            rule.category
        }
        None => {
            tracing::debug!(category = %FALLBACK, "no mood rule matched; using fallback");
            FALLBACK
        }
    }
}
