//! Closed-form secondary scores derived from a fused emotion vector.
//!
//! Energy, social and adventure are clamped to `[1, 10]` and rounded to the
//! nearest integer. Confidence is clamped to `[0, 1]` and rounded to two decimals.

use crate::types::{DerivedScores, EmotionVector, SCORE_MAX, SCORE_MIN};

/// Happiness and surprise raise energy; sadness dampens it.
pub fn energy(v: &EmotionVector) -> u8 {
    let raw = (v.happy + v.surprised * 0.8 - (v.sad * 0.5).max(0.0)) * 10.0;
    to_score(raw)
}

pub fn social(v: &EmotionVector) -> u8 {
    let raw = (v.happy * 8.0 + v.neutral * 2.0) * 10.0;
    to_score(raw)
}

/// Fear strictly reduces adventure and can push the raw value negative.
pub fn adventure(v: &EmotionVector) -> u8 {
    let raw = (v.happy + v.surprised * 0.8 - v.fear * 0.5) * 10.0;
    to_score(raw)
}

/// Mean of the three strongest channels.
///
/// Channels are sorted with a stable sort, so equal values keep field order.
/// Ties only decide which field is counted, never the sum.
pub fn confidence(v: &EmotionVector) -> f64 {
    let mut values = v.to_array();
    values.sort_by(|a, b| b.total_cmp(a));
    let top3: f64 = values.iter().take(3).sum();
    round2((top3 / 3.0).clamp(0.0, 1.0))
}

pub fn derive_scores(v: &EmotionVector) -> DerivedScores {
    DerivedScores {
        energy: energy(v),
        social: social(v),
        adventure: adventure(v),
        confidence: confidence(v),
    }
}

fn to_score(raw: f64) -> u8 {
    // NaN cannot reach here from validated input; treat it as the floor.
    if raw.is_nan() {
        return SCORE_MIN;
    }
    raw.clamp(SCORE_MIN as f64, SCORE_MAX as f64).round() as u8
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
