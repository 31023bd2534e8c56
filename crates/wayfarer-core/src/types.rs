use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// One of the seven facial-expression channels reported per face.
///
/// Declaration order is the canonical field order used for tie-breaks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Emotion {
    Happy,
    Sad,
    Angry,
    Surprised,
    Neutral,
    Fear,
    Disgust,
}

impl Emotion {
    pub const ALL: [Emotion; 7] = [
        Emotion::Happy,
        Emotion::Sad,
        Emotion::Angry,
        Emotion::Surprised,
        Emotion::Neutral,
        Emotion::Fear,
        Emotion::Disgust,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Emotion::Happy => "happy",
            Emotion::Sad => "sad",
            Emotion::Angry => "angry",
            Emotion::Surprised => "surprised",
            Emotion::Neutral => "neutral",
            Emotion::Fear => "fear",
            Emotion::Disgust => "disgust",
        }
    }
}

impl fmt::Display for Emotion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ValidationError {
    #[error("emotion `{field}` = {value} is outside [0, 1]")]
    OutOfRange { field: Emotion, value: f64 },
    #[error("emotion `{0}` is missing")]
    MissingField(Emotion),
}

/// Per-face expression intensities, each expected in `[0, 1]`.
///
/// Fields are not normalized and need not sum to 1.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct EmotionVector {
    pub happy: f64,
    pub sad: f64,
    pub angry: f64,
    pub surprised: f64,
    pub neutral: f64,
    pub fear: f64,
    pub disgust: f64,
}

impl EmotionVector {
    /// Fallback used when no face was detected.
    pub const NEUTRAL: EmotionVector = EmotionVector {
        happy: 0.0,
        sad: 0.0,
        angry: 0.0,
        surprised: 0.0,
        neutral: 1.0,
        fear: 0.0,
        disgust: 0.0,
    };

    pub fn get(&self, emotion: Emotion) -> f64 {
        match emotion {
            Emotion::Happy => self.happy,
            Emotion::Sad => self.sad,
            Emotion::Angry => self.angry,
            Emotion::Surprised => self.surprised,
            Emotion::Neutral => self.neutral,
            Emotion::Fear => self.fear,
            Emotion::Disgust => self.disgust,
        }
    }

    /// Values in [`Emotion::ALL`] order.
    pub fn to_array(&self) -> [f64; 7] {
        Emotion::ALL.map(|e| self.get(e))
    }

    pub fn from_array(values: [f64; 7]) -> Self {
        let [happy, sad, angry, surprised, neutral, fear, disgust] = values;
        Self {
            happy,
            sad,
            angry,
            surprised,
            neutral,
            fear,
            disgust,
        }
    }

    /// Build a new vector by applying `f` to every field.
    pub fn map(&self, f: impl Fn(f64) -> f64) -> Self {
        Self::from_array(self.to_array().map(f))
    }

    /// Build a new vector by applying `f` to every field pair of `self` and `other`.
    pub fn zip_with(&self, other: &EmotionVector, f: impl Fn(f64, f64) -> f64) -> Self {
        let a = self.to_array();
        let b = other.to_array();
        Self::from_array(std::array::from_fn(|i| f(a[i], b[i])))
    }

    /// Strongest channel; the earliest field wins ties.
    pub fn dominant(&self) -> Emotion {
        let mut best = Emotion::Happy;
        for emotion in Emotion::ALL {
            if self.get(emotion) > self.get(best) {
                best = emotion;
            }
        }
        best
    }

    /// Reject any channel outside `[0, 1]`, including NaN and infinities.
    ///
    /// Values are never clamped; the first offending field is reported.
    pub fn validate(&self) -> Result<(), ValidationError> {
        for emotion in Emotion::ALL {
            let value = self.get(emotion);
            if !(0.0..=1.0).contains(&value) {
                return Err(ValidationError::OutOfRange {
                    field: emotion,
                    value,
                });
            }
        }
        Ok(())
    }
}

/// Wire form of an emotion vector as produced by the expression model.
///
/// Every field is optional so a missing channel can be reported instead of
/// silently defaulting to zero. Unknown keys are rejected.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct EmotionReading {
    pub happy: Option<f64>,
    pub sad: Option<f64>,
    pub angry: Option<f64>,
    pub surprised: Option<f64>,
    pub neutral: Option<f64>,
    pub fear: Option<f64>,
    pub disgust: Option<f64>,
}

impl EmotionReading {
    fn get(&self, emotion: Emotion) -> Option<f64> {
        match emotion {
            Emotion::Happy => self.happy,
            Emotion::Sad => self.sad,
            Emotion::Angry => self.angry,
            Emotion::Surprised => self.surprised,
            Emotion::Neutral => self.neutral,
            Emotion::Fear => self.fear,
            Emotion::Disgust => self.disgust,
        }
    }
}

impl TryFrom<EmotionReading> for EmotionVector {
    type Error = ValidationError;

    fn try_from(reading: EmotionReading) -> Result<Self, Self::Error> {
        let mut values = [0.0f64; 7];
        for (slot, emotion) in values.iter_mut().zip(Emotion::ALL) {
            *slot = reading
                .get(emotion)
                .ok_or(ValidationError::MissingField(emotion))?;
        }
        let vector = EmotionVector::from_array(values);
        vector.validate()?;
        Ok(vector)
    }
}

/// Travel mood assigned to a fused emotion vector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MoodCategory {
    HappyExcited,
    CalmPeaceful,
    CuriousExplorative,
    Energetic,
    ReflectiveThoughtful,
    NeutralBalanced,
}

impl MoodCategory {
    pub const ALL: [MoodCategory; 6] = [
        MoodCategory::HappyExcited,
        MoodCategory::CalmPeaceful,
        MoodCategory::CuriousExplorative,
        MoodCategory::Energetic,
        MoodCategory::ReflectiveThoughtful,
        MoodCategory::NeutralBalanced,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            MoodCategory::HappyExcited => "happy_excited",
            MoodCategory::CalmPeaceful => "calm_peaceful",
            MoodCategory::CuriousExplorative => "curious_explorative",
            MoodCategory::Energetic => "energetic",
            MoodCategory::ReflectiveThoughtful => "reflective_thoughtful",
            MoodCategory::NeutralBalanced => "neutral_balanced",
        }
    }

    /// Position in [`MoodCategory::ALL`].
    pub(crate) fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for MoodCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown mood category: {0}")]
pub struct UnknownCategory(pub String);

impl FromStr for MoodCategory {
    type Err = UnknownCategory;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        MoodCategory::ALL
            .into_iter()
            .find(|c| c.as_str() == s)
            .ok_or_else(|| UnknownCategory(s.to_string()))
    }
}

pub const SCORE_MIN: u8 = 1;
pub const SCORE_MAX: u8 = 10;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("invalid score range [{low}, {high}]: bounds must satisfy 1 <= low <= high <= 10")]
pub struct RangeError {
    pub low: u8,
    pub high: u8,
}

/// Inclusive `[low, high]` band on the 1–10 score scale.
///
/// Serialized as a two-element array.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "[u8; 2]", into = "[u8; 2]")]
pub struct ScoreRange {
    low: u8,
    high: u8,
}

impl ScoreRange {
    pub fn new(low: u8, high: u8) -> Result<Self, RangeError> {
        if low < SCORE_MIN || high > SCORE_MAX || low > high {
            return Err(RangeError { low, high });
        }
        Ok(Self { low, high })
    }

    /// For literal tables whose bounds are known to be valid.
    pub(crate) const fn literal(low: u8, high: u8) -> Self {
        Self { low, high }
    }

    pub fn low(&self) -> u8 {
        self.low
    }

    pub fn high(&self) -> u8 {
        self.high
    }

    pub fn contains(&self, score: u8) -> bool {
        self.low <= score && score <= self.high
    }
}

impl TryFrom<[u8; 2]> for ScoreRange {
    type Error = RangeError;

    fn try_from([low, high]: [u8; 2]) -> Result<Self, Self::Error> {
        ScoreRange::new(low, high)
    }
}

impl From<ScoreRange> for [u8; 2] {
    fn from(range: ScoreRange) -> Self {
        [range.low, range.high]
    }
}

/// Secondary scores derived from one fused emotion vector.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DerivedScores {
    pub energy: u8,
    pub social: u8,
    pub adventure: u8,
    /// Rounded to two decimals, in `[0, 1]`.
    pub confidence: f64,
}

/// A catalog entry describing which traveler profiles a place suits.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Destination {
    pub id: String,
    pub title: String,
    pub tags: Vec<String>,
    pub energy: ScoreRange,
    pub social: ScoreRange,
    pub adventure: ScoreRange,
}

impl Destination {
    /// True if all three scores fall inside this destination's ranges.
    pub fn suits(&self, scores: &DerivedScores) -> bool {
        self.energy.contains(scores.energy)
            && self.social.contains(scores.social)
            && self.adventure.contains(scores.adventure)
    }
}
