//! Multi-face fusion into a single representative emotion vector.

use crate::types::EmotionVector;
use thiserror::Error;

/// Weight of the primary subject when several faces are present.
pub const PRIMARY_WEIGHT: f64 = 0.6;
/// Weight of the mean of all other faces.
pub const OTHERS_WEIGHT: f64 = 0.4;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("primary index {index} is out of range for {len} detected faces")]
pub struct PrimaryIndexError {
    pub index: usize,
    pub len: usize,
}

/// Combine per-face vectors into one.
///
/// - no faces: [`EmotionVector::NEUTRAL`] (no-face fallback, not an error)
/// - one face: returned unchanged
/// - several: `primary * 0.6 + mean(others) * 0.4`, field by field
///
/// `primary_index` is checked before any blending, including the single-face case.
pub fn fuse(
    vectors: &[EmotionVector],
    primary_index: usize,
) -> Result<EmotionVector, PrimaryIndexError> {
    if vectors.is_empty() {
        tracing::debug!("no faces supplied; using neutral fallback");
        return Ok(EmotionVector::NEUTRAL);
    }

    let primary = vectors.get(primary_index).ok_or(PrimaryIndexError {
        index: primary_index,
        len: vectors.len(),
    })?;

    if vectors.len() == 1 {
        return Ok(*primary);
    }

    let others = vectors
        .iter()
        .enumerate()
        .filter(|(i, _)| *i != primary_index)
        .map(|(_, v)| v);
    let others_mean = mean(others, vectors.len() - 1);

    tracing::debug!(faces = vectors.len(), primary_index, "fusing faces");

    Ok(weighted_combine(
        primary,
        PRIMARY_WEIGHT,
        &others_mean,
        OTHERS_WEIGHT,
    ))
}

/// `a * wa + b * wb`, applied uniformly to all seven fields.
pub fn weighted_combine(a: &EmotionVector, wa: f64, b: &EmotionVector, wb: f64) -> EmotionVector {
    a.zip_with(b, |x, y| x * wa + y * wb)
}

fn mean<'a>(vectors: impl Iterator<Item = &'a EmotionVector>, count: usize) -> EmotionVector {
    let sum = vectors.fold(EmotionVector::default(), |acc, v| acc.zip_with(v, |x, y| x + y));
    let n = count as f64;
    sum.map(|x| x / n)
}
