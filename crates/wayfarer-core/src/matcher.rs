//! Destination shortlisting by score ranges and tag relevance.

use crate::types::{DerivedScores, Destination};

/// Default shortlist length.
pub const DEFAULT_LIMIT: usize = 3;

/// Strategy for picking destinations that suit a set of derived scores.
pub trait DestinationMatcher {
    fn shortlist<'a>(
        &self,
        scores: &DerivedScores,
        tags: &[String],
        catalog: &'a [Destination],
        limit: usize,
    ) -> Vec<&'a Destination>;
}

/// Range containment, then case-insensitive substring tag overlap.
///
/// 1. Keep destinations whose energy, social and adventure ranges all contain
///    the corresponding score (inclusive).
/// 2. When `tags` is non-empty, also require tag overlap; a destination with no
///    overlapping tag is kept only if its title contains a recommended tag.
/// 3. Stable-sort survivors by the number of overlapping destination tags,
///    descending, so equal counts keep catalog order.
/// 4. Truncate to `limit`.
///
/// An empty result is a valid outcome, not an error.
pub struct TagOverlapMatcher;

impl DestinationMatcher for TagOverlapMatcher {
    fn shortlist<'a>(
        &self,
        scores: &DerivedScores,
        tags: &[String],
        catalog: &'a [Destination],
        limit: usize,
    ) -> Vec<&'a Destination> {
        let wanted: Vec<String> = tags.iter().map(|t| t.to_lowercase()).collect();

        let mut survivors: Vec<(&Destination, usize)> = catalog
            .iter()
            .filter(|d| d.suits(scores))
            .filter_map(|d| {
                let count = match_count(d, &wanted);
                if wanted.is_empty() || count > 0 || title_matches(d, &wanted) {
                    Some((d, count))
                } else {
                    None
                }
            })
            .collect();

        // `sort_by` is stable.
        survivors.sort_by(|a, b| b.1.cmp(&a.1));
        survivors.truncate(limit);

        tracing::debug!(
            catalog = catalog.len(),
            matched = survivors.len(),
            limit,
            "destination shortlist built"
        );

        survivors.into_iter().map(|(d, _)| d).collect()
    }
}

/// True if either string contains the other, ignoring case.
///
/// Both arguments must already be lowercase.
fn overlaps(a: &str, b: &str) -> bool {
    a.contains(b) || b.contains(a)
}

/// Number of destination tags that overlap any wanted tag.
fn match_count(destination: &Destination, wanted: &[String]) -> usize {
    destination
        .tags
        .iter()
        .map(|t| t.to_lowercase())
        .filter(|t| wanted.iter().any(|w| overlaps(t, w)))
        .count()
}

/// Title fallback: the title contains any wanted tag.
fn title_matches(destination: &Destination, wanted: &[String]) -> bool {
    let title = destination.title.to_lowercase();
    wanted.iter().any(|w| title.contains(w.as_str()))
}
