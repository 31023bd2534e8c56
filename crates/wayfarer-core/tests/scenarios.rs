//! End-to-end scenarios and properties of the analysis engine.

use proptest::prelude::*;
use wayfarer_core::classifier::classify;
use wayfarer_core::scores::{adventure, confidence, derive_scores, energy, social};
use wayfarer_core::{
    fuse, DerivedScores, Destination, DestinationMatcher, EmotionVector, MoodCategory, MoodEngine,
    ScoreRange, TagOverlapMatcher,
};

fn destination(id: &str, tags: &[&str], ranges: [(u8, u8); 3]) -> Destination {
    let r = |(lo, hi): (u8, u8)| ScoreRange::new(lo, hi).unwrap();
    Destination {
        id: id.to_string(),
        title: id.to_string(),
        tags: tags.iter().map(|t| t.to_string()).collect(),
        energy: r(ranges[0]),
        social: r(ranges[1]),
        adventure: r(ranges[2]),
    }
}

#[test]
fn scenario_joyful_face() {
    let v = EmotionVector { happy: 0.9, surprised: 0.5, neutral: 0.1, ..Default::default() };
    assert_eq!(classify(&v), MoodCategory::HappyExcited);
    assert_eq!(energy(&v), 10);
    assert_eq!(social(&v), 10);
    assert_eq!(adventure(&v), 10);
}

#[test]
fn scenario_calm_face() {
    let v = EmotionVector { happy: 0.1, neutral: 0.8, ..Default::default() };
    assert_eq!(classify(&v), MoodCategory::CalmPeaceful);
}

#[test]
fn scenario_disgust_falls_through() {
    let v = EmotionVector { disgust: 1.0, ..Default::default() };
    assert_eq!(classify(&v), MoodCategory::NeutralBalanced);
}

#[test]
fn scenario_two_face_fusion() {
    let a = EmotionVector { happy: 1.0, ..Default::default() };
    let b = EmotionVector { neutral: 1.0, ..Default::default() };
    let fused = fuse(&[a, b], 0).unwrap();
    assert!((fused.happy - 0.6).abs() < 1e-12);
    assert!((fused.neutral - 0.4).abs() < 1e-12);
}

#[test]
fn scenario_beach_tag_match() {
    let catalog = vec![
        destination("resort", &["beach resort"], [(1, 10), (1, 10), (1, 10)]),
        destination("trek", &["mountain trek"], [(1, 10), (1, 10), (1, 10)]),
    ];
    let scores = DerivedScores { energy: 5, social: 5, adventure: 5, confidence: 0.0 };
    let found = TagOverlapMatcher.shortlist(&scores, &["beach".to_string()], &catalog, 3);
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].id, "resort");
}

#[test]
fn fusion_fallback_is_exact() {
    assert_eq!(
        fuse(&[], 0).unwrap(),
        EmotionVector {
            happy: 0.0,
            sad: 0.0,
            angry: 0.0,
            surprised: 0.0,
            neutral: 1.0,
            fear: 0.0,
            disgust: 0.0,
        }
    );
}

#[test]
fn engine_is_shareable_across_threads() {
    let engine = MoodEngine::default().with_catalog(vec![destination(
        "anywhere",
        &["city"],
        [(1, 10), (1, 10), (1, 10)],
    )]);
    let v = EmotionVector { happy: 0.4, sad: 0.2, neutral: 0.3, ..Default::default() };
    let expected = engine.analyze(&[v], 0).unwrap();

    let handles: Vec<_> = (0..4)
        .map(|_| {
            let engine = engine.clone();
            std::thread::spawn(move || engine.analyze(&[v], 0).unwrap())
        })
        .collect();
    for h in handles {
        assert_eq!(h.join().unwrap(), expected);
    }
}

fn unit() -> impl Strategy<Value = f64> {
    0.0f64..=1.0
}

fn emotion_vector() -> impl Strategy<Value = EmotionVector> {
    proptest::array::uniform7(unit()).prop_map(EmotionVector::from_array)
}

fn score_range() -> impl Strategy<Value = ScoreRange> {
    (1u8..=10, 1u8..=10).prop_map(|(a, b)| ScoreRange::new(a.min(b), a.max(b)).unwrap())
}

fn catalog_entry() -> impl Strategy<Value = Destination> {
    (
        "[a-z]{1,8}",
        proptest::collection::vec(
            proptest::sample::select(vec!["beach", "spa", "city", "mountain trek", "old town"]),
            0..3,
        ),
        score_range(),
        score_range(),
        score_range(),
    )
        .prop_map(|(id, tags, energy, social, adventure)| Destination {
            title: id.clone(),
            id,
            tags: tags.into_iter().map(String::from).collect(),
            energy,
            social,
            adventure,
        })
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 512,
        ..ProptestConfig::default()
    })]

    /// Property: derived scores always land inside their ranges.
    #[test]
    fn scores_stay_in_range(v in emotion_vector()) {
        let s = derive_scores(&v);
        for score in [s.energy, s.social, s.adventure] {
            prop_assert!((1..=10).contains(&score));
        }
        prop_assert!((0.0..=1.0).contains(&s.confidence));
        prop_assert_eq!(confidence(&v), s.confidence);
    }

    /// Property: classification and scoring are deterministic.
    #[test]
    fn analysis_is_deterministic(v in emotion_vector()) {
        prop_assert_eq!(classify(&v), classify(&v));
        prop_assert_eq!(derive_scores(&v), derive_scores(&v));
        let engine = MoodEngine::default();
        prop_assert_eq!(engine.analyze(&[v], 0).unwrap(), engine.analyze(&[v], 0).unwrap());
    }

    /// Property: classify is total over the valid domain.
    #[test]
    fn classifier_is_total(v in emotion_vector()) {
        prop_assert!(MoodCategory::ALL.contains(&classify(&v)));
    }

    /// Property: a single face is returned untouched.
    #[test]
    fn single_face_fusion_is_identity(v in emotion_vector()) {
        prop_assert_eq!(fuse(&[v], 0).unwrap(), v);
    }

    /// Property: fused fields stay within [0, 1] for valid input.
    #[test]
    fn fusion_preserves_unit_interval(
        faces in proptest::collection::vec(emotion_vector(), 2..6),
        pick in any::<proptest::sample::Index>(),
    ) {
        let primary = pick.index(faces.len());
        let fused = fuse(&faces, primary).unwrap();
        for value in fused.to_array() {
            prop_assert!((-1e-12..=1.0 + 1e-12).contains(&value));
        }
    }

    /// Property: shrinking the catalog never grows the shortlist, and the
    /// shortlist length is `min(limit, survivors)`.
    #[test]
    fn matcher_monotone_and_bounded(
        catalog in proptest::collection::vec(catalog_entry(), 0..12),
        drop in proptest::collection::vec(any::<bool>(), 12),
        energy in 1u8..=10,
        social in 1u8..=10,
        adventure in 1u8..=10,
        limit in 0usize..5,
    ) {
        let scores = DerivedScores { energy, social, adventure, confidence: 0.5 };
        let tags = vec!["beach".to_string(), "old town".to_string()];

        let full = TagOverlapMatcher.shortlist(&scores, &tags, &catalog, limit);
        let survivors = TagOverlapMatcher.shortlist(&scores, &tags, &catalog, usize::MAX).len();
        prop_assert_eq!(full.len(), limit.min(survivors));

        let reduced: Vec<Destination> = catalog
            .iter()
            .zip(&drop)
            .filter(|(_, d)| !**d)
            .map(|(c, _)| c.clone())
            .collect();
        let smaller = TagOverlapMatcher.shortlist(&scores, &tags, &reduced, limit);
        prop_assert!(smaller.len() <= full.len());
    }
}
