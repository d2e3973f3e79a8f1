use std::collections::HashMap;

use super::*;
use crate::corpus::{CandidateRecord, Corpus};

fn record(name: &str, skills: &str, embedding: Vec<f32>) -> CandidateRecord {
    CandidateRecord {
        name: name.to_string(),
        location: "Berlin, Germany".to_string(),
        skills: skills.to_string(),
        bio: format!("{} has experience in {}", name, skills),
        embedding,
    }
}

fn two_candidate_corpus() -> Corpus {
    Corpus::from_records(
        2,
        vec![
            record("Alice", "video editing", vec![1.0, 0.0]),
            record("Bob", "ops", vec![0.0, 1.0]),
        ],
    )
    .unwrap()
}

fn query(text: &str, vector: Vec<f32>) -> RankQuery {
    RankQuery::new(text, vector)
}

#[test]
fn test_basic_top1_exact_match() {
    let corpus = two_candidate_corpus();
    let q = query("video editing", vec![1.0, 0.0]);

    let ranked = rank(&q, &corpus, 1, &Strategy::Basic).unwrap();

    assert_eq!(ranked.len(), 1);
    assert_eq!(ranked[0].record.name, "Alice");
    assert!((ranked[0].score - 1.0).abs() < f32::EPSILON);
    assert_eq!(ranked[0].rank, 1);
}

#[test]
fn test_result_length_is_min_k_corpus() {
    let corpus = two_candidate_corpus();
    let q = query("anything", vec![1.0, 0.0]);

    assert_eq!(rank(&q, &corpus, 1, &Strategy::Basic).unwrap().len(), 1);
    assert_eq!(rank(&q, &corpus, 2, &Strategy::Basic).unwrap().len(), 2);
    assert_eq!(rank(&q, &corpus, 50, &Strategy::Basic).unwrap().len(), 2);
}

#[test]
fn test_sorted_descending_with_ranks() {
    let corpus = two_candidate_corpus();
    let q = query("mostly video", vec![0.9, 0.1]);

    let ranked = rank(&q, &corpus, 2, &Strategy::Basic).unwrap();

    assert_eq!(ranked[0].record.name, "Alice");
    assert_eq!(ranked[1].record.name, "Bob");
    assert!(ranked[0].score >= ranked[1].score);
    assert_eq!(ranked[0].rank, 1);
    assert_eq!(ranked[1].rank, 2);
}

#[test]
fn test_ties_resolved_by_corpus_order() {
    let corpus = Corpus::from_records(
        2,
        vec![
            record("First", "a", vec![1.0, 0.0]),
            record("Second", "b", vec![1.0, 0.0]),
        ],
    )
    .unwrap();
    let q = query("tie", vec![1.0, 0.0]);

    let ranked = rank(&q, &corpus, 2, &Strategy::Basic).unwrap();

    assert_eq!(ranked[0].record.name, "First");
    assert_eq!(ranked[1].record.name, "Second");
}

#[test]
fn test_determinism_across_calls() {
    let corpus = two_candidate_corpus();
    let q = query("video", vec![0.7, 0.3]);

    let first = rank(&q, &corpus, 2, &Strategy::Basic).unwrap();
    let second = rank(&q, &corpus, 2, &Strategy::Basic).unwrap();

    let names = |r: &[RankedCandidate]| {
        r.iter()
            .map(|c| (c.record.name.clone(), c.score, c.rank))
            .collect::<Vec<_>>()
    };
    assert_eq!(names(&first), names(&second));
}

#[test]
fn test_empty_corpus_yields_empty_result() {
    let corpus = Corpus::empty(2);
    let q = query("anything", vec![1.0, 0.0]);

    let ranked = rank(&q, &corpus, 5, &Strategy::Basic).unwrap();
    assert!(ranked.is_empty());
}

#[test]
fn test_zero_k_rejected() {
    let corpus = two_candidate_corpus();
    let q = query("anything", vec![1.0, 0.0]);

    assert_eq!(
        rank(&q, &corpus, 0, &Strategy::Basic),
        Err(RankingError::InvalidTopK)
    );
}

#[test]
fn test_dimension_mismatch_is_fatal() {
    let corpus = two_candidate_corpus();
    let q = query("anything", vec![1.0, 0.0, 0.0]);

    assert_eq!(
        rank(&q, &corpus, 1, &Strategy::Basic),
        Err(RankingError::DimensionMismatch {
            expected: 2,
            actual: 3
        })
    );
}

#[test]
fn test_unknown_strategy_rejected() {
    let result = Strategy::from_name("bogus", None);

    assert_eq!(
        result,
        Err(RankingError::UnknownStrategy {
            name: "bogus".to_string()
        })
    );
}

#[test]
fn test_weighted_with_empty_weights_equals_basic() {
    let corpus = two_candidate_corpus();
    let q = query("video editing", vec![0.8, 0.2]);

    let weighted = Strategy::from_name("weighted", Some(&HashMap::new())).unwrap();
    let basic_result = rank(&q, &corpus, 2, &Strategy::Basic).unwrap();
    let weighted_result = rank(&q, &corpus, 2, &weighted).unwrap();

    for (b, w) in basic_result.iter().zip(weighted_result.iter()) {
        assert_eq!(b.record.name, w.record.name);
        assert_eq!(b.score, w.score);
    }
}

#[test]
fn test_weighted_skills_boost_reorders() {
    // Bob is the closer cosine match, but the query tokens overlap Alice's
    // skills field and the boost flips the order.
    let corpus = Corpus::from_records(
        2,
        vec![
            record("Alice", "video editing", vec![0.6, 0.4]),
            record("Bob", "ops", vec![0.8, 0.2]),
        ],
    )
    .unwrap();
    let q = query("video editing", vec![1.0, 0.0]);

    let basic = rank(&q, &corpus, 2, &Strategy::Basic).unwrap();
    assert_eq!(basic[0].record.name, "Bob");

    let weights = HashMap::from([("skills".to_string(), 1.0_f32)]);
    let weighted = Strategy::from_name("weighted", Some(&weights)).unwrap();
    let boosted = rank(&q, &corpus, 2, &weighted).unwrap();

    assert_eq!(boosted[0].record.name, "Alice");
}

#[test]
fn test_weighted_boost_is_deterministic() {
    let corpus = two_candidate_corpus();
    let q = query("video editing in Berlin", vec![0.5, 0.5]);

    let weights = HashMap::from([
        ("skills".to_string(), 0.5_f32),
        ("location".to_string(), 0.3_f32),
    ]);
    let strategy = Strategy::from_name("weighted", Some(&weights)).unwrap();

    let first = rank(&q, &corpus, 2, &strategy).unwrap();
    let second = rank(&q, &corpus, 2, &strategy).unwrap();

    assert_eq!(first[0].score, second[0].score);
    assert_eq!(first[1].score, second[1].score);
}

#[test]
fn test_unknown_weight_field_rejected() {
    let weights = HashMap::from([("charisma".to_string(), 0.9_f32)]);

    let result = Strategy::from_name("weighted", Some(&weights));
    assert_eq!(
        result,
        Err(RankingError::UnknownWeightField {
            field: "charisma".to_string()
        })
    );
}

#[test]
fn test_weights_clamped_to_unit_interval() {
    let weights = HashMap::from([("skills".to_string(), 7.5_f32)]);

    let strategy = Strategy::from_name("weighted", Some(&weights)).unwrap();
    match strategy {
        Strategy::Weighted(w) => assert_eq!(w.skills, 1.0),
        other => panic!("expected weighted strategy, got {:?}", other),
    }
}

#[test]
fn test_strategy_names() {
    assert_eq!(Strategy::Basic.name(), "basic");
    assert_eq!(
        Strategy::Weighted(FieldWeights::default()).name(),
        "weighted"
    );
}

#[test]
fn test_cosine_similarity_reference_values() {
    assert!((cosine_similarity(&[1.0, 0.0], &[1.0, 0.0]) - 1.0).abs() < f32::EPSILON);
    assert!((cosine_similarity(&[1.0, 0.0], &[0.0, 1.0])).abs() < f32::EPSILON);
    assert!((cosine_similarity(&[1.0, 0.0], &[-1.0, 0.0]) + 1.0).abs() < f32::EPSILON);
}

#[test]
fn test_cosine_similarity_degenerate_inputs() {
    assert_eq!(cosine_similarity(&[], &[]), 0.0);
    assert_eq!(cosine_similarity(&[1.0], &[1.0, 2.0]), 0.0);
    assert_eq!(cosine_similarity(&[0.0, 0.0], &[1.0, 1.0]), 0.0);
}

#[test]
fn test_tokenize_dedups_and_lowercases() {
    let tokens = tokenize("Video editing, video EDITING in Berlin!");

    assert_eq!(tokens, vec!["video", "editing", "in", "berlin"]);
}

#[test]
fn test_tokenize_empty_text() {
    assert!(tokenize("").is_empty());
    assert!(tokenize("  ,.;! ").is_empty());
}
