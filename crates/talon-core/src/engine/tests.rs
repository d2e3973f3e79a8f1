use std::collections::HashMap;
use std::sync::Arc;

use super::*;
use crate::corpus::CandidateRecord;
use crate::provider::MockTextProvider;
use crate::ranking::RankingError;

const DIM: usize = 8;

fn engine_with(names: &[&str]) -> (Arc<MockTextProvider>, MatchEngine<MockTextProvider>) {
    let provider = Arc::new(MockTextProvider::new(DIM));
    let cache = Arc::new(EmbeddingCache::new(Arc::clone(&provider), DIM));

    let records: Vec<CandidateRecord> = names
        .iter()
        .map(|name| CandidateRecord {
            name: name.to_string(),
            location: "Lisbon, Portugal".to_string(),
            skills: "video editing".to_string(),
            bio: format!("{} edits videos", name),
            embedding: provider.embedding_for(&format!("{} profile", name)),
        })
        .collect();

    let corpus = Arc::new(Corpus::from_records(DIM, records).unwrap());
    let engine = MatchEngine::new(Arc::clone(&provider), cache, corpus, 5);

    (provider, engine)
}

#[tokio::test]
async fn test_rank_for_query_basic() {
    let (_provider, engine) = engine_with(&["Alice", "Bob", "Carol"]);

    let matches = engine
        .rank_for_query("video editor wanted", 2, "basic", None)
        .await
        .unwrap();

    assert_eq!(matches.len(), 2);
    assert_eq!(matches[0].rank, 1);
    assert_eq!(matches[1].rank, 2);
    assert!(matches[0].score >= matches[1].score);
}

#[tokio::test]
async fn test_rank_for_query_exact_self_match_wins() {
    let (_provider, engine) = engine_with(&["Alice", "Bob"]);

    // Query with Alice's exact corpus text: cosine of identical vectors is 1.
    let matches = engine
        .rank_for_query("Alice profile", 1, "basic", None)
        .await
        .unwrap();

    assert_eq!(matches[0].name, "Alice");
    assert!((matches[0].score - 1.0).abs() < 1e-6);
}

#[tokio::test]
async fn test_rank_for_query_unknown_strategy_costs_no_embedding() {
    let (provider, engine) = engine_with(&["Alice"]);

    let result = engine.rank_for_query("video editor", 5, "bogus", None).await;

    assert!(matches!(
        result,
        Err(EngineError::Ranking(RankingError::UnknownStrategy { .. }))
    ));
    assert_eq!(provider.embed_calls(), 0);
}

#[tokio::test]
async fn test_rank_for_query_empty_description_rejected() {
    let (provider, engine) = engine_with(&["Alice"]);

    let result = engine.rank_for_query("  ", 5, "basic", None).await;

    assert!(matches!(result, Err(EngineError::InvalidInput { .. })));
    assert_eq!(provider.embed_calls(), 0);
}

#[tokio::test]
async fn test_rank_for_query_provider_failure_surfaces() {
    let (provider, engine) = engine_with(&["Alice"]);
    provider.set_fail_embed(true);

    let result = engine.rank_for_query("video editor", 5, "basic", None).await;

    assert!(matches!(result, Err(EngineError::ProviderUnavailable(_))));
}

#[tokio::test]
async fn test_rank_for_query_weighted_with_weights() {
    let (_provider, engine) = engine_with(&["Alice", "Bob"]);
    let weights = HashMap::from([("skills".to_string(), 0.5_f32)]);

    let matches = engine
        .rank_for_query("video editing help", 2, "weighted", Some(&weights))
        .await
        .unwrap();

    assert_eq!(matches.len(), 2);
}

#[tokio::test]
async fn test_chat_round_trip_through_engine() {
    let (provider, engine) = engine_with(&["Alice"]);
    let mut session = crate::chat::ConversationState::default();

    provider.push_completion(r#"{"job_type": "video_editor"}"#);
    provider.push_completion("Alice is your best bet.");

    let outcome = engine.chat(&mut session, "need an editor").await;

    assert!(outcome.success);
    assert_eq!(outcome.reply, "Alice is your best bet.");
    assert_eq!(outcome.candidates.len(), 1);
    assert_eq!(session.len(), 1);
}

#[tokio::test]
async fn test_corpus_status() {
    let (_provider, engine) = engine_with(&["Alice", "Bob"]);
    let status = engine.corpus_status();
    assert_eq!(status.count, 2);
    assert!(status.ready);

    let provider = Arc::new(MockTextProvider::new(DIM));
    let cache = Arc::new(EmbeddingCache::new(Arc::clone(&provider), DIM));
    let empty = MatchEngine::new(provider, cache, Arc::new(Corpus::empty(DIM)), 5);
    let status = empty.corpus_status();
    assert_eq!(status.count, 0);
    assert!(!status.ready);
}

#[test]
fn test_ranked_match_projection() {
    let candidate = crate::ranking::RankedCandidate {
        record: CandidateRecord {
            name: "Alice".to_string(),
            location: "Lisbon".to_string(),
            skills: "editing".to_string(),
            bio: "bio".to_string(),
            embedding: vec![0.0; DIM],
        },
        score: 0.9,
        rank: 1,
    };

    let m = RankedMatch::from(candidate);
    assert_eq!(m.name, "Alice");
    assert_eq!(m.score, 0.9);
    assert_eq!(m.rank, 1);
}
