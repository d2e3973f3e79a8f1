//! Operations exposed to the surrounding service layer.
//!
//! The HTTP gateway only ever calls through [`MatchEngine`]; everything else
//! in this crate is composition detail behind it.

pub mod error;

#[cfg(test)]
mod tests;

pub use error::{EngineError, EngineResult};

use std::collections::HashMap;
use std::sync::Arc;

use serde::Serialize;
use tracing::instrument;

use crate::cache::EmbeddingCache;
use crate::chat::{ChatOrchestrator, ChatOutcome, ConversationState};
use crate::corpus::Corpus;
use crate::provider::TextProvider;
use crate::ranking::{RankQuery, RankedCandidate, Strategy, rank};

/// One match as exposed over the service boundary.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RankedMatch {
    /// Candidate display name.
    pub name: String,
    /// Candidate location.
    pub location: String,
    /// Candidate skills.
    pub skills: String,
    /// Candidate biography.
    pub bio: String,
    /// Strategy-defined score.
    pub score: f32,
    /// 1-based rank.
    pub rank: usize,
}

impl From<RankedCandidate> for RankedMatch {
    fn from(candidate: RankedCandidate) -> Self {
        Self {
            name: candidate.record.name,
            location: candidate.record.location,
            skills: candidate.record.skills,
            bio: candidate.record.bio,
            score: candidate.score,
            rank: candidate.rank,
        }
    }
}

/// Corpus readiness as exposed over the service boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CorpusStatus {
    /// Number of candidates available for ranking.
    pub count: usize,
    /// `true` once a non-empty corpus is loaded.
    pub ready: bool,
}

/// Facade over cache, corpus, ranker, and chat pipeline.
pub struct MatchEngine<P: TextProvider> {
    cache: Arc<EmbeddingCache<P>>,
    corpus: Arc<Corpus>,
    orchestrator: ChatOrchestrator<P>,
}

impl<P: TextProvider> std::fmt::Debug for MatchEngine<P> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MatchEngine")
            .field("corpus_len", &self.corpus.len())
            .finish_non_exhaustive()
    }
}

impl<P: TextProvider> MatchEngine<P> {
    /// Assembles the engine from its shared parts.
    pub fn new(
        provider: Arc<P>,
        cache: Arc<EmbeddingCache<P>>,
        corpus: Arc<Corpus>,
        chat_top_k: usize,
    ) -> Self {
        let orchestrator = ChatOrchestrator::new(
            provider,
            Arc::clone(&cache),
            Arc::clone(&corpus),
            chat_top_k,
        );

        Self {
            cache,
            corpus,
            orchestrator,
        }
    }

    /// Ranks the corpus against a job description under a named strategy.
    ///
    /// Strategy resolution happens before any provider call, so an unknown
    /// strategy never costs an embedding.
    #[instrument(skip(self, job_description, weights), fields(top_k, strategy = strategy_name))]
    pub async fn rank_for_query(
        &self,
        job_description: &str,
        top_k: usize,
        strategy_name: &str,
        weights: Option<&HashMap<String, f32>>,
    ) -> EngineResult<Vec<RankedMatch>> {
        let strategy = Strategy::from_name(strategy_name, weights)?;

        let vector = self.cache.get_or_compute(job_description).await?;
        let query = RankQuery::new(job_description, (*vector).clone());

        let ranked = rank(&query, &self.corpus, top_k, &strategy)?;

        Ok(ranked.into_iter().map(RankedMatch::from).collect())
    }

    /// Handles one chat turn against a caller-owned session.
    pub async fn chat(&self, session: &mut ConversationState, text: &str) -> ChatOutcome {
        self.orchestrator.handle(session, text).await
    }

    /// Reports corpus size and readiness.
    pub fn corpus_status(&self) -> CorpusStatus {
        CorpusStatus {
            count: self.corpus.len(),
            ready: !self.corpus.is_empty(),
        }
    }
}
