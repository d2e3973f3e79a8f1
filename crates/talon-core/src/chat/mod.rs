//! Chat orchestration.
//!
//! Sequences retrieval → intent analysis → response synthesis into a single
//! request/response unit. The orchestrator is the only component allowed to
//! swallow a failure into a degraded-but-valid response; everything below it
//! surfaces failures explicitly.

mod session;


pub use session::{ChatTurn, ConversationState};

use std::sync::Arc;

use tracing::{error, instrument, warn};

use crate::cache::EmbeddingCache;
use crate::corpus::Corpus;
use crate::engine::RankedMatch;
use crate::intent::IntentAnalyzer;
use crate::provider::TextProvider;
use crate::ranking::{RankQuery, RankedCandidate, RankingResult, Strategy, rank};
use crate::synthesis::ResponseSynthesizer;

/// Reply when orchestration itself faulted (not a provider failure, which is
/// absorbed into a degraded response instead).
pub const INTERNAL_FAULT_REPLY: &str =
    "I'm sorry, I encountered an error processing your request. Please try again.";

/// Result of one chat turn.
#[derive(Debug, Clone)]
pub struct ChatOutcome {
    /// Assistant reply text.
    pub reply: String,
    /// Candidates retrieved for this turn (empty when retrieval degraded).
    pub candidates: Vec<RankedMatch>,
    /// `false` only for unexpected orchestration-level faults.
    pub success: bool,
}

/// Sequences the chat pipeline over a caller-owned session.
pub struct ChatOrchestrator<P: TextProvider> {
    cache: Arc<EmbeddingCache<P>>,
    corpus: Arc<Corpus>,
    analyzer: IntentAnalyzer<P>,
    synthesizer: ResponseSynthesizer<P>,
    chat_top_k: usize,
}

impl<P: TextProvider> std::fmt::Debug for ChatOrchestrator<P> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ChatOrchestrator")
            .field("corpus_len", &self.corpus.len())
            .field("chat_top_k", &self.chat_top_k)
            .finish_non_exhaustive()
    }
}

impl<P: TextProvider> ChatOrchestrator<P> {
    /// Creates an orchestrator over shared engine components.
    pub fn new(
        provider: Arc<P>,
        cache: Arc<EmbeddingCache<P>>,
        corpus: Arc<Corpus>,
        chat_top_k: usize,
    ) -> Self {
        Self {
            cache,
            corpus,
            analyzer: IntentAnalyzer::new(Arc::clone(&provider)),
            synthesizer: ResponseSynthesizer::new(provider),
            chat_top_k,
        }
    }

    /// Handles one user message against `session`.
    ///
    /// Embedding failures degrade to an empty candidate list; analysis and
    /// synthesis cannot fail. Only an unexpected internal fault (for example
    /// a corpus/ranker configuration error) yields `success = false` with a
    /// generic apology.
    #[instrument(skip(self, session, text), fields(text_len = text.len(), turns = session.len()))]
    pub async fn handle(&self, session: &mut ConversationState, text: &str) -> ChatOutcome {
        let ranked = match self.retrieve(text).await {
            Ok(ranked) => ranked,
            Err(e) => {
                error!(error = %e, "Chat retrieval faulted");
                return ChatOutcome {
                    reply: INTERNAL_FAULT_REPLY.to_string(),
                    candidates: Vec::new(),
                    success: false,
                };
            }
        };

        let intent = self.analyzer.analyze(text).await;

        let reply = self.synthesizer.synthesize(text, &intent, &ranked).await;

        session.push(text, &reply.text);

        ChatOutcome {
            reply: reply.text,
            candidates: ranked.into_iter().map(RankedMatch::from).collect(),
            success: true,
        }
    }

    /// Retrieves top candidates for `text`, degrading embedding failures to
    /// an empty list. Ranker errors propagate: with a basic strategy and a
    /// validated corpus they can only indicate an internal misconfiguration.
    async fn retrieve(&self, text: &str) -> RankingResult<Vec<RankedCandidate>> {
        let vector = match self.cache.get_or_compute(text).await {
            Ok(vector) => vector,
            Err(e) => {
                warn!(error = %e, "Query embedding unavailable, continuing without candidates");
                return Ok(Vec::new());
            }
        };

        let query = RankQuery::new(text, (*vector).clone());
        rank(&query, &self.corpus, self.chat_top_k, &Strategy::Basic)
    }
}
