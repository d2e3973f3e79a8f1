//! Talon library crate (used by the server and integration tests).
//!
//! Talon matches free-text job requirements against a fixed pool of candidate
//! profiles using vector-embedding semantic similarity, and layers a
//! conversational assistant on top of the retrieval results.
//!
//! # Public API Surface
//!
//! ## Core Types (Stable)
//! - [`Config`], [`ConfigError`] - Environment-backed configuration
//! - [`EmbeddingCache`] - Durable text-to-vector memoization
//! - [`Corpus`], [`CandidateRecord`], [`RawProfile`] - Candidate corpus
//! - [`MatchEngine`], [`RankedMatch`], [`CorpusStatus`] - Operations exposed
//!   to the service layer
//!
//! ## Retrieval & Ranking
//! - [`rank`], [`RankQuery`], [`RankedCandidate`], [`Strategy`],
//!   [`FieldWeights`] - Cosine top-k with pluggable scoring strategies
//!
//! ## Conversation
//! - [`ChatOrchestrator`], [`ChatOutcome`], [`ConversationState`] - The chat
//!   pipeline (intent analysis, retrieval, synthesis, fallback)
//! - [`IntentAnalyzer`], [`QueryIntent`] - Requirement classification
//! - [`ResponseSynthesizer`], [`SynthesizedReply`] - Reply generation
//!
//! ## Provider
//! - [`TextProvider`], [`GenaiProvider`], [`ProviderError`] - The external
//!   embedding/completion capability boundary
//!
//! ## Test/Mock Support
//! Mock implementations are available behind `#[cfg(any(test, feature = "mock"))]`.

pub mod cache;
pub mod chat;
pub mod config;
pub mod corpus;
pub mod engine;
pub mod hashing;
pub mod intent;
pub mod provider;
pub mod ranking;
pub mod storage;
pub mod synthesis;

pub use cache::{EmbeddingCache, EmbeddingCacheError};
pub use chat::{ChatOrchestrator, ChatOutcome, ChatTurn, ConversationState};
pub use config::{Config, ConfigError};
pub use corpus::{CandidateRecord, Corpus, CorpusError, RawProfile, load_raw_profiles};
pub use engine::{CorpusStatus, EngineError, MatchEngine, RankedMatch};
pub use hashing::hash_text;
pub use intent::{
    CompanyCulture, ExperienceLevel, IntentAnalyzer, LocationPreference, QueryIntent, RoleCategory,
    Urgency, WorkArrangement,
};
pub use provider::{GenaiProvider, ProviderError, ProviderResult, TextProvider};
#[cfg(any(test, feature = "mock"))]
pub use provider::MockTextProvider;
pub use ranking::{
    FieldWeights, RankQuery, RankedCandidate, RankingError, RankingResult, Strategy,
    cosine_similarity, rank,
};
pub use storage::StorageError;
pub use synthesis::{NO_MATCH_REPLY, ReplySource, ResponseSynthesizer, SynthesizedReply};
