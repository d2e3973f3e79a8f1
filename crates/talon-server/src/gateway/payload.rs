//! Request/response DTOs for the gateway.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use talon::RankedMatch;

/// Body of `POST /recommend`.
#[derive(Debug, Deserialize)]
pub struct RecommendRequest {
    /// Free-text job description to match against the corpus.
    pub job_description: String,
    /// Number of candidates to return (server default when omitted).
    #[serde(default)]
    pub top_k: Option<usize>,
}

/// Body of `POST /recommend/weighted`.
#[derive(Debug, Deserialize)]
pub struct WeightedRecommendRequest {
    /// Free-text job description to match against the corpus.
    pub job_description: String,
    /// Number of candidates to return (server default when omitted).
    #[serde(default)]
    pub top_k: Option<usize>,
    /// Per-field boost weights (`location`, `skills`, `bio`, `name`).
    #[serde(default)]
    pub weights: HashMap<String, f32>,
}

/// Body of ranking responses.
#[derive(Debug, Serialize)]
pub struct RecommendResponse {
    /// Strategy that produced the scores.
    pub strategy: &'static str,
    /// Effective `top_k`.
    pub top_k: usize,
    /// Ranked candidates, best first.
    pub results: Vec<RankedMatch>,
}

/// Body of `POST /chat`.
#[derive(Debug, Deserialize)]
pub struct ChatRequest {
    /// User message.
    pub message: String,
    /// Session to continue; a new session is created when omitted.
    #[serde(default)]
    pub session_id: Option<Uuid>,
}

/// Body of chat responses.
#[derive(Debug, Serialize)]
pub struct ChatResponse {
    /// Assistant reply.
    pub message: String,
    /// Candidates retrieved for this turn.
    pub candidates: Vec<RankedMatch>,
    /// `false` only for internal orchestration faults.
    pub success: bool,
    /// Session id to pass back on the next turn.
    pub session_id: Uuid,
}

/// Body of `GET /health`.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// Always `"healthy"` when the process is serving.
    pub status: &'static str,
    /// Number of candidate profiles available for ranking.
    pub talent_profiles_loaded: usize,
    /// `true` once a non-empty corpus is loaded.
    pub embeddings_ready: bool,
}
