//! Similarity ranking (cosine top-k with pluggable scoring strategies).
//!
//! Results are deterministic: candidates are scored against the full corpus,
//! stable-sorted by descending score (ties keep original corpus order), and
//! truncated to `k`.

pub mod error;
mod strategy;

#[cfg(test)]
mod tests;

pub use error::{RankingError, RankingResult};
pub use strategy::{FieldWeights, STRATEGY_BASIC, STRATEGY_WEIGHTED, Strategy};

use std::cmp::Ordering;

use crate::corpus::{CandidateRecord, Corpus};

/// A query prepared for ranking: its embedding plus its lowercase token set
/// (used by the weighted strategy's field boosts; `basic` ignores it).
#[derive(Debug, Clone)]
pub struct RankQuery {
    /// Query embedding (dimensionality must match the corpus).
    pub vector: Vec<f32>,
    /// Deduplicated lowercase tokens of the query text, in first-seen order.
    pub terms: Vec<String>,
}

impl RankQuery {
    /// Prepares a query from its raw text and embedding.
    pub fn new(text: &str, vector: Vec<f32>) -> Self {
        Self {
            vector,
            terms: tokenize(text),
        }
    }
}

/// One ranked candidate (record clone + strategy score + 1-based rank).
#[derive(Debug, Clone, PartialEq)]
pub struct RankedCandidate {
    /// The matched record.
    pub record: CandidateRecord,
    /// Strategy-defined score (cosine similarity for `basic`).
    pub score: f32,
    /// 1-based position in the result list.
    pub rank: usize,
}

/// Ranks the corpus against `query` and returns the top `k` candidates.
///
/// An empty corpus yields an empty result, never an error. Dimensionality
/// mismatches are a fatal configuration error rather than a skippable record.
pub fn rank(
    query: &RankQuery,
    corpus: &Corpus,
    k: usize,
    strategy: &Strategy,
) -> RankingResult<Vec<RankedCandidate>> {
    if k == 0 {
        return Err(RankingError::InvalidTopK);
    }

    if corpus.is_empty() {
        return Ok(Vec::new());
    }

    if query.vector.len() != corpus.dim() {
        return Err(RankingError::DimensionMismatch {
            expected: corpus.dim(),
            actual: query.vector.len(),
        });
    }

    let mut scored: Vec<(usize, f32)> = Vec::with_capacity(corpus.len());
    for (index, record) in corpus.all().iter().enumerate() {
        if record.embedding.len() != corpus.dim() {
            return Err(RankingError::DimensionMismatch {
                expected: corpus.dim(),
                actual: record.embedding.len(),
            });
        }

        let base = cosine_similarity(&query.vector, &record.embedding);
        scored.push((index, strategy.score(base, query, record)));
    }

    // Stable sort keeps corpus order for equal scores.
    scored.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(Ordering::Equal));
    scored.truncate(k);

    Ok(scored
        .into_iter()
        .enumerate()
        .map(|(position, (index, score))| RankedCandidate {
            record: corpus.all()[index].clone(),
            score,
            rank: position + 1,
        })
        .collect())
}

/// Cosine similarity between two equal-length vectors, in [-1, 1].
///
/// Mismatched lengths and zero-norm inputs score `0.0`.
pub fn cosine_similarity(a: &[f32], b: &[f32]) -> f32 {
    if a.len() != b.len() || a.is_empty() {
        return 0.0;
    }

    let dot_product: f32 = a.iter().zip(b.iter()).map(|(x, y)| x * y).sum();
    let norm_a: f32 = a.iter().map(|x| x * x).sum::<f32>().sqrt();
    let norm_b: f32 = b.iter().map(|x| x * x).sum::<f32>().sqrt();

    if norm_a == 0.0 || norm_b == 0.0 {
        0.0
    } else {
        dot_product / (norm_a * norm_b)
    }
}

/// Splits text into deduplicated lowercase alphanumeric tokens, preserving
/// first-seen order.
pub(crate) fn tokenize(text: &str) -> Vec<String> {
    let mut seen = std::collections::HashSet::new();
    let mut tokens = Vec::new();

    for token in text
        .split(|c: char| !c.is_alphanumeric())
        .filter(|t| !t.is_empty())
    {
        let token = token.to_lowercase();
        if seen.insert(token.clone()) {
            tokens.push(token);
        }
    }

    tokens
}
