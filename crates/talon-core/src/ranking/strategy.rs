//! Named scoring strategies.

use std::collections::HashMap;

use crate::corpus::CandidateRecord;

use super::error::{RankingError, RankingResult};
use super::{RankQuery, tokenize};

/// Name of the pure-cosine strategy.
pub const STRATEGY_BASIC: &str = "basic";

/// Name of the field-boosted strategy.
pub const STRATEGY_WEIGHTED: &str = "weighted";

/// Per-field boost weights for the `weighted` strategy, each in [0, 1]
/// (out-of-range values are clamped).
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct FieldWeights {
    /// Boost for query-token overlap with the candidate's location.
    pub location: f32,
    /// Boost for query-token overlap with the candidate's skills.
    pub skills: f32,
    /// Boost for query-token overlap with the candidate's biography.
    pub bio: f32,
    /// Boost for query-token overlap with the candidate's name.
    pub name: f32,
}

impl FieldWeights {
    /// Parses a caller-supplied weights mapping.
    ///
    /// Recognized fields: `location`, `skills`, `bio`, `name`. Anything else
    /// is a configuration error, consistent with unknown strategy names.
    pub fn from_map(map: &HashMap<String, f32>) -> RankingResult<Self> {
        let mut weights = Self::default();

        for (field, &value) in map {
            let value = value.clamp(0.0, 1.0);
            match field.as_str() {
                "location" => weights.location = value,
                "skills" => weights.skills = value,
                "bio" => weights.bio = value,
                "name" => weights.name = value,
                _ => {
                    return Err(RankingError::UnknownWeightField {
                        field: field.clone(),
                    });
                }
            }
        }

        Ok(weights)
    }

    /// Returns `true` if every weight is zero (behaviorally identical to
    /// `basic`).
    pub fn is_empty(&self) -> bool {
        self.location == 0.0 && self.skills == 0.0 && self.bio == 0.0 && self.name == 0.0
    }
}

/// A named, pluggable scoring strategy consumed by the ranker.
#[derive(Debug, Clone, PartialEq)]
pub enum Strategy {
    /// Pure cosine similarity.
    Basic,
    /// Cosine similarity plus per-field token-overlap boosts:
    /// `score = cosine + Σ_field weight_field × overlap_field`, where
    /// `overlap_field` is the fraction of query tokens present in that
    /// candidate field. With all-zero weights this equals [`Strategy::Basic`].
    Weighted(FieldWeights),
}

impl Strategy {
    /// Resolves a caller-supplied strategy name.
    ///
    /// Unknown names fail with [`RankingError::UnknownStrategy`] rather than
    /// silently defaulting. `basic` ignores any supplied weights.
    pub fn from_name(name: &str, weights: Option<&HashMap<String, f32>>) -> RankingResult<Self> {
        match name {
            STRATEGY_BASIC => Ok(Self::Basic),
            STRATEGY_WEIGHTED => {
                let weights = match weights {
                    Some(map) => FieldWeights::from_map(map)?,
                    None => FieldWeights::default(),
                };
                Ok(Self::Weighted(weights))
            }
            other => Err(RankingError::UnknownStrategy {
                name: other.to_string(),
            }),
        }
    }

    /// Returns the strategy's wire name.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Basic => STRATEGY_BASIC,
            Self::Weighted(_) => STRATEGY_WEIGHTED,
        }
    }

    /// Combines the base cosine similarity into the final candidate score.
    pub(crate) fn score(&self, base: f32, query: &RankQuery, record: &CandidateRecord) -> f32 {
        match self {
            Self::Basic => base,
            Self::Weighted(weights) => {
                if weights.is_empty() {
                    return base;
                }

                base + weights.location * overlap(&query.terms, &record.location)
                    + weights.skills * overlap(&query.terms, &record.skills)
                    + weights.bio * overlap(&query.terms, &record.bio)
                    + weights.name * overlap(&query.terms, &record.name)
            }
        }
    }
}

/// Fraction of query tokens present in `field`'s token set (0.0 when the
/// query has no tokens).
fn overlap(terms: &[String], field: &str) -> f32 {
    if terms.is_empty() {
        return 0.0;
    }

    let field_tokens: std::collections::HashSet<String> = tokenize(field).into_iter().collect();
    let matched = terms.iter().filter(|t| field_tokens.contains(*t)).count();

    matched as f32 / terms.len() as f32
}
