//! Corpus model types.

use rkyv::{Archive, Deserialize, Serialize};

/// One candidate with a precomputed embedding.
///
/// Immutable for the process lifetime once the corpus is loaded.
#[derive(Archive, Deserialize, Serialize, Debug, PartialEq, Clone)]
pub struct CandidateRecord {
    /// Display name (assumed unique within the corpus).
    pub name: String,
    /// Location string.
    pub location: String,
    /// Skills, free text or tag list.
    pub skills: String,
    /// Biography text.
    pub bio: String,
    /// Embedding of the combined profile text (dimensionality `D`).
    pub embedding: Vec<f32>,
}

/// Full corpus persisted as one `rkyv` blob so later process starts skip
/// re-embedding.
#[derive(Archive, Deserialize, Serialize, Debug, PartialEq, Clone)]
pub struct CorpusSnapshot {
    /// Dimensionality of every embedding in `records`.
    pub dim: u32,
    /// Records in original build order.
    pub records: Vec<CandidateRecord>,
}
