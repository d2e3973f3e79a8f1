//! Cache snapshot model types.

use rkyv::{Archive, Deserialize, Serialize};

/// One persisted cache entry (hashed key plus vector).
#[derive(Archive, Deserialize, Serialize, Debug, PartialEq, Clone)]
pub struct CacheSnapshotEntry {
    /// BLAKE3 hash of the source text.
    pub key: [u8; 32],
    /// Embedding vector.
    pub vector: Vec<f32>,
}

/// Full cache contents persisted as one `rkyv` blob.
///
/// The recorded dimensionality gates hydration: a snapshot written under a
/// different configured `D` is discarded wholesale rather than partially
/// loaded.
#[derive(Archive, Deserialize, Serialize, Debug, PartialEq, Clone)]
pub struct CacheSnapshot {
    /// Dimensionality of every vector in `entries`.
    pub dim: u32,
    /// Persisted entries (unordered).
    pub entries: Vec<CacheSnapshotEntry>,
}
