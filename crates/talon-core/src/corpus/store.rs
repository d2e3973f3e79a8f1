use std::path::Path;

use tracing::{info, instrument, warn};

use crate::cache::EmbeddingCache;
use crate::provider::TextProvider;
use crate::storage;

use super::error::{CorpusError, CorpusResult};
use super::model::{CandidateRecord, CorpusSnapshot};
use super::profile::{RawProfile, load_raw_profiles};

const BUILD_PROGRESS_INTERVAL: usize = 25;

/// Read-only candidate corpus.
///
/// Safe to share freely (`Arc`) across concurrent requests; nothing mutates
/// it after load. An empty corpus is a valid terminal state.
#[derive(Debug, Clone)]
pub struct Corpus {
    dim: usize,
    records: Vec<CandidateRecord>,
}

impl Corpus {
    /// Creates an empty corpus for dimensionality `dim`.
    pub fn empty(dim: usize) -> Self {
        Self {
            dim,
            records: Vec::new(),
        }
    }

    /// Creates a corpus from prebuilt records, validating dimensionality.
    pub fn from_records(dim: usize, records: Vec<CandidateRecord>) -> CorpusResult<Self> {
        for record in &records {
            if record.embedding.len() != dim {
                return Err(CorpusError::MalformedRecord {
                    name: record.name.clone(),
                    expected: dim,
                    actual: record.embedding.len(),
                });
            }
        }

        Ok(Self { dim, records })
    }

    /// Records in original build order.
    pub fn all(&self) -> &[CandidateRecord] {
        &self.records
    }

    /// Number of records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Returns `true` if no records are present.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Embedding dimensionality every record satisfies.
    pub fn dim(&self) -> usize {
        self.dim
    }

    /// Builds a corpus from raw profiles, embedding each through the cache.
    ///
    /// Profiles whose embedding cannot be obtained (provider failure, blank
    /// combined text) are dropped with a logged reason and not retried within
    /// this pass. Never fails: the worst case is an empty corpus.
    #[instrument(skip(profiles, cache), fields(profiles = profiles.len()))]
    pub async fn build<P: TextProvider>(
        profiles: &[RawProfile],
        cache: &EmbeddingCache<P>,
    ) -> Self {
        let dim = cache.dim();
        let total = profiles.len();
        let mut records = Vec::with_capacity(total);

        for (index, profile) in profiles.iter().enumerate() {
            let text = profile.combined_features();
            match cache.get_or_compute(&text).await {
                Ok(vector) => {
                    records.push(CandidateRecord {
                        name: profile.display_name(),
                        location: profile.location(),
                        skills: profile.skills.clone(),
                        bio: profile.profile_description.clone(),
                        embedding: (*vector).clone(),
                    });
                }
                Err(e) => {
                    warn!(
                        name = %profile.display_name(),
                        error = %e,
                        "Dropping profile: embedding unavailable"
                    );
                }
            }

            if (index + 1) % BUILD_PROGRESS_INTERVAL == 0 {
                info!(processed = index + 1, total, "Corpus build progress");
            }
        }

        info!(
            built = records.len(),
            dropped = total - records.len(),
            "Corpus build complete"
        );

        Self { dim, records }
    }

    /// Loads a corpus snapshot from `path`.
    ///
    /// Fails (rather than silently degrading) on missing, corrupt, or
    /// dimensionality-mismatched snapshots; callers decide whether to rebuild.
    pub fn load_snapshot(path: &Path, dim: usize) -> CorpusResult<Self> {
        let bytes = storage::read_snapshot(path)?;

        let snapshot: CorpusSnapshot = rkyv::from_bytes::<CorpusSnapshot, rkyv::rancor::Error>(
            &bytes,
        )
        .map_err(|e| CorpusError::Snapshot {
            reason: e.to_string(),
        })?;

        if snapshot.dim as usize != dim {
            return Err(CorpusError::DimensionMismatch {
                expected: dim,
                actual: snapshot.dim as usize,
            });
        }

        let corpus = Self::from_records(dim, snapshot.records)?;

        info!(records = corpus.len(), path = %path.display(), "Corpus loaded from snapshot");
        Ok(corpus)
    }

    /// Persists the full corpus (records + embeddings) as one snapshot blob.
    pub fn persist(&self, path: &Path) -> CorpusResult<()> {
        let snapshot = CorpusSnapshot {
            dim: self.dim as u32,
            records: self.records.clone(),
        };

        let bytes =
            rkyv::to_bytes::<rkyv::rancor::Error>(&snapshot).map_err(|e| CorpusError::Snapshot {
                reason: e.to_string(),
            })?;

        storage::write_snapshot(path, &bytes)?;

        info!(records = self.len(), path = %path.display(), "Corpus snapshot persisted");
        Ok(())
    }

    /// Loads the corpus from a snapshot, or rebuilds it from raw profiles.
    ///
    /// The rebuild path persists its result so subsequent starts skip
    /// re-embedding. An unreadable profiles file yields an empty corpus (the
    /// service stays up and reports zero candidates); a snapshot that exists
    /// but cannot be used is logged and rebuilt over.
    pub async fn load_or_build<P: TextProvider>(
        snapshot_path: &Path,
        profiles_path: &Path,
        cache: &EmbeddingCache<P>,
    ) -> Self {
        match Self::load_snapshot(snapshot_path, cache.dim()) {
            Ok(corpus) => return corpus,
            Err(CorpusError::Storage(crate::storage::StorageError::NotFound { .. })) => {
                info!("No corpus snapshot found, building from raw profiles");
            }
            Err(e) => {
                warn!(error = %e, "Unusable corpus snapshot, rebuilding from raw profiles");
            }
        }

        let profiles = match load_raw_profiles(profiles_path) {
            Ok(profiles) => profiles,
            Err(e) => {
                warn!(error = %e, "Raw profiles unavailable, starting with an empty corpus");
                return Self::empty(cache.dim());
            }
        };

        let corpus = Self::build(&profiles, cache).await;

        if !corpus.is_empty() {
            if let Err(e) = corpus.persist(snapshot_path) {
                warn!(error = %e, "Failed to persist corpus snapshot");
            }
        }

        corpus
    }
}
