use std::path::Path;
use std::sync::Arc;

use moka::sync::Cache;
use tracing::{debug, info, instrument, warn};

use crate::hashing::hash_text;
use crate::provider::TextProvider;
use crate::storage;

use super::error::{EmbeddingCacheError, EmbeddingCacheResult};
use super::model::{CacheSnapshot, CacheSnapshotEntry};

/// Memoizing embedding store shared across concurrent requests.
///
/// Lookups are keyed by the BLAKE3 hash of the exact input text. Two
/// concurrent misses for the same text may both reach the provider; the value
/// is a pure function of the key, so last-writer-wins on insert is correct.
/// Persistence is at-least-once: a crash between a provider response and the
/// next snapshot only means the text is recomputed on a later run.
pub struct EmbeddingCache<P: TextProvider> {
    provider: Arc<P>,
    entries: Cache<[u8; 32], Arc<Vec<f32>>>,
    dim: usize,
}

impl<P: TextProvider> std::fmt::Debug for EmbeddingCache<P> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EmbeddingCache")
            .field("entries", &self.entries.entry_count())
            .field("dim", &self.dim)
            .finish_non_exhaustive()
    }
}

impl<P: TextProvider> EmbeddingCache<P> {
    const DEFAULT_CAPACITY: u64 = 100_000;

    /// Creates a cache with the default capacity.
    pub fn new(provider: Arc<P>, dim: usize) -> Self {
        Self::with_capacity(provider, dim, Self::DEFAULT_CAPACITY)
    }

    /// Creates a cache with a max entry capacity (LRU eviction).
    pub fn with_capacity(provider: Arc<P>, dim: usize, capacity: u64) -> Self {
        Self {
            provider,
            entries: Cache::builder().max_capacity(capacity).build(),
            dim,
        }
    }

    /// Returns the configured embedding dimensionality.
    pub fn dim(&self) -> usize {
        self.dim
    }

    /// Returns the number of cached entries.
    pub fn len(&self) -> u64 {
        self.entries.run_pending_tasks();
        self.entries.entry_count()
    }

    /// Returns `true` if the cache is empty.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns `true` if an embedding for `text` is already cached.
    pub fn contains(&self, text: &str) -> bool {
        self.entries.contains_key(&hash_text(text))
    }

    /// Returns the embedding for `text`, computing and caching it on miss.
    ///
    /// On a hit no external call is made. On a miss the provider is invoked
    /// exactly once; a failed call caches nothing and surfaces the failure,
    /// leaving retry/degrade decisions to the caller.
    #[instrument(skip(self, text), fields(text_len = text.len()))]
    pub async fn get_or_compute(&self, text: &str) -> EmbeddingCacheResult<Arc<Vec<f32>>> {
        if text.trim().is_empty() {
            return Err(EmbeddingCacheError::InvalidInput);
        }

        let key = hash_text(text);

        if let Some(vector) = self.entries.get(&key) {
            debug!("Embedding cache hit");
            return Ok(vector);
        }

        debug!("Embedding cache miss, calling provider");
        let vector = self.provider.embed(text).await?;

        if vector.len() != self.dim {
            return Err(EmbeddingCacheError::Provider(
                crate::provider::ProviderError::DimensionMismatch {
                    expected: self.dim,
                    actual: vector.len(),
                },
            ));
        }

        let vector = Arc::new(vector);
        self.entries.insert(key, Arc::clone(&vector));

        Ok(vector)
    }

    /// Writes the full cache contents to `path` as one snapshot blob.
    pub fn persist(&self, path: &Path) -> EmbeddingCacheResult<()> {
        self.entries.run_pending_tasks();

        let entries: Vec<CacheSnapshotEntry> = self
            .entries
            .iter()
            .map(|(key, vector)| CacheSnapshotEntry {
                key: *key,
                vector: (*vector).clone(),
            })
            .collect();

        let count = entries.len();
        let snapshot = CacheSnapshot {
            dim: self.dim as u32,
            entries,
        };

        let bytes = rkyv::to_bytes::<rkyv::rancor::Error>(&snapshot).map_err(|e| {
            EmbeddingCacheError::Snapshot {
                reason: e.to_string(),
            }
        })?;

        storage::write_snapshot(path, &bytes)?;

        info!(entries = count, path = %path.display(), "Embedding cache persisted");
        Ok(())
    }

    /// Hydrates the cache from a snapshot at `path`, returning the number of
    /// entries loaded.
    ///
    /// A missing snapshot loads nothing (first run). A snapshot recorded at a
    /// different dimensionality is discarded wholesale with a warning.
    pub fn load(&self, path: &Path) -> EmbeddingCacheResult<usize> {
        let bytes = match storage::read_snapshot(path) {
            Ok(bytes) => bytes,
            Err(crate::storage::StorageError::NotFound { .. }) => {
                debug!(path = %path.display(), "No embedding cache snapshot, starting empty");
                return Ok(0);
            }
            Err(e) => return Err(e.into()),
        };

        let snapshot: CacheSnapshot = rkyv::from_bytes::<CacheSnapshot, rkyv::rancor::Error>(
            &bytes,
        )
        .map_err(|e| EmbeddingCacheError::Snapshot {
            reason: e.to_string(),
        })?;

        if snapshot.dim as usize != self.dim {
            warn!(
                snapshot_dim = snapshot.dim,
                configured_dim = self.dim,
                "Discarding embedding cache snapshot with mismatched dimensionality"
            );
            return Ok(0);
        }

        let mut loaded = 0;
        for entry in snapshot.entries {
            if entry.vector.len() != self.dim {
                warn!(
                    actual = entry.vector.len(),
                    expected = self.dim,
                    "Skipping snapshot entry with malformed vector"
                );
                continue;
            }
            self.entries.insert(entry.key, Arc::new(entry.vector));
            loaded += 1;
        }

        info!(entries = loaded, path = %path.display(), "Embedding cache hydrated");
        Ok(loaded)
    }
}
