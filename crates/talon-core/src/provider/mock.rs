use std::collections::VecDeque;
use std::sync::Mutex;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

use super::TextProvider;
use super::error::{ProviderError, ProviderResult};

/// Deterministic in-process provider for tests.
///
/// Embeddings are derived from the BLAKE3 hash of the input, so identical
/// texts always produce identical vectors. Completions are served from a
/// scripted queue, falling back to a canned reply when the queue is empty.
/// Failure injection and call counters support exercising the degraded paths.
pub struct MockTextProvider {
    dim: usize,
    embed_calls: AtomicUsize,
    complete_calls: AtomicUsize,
    fail_embed: AtomicBool,
    fail_complete: AtomicBool,
    completions: Mutex<VecDeque<String>>,
}

impl MockTextProvider {
    /// Creates a mock producing `dim`-dimensional embeddings.
    pub fn new(dim: usize) -> Self {
        Self {
            dim,
            embed_calls: AtomicUsize::new(0),
            complete_calls: AtomicUsize::new(0),
            fail_embed: AtomicBool::new(false),
            fail_complete: AtomicBool::new(false),
            completions: Mutex::new(VecDeque::new()),
        }
    }

    /// Queues `text` as the next completion response.
    pub fn push_completion(&self, text: impl Into<String>) {
        self.completions
            .lock()
            .expect("lock poisoned")
            .push_back(text.into());
    }

    /// Makes subsequent `embed` calls fail.
    pub fn set_fail_embed(&self, fail: bool) {
        self.fail_embed.store(fail, Ordering::SeqCst);
    }

    /// Makes subsequent `complete` calls fail.
    pub fn set_fail_complete(&self, fail: bool) {
        self.fail_complete.store(fail, Ordering::SeqCst);
    }

    /// Number of `embed` calls made so far (including failed ones).
    pub fn embed_calls(&self) -> usize {
        self.embed_calls.load(Ordering::SeqCst)
    }

    /// Number of `complete` calls made so far (including failed ones).
    pub fn complete_calls(&self) -> usize {
        self.complete_calls.load(Ordering::SeqCst)
    }

    /// The deterministic embedding this mock produces for `text`.
    pub fn embedding_for(&self, text: &str) -> Vec<f32> {
        let mut hasher = blake3::Hasher::new();
        hasher.update(text.as_bytes());
        let mut reader = hasher.finalize_xof();

        let mut buf = vec![0u8; self.dim * 4];
        reader.fill(&mut buf);

        buf.chunks_exact(4)
            .map(|chunk| {
                let word = u32::from_le_bytes([chunk[0], chunk[1], chunk[2], chunk[3]]);
                (word as f32 / u32::MAX as f32) * 2.0 - 1.0
            })
            .collect()
    }
}

impl TextProvider for MockTextProvider {
    async fn embed(&self, text: &str) -> ProviderResult<Vec<f32>> {
        self.embed_calls.fetch_add(1, Ordering::SeqCst);

        if self.fail_embed.load(Ordering::SeqCst) {
            return Err(ProviderError::RequestFailed {
                reason: "mock embed failure".to_string(),
            });
        }

        Ok(self.embedding_for(text))
    }

    async fn complete(&self, prompt: &str) -> ProviderResult<String> {
        self.complete_calls.fetch_add(1, Ordering::SeqCst);

        if self.fail_complete.load(Ordering::SeqCst) {
            return Err(ProviderError::RequestFailed {
                reason: "mock complete failure".to_string(),
            });
        }

        let scripted = self.completions.lock().expect("lock poisoned").pop_front();

        Ok(scripted.unwrap_or_else(|| format!("Mock response for: {}", prompt)))
    }
}
