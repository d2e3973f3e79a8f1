//! External LLM capability boundary.
//!
//! The engine consumes exactly two operations from the outside world:
//! embedding generation and text completion. [`TextProvider`] is the seam;
//! [`GenaiProvider`] is the production implementation. Failures are typed —
//! no silent `None` or placeholder vectors ever cross this boundary.

pub mod error;
pub mod genai;
#[cfg(any(test, feature = "mock"))]
pub mod mock;

#[cfg(test)]
mod tests;

pub use error::{ProviderError, ProviderResult};
pub use self::genai::GenaiProvider;
#[cfg(any(test, feature = "mock"))]
pub use mock::MockTextProvider;

/// The embedding/completion capability consumed by the engine.
///
/// Implementations must bound each call (timeout or equivalent) and surface
/// failures as [`ProviderError`]; nothing in the core retries.
pub trait TextProvider: Send + Sync {
    /// Embeds `text` into a fixed-dimensionality vector.
    fn embed(&self, text: &str) -> impl std::future::Future<Output = ProviderResult<Vec<f32>>> + Send;

    /// Completes `prompt` into free text.
    fn complete(
        &self,
        prompt: &str,
    ) -> impl std::future::Future<Output = ProviderResult<String>> + Send;
}
