//! Production provider backed by the `genai` multi-provider client.

use std::time::Duration;

use genai::Client;
use genai::chat::{ChatMessage, ChatOptions, ChatRequest};
use tokio::time::timeout;
use tracing::debug;

use crate::config::Config;

use super::TextProvider;
use super::error::{ProviderError, ProviderResult};

const DEFAULT_TEMPERATURE: f64 = 0.7;
const DEFAULT_MAX_TOKENS: u32 = 2048;

/// [`TextProvider`] implementation over a remote LLM service.
///
/// Every call is bounded by the configured timeout; the provider never
/// retries. Model names are provider-routed by the `genai` client.
pub struct GenaiProvider {
    client: Client,
    chat_model: String,
    embed_model: String,
    chat_options: ChatOptions,
    timeout_secs: u64,
    expected_dim: usize,
}

impl std::fmt::Debug for GenaiProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GenaiProvider")
            .field("chat_model", &self.chat_model)
            .field("embed_model", &self.embed_model)
            .field("timeout_secs", &self.timeout_secs)
            .field("expected_dim", &self.expected_dim)
            .finish_non_exhaustive()
    }
}

impl GenaiProvider {
    /// Creates a provider from explicit parts.
    pub fn new(
        chat_model: impl Into<String>,
        embed_model: impl Into<String>,
        timeout_secs: u64,
        expected_dim: usize,
    ) -> Self {
        Self {
            client: Client::default(),
            chat_model: chat_model.into(),
            embed_model: embed_model.into(),
            chat_options: ChatOptions::default()
                .with_temperature(DEFAULT_TEMPERATURE)
                .with_max_tokens(DEFAULT_MAX_TOKENS),
            timeout_secs,
            expected_dim,
        }
    }

    /// Creates a provider from the engine configuration.
    pub fn from_config(config: &Config) -> Self {
        Self::new(
            config.chat_model.clone(),
            config.embed_model.clone(),
            config.provider_timeout_secs,
            config.embedding_dim,
        )
    }

    /// Returns the configured embedding dimensionality.
    pub fn expected_dim(&self) -> usize {
        self.expected_dim
    }

    fn call_timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

impl TextProvider for GenaiProvider {
    async fn embed(&self, text: &str) -> ProviderResult<Vec<f32>> {
        debug!(model = %self.embed_model, text_len = text.len(), "Requesting embedding");

        let response = timeout(
            self.call_timeout(),
            self.client.embed(&self.embed_model, text, None),
        )
        .await
        .map_err(|_| ProviderError::Timeout {
            secs: self.timeout_secs,
        })?
        .map_err(|e| ProviderError::RequestFailed {
            reason: e.to_string(),
        })?;

        let vector = response
            .first_embedding()
            .map(|e| e.vector().to_vec())
            .ok_or(ProviderError::EmptyResponse)?;

        if vector.len() != self.expected_dim {
            return Err(ProviderError::DimensionMismatch {
                expected: self.expected_dim,
                actual: vector.len(),
            });
        }

        Ok(vector)
    }

    async fn complete(&self, prompt: &str) -> ProviderResult<String> {
        debug!(model = %self.chat_model, prompt_len = prompt.len(), "Requesting completion");

        let request = ChatRequest::new(vec![ChatMessage::user(prompt)]);

        let response = timeout(
            self.call_timeout(),
            self.client
                .exec_chat(&self.chat_model, request, Some(&self.chat_options)),
        )
        .await
        .map_err(|_| ProviderError::Timeout {
            secs: self.timeout_secs,
        })?
        .map_err(|e| ProviderError::RequestFailed {
            reason: e.to_string(),
        })?;

        let text = response
            .first_text()
            .map(|t| t.to_string())
            .unwrap_or_default();

        if text.trim().is_empty() {
            return Err(ProviderError::EmptyResponse);
        }

        Ok(text)
    }
}
