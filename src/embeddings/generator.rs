//! Embedding service: input cleanup, batching, and provider fan-out.

use std::sync::Arc;

use super::client::EmbeddingClient;
use super::client::EmbeddingProvider;
use super::EmbeddingConfig;
use super::MAX_BATCH_SIZE;
use crate::errors::CareerRagError;
use crate::errors::Result;

/// Service for generating embeddings with batching and input cleanup
pub struct EmbeddingService {
    client: Arc<EmbeddingClient>,
    config: EmbeddingConfig,
}

impl EmbeddingService {
    /// Create a service from the application config
    pub fn new(config: &crate::config::AppConfig) -> Result<Self> {
        Self::from_config(EmbeddingConfig::from_app_config(config))
    }

    /// Create a service from an explicit embedding config
    pub fn from_config(config: EmbeddingConfig) -> Result<Self> {
        let client = EmbeddingClient::new(
            config.provider,
            config.model.clone(),
            config.endpoint.clone(),
            config.api_key.clone(),
        )?;

        Ok(Self {
            client: Arc::new(client),
            config,
        })
    }

    /// Clean and embed one text.
    pub async fn generate(&self, text: &str) -> Result<Vec<f32>> {
        // Embedding APIs choke on raw newlines and reject empty input
        let cleaned = preprocess_text(text)?;
        self.client.generate(&cleaned).await
    }

    /// Generate embeddings for multiple texts, preserving positions.
    ///
    /// Texts that clean down to nothing get a zero vector instead of an
    /// error, so indexing never fails on a blank chunk. Inputs larger
    /// than `MAX_BATCH_SIZE` are sent in groups.
    pub async fn generate_batch(&self, texts: Vec<&str>) -> Result<Vec<Vec<f32>>> {
        // One slot per input; None marks a text with no embeddable content
        let slots: Vec<Option<String>> = texts
            .iter()
            .map(|text| preprocess_text(text).ok())
            .collect();

        let cleaned: Vec<&str> = slots.iter().flatten().map(String::as_str).collect();

        let mut generated = Vec::with_capacity(cleaned.len());
        for group in cleaned.chunks(MAX_BATCH_SIZE) {
            let batch = self.client.generate_batch(group.to_vec()).await?;
            generated.extend(batch);
        }

        let mut generated = generated.into_iter();
        slots
            .iter()
            .map(|slot| match slot {
                Some(_) => generated.next().ok_or_else(|| {
                    CareerRagError::EmbeddingError(
                        "Provider returned fewer embeddings than requested".to_string(),
                    )
                }),
                None => Ok(vec![0.0; self.config.dimension]),
            })
            .collect()
    }

    /// Vector width of the active model
    #[must_use]
    pub const fn dimension(&self) -> usize {
        self.config.dimension
    }

    /// Active model name
    #[must_use]
    pub fn model(&self) -> &str {
        &self.config.model
    }

    /// Active provider
    #[must_use]
    pub const fn provider(&self) -> EmbeddingProvider {
        self.config.provider
    }
}

/// Flatten whitespace so multi-line chunks embed as one sequence
fn preprocess_text(text: &str) -> Result<String> {
    let processed = text
        .replace(['\n', '\r', '\t'], " ")
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ");

    if processed.is_empty() {
        return Err(CareerRagError::EmbeddingError(
            "Cannot generate embedding for empty text".to_string(),
        ));
    }

    Ok(processed)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_service(dimension: usize) -> EmbeddingService {
        EmbeddingService::from_config(EmbeddingConfig {
            provider: EmbeddingProvider::Ollama,
            model: "nomic-embed-text".to_string(),
            dimension,
            endpoint: "http://127.0.0.1:11434".to_string(),
            api_key: None,
        })
        .unwrap()
    }

    #[test]
    fn test_preprocess_flattens_whitespace() {
        let processed = preprocess_text("careers\nin\tengineering\r\n fields").unwrap();
        assert_eq!(processed, "careers in engineering fields");
    }

    #[test]
    fn test_preprocess_rejects_empty_input() {
        assert!(preprocess_text("").is_err());
        assert!(preprocess_text("  \n\t ").is_err());
    }

    #[tokio::test]
    async fn test_blank_batch_yields_zero_vectors() {
        // No embeddable content means no request is ever sent, so this
        // runs without a provider.
        let service = test_service(4);
        let embeddings = service.generate_batch(vec!["", "  \n\t "]).await.unwrap();
        assert_eq!(embeddings, vec![vec![0.0; 4], vec![0.0; 4]]);
    }

    #[tokio::test]
    async fn test_empty_batch_is_a_no_op() {
        let service = test_service(8);
        let embeddings = service.generate_batch(Vec::new()).await.unwrap();
        assert!(embeddings.is_empty());
    }
}
