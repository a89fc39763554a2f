//! Text embeddings for corpus chunks and chat queries.
//!
//! [`EmbeddingService`] is the high-level entry point: it normalizes the
//! input text and hands it to an [`EmbeddingClient`] speaking either the
//! Ollama or the OpenAI embeddings API, picked from the loaded configuration.
//!
//! ```rust,no_run
//! use careerrag::config::AppConfig;
//! use careerrag::embeddings::EmbeddingService;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let service = EmbeddingService::new(&AppConfig::load()?)?;
//!     let vector = service.generate("careers for artistic types").await?;
//!     println!("{} dimensions", vector.len());
//!     Ok(())
//! }
//! ```

pub mod client;
pub mod generator;

pub use client::EmbeddingClient;
pub use client::EmbeddingProvider;
pub use generator::EmbeddingService;

/// Vector width of nomic-embed-text, the default local model
pub const DEFAULT_EMBEDDING_DIM: usize = 768;

/// Upper bound on how many texts go to the provider in one request
pub const MAX_BATCH_SIZE: usize = 100;

/// Resolved embedding settings, detached from the full application config
#[derive(Debug, Clone)]
pub struct EmbeddingConfig {
    pub provider: EmbeddingProvider,
    pub model: String,
    pub dimension: usize,
    pub endpoint: String,
    pub api_key: Option<String>,
}

impl EmbeddingConfig {
    /// Derive the embedding setup from the loaded application config.
    ///
    /// The config file never names the wire protocol;
    /// [`crate::config::AppConfig::uses_ollama`] infers it.
    pub fn from_app_config(config: &crate::config::AppConfig) -> Self {
        let provider = if config.uses_ollama() {
            EmbeddingProvider::Ollama
        } else {
            EmbeddingProvider::OpenAI
        };
        Self {
            provider,
            model: config.embedding_model().to_string(),
            dimension: config.embedding_dimension(),
            endpoint: config.llm_endpoint().to_string(),
            api_key: (provider == EmbeddingProvider::OpenAI)
                .then(|| config.llm_key().to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AppConfig;

    #[test]
    fn test_provider_inference_from_key() {
        let config = AppConfig::default();
        let embedding_config = EmbeddingConfig::from_app_config(&config);
        assert_eq!(embedding_config.provider, EmbeddingProvider::Ollama);
        assert_eq!(embedding_config.dimension, DEFAULT_EMBEDDING_DIM);
        assert!(embedding_config.api_key.is_none());
    }

    #[test]
    fn test_provider_inference_for_openai() {
        let mut config = AppConfig::default();
        config.llm.llm_key = "sk-test".to_string();
        config.llm.llm_endpoint = "https://api.openai.com/v1".to_string();
        let embedding_config = EmbeddingConfig::from_app_config(&config);
        assert_eq!(embedding_config.provider, EmbeddingProvider::OpenAI);
        assert_eq!(embedding_config.api_key.as_deref(), Some("sk-test"));
    }

    #[test]
    fn test_loopback_endpoint_means_ollama() {
        let mut config = AppConfig::default();
        config.llm.llm_key = "some-token".to_string();
        config.llm.llm_endpoint = "http://127.0.0.1:11434".to_string();
        let embedding_config = EmbeddingConfig::from_app_config(&config);
        assert_eq!(embedding_config.provider, EmbeddingProvider::Ollama);
        assert!(embedding_config.api_key.is_none());
    }
}
