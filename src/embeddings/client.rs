//! HTTP clients for the embedding providers.

use futures::stream;
use futures::stream::StreamExt;
use reqwest::Client;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde::Serialize;
use tracing::debug;

use crate::errors::CareerRagError;
use crate::errors::Result;

/// Concurrent requests kept in flight against Ollama, which has no
/// batch endpoint. A single local server saturates well before this.
const OLLAMA_CONCURRENCY: usize = 16;

/// Which embeddings API the endpoint speaks
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmbeddingProvider {
    /// A local Ollama daemon
    Ollama,
    /// `OpenAI` or an OpenAI-compatible service
    OpenAI,
}

/// Thin HTTP client around a single embeddings endpoint
pub struct EmbeddingClient {
    provider: EmbeddingProvider,
    model: String,
    endpoint: String,
    api_key: Option<String>,
    client: Client,
}

impl EmbeddingClient {
    /// Build a client with the shared pool settings.
    ///
    /// # Errors
    /// Fails only if reqwest cannot assemble the underlying client.
    pub fn new(
        provider: EmbeddingProvider,
        model: String,
        endpoint: String,
        api_key: Option<String>,
    ) -> Result<Self> {
        // 120s timeout: a cold local model can spend most of that loading
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(120))
            .pool_max_idle_per_host(100)
            .pool_idle_timeout(std::time::Duration::from_secs(30))
            .build()
            .map_err(|e| CareerRagError::HttpError(e.to_string()))?;

        Ok(Self {
            provider,
            model,
            endpoint,
            api_key,
            client,
        })
    }

    /// Embed a single text.
    ///
    /// # Errors
    /// Network failures, non-2xx replies and unparseable responses.
    pub async fn generate(&self, text: &str) -> Result<Vec<f32>> {
        match self.provider {
            EmbeddingProvider::Ollama => self.embed_ollama(text).await,
            EmbeddingProvider::OpenAI => {
                let mut batch = self.embed_openai(&[text]).await?;
                if batch.is_empty() {
                    return Err(CareerRagError::EmbeddingError(
                        "Embedding missing from response".to_string(),
                    ));
                }
                Ok(batch.swap_remove(0))
            }
        }
    }

    /// Embed a batch of texts, preserving input order.
    ///
    /// OpenAI takes the whole batch in one call; Ollama gets one request
    /// per text with bounded concurrency.
    ///
    /// # Errors
    /// Same failure modes as [`Self::generate`], for any text in the batch.
    pub async fn generate_batch(&self, texts: Vec<&str>) -> Result<Vec<Vec<f32>>> {
        match self.provider {
            EmbeddingProvider::OpenAI => self.embed_openai(&texts).await,
            EmbeddingProvider::Ollama => {
                let concurrency = texts.len().clamp(1, OLLAMA_CONCURRENCY);
                let results: Vec<Result<Vec<f32>>> = stream::iter(texts.iter())
                    .map(|&text| self.embed_ollama(text))
                    .buffered(concurrency)
                    .collect()
                    .await;

                results.into_iter().collect()
            }
        }
    }

    async fn embed_ollama(&self, text: &str) -> Result<Vec<f32>> {
        #[derive(Serialize)]
        struct OllamaRequest<'a> {
            model: &'a str,
            prompt: &'a str,
        }

        #[derive(Deserialize)]
        struct OllamaResponse {
            embedding: Vec<f32>,
        }

        let url = format!("{}/api/embeddings", self.endpoint);
        debug!("Embedding one text via Ollama at {url}");

        let response: OllamaResponse = self
            .post_json(
                &url,
                &OllamaRequest {
                    model: &self.model,
                    prompt: text,
                },
            )
            .await?;

        Ok(response.embedding)
    }

    async fn embed_openai(&self, texts: &[&str]) -> Result<Vec<Vec<f32>>> {
        if self.api_key.is_none() {
            return Err(CareerRagError::ConfigError(
                "Missing OpenAI API key".to_string(),
            ));
        }

        #[derive(Serialize)]
        struct OpenAiRequest<'a> {
            input: &'a [&'a str],
            model: &'a str,
        }

        #[derive(Deserialize)]
        struct OpenAiResponse {
            data: Vec<EmbeddingData>,
        }

        #[derive(Deserialize)]
        struct EmbeddingData {
            embedding: Vec<f32>,
        }

        let url = format!("{}/embeddings", self.endpoint);
        debug!("Embedding {} text(s) via OpenAI at {url}", texts.len());

        let response: OpenAiResponse = self
            .post_json(
                &url,
                &OpenAiRequest {
                    input: texts,
                    model: &self.model,
                },
            )
            .await?;

        Ok(response.data.into_iter().map(|d| d.embedding).collect())
    }

    /// POST a JSON body and deserialize the JSON response. Non-2xx
    /// statuses become `EmbeddingError` carrying the server's own text.
    async fn post_json<B, R>(&self, url: &str, body: &B) -> Result<R>
    where
        B: Serialize,
        R: DeserializeOwned,
    {
        let mut request = self.client.post(url).json(body);
        if let Some(key) = &self.api_key {
            request = request.bearer_auth(key);
        }

        let response = request
            .send()
            .await
            .map_err(|e| CareerRagError::HttpError(e.to_string()))?;

        if !response.status().is_success() {
            let status = response.status();
            let detail = response
                .text()
                .await
                .unwrap_or_else(|_| "(unreadable body)".to_string());
            return Err(CareerRagError::EmbeddingError(format!(
                "Embedding request to {url} failed ({status}): {detail}"
            )));
        }

        response
            .json()
            .await
            .map_err(|e| CareerRagError::EmbeddingError(format!("Malformed response: {e}")))
    }
}
