//! Chat completion clients for various providers
//!
//! The advisor talks to a local Ollama server by default, using the same
//! endpoint and key settings as embedding generation. OpenAI-compatible
//! endpoints work with a real API key.

use reqwest::Client;
use serde::Deserialize;
use serde::Serialize;
use tracing::debug;

use crate::errors::CareerRagError;
use crate::errors::Result;

/// Which chat API the endpoint speaks
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LlmProvider {
    /// A local Ollama daemon
    Ollama,
    /// `OpenAI` or an OpenAI-compatible service
    OpenAI,
}

/// One message in a chat exchange
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: String,
    pub content: String,
}

impl ChatMessage {
    pub fn system<S: Into<String>>(content: S) -> Self {
        Self {
            role: "system".to_string(),
            content: content.into(),
        }
    }

    pub fn user<S: Into<String>>(content: S) -> Self {
        Self {
            role: "user".to_string(),
            content: content.into(),
        }
    }

    pub fn assistant<S: Into<String>>(content: S) -> Self {
        Self {
            role: "assistant".to_string(),
            content: content.into(),
        }
    }
}

/// Thin HTTP client around a single chat-completion endpoint
pub struct LlmService {
    provider: LlmProvider,
    model: String,
    endpoint: String,
    api_key: Option<String>,
    client: Client,
}

impl LlmService {
    /// Create a service from the application config
    pub fn new(config: &crate::config::AppConfig) -> Result<Self> {
        let provider = if config.uses_ollama() {
            LlmProvider::Ollama
        } else {
            LlmProvider::OpenAI
        };

        let api_key = (provider == LlmProvider::OpenAI).then(|| config.llm_key().to_string());

        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(120)) // Generation is slow on local models
            .pool_max_idle_per_host(100)
            .pool_idle_timeout(std::time::Duration::from_secs(30))
            .build()
            .map_err(|e| CareerRagError::HttpError(e.to_string()))?;

        Ok(Self {
            provider,
            model: config.llm_model().to_string(),
            endpoint: config.llm_endpoint().to_string(),
            api_key,
            client,
        })
    }

    /// Active chat model
    #[must_use]
    pub fn model(&self) -> &str {
        &self.model
    }

    /// Active provider
    #[must_use]
    pub const fn provider(&self) -> LlmProvider {
        self.provider
    }

    /// Run a single-prompt completion
    pub async fn generate_with_params(
        &self,
        prompt: &str,
        temperature: f32,
        max_tokens: usize,
    ) -> Result<String> {
        self.chat_with_params(&[ChatMessage::user(prompt)], temperature, max_tokens)
            .await
    }

    /// Run a chat completion over a full message list
    pub async fn chat_with_params(
        &self,
        messages: &[ChatMessage],
        temperature: f32,
        max_tokens: usize,
    ) -> Result<String> {
        match self.provider {
            LlmProvider::Ollama => self.chat_ollama(messages, temperature, max_tokens).await,
            LlmProvider::OpenAI => self.chat_openai(messages, temperature, max_tokens).await,
        }
    }

    /// Chat completion using Ollama API
    async fn chat_ollama(
        &self,
        messages: &[ChatMessage],
        temperature: f32,
        max_tokens: usize,
    ) -> Result<String> {
        #[derive(Serialize)]
        struct OllamaOptions {
            temperature: f32,
            num_predict: i64,
        }

        #[derive(Serialize)]
        struct OllamaChatRequest<'a> {
            model: &'a str,
            messages: &'a [ChatMessage],
            stream: bool,
            options: OllamaOptions,
        }

        #[derive(Deserialize)]
        struct OllamaChatMessage {
            content: String,
        }

        #[derive(Deserialize)]
        struct OllamaChatResponse {
            message: OllamaChatMessage,
        }

        let url = format!("{}/api/chat", self.endpoint);
        debug!("Calling Ollama chat API: {} ({} messages)", url, messages.len());

        let request = OllamaChatRequest {
            model: &self.model,
            messages,
            stream: false,
            options: OllamaOptions {
                temperature,
                num_predict: max_tokens as i64,
            },
        };

        let response = self
            .client
            .post(&url)
            .header("Content-Type", "application/json")
            .json(&request)
            .send()
            .await
            .map_err(|e| CareerRagError::HttpError(e.to_string()))?;

        if !response.status().is_success() {
            let status = response.status();
            let detail = response
                .text()
                .await
                .unwrap_or_else(|_| "(unreadable body)".to_string());
            return Err(CareerRagError::LlmError(format!(
                "Ollama returned {status}: {detail}"
            )));
        }

        let result: OllamaChatResponse = response
            .json()
            .await
            .map_err(|e| CareerRagError::LlmError(format!("Malformed chat response: {e}")))?;

        Ok(result.message.content)
    }

    /// Chat completion using `OpenAI` API
    async fn chat_openai(
        &self,
        messages: &[ChatMessage],
        temperature: f32,
        max_tokens: usize,
    ) -> Result<String> {
        let api_key = self.api_key.as_ref().ok_or_else(|| {
            CareerRagError::ConfigError("Missing OpenAI API key".to_string())
        })?;

        #[derive(Serialize)]
        struct OpenAIChatRequest<'a> {
            model: &'a str,
            messages: &'a [ChatMessage],
            temperature: f32,
            max_tokens: usize,
        }

        #[derive(Deserialize)]
        struct OpenAIChatResponse {
            choices: Vec<OpenAIChoice>,
        }

        #[derive(Deserialize)]
        struct OpenAIChoice {
            message: OpenAIChoiceMessage,
        }

        #[derive(Deserialize)]
        struct OpenAIChoiceMessage {
            content: String,
        }

        let url = format!("{}/chat/completions", self.endpoint);
        debug!("Calling OpenAI chat API: {} ({} messages)", url, messages.len());

        let request = OpenAIChatRequest {
            model: &self.model,
            messages,
            temperature,
            max_tokens,
        };

        let response = self
            .client
            .post(&url)
            .header("Authorization", format!("Bearer {api_key}"))
            .header("Content-Type", "application/json")
            .json(&request)
            .send()
            .await
            .map_err(|e| CareerRagError::HttpError(e.to_string()))?;

        if !response.status().is_success() {
            let status = response.status();
            let detail = response
                .text()
                .await
                .unwrap_or_else(|_| "(unreadable body)".to_string());
            return Err(CareerRagError::LlmError(format!(
                "OpenAI returned {status}: {detail}"
            )));
        }

        let result: OpenAIChatResponse = response
            .json()
            .await
            .map_err(|e| CareerRagError::LlmError(format!("Malformed chat response: {e}")))?;

        result
            .choices
            .into_iter()
            .next()
            .map(|c| c.message.content)
            .ok_or_else(|| CareerRagError::LlmError("No choices in response".to_string()))
    }
}
