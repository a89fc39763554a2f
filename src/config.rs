use std::path::Path;

use serde::Deserialize;
use serde::Serialize;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    pub level: String,
    pub backtrace: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmbeddingsConfig {
    pub dimension: usize,
    pub model: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LlmConfig {
    pub llm_endpoint: String,
    pub llm_key: String,
    #[serde(default = "default_llm_model")]
    pub llm_model: String,
}

fn default_llm_model() -> String {
    "llama3.1:latest".to_string()
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CorpusConfig {
    /// Directory scanned recursively for advisory documents
    #[serde(default = "default_docs_dir")]
    pub docs_dir: String,
    /// Maximum chunk size in characters when splitting documents
    #[serde(default = "default_chunk_chars")]
    pub chunk_chars: usize,
}

fn default_docs_dir() -> String {
    "docs".to_string()
}

fn default_chunk_chars() -> usize {
    1200
}

impl Default for CorpusConfig {
    fn default() -> Self {
        Self {
            docs_dir: default_docs_dir(),
            chunk_chars: default_chunk_chars(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatConfig {
    /// How many corpus chunks to retrieve per turn
    #[serde(default = "default_retrieval_limit")]
    pub retrieval_limit: usize,
    /// Character budget for the assembled context block
    #[serde(default = "default_max_context_chars")]
    pub max_context_chars: usize,
    /// Token budget for conversation memory
    #[serde(default = "default_memory_token_limit")]
    pub memory_token_limit: usize,
    #[serde(default = "default_temperature")]
    pub temperature: f32,
    #[serde(default = "default_max_tokens")]
    pub max_tokens: usize,
    /// Idle chat/assessment sessions are dropped after this many seconds
    #[serde(default = "default_session_timeout_secs")]
    pub session_timeout_secs: u64,
}

fn default_retrieval_limit() -> usize {
    4
}

fn default_max_context_chars() -> usize {
    4000
}

fn default_memory_token_limit() -> usize {
    16000
}

fn default_temperature() -> f32 {
    0.7
}

fn default_max_tokens() -> usize {
    2000
}

fn default_session_timeout_secs() -> u64 {
    3600
}

impl Default for ChatConfig {
    fn default() -> Self {
        Self {
            retrieval_limit: default_retrieval_limit(),
            max_context_chars: default_max_context_chars(),
            memory_token_limit: default_memory_token_limit(),
            temperature: default_temperature(),
            max_tokens: default_max_tokens(),
            session_timeout_secs: default_session_timeout_secs(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssessmentConfig {
    /// Canonical path of the persisted score sheet (written and read here)
    #[serde(default = "default_results_path")]
    pub results_path: String,
}

fn default_results_path() -> String {
    "docs/riasec_scores.csv".to_string()
}

impl Default for AssessmentConfig {
    fn default() -> Self {
        Self {
            results_path: default_results_path(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub logging: LoggingConfig,
    pub embeddings: EmbeddingsConfig,
    pub llm: LlmConfig,
    #[serde(default)]
    pub corpus: CorpusConfig,
    #[serde(default)]
    pub chat: ChatConfig,
    #[serde(default)]
    pub assessment: AssessmentConfig,
}

impl AppConfig {
    /// Parse and validate a single TOML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> crate::Result<Self> {
        let content = std::fs::read_to_string(path).map_err(crate::CareerRagError::Io)?;

        let config: AppConfig =
            toml::from_str(&content).map_err(crate::CareerRagError::TomlParsing)?;

        config.validate()?;

        Ok(config)
    }

    /// Load configuration from the working directory.
    ///
    /// `config.toml` wins when present; the checked-in example file
    /// keeps a fresh checkout runnable against a local Ollama.
    pub fn load() -> crate::Result<Self> {
        if Path::new("config.toml").exists() {
            Self::from_file("config.toml")
        } else if Path::new("config.example.toml").exists() {
            // Logging may not be up yet, so this goes straight to stderr
            eprintln!("config.toml not found, using config.example.toml");
            Self::from_file("config.example.toml")
        } else {
            Err(crate::CareerRagError::ConfigError(
                "No config file found. Create config.toml in the working directory".to_string(),
            ))
        }
    }

    /// Check that endpoints parse as URLs before any client is built
    pub fn validate(&self) -> crate::Result<()> {
        url::Url::parse(&self.llm.llm_endpoint).map_err(|e| {
            crate::CareerRagError::ConfigError(format!(
                "Invalid LLM endpoint '{}': {e}",
                self.llm.llm_endpoint
            ))
        })?;

        if self.corpus.chunk_chars == 0 {
            return Err(crate::CareerRagError::ConfigError(
                "corpus.chunk_chars must be greater than zero".to_string(),
            ));
        }

        Ok(())
    }

    /// Get the configured log level
    pub fn logging_level(&self) -> &str {
        &self.logging.level
    }

    /// Get the embedding vector width
    pub fn embedding_dimension(&self) -> usize {
        self.embeddings.dimension
    }

    /// Get the embedding model name
    pub fn embedding_model(&self) -> &str {
        &self.embeddings.model
    }

    /// Get the LLM endpoint base URL
    pub fn llm_endpoint(&self) -> &str {
        &self.llm.llm_endpoint
    }

    /// Get the API key ("ollama" selects the local daemon)
    pub fn llm_key(&self) -> &str {
        &self.llm.llm_key
    }

    /// Get the chat model name
    pub fn llm_model(&self) -> &str {
        &self.llm.llm_model
    }

    /// Whether the key and endpoint select the local Ollama APIs.
    ///
    /// The key wins: `llm_key = "ollama"` always means a local daemon.
    /// Failing that, a loopback endpoint is taken as Ollama and any
    /// remote host as OpenAI-compatible.
    pub fn uses_ollama(&self) -> bool {
        if self.llm.llm_key == "ollama" {
            return true;
        }
        if self.llm.llm_endpoint.contains("api.openai.com") {
            return false;
        }
        self.llm.llm_endpoint.contains("localhost") || self.llm.llm_endpoint.contains("127.0.0.1")
    }

    /// Get the advisory documents directory
    pub fn docs_dir(&self) -> &str {
        &self.corpus.docs_dir
    }

    /// Get the maximum chunk size in characters
    pub fn chunk_chars(&self) -> usize {
        self.corpus.chunk_chars
    }

    /// Get the per-turn retrieval limit
    pub fn retrieval_limit(&self) -> usize {
        self.chat.retrieval_limit
    }

    /// Get the context character budget
    pub fn max_context_chars(&self) -> usize {
        self.chat.max_context_chars
    }

    /// Get the conversation memory token budget
    pub fn memory_token_limit(&self) -> usize {
        self.chat.memory_token_limit
    }

    /// Get the default sampling temperature
    pub fn temperature(&self) -> f32 {
        self.chat.temperature
    }

    /// Get the default response token cap
    pub fn max_tokens(&self) -> usize {
        self.chat.max_tokens
    }

    /// Get the session idle timeout in seconds
    pub fn session_timeout_secs(&self) -> u64 {
        self.chat.session_timeout_secs
    }

    /// Get the persisted results path
    pub fn results_path(&self) -> &str {
        &self.assessment.results_path
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            logging: LoggingConfig {
                level: "info".to_string(),
                backtrace: true,
            },
            embeddings: EmbeddingsConfig {
                dimension: 768,
                model: "nomic-embed-text".to_string(),
            },
            llm: LlmConfig {
                llm_endpoint: "http://127.0.0.1:11434".to_string(),
                llm_key: "ollama".to_string(),
                llm_model: "llama3.1:latest".to_string(),
            },
            corpus: CorpusConfig::default(),
            chat: ChatConfig::default(),
            assessment: AssessmentConfig::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MINIMAL: &str = r#"
[logging]
level = "info"
backtrace = false

[embeddings]
dimension = 768
model = "nomic-embed-text"

[llm]
llm_endpoint = "http://127.0.0.1:11434"
llm_key = "ollama"
"#;

    #[test]
    fn test_minimal_file_fills_defaults() {
        let config: AppConfig = toml::from_str(MINIMAL).unwrap();
        assert_eq!(config.llm_model(), "llama3.1:latest");
        assert_eq!(config.docs_dir(), "docs");
        assert_eq!(config.chunk_chars(), 1200);
        assert_eq!(config.retrieval_limit(), 4);
        assert_eq!(config.results_path(), "docs/riasec_scores.csv");
    }

    #[test]
    fn test_validate_rejects_bad_endpoint() {
        let mut config = AppConfig::default();
        config.llm.llm_endpoint = "not a url".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_zero_chunk_size() {
        let mut config = AppConfig::default();
        config.corpus.chunk_chars = 0;
        assert!(config.validate().is_err());
    }
}
