use thiserror::Error;

#[derive(Error, Debug)]
pub enum CareerRagError {
    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("HTTP error: {0}")]
    HttpError(String),

    #[error("Embedding error: {0}")]
    EmbeddingError(String),

    #[error("LLM error: {0}")]
    LlmError(String),

    #[error("Corpus error: {0}")]
    CorpusError(String),

    #[error("Results file format error: {0}")]
    ResultsFormat(String),

    #[error("Session not found: {0}")]
    SessionNotFound(String),

    #[error("Invalid answer value: {0} (expected an integer in 1-5)")]
    InvalidAnswer(i64),

    #[error("Assessment incomplete: {0} question(s) unanswered")]
    IncompleteAssessment(usize),

    #[error("JSON error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("TOML parse error: {0}")]
    TomlParsing(#[from] toml::de::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("{0}")]
    Custom(String),
}

pub type Result<T> = std::result::Result<T, CareerRagError>;
