//! Wire types shared by every endpoint

use serde::Deserialize;
use serde::Serialize;

/// The envelope every endpoint answers with
#[derive(Debug, Serialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    pub data: Option<T>,
    pub error: Option<String>,
}

impl<T> ApiResponse<T> {
    pub fn success(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(message.into()),
        }
    }
}

/// Payload of GET /api/health
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    /// How many corpus chunks the advisor currently has indexed
    pub corpus_chunks: usize,
}

/// Start a new assessment session
#[derive(Debug, Deserialize)]
pub struct StartAssessmentRequest {
    #[serde(default = "default_bank")]
    pub bank: String,
}

fn default_bank() -> String {
    "full".to_string()
}

/// Record a Likert answer for the current statement
#[derive(Debug, Deserialize)]
pub struct AnswerRequest {
    pub value: i64,
}

/// Send one chat message to a session
#[derive(Debug, Deserialize)]
pub struct ChatMessageRequest {
    pub message: String,
}

/// One RIASEC type with its score
#[derive(Debug, Serialize)]
pub struct TypeScore {
    #[serde(rename = "type")]
    pub riasec_type: String,
    pub score: u32,
}

/// A complete scored result
#[derive(Debug, Serialize)]
pub struct ResultsPayload {
    pub scores: Vec<TypeScore>,
    pub total: u32,
    pub dominant: String,
}

impl ResultsPayload {
    pub fn from_sheet(sheet: &crate::assessment::ScoreSheet) -> Self {
        Self {
            scores: sheet
                .entries()
                .map(|(riasec_type, score)| TypeScore {
                    riasec_type: riasec_type.label().to_string(),
                    score,
                })
                .collect(),
            total: sheet.total(),
            dominant: sheet.dominant().label().to_string(),
        }
    }
}
