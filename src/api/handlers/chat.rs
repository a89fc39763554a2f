//! Chat session handlers

use axum::extract::Path;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::Serialize;
use tracing::error;
use tracing::info;

use crate::api::handlers::AppState;
use crate::api::session::SessionMessage;
use crate::api::types::ApiResponse;
use crate::api::types::ChatMessageRequest;
use crate::cli::output::truncate_str;
use crate::corpus::ScoredChunk;

/// Open a new chat session (POST /api/chat/sessions)
pub async fn create_chat_session(
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<ChatSessionResponse>>, StatusCode> {
    info!("POST /api/chat/sessions");

    let mut session = state
        .session_manager
        .create_chat_session(state.chat_engine.new_memory());
    let greeting = state.chat_engine.greeting();
    session.add_message("assistant", greeting.to_string());

    let response = ChatSessionResponse {
        session_id: session.session_id.clone(),
        greeting: greeting.to_string(),
    };
    state.session_manager.update_chat_session(session);

    info!("✅ Created chat session {}", response.session_id);
    Ok(Json(ApiResponse::success(response)))
}

/// Send a message and get the advisor's answer (POST /api/chat/sessions/:id/messages)
pub async fn post_chat_message(
    State(state): State<AppState>,
    Path(session_id): Path<String>,
    Json(req): Json<ChatMessageRequest>,
) -> Result<Json<ApiResponse<ChatMessageResponse>>, StatusCode> {
    let start_time = std::time::Instant::now();
    info!("POST /api/chat/sessions/{session_id}/messages");

    let message = req.message.trim();
    if message.is_empty() {
        return Ok(Json(ApiResponse::error("Message cannot be empty")));
    }

    let Some(mut session) = state.session_manager.get_chat_session(&session_id) else {
        return Ok(Json(ApiResponse::error(format!(
            "Chat session not found: {session_id}"
        ))));
    };

    match state.chat_engine.respond(&mut session.memory, message).await {
        Ok(reply) => {
            // The transcript keeps the raw message; the memory inside the
            // engine already holds the personalized form
            session.add_message("user", message.to_string());
            session.add_message("assistant", reply.answer.clone());
            state.session_manager.update_chat_session(session);

            info!(
                "✅ Answered with {} source(s) in {:?}",
                reply.sources.len(),
                start_time.elapsed()
            );
            Ok(Json(ApiResponse::success(ChatMessageResponse {
                answer: reply.answer,
                sources: reply.sources.iter().map(source_info).collect(),
            })))
        }
        Err(e) => {
            error!("Chat turn failed for session {session_id}: {e}");
            Ok(Json(ApiResponse::error(format!(
                "Failed to generate answer: {e}"
            ))))
        }
    }
}

/// Fetch the visible transcript (GET /api/chat/sessions/:id/history)
pub async fn get_chat_history(
    State(state): State<AppState>,
    Path(session_id): Path<String>,
) -> Result<Json<ApiResponse<ChatHistoryResponse>>, StatusCode> {
    info!("GET /api/chat/sessions/{session_id}/history");

    match state.session_manager.get_chat_session(&session_id) {
        Some(session) => Ok(Json(ApiResponse::success(ChatHistoryResponse {
            session_id: session.session_id.clone(),
            messages: session.transcript,
        }))),
        None => Ok(Json(ApiResponse::error(format!(
            "Chat session not found: {session_id}"
        )))),
    }
}

/// Close a chat session (DELETE /api/chat/sessions/:id)
pub async fn delete_chat_session(
    State(state): State<AppState>,
    Path(session_id): Path<String>,
) -> Result<Json<ApiResponse<String>>, StatusCode> {
    info!("DELETE /api/chat/sessions/{session_id}");

    if state.session_manager.delete_chat_session(&session_id) {
        Ok(Json(ApiResponse::success(format!(
            "Session {session_id} deleted"
        ))))
    } else {
        Ok(Json(ApiResponse::error(format!(
            "Chat session not found: {session_id}"
        ))))
    }
}

// ====== Wire types ======

/// A freshly opened session with its greeting
#[derive(Debug, Serialize)]
pub struct ChatSessionResponse {
    pub session_id: String,
    pub greeting: String,
}

/// The advisor's answer plus the sources it drew on
#[derive(Debug, Serialize)]
pub struct ChatMessageResponse {
    pub answer: String,
    pub sources: Vec<SourceInfo>,
}

/// A cited source, with the chunk text trimmed for display
#[derive(Debug, Serialize)]
pub struct SourceInfo {
    pub source: String,
    pub score: f32,
    pub preview: String,
}

/// Transcript of a session
#[derive(Debug, Serialize)]
pub struct ChatHistoryResponse {
    pub session_id: String,
    pub messages: Vec<SessionMessage>,
}

// ====== Helpers ======

fn source_info(chunk: &ScoredChunk) -> SourceInfo {
    SourceInfo {
        source: chunk.chunk.source.clone(),
        score: chunk.score,
        preview: truncate_str(&chunk.chunk.text, 200),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::corpus::DocumentChunk;

    #[test]
    fn test_source_info_trims_long_chunks() {
        let chunk = ScoredChunk {
            chunk: DocumentChunk {
                source: "careers.txt".to_string(),
                text: "x".repeat(500),
            },
            score: 0.87,
        };

        let info = source_info(&chunk);
        assert_eq!(info.source, "careers.txt");
        assert!(info.preview.chars().count() <= 203); // 200 chars plus ellipsis
        assert!(info.preview.ends_with("..."));
    }

    #[test]
    fn test_source_info_keeps_short_chunks() {
        let chunk = ScoredChunk {
            chunk: DocumentChunk {
                source: "guide.md".to_string(),
                text: "Nurses help people.".to_string(),
            },
            score: 0.5,
        };

        assert_eq!(source_info(&chunk).preview, "Nurses help people.");
    }
}
