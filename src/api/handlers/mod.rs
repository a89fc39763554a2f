//! Request handlers behind the /api routes.

use std::sync::Arc;

use axum::extract::State;
use axum::Json;

use crate::api::session::SessionManager;
use crate::api::types::ApiResponse;
use crate::api::types::HealthResponse;
use crate::chat::ChatEngine;

pub mod assessment;
pub mod chat;
pub mod results;

pub use assessment::*;
pub use chat::*;
pub use results::*;

/// Services every handler gets a cheap clone of
#[derive(Clone)]
pub struct AppState {
    pub chat_engine: Arc<ChatEngine>,
    pub session_manager: Arc<SessionManager>,
}

/// Liveness plus a glance at what the advisor has loaded.
pub async fn health(State(state): State<AppState>) -> Json<ApiResponse<HealthResponse>> {
    Json(ApiResponse::success(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        corpus_chunks: state.chat_engine.index_size(),
    }))
}
