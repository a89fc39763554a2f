//! Route table for the /api tree

use axum::routing::delete;
use axum::routing::get;
use axum::routing::post;
use axum::Router;

use super::handlers;
use super::handlers::AppState;

/// Wire every endpoint to its handler
pub fn api_routes(state: AppState) -> Router {
    Router::new()
        // Liveness
        .route("/health", get(handlers::health))
        // Assessment endpoints
        .route("/assessment/start", post(handlers::start_assessment))
        .route("/assessment/:id", get(handlers::get_assessment))
        .route("/assessment/:id/answer", post(handlers::answer_assessment))
        .route("/assessment/:id/back", post(handlers::back_assessment))
        .route("/assessment/:id/submit", post(handlers::submit_assessment))
        // Saved results
        .route("/results", get(handlers::get_results))
        // Chat endpoints
        .route("/chat/sessions", post(handlers::create_chat_session))
        .route(
            "/chat/sessions/:id/messages",
            post(handlers::post_chat_message),
        )
        .route(
            "/chat/sessions/:id/history",
            get(handlers::get_chat_history),
        )
        .route("/chat/sessions/:id", delete(handlers::delete_chat_session))
        .with_state(state)
}
