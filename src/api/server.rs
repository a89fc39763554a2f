//! Axum server wiring: shared state, middleware stack, listener.

use std::sync::Arc;
use std::time::Duration;

use axum::error_handling::HandleErrorLayer;
use axum::http::StatusCode;
use axum::BoxError;
use axum::Router;
use tower::timeout::TimeoutLayer;
use tower::ServiceBuilder;
use tower_http::compression::CompressionLayer;
use tower_http::cors::Any;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::api::handlers::AppState;
use crate::api::routes;
use crate::api::session::SessionManager;
use crate::chat::ChatEngine;
use crate::config::AppConfig;
use crate::Result;

/// One chat turn can run several LLM calls back to back, each with its
/// own 120s client timeout. Anything beyond this is a stuck backend.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(300);

async fn handle_timeout(err: BoxError) -> (StatusCode, String) {
    if err.is::<tower::timeout::error::Elapsed>() {
        (
            StatusCode::REQUEST_TIMEOUT,
            "Request took too long".to_string(),
        )
    } else {
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            format!("Unhandled error: {err}"),
        )
    }
}

/// Bind and serve the REST API until the process is stopped.
pub async fn serve_api(config: &AppConfig, host: String, port: u16, enable_cors: bool) -> Result<()> {
    info!("🚀 Starting career advisor API...");

    // Initialize services; this loads and embeds the corpus up front
    let chat_engine = Arc::new(ChatEngine::from_config(config).await?);
    let session_manager = Arc::new(SessionManager::new(config.session_timeout_secs()));

    let state = AppState {
        chat_engine,
        session_manager,
    };

    // Tracing, timeout and compression cover the whole /api tree
    let mut app = Router::new()
        .nest("/api", routes::api_routes(state))
        .layer(TraceLayer::new_for_http())
        .layer(
            ServiceBuilder::new()
                .layer(HandleErrorLayer::new(handle_timeout))
                .layer(TimeoutLayer::new(REQUEST_TIMEOUT)),
        )
        .layer(CompressionLayer::new());

    if enable_cors {
        info!("✅ CORS: all origins allowed");
        app = app.layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        );
    }

    let addr = format!("{host}:{port}");
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    info!("🌐 Listening on http://{addr}");
    info!("📋 API root: http://{addr}/api");
    info!("");
    info!("Endpoints:");
    info!("  GET    /api/health                    - Health check");
    info!("  POST   /api/assessment/start          - Start an assessment");
    info!("  GET    /api/assessment/:id            - Current statement");
    info!("  POST   /api/assessment/:id/answer     - Record an answer");
    info!("  POST   /api/assessment/:id/back       - Step back one statement");
    info!("  POST   /api/assessment/:id/submit     - Score and save the result");
    info!("  GET    /api/results                   - Saved RIASEC scores");
    info!("  POST   /api/chat/sessions             - Open a chat session");
    info!("  POST   /api/chat/sessions/:id/messages - Ask the advisor");
    info!("  GET    /api/chat/sessions/:id/history - Session transcript");
    info!("  DELETE /api/chat/sessions/:id         - Close a session");

    axum::serve(listener, app).await?;

    Ok(())
}
