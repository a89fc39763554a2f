//! Saved result handlers

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use tracing::error;
use tracing::info;

use crate::api::handlers::AppState;
use crate::api::types::ApiResponse;
use crate::api::types::ResultsPayload;

/// Fetch the persisted assessment result (GET /api/results)
pub async fn get_results(
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<ResultsPayload>>, StatusCode> {
    info!("GET /api/results");

    match state.chat_engine.result_store().load() {
        Ok(Some(sheet)) => Ok(Json(ApiResponse::success(ResultsPayload::from_sheet(
            &sheet,
        )))),
        Ok(None) => Ok(Json(ApiResponse::error(
            "No assessment result saved yet. Take the assessment first.",
        ))),
        Err(e) => {
            error!("Failed to load saved results: {e}");
            Ok(Json(ApiResponse::error(format!(
                "Failed to load results: {e}"
            ))))
        }
    }
}
