//! Assessment session handlers

use axum::extract::Path;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::Serialize;
use tracing::error;
use tracing::info;

use crate::api::handlers::AppState;
use crate::api::session::AssessmentEntry;
use crate::api::types::AnswerRequest;
use crate::api::types::ApiResponse;
use crate::api::types::ResultsPayload;
use crate::api::types::StartAssessmentRequest;
use crate::assessment::QuestionBank;

/// Start a new assessment session (POST /api/assessment/start)
pub async fn start_assessment(
    State(state): State<AppState>,
    Json(req): Json<StartAssessmentRequest>,
) -> Result<Json<ApiResponse<AssessmentState>>, StatusCode> {
    info!("POST /api/assessment/start - bank: {}", req.bank);

    let Some(bank) = QuestionBank::parse(&req.bank) else {
        return Ok(Json(ApiResponse::error(format!(
            "Unknown question bank '{}'. Use 'full' or 'short'.",
            req.bank
        ))));
    };

    let entry = state.session_manager.create_assessment_session(bank);
    info!("✅ Started {bank} assessment session {}", entry.session_id);

    Ok(Json(ApiResponse::success(assessment_state(&entry))))
}

/// Show the current statement of a session (GET /api/assessment/:id)
pub async fn get_assessment(
    State(state): State<AppState>,
    Path(session_id): Path<String>,
) -> Result<Json<ApiResponse<AssessmentState>>, StatusCode> {
    info!("GET /api/assessment/{session_id}");

    match state.session_manager.get_assessment_session(&session_id) {
        Some(entry) => Ok(Json(ApiResponse::success(assessment_state(&entry)))),
        None => Ok(Json(ApiResponse::error(format!(
            "Assessment session not found: {session_id}"
        )))),
    }
}

/// Record an answer and advance (POST /api/assessment/:id/answer)
pub async fn answer_assessment(
    State(state): State<AppState>,
    Path(session_id): Path<String>,
    Json(req): Json<AnswerRequest>,
) -> Result<Json<ApiResponse<AssessmentState>>, StatusCode> {
    info!(
        "POST /api/assessment/{session_id}/answer - value: {}",
        req.value
    );

    let Some(mut entry) = state.session_manager.get_assessment_session(&session_id) else {
        return Ok(Json(ApiResponse::error(format!(
            "Assessment session not found: {session_id}"
        ))));
    };

    if let Err(e) = entry.session.record_answer(req.value) {
        return Ok(Json(ApiResponse::error(e.to_string())));
    }

    let response = assessment_state(&entry);
    state.session_manager.update_assessment_session(entry);
    Ok(Json(ApiResponse::success(response)))
}

/// Step back to the previous statement (POST /api/assessment/:id/back)
pub async fn back_assessment(
    State(state): State<AppState>,
    Path(session_id): Path<String>,
) -> Result<Json<ApiResponse<AssessmentState>>, StatusCode> {
    info!("POST /api/assessment/{session_id}/back");

    let Some(mut entry) = state.session_manager.get_assessment_session(&session_id) else {
        return Ok(Json(ApiResponse::error(format!(
            "Assessment session not found: {session_id}"
        ))));
    };

    // At the first statement this is a no-op; the caller just sees the
    // unchanged state
    entry.session.back();

    let response = assessment_state(&entry);
    state.session_manager.update_assessment_session(entry);
    Ok(Json(ApiResponse::success(response)))
}

/// Score a completed session and persist the result (POST /api/assessment/:id/submit)
pub async fn submit_assessment(
    State(state): State<AppState>,
    Path(session_id): Path<String>,
) -> Result<Json<ApiResponse<ResultsPayload>>, StatusCode> {
    let start_time = std::time::Instant::now();
    info!("POST /api/assessment/{session_id}/submit");

    let Some(entry) = state.session_manager.get_assessment_session(&session_id) else {
        return Ok(Json(ApiResponse::error(format!(
            "Assessment session not found: {session_id}"
        ))));
    };

    let sheet = match entry.session.finalize() {
        Ok(sheet) => sheet,
        Err(e) => {
            return Ok(Json(ApiResponse::error(e.to_string())));
        }
    };

    if let Err(e) = state.chat_engine.result_store().save(&sheet) {
        error!("Failed to save assessment result: {e}");
        return Ok(Json(ApiResponse::error(format!(
            "Failed to save results: {e}"
        ))));
    }

    state.session_manager.delete_assessment_session(&session_id);
    info!(
        "✅ Assessment {session_id} scored (dominant: {}) in {:?}",
        sheet.dominant(),
        start_time.elapsed()
    );

    Ok(Json(ApiResponse::success(ResultsPayload::from_sheet(
        &sheet,
    ))))
}

// ====== Wire types ======

/// Where an assessment session currently stands
#[derive(Debug, Serialize)]
pub struct AssessmentState {
    pub session_id: String,
    pub bank: String,
    pub index: usize,
    pub total: usize,
    pub statement: String,
    pub previous_answer: Option<u8>,
    pub answered: usize,
    pub complete: bool,
}

// ====== Helpers ======

fn assessment_state(entry: &AssessmentEntry) -> AssessmentState {
    AssessmentState {
        session_id: entry.session_id.clone(),
        bank: entry.session.bank().to_string(),
        index: entry.session.current_index(),
        total: entry.session.total(),
        statement: entry.session.current_statement().to_string(),
        previous_answer: entry.session.current_answer(),
        answered: entry.session.answered_count(),
        complete: entry.session.is_complete(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_state_for_fresh_session() {
        let entry = AssessmentEntry::new(QuestionBank::Short);
        let state = assessment_state(&entry);

        assert_eq!(state.index, 0);
        assert_eq!(state.total, 12);
        assert_eq!(state.answered, 0);
        assert!(!state.complete);
        assert!(state.previous_answer.is_none());
        assert_eq!(state.statement, "I like working with tools or machines.");
    }

    #[test]
    fn test_state_tracks_progress_and_completion() {
        let mut entry = AssessmentEntry::new(QuestionBank::Short);
        for _ in 0..12 {
            entry.session.record_answer(4).unwrap();
        }

        let state = assessment_state(&entry);
        assert!(state.complete);
        assert_eq!(state.answered, 12);
        assert_eq!(state.index, 11);
        assert_eq!(state.previous_answer, Some(4));
    }
}
