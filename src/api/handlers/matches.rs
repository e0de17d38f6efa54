use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Json},
};
use std::sync::Arc;

use crate::api::models::ReportMatchRequest;
use super::{error_response, AppState};

pub async fn report_match(
    State(state): State<Arc<AppState>>,
    Json(request): Json<ReportMatchRequest>,
) -> impl IntoResponse {
    let result = state
        .service
        .report_match(request.winner_id, request.loser_id, request.is_draw);

    match result {
        Ok(record) => (StatusCode::CREATED, Json(record)).into_response(),
        Err(e) => error_response(e),
    }
}

pub async fn clear_matches(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    match state.service.reset_matches() {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(e) => error_response(e),
    }
}
