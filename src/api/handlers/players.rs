use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Json},
};
use std::sync::Arc;

use crate::api::models::{CountResponse, RegisterPlayerRequest};
use super::{error_response, AppState};
use crate::store::TournamentStore;

pub async fn get_players(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    match state.service.store().list_players() {
        Ok(players) => Json(players).into_response(),
        Err(e) => error_response(e),
    }
}

pub async fn register_player(
    State(state): State<Arc<AppState>>,
    Json(request): Json<RegisterPlayerRequest>,
) -> impl IntoResponse {
    match state.service.register_player(&request.name) {
        Ok(player) => (StatusCode::CREATED, Json(player)).into_response(),
        Err(e) => error_response(e),
    }
}

pub async fn count_players(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    match state.service.count_players() {
        Ok(count) => Json(CountResponse { count }).into_response(),
        Err(e) => error_response(e),
    }
}

pub async fn clear_players(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    match state.service.reset_players() {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(e) => error_response(e),
    }
}
