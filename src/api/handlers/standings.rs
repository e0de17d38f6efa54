use axum::{
    extract::State,
    response::{IntoResponse, Json},
};
use std::sync::Arc;

use crate::api::models::{PairingsResponse, StandingsItem, StandingsResponse};
use super::{error_response, AppState};

pub async fn get_standings(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    let standings = match state.service.standings() {
        Ok(standings) => standings,
        Err(e) => return error_response(e),
    };

    let total = standings.len();
    let items = standings
        .into_iter()
        .enumerate()
        .map(|(i, entry)| StandingsItem::ranked(i + 1, entry))
        .collect();

    Json(StandingsResponse { items, total }).into_response()
}

pub async fn get_pairings(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    match state.service.pairings() {
        Ok(round) => Json(PairingsResponse {
            pairings: round.pairings,
            bye: round.bye,
        })
        .into_response(),
        Err(e) => error_response(e),
    }
}
