use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use log::error;

use crate::domain::TournamentError;
use crate::services::tournament::TournamentService;
use crate::store::SqliteStore;

pub mod matches;
pub mod players;
pub mod standings;

pub struct AppState {
    pub service: TournamentService<SqliteStore>,
}

/// Map a failed operation to a status: domain errors are client errors
pub fn error_response(err: anyhow::Error) -> Response {
    match err.downcast_ref::<TournamentError>() {
        Some(TournamentError::UnknownPlayer(_)) => {
            (StatusCode::NOT_FOUND, err.to_string()).into_response()
        }
        Some(TournamentError::InvalidMatch { .. }) | Some(TournamentError::EmptyName) => {
            (StatusCode::BAD_REQUEST, err.to_string()).into_response()
        }
        None => {
            error!("Request failed: {:?}", err);
            (StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error").into_response()
        }
    }
}
