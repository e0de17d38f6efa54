use thiserror::Error;

use super::models::PlayerId;

/// Validation failures raised by the tournament core and service layer
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TournamentError {
    /// Winner and loser are the same player
    #[error("Invalid match: player {player_id} cannot play against themselves")]
    InvalidMatch { player_id: PlayerId },

    /// Match references a player that is not registered
    #[error("Unknown player: {0}")]
    UnknownPlayer(PlayerId),

    /// Registration with a blank name
    #[error("Player name must not be empty")]
    EmptyName,
}
