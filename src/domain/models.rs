use serde::{Deserialize, Serialize};

pub type PlayerId = i32;
pub type MatchId = i32;

/// Registered tournament participant
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    pub id: PlayerId,
    pub name: String,
}

impl Player {
    pub fn new(id: PlayerId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }
}

/// Completed match outcome as seen by the standings calculator.
///
/// For a draw the two ids only label the participants; neither side is
/// credited with a win.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Match {
    pub winner_id: PlayerId,
    pub loser_id: PlayerId,
    pub is_draw: bool,
}

impl Match {
    pub fn won(winner_id: PlayerId, loser_id: PlayerId) -> Self {
        Self {
            winner_id,
            loser_id,
            is_draw: false,
        }
    }

    pub fn drawn(first_id: PlayerId, second_id: PlayerId) -> Self {
        Self {
            winner_id: first_id,
            loser_id: second_id,
            is_draw: true,
        }
    }

    pub fn involves(&self, player_id: PlayerId) -> bool {
        self.winner_id == player_id || self.loser_id == player_id
    }

    pub fn is_win_for(&self, player_id: PlayerId) -> bool {
        !self.is_draw && self.winner_id == player_id
    }
}

/// Match as persisted in the ledger, with its store-assigned id
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchRecord {
    pub id: MatchId,
    #[serde(flatten)]
    pub outcome: Match,
}
