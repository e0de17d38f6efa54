use serde::{Deserialize, Serialize};

use crate::domain::PlayerId;
use crate::swiss::{Bye, Pairing, StandingsEntry};

#[derive(Debug, Deserialize)]
pub struct RegisterPlayerRequest {
    pub name: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportMatchRequest {
    pub winner_id: PlayerId,
    pub loser_id: PlayerId,
    #[serde(default)]
    pub is_draw: bool,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StandingsItem {
    pub rank: usize,
    pub player_id: PlayerId,
    pub name: String,
    pub wins: u32,
    pub games: u32,
    pub draws: u32,
}

impl StandingsItem {
    pub fn ranked(rank: usize, entry: StandingsEntry) -> Self {
        Self {
            rank,
            player_id: entry.id,
            name: entry.name,
            wins: entry.wins,
            games: entry.games,
            draws: entry.draws,
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StandingsResponse {
    pub items: Vec<StandingsItem>,
    pub total: usize,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PairingsResponse {
    pub pairings: Vec<Pairing>,
    pub bye: Option<Bye>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct CountResponse {
    pub count: usize,
}
