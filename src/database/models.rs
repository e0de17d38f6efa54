use chrono::NaiveDateTime;

use crate::domain::{Match, MatchRecord, Player};

#[derive(Debug, Clone)]
pub struct PlayerRow {
    pub id: i32,
    pub name: String,
    pub created_at: Option<NaiveDateTime>,
}

impl From<PlayerRow> for Player {
    fn from(row: PlayerRow) -> Self {
        Player {
            id: row.id,
            name: row.name,
        }
    }
}

#[derive(Debug, Clone)]
pub struct MatchRow {
    pub id: i32,
    pub winner_id: i32,
    pub loser_id: i32,
    pub is_draw: bool,
    pub created_at: Option<NaiveDateTime>,
}

impl From<MatchRow> for MatchRecord {
    fn from(row: MatchRow) -> Self {
        MatchRecord {
            id: row.id,
            outcome: Match {
                winner_id: row.winner_id,
                loser_id: row.loser_id,
                is_draw: row.is_draw,
            },
        }
    }
}
