pub mod memory;
pub mod sqlite;

use anyhow::Result;

use crate::domain::{Match, MatchRecord, Player, PlayerId};

pub use memory::MemoryStore;
pub use sqlite::SqliteStore;

/// Persistence for players and the match ledger.
///
/// Each call is its own unit of work; nothing is atomic across calls.
pub trait TournamentStore: Send + Sync {
    /// All registered players in ascending id order
    fn list_players(&self) -> Result<Vec<Player>>;

    /// The full match ledger in insertion order
    fn list_matches(&self) -> Result<Vec<MatchRecord>>;

    /// Register a player; the store assigns the next id
    fn register_player(&self, name: &str) -> Result<Player>;

    fn record_match(&self, winner_id: PlayerId, loser_id: PlayerId, is_draw: bool)
        -> Result<MatchRecord>;

    /// Clear the ledger and restart match ids at 1
    fn reset_matches(&self) -> Result<()>;

    /// Clear every player together with all matches and restart ids at 1
    fn reset_players(&self) -> Result<()>;

    fn count_players(&self) -> Result<usize> {
        Ok(self.list_players()?.len())
    }

    fn find_player(&self, player_id: PlayerId) -> Result<Option<Player>> {
        let players = self.list_players()?;
        Ok(players.into_iter().find(|p| p.id == player_id))
    }

    /// Ledger outcomes without their ids, as consumed by the standings calculator
    fn list_outcomes(&self) -> Result<Vec<Match>> {
        let records = self.list_matches()?;
        Ok(records.into_iter().map(|r| r.outcome).collect())
    }
}
