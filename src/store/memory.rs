use std::sync::{Mutex, MutexGuard};

use anyhow::{anyhow, bail, Result};

use crate::domain::{Match, MatchId, MatchRecord, Player, PlayerId, TournamentError};

use super::TournamentStore;

#[derive(Debug, Default)]
struct Ledger {
    players: Vec<Player>,
    matches: Vec<MatchRecord>,
    next_player_id: PlayerId,
    next_match_id: MatchId,
}

impl Ledger {
    fn new() -> Self {
        Self {
            next_player_id: 1,
            next_match_id: 1,
            ..Default::default()
        }
    }

    fn is_registered(&self, player_id: PlayerId) -> bool {
        self.players.iter().any(|p| p.id == player_id)
    }
}

/// In-process store with the same constraints as the SQLite schema
#[derive(Debug)]
pub struct MemoryStore {
    ledger: Mutex<Ledger>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self {
            ledger: Mutex::new(Ledger::new()),
        }
    }

    fn lock(&self) -> Result<MutexGuard<'_, Ledger>> {
        self.ledger
            .lock()
            .map_err(|_| anyhow!("Memory store lock poisoned"))
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl TournamentStore for MemoryStore {
    fn list_players(&self) -> Result<Vec<Player>> {
        Ok(self.lock()?.players.clone())
    }

    fn list_matches(&self) -> Result<Vec<MatchRecord>> {
        Ok(self.lock()?.matches.clone())
    }

    fn register_player(&self, name: &str) -> Result<Player> {
        let mut ledger = self.lock()?;
        let player = Player::new(ledger.next_player_id, name);

        ledger.next_player_id += 1;
        ledger.players.push(player.clone());
        Ok(player)
    }

    fn record_match(
        &self,
        winner_id: PlayerId,
        loser_id: PlayerId,
        is_draw: bool,
    ) -> Result<MatchRecord> {
        let mut ledger = self.lock()?;

        if winner_id == loser_id {
            bail!(TournamentError::InvalidMatch {
                player_id: winner_id
            });
        }
        for player_id in [winner_id, loser_id] {
            if !ledger.is_registered(player_id) {
                bail!(TournamentError::UnknownPlayer(player_id));
            }
        }

        let record = MatchRecord {
            id: ledger.next_match_id,
            outcome: Match {
                winner_id,
                loser_id,
                is_draw,
            },
        };
        ledger.next_match_id += 1;
        ledger.matches.push(record);
        Ok(record)
    }

    fn reset_matches(&self) -> Result<()> {
        let mut ledger = self.lock()?;
        ledger.matches.clear();
        ledger.next_match_id = 1;
        Ok(())
    }

    fn reset_players(&self) -> Result<()> {
        *self.lock()? = Ledger::new();
        Ok(())
    }
}
