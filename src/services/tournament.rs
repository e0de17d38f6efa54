use anyhow::Result;
use log::info;

use crate::config::settings::AppConfig;
use crate::domain::{MatchRecord, Player, PlayerId, TournamentError};
use crate::store::TournamentStore;
use crate::swiss::{self, RoundPairings, StandingsEntry};

/// Tournament operations over an explicit store and configuration
pub struct TournamentService<S: TournamentStore> {
    store: S,
    config: AppConfig,
}

impl<S: TournamentStore> TournamentService<S> {
    pub fn new(store: S, config: AppConfig) -> Self {
        Self { store, config }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    pub fn register_player(&self, name: &str) -> Result<Player> {
        let name = validate_name(name)?;
        let player = self.store.register_player(name)?;
        info!("Registered player {} ({})", player.id, player.name);
        Ok(player)
    }

    /// Append a result to the ledger after checking both players exist
    pub fn report_match(
        &self,
        winner_id: PlayerId,
        loser_id: PlayerId,
        is_draw: bool,
    ) -> Result<MatchRecord> {
        if winner_id == loser_id {
            return Err(TournamentError::InvalidMatch {
                player_id: winner_id,
            }
            .into());
        }
        self.ensure_registered(winner_id)?;
        self.ensure_registered(loser_id)?;

        let record = self.store.record_match(winner_id, loser_id, is_draw)?;
        info!(
            "Recorded match {}: {} vs {}{}",
            record.id,
            winner_id,
            loser_id,
            if is_draw { " (draw)" } else { "" }
        );
        Ok(record)
    }

    pub fn standings(&self) -> Result<Vec<StandingsEntry>> {
        let players = self.store.list_players()?;
        let matches = self.store.list_outcomes()?;

        let standings = swiss::calculate_standings(
            &players,
            &matches,
            self.config.standings.ledger_policy,
        )?;
        Ok(standings)
    }

    pub fn pairings(&self) -> Result<RoundPairings> {
        let standings = self.standings()?;
        let round = swiss::pair_round(&standings, self.config.pairing.odd_player_policy);
        info!(
            "Paired {} matches from {} players",
            round.pairings.len(),
            standings.len()
        );
        Ok(round)
    }

    pub fn count_players(&self) -> Result<usize> {
        self.store.count_players()
    }

    pub fn reset_matches(&self) -> Result<()> {
        self.store.reset_matches()?;
        info!("Cleared all matches");
        Ok(())
    }

    pub fn reset_players(&self) -> Result<()> {
        self.store.reset_players()?;
        info!("Cleared all players and matches");
        Ok(())
    }

    fn ensure_registered(&self, player_id: PlayerId) -> Result<()> {
        match self.store.find_player(player_id)? {
            Some(_) => Ok(()),
            None => Err(TournamentError::UnknownPlayer(player_id).into()),
        }
    }
}

fn validate_name(name: &str) -> Result<&str, TournamentError> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        Err(TournamentError::EmptyName)
    } else {
        Ok(trimmed)
    }
}
