use std::collections::HashMap;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::domain::PlayerId;

pub type TallyMap = HashMap<PlayerId, Tally>;

/// Per-player counters accumulated from the match ledger
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Tally {
    pub wins: u32,
    pub games: u32,
    pub draws: u32,
}

/// One row of the ranked standings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StandingsEntry {
    pub id: PlayerId,
    pub name: String,
    pub wins: u32,
    pub games: u32,
    pub draws: u32,
}

/// Two adjacent-rank players matched for the next round
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pairing {
    pub id1: PlayerId,
    pub name1: String,
    pub id2: PlayerId,
    pub name2: String,
}

impl Pairing {
    pub fn between(first: &StandingsEntry, second: &StandingsEntry) -> Self {
        Self {
            id1: first.id,
            name1: first.name.clone(),
            id2: second.id,
            name2: second.name.clone(),
        }
    }

    pub fn contains(&self, player_id: PlayerId) -> bool {
        self.id1 == player_id || self.id2 == player_id
    }
}

/// Player sitting out the round when the field is odd
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bye {
    pub id: PlayerId,
    pub name: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundPairings {
    pub pairings: Vec<Pairing>,
    pub bye: Option<Bye>,
}

/// What to do with the lowest-ranked player when the field is odd
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OddPlayerPolicy {
    /// Leave the player out of the round without notice
    #[default]
    Drop,
    /// Report the player as having a bye (no score is credited)
    Bye,
}

/// How the calculator treats ledger entries that break match invariants
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LedgerPolicy {
    /// Fail on the first self-match or dangling player reference
    #[default]
    Reject,
    /// Exclude offending entries from every count and log a warning
    Skip,
}
