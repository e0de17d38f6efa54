use crate::swiss::{LedgerPolicy, OddPlayerPolicy};

const DEFAULT_DATABASE_PATH: &str = "swiss_tournament.db";
const DATABASE_PATH_VAR: &str = "DATABASE_PATH";

#[derive(Debug, Clone)]
pub struct DatabaseSettings {
    pub path: String,
}

impl Default for DatabaseSettings {
    fn default() -> Self {
        Self {
            path: DEFAULT_DATABASE_PATH.to_string(),
        }
    }
}

impl DatabaseSettings {
    pub fn from_env() -> Self {
        let path = std::env::var(DATABASE_PATH_VAR)
            .unwrap_or_else(|_| DEFAULT_DATABASE_PATH.to_string());
        Self { path }
    }
}

#[derive(Debug, Clone, Default)]
pub struct StandingsSettings {
    pub ledger_policy: LedgerPolicy,
}

#[derive(Debug, Clone, Default)]
pub struct PairingSettings {
    pub odd_player_policy: OddPlayerPolicy,
}

#[derive(Debug, Clone)]
pub struct ServerSettings {
    pub port: u16,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self { port: 3000 }
    }
}

#[derive(Debug, Clone, Default)]
pub struct AppConfig {
    pub database: DatabaseSettings,
    pub standings: StandingsSettings,
    pub pairing: PairingSettings,
    pub server: ServerSettings,
}

impl AppConfig {
    /// Defaults with the database path taken from `DATABASE_PATH` when set
    pub fn new() -> Self {
        Self {
            database: DatabaseSettings::from_env(),
            ..Default::default()
        }
    }

    pub fn with_odd_player_policy(mut self, policy: OddPlayerPolicy) -> Self {
        self.pairing.odd_player_policy = policy;
        self
    }

    pub fn with_ledger_policy(mut self, policy: LedgerPolicy) -> Self {
        self.standings.ledger_policy = policy;
        self
    }
}
