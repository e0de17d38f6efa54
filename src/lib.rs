pub mod api;
pub mod cli;
pub mod config;
pub mod database;
pub mod domain;
pub mod report;
pub mod services;
pub mod store;
pub mod swiss;

use anyhow::Result;
use clap::Parser;
use cli::Cli;

use crate::config::settings::AppConfig;
use crate::domain::PlayerId;
use crate::services::server::ServerService;
use crate::services::tournament::TournamentService;
use crate::store::SqliteStore;
use crate::swiss::LedgerPolicy;

pub fn interpret() -> Cli {
    Cli::parse()
}

pub fn build_config(cli: &Cli) -> AppConfig {
    let ledger_policy = if cli.skip_invalid {
        LedgerPolicy::Skip
    } else {
        LedgerPolicy::Reject
    };

    AppConfig::new()
        .with_odd_player_policy(cli.odd_policy)
        .with_ledger_policy(ledger_policy)
}

fn open_service(config: AppConfig) -> Result<TournamentService<SqliteStore>> {
    let store = SqliteStore::open(&config.database.path)?;
    Ok(TournamentService::new(store, config))
}

pub fn handle_init(config: AppConfig) -> Result<()> {
    let store = SqliteStore::open(&config.database.path)?;
    store.reset_schema()
}

pub fn handle_register(config: AppConfig, name: &str) -> Result<()> {
    let player = open_service(config)?.register_player(name)?;
    println!("Registered {} with id {}", player.name, player.id);
    Ok(())
}

pub fn handle_report(config: AppConfig, winner: PlayerId, loser: PlayerId, draw: bool) -> Result<()> {
    let record = open_service(config)?.report_match(winner, loser, draw)?;
    println!("Recorded match {}", record.id);
    Ok(())
}

pub fn handle_standings(config: AppConfig, with_draws: bool) -> Result<()> {
    let standings = open_service(config)?.standings()?;
    println!("{}", report::format_standings(&standings, with_draws));
    Ok(())
}

pub fn handle_pairings(config: AppConfig) -> Result<()> {
    let round = open_service(config)?.pairings()?;
    println!("{}", report::format_pairings(&round));
    Ok(())
}

pub fn handle_count(config: AppConfig) -> Result<()> {
    let count = open_service(config)?.count_players()?;
    println!("{count}");
    Ok(())
}

pub fn handle_reset_matches(config: AppConfig) -> Result<()> {
    open_service(config)?.reset_matches()
}

pub fn handle_reset_players(config: AppConfig) -> Result<()> {
    open_service(config)?.reset_players()
}

pub fn handle_serve(config: AppConfig, port: Option<u16>) -> Result<()> {
    let port = port.unwrap_or(config.server.port);
    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(async {
        let service = ServerService::new(port, config);
        service.run().await
    })
}
