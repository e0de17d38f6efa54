use anyhow::Result;

use swiss_tournament::cli::Command;
use swiss_tournament::config::settings::AppConfig;
use swiss_tournament::{
    build_config, handle_count, handle_init, handle_pairings, handle_register,
    handle_report, handle_reset_matches, handle_reset_players, handle_serve,
    handle_standings, interpret,
};

fn main() {
    setup_logging();
    parse_and_execute().unwrap_or_else(|e| {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    });
}

fn setup_logging() {
    sensible_env_logger::init!();
}

fn parse_and_execute() -> Result<()> {
    let cli = interpret();
    let config = build_config(&cli);
    execute_command(&cli.command, config)
}

fn execute_command(command: &Command, config: AppConfig) -> Result<()> {
    match command {
        Command::Init => handle_init(config),
        Command::Register { name } => handle_register(config, name),
        Command::Report { winner, loser, draw } => handle_report(config, *winner, *loser, *draw),
        Command::Standings { draws } => handle_standings(config, *draws),
        Command::Pairings => handle_pairings(config),
        Command::Count => handle_count(config),
        Command::ResetMatches => handle_reset_matches(config),
        Command::ResetPlayers => handle_reset_players(config),
        Command::Serve { port } => handle_serve(config, *port),
    }
}
