use clap::{Parser, Subcommand};

use crate::domain::PlayerId;
use crate::swiss::OddPlayerPolicy;

#[derive(Parser, Debug)]
#[command(author, version, about = "Swiss-system tournament standings and pairings")]
pub struct Cli {
    /// How to treat the lowest-ranked player when the field is odd
    #[arg(long, value_enum, global = true, default_value_t = OddPlayerPolicy::Drop)]
    pub odd_policy: OddPlayerPolicy,

    /// Leave malformed ledger entries out of the standings instead of failing
    #[arg(long, global = true)]
    pub skip_invalid: bool,

    /// Command
    #[clap(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone, PartialEq)]
#[clap(rename_all = "kebab-case")]
pub enum Command {
    /// Drop and recreate the database schema
    Init,
    /// Register a new player
    Register {
        /// Player's full name (need not be unique)
        name: String,
    },
    /// Record the outcome of a single match
    Report {
        /// Id of the winning player
        winner: PlayerId,
        /// Id of the losing player
        loser: PlayerId,
        /// The match ended in a draw
        #[arg(long)]
        draw: bool,
    },
    /// Print players ranked by wins
    Standings {
        /// Also print the number of drawn matches
        #[arg(long)]
        draws: bool,
    },
    /// Print the pairings for the next round
    Pairings,
    /// Print the number of registered players
    Count,
    /// Remove all match records
    ResetMatches,
    /// Remove all players together with their matches
    ResetPlayers,
    /// Start the HTTP server
    Serve {
        /// Port number (optional, defaults to 3000)
        #[arg(short, long)]
        port: Option<u16>,
    },
}
