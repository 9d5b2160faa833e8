use clap::{Parser, Subcommand, ValueEnum};
use clap_complete::Shell;

use crate::swiss::PlayerId;

#[derive(Parser, Debug)]
#[command(name = "swiss-tournament", author, version, about = "Swiss-system tournament tracker")]
pub struct Cli {
    /// Path to the SQLite database (overrides TOURNAMENT_DATABASE_PATH)
    #[arg(short, long, global = true)]
    pub database: Option<String>,

    /// Output format
    #[arg(short, long, global = true, value_enum, default_value_t = OutputFormat::Table)]
    pub format: OutputFormat,

    /// Command
    #[clap(subcommand)]
    pub command: Command,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Table,
    Json,
}

#[derive(Subcommand, Debug, Clone, PartialEq)]
#[clap(rename_all = "kebab-case")]
pub enum Command {
    /// Drop all data and recreate the schema
    Init,
    /// Register a new player
    Register {
        /// Player's full name (need not be unique)
        name: String,
    },
    /// Record the outcome of a match
    Report {
        /// Id of the player who won
        winner: PlayerId,
        /// Id of the player who lost
        loser: PlayerId,
    },
    /// Print the number of registered players
    Count,
    /// Show players ranked by wins
    Standings,
    /// Show pairings for the next round
    Pairings,
    /// List registered players
    Players,
    /// List reported matches
    Matches,
    /// Delete all match records
    ClearMatches,
    /// Delete all players and their matches
    ClearPlayers,
    /// Generate shell completions
    Completions {
        #[arg(value_enum)]
        shell: Shell,
    },
}
