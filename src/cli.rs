use clap::{Parser, Subcommand};
use clap_complete::Shell;

#[derive(Parser, Debug)]
#[command(name = "swiss-tournament", author, version, about = "Swiss-system tournament manager")]
pub struct Cli {
    /// SQLite database file (defaults to $DATABASE_PATH, then swiss_tournament.db)
    #[arg(short, long, global = true)]
    pub database: Option<String>,

    /// Command
    #[clap(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone, PartialEq)]
#[clap(rename_all = "kebab-case")]
pub enum Command {
    /// Create the database schema if it does not exist
    Init,
    /// Drop all tournament data and recreate the schema
    Reset,
    /// Register a new player
    Register {
        /// Player's full name; markup is stripped
        name: String,
    },
    /// Print the number of registered players
    Count,
    /// Record the result of a single match
    Report {
        /// Id of the player who won
        winner: i64,
        /// Id of the player who lost
        loser: i64,
    },
    /// Print players ranked by wins
    Standings {
        /// Print as JSON
        #[arg(long)]
        json: bool,
    },
    /// Print pairings for the next round
    Pairings {
        /// Print as JSON
        #[arg(long)]
        json: bool,
    },
    /// Remove all match records
    ClearMatches,
    /// Remove all players (clear matches first)
    ClearPlayers,
    /// Print shell completions
    Completions {
        #[arg(value_enum)]
        shell: Shell,
    },
}
