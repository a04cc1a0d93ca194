use anyhow::Result;

use swiss_tournament::cli::{Cli, Command};
use swiss_tournament::{
    handle_clear_matches, handle_clear_players, handle_completions, handle_count, handle_init,
    handle_pairings, handle_register, handle_report, handle_reset, handle_standings, interpret,
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
    execute_command(&cli)
}

fn execute_command(cli: &Cli) -> Result<()> {
    let database = cli.database.as_deref();
    match &cli.command {
        Command::Init => handle_init(database),
        Command::Reset => handle_reset(database),
        Command::Register { name } => handle_register(database, name),
        Command::Count => handle_count(database),
        Command::Report { winner, loser } => handle_report(database, *winner, *loser),
        Command::Standings { json } => handle_standings(database, *json),
        Command::Pairings { json } => handle_pairings(database, *json),
        Command::ClearMatches => handle_clear_matches(database),
        Command::ClearPlayers => handle_clear_players(database),
        Command::Completions { shell } => handle_completions(*shell),
    }
}
