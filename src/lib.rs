pub mod cli;
pub mod config;
pub mod database;
pub mod domain;
pub mod errors;
pub mod pairing;
pub mod registration;
pub mod repository;
pub mod services;
pub mod standings;

use anyhow::Result;
use clap::{CommandFactory, Parser};
use clap_complete::Shell;
use cli::Cli;

use crate::config::settings::AppConfig;
use crate::domain::PlayerId;
use crate::repository::SqliteRepository;
use crate::services::output;
use crate::services::tournament::TournamentService;

pub use crate::errors::TournamentError;
pub use crate::pairing::{pair, swiss_pairings};
pub use crate::registration::{record_match, register_player, sanitize_name};
pub use crate::standings::standings;

pub fn interpret() -> Cli {
    Cli::parse()
}

fn open_service(database: Option<&str>) -> Result<TournamentService<SqliteRepository>> {
    let config = AppConfig::new().with_database_path(database);
    let repository = SqliteRepository::open(&config.database)?;
    Ok(TournamentService::new(repository))
}

pub fn handle_init(database: Option<&str>) -> Result<()> {
    open_service(database)?;
    println!("Database ready");
    Ok(())
}

pub fn handle_reset(database: Option<&str>) -> Result<()> {
    let service = open_service(database)?;
    service.repository().reset()?;
    println!("Database reset");
    Ok(())
}

pub fn handle_register(database: Option<&str>, name: &str) -> Result<()> {
    let player = open_service(database)?.register_player(name)?;
    println!("Registered {} with id {}", player.name, player.id);
    Ok(())
}

pub fn handle_count(database: Option<&str>) -> Result<()> {
    println!("{}", open_service(database)?.count_players()?);
    Ok(())
}

pub fn handle_report(database: Option<&str>, winner: PlayerId, loser: PlayerId) -> Result<()> {
    let recorded = open_service(database)?.report_match(winner, loser)?;
    println!("Recorded match {}: {} beat {}", recorded.id, recorded.winner, recorded.loser);
    Ok(())
}

pub fn handle_standings(database: Option<&str>, json: bool) -> Result<()> {
    let rows = open_service(database)?.player_standings()?;
    if json {
        println!("{}", output::to_json(&rows)?);
    } else {
        println!("{}", output::format_standings(&rows));
    }
    Ok(())
}

pub fn handle_pairings(database: Option<&str>, json: bool) -> Result<()> {
    let pairings = open_service(database)?.swiss_pairings()?;
    if json {
        println!("{}", output::to_json(&pairings)?);
    } else {
        println!("{}", output::format_pairings(&pairings));
    }
    Ok(())
}

pub fn handle_clear_matches(database: Option<&str>) -> Result<()> {
    open_service(database)?.delete_matches()?;
    println!("All matches deleted");
    Ok(())
}

pub fn handle_clear_players(database: Option<&str>) -> Result<()> {
    open_service(database)?.delete_players()?;
    println!("All players deleted");
    Ok(())
}

pub fn handle_completions(shell: Shell) -> Result<()> {
    let mut command = Cli::command();
    let name = command.get_name().to_string();
    clap_complete::generate(shell, &mut command, name, &mut std::io::stdout());
    Ok(())
}
