use anyhow::Context;
use log::debug;

use super::{MatchWriter, PlayerRegistry, StandingsReader};
use crate::config::settings::DatabaseSettings;
use crate::database::{self, DbConn, DbPool};
use crate::domain::{Match, Player, PlayerId, StandingsRow};
use crate::errors::{with_data_access, Result, TournamentError};

/// Repository backed by a pooled SQLite database
pub struct SqliteRepository {
    pool: DbPool,
}

impl SqliteRepository {
    /// Open the database file, creating the schema if it is missing
    pub fn open(settings: &DatabaseSettings) -> Result<Self> {
        let pool = with_data_access(
            database::create_pool(&settings.path, settings.pool_size)
                .with_context(|| format!("Failed to open database: {}", settings.path)),
        )?;
        let repository = Self::from_pool(pool);

        let mut conn = repository.connection()?;
        with_data_access(database::setup::ensure_schema(&mut conn))?;

        debug!("Opened tournament database at {}", settings.path);
        Ok(repository)
    }

    pub fn from_pool(pool: DbPool) -> Self {
        Self { pool }
    }

    /// Drop all tournament data and recreate the schema
    pub fn reset(&self) -> Result<()> {
        let mut conn = self.connection()?;
        with_data_access(database::setup::reset_database(&mut conn))
    }

    pub fn players(&self) -> Result<Vec<Player>> {
        let mut conn = self.connection()?;
        with_data_access(database::players::list_all(&mut conn))
    }

    pub fn matches(&self) -> Result<Vec<Match>> {
        let mut conn = self.connection()?;
        with_data_access(database::matches::list_all(&mut conn))
    }

    fn connection(&self) -> Result<DbConn> {
        with_data_access(database::get_connection(&self.pool))
    }
}

impl StandingsReader for SqliteRepository {
    fn player_records(&self) -> Result<Vec<StandingsRow>> {
        let mut conn = self.connection()?;
        with_data_access(database::standings::list_records(&mut conn))
    }
}

impl MatchWriter for SqliteRepository {
    fn insert_match(&self, winner: PlayerId, loser: PlayerId) -> Result<Match> {
        let mut conn = self.connection()?;
        let recorded = database::matches::insert_match(&mut conn, winner, loser).map_err(|e| {
            if is_constraint_violation(&e) {
                TournamentError::ReferentialIntegrity(format!(
                    "match {} beat {} references an unregistered player",
                    winner, loser
                ))
            } else {
                TournamentError::DataAccess(e)
            }
        })?;

        debug!("Recorded match {}: {} beat {}", recorded.id, winner, loser);
        Ok(recorded)
    }
}

impl PlayerRegistry for SqliteRepository {
    fn add_player(&self, name: &str) -> Result<Player> {
        let mut conn = self.connection()?;
        let player = with_data_access(database::players::insert_player(&mut conn, name))?;

        debug!("Registered player {} as {}", player.name, player.id);
        Ok(player)
    }

    fn player_count(&self) -> Result<usize> {
        let mut conn = self.connection()?;
        with_data_access(database::players::count_all(&mut conn))
    }

    fn clear_players(&self) -> Result<()> {
        let mut conn = self.connection()?;
        let deleted = database::players::delete_all(&mut conn).map_err(|e| {
            if is_constraint_violation(&e) {
                TournamentError::ReferentialIntegrity(
                    "players are still referenced by recorded matches".to_string(),
                )
            } else {
                TournamentError::DataAccess(e)
            }
        })?;

        debug!("Deleted {} players", deleted);
        Ok(())
    }

    fn clear_matches(&self) -> Result<()> {
        let mut conn = self.connection()?;
        let deleted = with_data_access(database::matches::delete_all(&mut conn))?;

        debug!("Deleted {} matches", deleted);
        Ok(())
    }
}

fn is_constraint_violation(err: &anyhow::Error) -> bool {
    err.downcast_ref::<rusqlite::Error>()
        .and_then(|e| e.sqlite_error_code())
        == Some(rusqlite::ErrorCode::ConstraintViolation)
}
