use log::info;

use crate::domain::{Match, Pairing, Player, PlayerId, StandingsRow};
use crate::errors::Result;
use crate::pairing;
use crate::registration;
use crate::repository::Repository;
use crate::standings;

/// One tournament's operations over an injected repository
pub struct TournamentService<R: Repository> {
    repository: R,
}

impl<R: Repository> TournamentService<R> {
    pub fn new(repository: R) -> Self {
        Self { repository }
    }

    pub fn repository(&self) -> &R {
        &self.repository
    }

    /// Remove all match records
    pub fn delete_matches(&self) -> Result<()> {
        self.repository.clear_matches()?;
        info!("Deleted all matches");
        Ok(())
    }

    /// Remove all players. Matches must be deleted first.
    pub fn delete_players(&self) -> Result<()> {
        self.repository.clear_players()?;
        info!("Deleted all players");
        Ok(())
    }

    pub fn count_players(&self) -> Result<usize> {
        self.repository.player_count()
    }

    pub fn register_player(&self, name: &str) -> Result<Player> {
        let player = registration::register_player(&self.repository, name)?;
        info!("Registered {} with id {}", player.name, player.id);
        Ok(player)
    }

    pub fn report_match(&self, winner: PlayerId, loser: PlayerId) -> Result<Match> {
        let recorded = registration::record_match(&self.repository, winner, loser)?;
        info!("Reported match: {} beat {}", winner, loser);
        Ok(recorded)
    }

    pub fn player_standings(&self) -> Result<Vec<StandingsRow>> {
        standings::standings(&self.repository)
    }

    pub fn swiss_pairings(&self) -> Result<Vec<Pairing>> {
        pairing::swiss_pairings(&self.repository)
    }
}
