use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use chrono::Utc;

use super::{MatchWriter, PlayerRegistry, StandingsReader};
use crate::domain::{Match, MatchId, Player, PlayerId, StandingsRow};
use crate::errors::{Result, TournamentError};
use crate::standings;

#[derive(Default)]
struct MemoryState {
    players: Vec<Player>,
    matches: Vec<Match>,
    last_player_id: PlayerId,
    last_match_id: MatchId,
}

/// Repository holding players and matches in process memory.
///
/// Ids are never reused after a clear, and the same referential checks as
/// the SQLite schema apply, so both repositories answer alike.
#[derive(Default)]
pub struct MemoryRepository {
    state: RwLock<MemoryState>,
}

impl MemoryRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn players(&self) -> Result<Vec<Player>> {
        Ok(self.read()?.players.clone())
    }

    pub fn matches(&self) -> Result<Vec<Match>> {
        Ok(self.read()?.matches.clone())
    }

    fn read(&self) -> Result<RwLockReadGuard<'_, MemoryState>> {
        self.state
            .read()
            .map_err(|_| TournamentError::DataAccess(anyhow::anyhow!("Memory store lock poisoned")))
    }

    fn write(&self) -> Result<RwLockWriteGuard<'_, MemoryState>> {
        self.state
            .write()
            .map_err(|_| TournamentError::DataAccess(anyhow::anyhow!("Memory store lock poisoned")))
    }
}

impl StandingsReader for MemoryRepository {
    fn player_records(&self) -> Result<Vec<StandingsRow>> {
        let state = self.read()?;
        Ok(standings::aggregate(&state.players, &state.matches))
    }
}

impl MatchWriter for MemoryRepository {
    fn insert_match(&self, winner: PlayerId, loser: PlayerId) -> Result<Match> {
        let mut state = self.write()?;
        let registered = |id: PlayerId| state.players.iter().any(|p| p.id == id);
        if !registered(winner) || !registered(loser) {
            return Err(TournamentError::ReferentialIntegrity(format!(
                "match {} beat {} references an unregistered player",
                winner, loser
            )));
        }

        state.last_match_id += 1;
        let recorded = Match {
            id: state.last_match_id,
            winner,
            loser,
            recorded_at: Some(Utc::now().naive_utc()),
        };
        state.matches.push(recorded.clone());
        Ok(recorded)
    }
}

impl PlayerRegistry for MemoryRepository {
    fn add_player(&self, name: &str) -> Result<Player> {
        let mut state = self.write()?;
        state.last_player_id += 1;
        let player = Player {
            id: state.last_player_id,
            name: name.to_string(),
            registered_at: Some(Utc::now().naive_utc()),
        };
        state.players.push(player.clone());
        Ok(player)
    }

    fn player_count(&self) -> Result<usize> {
        Ok(self.read()?.players.len())
    }

    fn clear_players(&self) -> Result<()> {
        let mut state = self.write()?;
        if !state.matches.is_empty() {
            return Err(TournamentError::ReferentialIntegrity(
                "players are still referenced by recorded matches".to_string(),
            ));
        }
        state.players.clear();
        Ok(())
    }

    fn clear_matches(&self) -> Result<()> {
        self.write()?.matches.clear();
        Ok(())
    }
}
