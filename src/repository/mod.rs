//! Storage capabilities the tournament core depends on.
//!
//! The core never opens connections itself; it receives something that can
//! read per-player records and something that can append match results.

pub mod memory;
pub mod sqlite;

use crate::domain::{Match, Player, PlayerId, StandingsRow};
use crate::errors::Result;

pub use memory::MemoryRepository;
pub use sqlite::SqliteRepository;

pub trait StandingsReader {
    /// One record per registered player, in no particular order.
    fn player_records(&self) -> Result<Vec<StandingsRow>>;
}

pub trait MatchWriter {
    /// Append one match result. Ids are passed through unvalidated.
    fn insert_match(&self, winner: PlayerId, loser: PlayerId) -> Result<Match>;
}

pub trait PlayerRegistry {
    fn add_player(&self, name: &str) -> Result<Player>;

    fn player_count(&self) -> Result<usize>;

    /// Fails while recorded matches still reference players.
    fn clear_players(&self) -> Result<()>;

    fn clear_matches(&self) -> Result<()>;
}

/// Everything a tournament needs from storage
pub trait Repository: StandingsReader + MatchWriter + PlayerRegistry {}

impl<T: StandingsReader + MatchWriter + PlayerRegistry> Repository for T {}
