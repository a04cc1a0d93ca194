//! Win/match aggregation and the ranking the pairing engine walks.
//!
//! Players are ordered by wins, most first. Players with equal wins are
//! ordered by id, lowest first, so the same data always ranks the same way
//! whatever order storage hands the records back in.

use std::cmp::Ordering;
use std::collections::HashMap;

use log::debug;

use crate::domain::{Match, Player, PlayerId, StandingsRow};
use crate::errors::Result;
use crate::repository::StandingsReader;

/// Ranked standings for every registered player
pub fn standings<R: StandingsReader + ?Sized>(reader: &R) -> Result<Vec<StandingsRow>> {
    let mut rows = reader.player_records()?;
    rank(&mut rows);

    debug!("Computed standings for {} players", rows.len());
    Ok(rows)
}

/// Sort rows into ranking order in place
pub fn rank(rows: &mut [StandingsRow]) {
    rows.sort_by(compare_rows);
}

fn compare_rows(a: &StandingsRow, b: &StandingsRow) -> Ordering {
    b.wins.cmp(&a.wins).then_with(|| a.id.cmp(&b.id))
}

/// Count wins and matches played for every player.
///
/// A match naming the same player on both sides counts once, as a win.
/// Matches naming unknown players are ignored.
pub fn aggregate(players: &[Player], matches: &[Match]) -> Vec<StandingsRow> {
    let mut rows: Vec<StandingsRow> = players
        .iter()
        .map(|p| StandingsRow::new(p.id, p.name.clone()))
        .collect();

    let index: HashMap<PlayerId, usize> = rows
        .iter()
        .enumerate()
        .map(|(idx, row)| (row.id, idx))
        .collect();

    for game in matches {
        if let Some(&idx) = index.get(&game.winner) {
            rows[idx].wins += 1;
            rows[idx].matches += 1;
        }
        if game.loser != game.winner {
            if let Some(&idx) = index.get(&game.loser) {
                rows[idx].matches += 1;
            }
        }
    }

    rows
}
