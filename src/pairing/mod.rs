//! Next-round pairing by adjacent standings.
//!
//! Standings are already sorted by wins, so pairing each player with the one
//! ranked directly below gives opponents with equal or nearly equal records.

use log::debug;

use crate::domain::{Pairing, StandingsRow};
use crate::errors::{Result, TournamentError};
use crate::repository::StandingsReader;
use crate::standings::standings;

/// Pair ranks 0-1, 2-3, 4-5 and so on, keeping standings order.
///
/// An odd number of rows is rejected rather than leaving the last player out.
pub fn pair(standings: &[StandingsRow]) -> Result<Vec<Pairing>> {
    if standings.len() % 2 != 0 {
        return Err(TournamentError::OddPlayerCount {
            count: standings.len(),
        });
    }

    let pairings: Vec<Pairing> = standings
        .chunks_exact(2)
        .map(|pair| Pairing::between(&pair[0], &pair[1]))
        .collect();

    debug!("Paired {} players into {} matches", standings.len(), pairings.len());
    Ok(pairings)
}

/// Compute current standings and pair them for the next round
pub fn swiss_pairings<R: StandingsReader + ?Sized>(reader: &R) -> Result<Vec<Pairing>> {
    pair(&standings(reader)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::PlayerId;
    use crate::repository::{MatchWriter, MemoryRepository, PlayerRegistry};
    use std::collections::HashSet;

    fn rows(count: i64) -> Vec<StandingsRow> {
        (1..=count)
            .map(|id| StandingsRow::new(id, format!("P{}", id)))
            .collect()
    }

    #[test]
    fn test_empty_standings_yield_no_pairs() {
        assert!(pair(&[]).unwrap().is_empty());
    }

    #[test]
    fn test_adjacent_rows_are_paired_in_order() {
        let pairings = pair(&rows(4)).unwrap();

        let ids: Vec<(PlayerId, PlayerId)> = pairings.iter().map(|p| (p.id1, p.id2)).collect();
        assert_eq!(ids, vec![(1, 2), (3, 4)]);
        assert_eq!(pairings[1].name1, "P3");
    }

    #[test]
    fn test_odd_count_is_rejected() {
        let err = pair(&rows(3)).unwrap_err();

        assert!(matches!(err, TournamentError::OddPlayerCount { count: 3 }));
        assert!(err.is_invalid_input());
    }

    #[test]
    fn test_every_player_paired_exactly_once() {
        for count in (0..=16).step_by(2) {
            let pairings = pair(&rows(count)).unwrap();
            assert_eq!(pairings.len() as i64, count / 2);

            let mut seen = HashSet::new();
            for p in &pairings {
                assert_ne!(p.id1, p.id2);
                assert!(seen.insert(p.id1));
                assert!(seen.insert(p.id2));
            }
            assert_eq!(seen.len() as i64, count);
        }
    }

    #[test]
    fn test_swiss_pairings_match_winners_with_winners() {
        let repo = MemoryRepository::new();
        let a = repo.add_player("A").unwrap().id;
        let b = repo.add_player("B").unwrap().id;
        let c = repo.add_player("C").unwrap().id;
        let d = repo.add_player("D").unwrap().id;
        repo.insert_match(a, b).unwrap();
        repo.insert_match(c, d).unwrap();

        let pairings = swiss_pairings(&repo).unwrap();

        let ids: Vec<(PlayerId, PlayerId)> = pairings.iter().map(|p| (p.id1, p.id2)).collect();
        assert_eq!(ids, vec![(a, c), (b, d)]);
    }

    #[test]
    fn test_swiss_pairings_reject_odd_field() {
        let repo = MemoryRepository::new();
        for name in ["A", "B", "C"] {
            repo.add_player(name).unwrap();
        }

        assert!(matches!(
            swiss_pairings(&repo),
            Err(TournamentError::OddPlayerCount { count: 3 })
        ));
    }
}
