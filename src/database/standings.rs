use anyhow::Result;

use super::connection::DbConn;
use crate::domain::StandingsRow;

/// Per-player win and match totals from the `standings` view, unordered
pub fn list_records(conn: &mut DbConn) -> Result<Vec<StandingsRow>> {
    let sql = "SELECT id, name, wins, matches FROM standings";

    let mut stmt = conn.prepare(sql)?;
    let rows = stmt
        .query_map([], |row| {
            Ok(StandingsRow {
                id: row.get(0)?,
                name: row.get(1)?,
                wins: row.get(2)?,
                matches: row.get(3)?,
            })
        })?
        .collect::<rusqlite::Result<Vec<_>>>()?;

    Ok(rows)
}
