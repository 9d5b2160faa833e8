use anyhow::{Context, Result};

use super::connection::DbConn;
use crate::swiss::Standing;

/// Reads the `playerStandings` view, best record first.
pub fn list_standings(conn: &mut DbConn) -> Result<Vec<Standing>> {
    // SQLite does not carry a view's ORDER BY through to the outer query
    let sql = "SELECT id, name, wins, matches FROM playerStandings ORDER BY wins DESC, id ASC";

    let mut stmt = conn.prepare(sql).context("Failed to prepare standings query")?;
    let rows = stmt
        .query_map([], parse_standing_row)?
        .collect::<rusqlite::Result<Vec<_>>>()?;

    Ok(rows)
}

fn parse_standing_row(row: &rusqlite::Row) -> rusqlite::Result<Standing> {
    Ok(Standing {
        id: row.get(0)?,
        name: row.get(1)?,
        wins: row.get(2)?,
        matches: row.get(3)?,
    })
}
