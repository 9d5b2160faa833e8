use anyhow::{Context, Result};
use rusqlite::params;

use super::connection::DbConn;
use super::models::Match;
use crate::swiss::PlayerId;

pub fn insert_match(conn: &mut DbConn, winner_id: PlayerId, loser_id: PlayerId) -> Result<Match> {
    let sql = "INSERT INTO matches (winner, loser) VALUES (?1, ?2) RETURNING id, winner, loser, created_at";

    conn.query_row(sql, params![winner_id, loser_id], parse_match_row)
        .with_context(|| format!("Failed to insert match {} beat {}", winner_id, loser_id))
}

fn parse_match_row(row: &rusqlite::Row) -> rusqlite::Result<Match> {
    Ok(Match {
        id: row.get(0)?,
        winner_id: row.get(1)?,
        loser_id: row.get(2)?,
        created_at: row.get(3)?,
    })
}

pub fn list_all(conn: &mut DbConn) -> Result<Vec<Match>> {
    let sql = "SELECT id, winner, loser, created_at FROM matches ORDER BY id";

    let mut stmt = conn.prepare(sql)?;
    let rows = stmt
        .query_map([], parse_match_row)?
        .collect::<rusqlite::Result<Vec<_>>>()?;

    Ok(rows)
}

pub fn delete_all(conn: &mut DbConn) -> Result<usize> {
    conn.execute("DELETE FROM matches", [])
        .context("Failed to delete matches")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::database::players;
    use crate::database::test_support::{conn, temp_pool};

    #[test]
    fn test_insert_match_returns_row() {
        let (_temp, pool) = temp_pool();
        let mut conn = conn(&pool);
        let a = players::insert_player(&mut conn, "Ann").unwrap();
        let b = players::insert_player(&mut conn, "Ben").unwrap();

        let recorded = insert_match(&mut conn, a.id, b.id).unwrap();

        assert_eq!(recorded.winner_id, a.id);
        assert_eq!(recorded.loser_id, b.id);
        assert_eq!(list_all(&mut conn).unwrap(), vec![recorded]);
    }

    #[test]
    fn test_unknown_player_violates_foreign_key() {
        let (_temp, pool) = temp_pool();
        let mut conn = conn(&pool);
        let a = players::insert_player(&mut conn, "Ann").unwrap();

        assert!(insert_match(&mut conn, a.id, 999).is_err());
        assert!(list_all(&mut conn).unwrap().is_empty());
    }

    #[test]
    fn test_self_match_is_rejected() {
        let (_temp, pool) = temp_pool();
        let mut conn = conn(&pool);
        let a = players::insert_player(&mut conn, "Ann").unwrap();

        assert!(insert_match(&mut conn, a.id, a.id).is_err());
    }

    #[test]
    fn test_delete_all_keeps_players() {
        let (_temp, pool) = temp_pool();
        let mut conn = conn(&pool);
        let a = players::insert_player(&mut conn, "Ann").unwrap();
        let b = players::insert_player(&mut conn, "Ben").unwrap();
        insert_match(&mut conn, a.id, b.id).unwrap();
        insert_match(&mut conn, b.id, a.id).unwrap();

        assert_eq!(delete_all(&mut conn).unwrap(), 2);
        assert_eq!(players::count(&mut conn).unwrap(), 2);
    }
}
