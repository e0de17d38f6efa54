use anyhow::{Context, Result};
use rusqlite::params;

use super::connection::DbConn;
use super::models::MatchRow;

pub fn insert_match(
    conn: &mut DbConn,
    winner_id: i32,
    loser_id: i32,
    is_draw: bool,
) -> Result<MatchRow> {
    let sql = "INSERT INTO matches (winner_id, loser_id, is_draw) VALUES (?1, ?2, ?3) RETURNING id, winner_id, loser_id, is_draw, created_at";

    conn.query_row(sql, params![winner_id, loser_id, is_draw], parse_match_row)
        .context("Failed to insert match")
}

fn parse_match_row(row: &rusqlite::Row) -> rusqlite::Result<MatchRow> {
    Ok(MatchRow {
        id: row.get(0)?,
        winner_id: row.get(1)?,
        loser_id: row.get(2)?,
        is_draw: row.get(3)?,
        created_at: row.get(4)?,
    })
}

pub fn list_all(conn: &mut DbConn) -> Result<Vec<MatchRow>> {
    let sql = "SELECT id, winner_id, loser_id, is_draw, created_at FROM matches ORDER BY id";

    let mut stmt = conn.prepare(sql)?;
    let rows = stmt
        .query_map([], parse_match_row)?
        .collect::<rusqlite::Result<Vec<_>>>()?;

    Ok(rows)
}

/// Delete every match and restart the match id sequence
pub fn delete_all(conn: &mut DbConn) -> Result<()> {
    let tx = conn.transaction().context("Failed to start transaction")?;

    tx.execute("DELETE FROM matches", [])
        .context("Failed to delete matches")?;
    tx.execute("DELETE FROM sqlite_sequence WHERE name = 'matches'", [])
        .context("Failed to restart match id sequence")?;

    tx.commit().context("Failed to commit match reset")
}
