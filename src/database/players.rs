use anyhow::{Context, Result};
use rusqlite::{params, OptionalExtension};

use super::connection::DbConn;
use super::models::PlayerRow;

pub fn insert_player(conn: &mut DbConn, name: &str) -> Result<PlayerRow> {
    let sql = "INSERT INTO players (name) VALUES (?1) RETURNING id, name, created_at";

    conn.query_row(sql, params![name], parse_player_row)
        .context("Failed to insert new player")
}

fn parse_player_row(row: &rusqlite::Row) -> rusqlite::Result<PlayerRow> {
    Ok(PlayerRow {
        id: row.get(0)?,
        name: row.get(1)?,
        created_at: row.get(2)?,
    })
}

pub fn find_by_id(conn: &mut DbConn, id: i32) -> Result<Option<PlayerRow>> {
    let sql = "SELECT id, name, created_at FROM players WHERE id = ?1";

    conn.query_row(sql, params![id], parse_player_row)
        .optional()
        .context("Failed to query player by id")
}

pub fn list_all(conn: &mut DbConn) -> Result<Vec<PlayerRow>> {
    let sql = "SELECT id, name, created_at FROM players ORDER BY id";

    let mut stmt = conn.prepare(sql)?;
    let rows = stmt
        .query_map([], parse_player_row)?
        .collect::<rusqlite::Result<Vec<_>>>()?;

    Ok(rows)
}

pub fn count_all(conn: &mut DbConn) -> Result<usize> {
    let sql = "SELECT COUNT(*) FROM players";

    let count: i64 = conn
        .query_row(sql, [], |row| row.get(0))
        .context("Failed to count players")?;

    Ok(count as usize)
}

/// Delete every player (matches go with them) and restart both id sequences
pub fn delete_all(conn: &mut DbConn) -> Result<()> {
    let tx = conn.transaction().context("Failed to start transaction")?;

    tx.execute("DELETE FROM players", [])
        .context("Failed to delete players")?;
    // no-op when the foreign_keys pragma already cascaded
    tx.execute("DELETE FROM matches", [])
        .context("Failed to delete matches")?;
    tx.execute(
        "DELETE FROM sqlite_sequence WHERE name IN ('players', 'matches')",
        [],
    )
    .context("Failed to restart player id sequence")?;

    tx.commit().context("Failed to commit player reset")
}
