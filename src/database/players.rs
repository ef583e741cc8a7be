use anyhow::{Context, Result};
use rusqlite::{params, Connection, OptionalExtension};

use super::models::Player;

/// Find a player by exact name, inserting a new row when absent.
pub fn ensure_player(conn: &Connection, name: &str) -> Result<Player> {
    if let Some(existing) = find_by_name(conn, name)? {
        return Ok(existing);
    }

    insert_new_player(conn, name)
}

pub fn find_by_name(conn: &Connection, name: &str) -> Result<Option<Player>> {
    let sql = "SELECT id, name, created_at FROM players WHERE name = ?1";

    conn.query_row(sql, params![name], parse_player_row)
        .optional()
        .context("Failed to query player by name")
}

pub fn find_by_id(conn: &Connection, id: i64) -> Result<Option<Player>> {
    let sql = "SELECT id, name, created_at FROM players WHERE id = ?1";

    conn.query_row(sql, params![id], parse_player_row)
        .optional()
        .context("Failed to query player by id")
}

pub fn insert_new_player(conn: &Connection, name: &str) -> Result<Player> {
    let sql = "INSERT INTO players (name) VALUES (?1) RETURNING id, name, created_at";

    conn.query_row(sql, params![name], parse_player_row)
        .context("Failed to insert new player")
}

pub fn list_all(conn: &Connection) -> Result<Vec<Player>> {
    let sql = "SELECT id, name, created_at FROM players ORDER BY name";

    let mut stmt = conn.prepare(sql)?;
    let rows = stmt
        .query_map([], parse_player_row)?
        .collect::<rusqlite::Result<Vec<_>>>()?;

    Ok(rows)
}

pub fn rename_player(conn: &Connection, id: i64, name: &str) -> Result<Option<Player>> {
    let sql = "UPDATE players SET name = ?1 WHERE id = ?2 RETURNING id, name, created_at";

    conn.query_row(sql, params![name, id], parse_player_row)
        .optional()
        .context("Failed to rename player")
}

/// Deletes a player; game logs and rebuys go with it via cascade.
pub fn delete_player(conn: &Connection, id: i64) -> Result<bool> {
    let deleted = conn
        .execute("DELETE FROM players WHERE id = ?1", params![id])
        .context("Failed to delete player")?;

    Ok(deleted > 0)
}

fn parse_player_row(row: &rusqlite::Row) -> rusqlite::Result<Player> {
    Ok(Player {
        id: row.get(0)?,
        name: row.get(1)?,
        created_at: row.get(2)?,
    })
}
