use anyhow::{Context, Result};
use chrono::NaiveDate;
use rusqlite::{params, Connection};

use super::models::Rebuy;

pub fn insert_rebuy(
    conn: &Connection,
    game_log_id: i64,
    player_id: i64,
    game_date: NaiveDate,
    rebuy_amount: f64,
    rebuy_sequence: i32,
) -> Result<Rebuy> {
    let sql = "INSERT INTO rebuys (game_log_id, player_id, game_date, rebuy_amount, rebuy_sequence) VALUES (?1, ?2, ?3, ?4, ?5) RETURNING id, game_log_id, player_id, game_date, rebuy_amount, rebuy_sequence, created_at";

    conn.query_row(
        sql,
        params![game_log_id, player_id, game_date, rebuy_amount, rebuy_sequence],
        parse_rebuy_row,
    )
    .context("Failed to insert rebuy")
}

/// All rebuys, newest night first, sequences in entry order within a night.
pub fn list_all(conn: &Connection) -> Result<Vec<Rebuy>> {
    let sql = "SELECT id, game_log_id, player_id, game_date, rebuy_amount, rebuy_sequence, created_at FROM rebuys ORDER BY game_date DESC, rebuy_sequence ASC";

    let mut stmt = conn.prepare(sql)?;
    let rows = stmt
        .query_map([], parse_rebuy_row)?
        .collect::<rusqlite::Result<Vec<_>>>()?;

    Ok(rows)
}

fn parse_rebuy_row(row: &rusqlite::Row) -> rusqlite::Result<Rebuy> {
    Ok(Rebuy {
        id: row.get(0)?,
        game_log_id: row.get(1)?,
        player_id: row.get(2)?,
        game_date: row.get(3)?,
        rebuy_amount: row.get(4)?,
        rebuy_sequence: row.get(5)?,
        created_at: row.get(6)?,
    })
}
