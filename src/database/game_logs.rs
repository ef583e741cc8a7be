use anyhow::{Context, Result};
use chrono::NaiveDate;
use rusqlite::{params, Connection};

use super::models::{GameLog, GameLogWithRebuys};

pub fn insert_game_log(
    conn: &Connection,
    player_id: i64,
    game_date: NaiveDate,
    buy_in: f64,
    cash_out: f64,
) -> Result<GameLog> {
    let sql = "INSERT INTO game_logs (player_id, game_date, buy_in, cash_out) VALUES (?1, ?2, ?3, ?4) RETURNING id, player_id, game_date, buy_in, cash_out, created_at";

    conn.query_row(
        sql,
        params![player_id, game_date, buy_in, cash_out],
        parse_game_log_row,
    )
    .context("Failed to insert game log")
}

fn parse_game_log_row(row: &rusqlite::Row) -> rusqlite::Result<GameLog> {
    Ok(GameLog {
        id: row.get(0)?,
        player_id: row.get(1)?,
        game_date: row.get(2)?,
        buy_in: row.get(3)?,
        cash_out: row.get(4)?,
        created_at: row.get(5)?,
    })
}

/// All rows of the `game_logs_with_rebuys` view joined with player names,
/// most recent night first.
pub fn list_with_rebuys(conn: &Connection) -> Result<Vec<GameLogWithRebuys>> {
    let sql = "
        SELECT
            l.id,
            l.player_id,
            p.name,
            l.game_date,
            l.initial_buy_in,
            l.total_rebuys,
            l.total_investment,
            l.cash_out,
            l.net_result,
            l.net_result_with_rebuys,
            l.rebuy_count
        FROM game_logs_with_rebuys l
        JOIN players p ON p.id = l.player_id
        ORDER BY l.game_date DESC
    ";

    let mut stmt = conn.prepare(sql)?;
    let rows = stmt
        .query_map([], parse_with_rebuys_row)?
        .collect::<rusqlite::Result<Vec<_>>>()?;

    Ok(rows)
}

fn parse_with_rebuys_row(row: &rusqlite::Row) -> rusqlite::Result<GameLogWithRebuys> {
    Ok(GameLogWithRebuys {
        game_log_id: row.get(0)?,
        player_id: row.get(1)?,
        player_name: row.get(2)?,
        game_date: row.get(3)?,
        initial_buy_in: row.get(4)?,
        total_rebuys: row.get(5)?,
        total_investment: row.get(6)?,
        cash_out: row.get(7)?,
        net_result: row.get(8)?,
        net_result_with_rebuys: row.get(9)?,
        rebuy_count: row.get(10)?,
    })
}
