// Ranking order, time windows and rounding live in the view definitions
// (schema.sql); these functions only map rows.

use anyhow::{Context, Result};
use rusqlite::{params, Connection};

use super::models::{BustClubRow, LeaderboardRow, RecentGameRow};

pub fn leaderboard_rows(conn: &Connection) -> Result<Vec<LeaderboardRow>> {
    let sql = "SELECT id, name, games_played, total_initial_buy_ins, total_rebuys, total_rebuy_instances, total_investment, total_cash_outs, original_net_profit, net_profit_with_rebuys, total_bust_count, bust_rate_percentage FROM leaderboard_with_rebuys_and_busts";

    let mut stmt = conn.prepare(sql)?;
    let rows = stmt
        .query_map([], parse_leaderboard_row)?
        .collect::<rusqlite::Result<Vec<_>>>()
        .context("Failed to query leaderboard view")?;

    Ok(rows)
}

fn parse_leaderboard_row(row: &rusqlite::Row) -> rusqlite::Result<LeaderboardRow> {
    Ok(LeaderboardRow {
        player_id: row.get(0)?,
        name: row.get(1)?,
        games_played: row.get(2)?,
        total_initial_buy_ins: row.get(3)?,
        total_rebuys: row.get(4)?,
        total_rebuy_instances: row.get(5)?,
        total_investment: row.get(6)?,
        total_cash_outs: row.get(7)?,
        original_net_profit: row.get(8)?,
        net_profit_with_rebuys: row.get(9)?,
        total_bust_count: row.get(10)?,
        bust_rate_percentage: row.get(11)?,
    })
}

pub fn recent_game_rows(conn: &Connection) -> Result<Vec<RecentGameRow>> {
    let sql = "SELECT id, name, recent_profit_original, recent_profit_with_rebuys, recent_total_rebuys, recent_busts FROM recent_games_with_rebuys_and_busts";

    let mut stmt = conn.prepare(sql)?;
    let rows = stmt
        .query_map([], parse_recent_game_row)?
        .collect::<rusqlite::Result<Vec<_>>>()
        .context("Failed to query recent games view")?;

    Ok(rows)
}

fn parse_recent_game_row(row: &rusqlite::Row) -> rusqlite::Result<RecentGameRow> {
    Ok(RecentGameRow {
        player_id: row.get(0)?,
        name: row.get(1)?,
        recent_profit_original: row.get(2)?,
        recent_profit_with_rebuys: row.get(3)?,
        recent_total_rebuys: row.get(4)?,
        recent_busts: row.get(5)?,
    })
}

pub fn bust_club_rows(conn: &Connection, limit: usize) -> Result<Vec<BustClubRow>> {
    let sql = "SELECT id, name, games_played, total_bust_count, recent_busts, bust_rate_percentage FROM bust_club_leaderboard LIMIT ?1";

    let mut stmt = conn.prepare(sql)?;
    let rows = stmt
        .query_map(params![limit as i64], parse_bust_club_row)?
        .collect::<rusqlite::Result<Vec<_>>>()
        .context("Failed to query bust club view")?;

    Ok(rows)
}

fn parse_bust_club_row(row: &rusqlite::Row) -> rusqlite::Result<BustClubRow> {
    Ok(BustClubRow {
        player_id: row.get(0)?,
        name: row.get(1)?,
        games_played: row.get(2)?,
        total_bust_count: row.get(3)?,
        recent_busts: row.get(4)?,
        bust_rate_percentage: row.get(5)?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::database::{game_logs, players, rebuys, setup};
    use chrono::NaiveDate;
    use rusqlite::Connection;

    fn test_conn() -> Connection {
        let conn = Connection::open_in_memory().unwrap();
        conn.execute_batch("PRAGMA foreign_keys = ON;").unwrap();
        setup::apply_schema(&conn).unwrap();
        conn
    }

    fn date(s: &str) -> NaiveDate {
        s.parse().unwrap()
    }

    #[test]
    fn leaderboard_aggregates_both_profit_bases() {
        let conn = test_conn();
        let alice = players::ensure_player(&conn, "Alice").unwrap();

        // Two nights: wins 20 on the first, rebuys 20 and loses it all on the second
        game_logs::insert_game_log(&conn, alice.id, date("2024-01-05"), 30.0, 50.0).unwrap();
        let second = game_logs::insert_game_log(&conn, alice.id, date("2024-01-12"), 30.0, 0.0).unwrap();
        rebuys::insert_rebuy(&conn, second.id, alice.id, date("2024-01-12"), 20.0, 1).unwrap();

        let rows = leaderboard_rows(&conn).unwrap();
        assert_eq!(rows.len(), 1);

        let row = &rows[0];
        assert_eq!(row.name, "Alice");
        assert_eq!(row.games_played, 2);
        assert_eq!(row.total_initial_buy_ins, 60.0);
        assert_eq!(row.total_rebuys, 20.0);
        assert_eq!(row.total_rebuy_instances, 1);
        assert_eq!(row.total_investment, 80.0);
        assert_eq!(row.total_cash_outs, 50.0);
        assert_eq!(row.original_net_profit, -10.0);
        assert_eq!(row.net_profit_with_rebuys, -30.0);
        assert_eq!(row.total_bust_count, 1);
        assert_eq!(row.bust_rate_percentage, 50.0);
    }

    #[test]
    fn bust_requires_a_rebuy() {
        let conn = test_conn();
        let bob = players::ensure_player(&conn, "Bob").unwrap();
        let carol = players::ensure_player(&conn, "Carol").unwrap();

        // Bob loses exactly his buy-in: no bust. Carol rebuys and still
        // walks away with nothing: bust.
        game_logs::insert_game_log(&conn, bob.id, date("2024-02-02"), 30.0, 0.0).unwrap();
        let log = game_logs::insert_game_log(&conn, carol.id, date("2024-02-02"), 30.0, 0.0).unwrap();
        rebuys::insert_rebuy(&conn, log.id, carol.id, date("2024-02-02"), 20.0, 1).unwrap();

        let club = bust_club_rows(&conn, 10).unwrap();
        assert_eq!(club.len(), 1);
        assert_eq!(club[0].name, "Carol");
        assert_eq!(club[0].total_bust_count, 1);

        let lead = leaderboard_rows(&conn).unwrap();
        let bob_row = lead.iter().find(|r| r.name == "Bob").unwrap();
        assert_eq!(bob_row.total_bust_count, 0);
    }

    #[test]
    fn bust_club_is_capped_and_ranked_by_bust_count() {
        let conn = test_conn();

        for (name, busts) in [("A", 3), ("B", 1), ("C", 2)] {
            let p = players::ensure_player(&conn, name).unwrap();
            for i in 0..busts {
                let d = date(&format!("2024-03-{:02}", i + 1));
                let log = game_logs::insert_game_log(&conn, p.id, d, 30.0, 0.0).unwrap();
                rebuys::insert_rebuy(&conn, log.id, p.id, d, 10.0, 1).unwrap();
            }
        }

        let club = bust_club_rows(&conn, 2).unwrap();
        assert_eq!(club.len(), 2);
        assert_eq!(club[0].name, "A");
        assert_eq!(club[1].name, "C");
    }

    #[test]
    fn recent_window_only_counts_the_trailing_month() {
        let conn = test_conn();
        let eve = players::ensure_player(&conn, "Eve").unwrap();

        // SQLite's date('now') is UTC, so anchor the fresh row the same way
        let today = chrono::Utc::now().date_naive();
        game_logs::insert_game_log(&conn, eve.id, date("2020-01-01"), 30.0, 90.0).unwrap();
        game_logs::insert_game_log(&conn, eve.id, today, 30.0, 55.0).unwrap();

        let rows = recent_game_rows(&conn).unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].name, "Eve");
        assert_eq!(rows[0].recent_profit_original, 25.0);
        assert_eq!(rows[0].recent_profit_with_rebuys, 25.0);
        assert_eq!(rows[0].recent_busts, 0);
    }

    #[test]
    fn deleting_a_player_cascades_out_of_every_view() {
        let conn = test_conn();
        let dave = players::ensure_player(&conn, "Dave").unwrap();

        let log = game_logs::insert_game_log(&conn, dave.id, date("2024-04-01"), 30.0, 0.0).unwrap();
        rebuys::insert_rebuy(&conn, log.id, dave.id, date("2024-04-01"), 15.0, 1).unwrap();
        assert_eq!(leaderboard_rows(&conn).unwrap().len(), 1);
        assert_eq!(bust_club_rows(&conn, 10).unwrap().len(), 1);

        assert!(players::delete_player(&conn, dave.id).unwrap());

        assert!(leaderboard_rows(&conn).unwrap().is_empty());
        assert!(bust_club_rows(&conn, 10).unwrap().is_empty());
        assert!(game_logs::list_with_rebuys(&conn).unwrap().is_empty());
        assert!(rebuys::list_all(&conn).unwrap().is_empty());
    }
}
