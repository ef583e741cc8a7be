use std::collections::BTreeMap;

use chrono::NaiveDate;

use crate::database::models::{GameLogWithRebuys, Rebuy};

#[derive(Debug, Clone)]
pub struct RebuyDetail {
    pub amount: f64,
    pub sequence: i32,
}

#[derive(Debug, Clone)]
pub struct PlayerNightResult {
    pub player_id: i64,
    pub name: String,
    pub initial_buy_in: f64,
    pub rebuys: Vec<RebuyDetail>,
    pub total_investment: f64,
    pub cash_out: f64,
    pub net_result: f64,
}

/// One night at the table: every player's result under one date.
#[derive(Debug, Clone)]
pub struct GameNightRecord {
    pub game_date: NaiveDate,
    pub players: Vec<PlayerNightResult>,
}

impl GameNightRecord {
    pub fn total_pot(&self) -> f64 {
        self.players.iter().map(|p| p.total_investment).sum()
    }

    pub fn total_cash_out(&self) -> f64 {
        self.players.iter().map(|p| p.cash_out).sum()
    }

    pub fn total_rebuys(&self) -> f64 {
        self.players
            .iter()
            .flat_map(|p| p.rebuys.iter())
            .map(|r| r.amount)
            .sum()
    }

    pub fn rebuy_count(&self) -> usize {
        self.players.iter().map(|p| p.rebuys.len()).sum()
    }

    /// Highest net result; ties go to the earlier entry.
    pub fn big_winner(&self) -> Option<&PlayerNightResult> {
        self.players
            .iter()
            .reduce(|best, p| if p.net_result > best.net_result { p } else { best })
    }

    /// Lowest net result; ties go to the earlier entry.
    pub fn big_loser(&self) -> Option<&PlayerNightResult> {
        self.players
            .iter()
            .reduce(|worst, p| if p.net_result < worst.net_result { p } else { worst })
    }
}

/// Partition per-player-per-game rows into game nights: grouped by date,
/// most recent night first, players within a night ordered biggest winner
/// first. Rebuys are joined by (player_id, game_date).
pub fn group_game_nights(rows: &[GameLogWithRebuys], rebuys: &[Rebuy]) -> Vec<GameNightRecord> {
    let mut grouped: BTreeMap<NaiveDate, Vec<PlayerNightResult>> = BTreeMap::new();

    for row in rows {
        let player_rebuys = rebuys_for(rebuys, row.player_id, row.game_date);

        grouped
            .entry(row.game_date)
            .or_default()
            .push(PlayerNightResult {
                player_id: row.player_id,
                name: row.player_name.clone(),
                initial_buy_in: row.initial_buy_in,
                rebuys: player_rebuys,
                total_investment: row.total_investment,
                cash_out: row.cash_out,
                net_result: row.net_result_with_rebuys,
            });
    }

    grouped
        .into_iter()
        .rev()
        .map(|(game_date, mut players)| {
            players.sort_by(|a, b| b.net_result.total_cmp(&a.net_result));
            GameNightRecord { game_date, players }
        })
        .collect()
}

fn rebuys_for(rebuys: &[Rebuy], player_id: i64, game_date: NaiveDate) -> Vec<RebuyDetail> {
    let mut details: Vec<RebuyDetail> = rebuys
        .iter()
        .filter(|r| r.player_id == player_id && r.game_date == game_date)
        .map(|r| RebuyDetail {
            amount: r.rebuy_amount,
            sequence: r.rebuy_sequence,
        })
        .collect();

    details.sort_by_key(|r| r.sequence);
    details
}
