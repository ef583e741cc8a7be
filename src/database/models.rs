use chrono::{NaiveDate, NaiveDateTime};

#[derive(Debug, Clone)]
pub struct Player {
    pub id: i64,
    pub name: String,
    pub created_at: Option<NaiveDateTime>,
}

#[derive(Debug, Clone)]
pub struct GameLog {
    pub id: i64,
    pub player_id: i64,
    pub game_date: NaiveDate,
    pub buy_in: f64,
    pub cash_out: f64,
    pub created_at: Option<NaiveDateTime>,
}

#[derive(Debug, Clone)]
pub struct Rebuy {
    pub id: i64,
    pub game_log_id: i64,
    pub player_id: i64,
    pub game_date: NaiveDate,
    pub rebuy_amount: f64,
    pub rebuy_sequence: i32,
    pub created_at: Option<NaiveDateTime>,
}

// DTOs for view queries

/// One row of `game_logs_with_rebuys`, joined with the player's name.
#[derive(Debug, Clone)]
pub struct GameLogWithRebuys {
    pub game_log_id: i64,
    pub player_id: i64,
    pub player_name: String,
    pub game_date: NaiveDate,
    pub initial_buy_in: f64,
    pub total_rebuys: f64,
    pub total_investment: f64,
    pub cash_out: f64,
    pub net_result: f64,
    pub net_result_with_rebuys: f64,
    pub rebuy_count: i64,
}

/// One row of `leaderboard_with_rebuys_and_busts`. Carries both profit
/// bases so the rebuy toggle needs no second query.
#[derive(Debug, Clone)]
pub struct LeaderboardRow {
    pub player_id: i64,
    pub name: String,
    pub games_played: i64,
    pub total_initial_buy_ins: f64,
    pub total_rebuys: f64,
    pub total_rebuy_instances: i64,
    pub total_investment: f64,
    pub total_cash_outs: f64,
    pub original_net_profit: f64,
    pub net_profit_with_rebuys: f64,
    pub total_bust_count: i64,
    pub bust_rate_percentage: f64,
}

/// One row of `recent_games_with_rebuys_and_busts` (trailing window owned
/// by the view definition).
#[derive(Debug, Clone)]
pub struct RecentGameRow {
    pub player_id: i64,
    pub name: String,
    pub recent_profit_original: f64,
    pub recent_profit_with_rebuys: f64,
    pub recent_total_rebuys: f64,
    pub recent_busts: i64,
}

/// One row of `bust_club_leaderboard`.
#[derive(Debug, Clone)]
pub struct BustClubRow {
    pub player_id: i64,
    pub name: String,
    pub games_played: i64,
    pub total_bust_count: i64,
    pub recent_busts: i64,
    pub bust_rate_percentage: f64,
}
