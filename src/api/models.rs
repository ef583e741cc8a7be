use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::database::models::{BustClubRow, LeaderboardRow, Player};
use crate::ledger::types::{GameNightSubmission, PlayerEntry};

// --- Requests ---

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewPlayerRequest {
    pub name: String,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RenamePlayerRequest {
    pub name: String,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameNightRequest {
    pub game_date: String,
    pub buy_in: f64,
    pub players: Vec<PlayerEntryRequest>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerEntryRequest {
    pub player_name: String,
    pub cash_out: f64,
    #[serde(default)]
    pub rebuys: Vec<f64>,
}

impl From<GameNightRequest> for GameNightSubmission {
    fn from(req: GameNightRequest) -> Self {
        GameNightSubmission {
            game_date: req.game_date,
            buy_in: req.buy_in,
            players: req
                .players
                .into_iter()
                .map(|p| PlayerEntry {
                    player_name: p.player_name,
                    cash_out: p.cash_out,
                    rebuys: p.rebuys,
                })
                .collect(),
        }
    }
}

// --- Responses ---

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerResponse {
    pub id: i64,
    pub name: String,
}

impl From<Player> for PlayerResponse {
    fn from(player: Player) -> Self {
        Self {
            id: player.id,
            name: player.name,
        }
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationErrorsResponse {
    pub errors: Vec<String>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RecordedGameResponse {
    pub players_recorded: usize,
    pub rebuys_recorded: usize,
    pub message: String,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LeaderboardItem {
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

impl From<LeaderboardRow> for LeaderboardItem {
    fn from(row: LeaderboardRow) -> Self {
        Self {
            player_id: row.player_id,
            name: row.name,
            games_played: row.games_played,
            total_initial_buy_ins: row.total_initial_buy_ins,
            total_rebuys: row.total_rebuys,
            total_rebuy_instances: row.total_rebuy_instances,
            total_investment: row.total_investment,
            total_cash_outs: row.total_cash_outs,
            original_net_profit: row.original_net_profit,
            net_profit_with_rebuys: row.net_profit_with_rebuys,
            total_bust_count: row.total_bust_count,
            bust_rate_percentage: row.bust_rate_percentage,
        }
    }
}

/// A single-player pick reported under both profit bases, so the client
/// toggle switches sides without refetching.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PickPair<T> {
    pub with_rebuys: Option<T>,
    pub original: Option<T>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ShamePick {
    pub player_id: i64,
    pub name: String,
    pub net_profit: f64,
    pub total_rebuys: f64,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SharkPick {
    pub player_id: i64,
    pub name: String,
    pub recent_profit: f64,
    pub recent_total_rebuys: f64,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LeaderboardResponse {
    pub items: Vec<LeaderboardItem>,
    pub wall_of_shame: PickPair<ShamePick>,
    pub shark_of_the_month: PickPair<SharkPick>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BustClubItem {
    pub player_id: i64,
    pub name: String,
    pub games_played: i64,
    pub total_bust_count: i64,
    pub recent_busts: i64,
    pub bust_rate_percentage: f64,
}

impl From<BustClubRow> for BustClubItem {
    fn from(row: BustClubRow) -> Self {
        Self {
            player_id: row.player_id,
            name: row.name,
            games_played: row.games_played,
            total_bust_count: row.total_bust_count,
            recent_busts: row.recent_busts,
            bust_rate_percentage: row.bust_rate_percentage,
        }
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RebuyResponse {
    pub amount: f64,
    pub sequence: i32,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerResultResponse {
    pub name: String,
    pub initial_buy_in: f64,
    pub rebuys: Vec<RebuyResponse>,
    pub total_investment: f64,
    pub cash_out: f64,
    pub net_result: f64,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GameNightResponse {
    pub game_date: NaiveDate,
    pub players: Vec<PlayerResultResponse>,
    pub total_pot: f64,
    pub total_cash_out: f64,
    pub total_rebuys: f64,
    pub rebuy_count: usize,
    pub big_winner: Option<String>,
    pub big_loser: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn responses_serialize_in_camel_case() {
        let item = LeaderboardItem {
            player_id: 1,
            name: "Alice".to_string(),
            games_played: 2,
            total_initial_buy_ins: 60.0,
            total_rebuys: 20.0,
            total_rebuy_instances: 1,
            total_investment: 80.0,
            total_cash_outs: 50.0,
            original_net_profit: -10.0,
            net_profit_with_rebuys: -30.0,
            total_bust_count: 1,
            bust_rate_percentage: 50.0,
        };

        let value = serde_json::to_value(&item).unwrap();
        assert_eq!(value["netProfitWithRebuys"], -30.0);
        assert_eq!(value["totalRebuyInstances"], 1);
        assert!(value.get("net_profit_with_rebuys").is_none());
    }

    #[test]
    fn game_night_requests_accept_missing_rebuy_lists() {
        let json = r#"{
            "gameDate": "2024-01-05",
            "buyIn": 30.0,
            "players": [{"playerName": "Alice", "cashOut": 30.0}]
        }"#;

        let request: GameNightRequest = serde_json::from_str(json).unwrap();
        let submission: GameNightSubmission = request.into();

        assert_eq!(submission.game_date, "2024-01-05");
        assert_eq!(submission.players.len(), 1);
        assert!(submission.players[0].rebuys.is_empty());
    }
}
