use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Json},
};
use std::sync::Arc;

use super::AppState;
use crate::api::models::{
    BustClubItem, LeaderboardItem, LeaderboardResponse, PickPair, ShamePick, SharkPick,
};
use crate::database::models::{LeaderboardRow, RecentGameRow};
use crate::database::views;
use crate::standings::picks::{shark_of_the_month, wall_of_shame, ProfitBasis};

pub async fn get_leaderboard(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    let conn = match state.pool.get() {
        Ok(conn) => conn,
        Err(_) => return (StatusCode::INTERNAL_SERVER_ERROR, "DB Connection Error").into_response(),
    };

    let rows = match views::leaderboard_rows(&conn) {
        Ok(rows) => rows,
        Err(e) => return (StatusCode::INTERNAL_SERVER_ERROR, format!("Query Error: {}", e)).into_response(),
    };

    let recent = match views::recent_game_rows(&conn) {
        Ok(rows) => rows,
        Err(e) => return (StatusCode::INTERNAL_SERVER_ERROR, format!("Query Error: {}", e)).into_response(),
    };

    let wall_of_shame = PickPair {
        with_rebuys: wall_of_shame(&rows, ProfitBasis::WithRebuys)
            .map(|r| shame_pick(r, ProfitBasis::WithRebuys)),
        original: wall_of_shame(&rows, ProfitBasis::BuyInsOnly)
            .map(|r| shame_pick(r, ProfitBasis::BuyInsOnly)),
    };

    let shark_of_the_month = PickPair {
        with_rebuys: shark_of_the_month(&recent, ProfitBasis::WithRebuys)
            .map(|r| shark_pick(r, ProfitBasis::WithRebuys)),
        original: shark_of_the_month(&recent, ProfitBasis::BuyInsOnly)
            .map(|r| shark_pick(r, ProfitBasis::BuyInsOnly)),
    };

    let items: Vec<LeaderboardItem> = rows.into_iter().map(LeaderboardItem::from).collect();

    Json(LeaderboardResponse {
        items,
        wall_of_shame,
        shark_of_the_month,
    })
    .into_response()
}

fn shame_pick(row: &LeaderboardRow, basis: ProfitBasis) -> ShamePick {
    let net_profit = match basis {
        ProfitBasis::WithRebuys => row.net_profit_with_rebuys,
        ProfitBasis::BuyInsOnly => row.original_net_profit,
    };

    ShamePick {
        player_id: row.player_id,
        name: row.name.clone(),
        net_profit,
        total_rebuys: row.total_rebuys,
    }
}

fn shark_pick(row: &RecentGameRow, basis: ProfitBasis) -> SharkPick {
    let recent_profit = match basis {
        ProfitBasis::WithRebuys => row.recent_profit_with_rebuys,
        ProfitBasis::BuyInsOnly => row.recent_profit_original,
    };

    SharkPick {
        player_id: row.player_id,
        name: row.name.clone(),
        recent_profit,
        recent_total_rebuys: row.recent_total_rebuys,
    }
}

pub async fn get_bust_club(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    let conn = match state.pool.get() {
        Ok(conn) => conn,
        Err(_) => return (StatusCode::INTERNAL_SERVER_ERROR, "DB Connection Error").into_response(),
    };

    match views::bust_club_rows(&conn, state.config.standings.bust_club_limit) {
        Ok(rows) => {
            let items: Vec<BustClubItem> = rows.into_iter().map(BustClubItem::from).collect();
            Json(items).into_response()
        }
        Err(e) => (StatusCode::INTERNAL_SERVER_ERROR, format!("Query Error: {}", e)).into_response(),
    }
}
