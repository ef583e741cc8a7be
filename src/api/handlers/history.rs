use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Json},
};
use std::sync::Arc;

use super::AppState;
use crate::api::models::{GameNightResponse, PlayerResultResponse, RebuyResponse};
use crate::database::{game_logs, rebuys};
use crate::standings::grouping::{group_game_nights, GameNightRecord};

pub async fn get_history(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    let conn = match state.pool.get() {
        Ok(conn) => conn,
        Err(_) => return (StatusCode::INTERNAL_SERVER_ERROR, "DB Connection Error").into_response(),
    };

    let rows = match game_logs::list_with_rebuys(&conn) {
        Ok(rows) => rows,
        Err(e) => return (StatusCode::INTERNAL_SERVER_ERROR, format!("Query Error: {}", e)).into_response(),
    };

    let all_rebuys = match rebuys::list_all(&conn) {
        Ok(rows) => rows,
        Err(e) => return (StatusCode::INTERNAL_SERVER_ERROR, format!("Query Error: {}", e)).into_response(),
    };

    let nights = group_game_nights(&rows, &all_rebuys);
    let response: Vec<GameNightResponse> = nights.iter().map(night_response).collect();

    Json(response).into_response()
}

fn night_response(night: &GameNightRecord) -> GameNightResponse {
    let players = night
        .players
        .iter()
        .map(|p| PlayerResultResponse {
            name: p.name.clone(),
            initial_buy_in: p.initial_buy_in,
            rebuys: p
                .rebuys
                .iter()
                .map(|r| RebuyResponse {
                    amount: r.amount,
                    sequence: r.sequence,
                })
                .collect(),
            total_investment: p.total_investment,
            cash_out: p.cash_out,
            net_result: p.net_result,
        })
        .collect();

    GameNightResponse {
        game_date: night.game_date,
        players,
        total_pot: night.total_pot(),
        total_cash_out: night.total_cash_out(),
        total_rebuys: night.total_rebuys(),
        rebuy_count: night.rebuy_count(),
        big_winner: night.big_winner().map(|p| p.name.clone()),
        big_loser: night.big_loser().map(|p| p.name.clone()),
    }
}
