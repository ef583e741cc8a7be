use axum::{
    extract::{Path, State},
    http::{HeaderMap, StatusCode},
    response::{IntoResponse, Json},
};
use std::sync::Arc;

use super::{is_authorized, AppState};
use crate::api::models::{NewPlayerRequest, PlayerResponse, RenamePlayerRequest};
use crate::database;

pub async fn get_players(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    let conn = match state.pool.get() {
        Ok(conn) => conn,
        Err(_) => return (StatusCode::INTERNAL_SERVER_ERROR, "DB Connection Error").into_response(),
    };

    match database::players::list_all(&conn) {
        Ok(players) => {
            let items: Vec<PlayerResponse> = players.into_iter().map(PlayerResponse::from).collect();
            Json(items).into_response()
        }
        Err(e) => (StatusCode::INTERNAL_SERVER_ERROR, format!("Query Error: {}", e)).into_response(),
    }
}

pub async fn create_player(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    Json(request): Json<NewPlayerRequest>,
) -> impl IntoResponse {
    if !is_authorized(&headers, &state.config) {
        return StatusCode::UNAUTHORIZED.into_response();
    }

    let name = request.name.trim();
    if name.is_empty() {
        return (StatusCode::UNPROCESSABLE_ENTITY, "Player name is required").into_response();
    }

    let conn = match state.pool.get() {
        Ok(conn) => conn,
        Err(_) => return (StatusCode::INTERNAL_SERVER_ERROR, "DB Connection Error").into_response(),
    };

    // Name uniqueness is the store's constraint; a duplicate surfaces here
    match database::players::insert_new_player(&conn, name) {
        Ok(player) => (StatusCode::CREATED, Json(PlayerResponse::from(player))).into_response(),
        Err(e) => (StatusCode::INTERNAL_SERVER_ERROR, format!("Query Error: {}", e)).into_response(),
    }
}

pub async fn rename_player(
    State(state): State<Arc<AppState>>,
    Path(player_id): Path<i64>,
    headers: HeaderMap,
    Json(request): Json<RenamePlayerRequest>,
) -> impl IntoResponse {
    if !is_authorized(&headers, &state.config) {
        return StatusCode::UNAUTHORIZED.into_response();
    }

    let name = request.name.trim();
    if name.is_empty() {
        return (StatusCode::UNPROCESSABLE_ENTITY, "Player name is required").into_response();
    }

    let conn = match state.pool.get() {
        Ok(conn) => conn,
        Err(_) => return (StatusCode::INTERNAL_SERVER_ERROR, "DB Connection Error").into_response(),
    };

    match database::players::rename_player(&conn, player_id, name) {
        Ok(Some(player)) => Json(PlayerResponse::from(player)).into_response(),
        Ok(None) => StatusCode::NOT_FOUND.into_response(),
        Err(e) => (StatusCode::INTERNAL_SERVER_ERROR, format!("Query Error: {}", e)).into_response(),
    }
}

pub async fn delete_player(
    State(state): State<Arc<AppState>>,
    Path(player_id): Path<i64>,
    headers: HeaderMap,
) -> impl IntoResponse {
    if !is_authorized(&headers, &state.config) {
        return StatusCode::UNAUTHORIZED.into_response();
    }

    let conn = match state.pool.get() {
        Ok(conn) => conn,
        Err(_) => return (StatusCode::INTERNAL_SERVER_ERROR, "DB Connection Error").into_response(),
    };

    // Cascade removes the player's game logs and rebuys with them
    match database::players::delete_player(&conn, player_id) {
        Ok(true) => StatusCode::NO_CONTENT.into_response(),
        Ok(false) => StatusCode::NOT_FOUND.into_response(),
        Err(e) => (StatusCode::INTERNAL_SERVER_ERROR, format!("Query Error: {}", e)).into_response(),
    }
}
