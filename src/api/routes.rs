use axum::{
    routing::{get, post, put},
    Router,
};
use std::sync::Arc;

use crate::api::handlers::{
    games::record_game,
    history::get_history,
    players::{create_player, delete_player, get_players, rename_player},
    standings::{get_bust_club, get_leaderboard},
    AppState,
};

pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/api/players", get(get_players).post(create_player))
        .route("/api/players/:id", put(rename_player).delete(delete_player))
        .route("/api/games", post(record_game))
        .route("/api/history", get(get_history))
        .route("/api/leaderboard", get(get_leaderboard))
        .route("/api/bust-club", get(get_bust_club))
        .with_state(state)
}
