use axum::{
    extract::State,
    http::{HeaderMap, StatusCode},
    response::{IntoResponse, Json},
};
use std::sync::Arc;

use super::{is_authorized, AppState};
use crate::api::models::{GameNightRequest, RecordedGameResponse, ValidationErrorsResponse};
use crate::ledger;
use crate::ledger::types::GameNightSubmission;
use crate::services::recorder;

pub async fn record_game(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    Json(request): Json<GameNightRequest>,
) -> impl IntoResponse {
    if !is_authorized(&headers, &state.config) {
        return StatusCode::UNAUTHORIZED.into_response();
    }

    let submission: GameNightSubmission = request.into();

    // Every violated rule goes back at once, not just the first
    let errors = ledger::validation_errors(&submission);
    if !errors.is_empty() {
        return (
            StatusCode::UNPROCESSABLE_ENTITY,
            Json(ValidationErrorsResponse { errors }),
        )
            .into_response();
    }

    let mut conn = match state.pool.get() {
        Ok(conn) => conn,
        Err(_) => return (StatusCode::INTERNAL_SERVER_ERROR, "DB Connection Error").into_response(),
    };

    match recorder::record_game_night(&mut conn, &submission) {
        Ok(outcome) => {
            let message = format!(
                "Game recorded successfully for {} players with {} rebuys!",
                outcome.players_recorded, outcome.rebuys_recorded
            );
            (
                StatusCode::CREATED,
                Json(RecordedGameResponse {
                    players_recorded: outcome.players_recorded,
                    rebuys_recorded: outcome.rebuys_recorded,
                    message,
                }),
            )
                .into_response()
        }
        Err(e) => (StatusCode::INTERNAL_SERVER_ERROR, format!("Store Error: {}", e)).into_response(),
    }
}
