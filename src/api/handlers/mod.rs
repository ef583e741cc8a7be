use axum::http::HeaderMap;
use r2d2::Pool;
use r2d2_sqlite::SqliteConnectionManager;

use crate::config::settings::AppConfig;

pub mod games;
pub mod history;
pub mod players;
pub mod standings;

pub struct AppState {
    pub pool: Pool<SqliteConnectionManager>,
    pub config: AppConfig,
}

/// Single shared secret on every mutating request. No session, no token;
/// the client re-sends it each time.
pub fn is_authorized(headers: &HeaderMap, config: &AppConfig) -> bool {
    headers
        .get("x-admin-password")
        .and_then(|h| h.to_str().ok())
        == Some(config.auth.admin_password.as_str())
}
