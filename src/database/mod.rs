pub mod connection;
pub mod game_logs;
pub mod models;
pub mod players;
pub mod rebuys;
pub mod setup;
pub mod views;

pub use connection::{create_pool, database_path, get_connection, DbConn, DbPool};
pub use models::*;
