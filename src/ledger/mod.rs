pub mod payload;
pub mod types;
pub mod validation;

pub use payload::{build_game_log_rows, build_rebuy_rows, NewGameLog, NewRebuy};
pub use types::{GameNightSubmission, PlayerEntry};
pub use validation::{is_valid, validation_errors};
