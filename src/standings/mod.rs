pub mod grouping;
pub mod picks;

pub use grouping::{group_game_nights, GameNightRecord, PlayerNightResult, RebuyDetail};
pub use picks::{shark_of_the_month, wall_of_shame, ProfitBasis};
