use crate::database::models::{LeaderboardRow, RecentGameRow};

/// Which investment total a profit figure is measured against. The client
/// toggle switches between the two; the selection algorithm is the same.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProfitBasis {
    WithRebuys,
    BuyInsOnly,
}

/// The single biggest overall loser: most negative net profit among players
/// who are down. Ties go to the earlier row.
pub fn wall_of_shame(rows: &[LeaderboardRow], basis: ProfitBasis) -> Option<&LeaderboardRow> {
    rows.iter()
        .filter(|r| net_profit(r, basis) < 0.0)
        .reduce(|worst, r| {
            if net_profit(r, basis) < net_profit(worst, basis) {
                r
            } else {
                worst
            }
        })
}

/// The best recent performer: highest recent profit among players who are
/// up over the store-defined trailing window. Ties go to the earlier row.
pub fn shark_of_the_month(rows: &[RecentGameRow], basis: ProfitBasis) -> Option<&RecentGameRow> {
    rows.iter()
        .filter(|r| recent_profit(r, basis) > 0.0)
        .reduce(|best, r| {
            if recent_profit(r, basis) > recent_profit(best, basis) {
                r
            } else {
                best
            }
        })
}

fn net_profit(row: &LeaderboardRow, basis: ProfitBasis) -> f64 {
    match basis {
        ProfitBasis::WithRebuys => row.net_profit_with_rebuys,
        ProfitBasis::BuyInsOnly => row.original_net_profit,
    }
}

fn recent_profit(row: &RecentGameRow, basis: ProfitBasis) -> f64 {
    match basis {
        ProfitBasis::WithRebuys => row.recent_profit_with_rebuys,
        ProfitBasis::BuyInsOnly => row.recent_profit_original,
    }
}
