/// One player's line on the night's ledger: what they cashed out with and
/// any rebuys they made along the way.
#[derive(Debug, Clone)]
pub struct PlayerEntry {
    pub player_name: String,
    pub cash_out: f64,
    pub rebuys: Vec<f64>,
}

impl PlayerEntry {
    /// Buy-in plus every rebuy slot, zero-amount slots included. This is
    /// the figure shown against the entry before submission.
    pub fn total_investment(&self, buy_in: f64) -> f64 {
        let total_rebuys: f64 = self.rebuys.iter().sum();
        buy_in + total_rebuys
    }
}

/// A full game-night submission: one date, one shared buy-in, one entry per
/// player at the table.
#[derive(Debug, Clone)]
pub struct GameNightSubmission {
    pub game_date: String,
    pub buy_in: f64,
    pub players: Vec<PlayerEntry>,
}

impl GameNightSubmission {
    pub fn total_cash_out(&self) -> f64 {
        self.players.iter().map(|p| p.cash_out).sum()
    }

    pub fn total_investment(&self) -> f64 {
        self.players
            .iter()
            .map(|p| p.total_investment(self.buy_in))
            .sum()
    }
}
