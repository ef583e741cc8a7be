use std::collections::HashMap;

use anyhow::{anyhow, Result};
use chrono::NaiveDate;

use super::types::{GameNightSubmission, PlayerEntry};

#[derive(Debug, Clone, PartialEq)]
pub struct NewGameLog {
    pub player_id: i64,
    pub game_date: NaiveDate,
    pub buy_in: f64,
    pub cash_out: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct NewRebuy {
    pub game_log_id: i64,
    pub player_id: i64,
    pub game_date: NaiveDate,
    pub rebuy_amount: f64,
    pub rebuy_sequence: i32,
}

/// One game-log row per player, keyed by resolved player id. The legacy
/// `buy_in` column carries the initial buy-in only; rebuys are persisted as
/// their own rows.
pub fn build_game_log_rows(
    submission: &GameNightSubmission,
    game_date: NaiveDate,
    player_ids: &HashMap<String, i64>,
) -> Result<Vec<NewGameLog>> {
    submission
        .players
        .iter()
        .map(|entry| {
            let name = entry.player_name.trim();
            let player_id = *player_ids
                .get(name)
                .ok_or_else(|| anyhow!("Player {name} not found"))?;

            Ok(NewGameLog {
                player_id,
                game_date,
                buy_in: submission.buy_in,
                cash_out: entry.cash_out,
            })
        })
        .collect()
}

/// Rebuy rows for one player's entry. Zero-amount slots are dropped;
/// sequence numbers keep their 1-based position in the entry list, so a
/// dropped slot leaves a gap.
pub fn build_rebuy_rows(
    game_log_id: i64,
    player_id: i64,
    game_date: NaiveDate,
    entry: &PlayerEntry,
) -> Vec<NewRebuy> {
    entry
        .rebuys
        .iter()
        .enumerate()
        .filter(|(_, amount)| **amount > 0.0)
        .map(|(idx, amount)| NewRebuy {
            game_log_id,
            player_id,
            game_date,
            rebuy_amount: *amount,
            rebuy_sequence: (idx + 1) as i32,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date() -> NaiveDate {
        "2024-01-05".parse().unwrap()
    }

    #[test]
    fn game_log_rows_keep_the_initial_buy_in_only() {
        let submission = GameNightSubmission {
            game_date: "2024-01-05".to_string(),
            buy_in: 30.0,
            players: vec![PlayerEntry {
                player_name: "Alice".to_string(),
                cash_out: 65.0,
                rebuys: vec![20.0, 15.0],
            }],
        };
        let ids = HashMap::from([("Alice".to_string(), 7)]);

        let rows = build_game_log_rows(&submission, date(), &ids).unwrap();
        assert_eq!(
            rows,
            vec![NewGameLog {
                player_id: 7,
                game_date: date(),
                buy_in: 30.0,
                cash_out: 65.0,
            }]
        );
    }

    #[test]
    fn unresolved_player_name_fails_the_build() {
        let submission = GameNightSubmission {
            game_date: "2024-01-05".to_string(),
            buy_in: 30.0,
            players: vec![PlayerEntry {
                player_name: "Ghost".to_string(),
                cash_out: 30.0,
                rebuys: vec![],
            }],
        };

        let result = build_game_log_rows(&submission, date(), &HashMap::new());
        assert!(result.is_err());
    }

    #[test]
    fn zero_rebuy_slots_are_dropped_but_sequences_keep_their_position() {
        let entry = PlayerEntry {
            player_name: "Alice".to_string(),
            cash_out: 0.0,
            rebuys: vec![20.0, 0.0, 15.0],
        };

        let rows = build_rebuy_rows(42, 7, date(), &entry);
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].rebuy_amount, 20.0);
        assert_eq!(rows[0].rebuy_sequence, 1);
        assert_eq!(rows[1].rebuy_amount, 15.0);
        assert_eq!(rows[1].rebuy_sequence, 3);
        assert!(rows.iter().all(|r| r.game_log_id == 42 && r.player_id == 7));
    }

    #[test]
    fn no_rebuys_means_no_rows() {
        let entry = PlayerEntry {
            player_name: "Bob".to_string(),
            cash_out: 30.0,
            rebuys: vec![],
        };

        assert!(build_rebuy_rows(1, 1, date(), &entry).is_empty());
    }
}
