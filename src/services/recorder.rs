use std::collections::HashMap;

use anyhow::{bail, Context, Result};
use log::info;
use rusqlite::Connection;

use crate::database::{game_logs, players, rebuys};
use crate::ledger::types::GameNightSubmission;
use crate::ledger::{payload, validation};

pub struct RecordOutcome {
    pub players_recorded: usize,
    pub rebuys_recorded: usize,
}

/// Persists one game night as a single transaction: ensure players exist,
/// insert one game-log row per player, insert their rebuy rows. A failure
/// at any step leaves the store untouched. An invalid submission never
/// reaches the store at all.
pub fn record_game_night(
    conn: &mut Connection,
    submission: &GameNightSubmission,
) -> Result<RecordOutcome> {
    let errors = validation::validation_errors(submission);
    if !errors.is_empty() {
        bail!("Invalid game night submission: {}", errors.join("; "));
    }

    let game_date = validation::parse_game_date(&submission.game_date)
        .context("Failed to parse game date")?;

    let tx = conn.transaction()?;

    let mut player_ids = HashMap::new();
    for entry in &submission.players {
        let name = entry.player_name.trim();
        let player = players::ensure_player(&tx, name)?;
        player_ids.insert(name.to_string(), player.id);
    }

    let game_log_rows = payload::build_game_log_rows(submission, game_date, &player_ids)?;

    let mut rebuys_recorded = 0;
    for (entry, row) in submission.players.iter().zip(&game_log_rows) {
        let log = game_logs::insert_game_log(&tx, row.player_id, row.game_date, row.buy_in, row.cash_out)?;

        for rebuy in payload::build_rebuy_rows(log.id, row.player_id, game_date, entry) {
            rebuys::insert_rebuy(
                &tx,
                rebuy.game_log_id,
                rebuy.player_id,
                rebuy.game_date,
                rebuy.rebuy_amount,
                rebuy.rebuy_sequence,
            )?;
            rebuys_recorded += 1;
        }
    }

    tx.commit().context("Failed to commit game night")?;

    info!(
        "Recorded game night {} for {} players with {} rebuys",
        game_date,
        submission.players.len(),
        rebuys_recorded
    );

    Ok(RecordOutcome {
        players_recorded: submission.players.len(),
        rebuys_recorded,
    })
}
