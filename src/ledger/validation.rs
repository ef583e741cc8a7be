use std::collections::HashSet;

use chrono::NaiveDate;

use super::types::GameNightSubmission;

// Floating-point currency comparison; a night is balanced when the books
// agree to the cent.
pub const BALANCE_TOLERANCE: f64 = 0.01;

pub fn is_valid(submission: &GameNightSubmission) -> bool {
    validation_errors(submission).is_empty()
}

/// Every violated rule, not just the first. The list is what the client
/// shows next to the form.
pub fn validation_errors(submission: &GameNightSubmission) -> Vec<String> {
    let mut errors = Vec::new();

    if submission.game_date.trim().is_empty() {
        errors.push("Game date is required".to_string());
    } else if parse_game_date(&submission.game_date).is_none() {
        errors.push("Game date must be a valid YYYY-MM-DD date".to_string());
    }

    if !(submission.buy_in.is_finite() && submission.buy_in > 0.0) {
        errors.push("Buy-in amount must be a positive number".to_string());
    }

    if submission.players.is_empty() {
        errors.push("At least one player is required".to_string());
    }

    if !submission
        .players
        .iter()
        .all(|p| !p.player_name.trim().is_empty())
    {
        errors.push("All players must be selected".to_string());
    }

    if !submission
        .players
        .iter()
        .all(|p| p.cash_out.is_finite() && p.cash_out >= 0.0)
    {
        errors.push("All final amounts must be valid non-negative numbers".to_string());
    }

    if !submission
        .players
        .iter()
        .all(|p| p.rebuys.iter().all(|r| r.is_finite() && *r >= 0.0))
    {
        errors.push("All rebuy amounts must be valid non-negative numbers".to_string());
    }

    if let Some(name) = first_duplicate_name(submission) {
        errors.push(format!("Player \"{name}\" appears more than once"));
    }

    let total_cash_out = submission.total_cash_out();
    let total_investment = submission.total_investment();
    if (total_cash_out - total_investment).abs() >= BALANCE_TOLERANCE {
        errors.push(format!(
            "Total cash out (${total_cash_out:.2}) must equal total investment (${total_investment:.2})"
        ));
    }

    errors
}

pub fn parse_game_date(raw: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d").ok()
}

fn first_duplicate_name(submission: &GameNightSubmission) -> Option<&str> {
    let mut seen = HashSet::new();
    for entry in &submission.players {
        let name = entry.player_name.trim();
        if name.is_empty() {
            continue;
        }
        if !seen.insert(name) {
            return Some(name);
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ledger::types::PlayerEntry;

    fn entry(name: &str, cash_out: f64, rebuys: &[f64]) -> PlayerEntry {
        PlayerEntry {
            player_name: name.to_string(),
            cash_out,
            rebuys: rebuys.to_vec(),
        }
    }

    fn night(date: &str, buy_in: f64, players: Vec<PlayerEntry>) -> GameNightSubmission {
        GameNightSubmission {
            game_date: date.to_string(),
            buy_in,
            players,
        }
    }

    #[test]
    fn balanced_four_player_night_is_valid() {
        let submission = night(
            "2024-01-05",
            30.0,
            vec![
                entry("Alice", 40.0, &[]),
                entry("Bob", 20.0, &[]),
                entry("Carol", 35.0, &[]),
                entry("Dave", 25.0, &[]),
            ],
        );

        assert!(is_valid(&submission));
        assert!(validation_errors(&submission).is_empty());
    }

    #[test]
    fn imbalance_reports_both_totals_to_the_cent() {
        let submission = night(
            "2024-01-05",
            30.0,
            vec![
                entry("Alice", 40.0, &[]),
                entry("Bob", 20.0, &[]),
                entry("Carol", 35.0, &[]),
                entry("Dave", 20.0, &[]),
            ],
        );

        let errors = validation_errors(&submission);
        assert_eq!(errors.len(), 1);
        assert_eq!(
            errors[0],
            "Total cash out ($115.00) must equal total investment ($120.00)"
        );
    }

    #[test]
    fn rebuys_count_toward_the_investment_side() {
        // 2 x 30 buy-in + 20 rebuy = 80 on the table
        let submission = night(
            "2024-01-05",
            30.0,
            vec![entry("Alice", 65.0, &[20.0]), entry("Bob", 15.0, &[])],
        );

        assert!(is_valid(&submission));
    }

    #[test]
    fn zero_rebuy_slots_still_count_in_the_session_total() {
        let p = entry("Alice", 0.0, &[20.0, 0.0, 15.0]);
        assert_eq!(p.total_investment(30.0), 65.0);
    }

    #[test]
    fn every_violation_is_reported_not_just_the_first() {
        let submission = night(
            "",
            0.0,
            vec![entry("", -5.0, &[-1.0]), entry("", 0.0, &[])],
        );

        let errors = validation_errors(&submission);
        assert!(errors.iter().any(|e| e == "Game date is required"));
        assert!(errors.iter().any(|e| e == "Buy-in amount must be a positive number"));
        assert!(errors.iter().any(|e| e == "All players must be selected"));
        assert!(errors
            .iter()
            .any(|e| e == "All final amounts must be valid non-negative numbers"));
        assert!(errors
            .iter()
            .any(|e| e == "All rebuy amounts must be valid non-negative numbers"));
    }

    #[test]
    fn unparseable_date_is_rejected() {
        let submission = night("next friday", 30.0, vec![entry("Alice", 30.0, &[])]);

        let errors = validation_errors(&submission);
        assert!(errors
            .iter()
            .any(|e| e == "Game date must be a valid YYYY-MM-DD date"));
    }

    #[test]
    fn duplicate_player_is_a_hard_error() {
        let submission = night(
            "2024-01-05",
            30.0,
            vec![entry("Alice", 30.0, &[]), entry("Alice", 30.0, &[])],
        );

        let errors = validation_errors(&submission);
        assert!(errors
            .iter()
            .any(|e| e == "Player \"Alice\" appears more than once"));
    }

    #[test]
    fn empty_player_list_is_rejected() {
        let submission = night("2024-01-05", 30.0, vec![]);

        let errors = validation_errors(&submission);
        assert!(errors.iter().any(|e| e == "At least one player is required"));
        // An empty night balances (0 == 0), so no imbalance error on top
        assert!(!errors.iter().any(|e| e.starts_with("Total cash out")));
    }
}
