//! Seeded random shoe for exercising the strategy offline.

use crate::store::{self, StoreError};
use navigator_execution::{Ledger, Session, SessionError};
use navigator_types::{EvaluationResult, MAX_SCORE};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha20Rng;
use std::path::Path;

/// Aggregate results of a ledger.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Summary {
    pub hands: usize,
    pub wins: usize,
    pub losses: usize,
    pub pushes: usize,
    pub final_total: i64,
    /// Highest running total reached (the session starts at 0).
    pub peak: i64,
    /// Lowest running total reached (the session starts at 0).
    pub trough: i64,
}

impl Summary {
    pub fn from_ledger(ledger: &Ledger) -> Self {
        let mut summary = Summary::default();
        for hand in ledger.hands() {
            summary.hands += 1;
            match hand.result {
                EvaluationResult::Win => summary.wins += 1,
                EvaluationResult::Loss => summary.losses += 1,
                EvaluationResult::Push => summary.pushes += 1,
            }
            summary.peak = summary.peak.max(hand.running_total);
            summary.trough = summary.trough.min(hand.running_total);
        }
        summary.final_total = ledger.running_total();
        summary
    }
}

/// Play `hands` random non-tie hands into a fresh session.
pub fn run(hands: usize, seed: u64) -> Result<Session, SessionError> {
    let mut rng = ChaCha20Rng::seed_from_u64(seed);
    let mut session = Session::new();
    let mut played = 0;
    while played < hands {
        let player = rng.gen_range(0..=MAX_SCORE);
        let banker = rng.gen_range(0..=MAX_SCORE);
        if player == banker {
            continue;
        }
        session = session.submit_hand(player, banker)?;
        played += 1;
    }
    Ok(session)
}

/// Run a simulation and write it to `output` when one is given.
///
/// Simulated hands never touch a session file unless it is named here.
pub fn run_to(hands: usize, seed: u64, output: Option<&Path>) -> Result<Session, StoreError> {
    let session = run(hands, seed)?;
    if let Some(path) = output {
        store::save(path, &session)?;
    }
    Ok(session)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_path(name: &str) -> std::path::PathBuf {
        std::env::temp_dir().join(format!("navigator-sim-{}-{name}", std::process::id()))
    }

    #[test]
    fn test_run_is_deterministic() {
        let a = run(100, 7).unwrap();
        let b = run(100, 7).unwrap();
        assert_eq!(a, b);
        assert_eq!(a.ledger().count(), 100);
    }

    #[test]
    fn test_run_starts_fresh() {
        let session = run(10, 1).unwrap();
        let first = session.ledger().hands()[0];
        assert_eq!(first.sequence, 1);
        assert_eq!(first.prior_prediction, None);
        assert_eq!(first.result, EvaluationResult::Push);
    }

    #[test]
    fn test_stored_session_untouched() {
        let stored = temp_path("stored");
        let saved = Session::new()
            .submit_hand(8, 2)
            .unwrap()
            .submit_hand(3, 6)
            .unwrap();
        store::save(&stored, &saved).unwrap();

        run_to(50, 3, None).unwrap();
        let loaded = store::load(&stored).unwrap();
        std::fs::remove_file(&stored).unwrap();
        assert_eq!(loaded, saved);
    }

    #[test]
    fn test_run_to_output() {
        let output = temp_path("output");
        let session = run_to(20, 4, Some(&output)).unwrap();
        let loaded = store::load(&output).unwrap();
        std::fs::remove_file(&output).unwrap();
        assert_eq!(loaded, session);
        assert_eq!(loaded.ledger().count(), 20);
    }

    #[test]
    fn test_summary_counts() {
        let session = run(250, 99).unwrap();
        let summary = Summary::from_ledger(session.ledger());
        assert_eq!(summary.hands, 250);
        assert_eq!(summary.wins + summary.losses + summary.pushes, 250);
        assert_eq!(
            summary.final_total,
            summary.wins as i64 - summary.losses as i64
        );
        assert!(summary.trough <= summary.final_total);
        assert!(summary.peak >= summary.final_total);
        // Only the opening hand can push when ties never reach the engine.
        assert_eq!(summary.pushes, 1);
    }

    #[test]
    fn test_summary_of_empty_ledger() {
        assert_eq!(Summary::from_ledger(&Ledger::new()), Summary::default());
    }
}
