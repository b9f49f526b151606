//! Hand evaluation and the margin strategy.
//!
//! Evaluating a hand does two things with the same score pair:
//! - scores the prediction that was live while the hand was played, and
//! - derives the prediction for the next hand.
//!
//! Strategy for the next hand:
//! - Tie: hold the previous prediction
//! - margin >= 5: follow the winner (trend)
//! - margin < 5: bet the other side (chop)

use crate::classifier::{classify, margin};
use navigator_types::{EvaluationResult, Hand, Outcome, Side, TREND_MARGIN};

/// Everything derived from one score pair.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Evaluation {
    pub outcome: Outcome,
    pub result: EvaluationResult,
    pub unit_delta: i64,
    pub next_prediction: Option<Side>,
    pub running_total: i64,
    pub margin: u8,
}

impl Evaluation {
    /// Finalize into a ledger entry.
    ///
    /// `prior_prediction` must be the prediction passed to [evaluate].
    pub fn into_hand(
        self,
        sequence: u64,
        player_score: u8,
        banker_score: u8,
        prior_prediction: Option<Side>,
    ) -> Hand {
        Hand {
            sequence,
            player_score,
            banker_score,
            outcome: self.outcome,
            prior_prediction,
            result: self.result,
            running_total: self.running_total,
            margin: self.margin,
        }
    }
}

/// Score the prediction that was live against this hand's outcome.
pub fn score_prediction(outcome: Outcome, prior_prediction: Option<Side>) -> EvaluationResult {
    let Some(predicted) = prior_prediction else {
        return EvaluationResult::Push;
    };
    match outcome.side() {
        None => EvaluationResult::Push,
        Some(side) if side == predicted => EvaluationResult::Win,
        Some(_) => EvaluationResult::Loss,
    }
}

/// Derive the prediction for the next hand.
pub fn next_prediction(outcome: Outcome, margin: u8, prior_prediction: Option<Side>) -> Option<Side> {
    match outcome.side() {
        None => prior_prediction,
        Some(winner) if margin >= TREND_MARGIN => Some(winner),
        Some(winner) => Some(winner.opposite()),
    }
}

/// Evaluate a score pair given the live prediction and the previous running total.
///
/// The running total saturates at the `i64` bounds.
pub fn evaluate(
    player_score: u8,
    banker_score: u8,
    prior_prediction: Option<Side>,
    prior_total: i64,
) -> Evaluation {
    let outcome = classify(player_score, banker_score);
    let margin = margin(player_score, banker_score);
    let result = score_prediction(outcome, prior_prediction);
    let unit_delta = result.unit_delta();

    Evaluation {
        outcome,
        result,
        unit_delta,
        next_prediction: next_prediction(outcome, margin, prior_prediction),
        running_total: prior_total.saturating_add(unit_delta),
        margin,
    }
}
