//! Plain-text rendering of hands and the next-bet indicator.

use navigator_types::{Hand, Outcome, Side};

/// `P`, `B`, or `-` when no prediction is live.
pub fn indicator(prediction: Option<Side>) -> char {
    prediction.map_or('-', Side::letter)
}

/// One history row, e.g. `#2    >B 3 : 6  Δ3  pred P  Loss  total -1`.
pub fn hand_line(hand: &Hand) -> String {
    let winner = match hand.outcome {
        Outcome::Player => "P<",
        Outcome::Banker => ">B",
        Outcome::Tie => "==",
    };
    format!(
        "#{:<4} {} {} : {}  Δ{}  pred {}  {:<4}  total {}",
        hand.sequence,
        winner,
        hand.player_score,
        hand.banker_score,
        hand.margin,
        indicator(hand.prior_prediction),
        hand.result,
        hand.running_total,
    )
}
