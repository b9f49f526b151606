/// Highest score a single baccarat hand can total.
pub const MAX_SCORE: u8 = 9;

/// Margin at or above which the strategy follows the winner instead of chopping.
pub const TREND_MARGIN: u8 = 5;

/// Units won or lost when a prediction is scored.
pub const UNIT: i64 = 1;

/// Upper bound on hands accepted when decoding a snapshot.
pub const MAX_LEDGER_HANDS: usize = 10_000;
