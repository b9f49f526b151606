//! Append-only record of finalized hands.

use navigator_types::Hand;
use thiserror::Error;

/// Reasons a hand is refused by the ledger.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LedgerError {
    #[error("hand out of order: expected sequence {expected}, got {got}")]
    OutOfOrder { expected: u64, got: u64 },
    #[error("running total mismatch at sequence {sequence}: expected {expected}, got {got}")]
    RunningTotalMismatch {
        sequence: u64,
        expected: i64,
        got: i64,
    },
    #[error("running total overflows at sequence {sequence}")]
    Overflow { sequence: u64 },
}

/// Ordered hands of one session.
///
/// Hands can only be appended at the end; [Ledger::reset] is the only removal.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Ledger {
    hands: Vec<Hand>,
}

impl Ledger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a finalized hand.
    ///
    /// The hand must carry the next sequence number and a running total equal to
    /// the previous total plus the unit delta of its result. A refused hand leaves
    /// the ledger untouched.
    pub fn append(&mut self, hand: Hand) -> Result<(), LedgerError> {
        let expected = self.next_sequence();
        if hand.sequence != expected {
            return Err(LedgerError::OutOfOrder {
                expected,
                got: hand.sequence,
            });
        }
        let expected_total = self
            .running_total()
            .checked_add(hand.unit_delta())
            .ok_or(LedgerError::Overflow {
                sequence: hand.sequence,
            })?;
        if hand.running_total != expected_total {
            return Err(LedgerError::RunningTotalMismatch {
                sequence: hand.sequence,
                expected: expected_total,
                got: hand.running_total,
            });
        }
        self.hands.push(hand);
        Ok(())
    }

    pub fn count(&self) -> usize {
        self.hands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.hands.is_empty()
    }

    /// Most recent hand.
    pub fn latest(&self) -> Option<&Hand> {
        self.hands.last()
    }

    /// Sequence number the next appended hand must carry.
    pub fn next_sequence(&self) -> u64 {
        self.hands.len() as u64 + 1
    }

    /// Running total after the latest hand (0 when empty).
    pub fn running_total(&self) -> i64 {
        self.latest().map_or(0, |hand| hand.running_total)
    }

    /// Running total through `sequence` inclusive.
    ///
    /// Sequence 0 is the session start and always totals 0.
    pub fn running_total_at(&self, sequence: u64) -> Option<i64> {
        if sequence == 0 {
            return Some(0);
        }
        let index = usize::try_from(sequence - 1).ok()?;
        self.hands.get(index).map(|hand| hand.running_total)
    }

    /// Hands in insertion order.
    pub fn hands(&self) -> &[Hand] {
        &self.hands
    }

    /// Hands with the most recent first, as the history list shows them.
    pub fn newest_first(&self) -> impl Iterator<Item = &Hand> {
        self.hands.iter().rev()
    }

    /// `(sequence, running_total)` points for charting, starting at the origin.
    pub fn series(&self) -> Vec<(u64, i64)> {
        let mut points = Vec::with_capacity(self.hands.len() + 1);
        points.push((0, 0));
        points.extend(self.hands.iter().map(|hand| (hand.sequence, hand.running_total)));
        points
    }

    /// Drop every hand.
    pub fn reset(&mut self) {
        self.hands.clear();
    }
}
