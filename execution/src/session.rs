//! Session state threaded through hand submissions.
//!
//! A [Session] is a plain value: [Session::submit_hand] and [Session::reset]
//! return a new session and leave the receiver untouched.

use crate::evaluator::evaluate;
use crate::ledger::{Ledger, LedgerError};
use navigator_types::{Hand, Side, Snapshot};
use thiserror::Error;
use tracing::{debug, warn};

/// Error returned by session operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SessionError {
    #[error("tie not permitted: both scores are {score}")]
    TieNotPermitted { score: u8 },
    #[error("ledger rejected hand: {0}")]
    Ledger(#[from] LedgerError),
    #[error("snapshot does not replay at sequence {sequence}")]
    Corrupt { sequence: u64 },
}

/// Coarse session state.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Status {
    /// No hands and no prediction.
    Empty,
    /// At least one hand recorded.
    Active,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Session {
    ledger: Ledger,
    current_prediction: Option<Side>,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a hand and return the resulting session.
    ///
    /// Tie score pairs are refused. The appended hand is available from
    /// [Session::latest] on the returned session.
    pub fn submit_hand(&self, player_score: u8, banker_score: u8) -> Result<Session, SessionError> {
        if player_score == banker_score {
            warn!(score = player_score, "rejected tie score pair");
            return Err(SessionError::TieNotPermitted {
                score: player_score,
            });
        }
        let mut next = self.clone();
        next.record(player_score, banker_score)?;
        Ok(next)
    }

    /// Return an empty session.
    pub fn reset(&self) -> Session {
        debug!(hands = self.ledger.count(), "session reset");
        Session::default()
    }

    /// Rebuild a session from a snapshot.
    ///
    /// Every hand is replayed from its scores and must match the stored copy,
    /// and the stored prediction must match the replayed one.
    pub fn restore(snapshot: &Snapshot) -> Result<Session, SessionError> {
        let mut session = Session::default();
        for stored in &snapshot.hands {
            let replayed = session.record(stored.player_score, stored.banker_score)?;
            if replayed != *stored {
                return Err(SessionError::Corrupt {
                    sequence: stored.sequence,
                });
            }
        }
        if session.current_prediction != snapshot.current_prediction {
            return Err(SessionError::Corrupt {
                sequence: session.ledger.count() as u64,
            });
        }
        debug!(hands = session.ledger.count(), "session restored");
        Ok(session)
    }

    /// Capture the hands and prediction for persistence.
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            hands: self.ledger.hands().to_vec(),
            current_prediction: self.current_prediction,
        }
    }

    pub fn status(&self) -> Status {
        if self.ledger.is_empty() {
            Status::Empty
        } else {
            Status::Active
        }
    }

    pub fn ledger(&self) -> &Ledger {
        &self.ledger
    }

    /// Prediction for the next hand.
    pub fn current_prediction(&self) -> Option<Side> {
        self.current_prediction
    }

    /// Most recently recorded hand.
    pub fn latest(&self) -> Option<&Hand> {
        self.ledger.latest()
    }

    /// Evaluate and append in place. Ties are accepted here so replay stays total.
    fn record(&mut self, player_score: u8, banker_score: u8) -> Result<Hand, SessionError> {
        let prior_prediction = self.current_prediction;
        let evaluation = evaluate(
            player_score,
            banker_score,
            prior_prediction,
            self.ledger.running_total(),
        );
        let hand = evaluation.into_hand(
            self.ledger.next_sequence(),
            player_score,
            banker_score,
            prior_prediction,
        );
        self.ledger.append(hand)?;
        self.current_prediction = evaluation.next_prediction;
        debug!(
            sequence = hand.sequence,
            player_score,
            banker_score,
            outcome = %hand.outcome,
            result = %hand.result,
            running_total = hand.running_total,
            next = ?self.current_prediction,
            "hand recorded"
        );
        Ok(hand)
    }
}
