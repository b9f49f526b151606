use bytes::{Buf, BufMut};
use commonware_codec::{EncodeSize, Error, Read, ReadExt, Write};

use super::{EvaluationResult, Outcome, Side};

/// A finalized hand as recorded in the ledger.
///
/// Hands are built once by the evaluator and never mutated afterwards.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Hand {
    /// 1-based position in the ledger.
    pub sequence: u64,
    pub player_score: u8,
    pub banker_score: u8,
    pub outcome: Outcome,
    /// Prediction that was live when this hand was played (`None` on the first hand).
    pub prior_prediction: Option<Side>,
    pub result: EvaluationResult,
    /// Cumulative units through this hand inclusive.
    pub running_total: i64,
    pub margin: u8,
}

impl Hand {
    /// Bankroll change recorded by this hand, derived from its result.
    pub fn unit_delta(&self) -> i64 {
        self.result.unit_delta()
    }
}

impl Write for Hand {
    fn write(&self, writer: &mut impl BufMut) {
        self.sequence.write(writer);
        self.player_score.write(writer);
        self.banker_score.write(writer);
        self.outcome.write(writer);
        self.prior_prediction.write(writer);
        self.result.write(writer);
        self.running_total.write(writer);
        self.margin.write(writer);
    }
}

impl Read for Hand {
    type Cfg = ();

    fn read_cfg(reader: &mut impl Buf, _: &Self::Cfg) -> Result<Self, Error> {
        Ok(Self {
            sequence: u64::read(reader)?,
            player_score: u8::read(reader)?,
            banker_score: u8::read(reader)?,
            outcome: Outcome::read(reader)?,
            prior_prediction: Option::<Side>::read(reader)?,
            result: EvaluationResult::read(reader)?,
            running_total: i64::read(reader)?,
            margin: u8::read(reader)?,
        })
    }
}

impl EncodeSize for Hand {
    fn encode_size(&self) -> usize {
        self.sequence.encode_size()
            + self.player_score.encode_size()
            + self.banker_score.encode_size()
            + self.outcome.encode_size()
            + self.prior_prediction.encode_size()
            + self.result.encode_size()
            + self.running_total.encode_size()
            + self.margin.encode_size()
    }
}
