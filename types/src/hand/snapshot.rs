use bytes::{Buf, BufMut};
use commonware_codec::{EncodeSize, Error, Read, ReadExt, ReadRangeExt, Write};

use super::{Hand, Side, MAX_LEDGER_HANDS};

/// Persisted form of a session: every recorded hand plus the standing prediction.
///
/// A snapshot is untrusted input. The engine replays it before accepting it.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Snapshot {
    pub hands: Vec<Hand>,
    pub current_prediction: Option<Side>,
}

impl Write for Snapshot {
    fn write(&self, writer: &mut impl BufMut) {
        self.hands.write(writer);
        self.current_prediction.write(writer);
    }
}

impl Read for Snapshot {
    type Cfg = ();

    fn read_cfg(reader: &mut impl Buf, _: &Self::Cfg) -> Result<Self, Error> {
        Ok(Self {
            hands: Vec::<Hand>::read_range(reader, 0..=MAX_LEDGER_HANDS)?,
            current_prediction: Option::<Side>::read(reader)?,
        })
    }
}

impl EncodeSize for Snapshot {
    fn encode_size(&self) -> usize {
        self.hands.encode_size() + self.current_prediction.encode_size()
    }
}
