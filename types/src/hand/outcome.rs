use bytes::{Buf, BufMut};
use commonware_codec::{Error, FixedSize, Read, ReadExt, Write};
use std::fmt;

use super::UNIT;

/// Which side won a hand, or `Tie` when the scores are equal.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Outcome {
    Player = 0,
    Banker = 1,
    Tie = 2,
}

impl Outcome {
    /// The winning side, or `None` for a tie.
    pub fn side(self) -> Option<Side> {
        match self {
            Outcome::Player => Some(Side::Player),
            Outcome::Banker => Some(Side::Banker),
            Outcome::Tie => None,
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Player => f.pad("Player"),
            Outcome::Banker => f.pad("Banker"),
            Outcome::Tie => f.pad("Tie"),
        }
    }
}

impl Write for Outcome {
    fn write(&self, writer: &mut impl BufMut) {
        (*self as u8).write(writer);
    }
}

impl Read for Outcome {
    type Cfg = ();

    fn read_cfg(reader: &mut impl Buf, _: &Self::Cfg) -> Result<Self, Error> {
        let value = u8::read(reader)?;
        match value {
            0 => Ok(Self::Player),
            1 => Ok(Self::Banker),
            2 => Ok(Self::Tie),
            i => Err(Error::InvalidEnum(i)),
        }
    }
}

impl FixedSize for Outcome {
    const SIZE: usize = 1;
}

/// A side that can be predicted. Ties are never predicted.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Side {
    Player = 0,
    Banker = 1,
}

impl Side {
    pub fn opposite(self) -> Side {
        match self {
            Side::Player => Side::Banker,
            Side::Banker => Side::Player,
        }
    }

    /// Single-letter label used by the next-bet indicator.
    pub fn letter(self) -> char {
        match self {
            Side::Player => 'P',
            Side::Banker => 'B',
        }
    }
}

impl From<Side> for Outcome {
    fn from(side: Side) -> Self {
        match side {
            Side::Player => Outcome::Player,
            Side::Banker => Outcome::Banker,
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&Outcome::from(*self), f)
    }
}

impl Write for Side {
    fn write(&self, writer: &mut impl BufMut) {
        (*self as u8).write(writer);
    }
}

impl Read for Side {
    type Cfg = ();

    fn read_cfg(reader: &mut impl Buf, _: &Self::Cfg) -> Result<Self, Error> {
        let value = u8::read(reader)?;
        match value {
            0 => Ok(Self::Player),
            1 => Ok(Self::Banker),
            i => Err(Error::InvalidEnum(i)),
        }
    }
}

impl FixedSize for Side {
    const SIZE: usize = 1;
}

/// How the prediction live during a hand fared against that hand's outcome.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum EvaluationResult {
    Win = 0,
    Loss = 1,
    Push = 2,
}

impl EvaluationResult {
    /// Bankroll change in units.
    pub fn unit_delta(self) -> i64 {
        match self {
            EvaluationResult::Win => UNIT,
            EvaluationResult::Loss => -UNIT,
            EvaluationResult::Push => 0,
        }
    }
}

impl fmt::Display for EvaluationResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EvaluationResult::Win => f.pad("Win"),
            EvaluationResult::Loss => f.pad("Loss"),
            EvaluationResult::Push => f.pad("Push"),
        }
    }
}

impl Write for EvaluationResult {
    fn write(&self, writer: &mut impl BufMut) {
        (*self as u8).write(writer);
    }
}

impl Read for EvaluationResult {
    type Cfg = ();

    fn read_cfg(reader: &mut impl Buf, _: &Self::Cfg) -> Result<Self, Error> {
        let value = u8::read(reader)?;
        match value {
            0 => Ok(Self::Win),
            1 => Ok(Self::Loss),
            2 => Ok(Self::Push),
            i => Err(Error::InvalidEnum(i)),
        }
    }
}

impl FixedSize for EvaluationResult {
    const SIZE: usize = 1;
}
