use std::fmt;
use std::fmt::{Debug, Display, Formatter};

pub type Result<T = (), E = anyhow::Error> = std::result::Result<T, E>;

/// Error type indicating a character that is not `0` or `1` at a specific index.
#[derive(Debug, Clone, Copy, Eq, PartialEq, thiserror::Error)]
pub struct InvalidBitAt(pub usize, pub char);

impl Display for InvalidBitAt {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "invalid bit {:?} at index {}", self.1, self.0)
    }
}

/// Error type indicating that the sequence holds more than
/// [`BitSequence::MAX_LEN`](crate::BitSequence::MAX_LEN) bits.
#[derive(Debug, Clone, Copy, Eq, PartialEq, thiserror::Error)]
pub struct TooLong(pub usize);

impl Display for TooLong {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "sequence has {} bits, at most {} allowed",
            self.0,
            crate::BitSequence::MAX_LEN
        )
    }
}

/// Error type indicating that the character was not a bit.
#[derive(Debug, Clone, Copy, Eq, PartialEq, thiserror::Error)]
pub struct InvalidBit;

impl Display for InvalidBit {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        Debug::fmt(self, f)
    }
}

/// Error type indicating that the initial level was not recognized.
#[derive(Debug, Clone, Eq, PartialEq, thiserror::Error)]
pub struct InvalidInitialLevel(pub String);

impl Display for InvalidInitialLevel {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "invalid initial level {:?}, expected high or low", self.0)
    }
}
