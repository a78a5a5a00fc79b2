// Copyright (c) 2022, The Linecode-Rust Authors.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT.
// IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY
// CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION OF CONTRACT,
// TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION WITH THE
// SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.


use bitseq::InitialLevel;
use std::convert::TryFrom;
use std::fmt;
use std::fmt::{Display, Formatter};
use std::ops::Neg;

/// Error type indicating an integer that is not one of -1, 0 or +1.
#[derive(Debug, Clone, Copy, Eq, PartialEq, thiserror::Error)]
pub struct InvalidLevel(pub i8);

impl Display for InvalidLevel {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "invalid line level {}, expected -1, 0 or +1", self.0)
    }
}

/// A signal level on the line.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash, Ord, PartialOrd)]
#[repr(i8)]
pub enum Level {
    Negative = -1,
    Zero = 0,
    Positive = 1,
}

impl Level {
    /// The level a stateful coder starts from for the given initial condition.
    ///
    /// ```
    /// # use linecode::Level;
    /// # use bitseq::InitialLevel;
    /// assert_eq!(Level::from_initial(InitialLevel::High), Level::Positive);
    /// assert_eq!(Level::from_initial(InitialLevel::Low), Level::Negative);
    /// ```
    pub const fn from_initial(initial: InitialLevel) -> Level {
        match initial {
            InitialLevel::High => Level::Positive,
            InitialLevel::Low => Level::Negative,
        }
    }

    pub const fn as_i8(self) -> i8 {
        self as i8
    }

    pub fn as_f64(self) -> f64 {
        self.as_i8() as f64
    }
}

/// Flips polarity. `Zero` stays `Zero`.
impl Neg for Level {
    type Output = Level;

    fn neg(self) -> Self::Output {
        match self {
            Level::Negative => Level::Positive,
            Level::Zero => Level::Zero,
            Level::Positive => Level::Negative,
        }
    }
}

impl TryFrom<i8> for Level {
    type Error = InvalidLevel;

    fn try_from(value: i8) -> Result<Self, Self::Error> {
        match value {
            -1 => Ok(Level::Negative),
            0 => Ok(Level::Zero),
            1 => Ok(Level::Positive),
            x => Err(InvalidLevel(x)),
        }
    }
}

impl From<Level> for i8 {
    fn from(level: Level) -> Self {
        level.as_i8()
    }
}

impl Display for Level {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Level::Negative => f.write_str("-1"),
            Level::Zero => f.write_str("0"),
            Level::Positive => f.write_str("+1"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn level_neg() {
        assert_eq!(-Level::Positive, Level::Negative);
        assert_eq!(-Level::Negative, Level::Positive);
        assert_eq!(-Level::Zero, Level::Zero);
    }

    #[test]
    fn level_from_i8() {
        assert_eq!(Level::try_from(-1), Ok(Level::Negative));
        assert_eq!(Level::try_from(0), Ok(Level::Zero));
        assert_eq!(Level::try_from(1), Ok(Level::Positive));
        assert_eq!(Level::try_from(2), Err(InvalidLevel(2)));
        assert_eq!(i8::from(Level::Negative), -1);
        assert_eq!(Level::Positive.to_string(), "+1");
    }
}
