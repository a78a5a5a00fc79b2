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


use crate::*;
use std::convert::TryFrom;
use std::fmt;
use std::fmt::{Display, Formatter};

/// A single binary digit.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash, Ord, PartialOrd)]
pub enum Bit {
    Zero,
    One,
}

impl Bit {
    /// Tries to create a Bit from the given ASCII byte.
    ///
    /// ```
    /// # use bitseq::Bit;
    /// assert_eq!(Bit::from_ascii_byte(b'1'), Some(Bit::One));
    /// assert_eq!(Bit::from_ascii_byte(b'2'), None);
    /// ```
    pub const fn from_ascii_byte(c: u8) -> Option<Bit> {
        match c {
            b'0' => Some(Bit::Zero),
            b'1' => Some(Bit::One),
            _ => None,
        }
    }

    /// Tries to create a Bit from the given unicode character.
    ///
    /// ```
    /// # use bitseq::Bit;
    /// assert_eq!(Bit::from_char('0'), Some(Bit::Zero));
    /// assert_eq!(Bit::from_char('O'), None);
    /// ```
    pub const fn from_char(c: char) -> Option<Bit> {
        match c {
            '0' => Some(Bit::Zero),
            '1' => Some(Bit::One),
            _ => None,
        }
    }

    /// Converts this Bit into `'0'` or `'1'`.
    pub const fn to_char(self) -> char {
        match self {
            Bit::Zero => '0',
            Bit::One => '1',
        }
    }

    pub const fn is_one(self) -> bool {
        matches!(self, Bit::One)
    }

    pub const fn is_zero(self) -> bool {
        matches!(self, Bit::Zero)
    }
}

impl TryFrom<char> for Bit {
    type Error = InvalidBit;

    fn try_from(value: char) -> std::result::Result<Self, Self::Error> {
        Bit::from_char(value).ok_or(InvalidBit)
    }
}

impl TryFrom<u8> for Bit {
    type Error = InvalidBit;

    fn try_from(value: u8) -> std::result::Result<Self, Self::Error> {
        Bit::from_ascii_byte(value).ok_or(InvalidBit)
    }
}

impl From<bool> for Bit {
    fn from(value: bool) -> Self {
        if value {
            Bit::One
        } else {
            Bit::Zero
        }
    }
}

impl From<Bit> for bool {
    fn from(value: Bit) -> Self {
        value.is_one()
    }
}

impl From<Bit> for char {
    fn from(value: Bit) -> Self {
        value.to_char()
    }
}

impl Display for Bit {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        Display::fmt(&self.to_char(), f)
    }
}
