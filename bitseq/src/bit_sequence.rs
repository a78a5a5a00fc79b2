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
use std::fmt::{Debug, Display};
use std::str::FromStr;

/// An ordered sequence of up to [`BitSequence::MAX_LEN`] bits.
///
/// Index order is transmission order: the bit at index 0 is encoded first.
/// The only way to build one from text is through [`FromStr`], which is
/// where length and alphabet are validated.
#[derive(Clone, Copy, Eq, PartialEq, Hash)]
pub struct BitSequence {
    bits: [Bit; BitSequence::MAX_LEN],
    len: u8,
}

impl BitSequence {
    /// Maximum number of bits in a sequence.
    pub const MAX_LEN: usize = 16;

    /// The empty sequence.
    pub const EMPTY: BitSequence = BitSequence {
        bits: [Bit::Zero; BitSequence::MAX_LEN],
        len: 0,
    };

    /// Creates a sequence from a slice of bits.
    ///
    /// Fails with [`TooLong`] if the slice holds more than [`BitSequence::MAX_LEN`] bits.
    pub fn from_bits(bits: &[Bit]) -> std::result::Result<BitSequence, TooLong> {
        if bits.len() > Self::MAX_LEN {
            return Err(TooLong(bits.len()));
        }
        let mut ret = BitSequence::EMPTY;
        ret.bits[..bits.len()].copy_from_slice(bits);
        ret.len = bits.len() as u8;
        Ok(ret)
    }

    /// Parses a string of `0` and `1` characters.
    ///
    /// Length is checked before the alphabet, so an over-long string is
    /// reported as [`TooLong`] even if it also contains stray characters.
    /// Otherwise the first offending character is reported as [`InvalidBitAt`].
    ///
    /// ```
    /// # use bitseq::BitSequence;
    /// let bits = BitSequence::try_from_str("101").unwrap();
    /// assert_eq!(bits.len(), 3);
    /// assert!(BitSequence::try_from_str("10201").is_err());
    /// assert!(BitSequence::try_from_str("00000000000000000").is_err());
    /// ```
    pub fn try_from_str(s: &str) -> Result<BitSequence> {
        let count = s.chars().count();
        if count > Self::MAX_LEN {
            return Err(TooLong(count).into());
        }

        let mut ret = BitSequence::EMPTY;
        for (i, c) in s.chars().enumerate() {
            ret.bits[i] = Bit::from_char(c).ok_or(InvalidBitAt(i, c))?;
        }
        ret.len = count as u8;
        Ok(ret)
    }

    pub fn len(&self) -> usize {
        self.len as usize
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn get(&self, index: usize) -> Option<Bit> {
        self.as_slice().get(index).copied()
    }

    pub fn as_slice(&self) -> &[Bit] {
        &self.bits[..self.len()]
    }

    pub fn iter(&self) -> std::iter::Copied<std::slice::Iter<'_, Bit>> {
        self.as_slice().iter().copied()
    }

    /// Number of `1` bits in the sequence.
    pub fn count_ones(&self) -> usize {
        self.iter().filter(|b| b.is_one()).count()
    }
}

impl Default for BitSequence {
    fn default() -> Self {
        BitSequence::EMPTY
    }
}

impl<'a> IntoIterator for &'a BitSequence {
    type Item = Bit;
    type IntoIter = std::iter::Copied<std::slice::Iter<'a, Bit>>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl AsRef<[Bit]> for BitSequence {
    fn as_ref(&self) -> &[Bit] {
        self.as_slice()
    }
}

impl TryFrom<&[Bit]> for BitSequence {
    type Error = TooLong;

    fn try_from(value: &[Bit]) -> std::result::Result<Self, Self::Error> {
        BitSequence::from_bits(value)
    }
}

impl FromStr for BitSequence {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        BitSequence::try_from_str(s)
    }
}

impl Display for BitSequence {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for bit in self.iter() {
            Display::fmt(&bit, f)?;
        }
        Ok(())
    }
}

impl Debug for BitSequence {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "BitSequence(\"{}\")", self)
    }
}
