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


use crate::Level;
use bitseq::Bit;

mod alternate_mark;
mod biphase;
mod nrz;

pub use alternate_mark::*;
pub use biphase::*;
pub use nrz::*;

/// What a single bit becomes on the line.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
pub enum Symbol {
    /// One level held for the whole bit interval.
    Full(Level),

    /// One level for the first half of the bit interval, another for the second.
    Split(Level, Level),
}

impl Symbol {
    /// Number of waveform samples this symbol expands to.
    pub const fn sample_count(&self) -> usize {
        match self {
            Symbol::Full(_) => 2,
            Symbol::Split(_, _) => 4,
        }
    }

    /// Level at the start of the bit interval.
    pub const fn first(&self) -> Level {
        match *self {
            Symbol::Full(level) => level,
            Symbol::Split(level, _) => level,
        }
    }

    /// Level at the end of the bit interval.
    pub const fn last(&self) -> Level {
        match *self {
            Symbol::Full(level) => level,
            Symbol::Split(_, level) => level,
        }
    }
}

/// A line coder: a Mealy machine fed one bit at a time.
///
/// Stateful coders carry their running level as a field, so every
/// encoding starts from a freshly constructed (or [reset](Reset)) coder.
pub trait LineCoder {
    fn encode_bit(&mut self, bit: Bit) -> Symbol;
}

pub trait Reset {
    /// Returns the coder to the level it was seeded with.
    fn reset(&mut self);
}

pub type BoxedLineCoder<'a> = Box<dyn LineCoder + Send + 'a>;

impl<C: LineCoder + ?Sized> LineCoder for Box<C> {
    fn encode_bit(&mut self, bit: Bit) -> Symbol {
        self.as_mut().encode_bit(bit)
    }
}

impl<C: Reset + ?Sized> Reset for Box<C> {
    fn reset(&mut self) {
        self.as_mut().reset()
    }
}

impl<C: LineCoder + ?Sized> LineCoder for &mut C {
    fn encode_bit(&mut self, bit: Bit) -> Symbol {
        (**self).encode_bit(bit)
    }
}

/// Iterator adapter that runs a [`LineCoder`] over a stream of bits.
pub struct LineEncodeIter<I, C> {
    inner: I,
    coder: C,
}

impl<I, C> Iterator for LineEncodeIter<I, C>
where
    I: Iterator<Item = Bit>,
    C: LineCoder,
{
    type Item = Symbol;

    fn next(&mut self) -> Option<Self::Item> {
        let bit = self.inner.next()?;
        Some(self.coder.encode_bit(bit))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

pub trait IteratorExt: Iterator<Item = Bit> {
    fn line_encode<C: LineCoder>(self, coder: C) -> LineEncodeIter<Self, C>
    where
        Self: std::marker::Sized;
}

impl<T: Iterator<Item = Bit>> IteratorExt for T {
    fn line_encode<C: LineCoder>(self, coder: C) -> LineEncodeIter<Self, C>
    where
        Self: std::marker::Sized,
    {
        LineEncodeIter { inner: self, coder }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bitseq::{BitSequence, InitialLevel};

    #[test]
    fn line_encode_iter() {
        let bits: BitSequence = "1101".parse().unwrap();
        let symbols = bits
            .iter()
            .line_encode(NrzInverted::new(InitialLevel::High))
            .collect::<Vec<_>>();

        assert_eq!(
            symbols,
            vec![
                Symbol::Full(Level::Negative),
                Symbol::Full(Level::Positive),
                Symbol::Full(Level::Positive),
                Symbol::Full(Level::Negative),
            ]
        );
    }

    #[test]
    fn boxed_coder_keeps_state() {
        let mut coder: BoxedLineCoder = Box::new(BipolarAmi::new(InitialLevel::High));
        assert_eq!(coder.encode_bit(Bit::One), Symbol::Full(Level::Negative));
        assert_eq!(coder.encode_bit(Bit::Zero), Symbol::Full(Level::Zero));
        assert_eq!(coder.encode_bit(Bit::One), Symbol::Full(Level::Positive));
    }

    #[test]
    fn symbol_edges() {
        let symbol = Symbol::Split(Level::Positive, Level::Negative);
        assert_eq!(symbol.first(), Level::Positive);
        assert_eq!(symbol.last(), Level::Negative);
        assert_eq!(symbol.sample_count(), 4);
        assert_eq!(Symbol::Full(Level::Zero).sample_count(), 2);
    }
}
