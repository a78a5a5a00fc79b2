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


use crate::coder::*;
use crate::Level;
use bitseq::Bit;
use log::trace;

/// One corner of a step waveform.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WaveformSample {
    pub time: f64,
    pub level: Level,
}

impl WaveformSample {
    pub const fn new(time: f64, level: Level) -> Self {
        WaveformSample { time, level }
    }
}

/// A piecewise-constant waveform, one unit of time per bit.
///
/// Each bit contributes the start and end of its interval (`Full` symbols)
/// or the start and end of both half intervals (`Split` symbols). The
/// waveform is meant to be drawn holding each level until the next
/// sample, and [`Waveform::level_at`] reads it back the same way.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Waveform {
    samples: Vec<WaveformSample>,
    bit_count: usize,
}

impl Waveform {
    pub fn new() -> Self {
        Waveform::default()
    }

    /// Runs `coder` over `bits`, starting at time zero.
    pub fn encode<C, I>(mut coder: C, bits: I) -> Waveform
    where
        C: LineCoder,
        I: IntoIterator<Item = Bit>,
    {
        let mut ret = Waveform::new();
        for bit in bits {
            let symbol = coder.encode_bit(bit);
            trace!("bit {} = {} -> {:?}", ret.bit_count, bit, symbol);
            ret.push_symbol(symbol);
        }
        ret
    }

    /// Appends the samples for one more bit interval.
    pub fn push_symbol(&mut self, symbol: Symbol) {
        let start = self.bit_count as f64;
        let mid = start + 0.5;
        let end = start + 1.0;

        match symbol {
            Symbol::Full(level) => {
                self.samples.push(WaveformSample::new(start, level));
                self.samples.push(WaveformSample::new(end, level));
            }
            Symbol::Split(first, second) => {
                self.samples.push(WaveformSample::new(start, first));
                self.samples.push(WaveformSample::new(mid, first));
                self.samples.push(WaveformSample::new(mid, second));
                self.samples.push(WaveformSample::new(end, second));
            }
        }

        self.bit_count += 1;
    }

    pub fn samples(&self) -> &[WaveformSample] {
        &self.samples
    }

    /// The x coordinates, in order.
    pub fn times(&self) -> Vec<f64> {
        self.samples.iter().map(|s| s.time).collect()
    }

    /// The y coordinates as -1, 0 or +1, in order.
    pub fn levels(&self) -> Vec<i8> {
        self.samples.iter().map(|s| s.level.as_i8()).collect()
    }

    /// Number of samples.
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Number of bits that were encoded.
    pub fn bit_count(&self) -> usize {
        self.bit_count
    }

    pub fn duration(&self) -> f64 {
        self.bit_count as f64
    }

    /// Level at time `t`, holding each sample's level until the next one.
    ///
    /// Returns `None` outside of `[0, duration)`.
    pub fn level_at(&self, t: f64) -> Option<Level> {
        if !(0.0..self.duration()).contains(&t) {
            return None;
        }
        let index = self.samples.partition_point(|s| s.time <= t);
        index.checked_sub(1).map(|i| self.samples[i].level)
    }

    /// Levels of the first and second half of bit `index`.
    ///
    /// Read back through [`Waveform::level_at`], so bits with two and four
    /// samples may be mixed freely.
    pub fn bit_levels(&self, index: usize) -> Option<(Level, Level)> {
        if index >= self.bit_count {
            return None;
        }
        let start = index as f64;
        let first = self.level_at(start + 0.25)?;
        let second = self.level_at(start + 0.75)?;
        Some((first, second))
    }
}
