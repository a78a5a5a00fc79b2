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


//! Line codes: turn a short bit sequence into the step waveform a
//! transmitter would put on the wire.

mod coder;
mod level;
mod scheme;
mod waveform;

pub use bitseq::{Bit, BitSequence, InitialLevel};
pub use coder::*;
pub use level::*;
pub use scheme::*;
pub use waveform::*;

use anyhow::Error;
use log::debug;

/// Encodes `bits` with every scheme, in display order.
pub fn encode_all(bits: &BitSequence, initial: InitialLevel) -> Vec<(Scheme, Waveform)> {
    Scheme::ALL
        .iter()
        .map(|&scheme| (scheme, scheme.encode(bits, initial)))
        .collect()
}

/// Validates `input` and encodes it with every scheme.
///
/// Nothing is encoded unless the whole input is a valid [`BitSequence`].
///
/// ```
/// # use linecode::{encode_str, InitialLevel};
/// let encodings = encode_str("101", InitialLevel::High).unwrap();
/// assert_eq!(encodings.len(), 6);
/// assert!(encode_str("1012", InitialLevel::High).is_err());
/// ```
pub fn encode_str(input: &str, initial: InitialLevel) -> Result<Vec<(Scheme, Waveform)>, Error> {
    let bits: BitSequence = input.parse()?;
    debug!("Encoding {} bits, initial level {}", bits.len(), initial);
    Ok(encode_all(&bits, initial))
}
