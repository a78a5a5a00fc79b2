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
use crate::Waveform;
use anyhow::bail;
use bitseq::{BitSequence, InitialLevel};
use log::debug;
use std::fmt;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

/// The line codes this crate knows how to produce.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
pub enum Scheme {
    NrzL,
    NrzI,
    BipolarAmi,
    Pseudoternary,
    Manchester,
    DifferentialManchester,
}

impl Scheme {
    /// Every scheme, in display order.
    pub const ALL: [Scheme; 6] = [
        Scheme::NrzL,
        Scheme::NrzI,
        Scheme::BipolarAmi,
        Scheme::Pseudoternary,
        Scheme::Manchester,
        Scheme::DifferentialManchester,
    ];

    pub const fn name(self) -> &'static str {
        match self {
            Scheme::NrzL => "NRZ-L",
            Scheme::NrzI => "NRZ-I",
            Scheme::BipolarAmi => "Bipolar AMI",
            Scheme::Pseudoternary => "Pseudoternary",
            Scheme::Manchester => "Manchester",
            Scheme::DifferentialManchester => "Differential Manchester",
        }
    }

    /// Returns false for the memoryless schemes, which ignore the initial level.
    pub const fn uses_initial_level(self) -> bool {
        !matches!(self, Scheme::NrzL | Scheme::Manchester)
    }

    /// Number of waveform samples produced for each bit.
    pub const fn samples_per_bit(self) -> usize {
        match self {
            Scheme::Manchester | Scheme::DifferentialManchester => 4,
            _ => 2,
        }
    }

    /// A freshly seeded coder for this scheme.
    pub fn coder(self, initial: InitialLevel) -> BoxedLineCoder<'static> {
        match self {
            Scheme::NrzL => Box::new(NrzLevel::new()),
            Scheme::NrzI => Box::new(NrzInverted::new(initial)),
            Scheme::BipolarAmi => Box::new(BipolarAmi::new(initial)),
            Scheme::Pseudoternary => Box::new(Pseudoternary::new(initial)),
            Scheme::Manchester => Box::new(Manchester::new()),
            Scheme::DifferentialManchester => Box::new(DifferentialManchester::new(initial)),
        }
    }

    pub fn encode(self, bits: &BitSequence, initial: InitialLevel) -> Waveform {
        debug!("{}: encoding {:?}, initial {}", self, bits, initial);
        Waveform::encode(self.coder(initial), bits)
    }
}

impl Display for Scheme {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Scheme {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let slug = s.trim().to_ascii_lowercase().replace(|c: char| c == ' ' || c == '_', "-");
        Ok(match slug.as_str() {
            "nrz-l" | "nrzl" => Scheme::NrzL,
            "nrz-i" | "nrzi" => Scheme::NrzI,
            "bipolar-ami" | "ami" => Scheme::BipolarAmi,
            "pseudoternary" => Scheme::Pseudoternary,
            "manchester" => Scheme::Manchester,
            "differential-manchester" | "diff-manchester" => Scheme::DifferentialManchester,
            _ => bail!("Unknown line code scheme: {:?}", s),
        })
    }
}

pub fn nrz_l(bits: &BitSequence) -> Waveform {
    Waveform::encode(NrzLevel::new(), bits)
}

pub fn nrz_i(bits: &BitSequence, initial: InitialLevel) -> Waveform {
    Waveform::encode(NrzInverted::new(initial), bits)
}

pub fn bipolar_ami(bits: &BitSequence, initial: InitialLevel) -> Waveform {
    Waveform::encode(BipolarAmi::new(initial), bits)
}

pub fn pseudoternary(bits: &BitSequence, initial: InitialLevel) -> Waveform {
    Waveform::encode(Pseudoternary::new(initial), bits)
}

pub fn manchester(bits: &BitSequence) -> Waveform {
    Waveform::encode(Manchester::new(), bits)
}

pub fn differential_manchester(bits: &BitSequence, initial: InitialLevel) -> Waveform {
    Waveform::encode(DifferentialManchester::new(initial), bits)
}
