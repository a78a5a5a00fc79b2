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
use std::fmt;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

/// Where the running reference level of a stateful encoder starts
/// before the first bit is processed.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
pub enum InitialLevel {
    High,
    Low,
}

impl InitialLevel {
    pub const fn is_high(self) -> bool {
        matches!(self, InitialLevel::High)
    }
}

impl Default for InitialLevel {
    fn default() -> Self {
        InitialLevel::High
    }
}

impl From<bool> for InitialLevel {
    fn from(initial_high: bool) -> Self {
        if initial_high {
            InitialLevel::High
        } else {
            InitialLevel::Low
        }
    }
}

impl From<InitialLevel> for bool {
    fn from(value: InitialLevel) -> Self {
        value.is_high()
    }
}

impl FromStr for InitialLevel {
    type Err = InvalidInitialLevel;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "high" | "h" | "1" | "+" => Ok(InitialLevel::High),
            "low" | "l" | "0" | "-" => Ok(InitialLevel::Low),
            _ => Err(InvalidInitialLevel(s.to_string())),
        }
    }
}

impl Display for InitialLevel {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            InitialLevel::High => f.write_str("high"),
            InitialLevel::Low => f.write_str("low"),
        }
    }
}
