use super::*;
use bitseq::InitialLevel;

// NRZ-L Encoding...
//
// 0: Low
// 1: High

#[derive(Clone, Copy, Debug, Default)]
pub struct NrzLevel;

impl NrzLevel {
    pub fn new() -> Self {
        NrzLevel
    }
}

impl LineCoder for NrzLevel {
    fn encode_bit(&mut self, bit: Bit) -> Symbol {
        Symbol::Full(match bit {
            Bit::One => Level::Positive,
            Bit::Zero => Level::Negative,
        })
    }
}

impl Reset for NrzLevel {
    fn reset(&mut self) {}
}

// NRZ-I Encoding...
//
// 0: No transition
// 1: Transition

#[derive(Clone, Debug)]
pub struct NrzInverted {
    pub last: Level,
    initial: Level,
}

impl NrzInverted {
    pub fn new(initial: InitialLevel) -> Self {
        let initial = Level::from_initial(initial);
        NrzInverted {
            last: initial,
            initial,
        }
    }
}

impl LineCoder for NrzInverted {
    fn encode_bit(&mut self, bit: Bit) -> Symbol {
        if bit == Bit::One {
            self.last = -self.last;
        }
        Symbol::Full(self.last)
    }
}

impl Reset for NrzInverted {
    fn reset(&mut self) {
        self.last = self.initial;
    }
}
