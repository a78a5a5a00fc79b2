use super::*;
use bitseq::InitialLevel;

// Biphase codes always transition at mid-bit.
//
// Manchester:
//   0: High to low
//   1: Low to high
//
// Differential Manchester:
//   0: No transition at start of bit
//   1: Transition at start of bit

#[derive(Clone, Copy, Debug, Default)]
pub struct Manchester;

impl Manchester {
    pub fn new() -> Self {
        Manchester
    }
}

impl LineCoder for Manchester {
    fn encode_bit(&mut self, bit: Bit) -> Symbol {
        match bit {
            Bit::Zero => Symbol::Split(Level::Positive, Level::Negative),
            Bit::One => Symbol::Split(Level::Negative, Level::Positive),
        }
    }
}

impl Reset for Manchester {
    fn reset(&mut self) {}
}

#[derive(Clone, Debug)]
pub struct DifferentialManchester {
    /// Level of the first half of the most recent bit.
    pub last: Level,
    initial: Level,
}

impl DifferentialManchester {
    /// Note that the seed is the opposite of the other stateful coders:
    /// a high initial level starts the first half-bit reference low.
    pub fn new(initial: InitialLevel) -> Self {
        let initial = -Level::from_initial(initial);
        DifferentialManchester {
            last: initial,
            initial,
        }
    }
}

impl LineCoder for DifferentialManchester {
    fn encode_bit(&mut self, bit: Bit) -> Symbol {
        if bit == Bit::One {
            self.last = -self.last;
        }
        Symbol::Split(self.last, -self.last)
    }
}

impl Reset for DifferentialManchester {
    fn reset(&mut self) {
        self.last = self.initial;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn manchester_ignores_history() {
        let mut coder = Manchester::new();

        let high_low = Symbol::Split(Level::Positive, Level::Negative);
        let low_high = Symbol::Split(Level::Negative, Level::Positive);

        assert_eq!(coder.encode_bit(Bit::Zero), high_low);
        assert_eq!(coder.encode_bit(Bit::Zero), high_low);
        assert_eq!(coder.encode_bit(Bit::One), low_high);
        assert_eq!(coder.encode_bit(Bit::Zero), high_low);
        assert_eq!(coder.encode_bit(Bit::One), low_high);
        assert_eq!(coder.encode_bit(Bit::One), low_high);
    }

    #[test]
    fn differential_manchester_seed() {
        let mut coder = DifferentialManchester::new(InitialLevel::High);
        assert_eq!(
            coder.encode_bit(Bit::Zero),
            Symbol::Split(Level::Negative, Level::Positive)
        );

        let mut coder = DifferentialManchester::new(InitialLevel::Low);
        assert_eq!(
            coder.encode_bit(Bit::Zero),
            Symbol::Split(Level::Positive, Level::Negative)
        );
    }

    #[test]
    fn differential_manchester_flips_on_one() {
        let mut coder = DifferentialManchester::new(InitialLevel::High);

        assert_eq!(
            coder.encode_bit(Bit::One),
            Symbol::Split(Level::Positive, Level::Negative)
        );
        assert_eq!(
            coder.encode_bit(Bit::Zero),
            Symbol::Split(Level::Positive, Level::Negative)
        );
        assert_eq!(
            coder.encode_bit(Bit::One),
            Symbol::Split(Level::Negative, Level::Positive)
        );

        coder.reset();
        assert_eq!(coder.last, Level::Negative);
    }
}
