use super::*;
use bitseq::InitialLevel;
use std::marker::PhantomData;

// Alternate mark inversion...
//
// The "mark" bit alternates polarity every time it occurs, the other
// bit is sent as zero volts. Bipolar AMI marks on 1, pseudoternary
// marks on 0.

/// Selects which bit value is the mark for [`AlternateMark`].
pub trait Trigger {
    const MARK: Bit;
}

#[derive(Clone, Copy, Debug)]
pub struct MarkOnOne;

impl Trigger for MarkOnOne {
    const MARK: Bit = Bit::One;
}

#[derive(Clone, Copy, Debug)]
pub struct MarkOnZero;

impl Trigger for MarkOnZero {
    const MARK: Bit = Bit::Zero;
}

#[derive(Clone, Debug)]
pub struct AlternateMark<T> {
    pub last: Level,
    initial: Level,
    trigger: PhantomData<T>,
}

pub type BipolarAmi = AlternateMark<MarkOnOne>;
pub type Pseudoternary = AlternateMark<MarkOnZero>;

impl<T: Trigger> AlternateMark<T> {
    pub fn new(initial: InitialLevel) -> Self {
        let initial = Level::from_initial(initial);
        AlternateMark {
            last: initial,
            initial,
            trigger: PhantomData,
        }
    }
}

impl<T: Trigger> LineCoder for AlternateMark<T> {
    fn encode_bit(&mut self, bit: Bit) -> Symbol {
        if bit == T::MARK {
            self.last = -self.last;
            Symbol::Full(self.last)
        } else {
            Symbol::Full(Level::Zero)
        }
    }
}

impl<T> Reset for AlternateMark<T> {
    fn reset(&mut self) {
        self.last = self.initial;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bipolar_ami_alternates_ones() {
        let mut coder = BipolarAmi::new(InitialLevel::High);

        assert_eq!(coder.encode_bit(Bit::One), Symbol::Full(Level::Negative));
        assert_eq!(coder.encode_bit(Bit::Zero), Symbol::Full(Level::Zero));
        assert_eq!(coder.encode_bit(Bit::One), Symbol::Full(Level::Positive));
        assert_eq!(coder.encode_bit(Bit::One), Symbol::Full(Level::Negative));
        assert_eq!(coder.encode_bit(Bit::Zero), Symbol::Full(Level::Zero));
        assert_eq!(coder.encode_bit(Bit::Zero), Symbol::Full(Level::Zero));
    }

    #[test]
    fn pseudoternary_alternates_zeros() {
        let mut coder = Pseudoternary::new(InitialLevel::Low);

        assert_eq!(coder.encode_bit(Bit::Zero), Symbol::Full(Level::Positive));
        assert_eq!(coder.encode_bit(Bit::One), Symbol::Full(Level::Zero));
        assert_eq!(coder.encode_bit(Bit::Zero), Symbol::Full(Level::Negative));
        assert_eq!(coder.encode_bit(Bit::Zero), Symbol::Full(Level::Positive));

        coder.reset();
        assert_eq!(coder.encode_bit(Bit::Zero), Symbol::Full(Level::Positive));
    }

    #[test]
    fn zero_bits_leave_state_alone() {
        let mut coder = BipolarAmi::new(InitialLevel::Low);
        for _ in 0..5 {
            coder.encode_bit(Bit::Zero);
        }
        assert_eq!(coder.last, Level::Negative);
    }
}
