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


mod bit;
mod bit_sequence;
mod error;
mod initial_level;

pub use crate::bit::*;
pub use crate::bit_sequence::*;
pub use crate::error::*;
pub use crate::initial_level::*;

#[cfg(test)]
mod bit_sequence_tests {
    use super::*;

    #[test]
    fn test_bit_sequence_parse() {
        let bits: BitSequence = "101".parse().unwrap();
        assert_eq!(bits.len(), 3);
        assert_eq!(bits.as_slice(), &[Bit::One, Bit::Zero, Bit::One]);
        assert_eq!(bits.to_string(), "101");
        assert_eq!(format!("{:?}", bits), "BitSequence(\"101\")");

        let bits: BitSequence = "".parse().unwrap();
        assert!(bits.is_empty());
        assert_eq!(bits, BitSequence::EMPTY);
        assert_eq!(bits.to_string(), "");

        let bits: BitSequence = "1111000011110000".parse().unwrap();
        assert_eq!(bits.len(), BitSequence::MAX_LEN);
        assert_eq!(bits.count_ones(), 8);
        assert_eq!(bits.to_string(), "1111000011110000");
    }

    #[test]
    fn test_bit_sequence_parse_too_long() {
        let err = "00000000000000000".parse::<BitSequence>().unwrap_err();
        assert_eq!(err.downcast_ref::<TooLong>(), Some(&TooLong(17)));

        // Length wins over alphabet.
        let err = "abcdefghijklmnopq".parse::<BitSequence>().unwrap_err();
        assert_eq!(err.downcast_ref::<TooLong>(), Some(&TooLong(17)));
    }

    #[test]
    fn test_bit_sequence_parse_invalid_char() {
        let err = "10201".parse::<BitSequence>().unwrap_err();
        assert_eq!(err.downcast_ref::<InvalidBitAt>(), Some(&InvalidBitAt(2, '2')));

        let err = "1 0".parse::<BitSequence>().unwrap_err();
        assert_eq!(err.downcast_ref::<InvalidBitAt>(), Some(&InvalidBitAt(1, ' ')));

        let err = "x".parse::<BitSequence>().unwrap_err();
        assert_eq!(err.to_string(), "invalid bit 'x' at index 0");
    }

    #[test]
    fn test_bit_sequence_from_bits() {
        let bits = BitSequence::from_bits(&[Bit::Zero, Bit::One]).unwrap();
        assert_eq!(bits.to_string(), "01");
        assert_eq!(bits.get(1), Some(Bit::One));
        assert_eq!(bits.get(2), None);
        assert_eq!((&bits).into_iter().collect::<Vec<_>>(), vec![Bit::Zero, Bit::One]);

        let too_many = [Bit::One; BitSequence::MAX_LEN + 1];
        assert_eq!(BitSequence::try_from(&too_many[..]), Err(TooLong(17)));
    }

    #[test]
    fn test_initial_level_parse() {
        assert_eq!("high".parse::<InitialLevel>().unwrap(), InitialLevel::High);
        assert_eq!("LOW".parse::<InitialLevel>().unwrap(), InitialLevel::Low);
        assert_eq!("1".parse::<InitialLevel>().unwrap(), InitialLevel::High);
        assert_eq!("-".parse::<InitialLevel>().unwrap(), InitialLevel::Low);
        assert!("medium".parse::<InitialLevel>().is_err());

        assert_eq!(InitialLevel::default(), InitialLevel::High);
        assert_eq!(InitialLevel::from(false), InitialLevel::Low);
        assert_eq!(InitialLevel::Low.to_string(), "low");
    }
}
