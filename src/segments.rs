//! Glyph encoding for a seven-segment digit.
//!
//! A glyph is a `u16` bitmask where bit `i` (0-6) lights segment A-G. Bits
//! 7-15 are never set by the tables here.

use crate::constants::{BLANK, BLANK_DIGIT, LETTERS, MINUS, NUMBERS, NUM_DIGITS};
use crate::BufferError;

/// Sets bit `i` for every `flags[i]` that is true.
pub const fn flags_segments(flags: [bool; 7]) -> u16 {
    let mut segments = 0;
    let mut i = 0;
    while i < flags.len() {
        if flags[i] {
            segments |= 1 << i;
        }
        i += 1;
    }
    segments
}

const LETTER_SEGMENTS: [(u8, u16); LETTERS.len()] = {
    let mut table = [(0, 0); LETTERS.len()];
    let mut i = 0;
    while i < LETTERS.len() {
        table[i] = (LETTERS[i].0, flags_segments(LETTERS[i].1));
        i += 1;
    }
    table
};

/// Glyph for a single digit.
///
/// `BLANK_DIGIT` renders nothing and any other negative value renders the
/// minus sign. Values above 9 have no glyph.
pub fn digit_segments(digit: i16) -> Result<u16, BufferError> {
    match digit {
        BLANK_DIGIT => Ok(BLANK),
        d if d < 0 => Ok(MINUS),
        0..=9 => Ok(NUMBERS[digit as usize]),
        _ => Err(BufferError::InvalidDigit(digit)),
    }
}

/// Glyph for one of `A b c d e f g h I o u S`. Lookup is case-sensitive and
/// anything else renders blank.
pub fn letter_segments(letter: u8) -> u16 {
    LETTER_SEGMENTS
        .iter()
        .find(|(l, _)| *l == letter)
        .map_or(BLANK, |(_, segments)| *segments)
}

/// Splits `number` into base-10 digits, least significant first, padded with
/// `BLANK_DIGIT`. Only the low-order `NUM_DIGITS` digits are kept.
pub fn decompose(number: u32) -> [i16; NUM_DIGITS] {
    let mut digits = [BLANK_DIGIT; NUM_DIGITS];
    if number == 0 {
        digits[0] = 0;
        return digits;
    }

    let mut num = number;
    let mut i = 0;
    while num != 0 && i < NUM_DIGITS {
        digits[i] = (num % 10) as i16;
        num /= 10;
        i += 1;
    }
    digits
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn digit_glyphs_match_table() {
        let expected = [63, 6, 91, 79, 102, 109, 125, 7, 127, 103];
        for (digit, glyph) in expected.iter().enumerate() {
            assert_eq!(digit_segments(digit as i16), Ok(*glyph));
        }
    }

    #[test]
    fn blank_and_minus() {
        assert_eq!(digit_segments(BLANK_DIGIT), Ok(0));
        assert_eq!(digit_segments(-1), Ok(64));
        assert_eq!(digit_segments(-9999), Ok(64));
        assert_eq!(digit_segments(i16::MIN), Ok(64));
    }

    #[test]
    fn digit_above_nine_is_rejected() {
        assert_eq!(digit_segments(10), Err(BufferError::InvalidDigit(10)));
        assert_eq!(digit_segments(i16::MAX), Err(BufferError::InvalidDigit(i16::MAX)));
    }

    #[test]
    fn flags() {
        assert_eq!(flags_segments([false; 7]), 0);
        assert_eq!(flags_segments([true; 7]), 0x7F);
        assert_eq!(
            flags_segments([false, false, false, false, false, false, true]),
            MINUS
        );
        // segments A-F make a zero
        assert_eq!(
            flags_segments([true, true, true, true, true, true, false]),
            NUMBERS[0]
        );
    }

    #[test]
    fn letters() {
        assert_eq!(letter_segments(b'A'), 0x77);
        assert_eq!(letter_segments(b'b'), 0x7C);
        assert_eq!(letter_segments(b'S'), NUMBERS[5]);
        assert_eq!(letter_segments(b'I'), 0x30);
        assert_eq!(letter_segments(b'o'), 0x5C);
    }

    #[test]
    fn unsupported_letters_are_blank() {
        assert_eq!(letter_segments(b'a'), 0);
        assert_eq!(letter_segments(b'B'), 0);
        assert_eq!(letter_segments(b'z'), 0);
        assert_eq!(letter_segments(b' '), 0);
    }

    #[test]
    fn letter_glyphs_fit_in_seven_bits() {
        for (_, segments) in LETTER_SEGMENTS.iter() {
            assert_eq!(segments & !0x7F, 0);
        }
    }

    #[test]
    fn decompose_numbers() {
        let b = BLANK_DIGIT;
        assert_eq!(decompose(0), [0, b, b, b]);
        assert_eq!(decompose(7), [7, b, b, b]);
        assert_eq!(decompose(10), [0, 1, b, b]);
        assert_eq!(decompose(1234), [4, 3, 2, 1]);
        assert_eq!(decompose(9999), [9, 9, 9, 9]);
    }

    #[test]
    fn decompose_truncates_to_low_digits() {
        assert_eq!(decompose(12345), [5, 4, 3, 2]);
        assert_eq!(decompose(10000), [0, 0, 0, 0]);
    }
}
