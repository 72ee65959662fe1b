use crate::constants::{BUFFER_SIZE, MAX_NUMBER, MINUS, NUM_POSITIONS, POSITIONS};
use crate::segments::{decompose, digit_segments, flags_segments, letter_segments};
use crate::BufferError;

/// In-memory copy of the chip's display RAM, one glyph per physical slot.
///
/// Setters take a logical position (0-3 are digits, 4 is the colon) which is
/// translated through [`POSITIONS`]. Slots without a logical position keep
/// whatever they hold and are sent as-is.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct DisplayBuffer {
    slots: [u16; BUFFER_SIZE],
}

impl DisplayBuffer {
    pub const fn new() -> Self {
        Self {
            slots: [0; BUFFER_SIZE],
        }
    }

    /// Physical slot backing a logical position.
    pub fn slot(position: u8) -> Result<usize, BufferError> {
        if position >= NUM_POSITIONS {
            return Err(BufferError::InvalidAddress(position));
        }
        Ok(POSITIONS[position as usize])
    }

    pub fn set_segments(&mut self, position: u8, segments: u16) -> Result<(), BufferError> {
        let slot = Self::slot(position)?;
        self.slots[slot] = segments;
        Ok(())
    }

    pub fn set_flags(&mut self, position: u8, flags: [bool; 7]) -> Result<(), BufferError> {
        self.set_segments(position, flags_segments(flags))
    }

    pub fn set_digit(&mut self, position: u8, digit: i16) -> Result<(), BufferError> {
        let segments = digit_segments(digit)?;
        self.set_segments(position, segments)
    }

    pub fn set_letter(&mut self, position: u8, letter: u8) -> Result<(), BufferError> {
        self.set_segments(position, letter_segments(letter))
    }

    /// Writes `number` into positions 0-3, least significant digit first.
    ///
    /// Negative numbers put a minus sign in positions 0-2 and leave
    /// position 3 as it was.
    pub fn set_number(&mut self, number: i32) -> Result<(), BufferError> {
        if number > MAX_NUMBER {
            return Err(BufferError::OutOfRange);
        }

        if number < 0 {
            for position in 0..3 {
                self.set_segments(position, MINUS)?;
            }
        } else {
            for (position, digit) in decompose(number as u32).iter().enumerate() {
                self.set_digit(position as u8, *digit)?;
            }
        }
        Ok(())
    }

    pub fn clear(&mut self) {
        self.slots = [0; BUFFER_SIZE];
    }

    pub fn slots(&self) -> &[u16; BUFFER_SIZE] {
        &self.slots
    }

    /// Wire form of the buffer: the low byte of every slot, in slot order.
    pub fn serialize(&self) -> [u8; BUFFER_SIZE] {
        let mut data = [0; BUFFER_SIZE];
        for (byte, slot) in data.iter_mut().zip(self.slots.iter()) {
            *byte = *slot as u8;
        }
        data
    }
}
