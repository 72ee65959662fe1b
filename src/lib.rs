#![no_std]

mod buffer;
mod constants;
mod segments;

pub use buffer::DisplayBuffer;
pub use constants::*;
pub use segments::{decompose, digit_segments, flags_segments, letter_segments};

use core::fmt;
use embedded_hal::i2c::I2c;
use num_traits::ToPrimitive;

pub struct HT16K33<I2C> {
    pub i2c: I2C,
    pub address: u8,
    buffer: DisplayBuffer,
}

impl<I2C, E> HT16K33<I2C>
where
    I2C: I2c<Error = E>,
{
    pub fn new(i2c: I2C, address: u8) -> Self {
        Self {
            i2c,
            address,
            buffer: DisplayBuffer::new(),
        }
    }

    pub fn destroy(self) -> I2C {
        self.i2c
    }

    /// Starts the oscillator, turns the display on and sets its brightness.
    pub fn init(&mut self, brightness: u8) -> Result<(), HT16K33Error<E>> {
        self.oscillator_on()?;
        self.display_on()?;
        self.set_brightness(brightness)?;
        Ok(())
    }

    pub fn display_on(&mut self) -> Result<(), HT16K33Error<E>> {
        self.write(Operation::DisplayOn, &[command::DISPLAY_ON])
    }

    pub fn oscillator_on(&mut self) -> Result<(), HT16K33Error<E>> {
        self.write(Operation::OscillatorOn, &[command::OSCILLATOR_ON])
    }

    pub fn set_brightness(&mut self, brightness: u8) -> Result<(), HT16K33Error<E>> {
        if brightness > MAX_BRIGHTNESS {
            return Err(HT16K33Error::InvalidBrightness(brightness));
        }
        self.write(Operation::SetBrightness, &[command::brightness(brightness)])
    }

    pub fn write_raw(&mut self, data: &[u8]) -> Result<(), HT16K33Error<E>> {
        self.write(Operation::WriteRaw, data)
    }

    /// Sends the whole display buffer to the chip.
    pub fn write_data(&mut self) -> Result<(), HT16K33Error<E>> {
        let data = self.buffer.serialize();
        self.write(Operation::WriteData, &data)
    }

    /// Blanks the buffer and the display.
    pub fn clear(&mut self) -> Result<(), HT16K33Error<E>> {
        self.buffer.clear();
        let data = self.buffer.serialize();
        self.write(Operation::Clear, &data)
    }

    pub fn set_segments(&mut self, position: u8, segments: u16) -> Result<(), HT16K33Error<E>> {
        self.buffer.set_segments(position, segments)?;
        Ok(())
    }

    pub fn set_flags(&mut self, position: u8, flags: [bool; 7]) -> Result<(), HT16K33Error<E>> {
        self.buffer.set_flags(position, flags)?;
        Ok(())
    }

    pub fn set_digit(&mut self, position: u8, digit: i16) -> Result<(), HT16K33Error<E>> {
        self.buffer.set_digit(position, digit)?;
        Ok(())
    }

    pub fn set_letter(&mut self, position: u8, letter: u8) -> Result<(), HT16K33Error<E>> {
        self.buffer.set_letter(position, letter)?;
        Ok(())
    }

    /// Buffers `number` for display. Nothing is sent until [`Self::write_data`].
    pub fn set_number<T>(&mut self, number: T) -> Result<(), HT16K33Error<E>>
    where
        T: ToPrimitive,
    {
        let number = number.to_i32().ok_or(HT16K33Error::OutOfRange)?;
        self.buffer.set_number(number)?;
        Ok(())
    }

    pub fn buffer(&self) -> &DisplayBuffer {
        &self.buffer
    }

    pub fn buffer_mut(&mut self) -> &mut DisplayBuffer {
        &mut self.buffer
    }

    fn write(&mut self, operation: Operation, data: &[u8]) -> Result<(), HT16K33Error<E>> {
        let address = self.address;
        #[cfg(feature = "defmt")]
        defmt::trace!("{}: {=[u8]:x} to {=u8:#x}", operation, data, address);

        self.i2c.write(address, data).map_err(|error| {
            #[cfg(feature = "defmt")]
            defmt::warn!("{} failed at {=u8:#x}", operation, address);
            HT16K33Error::I2cError { operation, error }
        })
    }
}

/// Driver operation that issued a bus write.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Operation {
    DisplayOn,
    OscillatorOn,
    SetBrightness,
    WriteRaw,
    WriteData,
    Clear,
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Operation::DisplayOn => "display on",
            Operation::OscillatorOn => "oscillator on",
            Operation::SetBrightness => "set brightness",
            Operation::WriteRaw => "write bytes",
            Operation::WriteData => "write data",
            Operation::Clear => "clear",
        };
        f.write_str(name)
    }
}

/// Errors from editing a [`DisplayBuffer`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum BufferError {
    InvalidAddress(u8),
    OutOfRange,
    InvalidDigit(i16),
}

impl fmt::Display for BufferError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BufferError::InvalidAddress(position) => write!(f, "invalid position: {}", position),
            BufferError::OutOfRange => write!(f, "number must be at most {}", MAX_NUMBER),
            BufferError::InvalidDigit(digit) => write!(f, "invalid digit: {}", digit),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum HT16K33Error<E> {
    I2cError { operation: Operation, error: E },
    InvalidAddress(u8),
    OutOfRange,
    InvalidDigit(i16),
    InvalidBrightness(u8),
}

impl<E> From<BufferError> for HT16K33Error<E> {
    fn from(error: BufferError) -> Self {
        match error {
            BufferError::InvalidAddress(position) => HT16K33Error::InvalidAddress(position),
            BufferError::OutOfRange => HT16K33Error::OutOfRange,
            BufferError::InvalidDigit(digit) => HT16K33Error::InvalidDigit(digit),
        }
    }
}

impl<E: fmt::Debug> fmt::Display for HT16K33Error<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HT16K33Error::I2cError { operation, error } => write!(f, "{}: {:?}", operation, error),
            HT16K33Error::InvalidAddress(position) => write!(f, "invalid position: {}", position),
            HT16K33Error::OutOfRange => write!(f, "number must be at most {}", MAX_NUMBER),
            HT16K33Error::InvalidDigit(digit) => write!(f, "invalid digit: {}", digit),
            HT16K33Error::InvalidBrightness(level) => {
                write!(f, "brightness must be at most {}: {}", MAX_BRIGHTNESS, level)
            }
        }
    }
}
