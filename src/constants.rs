pub const DEFAULT_ADDRESS: u8 = 0x70; // address pins A0-A2 add 0-7
pub const BUFFER_SIZE: usize = 10;
pub const NUM_POSITIONS: u8 = 5; // 4 digits + colon
pub const NUM_DIGITS: usize = 4;
pub const MAX_BRIGHTNESS: u8 = 15; // 4 bits
pub const MAX_NUMBER: i32 = 9999;

/// Pad marker produced by [`crate::decompose`] for unused digit slots.
pub const BLANK_DIGIT: i16 = -10_000;

pub const BLANK: u16 = 0x00;
pub const MINUS: u16 = 0x40; // segment G
pub const NUMBERS: [u16; 10] = [63, 6, 91, 79, 102, 109, 125, 7, 127, 103];

/// Logical position -> physical buffer slot. The chip's rows are
/// interleaved and the colon sits between the second and third digit.
pub const POSITIONS: [usize; NUM_POSITIONS as usize] = [9, 7, 3, 1, 5];

// segment flags A..G
pub const LETTERS: [(u8, [bool; 7]); 12] = [
    (b'A', [true, true, true, false, true, true, true]),
    (b'b', [false, false, true, true, true, true, true]),
    (b'c', [false, false, false, true, true, false, true]),
    (b'd', [false, true, true, true, true, false, true]),
    (b'e', [true, true, false, true, true, true, true]),
    (b'f', [true, false, false, false, true, true, true]),
    (b'g', [true, true, true, true, false, true, true]),
    (b'h', [false, false, true, false, true, true, true]),
    (b'I', [false, false, false, false, true, true, false]),
    (b'o', [false, false, true, true, true, false, true]),
    (b'u', [false, false, true, true, true, false, false]),
    (b'S', [true, false, true, true, false, true, true]),
];

pub mod command {
    pub const OSCILLATOR_ON: u8 = 0x21; // system setup, S bit set
    pub const DISPLAY_ON: u8 = 0x81; // display setup, D bit set, blink off
    pub const BRIGHTNESS: u8 = 0xE0; // dimming set, low nibble is the level

    pub const fn brightness(level: u8) -> u8 {
        BRIGHTNESS | (level & 0x0F)
    }
}
