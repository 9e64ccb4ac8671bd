//! The machine word and the numeric constants of the address space.

/// The machine's only datum size.
pub type Word = u16;

/// Number of addressable memory cells.
pub const MEMORY_SIZE: usize = 32768;

/// Arithmetic results are reduced modulo this value.
pub const MODULUS: u32 = 32768;

/// Largest value a literal operand may hold.
pub const MAX_LITERAL: Word = 32767;

/// Raw encoding of register 0; registers 0-7 occupy `REGISTER_BASE..REGISTER_BASE + 8`.
pub const REGISTER_BASE: Word = 32768;

pub const REGISTER_COUNT: usize = 8;

/// Builds one word out of a little-endian byte pair.
#[macro_export]
macro_rules! construct_word {
    ($pair:expr) => {{
        let mut word = 0u16;
        for (i, &byte) in $pair.iter().enumerate() {
            word |= (byte as u16) << (i * 8); // Little Endian
        }
        word
    }};
}

/// Reduces an intermediate arithmetic result into the literal range.
pub fn reduce(value: u32) -> Word {
    (value % MODULUS) as Word
}
