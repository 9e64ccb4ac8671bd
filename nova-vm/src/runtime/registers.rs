use std::fmt;

use crate::runtime::word::{REGISTER_COUNT, Word};

/// Index of one of the eight general-purpose registers.
///
/// Only constructible for indices 0-7, so every `Register` addresses a real slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Register(u8);

impl Register {
    /// # Panics
    ///
    /// Panics if `index` is not below 8.
    pub const fn new(index: u8) -> Self {
        assert!((index as usize) < REGISTER_COUNT, "register index out of range");
        Self(index)
    }

    pub(crate) const fn from_offset(offset: u16) -> Option<Self> {
        if (offset as usize) < REGISTER_COUNT {
            Some(Self(offset as u8))
        } else {
            None
        }
    }

    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for Register {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "r{}", self.0)
    }
}

/// The register file, zeroed at creation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Registers([Word; REGISTER_COUNT]);

impl Registers {
    pub fn get(&self, reg: Register) -> Word {
        self.0[reg.index()]
    }

    pub fn set(&mut self, reg: Register, value: Word) {
        self.0[reg.index()] = value;
    }

    pub fn as_array(&self) -> &[Word; REGISTER_COUNT] {
        &self.0
    }

    pub fn clear(&mut self) {
        self.0 = [0; REGISTER_COUNT];
    }
}
