//! Operand resolution.
//!
//! Every operand cell holds a raw word. Words up to 32767 are literals,
//! 32768-32775 name registers 0-7, and anything above is invalid.

use std::fmt;

use crate::runtime::error::Skip;
use crate::runtime::registers::{Register, Registers};
use crate::runtime::word::{MAX_LITERAL, REGISTER_BASE, Word};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operand {
    Literal(Word),
    Register(Register),
}

impl Operand {
    pub fn classify(raw: Word) -> Result<Self, Skip> {
        if raw <= MAX_LITERAL {
            return Ok(Operand::Literal(raw));
        }

        Register::from_offset(raw - REGISTER_BASE)
            .map(Operand::Register)
            .ok_or(Skip::InvalidOperand { raw })
    }

    /// Resolves `raw` in value position: a literal, or a register's contents.
    pub fn value(raw: Word, registers: &Registers) -> Result<Word, Skip> {
        match Self::classify(raw)? {
            Operand::Literal(value) => Ok(value),
            Operand::Register(reg) => Ok(registers.get(reg)),
        }
    }

    /// Resolves `raw` in destination position, which must name a register.
    pub fn destination(raw: Word) -> Result<Register, Skip> {
        match Self::classify(raw)? {
            Operand::Register(reg) => Ok(reg),
            Operand::Literal(_) => Err(Skip::LiteralDestination { raw }),
        }
    }
}

impl fmt::Display for Operand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Operand::Literal(value) => write!(f, "{}", value),
            Operand::Register(reg) => write!(f, "{}", reg),
        }
    }
}
