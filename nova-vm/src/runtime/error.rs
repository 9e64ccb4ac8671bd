//! Failure types of the machine.
//!
//! A [`Skip`] abandons the current instruction and execution continues. A
//! [`Fault`] terminates the machine.

use std::io;
use std::sync::Arc;

use crate::runtime::opcode::Op;
use crate::runtime::word::Word;

/// A soft, per-instruction failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum Skip {
    #[error("operand {raw} is neither a literal nor a register")]
    InvalidOperand { raw: Word },
    #[error("destination {raw} is not a register")]
    LiteralDestination { raw: Word },
    #[error("address {addr} is outside memory")]
    AddressOutOfRange { addr: Word },
    #[error("value {code} is not a character")]
    NotACharacter { code: Word },
}

/// A fatal fault. The machine halts after reporting it.
#[derive(Debug, Clone, thiserror::Error)]
pub enum Fault {
    #[error("stack underflow at {pc}")]
    StackUnderflow { pc: Word },
    #[error("stack overflow at {pc} (limit {limit})")]
    StackOverflow { pc: Word, limit: usize },
    #[error("unknown opcode {value} at {pc}")]
    UnknownOpcode { pc: Word, value: Word },
    #[error("`{op}` at {pc} runs past the end of memory")]
    Truncated { pc: Word, op: Op },
    #[error("division by zero at {pc}")]
    DivideByZero { pc: Word },
    #[error("input exhausted at {pc}")]
    InputExhausted { pc: Word },
    #[error("input character {ch:?} at {pc} does not fit in a literal")]
    UnrepresentableInput { pc: Word, ch: char },
    #[error("i/o error at {pc}: {source}")]
    Io {
        pc: Word,
        #[source]
        source: Arc<io::Error>,
    },
    #[error("strict mode: {skip} at {pc}")]
    Strict { pc: Word, skip: Skip },
}

impl Fault {
    pub(crate) fn io(pc: Word, source: io::Error) -> Self {
        Fault::Io {
            pc,
            source: Arc::new(source),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum StackError {
    #[error("stack is empty")]
    Empty,
    #[error("stack is full ({limit} words)")]
    Overflow { limit: usize },
}

impl StackError {
    /// Attaches the program counter of the instruction that hit the stack.
    pub fn at(self, pc: Word) -> Fault {
        match self {
            StackError::Empty => Fault::StackUnderflow { pc },
            StackError::Overflow { limit } => Fault::StackOverflow { pc, limit },
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum LoadError {
    #[error("image holds {words} words but memory has {capacity} cells")]
    ImageTooLarge { words: usize, capacity: usize },
}
