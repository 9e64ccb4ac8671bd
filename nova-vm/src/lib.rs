//! Core of the Nova word machine.
//!
//! Nova is a register machine with 32768 cells of 16-bit memory, eight
//! registers and an unbounded stack. A program image is a flat sequence of
//! little-endian words loaded at address 0; execution starts there and runs
//! until a `halt`, a fault, or the program counter leaves memory.

pub mod runtime;

pub use runtime::config::{MachineConfig, OperandPolicy};
pub use runtime::error::{Fault, LoadError, Skip, StackError};
pub use runtime::io::{CharSink, CharSource, ReaderSource, ScriptedInput, WriterSink};
pub use runtime::machine::{Exit, Machine, Outcome};
pub use runtime::opcode::Op;
pub use runtime::operand::Operand;
pub use runtime::registers::{Register, Registers};
pub use runtime::word::{MEMORY_SIZE, MODULUS, REGISTER_BASE, REGISTER_COUNT, Word};

/// The built-in check program: `add r0 r1 4; out r0; out '\n'; halt`.
///
/// Run it with register 1 preset to `'A'` and it prints `"E\n"`.
pub const SELF_TEST_PROGRAM: [Word; 9] = [9, 32768, 32769, 4, 19, 32768, 19, 10, 0];

/// Builds a machine loaded with [`SELF_TEST_PROGRAM`] and its register preset.
pub fn self_test_machine(config: MachineConfig) -> Result<Machine, LoadError> {
    let mut machine = Machine::new(config);
    machine.load_words(&SELF_TEST_PROGRAM)?;
    machine.registers_mut().set(Register::new(1), 'A' as Word);
    Ok(machine)
}
