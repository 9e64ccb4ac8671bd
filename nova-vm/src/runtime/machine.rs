//! Fetch, decode and execute.
//!
//! Every cycle re-reads the opcode at the program counter, so programs may
//! rewrite their own instruction stream. Each instruction either completes,
//! is skipped because an operand failed to resolve, or faults and halts the
//! machine.

use crate::runtime::config::{MachineConfig, OperandPolicy};
use crate::runtime::disasm;
use crate::runtime::error::{Fault, LoadError, Skip};
use crate::runtime::io::{CharSink, CharSource};
use crate::runtime::memory::Memory;
use crate::runtime::opcode::Op;
use crate::runtime::operand::Operand;
use crate::runtime::registers::Registers;
use crate::runtime::stack::Stack;
use crate::runtime::word::{MAX_LITERAL, Word, reduce};

/// A decoded instruction: the opcode and its raw, unresolved operand words.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct VMOp {
    pub pc: Word,
    pub opcode: Op,
    operands: [Word; 3],
}

/// Result of a single successful [`Machine::step`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Continue,
    /// The instruction had no effect; the program counter moved past it.
    Skipped(Skip),
    Halted,
}

/// Why [`Machine::run`] returned.
#[derive(Debug, Clone)]
pub enum Exit {
    /// A `halt` instruction executed.
    Halted,
    /// The program counter left memory.
    OutOfBounds { pc: Word },
    CycleLimit { cycles: u64 },
    Faulted(Fault),
}

/// Where control goes after an instruction completes.
enum Flow {
    Next,
    Jump(Word),
    Halt,
}

/// Why an instruction stopped early.
enum Abort {
    Skip(Skip),
    Fault(Fault),
}

impl From<Skip> for Abort {
    fn from(skip: Skip) -> Self {
        Abort::Skip(skip)
    }
}

impl From<Fault> for Abort {
    fn from(fault: Fault) -> Self {
        Abort::Fault(fault)
    }
}

#[derive(Debug, Clone)]
pub struct Machine {
    config: MachineConfig,
    memory: Memory,
    registers: Registers,
    stack: Stack,
    pc: Word,
    /// Set once the machine stops for good; replayed on re-entry.
    stopped: Option<Exit>,
    cycles: u64,
}

impl Machine {
    pub fn new(config: MachineConfig) -> Self {
        let stack = match config.stack_limit {
            Some(limit) => Stack::with_limit(limit),
            None => Stack::new(),
        };

        Self {
            config,
            memory: Memory::new(),
            registers: Registers::default(),
            stack,
            pc: 0,
            stopped: None,
            cycles: 0,
        }
    }

    /// Restores the creation state: noop-filled memory, zeroed registers,
    /// empty stack, program counter 0.
    pub fn reset(&mut self) {
        self.memory.reset();
        self.registers.clear();
        self.stack.clear();
        self.pc = 0;
        self.stopped = None;
        self.cycles = 0;
    }

    /// Loads a little-endian program image at address 0.
    pub fn load(&mut self, image: &[u8]) -> Result<usize, LoadError> {
        let words = self.memory.load(image)?;
        log::info!("loaded {} words", words);
        Ok(words)
    }

    pub fn load_words(&mut self, words: &[Word]) -> Result<(), LoadError> {
        self.memory.load_words(words)
    }

    pub fn pc(&self) -> Word {
        self.pc
    }

    pub fn set_pc(&mut self, pc: Word) {
        self.pc = pc;
    }

    pub fn is_halted(&self) -> bool {
        self.stopped.is_some()
    }

    /// Why the machine stopped, if it has.
    pub fn exit(&self) -> Option<&Exit> {
        self.stopped.as_ref()
    }

    fn fault(&mut self, fault: Fault) -> Fault {
        self.stopped = Some(Exit::Faulted(fault.clone()));
        fault
    }

    /// Number of instructions executed since creation or the last reset.
    pub fn cycles(&self) -> u64 {
        self.cycles
    }

    pub fn config(&self) -> &MachineConfig {
        &self.config
    }

    pub fn memory(&self) -> &Memory {
        &self.memory
    }

    pub fn memory_mut(&mut self) -> &mut Memory {
        &mut self.memory
    }

    pub fn registers(&self) -> &Registers {
        &self.registers
    }

    pub fn registers_mut(&mut self) -> &mut Registers {
        &mut self.registers
    }

    pub fn stack(&self) -> &Stack {
        &self.stack
    }

    fn decode(&self, opcode: Word) -> Result<VMOp, Fault> {
        let pc = self.pc;
        let op = Op::try_from(opcode).map_err(|e| Fault::UnknownOpcode { pc, value: e.number })?;

        let mut operands = [0; 3];
        for (i, slot) in operands.iter_mut().take(op.operand_count()).enumerate() {
            let cell = pc + 1 + i as Word;
            *slot = self
                .memory
                .read(cell)
                .map_err(|_| Fault::Truncated { pc, op })?;
        }

        Ok(VMOp {
            pc,
            opcode: op,
            operands,
        })
    }

    fn value(&self, raw: Word) -> Result<Word, Skip> {
        Operand::value(raw, &self.registers)
    }

    fn execute<I, O>(&mut self, mach_op: &VMOp, input: &mut I, output: &mut O) -> Result<Flow, Abort>
    where
        I: CharSource + ?Sized,
        O: CharSink + ?Sized,
    {
        let pc = mach_op.pc;
        let [a, b, c] = mach_op.operands;

        match mach_op.opcode {
            Op::HALT => return Ok(Flow::Halt),

            Op::SET => {
                let dest = Operand::destination(a)?;
                let value = self.value(b)?;
                self.registers.set(dest, value);
            }

            // Stack
            Op::PUSH => {
                let value = self.value(a)?;
                self.stack.push(value).map_err(|e| e.at(pc))?;
            }
            Op::POP => {
                let dest = Operand::destination(a)?;
                let value = self.stack.pop().map_err(|e| e.at(pc))?;
                self.registers.set(dest, value);
            }

            // Comparison
            Op::EQ | Op::GT => {
                let dest = Operand::destination(a)?;
                let lhs = self.value(b)?;
                let rhs = self.value(c)?;
                let holds = match mach_op.opcode {
                    Op::EQ => lhs == rhs,
                    _ => lhs > rhs,
                };
                self.registers.set(dest, Word::from(holds));
            }

            // Jumping
            Op::JMP => return Ok(Flow::Jump(self.value(a)?)),
            Op::JT | Op::JF => {
                let cond = self.value(a)?;
                let target = self.value(b)?;
                let taken = match mach_op.opcode {
                    Op::JT => cond != 0,
                    _ => cond == 0,
                };
                if taken {
                    return Ok(Flow::Jump(target));
                }
            }

            // Math
            Op::ADD | Op::MULT | Op::MOD | Op::AND | Op::OR => {
                let dest = Operand::destination(a)?;
                let lhs = self.value(b)?;
                let rhs = self.value(c)?;
                let (lhs, rhs) = (u32::from(lhs), u32::from(rhs));
                let result = match mach_op.opcode {
                    Op::ADD => reduce(lhs + rhs),
                    Op::MULT => reduce(lhs * rhs),
                    Op::AND => reduce(lhs & rhs),
                    Op::OR => reduce(lhs | rhs),
                    _ => {
                        // Plain remainder, not reduced again
                        if rhs == 0 {
                            return Err(Fault::DivideByZero { pc }.into());
                        }
                        (lhs % rhs) as Word
                    }
                };
                self.registers.set(dest, result);
            }
            Op::NOT => {
                let dest = Operand::destination(a)?;
                let value = self.value(b)?;
                self.registers.set(dest, reduce(u32::from(!value)));
            }

            // Memory
            Op::RMEM => {
                let dest = Operand::destination(a)?;
                let addr = self.value(b)?;
                let value = self.memory.read(addr)?;
                self.registers.set(dest, value);
            }
            Op::WMEM => {
                let addr = self.value(a)?;
                let value = self.value(b)?;
                self.memory.write(addr, value)?;
            }

            // Calls
            Op::CALL => {
                let target = self.value(a)?;
                self.stack.push(pc + 2).map_err(|e| e.at(pc))?;
                return Ok(Flow::Jump(target));
            }
            Op::RET => {
                let target = self.stack.pop().map_err(|e| e.at(pc))?;
                return Ok(Flow::Jump(target));
            }

            // Console
            Op::OUT => {
                let code = self.value(a)?;
                let ch = char::from_u32(u32::from(code)).ok_or(Skip::NotACharacter { code })?;
                output
                    .write_char(ch)
                    .map_err(|e| Fault::io(pc, e))?;
            }
            Op::IN => {
                let dest = Operand::destination(a)?;
                output.flush().map_err(|e| Fault::io(pc, e))?;

                let ch = input
                    .read_char()
                    .map_err(|e| Fault::io(pc, e))?
                    .ok_or(Fault::InputExhausted { pc })?;
                let code = u32::from(ch);
                if code > u32::from(MAX_LITERAL) {
                    return Err(Fault::UnrepresentableInput { pc, ch }.into());
                }
                self.registers.set(dest, code as Word);
            }

            Op::NOOP => {}
        }

        Ok(Flow::Next)
    }

    /// Executes the instruction at the program counter.
    ///
    /// A fault halts the machine and leaves the program counter on the
    /// faulting instruction. Once stopped, the machine does nothing: a
    /// faulted machine reports its fault again, any other reports `Halted`.
    pub fn step<I, O>(&mut self, input: &mut I, output: &mut O) -> Result<Outcome, Fault>
    where
        I: CharSource + ?Sized,
        O: CharSink + ?Sized,
    {
        match &self.stopped {
            Some(Exit::Faulted(fault)) => return Err(fault.clone()),
            Some(_) => return Ok(Outcome::Halted),
            None => {}
        }

        let Ok(opcode) = self.memory.read(self.pc) else {
            self.stopped = Some(Exit::OutOfBounds { pc: self.pc });
            return Ok(Outcome::Halted);
        };

        if log::log_enabled!(log::Level::Trace) {
            let (text, _) = disasm::disasm_instruction(&self.memory, self.pc);
            log::trace!("{:05}: {}", self.pc, text);
        }

        self.cycles += 1;
        let mach_op = match self.decode(opcode) {
            Ok(mach_op) => mach_op,
            Err(fault) => return Err(self.fault(fault)),
        };
        let next = mach_op.pc + mach_op.opcode.width() as Word;

        match self.execute(&mach_op, input, output) {
            Ok(Flow::Next) => {
                self.pc = next;
                Ok(Outcome::Continue)
            }
            Ok(Flow::Jump(target)) => {
                self.pc = target;
                Ok(Outcome::Continue)
            }
            Ok(Flow::Halt) => {
                self.pc = next;
                self.stopped = Some(Exit::Halted);
                Ok(Outcome::Halted)
            }
            Err(Abort::Skip(skip)) => match self.config.operand_policy {
                OperandPolicy::Lenient => {
                    log::debug!("skipping `{}` at {}: {}", mach_op.opcode, mach_op.pc, skip);
                    self.pc = next;
                    Ok(Outcome::Skipped(skip))
                }
                OperandPolicy::Strict => Err(self.fault(Fault::Strict {
                    pc: mach_op.pc,
                    skip,
                })),
            },
            Err(Abort::Fault(fault)) => Err(self.fault(fault)),
        }
    }

    /// Runs until the machine halts, faults, leaves memory or hits the cycle limit.
    ///
    /// Running a stopped machine returns the reason it stopped.
    pub fn run<I, O>(&mut self, input: &mut I, output: &mut O) -> Exit
    where
        I: CharSource + ?Sized,
        O: CharSink + ?Sized,
    {
        loop {
            if let Some(exit) = &self.stopped {
                return exit.clone();
            }

            if !Memory::contains(self.pc) {
                log::info!("program counter {} left memory", self.pc);
                self.stopped = Some(Exit::OutOfBounds { pc: self.pc });
                continue;
            }

            if let Some(limit) = self.config.cycle_limit {
                if self.cycles >= limit {
                    log::warn!("cycle limit of {} reached at {}", limit, self.pc);
                    return Exit::CycleLimit { cycles: self.cycles };
                }
            }

            match self.step(input, output) {
                Ok(Outcome::Halted) => {
                    log::info!("halted at {} after {} cycles", self.pc, self.cycles)
                }
                Ok(_) => {}
                Err(fault) => log::error!("{}", fault),
            }
        }
    }
}

impl Default for Machine {
    fn default() -> Self {
        Self::new(MachineConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::runtime::io::ScriptedInput;
    use crate::runtime::registers::Register;

    const R0: Word = 32768;
    const R1: Word = 32769;
    const R2: Word = 32770;

    fn machine_with(words: &[Word]) -> Machine {
        let mut mach = Machine::default();
        mach.load_words(words).unwrap();
        mach
    }

    fn step(mach: &mut Machine) -> Result<Outcome, Fault> {
        mach.step(&mut ScriptedInput::empty(), &mut String::new())
    }

    fn reg(mach: &Machine, index: u8) -> Word {
        mach.registers().get(Register::new(index))
    }

    #[test]
    fn test_machine_initialization() {
        let mach = Machine::default();
        assert_eq!(mach.pc(), 0);
        assert!(!mach.is_halted());
        assert!(mach.stack().is_empty());
        assert_eq!(mach.registers().as_array(), &[0; 8]);
        assert_eq!(mach.memory().read(100), Ok(21));
    }

    #[test]
    fn set_copies_register_contents() {
        let mut mach = machine_with(&[1, R0, 7, 1, R1, R0]);
        step(&mut mach).unwrap();
        step(&mut mach).unwrap();

        assert_eq!(reg(&mach, 1), 7);
        assert_eq!(mach.pc(), 6);
    }

    #[test]
    fn literal_destination_is_skipped() {
        let mut mach = machine_with(&[9, 5, 1, 2]);
        assert_eq!(
            step(&mut mach).unwrap(),
            Outcome::Skipped(Skip::LiteralDestination { raw: 5 })
        );
        assert_eq!(mach.pc(), 4);
        assert_eq!(mach.registers().as_array(), &[0; 8]);
    }

    #[test]
    fn invalid_jump_target_falls_through() {
        let mut mach = machine_with(&[6, 32776]);
        assert_eq!(
            step(&mut mach).unwrap(),
            Outcome::Skipped(Skip::InvalidOperand { raw: 32776 })
        );
        assert_eq!(mach.pc(), 2);
    }

    #[test]
    fn call_with_invalid_target_pushes_nothing() {
        let mut mach = machine_with(&[17, 40000, 0]);
        assert_eq!(
            step(&mut mach).unwrap(),
            Outcome::Skipped(Skip::InvalidOperand { raw: 40000 })
        );
        assert!(mach.stack().is_empty());
        assert_eq!(mach.pc(), 2);

        let exit = mach.run(&mut ScriptedInput::empty(), &mut String::new());
        assert!(matches!(exit, Exit::Halted));
        assert!(mach.stack().is_empty());
        assert_eq!(mach.pc(), 3);
    }

    #[test]
    fn conditional_jumps() {
        let mut mach = machine_with(&[7, 1, 10]);
        step(&mut mach).unwrap();
        assert_eq!(mach.pc(), 10);

        let mut mach = machine_with(&[7, 0, 10]);
        step(&mut mach).unwrap();
        assert_eq!(mach.pc(), 3);

        let mut mach = machine_with(&[8, 0, 10]);
        step(&mut mach).unwrap();
        assert_eq!(mach.pc(), 10);

        let mut mach = machine_with(&[8, 3, 10]);
        step(&mut mach).unwrap();
        assert_eq!(mach.pc(), 3);
    }

    #[test]
    fn arithmetic_wraps_at_modulus() {
        let mut mach = machine_with(&[
            9, R0, 32758, 15, // add
            10, R1, 32767, 32767, // mult
            11, R2, 17, 5, // mod
        ]);
        for _ in 0..3 {
            step(&mut mach).unwrap();
        }

        assert_eq!(reg(&mach, 0), 5);
        assert_eq!(reg(&mach, 1), 1);
        assert_eq!(reg(&mach, 2), 2);
    }

    #[test]
    fn bitwise_ops_stay_in_fifteen_bits() {
        let mut mach = machine_with(&[12, R0, 0x7FFF, 0x0F0F, 13, R1, 0x7000, 0x000F, 14, R2, 0]);
        for _ in 0..3 {
            step(&mut mach).unwrap();
        }

        assert_eq!(reg(&mach, 0), 0x0F0F);
        assert_eq!(reg(&mach, 1), 0x700F);
        assert_eq!(reg(&mach, 2), 0x7FFF);
    }

    #[test]
    fn mod_by_zero_faults() {
        let mut mach = machine_with(&[11, R0, 4, 0]);
        assert!(matches!(step(&mut mach), Err(Fault::DivideByZero { pc: 0 })));
        assert!(mach.is_halted());
    }

    #[test]
    fn eq_and_gt_store_flags() {
        let mut mach = machine_with(&[4, R0, 3, 3, 5, R1, 2, 3, 5, R2, 4, 3]);
        for _ in 0..3 {
            step(&mut mach).unwrap();
        }
        assert_eq!((reg(&mach, 0), reg(&mach, 1), reg(&mach, 2)), (1, 0, 1));
    }

    #[test]
    fn rmem_and_wmem_round_trip_through_memory() {
        let mut mach = machine_with(&[16, 500, 1234, 15, R0, 500]);
        step(&mut mach).unwrap();
        step(&mut mach).unwrap();

        assert_eq!(mach.memory().read(500), Ok(1234));
        assert_eq!(reg(&mach, 0), 1234);
    }

    #[test]
    fn rmem_outside_memory_is_skipped() {
        let mut mach = machine_with(&[15, R0, R1]);
        mach.registers_mut().set(Register::new(1), 40000);

        assert_eq!(
            step(&mut mach).unwrap(),
            Outcome::Skipped(Skip::AddressOutOfRange { addr: 40000 })
        );
        assert_eq!(mach.pc(), 3);
    }

    #[test]
    fn call_pushes_return_address_and_ret_pops_it() {
        let mut mach = Machine::default();
        mach.memory_mut().write(100, 17).unwrap();
        mach.memory_mut().write(101, 4000).unwrap();
        mach.memory_mut().write(4000, 18).unwrap();
        mach.set_pc(100);

        step(&mut mach).unwrap();
        assert_eq!(mach.pc(), 4000);
        assert_eq!(mach.stack().as_slice(), &[102]);

        step(&mut mach).unwrap();
        assert_eq!(mach.pc(), 102);
        assert!(mach.stack().is_empty());
    }

    #[test]
    fn pop_on_empty_stack_faults_without_writing() {
        let mut mach = machine_with(&[3, R0]);
        mach.registers_mut().set(Register::new(0), 9);

        assert!(matches!(step(&mut mach), Err(Fault::StackUnderflow { pc: 0 })));
        assert_eq!(reg(&mach, 0), 9);
        assert!(mach.is_halted());
        assert!(matches!(step(&mut mach), Err(Fault::StackUnderflow { pc: 0 })));
    }

    #[test]
    fn pop_with_literal_destination_leaves_stack_alone() {
        let mut mach = machine_with(&[2, 8, 3, 1]);
        step(&mut mach).unwrap();
        assert_eq!(
            step(&mut mach).unwrap(),
            Outcome::Skipped(Skip::LiteralDestination { raw: 1 })
        );
        assert_eq!(mach.stack().as_slice(), &[8]);
    }

    #[test]
    fn stack_limit_overflow_is_distinct_fault() {
        let mut mach = Machine::new(MachineConfig::default().with_stack_limit(1));
        mach.load_words(&[2, 1, 2, 2]).unwrap();

        step(&mut mach).unwrap();
        assert!(matches!(
            step(&mut mach),
            Err(Fault::StackOverflow { pc: 2, limit: 1 })
        ));
    }

    #[test]
    fn unknown_opcode_faults() {
        let mut mach = machine_with(&[255]);
        assert!(matches!(
            step(&mut mach),
            Err(Fault::UnknownOpcode { pc: 0, value: 255 })
        ));
    }

    #[test]
    fn operands_past_memory_end_fault() {
        let mut mach = Machine::default();
        mach.memory_mut().write(32767, 9).unwrap();
        mach.set_pc(32767);

        assert!(matches!(
            step(&mut mach),
            Err(Fault::Truncated { pc: 32767, op: Op::ADD })
        ));
    }

    #[test]
    fn out_emits_and_in_reads() {
        let mut mach = machine_with(&[20, R0, 19, R0, 19, 233]);
        let mut input = ScriptedInput::new("x");
        let mut output = String::new();

        for _ in 0..3 {
            mach.step(&mut input, &mut output).unwrap();
        }
        assert_eq!(reg(&mach, 0), 'x' as Word);
        assert_eq!(output, "xé");
    }

    #[test]
    fn in_at_end_of_input_faults() {
        let mut mach = machine_with(&[20, R0]);
        assert!(matches!(step(&mut mach), Err(Fault::InputExhausted { pc: 0 })));
    }

    #[test]
    fn in_rejects_characters_above_literal_range() {
        let mut mach = machine_with(&[20, R0]);
        let result = mach.step(&mut ScriptedInput::new("😀"), &mut String::new());
        assert!(matches!(result, Err(Fault::UnrepresentableInput { pc: 0, ch: '😀' })));
    }

    #[test]
    fn out_of_surrogate_is_skipped() {
        let mut mach = machine_with(&[19, R0]);
        mach.registers_mut().set(Register::new(0), 0xD800);
        assert_eq!(
            step(&mut mach).unwrap(),
            Outcome::Skipped(Skip::NotACharacter { code: 0xD800 })
        );
    }

    #[test]
    fn strict_policy_turns_skips_into_faults() {
        let config = MachineConfig::default().with_operand_policy(OperandPolicy::Strict);
        let mut mach = Machine::new(config);
        mach.load_words(&[1, 3, 4]).unwrap();

        assert!(matches!(
            step(&mut mach),
            Err(Fault::Strict {
                pc: 0,
                skip: Skip::LiteralDestination { raw: 3 }
            })
        ));
        assert!(mach.is_halted());
    }

    #[test]
    fn self_modifying_code_is_refetched() {
        // wmem 3 0 overwrites the following noop with halt
        let mut mach = machine_with(&[16, 3, 0, 21, 21]);
        let exit = mach.run(&mut ScriptedInput::empty(), &mut String::new());

        assert!(matches!(exit, Exit::Halted));
        assert_eq!(mach.pc(), 4);
    }

    #[test]
    fn faulted_machine_keeps_reporting_its_fault() {
        let mut mach = machine_with(&[18]);
        let first = mach.run(&mut ScriptedInput::empty(), &mut String::new());
        let second = mach.run(&mut ScriptedInput::empty(), &mut String::new());

        assert!(matches!(first, Exit::Faulted(Fault::StackUnderflow { pc: 0 })));
        assert!(matches!(second, Exit::Faulted(Fault::StackUnderflow { pc: 0 })));
        assert!(matches!(step(&mut mach), Err(Fault::StackUnderflow { pc: 0 })));
        assert!(matches!(mach.exit(), Some(Exit::Faulted(_))));
        assert_eq!(mach.cycles(), 1);
    }

    #[test]
    fn out_of_bounds_stop_is_remembered() {
        let mut mach = machine_with(&[6, R0]);
        mach.registers_mut().set(Register::new(0), 40000);

        let first = mach.run(&mut ScriptedInput::empty(), &mut String::new());
        let second = mach.run(&mut ScriptedInput::empty(), &mut String::new());

        assert!(matches!(first, Exit::OutOfBounds { pc: 40000 }));
        assert!(matches!(second, Exit::OutOfBounds { pc: 40000 }));
        assert_eq!(step(&mut mach).unwrap(), Outcome::Halted);
    }

    #[test]
    fn halt_is_reported_as_halt_on_reentry() {
        let mut mach = machine_with(&[0]);
        mach.run(&mut ScriptedInput::empty(), &mut String::new());

        let again = mach.run(&mut ScriptedInput::empty(), &mut String::new());
        assert!(matches!(again, Exit::Halted));
        assert!(matches!(mach.exit(), Some(Exit::Halted)));
    }

    #[test]
    fn run_stops_at_cycle_limit() {
        let mut mach = Machine::new(MachineConfig::default().with_cycle_limit(10));
        mach.load_words(&[6, 0]).unwrap();

        let exit = mach.run(&mut ScriptedInput::empty(), &mut String::new());
        assert!(matches!(exit, Exit::CycleLimit { cycles: 10 }));
        assert!(!mach.is_halted());
    }

    #[test]
    fn reset_restores_creation_state() {
        let mut mach = machine_with(&[2, 5, 1, R0, 9, 0]);
        mach.run(&mut ScriptedInput::empty(), &mut String::new());
        mach.reset();

        assert_eq!(mach.pc(), 0);
        assert_eq!(mach.cycles(), 0);
        assert!(!mach.is_halted());
        assert!(mach.stack().is_empty());
        assert_eq!(mach.registers().as_array(), &[0; 8]);
        assert_eq!(mach.memory().read(0), Ok(21));
    }
}
