use num_enum::{IntoPrimitive, TryFromPrimitive};
use strum::{Display as StrumDisplay, IntoStaticStr};

/// The fixed instruction set. Discriminants are the opcode words.
#[derive(
    StrumDisplay, IntoStaticStr, TryFromPrimitive, IntoPrimitive, Debug, Clone, Copy, PartialEq, Eq, Hash,
)]
#[strum(serialize_all = "lowercase")]
#[repr(u16)]
pub enum Op {
    HALT = 0,
    SET = 1,

    // Stack
    PUSH = 2,
    POP = 3,

    // Comparison
    EQ = 4,
    GT = 5,

    // Jumping
    JMP = 6,
    JT = 7,
    JF = 8,

    // Math
    ADD = 9,
    MULT = 10,
    MOD = 11,
    AND = 12,
    OR = 13,
    NOT = 14,

    // Memory
    RMEM = 15,
    WMEM = 16,

    // Calls
    CALL = 17,
    RET = 18,

    // Console
    OUT = 19,
    IN = 20,

    NOOP = 21,
}

impl Op {
    /// Number of operand cells following the opcode.
    pub const fn operand_count(self) -> usize {
        match self {
            Op::HALT | Op::RET | Op::NOOP => 0,
            Op::PUSH | Op::POP | Op::JMP | Op::CALL | Op::OUT | Op::IN => 1,
            Op::SET | Op::JT | Op::JF | Op::NOT | Op::RMEM | Op::WMEM => 2,
            Op::EQ | Op::GT | Op::ADD | Op::MULT | Op::MOD | Op::AND | Op::OR => 3,
        }
    }

    /// Encoded size in words, opcode included.
    pub const fn width(self) -> usize {
        1 + self.operand_count()
    }
}
