pub mod config;
pub mod disasm;
pub mod error;
pub mod io;
pub mod machine;
pub mod memory;
pub mod opcode;
pub mod operand;
pub mod registers;
pub mod stack;
pub mod word;
