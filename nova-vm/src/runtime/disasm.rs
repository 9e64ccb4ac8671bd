use crate::runtime::memory::Memory;
use crate::runtime::opcode::Op;
use crate::runtime::operand::Operand;
use crate::runtime::word::Word;

fn format_operand(raw: Word) -> String {
    match Operand::classify(raw) {
        Ok(operand) => operand.to_string(),
        Err(_) => format!("?{}", raw),
    }
}

/// Disassembles the instruction at `addr`, returning its text and width in words.
pub fn disasm_instruction(memory: &Memory, addr: Word) -> (String, usize) {
    let Ok(opcode) = memory.read(addr) else {
        return (String::from("<out of memory>"), 1);
    };

    let Ok(op) = Op::try_from(opcode) else {
        return (format!("${:04X}", opcode), 1);
    };

    let mut text = op.to_string();
    for i in 1..=op.operand_count() {
        let operand = addr
            .checked_add(i as Word)
            .and_then(|cell| memory.read(cell).ok());
        match operand {
            Some(raw) => {
                text.push(' ');
                text.push_str(&format_operand(raw));
            }
            None => text.push_str(" <eom>"),
        }
    }

    (text, op.width())
}
