//! Instruction Decoder.
//!
//! Translates a raw 32-bit MIPS word into a [`Decoded`] record. Decoding is
//! total: every bit pattern yields either a supported operation or
//! [`Operation::Invalid`], so the fetch stage never has to handle a decode error.
//!
//! 1. **Format Selection:** Opcode 0 is R-type, 2/3 are J-type, everything else I-type.
//! 2. **Operand Extraction:** Register fields are kept only where the format defines them.
//! 3. **Immediate Extension:** Sign-extended for arithmetic, memory and branches;
//!    zero-extended for logical immediates; shifted into the upper half for LUI.

use crate::isa::instruction::{Decoded, Format, InstructionBits, Operation};
use crate::isa::mips32::{funct, opcodes, regimm};

/// Decodes a raw instruction word.
///
/// # Arguments
///
/// * `inst` - The raw 32-bit instruction encoding.
///
/// # Returns
///
/// The decoded instruction. The all-zero word decodes to NOP; unknown
/// opcodes, function codes and REGIMM selectors decode to INVALID.
pub fn decode(inst: u32) -> Decoded {
    if inst == 0 {
        return Decoded::NOP;
    }
    match inst.opcode() {
        opcodes::OP_SPECIAL => decode_r(inst),
        opcodes::OP_J | opcodes::OP_JAL => decode_j(inst),
        _ => decode_i(inst),
    }
}

/// Decodes a SPECIAL (R-type) word.
fn decode_r(inst: u32) -> Decoded {
    let operation = match inst.funct() {
        funct::ADD => Operation::Add,
        funct::SUB => Operation::Sub,
        funct::AND => Operation::And,
        funct::OR => Operation::Or,
        funct::XOR => Operation::Xor,
        funct::NOR => Operation::Nor,
        funct::SLT => Operation::Slt,
        funct::SGT => Operation::Sgt,
        funct::SLL => Operation::Sll,
        funct::SRL => Operation::Srl,
        _ => return Decoded::empty(inst, Operation::Invalid),
    };
    Decoded {
        raw: inst,
        format: Format::R,
        operation,
        rs: Some(inst.rs()),
        rt: Some(inst.rt()),
        rd: Some(inst.rd()),
        shamt: inst.shamt(),
        immediate: 0,
        target: None,
    }
}

/// Decodes a J or JAL word.
fn decode_j(inst: u32) -> Decoded {
    let operation = if inst.opcode() == opcodes::OP_JAL {
        Operation::Jal
    } else {
        Operation::J
    };
    Decoded {
        raw: inst,
        format: Format::J,
        operation,
        rs: None,
        rt: None,
        rd: None,
        shamt: 0,
        immediate: 0,
        target: Some(inst.addr26() << 2),
    }
}

/// Decodes an I-type word.
fn decode_i(inst: u32) -> Decoded {
    let imm = inst.imm16();
    let sext = i32::from(imm as u16 as i16);
    let zext = imm as i32;

    let (operation, immediate) = match inst.opcode() {
        opcodes::OP_ADDI => (Operation::Addi, sext),
        opcodes::OP_ANDI => (Operation::Andi, zext),
        opcodes::OP_ORI => (Operation::Ori, zext),
        opcodes::OP_XORI => (Operation::Xori, zext),
        opcodes::OP_LUI => (Operation::Lui, (imm << 16) as i32),
        opcodes::OP_LW => (Operation::Lw, sext),
        opcodes::OP_SW => (Operation::Sw, sext),
        opcodes::OP_BEQ => (Operation::Beq, sext),
        opcodes::OP_BNE => (Operation::Bne, sext),
        opcodes::OP_REGIMM => match inst.rt() {
            regimm::BLTZ => (Operation::Bltz, sext),
            regimm::BGEZ => (Operation::Bgez, sext),
            _ => return Decoded::empty(inst, Operation::Invalid),
        },
        _ => return Decoded::empty(inst, Operation::Invalid),
    };

    let target = operation
        .is_branch()
        .then_some(sext.wrapping_shl(2) as u32);

    // The REGIMM rt field selects the condition; it names no register.
    let rt = match operation {
        Operation::Bltz | Operation::Bgez => None,
        _ => Some(inst.rt()),
    };

    Decoded {
        raw: inst,
        format: Format::I,
        operation,
        rs: Some(inst.rs()),
        rt,
        rd: None,
        shamt: 0,
        immediate,
        target,
    }
}
