//! Instruction Disassembler.
//!
//! Renders a [`Decoded`] instruction as MIPS assembly for log lines, test
//! diagnostics, and the instruction identity shown in pipeline snapshots.
//!
//! # Usage
//!
//! ```
//! use mipsim_core::isa::{decode::decode, disasm::disassemble};
//! assert_eq!(disassemble(&decode(0x0043_0820)), "add $at, $v0, $v1");
//! ```

use crate::isa::abi::reg_name;
use crate::isa::instruction::{Decoded, Operation};

/// Formats a register operand with its `$` sigil.
fn reg(idx: Option<usize>) -> String {
    format!("${}", reg_name(idx.unwrap_or(0)))
}

/// Disassembles a decoded instruction.
///
/// Branch operands show the signed word offset as encoded, jumps show the
/// region offset in hex, and invalid words render as a `.word` directive.
///
/// # Arguments
///
/// * `d` - The decoded instruction.
pub fn disassemble(d: &Decoded) -> String {
    let m = d.operation.mnemonic();
    match d.operation {
        Operation::Add
        | Operation::Sub
        | Operation::And
        | Operation::Or
        | Operation::Xor
        | Operation::Nor
        | Operation::Slt
        | Operation::Sgt => format!("{m} {}, {}, {}", reg(d.rd), reg(d.rs), reg(d.rt)),
        Operation::Sll | Operation::Srl => {
            format!("{m} {}, {}, {}", reg(d.rd), reg(d.rt), d.shamt)
        }
        Operation::Addi => format!("{m} {}, {}, {}", reg(d.rt), reg(d.rs), d.immediate),
        Operation::Andi | Operation::Ori | Operation::Xori => {
            format!("{m} {}, {}, {:#x}", reg(d.rt), reg(d.rs), d.immediate)
        }
        Operation::Lui => format!("{m} {}, {:#x}", reg(d.rt), (d.immediate as u32) >> 16),
        Operation::Lw | Operation::Sw => {
            format!("{m} {}, {}({})", reg(d.rt), d.immediate, reg(d.rs))
        }
        Operation::Beq | Operation::Bne => {
            format!("{m} {}, {}, {}", reg(d.rs), reg(d.rt), d.immediate)
        }
        Operation::Bltz | Operation::Bgez => format!("{m} {}, {}", reg(d.rs), d.immediate),
        Operation::J | Operation::Jal => format!("{m} {:#x}", d.target.unwrap_or(0)),
        Operation::Nop => m.to_string(),
        Operation::Invalid => format!(".word {:#010x}", d.raw),
    }
}
