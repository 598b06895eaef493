//! Instruction Set Architecture (ISA) Definitions.
//!
//! Contains definitions for opcodes, function codes, decoding logic, and
//! disassembly for the 32-bit MIPS integer subset the pipeline executes.
//!
//! # Formats
//!
//! * R-type: `opcode(6) rs(5) rt(5) rd(5) shamt(5) funct(6)`.
//! * I-type: `opcode(6) rs(5) rt(5) imm(16)`.
//! * J-type: `opcode(6) addr(26)`.

/// Register name mappings for the MIPS calling convention.
pub mod abi;

/// Decoding of raw words into structured instructions.
pub mod decode;

/// Instruction disassembler for log lines and snapshot identities.
pub mod disasm;

/// Decoded instruction model and bit extraction utilities.
pub mod instruction;

/// MIPS32 opcode, function code, and REGIMM selector constants.
pub mod mips32;
