//! MIPS32 Integer Instruction Encodings.
//!
//! # Structure
//!
//! - `opcodes`: Primary opcodes (bits 31-26).
//! - `funct`: Function codes selecting the R-type operation (bits 5-0).
//! - `regimm`: `rt` selectors under the REGIMM opcode.

/// Function codes for R-type (SPECIAL) instructions.
pub mod funct;

/// Primary opcodes.
pub mod opcodes;

/// `rt` field selectors for REGIMM branches.
pub mod regimm;
