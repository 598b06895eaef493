//! MIPS32 Primary Opcodes.
//!
//! Defines the major opcodes (bits 31-26) of the supported instruction subset.

/// Register-register instructions; the operation is selected by `funct`.
pub const OP_SPECIAL: u32 = 0x00;

/// Branches on the sign of `rs` (BLTZ, BGEZ); the operation is selected by `rt`.
pub const OP_REGIMM: u32 = 0x01;

/// Unconditional jump within the current 256 MiB region.
pub const OP_J: u32 = 0x02;

/// Jump and link (return address in `$ra`).
pub const OP_JAL: u32 = 0x03;

/// Branch if equal.
pub const OP_BEQ: u32 = 0x04;

/// Branch if not equal.
pub const OP_BNE: u32 = 0x05;

/// Add immediate (sign-extended).
pub const OP_ADDI: u32 = 0x08;

/// AND immediate (zero-extended).
pub const OP_ANDI: u32 = 0x0C;

/// OR immediate (zero-extended).
pub const OP_ORI: u32 = 0x0D;

/// XOR immediate (zero-extended).
pub const OP_XORI: u32 = 0x0E;

/// Load upper immediate.
pub const OP_LUI: u32 = 0x0F;

/// Load word.
pub const OP_LW: u32 = 0x23;

/// Store word.
pub const OP_SW: u32 = 0x2B;
