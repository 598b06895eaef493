//! MIPS32 REGIMM Selectors.
//!
//! Under [`OP_REGIMM`](super::opcodes::OP_REGIMM) the `rt` field picks the branch condition.

/// Branch if `rs` is less than zero.
pub const BLTZ: usize = 0x00;

/// Branch if `rs` is greater than or equal to zero.
pub const BGEZ: usize = 0x01;
