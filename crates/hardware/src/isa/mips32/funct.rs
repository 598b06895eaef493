//! MIPS32 SPECIAL Function Codes.
//!
//! Defines the `funct` field values (bits 5-0) for register-register operations.

/// Shift left logical by `shamt`.
pub const SLL: u32 = 0x00;

/// Shift right logical by `shamt`.
pub const SRL: u32 = 0x02;

/// Add.
pub const ADD: u32 = 0x20;

/// Subtract.
pub const SUB: u32 = 0x22;

/// Bitwise AND.
pub const AND: u32 = 0x24;

/// Bitwise OR.
pub const OR: u32 = 0x25;

/// Bitwise XOR.
pub const XOR: u32 = 0x26;

/// Bitwise NOR.
pub const NOR: u32 = 0x27;

/// Set on less than (signed).
pub const SLT: u32 = 0x2A;

/// Set on greater than (signed).
pub const SGT: u32 = 0x2B;
