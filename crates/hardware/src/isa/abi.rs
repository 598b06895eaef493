//! MIPS register name constants.
//!
//! Defines the conventional (o32) register names and the indices the
//! pipeline treats specially.

/// Register `$zero` (hardwired to zero).
pub const REG_ZERO: usize = 0;
/// Register `$ra` (return address written by JAL).
pub const REG_RA: usize = 31;

/// Conventional names for registers `$0`-`$31`.
const REG_NAMES: [&str; 32] = [
    "zero", "at", "v0", "v1", "a0", "a1", "a2", "a3", "t0", "t1", "t2", "t3", "t4", "t5", "t6",
    "t7", "s0", "s1", "s2", "s3", "s4", "s5", "s6", "s7", "t8", "t9", "k0", "k1", "gp", "sp", "fp",
    "ra",
];

/// Returns the conventional name of a register, without the `$` sigil.
///
/// Indices past 31 render as `"??"`.
pub fn reg_name(idx: usize) -> &'static str {
    REG_NAMES.get(idx).copied().unwrap_or("??")
}
