//! ALU arithmetic operations.
//!
//! Implements wrapping 32-bit addition and subtraction. MIPS `add`/`sub`
//! would trap on signed overflow; this core wraps like `addu`/`subu`.

use crate::core::pipeline::signals::AluOp;

/// Executes an integer arithmetic operation.
///
/// # Returns
///
/// The wrapped result, or `0` for non-arithmetic opcodes.
pub const fn execute(op: AluOp, a: u32, b: u32) -> u32 {
    match op {
        AluOp::Add => a.wrapping_add(b),
        AluOp::Sub => a.wrapping_sub(b),
        _ => 0,
    }
}
