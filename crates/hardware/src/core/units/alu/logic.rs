//! ALU logical and comparison operations.
//!
//! Comparisons interpret both operands as two's-complement signed values
//! and produce 0 or 1.

use crate::core::pipeline::signals::AluOp;

/// Executes a logical or comparison operation.
///
/// # Arguments
///
/// * `op` - The ALU operation to perform (must be a logic/comparison variant).
/// * `a`  - First operand.
/// * `b`  - Second operand.
///
/// # Returns
///
/// The 32-bit result. Returns `0` for non-logic opcodes.
pub const fn execute(op: AluOp, a: u32, b: u32) -> u32 {
    match op {
        AluOp::And => a & b,
        AluOp::Or => a | b,
        AluOp::Xor => a ^ b,
        AluOp::Nor => !(a | b),
        AluOp::Slt => ((a as i32) < (b as i32)) as u32,
        AluOp::Sgt => ((a as i32) > (b as i32)) as u32,
        _ => 0,
    }
}
