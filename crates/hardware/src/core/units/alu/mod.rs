//! Arithmetic Logic Unit (ALU).
//!
//! This module implements the 32-bit integer ALU used in the Execute stage.
//! All arithmetic wraps; overflow never traps.
//!
//! Operations are organized into submodules by category:
//! - [`arithmetic`]: Add, Sub
//! - [`logic`]:      And, Or, Xor, Nor, Slt, Sgt
//! - [`shifts`]:     Sll, Srl

/// Integer arithmetic operations (add, subtract).
pub mod arithmetic;

/// Bitwise logical and comparison operations.
pub mod logic;

/// Shift operations (sll, srl).
pub mod shifts;

use crate::core::pipeline::signals::AluOp;

/// Arithmetic Logic Unit (ALU) for integer operations.
#[derive(Debug)]
pub struct Alu;

impl Alu {
    /// Executes an integer ALU operation.
    ///
    /// # Arguments
    ///
    /// * `op` - The ALU operation to perform
    /// * `a`  - First operand
    /// * `b`  - Second operand (the shift amount for shifts)
    ///
    /// # Returns
    ///
    /// The 32-bit result.
    ///
    /// # Examples
    ///
    /// ```
    /// use mipsim_core::core::units::alu::Alu;
    /// use mipsim_core::core::pipeline::signals::AluOp;
    ///
    /// assert_eq!(Alu::execute(AluOp::Add, 0xFFFF_FFFF, 1), 0);
    /// assert_eq!(Alu::execute(AluOp::Slt, -5_i32 as u32, 10), 1);
    /// assert_eq!(Alu::execute(AluOp::Sll, 0x1, 4), 0x10);
    /// ```
    pub const fn execute(op: AluOp, a: u32, b: u32) -> u32 {
        match op {
            AluOp::Add | AluOp::Sub => arithmetic::execute(op, a, b),
            AluOp::And | AluOp::Or | AluOp::Xor | AluOp::Nor | AluOp::Slt | AluOp::Sgt => {
                logic::execute(op, a, b)
            }
            AluOp::Sll | AluOp::Srl => shifts::execute(op, a, b),
        }
    }
}
