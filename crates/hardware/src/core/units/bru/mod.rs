//! Branch Resolution Unit (BRU).
//!
//! Evaluates conditional branch outcomes and computes control-flow targets in
//! EX. The core does not predict: fetch always continues sequentially and a
//! taken branch or jump redirects the PC once it resolves.

use crate::isa::instruction::{Decoded, Operation};

/// Mask selecting the 256 MiB region bits kept by J and JAL.
const REGION_MASK: u32 = 0xF000_0000;

/// Size of an instruction in bytes.
const INST_BYTES: u32 = 4;

/// Branch Resolution Unit.
#[derive(Debug)]
pub struct Bru;

impl Bru {
    /// Evaluates the condition of a conditional branch.
    ///
    /// # Arguments
    ///
    /// * `op` - The branch operation.
    /// * `rs` - Value of `rs`.
    /// * `rt` - Value of `rt` (ignored by BLTZ/BGEZ).
    ///
    /// # Returns
    ///
    /// True if the branch is taken. Non-branch operations are never taken.
    pub const fn condition(op: Operation, rs: u32, rt: u32) -> bool {
        match op {
            Operation::Beq => rs == rt,
            Operation::Bne => rs != rt,
            Operation::Bltz => (rs as i32) < 0,
            Operation::Bgez => (rs as i32) >= 0,
            _ => false,
        }
    }

    /// Target of a branch: `pc + 4 + offset`, where `offset` is already in bytes.
    pub const fn branch_target(pc: u32, offset: u32) -> u32 {
        pc.wrapping_add(INST_BYTES).wrapping_add(offset)
    }

    /// Target of a J/JAL: the region of `pc + 4` combined with the region offset.
    pub const fn jump_target(pc: u32, region_offset: u32) -> u32 {
        (pc.wrapping_add(INST_BYTES) & REGION_MASK) | region_offset
    }

    /// Resolves a control-flow instruction.
    ///
    /// # Arguments
    ///
    /// * `inst` - The decoded instruction.
    /// * `pc`   - Address the instruction was fetched from.
    /// * `rs`   - Resolved value of `rs`.
    /// * `rt`   - Resolved value of `rt`.
    ///
    /// # Returns
    ///
    /// `Some(target)` when control transfers, `None` for fall-through and
    /// for non-control instructions.
    pub fn resolve(inst: &Decoded, pc: u32, rs: u32, rt: u32) -> Option<u32> {
        let offset = inst.target?;
        if inst.operation.is_jump() {
            Some(Self::jump_target(pc, offset))
        } else if Self::condition(inst.operation, rs, rt) {
            Some(Self::branch_target(pc, offset))
        } else {
            None
        }
    }
}
