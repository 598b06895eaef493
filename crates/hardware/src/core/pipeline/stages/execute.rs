//! Execute (EX) Stage.
//!
//! This module implements the third stage of the pipeline. It performs the following:
//! 1. **Operand Selection:** Picks ALU inputs from the operands latched in ID.
//! 2. **Arithmetic Execution:** Computes ALU results and load/store addresses.
//! 3. **Branch Resolution:** Resolves branches and jumps; a taken one redirects the
//!    PC and squashes every younger lane of the group.
//! 4. **Invalid Instructions:** Halts or retires them as no-ops per policy.

use tracing::{debug, trace};

use crate::common::error::SimError;
use crate::config::InvalidInstructionPolicy;
use crate::core::pipeline::latches::StageLatch;
use crate::core::pipeline::signals::{InstrClass, OpASrc, OpBSrc};
use crate::core::units::alu::Alu;
use crate::core::units::bru::Bru;

/// Size of an instruction in bytes (the JAL link offset).
const INST_BYTES: u32 = 4;

/// What the EX stage decided this cycle.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ExOutcome {
    /// New PC if a branch or jump was taken.
    pub redirect: Option<u32>,
    /// Number of younger EX lanes squashed by that redirect.
    pub squashed: usize,
}

/// Executes the instruction execute stage.
///
/// # Arguments
///
/// * `ex`     - Instructions in EX this cycle; results are written in place.
/// * `policy` - Treatment of invalid instructions.
/// * `cycle`  - Current cycle number, for error reporting.
///
/// # Returns
///
/// The redirect decision, or [`SimError::Decode`] when an invalid instruction
/// reaches EX under [`InvalidInstructionPolicy::Halt`].
pub fn execute_stage(
    ex: &mut StageLatch,
    policy: InvalidInstructionPolicy,
    cycle: u64,
) -> Result<ExOutcome, SimError> {
    let mut out = ExOutcome::default();

    for inst in ex.occupied_mut() {
        if out.redirect.is_some() {
            inst.valid = false;
            out.squashed += 1;
            trace!(pc = inst.pc, "EX squash");
            continue;
        }
        if !inst.valid {
            continue;
        }

        if inst.ctrl.class == InstrClass::Invalid && policy == InvalidInstructionPolicy::Halt {
            return Err(SimError::Decode {
                cycle,
                pc: inst.pc,
                raw: inst.decoded.raw,
            });
        }

        let a = match inst.ctrl.a_src {
            OpASrc::Rs => inst.rs_val,
            OpASrc::Rt => inst.rt_val,
            OpASrc::Zero => 0,
        };
        let b = match inst.ctrl.b_src {
            OpBSrc::Imm => inst.decoded.immediate as u32,
            OpBSrc::Rt => inst.rt_val,
            OpBSrc::Shamt => inst.decoded.shamt,
        };

        inst.ex_result = if inst.ctrl.link {
            inst.pc.wrapping_add(INST_BYTES)
        } else {
            Alu::execute(inst.ctrl.alu, a, b)
        };
        if inst.ctrl.mem_read || inst.ctrl.mem_write {
            inst.mem_address = Some(inst.ex_result);
        }
        trace!(pc = inst.pc, result = inst.ex_result, "EX");

        if inst.ctrl.branch || inst.ctrl.jump {
            if let Some(target) = Bru::resolve(&inst.decoded, inst.pc, inst.rs_val, inst.rt_val) {
                debug!(pc = inst.pc, target, "EX redirect");
                out.redirect = Some(target);
            }
        }
    }
    Ok(out)
}
