//! Writeback (WB) Stage.
//!
//! This module implements the final stage of the instruction pipeline. It
//! collects the register writes of the instructions in WB, in lane order, and
//! reports which instructions retire. The writes are applied by the engine at
//! commit, so they become visible to register-file reads from the next cycle on.

use tracing::trace;

use crate::common::error::SimError;
use crate::core::pipeline::latches::StageLatch;
use crate::core::pipeline::signals::InstrClass;
use crate::core::state::ProcessorState;

/// What the WB stage produced this cycle.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct WbOutcome {
    /// `(register, value)` writes in lane order; later entries win.
    pub writes: Vec<(usize, u32)>,
    /// Classes of the instructions retiring this cycle.
    pub retired: Vec<InstrClass>,
}

/// Executes the writeback stage of the pipeline.
///
/// # Arguments
///
/// * `wb`    - Instructions in WB this cycle.
/// * `state` - Architectural state, used to validate destination registers.
/// * `cycle` - Current cycle number, for fault reporting.
///
/// # Returns
///
/// The collected writes and retirements, or a fault if a destination
/// register does not exist.
pub fn wb_stage(wb: &StageLatch, state: &ProcessorState, cycle: u64) -> Result<WbOutcome, SimError> {
    let mut out = WbOutcome::default();

    for inst in wb.occupied().filter(|i| i.valid) {
        out.retired.push(inst.ctrl.class);
        if let Some(rd) = inst.dest() {
            let _ = state.read_register(rd).map_err(|source| SimError::Fault {
                cycle,
                pc: inst.pc,
                raw: inst.decoded.raw,
                source,
            })?;
            let value = inst.result();
            trace!(pc = inst.pc, rd, value, "WB");
            out.writes.push((rd, value));
        }
    }
    Ok(out)
}
