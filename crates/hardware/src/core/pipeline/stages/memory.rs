//! Memory Access (MEM) Stage.
//!
//! This module implements the fourth stage of the instruction pipeline. It
//! performs word loads and validates word stores. Stores are buffered and
//! applied at commit; a load in a later lane of the same cycle observes an
//! earlier lane's store to the same address.

use tracing::trace;

use crate::common::error::{SimError, StateError};
use crate::core::pipeline::latches::StageLatch;
use crate::core::state::ProcessorState;

/// Executes the memory stage of the pipeline.
///
/// # Arguments
///
/// * `mem`   - Instructions in MEM this cycle; loads get `mem_value` filled in.
/// * `state` - Architectural state as of the start of the cycle.
/// * `cycle` - Current cycle number, for fault reporting.
///
/// # Returns
///
/// Pending `(address, value)` stores in lane order, or a fault for a
/// misaligned or out-of-bounds access.
pub fn mem_stage(
    mem: &mut StageLatch,
    state: &ProcessorState,
    cycle: u64,
) -> Result<Vec<(u32, u32)>, SimError> {
    let mut stores: Vec<(u32, u32)> = Vec::new();

    for inst in mem.occupied_mut().filter(|i| i.valid) {
        if !(inst.ctrl.mem_read || inst.ctrl.mem_write) {
            continue;
        }
        let addr = inst.mem_address.unwrap_or(inst.ex_result);
        let (pc, raw) = (inst.pc, inst.decoded.raw);
        let fault = |source: StateError| SimError::Fault {
            cycle,
            pc,
            raw,
            source,
        };

        if inst.ctrl.mem_read {
            let value = match stores.iter().rev().find(|(a, _)| *a == addr) {
                Some(&(_, v)) => v,
                None => state.load_word(addr).map_err(fault)?,
            };
            trace!(pc, addr, value, "MEM load");
            inst.mem_value = Some(value);
        } else {
            let _ = state.memory().check_word(addr).map_err(fault)?;
            let value = inst.rt_val;
            trace!(pc, addr, value, "MEM store");
            inst.mem_value = Some(value);
            stores.push((addr, value));
        }
    }
    Ok(stores)
}
