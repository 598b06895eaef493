//! Instruction Decode (ID) Stage.
//!
//! Instructions are decoded as they are fetched; this stage reads their
//! operands. It performs the following:
//! 1. **Operand Validation:** Rejects register indices beyond the register file.
//! 2. **Hazard Resolution:** Asks the hazard unit, per lane, to stall or to issue
//!    with register-file or forwarded operands.
//! 3. **Event Emission:** Records a stall or forward event for each decision.

use tracing::debug;

use crate::common::error::SimError;
use crate::core::pipeline::events::PipelineEvent;
use crate::core::pipeline::hazards::{HazardUnit, InFlightView, IssueDecision, StallReason};
use crate::core::pipeline::latches::{InFlight, Stage};
use crate::core::state::ProcessorState;

/// What the ID stage decided this cycle.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct IdOutcome {
    /// One decision per ID lane.
    pub decisions: Vec<IssueDecision>,
    /// Stall and forward events, in lane order.
    pub events: Vec<PipelineEvent>,
}

/// Checks every register named by `inst` against the register file size.
fn check_registers(inst: &InFlight, state: &ProcessorState, cycle: u64) -> Result<(), SimError> {
    let [a, b] = inst.decoded.sources();
    for reg in [a, b, inst.dest()].into_iter().flatten() {
        let _ = state.read_register(reg).map_err(|source| SimError::Fault {
            cycle,
            pc: inst.pc,
            raw: inst.decoded.raw,
            source,
        })?;
    }
    Ok(())
}

/// Executes the decode stage.
///
/// # Arguments
///
/// * `view`  - In-flight stages; EX, MEM and WB already hold this cycle's results.
/// * `state` - Architectural state as of the start of the cycle.
/// * `cycle` - Current cycle number.
///
/// # Returns
///
/// Per-lane issue decisions and the events they raised, or a fault for an
/// out-of-range register operand.
pub fn decode_stage(
    view: InFlightView<'_>,
    state: &ProcessorState,
    cycle: u64,
) -> Result<IdOutcome, SimError> {
    for inst in view.id.occupied() {
        check_registers(inst, state, cycle)?;
    }

    let decisions = HazardUnit::evaluate(view, state)?;
    let mut events = Vec::new();

    for (inst, decision) in view.id.slots.iter().zip(&decisions) {
        let Some(inst) = inst else { continue };
        match decision {
            IssueDecision::Proceed(_) => {}
            IssueDecision::ProceedWithForward(_, forwards) => {
                for fwd in forwards {
                    debug!(
                        pc = inst.pc,
                        reg = fwd.register,
                        from = fwd.source.name(),
                        value = fwd.value,
                        "forward"
                    );
                    events.push(PipelineEvent::forward(cycle, fwd.register, fwd.source, fwd.value));
                }
            }
            IssueDecision::Stall { reason, register } => {
                let source = match reason {
                    StallReason::IntraGroup => Stage::Id,
                    StallReason::LoadUse => Stage::Ex,
                    StallReason::InOrder => continue,
                };
                if let Some(reg) = *register {
                    debug!(pc = inst.pc, reg, ?reason, "stall");
                    events.push(PipelineEvent::stall(cycle, reg, source, *reason));
                }
            }
        }
    }

    Ok(IdOutcome { decisions, events })
}
