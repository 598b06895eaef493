//! Data Hazard Detection and Forwarding.
//!
//! This module implements the logic for maintaining pipeline consistency when data
//! dependencies exist between instructions. It provides:
//! 1. **Hazard Detection:** Identifies same-group and load-use hazards that require stalls.
//! 2. **Operand Forwarding:** Resolves Read-After-Write (RAW) hazards by bypassing the register file.
//! 3. **Superscalar Support:** Keeps issue in program order across lanes.
//!
//! The unit runs after WB, MEM and EX have been processed for the current cycle,
//! so results produced by those stages this cycle are visible to it. For every
//! source register it searches producers youngest first: older lanes of the
//! same ID group, then EX, MEM and WB (highest lane first within a stage), and
//! falls back to the register file as it stood at the start of the cycle.

use serde::Serialize;

use crate::common::error::StateError;
use crate::core::pipeline::latches::{InFlight, Stage, StageLatch};
use crate::core::state::ProcessorState;

/// Why an ID instruction could not issue.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub enum StallReason {
    /// An older lane of the same fetch group writes the operand.
    IntraGroup,
    /// The operand is being loaded by an instruction in EX.
    LoadUse,
    /// An older lane stalled; issue stays in program order.
    InOrder,
}

/// A bypassed operand.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Forward {
    /// The source register.
    pub register: usize,
    /// Stage that supplied the value.
    pub source: Stage,
    /// The forwarded value.
    pub value: u32,
}

/// Operand values resolved for an issuing instruction.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Operands {
    /// Value of `rs` (0 when the instruction does not read it).
    pub rs: u32,
    /// Value of `rt` (0 when the instruction does not read it).
    pub rt: u32,
}

/// Issue decision for one ID lane.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum IssueDecision {
    /// All operands came from the register file.
    Proceed(Operands),
    /// At least one operand was forwarded.
    ProceedWithForward(Operands, Vec<Forward>),
    /// The instruction must stay in ID this cycle.
    Stall {
        /// Cause of the stall.
        reason: StallReason,
        /// Register that caused it (`None` for in-order stalls).
        register: Option<usize>,
    },
}

impl IssueDecision {
    /// Returns true if the lane stalls.
    pub const fn is_stall(&self) -> bool {
        matches!(self, Self::Stall { .. })
    }
}

/// Outcome of resolving a single source register.
enum Resolution {
    /// Value read from the register file.
    RegFile(u32),
    /// Value bypassed from a later stage.
    Forwarded(Forward),
    /// No value is available this cycle.
    Stall(StallReason),
}

/// Views of the in-flight state the hazard unit inspects.
///
/// `ex`, `mem` and `wb` must already hold this cycle's results.
#[derive(Clone, Copy, Debug)]
pub struct InFlightView<'a> {
    /// Instructions in ID, in lane order.
    pub id: &'a StageLatch,
    /// Instructions in EX with `ex_result` computed.
    pub ex: &'a StageLatch,
    /// Instructions in MEM with loads performed.
    pub mem: &'a StageLatch,
    /// Instructions in WB.
    pub wb: &'a StageLatch,
}

/// Hazard detection and forwarding unit.
#[derive(Debug, Default)]
pub struct HazardUnit;

impl HazardUnit {
    /// Decides, for every ID lane, whether it issues and with which operand values.
    ///
    /// # Arguments
    ///
    /// * `view` - The in-flight stages for the current cycle.
    /// * `regs` - Architectural state as of the start of the cycle.
    ///
    /// # Returns
    ///
    /// One decision per ID lane (empty lanes yield `Proceed` with zero operands),
    /// or the error of a register-file read.
    pub fn evaluate(
        view: InFlightView<'_>,
        regs: &ProcessorState,
    ) -> Result<Vec<IssueDecision>, StateError> {
        let mut decisions = Vec::with_capacity(view.id.width());
        let mut blocked = false;

        for (lane, slot) in view.id.slots.iter().enumerate() {
            let Some(inst) = slot else {
                decisions.push(IssueDecision::Proceed(Operands::default()));
                continue;
            };
            if blocked {
                decisions.push(IssueDecision::Stall {
                    reason: StallReason::InOrder,
                    register: None,
                });
                continue;
            }
            let decision = Self::evaluate_lane(inst, lane, view, regs)?;
            blocked = decision.is_stall();
            decisions.push(decision);
        }
        Ok(decisions)
    }

    /// Resolves both operands of one ID instruction.
    fn evaluate_lane(
        inst: &InFlight,
        lane: usize,
        view: InFlightView<'_>,
        regs: &ProcessorState,
    ) -> Result<IssueDecision, StateError> {
        let mut ops = Operands::default();
        let mut forwards = Vec::new();
        let [rs, rt] = [inst.decoded.rs, inst.decoded.rt];

        let sources = inst.decoded.sources();
        for (i, src) in sources.iter().enumerate() {
            let Some(src) = *src else { continue };
            if sources[..i].contains(&Some(src)) {
                continue;
            }
            let value = match Self::resolve(src, lane, view, regs)? {
                Resolution::RegFile(v) => v,
                Resolution::Forwarded(fwd) => {
                    forwards.push(fwd);
                    fwd.value
                }
                Resolution::Stall(reason) => {
                    return Ok(IssueDecision::Stall {
                        reason,
                        register: Some(src),
                    });
                }
            };
            if rs == Some(src) {
                ops.rs = value;
            }
            if rt == Some(src) {
                ops.rt = value;
            }
        }

        if forwards.is_empty() {
            Ok(IssueDecision::Proceed(ops))
        } else {
            Ok(IssueDecision::ProceedWithForward(ops, forwards))
        }
    }

    /// Finds the youngest producer of `reg` visible to the ID instruction in `lane`.
    fn resolve(
        reg: usize,
        lane: usize,
        view: InFlightView<'_>,
        regs: &ProcessorState,
    ) -> Result<Resolution, StateError> {
        if reg == 0 {
            return Ok(Resolution::RegFile(0));
        }

        if view.id.slots[..lane].iter().flatten().any(|older| older.writes(reg)) {
            return Ok(Resolution::Stall(StallReason::IntraGroup));
        }

        if let Some(producer) = view.ex.occupied().rev().find(|p| p.writes(reg)) {
            if producer.ctrl.mem_read {
                return Ok(Resolution::Stall(StallReason::LoadUse));
            }
            return Ok(Resolution::Forwarded(Forward {
                register: reg,
                source: Stage::Ex,
                value: producer.ex_result,
            }));
        }

        for (stage, latch) in [(Stage::Mem, view.mem), (Stage::Wb, view.wb)] {
            if let Some(producer) = latch.occupied().rev().find(|p| p.writes(reg)) {
                return Ok(Resolution::Forwarded(Forward {
                    register: reg,
                    source: stage,
                    value: producer.result(),
                }));
            }
        }

        regs.read_register(reg).map(Resolution::RegFile)
    }
}
