//! Superscalar Pipeline Engine.
//!
//! This module drives the five-stage pipeline one cycle at a time. Each call to
//! [`Pipeline::step`] performs the following, in order:
//! 1. **WB:** Collects register writes of the instructions in WB.
//! 2. **MEM:** Performs loads and validates stores of the instructions in MEM.
//! 3. **EX:** Computes results and resolves branches; a taken one schedules a flush.
//! 4. **ID:** Runs the hazard unit over the ID group (skipped when flushing).
//! 5. **Advance:** Moves instructions one stage on, holding stalled ID lanes in place.
//! 6. **IF:** Fetches the next group, or holds the PC while ID is stalled.
//! 7. **Commit:** Applies writes and stores, installs the new latches, bumps the cycle.
//!
//! Every stage works on copies, and nothing is committed until all of them have
//! succeeded, so a faulting cycle leaves the state exactly as the previous cycle left it.

use tracing::{debug, debug_span, info};

use crate::common::error::SimError;
use crate::config::{Config, InvalidInstructionPolicy};
use crate::core::arch::program::ProgramMemory;
use crate::core::pipeline::hazards::{InFlightView, IssueDecision};
use crate::core::pipeline::latches::{InFlight, Stage, StageLatch};
use crate::core::pipeline::signals::InstrClass;
use crate::core::pipeline::snapshot::{CycleSnapshot, SlotView};
use crate::core::pipeline::stages::decode::IdOutcome;
use crate::core::pipeline::stages::{decode_stage, execute_stage, fetch_stage, mem_stage, wb_stage};
use crate::core::pipeline::traits::PipelineLatch;
use crate::core::state::ProcessorState;

/// Instruction flow counters for one cycle.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CycleActivity {
    /// Instructions fetched into ID.
    pub fetched: usize,
    /// Instructions issued from ID into EX.
    pub issued: usize,
    /// Classes of the instructions that retired from WB.
    pub retired: Vec<InstrClass>,
    /// Instructions squashed by a taken branch or jump.
    pub squashed: usize,
}

/// Result of a single pipeline cycle.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CycleOutput {
    /// Occupancy and events of the cycle.
    pub snapshot: CycleSnapshot,
    /// Instruction flow counters of the cycle.
    pub activity: CycleActivity,
}

/// The dual-issue five-stage pipeline.
///
/// Latches are named after the stage boundary they sit on and hold the
/// instructions occupying the following stage: `if_id` holds the ID group,
/// `id_ex` the EX group, and so on.
#[derive(Clone, Debug)]
pub struct Pipeline {
    width: usize,
    policy: InvalidInstructionPolicy,
    trace: bool,
    if_id: StageLatch,
    id_ex: StageLatch,
    ex_mem: StageLatch,
    mem_wb: StageLatch,
    next_seq: u64,
}

impl Pipeline {
    /// Creates an empty pipeline shaped by `config`.
    pub fn new(config: &Config) -> Self {
        let width = config.pipeline.issue_width;
        Self {
            width,
            policy: config.pipeline.invalid_instruction,
            trace: config.general.trace_pipeline,
            if_id: StageLatch::new(width),
            id_ex: StageLatch::new(width),
            ex_mem: StageLatch::new(width),
            mem_wb: StageLatch::new(width),
            next_seq: 0,
        }
    }

    /// Issue width (lanes per stage).
    pub const fn width(&self) -> usize {
        self.width
    }

    /// The latch holding the instructions that occupy `stage`.
    ///
    /// # Returns
    ///
    /// `None` for IF, which holds nothing between cycles.
    pub const fn latch(&self, stage: Stage) -> Option<&StageLatch> {
        match stage {
            Stage::If => None,
            Stage::Id => Some(&self.if_id),
            Stage::Ex => Some(&self.id_ex),
            Stage::Mem => Some(&self.ex_mem),
            Stage::Wb => Some(&self.mem_wb),
        }
    }

    /// Returns true when no instruction is in flight.
    pub fn is_empty(&self) -> bool {
        self.if_id.is_empty() && self.id_ex.is_empty() && self.ex_mem.is_empty() && self.mem_wb.is_empty()
    }

    /// Returns true when nothing is in flight and nothing remains to fetch at the PC.
    pub fn is_drained(&self, state: &ProcessorState, program: &ProgramMemory) -> bool {
        self.is_empty() && program.fetch(state.pc()).is_none()
    }

    /// Discards every in-flight instruction.
    pub fn flush(&mut self) {
        self.if_id.flush();
        self.id_ex.flush();
        self.ex_mem.flush();
        self.mem_wb.flush();
    }

    /// Advances the pipeline by exactly one cycle.
    ///
    /// # Arguments
    ///
    /// * `state`   - Architectural state; modified only if the whole cycle succeeds.
    /// * `program` - Instruction memory to fetch from.
    ///
    /// # Returns
    ///
    /// The cycle's snapshot and activity, or the fault that stopped it.
    pub fn step(
        &mut self,
        state: &mut ProcessorState,
        program: &ProgramMemory,
    ) -> Result<CycleOutput, SimError> {
        let cycle = state.cycle() + 1;
        let span = debug_span!("cycle", n = cycle);
        let _enter = span.enter();

        let wb = wb_stage(&self.mem_wb, state, cycle)?;

        let mut mem = self.ex_mem.clone();
        let stores = mem_stage(&mut mem, state, cycle)?;

        let mut ex = self.id_ex.clone();
        let ex_out = execute_stage(&mut ex, self.policy, cycle)?;
        let flush = ex_out.redirect.is_some();

        let id = if flush {
            IdOutcome::default()
        } else {
            let view = InFlightView {
                id: &self.if_id,
                ex: &ex,
                mem: &mem,
                wb: &self.mem_wb,
            };
            decode_stage(view, state, cycle)?
        };
        let id_stalled = id.decisions.iter().any(IssueDecision::is_stall);

        let mut next_wb = StageLatch::new(self.width);
        let mut next_mem = StageLatch::new(self.width);
        let mut next_ex = StageLatch::new(self.width);
        let mut next_id = StageLatch::new(self.width);

        mem.occupied().filter(|i| i.valid).for_each(|i| next_wb.place(*i));
        ex.occupied().filter(|i| i.valid).for_each(|i| next_mem.place(*i));

        let mut activity = CycleActivity {
            retired: wb.retired,
            squashed: ex_out.squashed,
            ..CycleActivity::default()
        };

        if flush {
            activity.squashed += self.if_id.count();
        } else {
            for (slot, decision) in self.if_id.slots.iter().zip(&id.decisions) {
                let Some(inst) = slot else { continue };
                let mut inst = *inst;
                match decision {
                    IssueDecision::Proceed(ops) | IssueDecision::ProceedWithForward(ops, _) => {
                        inst.rs_val = ops.rs;
                        inst.rt_val = ops.rt;
                        inst.stalled_this_cycle = false;
                        next_ex.place(inst);
                        activity.issued += 1;
                    }
                    IssueDecision::Stall { .. } => {
                        inst.stalled_this_cycle = true;
                        next_id.place(inst);
                    }
                }
            }
        }

        let fetch_pc = ex_out.redirect.unwrap_or_else(|| state.pc());
        let group = fetch_stage(program, fetch_pc, self.width, self.next_seq);
        let next_pc = if id_stalled {
            fetch_pc
        } else {
            group.insts.iter().for_each(|i| next_id.place(*i));
            activity.fetched = group.insts.len();
            group.next_pc
        };

        let (hazard_events, forward_events) = CycleSnapshot::partition_events(id.events);
        let snapshot = CycleSnapshot {
            cycle,
            stages: [
                self.fetch_row(&group.insts, id_stalled),
                self.id_row(&id.decisions, flush),
                Self::row(&ex, |i| (false, !i.valid)),
                Self::row(&mem, |_| (false, false)),
                Self::row(&self.mem_wb, |_| (false, false)),
            ],
            stall_occurred: id_stalled,
            flush_occurred: flush,
            hazard_events,
            forward_events,
        };

        for &(rd, value) in &wb.writes {
            state.write_register(rd, value)?;
        }
        for &(addr, value) in &stores {
            state.store_word(addr, value)?;
        }
        state.set_pc(next_pc);
        state.tick();

        self.mem_wb = next_wb;
        self.ex_mem = next_mem;
        self.id_ex = next_ex;
        self.if_id = next_id;
        self.next_seq += activity.fetched as u64;

        if flush {
            debug!(target = next_pc, squashed = activity.squashed, "flush");
        }
        if self.trace {
            info!("{}", snapshot.occupancy_line());
        } else {
            debug!("{}", snapshot.occupancy_line());
        }

        Ok(CycleOutput { snapshot, activity })
    }

    /// Snapshot row for a latch, with per-instruction `(stalled, squashed)` flags.
    fn row<F>(latch: &StageLatch, flags: F) -> Vec<SlotView>
    where
        F: Fn(&InFlight) -> (bool, bool),
    {
        latch
            .slots
            .iter()
            .map(|slot| match slot {
                Some(inst) => {
                    let (stalled, squashed) = flags(inst);
                    SlotView::of(inst, stalled, squashed)
                }
                None => SlotView::Bubble,
            })
            .collect()
    }

    /// Snapshot row for ID: stalled lanes per decision, every lane squashed on a flush.
    fn id_row(&self, decisions: &[IssueDecision], flush: bool) -> Vec<SlotView> {
        self.if_id
            .slots
            .iter()
            .enumerate()
            .map(|(lane, slot)| match slot {
                Some(inst) => {
                    let stalled = decisions.get(lane).is_some_and(IssueDecision::is_stall);
                    SlotView::of(inst, stalled, flush)
                }
                None => SlotView::Bubble,
            })
            .collect()
    }

    /// Snapshot row for IF; a group held back by an ID stall is shown stalled and unsequenced.
    fn fetch_row(&self, insts: &[InFlight], stalled: bool) -> Vec<SlotView> {
        let mut row = vec![SlotView::Bubble; self.width];
        for inst in insts {
            let mut view = SlotView::of(inst, stalled, false);
            if stalled {
                if let SlotView::Instruction { seq, .. } = &mut view {
                    *seq = None;
                }
            }
            if let Some(slot) = row.get_mut(inst.lane) {
                *slot = view;
            }
        }
        row
    }
}
