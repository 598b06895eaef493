//! Per-cycle pipeline snapshots.
//!
//! A [`CycleSnapshot`] records which instruction occupied every (stage, lane)
//! slot during one cycle, whether the cycle stalled or flushed, and the events
//! the hazard unit produced. Snapshots are plain serializable data for reporters.

use serde::Serialize;

use crate::core::pipeline::events::{EventKind, PipelineEvent};
use crate::core::pipeline::latches::{InFlight, Stage};
use crate::isa::disasm::disassemble;
use crate::isa::instruction::Operation;

/// Contents of a single pipeline slot.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub enum SlotView {
    /// No instruction.
    Bubble,
    /// An instruction occupying the slot.
    Instruction {
        /// Fetch sequence number (`None` for a fetch that was frozen by a stall).
        seq: Option<u64>,
        /// Fetch address.
        pc: u32,
        /// Raw instruction word.
        raw: u32,
        /// Decoded operation.
        operation: Operation,
        /// Disassembly.
        text: String,
        /// Held in place this cycle.
        stalled: bool,
        /// Squashed this cycle by a taken branch or jump.
        squashed: bool,
    },
}

impl SlotView {
    /// Builds the view of an in-flight instruction.
    pub fn of(inst: &InFlight, stalled: bool, squashed: bool) -> Self {
        Self::Instruction {
            seq: Some(inst.seq),
            pc: inst.pc,
            raw: inst.decoded.raw,
            operation: inst.decoded.operation,
            text: disassemble(&inst.decoded),
            stalled,
            squashed,
        }
    }

    /// Returns true for an empty slot.
    pub const fn is_bubble(&self) -> bool {
        matches!(self, Self::Bubble)
    }

    /// Fetch address of the occupying instruction.
    pub const fn pc(&self) -> Option<u32> {
        match self {
            Self::Bubble => None,
            Self::Instruction { pc, .. } => Some(*pc),
        }
    }

    /// Operation of the occupying instruction.
    pub const fn operation(&self) -> Option<Operation> {
        match self {
            Self::Bubble => None,
            Self::Instruction { operation, .. } => Some(*operation),
        }
    }

    /// Returns true if the occupying instruction was stalled.
    pub const fn is_stalled(&self) -> bool {
        matches!(self, Self::Instruction { stalled: true, .. })
    }

    /// Returns true if the occupying instruction was squashed.
    pub const fn is_squashed(&self) -> bool {
        matches!(self, Self::Instruction { squashed: true, .. })
    }
}

/// Pipeline occupancy and events for one cycle.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct CycleSnapshot {
    /// Cycle number, starting at 1.
    pub cycle: u64,
    /// Slots indexed by stage (IF, ID, EX, MEM, WB) then lane.
    pub stages: [Vec<SlotView>; 5],
    /// Some ID lane stalled this cycle.
    pub stall_occurred: bool,
    /// A taken branch or jump squashed younger instructions this cycle.
    pub flush_occurred: bool,
    /// Stall events raised this cycle.
    pub hazard_events: Vec<PipelineEvent>,
    /// Forward events raised this cycle.
    pub forward_events: Vec<PipelineEvent>,
}

impl CycleSnapshot {
    /// Slots of `stage`, in lane order.
    pub fn stage(&self, stage: Stage) -> &[SlotView] {
        &self.stages[stage as usize]
    }

    /// Slot at (`stage`, `lane`).
    pub fn slot(&self, stage: Stage, lane: usize) -> Option<&SlotView> {
        self.stage(stage).get(lane)
    }

    /// All events of the cycle, stalls first.
    pub fn events(&self) -> impl Iterator<Item = &PipelineEvent> + '_ {
        self.hazard_events.iter().chain(self.forward_events.iter())
    }

    /// Splits a cycle's events into stall and forward lists.
    pub(crate) fn partition_events(events: Vec<PipelineEvent>) -> (Vec<PipelineEvent>, Vec<PipelineEvent>) {
        events.into_iter().partition(|e| e.kind == EventKind::Stall)
    }

    /// Renders a one-line occupancy summary, e.g. `IF[addi|add] ID[-|-] ...`.
    pub fn occupancy_line(&self) -> String {
        let mut line = String::new();
        for stage in Stage::ALL {
            if !line.is_empty() {
                line.push(' ');
            }
            line.push_str(stage.name());
            line.push('[');
            let slots: Vec<&str> = self
                .stage(stage)
                .iter()
                .map(|slot| match slot {
                    SlotView::Bubble => "-",
                    SlotView::Instruction { operation, .. } => operation.mnemonic(),
                })
                .collect();
            line.push_str(&slots.join("|"));
            line.push(']');
        }
        line
    }
}
