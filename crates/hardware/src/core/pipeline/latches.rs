//! Pipeline latch structures for inter-stage communication.
//!
//! This module defines what the five-stage pipeline carries between stages:
//! IF → ID → EX → MEM → WB.
//!
//! 1. **Instruction Flow:** [`InFlight`] carries a decoded instruction and the values computed for it.
//! 2. **Superscalar Support:** [`StageLatch`] holds exactly `issue_width` lane slots per stage.
//! 3. **Squash Tracking:** Instructions on a wrong control path are invalidated, never written back.

use serde::Serialize;

use crate::core::pipeline::signals::ControlSignals;
use crate::core::pipeline::traits::PipelineLatch;
use crate::isa::instruction::Decoded;

/// Pipeline stage identifiers, in pipeline order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub enum Stage {
    /// Instruction fetch.
    If,
    /// Decode, register read, and hazard resolution.
    Id,
    /// Execute (ALU and branch resolution).
    Ex,
    /// Memory access.
    Mem,
    /// Register write-back.
    Wb,
}

impl Stage {
    /// All stages in pipeline order.
    pub const ALL: [Self; 5] = [Self::If, Self::Id, Self::Ex, Self::Mem, Self::Wb];

    /// Short upper-case stage name used in log lines.
    pub const fn name(self) -> &'static str {
        match self {
            Self::If => "IF",
            Self::Id => "ID",
            Self::Ex => "EX",
            Self::Mem => "MEM",
            Self::Wb => "WB",
        }
    }
}

/// An instruction travelling through the pipeline.
///
/// Created at fetch, then filled in by the stage currently holding it:
/// ID latches operand values, EX sets `ex_result` (and the memory address
/// for loads and stores), MEM sets `mem_value`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct InFlight {
    /// Global fetch order; lower is older.
    pub seq: u64,
    /// Address the instruction was fetched from.
    pub pc: u32,
    /// Issue lane within its fetch group (0 is oldest).
    pub lane: usize,
    /// The decoded instruction.
    pub decoded: Decoded,
    /// Control signals derived from the operation.
    pub ctrl: ControlSignals,
    /// Value of `rs` latched in ID.
    pub rs_val: u32,
    /// Value of `rt` latched in ID (also the store data).
    pub rt_val: u32,
    /// ALU result, or the link address for JAL.
    pub ex_result: u32,
    /// Effective address of a load or store.
    pub mem_address: Option<u32>,
    /// Value loaded by a load, or written by a store.
    pub mem_value: Option<u32>,
    /// False once the instruction has been squashed.
    pub valid: bool,
    /// Set when the instruction was held in place during the current cycle.
    pub stalled_this_cycle: bool,
}

impl InFlight {
    /// Wraps a freshly fetched instruction.
    pub const fn new(seq: u64, pc: u32, lane: usize, decoded: Decoded) -> Self {
        Self {
            seq,
            pc,
            lane,
            decoded,
            ctrl: ControlSignals::for_operation(decoded.operation),
            rs_val: 0,
            rt_val: 0,
            ex_result: 0,
            mem_address: None,
            mem_value: None,
            valid: true,
            stalled_this_cycle: false,
        }
    }

    /// Destination register, if this valid instruction writes one.
    pub const fn dest(&self) -> Option<usize> {
        if self.valid && self.ctrl.reg_write {
            self.decoded.dest()
        } else {
            None
        }
    }

    /// Returns true if this valid instruction writes `reg`.
    pub fn writes(&self, reg: usize) -> bool {
        self.dest() == Some(reg)
    }

    /// The value this instruction will write back: the loaded word for loads,
    /// the EX result otherwise.
    pub fn result(&self) -> u32 {
        if self.ctrl.mem_read {
            self.mem_value.unwrap_or(0)
        } else {
            self.ex_result
        }
    }
}

/// One pipeline stage's worth of lane slots.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StageLatch {
    /// One slot per issue lane; `None` is a bubble.
    pub slots: Vec<Option<InFlight>>,
}

impl StageLatch {
    /// Creates a latch of `width` empty slots.
    pub fn new(width: usize) -> Self {
        Self {
            slots: vec![None; width],
        }
    }

    /// Number of lanes.
    pub const fn width(&self) -> usize {
        self.slots.len()
    }

    /// Occupied slots in lane order.
    pub fn occupied(&self) -> impl DoubleEndedIterator<Item = &InFlight> + '_ {
        self.slots.iter().flatten()
    }

    /// Mutable occupied slots in lane order.
    pub fn occupied_mut(&mut self) -> impl DoubleEndedIterator<Item = &mut InFlight> + '_ {
        self.slots.iter_mut().flatten()
    }

    /// Number of occupied slots.
    pub fn count(&self) -> usize {
        self.occupied().count()
    }

    /// Places `inst` in the slot of its own lane.
    pub fn place(&mut self, inst: InFlight) {
        if let Some(slot) = self.slots.get_mut(inst.lane) {
            *slot = Some(inst);
        }
    }
}

impl PipelineLatch for StageLatch {
    fn flush(&mut self) {
        self.slots.iter_mut().for_each(|slot| *slot = None);
    }

    fn is_empty(&self) -> bool {
        self.slots.iter().all(Option::is_none)
    }
}
