//! Simulation statistics collection and reporting.
//!
//! This module tracks performance metrics for the pipeline. It provides:
//! 1. **Cycle and IPC:** Total cycles, retired instructions, and derived metrics (CPI, IPC).
//! 2. **Instruction flow:** Fetched, issued, retired, and squashed counts.
//! 3. **Instruction mix:** Retired counts by class (ALU, load, store, branch, jump, nop).
//! 4. **Hazards:** Stall cycles, stall events by reason, and forwards by source stage.
//! 5. **Efficiency:** Ideal cycle count and utilisation relative to the issue width.

use std::fmt;

use serde::Serialize;

use crate::core::pipeline::engine::CycleOutput;
use crate::core::pipeline::events::EventKind;
use crate::core::pipeline::hazards::StallReason;
use crate::core::pipeline::latches::Stage;
use crate::core::pipeline::signals::InstrClass;

/// Simulation statistics structure tracking all performance metrics.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct SimStats {
    /// Total cycles simulated.
    pub cycles: u64,
    /// Instructions fetched into ID.
    pub instructions_fetched: u64,
    /// Instructions issued from ID into EX.
    pub instructions_issued: u64,
    /// Instructions retired from WB.
    pub instructions_retired: u64,

    /// Retired ALU instructions (register and immediate forms).
    pub inst_alu: u64,
    /// Retired loads.
    pub inst_load: u64,
    /// Retired stores.
    pub inst_store: u64,
    /// Retired conditional branches.
    pub inst_branch: u64,
    /// Retired jumps.
    pub inst_jump: u64,
    /// Retired NOPs (and invalid words retired under the `Nop` policy).
    pub inst_nop: u64,

    /// Cycles in which at least one ID lane stalled.
    pub stall_cycles: u64,
    /// Stall events caused by a producer in the same fetch group.
    pub stalls_intra_group: u64,
    /// Stall events caused by a load in EX.
    pub stalls_load_use: u64,

    /// Operands forwarded from EX.
    pub forwards_ex: u64,
    /// Operands forwarded from MEM.
    pub forwards_mem: u64,
    /// Operands forwarded from WB.
    pub forwards_wb: u64,

    /// Cycles in which a taken branch or jump flushed the pipeline.
    pub flushes: u64,
    /// Instructions squashed by those flushes.
    pub squashed: u64,
}

impl SimStats {
    /// Accumulates the activity and events of one cycle.
    pub fn record(&mut self, out: &CycleOutput) {
        let snap = &out.snapshot;
        let act = &out.activity;

        self.cycles += 1;
        self.instructions_fetched += act.fetched as u64;
        self.instructions_issued += act.issued as u64;
        self.instructions_retired += act.retired.len() as u64;
        self.squashed += act.squashed as u64;

        for class in &act.retired {
            match class {
                InstrClass::Alu => self.inst_alu += 1,
                InstrClass::Load => self.inst_load += 1,
                InstrClass::Store => self.inst_store += 1,
                InstrClass::Branch => self.inst_branch += 1,
                InstrClass::Jump => self.inst_jump += 1,
                InstrClass::Nop | InstrClass::Invalid => self.inst_nop += 1,
            }
        }

        if snap.stall_occurred {
            self.stall_cycles += 1;
        }
        if snap.flush_occurred {
            self.flushes += 1;
        }

        for event in snap.events() {
            match (event.kind, event.reason, event.source_stage) {
                (EventKind::Stall, Some(StallReason::IntraGroup), _) => self.stalls_intra_group += 1,
                (EventKind::Stall, Some(StallReason::LoadUse), _) => self.stalls_load_use += 1,
                (EventKind::Forward, _, Stage::Ex) => self.forwards_ex += 1,
                (EventKind::Forward, _, Stage::Mem) => self.forwards_mem += 1,
                (EventKind::Forward, _, Stage::Wb) => self.forwards_wb += 1,
                _ => {}
            }
        }
    }

    /// Instructions retired per cycle.
    pub fn ipc(&self) -> f64 {
        if self.cycles == 0 {
            0.0
        } else {
            self.instructions_retired as f64 / self.cycles as f64
        }
    }

    /// Cycles per retired instruction.
    pub fn cpi(&self) -> f64 {
        if self.instructions_retired == 0 {
            0.0
        } else {
            self.cycles as f64 / self.instructions_retired as f64
        }
    }

    /// Cycles the retired instructions would need at full issue width.
    pub fn ideal_cycles(&self, width: usize) -> f64 {
        if width == 0 {
            0.0
        } else {
            self.instructions_retired as f64 / width as f64
        }
    }

    /// Achieved IPC as a percentage of the issue width.
    pub fn efficiency(&self, width: usize) -> f64 {
        if width == 0 {
            0.0
        } else {
            self.ipc() / width as f64 * 100.0
        }
    }

    /// Total forwarded operands.
    pub const fn forwards(&self) -> u64 {
        self.forwards_ex + self.forwards_mem + self.forwards_wb
    }
}

impl fmt::Display for SimStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "sim_cycles               {}", self.cycles)?;
        writeln!(f, "sim_insts                {}", self.instructions_retired)?;
        writeln!(f, "sim_ipc                  {:.4}", self.ipc())?;
        writeln!(f, "sim_cpi                  {:.4}", self.cpi())?;
        writeln!(
            f,
            "mix                      alu={} load={} store={} branch={} jump={} nop={}",
            self.inst_alu,
            self.inst_load,
            self.inst_store,
            self.inst_branch,
            self.inst_jump,
            self.inst_nop
        )?;
        writeln!(
            f,
            "stalls                   cycles={} intra_group={} load_use={}",
            self.stall_cycles, self.stalls_intra_group, self.stalls_load_use
        )?;
        writeln!(
            f,
            "forwards                 ex={} mem={} wb={}",
            self.forwards_ex, self.forwards_mem, self.forwards_wb
        )?;
        write!(f, "flushes                  {} ({} squashed)", self.flushes, self.squashed)
    }
}
