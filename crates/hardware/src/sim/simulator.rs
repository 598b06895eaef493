//! Simulator: owns the architectural state and the pipeline side-by-side.
//!
//! The simulator is the single owner of everything a run touches. It performs:
//! 1. **Loading:** Installs a program image and resets state, pipeline, and history.
//! 2. **Stepping:** Advances one cycle and records its snapshot, events, and statistics.
//! 3. **Running:** Steps until the program drains, a cycle limit is hit, or a fault occurs.

use std::collections::VecDeque;

use tracing::{info, warn};

use crate::common::error::SimError;
use crate::config::Config;
use crate::core::arch::program::ProgramMemory;
use crate::core::pipeline::engine::Pipeline;
use crate::core::pipeline::events::EventLog;
use crate::core::pipeline::snapshot::CycleSnapshot;
use crate::core::state::ProcessorState;
use crate::sim::loader::ProgramImage;
use crate::stats::SimStats;

/// Why a run stopped.
#[derive(Debug)]
pub enum HaltStatus {
    /// The program was exhausted and the pipeline drained.
    Normal,
    /// The cycle budget was spent first.
    CycleLimit,
    /// A cycle faulted; state reflects the cycles committed before it.
    ///
    /// Nothing from the faulting cycle commits, including the writeback of
    /// older instructions that were in WB alongside the faulting one.
    Fault(SimError),
}

impl HaltStatus {
    /// Returns true for a normal halt.
    pub const fn is_normal(&self) -> bool {
        matches!(self, Self::Normal)
    }
}

/// Result of [`Simulator::run`].
#[derive(Debug)]
pub struct RunOutcome {
    /// Why the run stopped.
    pub status: HaltStatus,
    /// Snapshots of the cycles this run executed, oldest first.
    pub snapshots: Vec<CycleSnapshot>,
}

/// Top-level simulator.
#[derive(Debug)]
pub struct Simulator {
    config: Config,
    state: ProcessorState,
    program: ProgramMemory,
    pipeline: Pipeline,
    history: VecDeque<CycleSnapshot>,
    events: EventLog,
    stats: SimStats,
}

impl Simulator {
    /// Creates a simulator with empty program memory.
    ///
    /// # Returns
    ///
    /// The simulator, or [`SimError::Config`] if `config` fails validation.
    pub fn new(config: Config) -> Result<Self, SimError> {
        config.validate()?;
        Ok(Self {
            state: ProcessorState::new(&config),
            program: ProgramMemory::new(config.general.entry_pc, Vec::new()),
            pipeline: Pipeline::new(&config),
            history: VecDeque::new(),
            events: EventLog::new(),
            stats: SimStats::default(),
            config,
        })
    }

    /// Loads a program image, resetting state, pipeline, history, and statistics.
    ///
    /// On error the simulator is left reset with no program.
    pub fn load(&mut self, image: &ProgramImage) -> Result<(), SimError> {
        self.reset();
        image.apply(&mut self.state)?;
        self.program = image.program(self.config.general.entry_pc);
        info!(
            words = image.words.len(),
            entry = self.config.general.entry_pc,
            "program loaded"
        );
        Ok(())
    }

    /// Loads bare instruction words with zeroed registers and memory.
    pub fn load_program(&mut self, words: &[u32]) -> Result<(), SimError> {
        self.load(&ProgramImage::new(words))
    }

    /// Returns the simulator to its freshly constructed state.
    fn reset(&mut self) {
        self.state = ProcessorState::new(&self.config);
        self.program = ProgramMemory::new(self.config.general.entry_pc, Vec::new());
        self.pipeline.flush();
        self.history.clear();
        self.events = EventLog::new();
        self.stats = SimStats::default();
    }

    /// Returns true when the program is exhausted and nothing is in flight.
    pub fn is_drained(&self) -> bool {
        self.pipeline.is_drained(&self.state, &self.program)
    }

    /// Advances exactly one cycle.
    ///
    /// # Returns
    ///
    /// The cycle's snapshot, or the fault that stopped it (state unchanged).
    pub fn step(&mut self) -> Result<CycleSnapshot, SimError> {
        let out = self.pipeline.step(&mut self.state, &self.program)?;
        self.stats.record(&out);
        self.events.extend(out.snapshot.events().copied());
        self.remember(out.snapshot.clone());
        Ok(out.snapshot)
    }

    /// Appends a snapshot to the history, evicting the oldest beyond the limit.
    fn remember(&mut self, snapshot: CycleSnapshot) {
        self.history.push_back(snapshot);
        if let Some(limit) = self.config.pipeline.history_limit {
            while self.history.len() > limit {
                let _ = self.history.pop_front();
            }
        }
    }

    /// Steps until the pipeline drains, `max_cycles` cycles have run, or a cycle faults.
    ///
    /// # Arguments
    ///
    /// * `max_cycles` - Maximum number of cycles to execute in this call.
    ///
    /// # Returns
    ///
    /// The halt status and the snapshots of the executed cycles (at most
    /// `max_cycles`, and at most `history_limit` when one is configured).
    pub fn run(&mut self, max_cycles: u64) -> RunOutcome {
        let mut snapshots = VecDeque::new();
        let limit = self.config.pipeline.history_limit;

        for _ in 0..max_cycles {
            if self.is_drained() {
                return self.finish(HaltStatus::Normal, snapshots);
            }
            match self.step() {
                Ok(snapshot) => {
                    snapshots.push_back(snapshot);
                    if limit.is_some_and(|l| snapshots.len() > l) {
                        let _ = snapshots.pop_front();
                    }
                }
                Err(err) => {
                    warn!(cycle = self.state.cycle() + 1, error = %err, "run stopped by fault");
                    return self.finish(HaltStatus::Fault(err), snapshots);
                }
            }
        }

        if self.is_drained() {
            return self.finish(HaltStatus::Normal, snapshots);
        }
        warn!(max_cycles, pc = self.state.pc(), "cycle limit reached before drain");
        self.finish(HaltStatus::CycleLimit, snapshots)
    }

    /// Wraps up a run.
    fn finish(&self, status: HaltStatus, snapshots: VecDeque<CycleSnapshot>) -> RunOutcome {
        if status.is_normal() {
            info!(
                cycles = self.stats.cycles,
                retired = self.stats.instructions_retired,
                cpi = self.stats.cpi(),
                "program drained"
            );
        }
        RunOutcome {
            status,
            snapshots: snapshots.into(),
        }
    }

    /// The configuration this simulator was built with.
    pub const fn config(&self) -> &Config {
        &self.config
    }

    /// Architectural state.
    pub const fn state(&self) -> &ProcessorState {
        &self.state
    }

    /// Mutable architectural state, for setup before a run.
    pub const fn state_mut(&mut self) -> &mut ProcessorState {
        &mut self.state
    }

    /// The pipeline, for inspecting in-flight instructions.
    pub const fn pipeline(&self) -> &Pipeline {
        &self.pipeline
    }

    /// Loaded program memory.
    pub const fn program(&self) -> &ProgramMemory {
        &self.program
    }

    /// Every stall and forward recorded since the last load.
    pub const fn events(&self) -> &EventLog {
        &self.events
    }

    /// Retained snapshots, oldest first.
    pub const fn history(&self) -> &VecDeque<CycleSnapshot> {
        &self.history
    }

    /// Accumulated statistics.
    pub const fn stats(&self) -> &SimStats {
        &self.stats
    }
}
