//! Processor State.
//!
//! This module owns the architectural state of a simulated core. It provides:
//! 1. **Registers:** Checked reads and writes of the general-purpose register file.
//! 2. **Memory:** Word-aligned big-endian loads and stores into data memory.
//! 3. **Control:** The program counter and the monotonically increasing cycle counter.
//!
//! Outside of setup, state only changes through the pipeline's commit step,
//! which applies a whole cycle's effects at once.

use serde::Serialize;

use crate::common::error::StateError;
use crate::config::Config;
use crate::core::arch::gpr::Gpr;
use crate::core::arch::memory::DataMemory;

/// Architectural state of the simulated processor.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ProcessorState {
    gpr: Gpr,
    memory: DataMemory,
    pc: u32,
    cycle: u64,
}

impl ProcessorState {
    /// Creates zeroed state sized by `config`, with the PC at the entry point.
    pub fn new(config: &Config) -> Self {
        Self::with_geometry(
            config.pipeline.register_count,
            config.memory.size_bytes,
            config.general.entry_pc,
        )
    }

    /// Creates zeroed state with explicit geometry.
    ///
    /// # Arguments
    ///
    /// * `register_count` - Number of general-purpose registers.
    /// * `memory_size`    - Data memory size in bytes.
    /// * `entry_pc`       - Initial program counter.
    pub fn with_geometry(register_count: usize, memory_size: usize, entry_pc: u32) -> Self {
        Self {
            gpr: Gpr::new(register_count),
            memory: DataMemory::new(memory_size),
            pc: entry_pc,
            cycle: 0,
        }
    }

    /// Reads register `idx`; register 0 always reads 0.
    pub fn read_register(&self, idx: usize) -> Result<u32, StateError> {
        self.gpr.read(idx)
    }

    /// Writes register `idx`; writes to register 0 are discarded.
    pub fn write_register(&mut self, idx: usize, val: u32) -> Result<(), StateError> {
        self.gpr.write(idx, val)
    }

    /// Loads the big-endian word at `addr`.
    pub fn load_word(&self, addr: u32) -> Result<u32, StateError> {
        self.memory.load_word(addr)
    }

    /// Stores a big-endian word at `addr`.
    pub fn store_word(&mut self, addr: u32, val: u32) -> Result<(), StateError> {
        self.memory.store_word(addr, val)
    }

    /// Bulk-initializes registers from `(index, value)` pairs.
    ///
    /// Every index is validated before anything is written, so a bad entry
    /// leaves the register file untouched.
    pub fn set_registers<I>(&mut self, values: I) -> Result<(), StateError>
    where
        I: IntoIterator<Item = (usize, u32)>,
    {
        let values: Vec<(usize, u32)> = values.into_iter().collect();
        for &(idx, _) in &values {
            let _ = self.gpr.read(idx)?;
        }
        for (idx, val) in values {
            self.gpr.write(idx, val)?;
        }
        Ok(())
    }

    /// Current program counter (address of the next fetch group).
    pub const fn pc(&self) -> u32 {
        self.pc
    }

    /// Number of cycles committed so far.
    pub const fn cycle(&self) -> u64 {
        self.cycle
    }

    /// Register values, index-ordered.
    pub fn registers(&self) -> &[u32] {
        self.gpr.as_slice()
    }

    /// Data memory contents.
    pub const fn memory(&self) -> &DataMemory {
        &self.memory
    }

    /// Sets the program counter. Used by the commit step and by loaders.
    pub(crate) const fn set_pc(&mut self, pc: u32) {
        self.pc = pc;
    }

    /// Advances the cycle counter by one.
    pub(crate) const fn tick(&mut self) {
        self.cycle += 1;
    }
}
