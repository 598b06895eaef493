//! Error definitions.
//!
//! This module defines the error hierarchy for the simulator. It provides:
//! 1. **State Errors:** Violations raised by the register file and data memory.
//! 2. **Configuration Errors:** Invalid parameters or malformed JSON input.
//! 3. **Simulation Errors:** Faults that stop a run, carrying the cycle, PC, and raw word.

use thiserror::Error;

/// Errors raised by architectural state accessors.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum StateError {
    /// A word access whose address is not a multiple of four.
    #[error("misaligned word access at {addr:#010x}")]
    MisalignedAccess {
        /// The offending byte address.
        addr: u32,
    },

    /// An access that falls outside data memory.
    #[error("address {addr:#010x} out of bounds for {size}-byte memory")]
    OutOfBounds {
        /// The offending byte address.
        addr: u32,
        /// Size of the data memory in bytes.
        size: usize,
    },

    /// A register index at or beyond the configured register count.
    #[error("register index {index} out of range (register count {count})")]
    RegisterIndexOutOfRange {
        /// The requested register index.
        index: usize,
        /// Number of registers in the file.
        count: usize,
    },
}

/// Errors raised while parsing or validating configuration and program images.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A field holds a value the simulator cannot honour.
    #[error("invalid configuration: {0}")]
    Invalid(String),

    /// The JSON input could not be deserialized.
    #[error("failed to parse configuration: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Errors that stop a simulation run.
#[derive(Debug, Error)]
pub enum SimError {
    /// An invalid instruction reached EX under the `Halt` policy.
    #[error("invalid instruction {raw:#010x} at pc {pc:#010x} (cycle {cycle})")]
    Decode {
        /// Cycle in which the instruction reached EX.
        cycle: u64,
        /// Address the instruction was fetched from.
        pc: u32,
        /// The raw instruction word.
        raw: u32,
    },

    /// A memory or register access of an in-flight instruction failed.
    #[error("fault in instruction {raw:#010x} at pc {pc:#010x} (cycle {cycle}): {source}")]
    Fault {
        /// Cycle in which the fault was detected.
        cycle: u64,
        /// Address the instruction was fetched from.
        pc: u32,
        /// The raw instruction word.
        raw: u32,
        /// The underlying access error.
        source: StateError,
    },

    /// A state access outside of pipeline execution failed (e.g. during setup).
    #[error(transparent)]
    State(#[from] StateError),

    /// The simulator was constructed or loaded with bad input.
    #[error(transparent)]
    Config(#[from] ConfigError),
}

impl SimError {
    /// Returns the cycle at which a runtime fault occurred, if this is one.
    pub const fn cycle(&self) -> Option<u64> {
        match self {
            Self::Decode { cycle, .. } | Self::Fault { cycle, .. } => Some(*cycle),
            Self::State(_) | Self::Config(_) => None,
        }
    }
}
