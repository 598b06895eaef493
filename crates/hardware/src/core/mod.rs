//! Core processor implementation.
//!
//! This module contains the architectural state, the execution units, and the
//! dual-issue five-stage pipeline that drives them one cycle at a time.

/// Architectural storage (register file, data memory, program memory).
pub mod arch;

/// Instruction pipeline implementation (stages, latches, hazards, signals, engine).
pub mod pipeline;

/// Processor state owned by a simulation (registers, memory, PC, cycle counter).
pub mod state;

/// Execution units (ALU, branch resolution).
pub mod units;

pub use self::pipeline::engine::Pipeline;
pub use self::state::ProcessorState;
