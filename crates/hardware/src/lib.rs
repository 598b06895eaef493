//! Dual-issue superscalar MIPS pipeline simulator library.
//!
//! This crate implements a cycle-accurate model of a five-stage MIPS pipeline with the following:
//! 1. **ISA:** Decoding of 32-bit MIPS words into structured instructions, plus disassembly.
//! 2. **Core:** Register file, data and program memory, ALU and branch units.
//! 3. **Pipeline:** Per-lane latches, the hazard and forwarding unit, and the cycle engine.
//! 4. **Simulation:** Program loading, bounded runs, snapshot history, and statistics.

/// Common types shared across the simulator (error types).
pub mod common;
/// Simulator configuration (defaults, policies, hierarchical config structures).
pub mod config;
/// Processor core (architectural state, execution units, pipeline).
pub mod core;
/// Instruction set (opcodes, decode, disassembly, register names).
pub mod isa;
/// Simulation driver and program image loader.
pub mod sim;
/// Simulation statistics collection and reporting.
pub mod stats;

/// Root configuration type; use `Config::default()` or deserialize from JSON.
pub use crate::config::Config;
/// Architectural state owned by a simulation.
pub use crate::core::state::ProcessorState;
/// Top-level driver; construct with `Simulator::new`.
pub use crate::sim::simulator::Simulator;
