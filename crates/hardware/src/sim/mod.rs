//! Simulation driver and program loading.
//!
//! Provides the program image format used to seed a run and the
//! [`Simulator`](simulator::Simulator) that owns state, pipeline, and history.

/// Program image (instruction words plus initial registers and memory).
pub mod loader;

/// Top-level simulator: architectural state, pipeline, snapshot history, and statistics.
pub mod simulator;

pub use loader::ProgramImage;
pub use simulator::{HaltStatus, RunOutcome, Simulator};
