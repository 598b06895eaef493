//! Common types used throughout the MIPS pipeline simulator.
//!
//! This module provides the error hierarchy shared by every component:
//! 1. **State Errors:** Register and memory access violations.
//! 2. **Configuration Errors:** Rejected or unparsable configuration.
//! 3. **Simulation Errors:** Runtime faults tagged with the offending cycle and instruction.

/// Error types for state access, configuration, and simulation faults.
pub mod error;

pub use error::{ConfigError, SimError, StateError};
