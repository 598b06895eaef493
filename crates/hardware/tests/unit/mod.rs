//! # Unit Components
//!
//! Tests grouped by the part of the simulator they exercise: configuration,
//! the processor core, ISA definitions, the simulator driver, and statistics.

/// Unit tests for configuration parsing and validation.
pub mod config;
