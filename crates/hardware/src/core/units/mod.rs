//! Execution units.
//!
//! This module contains the functional units the EX stage drives: the
//! integer ALU and the branch resolution unit.

/// Arithmetic Logic Unit for integer operations.
pub mod alu;

/// Branch Resolution Unit (conditions and target addresses).
pub mod bru;
