//! MIPS architectural storage.
//!
//! This module contains the storage elements the pipeline reads and commits to:
//! 1. **GPRs:** General-purpose register file with register 0 hardwired to zero.
//! 2. **Data Memory:** Byte-addressable, big-endian, word-aligned access.
//! 3. **Program Memory:** Instruction words fetched by address, separate from data.

/// General-Purpose Register file implementation.
pub mod gpr;

/// Byte-addressable data memory.
pub mod memory;

/// Instruction memory holding the loaded program.
pub mod program;
