//! MIPS General-Purpose Register File.
//!
//! This module implements the General-Purpose Register (GPR) file. It performs the following:
//! 1. **Storage:** Maintains a configurable number of 32-bit integer registers.
//! 2. **Invariant Enforcement:** Ensures that register `$0` is hardwired to zero.
//! 3. **Bounds Checking:** Rejects indices past the configured register count.

use serde::Serialize;

use crate::common::error::StateError;

/// General-Purpose Register file.
///
/// Register `$0` is hardwired to zero; writes to it are accepted and discarded.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Gpr {
    regs: Vec<u32>,
}

impl Gpr {
    /// Creates a register file with `count` registers, all zero.
    ///
    /// # Arguments
    ///
    /// * `count` - Number of registers (validated by the configuration).
    pub fn new(count: usize) -> Self {
        Self {
            regs: vec![0; count],
        }
    }

    /// Number of registers in the file.
    pub const fn len(&self) -> usize {
        self.regs.len()
    }

    /// Returns true when the file has no registers.
    pub const fn is_empty(&self) -> bool {
        self.regs.is_empty()
    }

    /// Checks that `idx` names a register in this file.
    fn check(&self, idx: usize) -> Result<(), StateError> {
        if idx < self.regs.len() {
            Ok(())
        } else {
            Err(StateError::RegisterIndexOutOfRange {
                index: idx,
                count: self.regs.len(),
            })
        }
    }

    /// Reads a general-purpose register value.
    ///
    /// # Arguments
    ///
    /// * `idx` - Register index.
    ///
    /// # Returns
    ///
    /// The 32-bit register value (`$0` always reads 0), or
    /// [`StateError::RegisterIndexOutOfRange`].
    pub fn read(&self, idx: usize) -> Result<u32, StateError> {
        self.check(idx)?;
        Ok(if idx == 0 { 0 } else { self.regs[idx] })
    }

    /// Writes a value to a general-purpose register.
    ///
    /// # Arguments
    ///
    /// * `idx` - Register index.
    /// * `val` - The 32-bit value to write. Ignored for `$0`.
    pub fn write(&mut self, idx: usize, val: u32) -> Result<(), StateError> {
        self.check(idx)?;
        if idx != 0 {
            self.regs[idx] = val;
        }
        Ok(())
    }

    /// Returns a view of every register value, index-ordered.
    pub fn as_slice(&self) -> &[u32] {
        &self.regs
    }
}
