//! Program Image Loading.
//!
//! This module describes what a simulation starts from. It performs:
//! 1. **Program:** An ordered list of 32-bit instruction words placed at the entry PC.
//! 2. **Register seeding:** Initial values for selected registers.
//! 3. **Memory seeding:** Initial values for selected word-aligned data addresses.
//!
//! Images deserialize from JSON, e.g.
//! `{"words": [537001989], "registers": {"20": 10}, "memory": {"0": 7}}`.

use std::collections::BTreeMap;

use serde::Deserialize;

use crate::common::error::{ConfigError, StateError};
use crate::core::arch::program::ProgramMemory;
use crate::core::state::ProcessorState;

/// A program together with its initial register and memory contents.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct ProgramImage {
    /// Instruction words in program order.
    #[serde(default)]
    pub words: Vec<u32>,

    /// Initial register values by index.
    #[serde(default)]
    pub registers: BTreeMap<usize, u32>,

    /// Initial data memory words by byte address.
    #[serde(default)]
    pub memory: BTreeMap<u32, u32>,
}

impl ProgramImage {
    /// Creates an image from instruction words with zeroed registers and memory.
    pub fn new(words: impl Into<Vec<u32>>) -> Self {
        Self {
            words: words.into(),
            ..Self::default()
        }
    }

    /// Parses an image from JSON.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Sets the initial value of a register.
    #[must_use]
    pub fn with_register(mut self, idx: usize, value: u32) -> Self {
        let _ = self.registers.insert(idx, value);
        self
    }

    /// Sets the initial value of a data memory word.
    #[must_use]
    pub fn with_memory_word(mut self, addr: u32, value: u32) -> Self {
        let _ = self.memory.insert(addr, value);
        self
    }

    /// Builds the program memory for this image.
    ///
    /// # Arguments
    ///
    /// * `entry_pc` - Address of the first word.
    pub fn program(&self, entry_pc: u32) -> ProgramMemory {
        ProgramMemory::new(entry_pc, self.words.clone())
    }

    /// Seeds registers and memory of `state`.
    ///
    /// Every address is validated before anything is written, so a bad entry
    /// leaves `state` untouched.
    pub fn apply(&self, state: &mut ProcessorState) -> Result<(), StateError> {
        for &addr in self.memory.keys() {
            let _ = state.memory().check_word(addr)?;
        }
        state.set_registers(self.registers.iter().map(|(&i, &v)| (i, v)))?;
        for (&addr, &value) in &self.memory {
            state.store_word(addr, value)?;
        }
        Ok(())
    }
}
