//! Program Memory.
//!
//! Holds the instruction stream as words laid out from the entry PC. It is
//! separate from data memory, so loads and stores never observe or modify code.

use crate::core::arch::memory::WORD_BYTES;

/// Instruction words addressed from `base`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ProgramMemory {
    base: u32,
    words: Vec<u32>,
}

impl ProgramMemory {
    /// Creates program memory with `words` placed consecutively from `base`.
    pub const fn new(base: u32, words: Vec<u32>) -> Self {
        Self { base, words }
    }

    /// Address of the first instruction.
    pub const fn base(&self) -> u32 {
        self.base
    }

    /// Number of instruction words.
    pub const fn len(&self) -> usize {
        self.words.len()
    }

    /// Returns true when no program is loaded.
    pub const fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Fetches the word at `pc`.
    ///
    /// # Returns
    ///
    /// The instruction word, or `None` when `pc` is before the program,
    /// past its end, or not word aligned.
    pub fn fetch(&self, pc: u32) -> Option<u32> {
        let offset = pc.checked_sub(self.base)?;
        if offset % WORD_BYTES != 0 {
            return None;
        }
        self.words.get((offset / WORD_BYTES) as usize).copied()
    }

    /// Returns the loaded instruction words.
    pub fn words(&self) -> &[u32] {
        &self.words
    }
}
