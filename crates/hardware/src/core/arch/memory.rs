//! Data Memory.
//!
//! A flat byte array addressed from zero. Words are stored big-endian and
//! must be accessed at addresses that are multiples of four.

use serde::Serialize;

use crate::common::error::StateError;

/// Width of a machine word in bytes.
pub const WORD_BYTES: u32 = 4;

/// Byte-addressable data memory.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct DataMemory {
    bytes: Vec<u8>,
}

impl DataMemory {
    /// Creates a zero-filled memory of `size` bytes.
    pub fn new(size: usize) -> Self {
        Self {
            bytes: vec![0; size],
        }
    }

    /// Size of the memory in bytes.
    pub const fn size(&self) -> usize {
        self.bytes.len()
    }

    /// Validates a word access and returns the starting byte offset.
    ///
    /// # Arguments
    ///
    /// * `addr` - The byte address of the word.
    ///
    /// # Returns
    ///
    /// The offset into the backing store, [`StateError::MisalignedAccess`] when
    /// `addr` is not word aligned, or [`StateError::OutOfBounds`] when the word
    /// does not fit in memory.
    pub fn check_word(&self, addr: u32) -> Result<usize, StateError> {
        if addr % WORD_BYTES != 0 {
            return Err(StateError::MisalignedAccess { addr });
        }
        let start = addr as usize;
        if start + WORD_BYTES as usize > self.bytes.len() {
            return Err(StateError::OutOfBounds {
                addr,
                size: self.bytes.len(),
            });
        }
        Ok(start)
    }

    /// Loads a big-endian word.
    pub fn load_word(&self, addr: u32) -> Result<u32, StateError> {
        let start = self.check_word(addr)?;
        let mut word = [0u8; 4];
        word.copy_from_slice(&self.bytes[start..start + 4]);
        Ok(u32::from_be_bytes(word))
    }

    /// Stores a big-endian word.
    pub fn store_word(&mut self, addr: u32, val: u32) -> Result<(), StateError> {
        let start = self.check_word(addr)?;
        self.bytes[start..start + 4].copy_from_slice(&val.to_be_bytes());
        Ok(())
    }

    /// Returns the raw byte contents.
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }
}
