//! Pipeline Latch Interface.
//!
//! Defines the common interface for inter-stage buffers: flushing on a
//! control-flow redirect and checking for occupancy when draining.

/// Represents a pipeline latch (inter-stage buffer).
///
/// Latches hold the state of instructions as they move between stages. They support
/// flushing and status checks.
pub trait PipelineLatch {
    /// Clears all entries in the latch.
    ///
    /// Called when a taken branch or jump squashes the wrong-path instructions.
    fn flush(&mut self);

    /// Checks if the latch is empty.
    ///
    /// # Returns
    ///
    /// `true` if there are no instructions in the latch, `false` otherwise.
    fn is_empty(&self) -> bool;
}
