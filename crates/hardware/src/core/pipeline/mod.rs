//! Instruction pipeline implementation.
//!
//! This module contains the implementation of the dual-issue five-stage pipeline.
//! It includes the following components:
//! 1. **Engine:** The per-cycle state machine that advances every stage.
//! 2. **Events:** The append-only log of stalls and forwards.
//! 3. **Hazards:** Detection of data hazards and operand forwarding.
//! 4. **Latches:** Per-lane inter-stage buffers.
//! 5. **Signals:** Control signals derived from each operation.
//! 6. **Snapshots:** Serializable per-cycle occupancy records.
//! 7. **Stages:** Implementation of Fetch, Decode, Execute, Memory, and Writeback stages.
//! 8. **Traits:** Common interfaces for pipeline latches.

/// Cycle-level pipeline driver.
pub mod engine;

/// Stall and forward event records.
pub mod events;

/// Pipeline hazard detection and forwarding logic.
pub mod hazards;

/// Inter-stage pipeline latches (IF/ID, ID/EX, EX/MEM, MEM/WB).
pub mod latches;

/// Control signals generated during instruction decode.
pub mod signals;

/// Per-cycle pipeline occupancy snapshots.
pub mod snapshot;

/// Pipeline stage implementations (fetch, decode, execute, memory, writeback).
pub mod stages;

/// Traits for pipeline latch components.
pub mod traits;
