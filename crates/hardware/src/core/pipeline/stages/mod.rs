//! Pipeline stage implementations.
//!
//! This module contains the individual implementations for the five stages of the
//! instruction pipeline. Each stage works on a copy of its latch and reports what
//! it would change; the engine commits those changes only once the whole cycle
//! has succeeded. It includes:
//! 1. **Fetch:** Reads up to `issue_width` words at the PC and decodes them.
//! 2. **Decode:** Validates register operands and applies the hazard unit's decisions.
//! 3. **Execute:** Performs ALU operations and resolves branch and jump targets.
//! 4. **Memory:** Handles word loads and stores.
//! 5. **Writeback:** Collects register writes and retires instructions.

/// Instruction decode stage implementation.
pub mod decode;

/// Instruction execute stage implementation.
pub mod execute;

/// Instruction fetch stage implementation.
pub mod fetch;

/// Memory access stage implementation.
pub mod memory;

/// Writeback stage implementation.
pub mod writeback;

/// Decode stage entry point (ID stage).
pub use decode::decode_stage;
/// Execute stage entry point (EX stage).
pub use execute::execute_stage;
/// Fetch stage entry point (IF stage).
pub use fetch::fetch_stage;
/// Memory stage entry point (MEM stage).
pub use memory::mem_stage;
/// Writeback stage entry point (WB stage).
pub use writeback::wb_stage;
