//! Instruction Fetch (IF) Stage.
//!
//! This module implements the first stage of the instruction pipeline. It reads
//! a fetch group of up to `issue_width` consecutive words starting at the PC and
//! decodes each one. Fetch never predicts: the next PC is always sequential, and
//! a taken branch or jump corrects it from EX.

use tracing::trace;

use crate::core::arch::memory::WORD_BYTES;
use crate::core::arch::program::ProgramMemory;
use crate::core::pipeline::latches::InFlight;
use crate::isa::decode::decode;

/// Instructions fetched in one cycle.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FetchGroup {
    /// Fetched instructions, lane 0 first.
    pub insts: Vec<InFlight>,
    /// Sequential PC following the group.
    pub next_pc: u32,
}

/// Executes the instruction fetch stage.
///
/// # Arguments
///
/// * `program`   - Instruction memory.
/// * `pc`        - Address of the first word of the group.
/// * `width`     - Maximum number of words to fetch.
/// * `first_seq` - Sequence number assigned to lane 0.
///
/// # Returns
///
/// The fetch group. Fetching stops early at the end of the program, so the
/// group may be partial or empty.
pub fn fetch_stage(program: &ProgramMemory, pc: u32, width: usize, first_seq: u64) -> FetchGroup {
    let mut insts = Vec::with_capacity(width);
    let mut current_pc = pc;

    for lane in 0..width {
        let Some(word) = program.fetch(current_pc) else {
            break;
        };
        let decoded = decode(word);
        trace!(pc = current_pc, lane, word, op = decoded.operation.mnemonic(), "IF");
        insts.push(InFlight::new(first_seq + lane as u64, current_pc, lane, decoded));
        current_pc = current_pc.wrapping_add(WORD_BYTES);
    }

    FetchGroup {
        insts,
        next_pc: current_pc,
    }
}
