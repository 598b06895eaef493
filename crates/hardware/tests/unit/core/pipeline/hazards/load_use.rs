//! Load-Use Hazard Tests.
//!
//! A consumer of a load in EX must wait one cycle and then receive the loaded
//! value from MEM.

use mipsim_core::core::pipeline::hazards::StallReason;
use mipsim_core::core::pipeline::latches::Stage;
use mipsim_core::sim::ProgramImage;
use pretty_assertions::assert_eq;

use crate::common::builder::instruction::InstructionBuilder;
use crate::common::harness::TestContext;

fn load_then_use() -> ProgramImage {
    // 0: lw  $1, 0($0)
    // 4: add $2, $1, $1
    ProgramImage::new(vec![
        InstructionBuilder::new().lw(1, 0, 0).build(),
        InstructionBuilder::new().add(2, 1, 1).build(),
    ])
    .with_memory_word(0, 7)
}

#[test]
fn load_use_stalls_then_forwards_from_mem() {
    let mut tc = TestContext::new().load_image(&load_then_use());

    let outcome = tc.run_to_drain(50);

    assert_eq!(tc.get_reg(1), 7);
    assert_eq!(tc.get_reg(2), 14);
    assert_eq!(outcome.snapshots.len(), 7);

    let stalls: Vec<_> = tc.sim.events().stalls().copied().collect();
    assert_eq!(stalls.len(), 2);
    assert_eq!(stalls[0].cycle, 2);
    assert_eq!(stalls[0].reason, Some(StallReason::IntraGroup));
    assert_eq!(stalls[0].source_stage, Stage::Id);
    assert_eq!(stalls[1].cycle, 3);
    assert_eq!(stalls[1].reason, Some(StallReason::LoadUse));
    assert_eq!(stalls[1].source_stage, Stage::Ex);
    assert_eq!(stalls[1].register, 1);
    assert_eq!(stalls[1].value, None);

    let fwd = tc.sim.events().forwards().next().copied().unwrap();
    assert_eq!(fwd.cycle, 4);
    assert_eq!(fwd.source_stage, Stage::Mem);
    assert_eq!(fwd.value, Some(7));
}

#[test]
fn load_use_leaves_bubble_in_ex() {
    let mut tc = TestContext::new().load_image(&load_then_use());
    let _ = tc.step();
    let _ = tc.step();
    let _ = tc.step();
    let c4 = tc.step();

    assert!(
        c4.stage(Stage::Ex).iter().all(|s| s.is_bubble()),
        "EX holds no instruction the cycle after a load-use stall"
    );
    let mem_op = c4.slot(Stage::Mem, 0).and_then(|s| s.operation());
    assert_eq!(mem_op, Some(mipsim_core::isa::instruction::Operation::Lw));
}

#[test]
fn independent_instruction_after_load_does_not_stall() {
    let image = ProgramImage::new(vec![
        InstructionBuilder::new().lw(1, 4, 0).build(),
        InstructionBuilder::new().nop().build(),
        InstructionBuilder::new().addi(3, 0, 1).build(),
        InstructionBuilder::new().addi(4, 0, 2).build(),
    ])
    .with_memory_word(4, 11);
    let mut tc = TestContext::new().load_image(&image);

    let _ = tc.run_to_drain(50);

    assert_eq!(tc.get_reg(1), 11);
    assert_eq!(tc.get_reg(3), 1);
    assert_eq!(tc.get_reg(4), 2);
    assert_eq!(tc.sim.events().stalls().count(), 0);
}

#[test]
fn load_observes_store_issued_earlier() {
    // 0: addi $1, $0, 42
    // 4: nop
    // 8: sw   $1, 8($0)
    // 12: nop
    // 16: lw  $2, 8($0)
    let mut tc = TestContext::new().load_program(&[
        InstructionBuilder::new().addi(1, 0, 42).build(),
        InstructionBuilder::new().nop().build(),
        InstructionBuilder::new().sw(1, 8, 0).build(),
        InstructionBuilder::new().nop().build(),
        InstructionBuilder::new().lw(2, 8, 0).build(),
    ]);

    let _ = tc.run_to_drain(50);

    assert_eq!(tc.get_mem(8), 42);
    assert_eq!(tc.get_reg(2), 42);
}

#[test]
fn load_in_same_cycle_as_store_sees_stored_value() {
    // 0: addi $1, $0, 9
    // 4: nop
    // 8: sw   $1, 0($0)   lane 0
    // 12: lw  $2, 0($0)   lane 1, reaches MEM in the same cycle
    let mut tc = TestContext::new().load_program(&[
        InstructionBuilder::new().addi(1, 0, 9).build(),
        InstructionBuilder::new().nop().build(),
        InstructionBuilder::new().sw(1, 0, 0).build(),
        InstructionBuilder::new().lw(2, 0, 0).build(),
    ]);

    let _ = tc.run_to_drain(50);

    assert_eq!(tc.get_mem(0), 9);
    assert_eq!(tc.get_reg(2), 9);
}
