//! Dual-Issue Tests.
//!
//! Two instructions are fetched and issued per cycle. A younger lane that
//! depends on an older lane of the same group stalls, and issue stays in
//! program order.

use mipsim_core::core::pipeline::hazards::StallReason;
use mipsim_core::core::pipeline::latches::Stage;
use mipsim_core::core::pipeline::snapshot::SlotView;
use mipsim_core::sim::ProgramImage;
use pretty_assertions::assert_eq;

use crate::common::builder::instruction::InstructionBuilder;
use crate::common::harness::TestContext;

#[test]
fn independent_pair_issues_together() {
    let mut tc = TestContext::new().load_program(&[
        InstructionBuilder::new().addi(1, 0, 1).build(),
        InstructionBuilder::new().addi(2, 0, 2).build(),
    ]);

    let outcome = tc.run_to_drain(50);

    assert_eq!(outcome.snapshots.len(), 5, "one group through five stages");
    assert_eq!(tc.get_reg(1), 1);
    assert_eq!(tc.get_reg(2), 2);
    assert!(tc.sim.events().is_empty());

    let c1 = &outcome.snapshots[0];
    assert_eq!(c1.cycle, 1);
    assert_eq!(c1.slot(Stage::If, 0).and_then(SlotView::pc), Some(0));
    assert_eq!(c1.slot(Stage::If, 1).and_then(SlotView::pc), Some(4));
}

#[test]
fn intra_group_dependency_stalls_younger_lane() {
    let mut tc = TestContext::new().load_program(&[
        InstructionBuilder::new().addi(1, 0, 5).build(),
        InstructionBuilder::new().add(2, 1, 1).build(),
    ]);

    let _ = tc.step();
    let c2 = tc.step();

    assert!(c2.stall_occurred);
    assert!(!c2.slot(Stage::Id, 0).unwrap().is_stalled(), "older lane issues");
    assert!(c2.slot(Stage::Id, 1).unwrap().is_stalled(), "younger lane holds");
    assert_eq!(c2.hazard_events.len(), 1);
    let stall = c2.hazard_events[0];
    assert_eq!(stall.reason, Some(StallReason::IntraGroup));
    assert_eq!(stall.register, 1);
    assert_eq!(stall.source_stage, Stage::Id);
    assert!(c2.stage(Stage::If).iter().all(SlotView::is_bubble));
}

#[test]
fn cross_lane_war_pair_issues_together() {
    // 0: add $1, $2, $0    (reads $2, which lane 1 writes: old value, no stall)
    // 4: add $2, $1, $0    (reads $1, which lane 0 writes: intra-group stall)
    let image = ProgramImage::new(vec![
        InstructionBuilder::new().add(1, 2, 0).build(),
        InstructionBuilder::new().add(2, 1, 0).build(),
    ])
    .with_register(1, 3)
    .with_register(2, 7);
    let mut tc = TestContext::new().load_image(&image);

    let _ = tc.step();
    let c2 = tc.step();

    assert!(
        !c2.slot(Stage::Id, 0).unwrap().is_stalled(),
        "older lane never waits on a younger writer"
    );
    assert!(c2.slot(Stage::Id, 1).unwrap().is_stalled());
    assert!(c2.forward_events.is_empty(), "lane 0 reads $2 from the register file");
    assert_eq!(c2.hazard_events.len(), 1);
    assert_eq!(c2.hazard_events[0].reason, Some(StallReason::IntraGroup));
    assert_eq!(c2.hazard_events[0].register, 1);

    let _ = tc.run_to_drain(50);
    assert_eq!(tc.get_reg(1), 7, "lane 0 saw the old $2");
    assert_eq!(tc.get_reg(2), 7, "lane 1 saw lane 0's new $1");
}

#[test]
fn stall_holds_fetch_and_keeps_program_order() {
    // 0: addi $1, $0, 5
    // 4: add  $2, $1, $1   (stalls)
    // 8: addi $3, $0, 3    (fetched later, must not overtake)
    // 12: addi $4, $0, 4
    let mut tc = TestContext::new().load_program(&[
        InstructionBuilder::new().addi(1, 0, 5).build(),
        InstructionBuilder::new().add(2, 1, 1).build(),
        InstructionBuilder::new().addi(3, 0, 3).build(),
        InstructionBuilder::new().addi(4, 0, 4).build(),
    ]);

    let _ = tc.step();
    let c2 = tc.step();
    assert_eq!(tc.sim.state().pc(), 8, "PC is held while ID stalls");
    let held = c2.slot(Stage::If, 0).unwrap();
    assert!(held.is_stalled());
    assert!(matches!(held, SlotView::Instruction { seq: None, .. }));

    let _ = tc.run_to_drain(50);
    assert_eq!(tc.get_reg(2), 10);
    assert_eq!(tc.get_reg(3), 3);
    assert_eq!(tc.get_reg(4), 4);
    assert_eq!(tc.sim.stats().instructions_fetched, 4);
    assert_eq!(tc.sim.stats().instructions_retired, 4);
}

#[test]
fn lane_zero_stall_blocks_lane_one() {
    // 0: lw   $1, 0($0)
    // 4: nop
    // 8: add  $2, $1, $0   (load-use stall)
    // 12: addi $3, $0, 3   (independent, waits in order)
    let mut tc = TestContext::new().load_program(&[
        InstructionBuilder::new().lw(1, 0, 0).build(),
        InstructionBuilder::new().nop().build(),
        InstructionBuilder::new().add(2, 1, 0).build(),
        InstructionBuilder::new().addi(3, 0, 3).build(),
    ]);

    let _ = tc.step();
    let _ = tc.step();
    let c3 = tc.step();

    assert!(c3.slot(Stage::Id, 0).unwrap().is_stalled());
    assert!(c3.slot(Stage::Id, 1).unwrap().is_stalled());
    assert_eq!(
        c3.hazard_events.len(),
        1,
        "in-order stalls are not reported as hazards"
    );
    assert_eq!(c3.hazard_events[0].reason, Some(StallReason::LoadUse));
}

#[test]
fn occupancy_line_lists_each_stage() {
    let mut tc = TestContext::new().load_program(&[
        InstructionBuilder::new().addi(1, 0, 5).build(),
        InstructionBuilder::new().add(2, 1, 1).build(),
    ]);

    let c1 = tc.step();

    assert_eq!(
        c1.occupancy_line(),
        "IF[addi|add] ID[-|-] EX[-|-] MEM[-|-] WB[-|-]"
    );
}
