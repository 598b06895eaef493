//! Decoder property and encoding tests.
//!
//! Checks field extraction, immediate extension, and operation selection for
//! every supported encoding, plus properties that must hold for any word.

use mipsim_core::isa::decode::decode;
use mipsim_core::isa::instruction::{Decoded, Format, InstructionBits, Operation};
use proptest::prelude::*;
use rstest::rstest;

use crate::common::builder::instruction::InstructionBuilder;

// ══════════════════════════════════════════════════════════
// 1. Known encodings
// ══════════════════════════════════════════════════════════

#[test]
fn add_at_v0_v1() {
    let d = decode(0x0043_0820);
    assert_eq!(d.operation, Operation::Add);
    assert_eq!(d.format, Format::R);
    assert_eq!(d.rs, Some(2));
    assert_eq!(d.rt, Some(3));
    assert_eq!(d.rd, Some(1));
    assert_eq!(d.shamt, 0);
}

#[test]
fn field_extractors_match_layout() {
    // opcode 0x23 | rs 29 | rt 2 | imm 0x8004
    let raw: u32 = (0x23 << 26) | (29 << 21) | (2 << 16) | 0x8004;
    assert_eq!(raw.opcode(), 0x23);
    assert_eq!(raw.rs(), 29);
    assert_eq!(raw.rt(), 2);
    assert_eq!(raw.rd(), 16);
    assert_eq!(raw.shamt(), 0);
    assert_eq!(raw.funct(), 0x04);
    assert_eq!(raw.imm16(), 0x8004);
    assert_eq!(raw.addr26(), raw & 0x03FF_FFFF);
}

#[test]
fn zero_word_is_nop() {
    let d = decode(0);
    assert_eq!(d, Decoded::NOP);
    assert_eq!(d.format, Format::Nop);
    assert_eq!(d.sources(), [None, None]);
    assert_eq!(d.dest(), None);
}

#[test]
fn sll_with_nonzero_fields_is_not_nop() {
    let raw = InstructionBuilder::new().sll(2, 1, 4).build();
    let d = decode(raw);
    assert_eq!(d.operation, Operation::Sll);
    assert_eq!(d.rd, Some(2));
    assert_eq!(d.rt, Some(1));
    assert_eq!(d.shamt, 4);
    assert_eq!(d.sources(), [Some(1), None], "shifts read only rt");
}

#[rstest]
#[case(InstructionBuilder::new().add(3, 1, 2).build(), Operation::Add)]
#[case(InstructionBuilder::new().sub(3, 1, 2).build(), Operation::Sub)]
#[case(InstructionBuilder::new().and(3, 1, 2).build(), Operation::And)]
#[case(InstructionBuilder::new().or(3, 1, 2).build(), Operation::Or)]
#[case(InstructionBuilder::new().xor(3, 1, 2).build(), Operation::Xor)]
#[case(InstructionBuilder::new().nor(3, 1, 2).build(), Operation::Nor)]
#[case(InstructionBuilder::new().slt(3, 1, 2).build(), Operation::Slt)]
#[case(InstructionBuilder::new().sgt(3, 1, 2).build(), Operation::Sgt)]
fn r_type_operations(#[case] raw: u32, #[case] op: Operation) {
    let d = decode(raw);
    assert_eq!(d.operation, op);
    assert_eq!(d.format, Format::R);
    assert_eq!(d.sources(), [Some(1), Some(2)]);
    assert_eq!(d.dest(), Some(3));
}

#[rstest]
#[case(InstructionBuilder::new().addi(5, 4, 1).build(), Operation::Addi)]
#[case(InstructionBuilder::new().andi(5, 4, 1).build(), Operation::Andi)]
#[case(InstructionBuilder::new().ori(5, 4, 1).build(), Operation::Ori)]
#[case(InstructionBuilder::new().xori(5, 4, 1).build(), Operation::Xori)]
#[case(InstructionBuilder::new().lw(5, 8, 4).build(), Operation::Lw)]
fn i_type_writers_read_rs_and_write_rt(#[case] raw: u32, #[case] op: Operation) {
    let d = decode(raw);
    assert_eq!(d.operation, op);
    assert_eq!(d.format, Format::I);
    assert_eq!(d.sources(), [Some(4), None]);
    assert_eq!(d.dest(), Some(5));
}

#[test]
fn sw_reads_base_and_value() {
    let d = decode(InstructionBuilder::new().sw(7, -4, 29).build());
    assert_eq!(d.operation, Operation::Sw);
    assert_eq!(d.sources(), [Some(29), Some(7)]);
    assert_eq!(d.dest(), None, "stores write no register");
    assert_eq!(d.immediate, -4);
}

// ══════════════════════════════════════════════════════════
// 2. Immediate extension
// ══════════════════════════════════════════════════════════

#[test]
fn addi_sign_extends() {
    let d = decode(InstructionBuilder::new().addi(1, 0, -1).build());
    assert_eq!(d.immediate, -1);
}

#[test]
fn logical_immediates_zero_extend() {
    for raw in [
        InstructionBuilder::new().andi(1, 0, 0xFFFF).build(),
        InstructionBuilder::new().ori(1, 0, 0xFFFF).build(),
        InstructionBuilder::new().xori(1, 0, 0xFFFF).build(),
    ] {
        assert_eq!(decode(raw).immediate, 0xFFFF, "{raw:#010x} should zero-extend");
    }
}

#[test]
fn lui_shifts_immediate_into_upper_half() {
    let d = decode(InstructionBuilder::new().lui(8, 0x1234).build());
    assert_eq!(d.operation, Operation::Lui);
    assert_eq!(d.immediate as u32, 0x1234_0000);
    assert_eq!(d.sources(), [None, None]);
    assert_eq!(d.dest(), Some(8));
}

// ══════════════════════════════════════════════════════════
// 3. Control flow
// ══════════════════════════════════════════════════════════

#[test]
fn branch_offset_is_scaled_to_bytes() {
    let d = decode(InstructionBuilder::new().beq(1, 2, -3).build());
    assert_eq!(d.operation, Operation::Beq);
    assert_eq!(d.immediate, -3);
    assert_eq!(d.target, Some((-12i32) as u32));
    assert_eq!(d.sources(), [Some(1), Some(2)]);
    assert_eq!(d.dest(), None);
}

#[test]
fn regimm_selects_bltz_and_bgez() {
    let lt = decode(InstructionBuilder::new().bltz(4, 2).build());
    let ge = decode(InstructionBuilder::new().bgez(4, 2).build());
    assert_eq!(lt.operation, Operation::Bltz);
    assert_eq!(ge.operation, Operation::Bgez);
    assert_eq!(lt.sources(), [Some(4), None]);
    assert_eq!(ge.target, Some(8));
}

#[test]
fn regimm_selector_is_not_a_register_operand() {
    for raw in [
        InstructionBuilder::new().bltz(4, 2).build(),
        InstructionBuilder::new().bgez(4, 2).build(),
    ] {
        let d = decode(raw);
        assert_eq!(d.format, Format::I);
        assert_eq!(d.rs, Some(4));
        assert_eq!(d.rt, None, "{raw:#010x}: rt selects the condition");
        assert_eq!(d.rd, None);
    }
}

#[test]
fn regimm_with_unknown_selector_is_invalid() {
    let raw = (1 << 26) | (4 << 21) | (5 << 16);
    assert_eq!(decode(raw).operation, Operation::Invalid);
}

#[test]
fn jumps_carry_region_offset() {
    let j = decode(InstructionBuilder::new().j(0x40).build());
    assert_eq!(j.operation, Operation::J);
    assert_eq!(j.format, Format::J);
    assert_eq!(j.target, Some(0x40));
    assert_eq!(j.dest(), None);

    let jal = decode(InstructionBuilder::new().jal(0x40).build());
    assert_eq!(jal.operation, Operation::Jal);
    assert_eq!(jal.dest(), Some(31), "jal links into $ra");
}

// ══════════════════════════════════════════════════════════
// 4. Invalid words
// ══════════════════════════════════════════════════════════

#[rstest]
#[case(0xFC00_0000)] // opcode 0x3F
#[case(0x0000_0001)] // SPECIAL with unknown funct
#[case(0x8000_0000)] // LB, unsupported
fn unsupported_words_decode_invalid(#[case] raw: u32) {
    let d = decode(raw);
    assert_eq!(d.operation, Operation::Invalid);
    assert_eq!(d.raw, raw);
    assert_eq!(d.sources(), [None, None]);
    assert_eq!(d.dest(), None);
}

// ══════════════════════════════════════════════════════════
// 5. Properties
// ══════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn decode_never_panics_and_keeps_raw(raw in any::<u32>()) {
        let d = decode(raw);
        prop_assert_eq!(d.raw, raw);
    }

    #[test]
    fn register_fields_are_in_range(raw in any::<u32>()) {
        let d = decode(raw);
        for r in [d.rs, d.rt, d.rd].into_iter().flatten() {
            prop_assert!(r < 32);
        }
    }

    #[test]
    fn r_type_fields_match_bits(rs in 0u32..32, rt in 0u32..32, rd in 1u32..32) {
        let raw = InstructionBuilder::new().add(rd, rs, rt).build();
        let d = decode(raw);
        prop_assert_eq!(d.rs, Some(raw.rs()));
        prop_assert_eq!(d.rt, Some(raw.rt()));
        prop_assert_eq!(d.rd, Some(raw.rd()));
        prop_assert_eq!(d.dest(), Some(rd as usize));
    }

    #[test]
    fn addi_immediate_round_trips(imm in -32768i32..32768) {
        let d = decode(InstructionBuilder::new().addi(1, 2, imm).build());
        prop_assert_eq!(d.immediate, imm);
    }

    #[test]
    fn writes_to_zero_register_have_no_dest(rs in 0u32..32, rt in 0u32..32) {
        let d = decode(InstructionBuilder::new().add(0, rs, rt).build());
        prop_assert_eq!(d.dest(), None);
    }
}
