//! ALU operation tests.

use mipsim_core::core::pipeline::signals::AluOp;
use mipsim_core::core::units::alu::Alu;
use proptest::prelude::*;
use rstest::rstest;

#[rstest]
#[case(AluOp::Add, 5, 7, 12)]
#[case(AluOp::Add, 0xFFFF_FFFF, 1, 0)]
#[case(AluOp::Add, 0x7FFF_FFFF, 1, 0x8000_0000)]
#[case(AluOp::Sub, 5, 7, 0xFFFF_FFFE)]
#[case(AluOp::And, 0xF0F0, 0xFF00, 0xF000)]
#[case(AluOp::Or, 0xF0F0, 0x0F0F, 0xFFFF)]
#[case(AluOp::Xor, 0xFFFF, 0x0F0F, 0xF0F0)]
#[case(AluOp::Nor, 0, 0, 0xFFFF_FFFF)]
fn arithmetic_and_logic(#[case] op: AluOp, #[case] a: u32, #[case] b: u32, #[case] expected: u32) {
    assert_eq!(Alu::execute(op, a, b), expected, "{op:?}({a:#x}, {b:#x})");
}

#[rstest]
#[case(AluOp::Slt, (-1i32) as u32, 1, 1)]
#[case(AluOp::Slt, 1, (-1i32) as u32, 0)]
#[case(AluOp::Slt, 3, 3, 0)]
#[case(AluOp::Sgt, 1, (-1i32) as u32, 1)]
#[case(AluOp::Sgt, (-5i32) as u32, 2, 0)]
#[case(AluOp::Sgt, 3, 3, 0)]
fn comparisons_are_signed(#[case] op: AluOp, #[case] a: u32, #[case] b: u32, #[case] expected: u32) {
    assert_eq!(Alu::execute(op, a, b), expected);
}

#[rstest]
#[case(AluOp::Sll, 1, 4, 16)]
#[case(AluOp::Sll, 0x8000_0001, 1, 2)]
#[case(AluOp::Srl, 0x8000_0000, 31, 1)]
#[case(AluOp::Srl, 0xFFFF_FFFF, 4, 0x0FFF_FFFF)]
#[case(AluOp::Sll, 1, 33, 2)]
fn shifts_are_logical_and_masked(#[case] op: AluOp, #[case] a: u32, #[case] b: u32, #[case] expected: u32) {
    assert_eq!(Alu::execute(op, a, b), expected);
}

proptest! {
    #[test]
    fn add_then_sub_is_identity(a in any::<u32>(), b in any::<u32>()) {
        let sum = Alu::execute(AluOp::Add, a, b);
        prop_assert_eq!(Alu::execute(AluOp::Sub, sum, b), a);
    }

    #[test]
    fn slt_and_sgt_are_mirrors(a in any::<u32>(), b in any::<u32>()) {
        prop_assert_eq!(Alu::execute(AluOp::Slt, a, b), Alu::execute(AluOp::Sgt, b, a));
    }
}
