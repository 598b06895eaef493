//! General-purpose register file tests.

use mipsim_core::common::StateError;
use mipsim_core::core::arch::gpr::Gpr;
use proptest::prelude::*;

#[test]
fn new_file_is_zeroed() {
    let gpr = Gpr::new(32);
    assert_eq!(gpr.len(), 32);
    assert!(gpr.as_slice().iter().all(|&v| v == 0));
}

#[test]
fn write_then_read() {
    let mut gpr = Gpr::new(32);
    gpr.write(8, 0xDEAD_BEEF).unwrap();
    assert_eq!(gpr.read(8).unwrap(), 0xDEAD_BEEF);
    assert_eq!(gpr.read(9).unwrap(), 0, "neighbouring register untouched");
}

#[test]
fn zero_register_ignores_writes() {
    let mut gpr = Gpr::new(32);
    gpr.write(0, 42).unwrap();
    assert_eq!(gpr.read(0).unwrap(), 0);
}

#[test]
fn index_past_count_is_rejected() {
    let mut gpr = Gpr::new(8);
    assert_eq!(
        gpr.read(8),
        Err(StateError::RegisterIndexOutOfRange { index: 8, count: 8 })
    );
    assert_eq!(
        gpr.write(31, 1),
        Err(StateError::RegisterIndexOutOfRange { index: 31, count: 8 })
    );
}

proptest! {
    #[test]
    fn r0_always_reads_zero(val in any::<u32>()) {
        let mut gpr = Gpr::new(32);
        gpr.write(0, val).unwrap();
        prop_assert_eq!(gpr.read(0).unwrap(), 0);
    }

    #[test]
    fn nonzero_registers_hold_their_value(idx in 1usize..32, val in any::<u32>()) {
        let mut gpr = Gpr::new(32);
        gpr.write(idx, val).unwrap();
        prop_assert_eq!(gpr.read(idx).unwrap(), val);
    }
}
