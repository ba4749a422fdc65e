//! # Data Memory Tests
//!
//! Effective index is `offset + base - instruction_count`; every case here uses the
//! same five-instruction, three-word layout so addresses 5, 6 and 7 are valid.

use rstest::rstest;

use mipsim_core::core::DataMemory;
use mipsim_core::isa::Register::*;
use mipsim_core::Fault;

use crate::common::builder::instruction::inst;
use crate::common::{TestContext, expect_fault};

/// Pads `head` with harmless instructions to five words.
fn five(head: &[u32]) -> Vec<u32> {
    let mut text = head.to_vec();
    text.resize(5, inst().addu(T9, T9, T9).build());
    text
}

#[test]
fn test_load_store_round_trip() {
    let mut ctx = TestContext::new(
        &five(&[
            inst().lw(T0, 5, Zero).build(),
            inst().sw(T0, 7, Zero).build(),
            inst().lw(T1, 1, Gp).build(),
            inst().addu(T3, T0, T1).build(),
            inst().sw(T3, 0, Gp).build(),
        ]),
        &[10, 20, 30],
    );
    ctx.run().unwrap();
    assert_eq!(ctx.reg(Gp), 5);
    assert_eq!(ctx.reg(T0), 10);
    assert_eq!(ctx.reg(T1), 20);
    assert_eq!(ctx.reg(T3), 30);
    assert_eq!(ctx.data(), &[30, 20, 10]);
}

#[test]
fn test_negative_offset_from_register_base() {
    let mut ctx = TestContext::new(
        &five(&[
            inst().addiu(T0, Zero, 9).build(),
            inst().lw(T1, -2, T0).build(),
            inst().sw(T0, -4, T0).build(),
        ]),
        &[1, 2, 3],
    );
    ctx.run().unwrap();
    assert_eq!(ctx.reg(T1), 3);
    assert_eq!(ctx.data(), &[9, 2, 3]);
}

#[rstest]
#[case::zero_base(0, -5)]
#[case::below_data(4, -1)]
#[case::past_end(8, 3)]
#[case::far_below(i16::MIN, -32773)]
fn test_load_outside_data_faults(#[case] offset: i16, #[case] index: i64) {
    let mut ctx = TestContext::new(&five(&[inst().lw(T0, offset, Zero).build()]), &[1, 2, 3]);
    assert_eq!(
        expect_fault(ctx.run(), 0),
        Fault::InvalidDataAddress { index }
    );
    assert_eq!(ctx.reg(T0), 0);
}

#[test]
fn test_store_outside_data_leaves_memory_untouched() {
    let mut ctx = TestContext::new(
        &five(&[
            inst().addiu(T0, Zero, 99).build(),
            inst().sw(T0, 8, Zero).build(),
        ]),
        &[1, 2, 3],
    );
    assert_eq!(
        expect_fault(ctx.run(), 1),
        Fault::InvalidDataAddress { index: 3 }
    );
    assert_eq!(ctx.data(), &[1, 2, 3]);
}

#[test]
fn test_no_data_means_every_access_faults() {
    let mut ctx = TestContext::new(&[inst().lw(T0, 0, Gp).build()], &[]);
    assert_eq!(
        expect_fault(ctx.run(), 0),
        Fault::InvalidDataAddress { index: 0 }
    );
}

#[test]
fn test_data_memory_accessors() {
    let mut mem = DataMemory::new(vec![4, 5], 10);
    assert_eq!(mem.len(), 2);
    assert!(!mem.is_empty());
    assert_eq!(mem.base(), 10);
    assert_eq!(mem.load(1), Ok(5));
    mem.store(0, -4).unwrap();
    assert_eq!(mem.words(), &[-4, 5]);
    assert_eq!(mem.load(2), Err(Fault::InvalidDataAddress { index: 2 }));
    assert_eq!(
        mem.store(2, 0),
        Err(Fault::InvalidDataAddress { index: 2 })
    );
}
