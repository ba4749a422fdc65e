//! # Syscall Tests
//!
//! Service 1 prints `$a0`, service 5 reads into `$v0`, service 10 exits. Any other
//! code in `$v0` faults.

use std::io::Cursor;

use pretty_assertions::assert_eq;

use mipsim_core::config::Config;
use mipsim_core::core::{HaltReason, StreamConsole};
use mipsim_core::isa::Register::*;
use mipsim_core::sim::NullTrace;
use mipsim_core::{Fault, Program, ProgramImage, Simulator};

use crate::common::builder::instruction::inst;
use crate::common::{TestContext, expect_fault};

fn exit() -> [u32; 2] {
    [inst().addiu(V0, Zero, 10).build(), inst().syscall().build()]
}

#[test]
fn test_print_then_exit() {
    let mut text = vec![
        inst().addiu(V0, Zero, 1).build(),
        inst().addiu(A0, Zero, 42).build(),
        inst().syscall().build(),
        inst().addiu(A0, Zero, -5).build(),
        inst().syscall().build(),
    ];
    text.extend(exit());
    text.push(inst().addiu(T0, Zero, 1).build());

    let mut ctx = TestContext::new(&text, &[]);
    let summary = ctx.run().unwrap();
    assert_eq!(summary.halt, HaltReason::Exit);
    assert_eq!(summary.pc, 6);
    assert_eq!(ctx.outputs(), &[42, -5]);
    assert_eq!(ctx.reg(T0), 0, "nothing runs after exit");
}

#[test]
fn test_read_into_v0() {
    let mut ctx = TestContext::new(
        &[
            inst().addiu(V0, Zero, 5).build(),
            inst().syscall().build(),
            inst().addu(T0, V0, Zero).build(),
        ],
        &[],
    )
    .with_inputs([-123]);
    ctx.run().unwrap();
    assert_eq!(ctx.reg(T0), -123);
    assert_eq!(ctx.console.remaining_inputs(), 0);
}

#[test]
fn test_read_without_input_faults() {
    let mut ctx = TestContext::new(
        &[inst().addiu(V0, Zero, 5).build(), inst().syscall().build()],
        &[],
    );
    let fault = expect_fault(ctx.run(), 1);
    assert!(matches!(fault, Fault::Console(_)), "{fault}");
    assert_eq!(ctx.reg(V0), 5);
}

#[test]
fn test_unknown_codes_fault() {
    for code in [0i16, 2, 4, 11, -1] {
        let mut ctx = TestContext::new(
            &[inst().addiu(V0, Zero, code).build(), inst().syscall().build()],
            &[],
        );
        assert_eq!(
            expect_fault(ctx.run(), 1),
            Fault::InvalidSyscall {
                code: i32::from(code)
            }
        );
    }
}

#[test]
fn test_multiply_two_inputs() {
    let mut text = vec![
        inst().addiu(V0, Zero, 5).build(),
        inst().syscall().build(),
        inst().addu(T0, V0, Zero).build(),
        inst().addiu(V0, Zero, 5).build(),
        inst().syscall().build(),
        inst().mult(T0, V0).build(),
        inst().mflo(A0).build(),
        inst().addiu(V0, Zero, 1).build(),
        inst().syscall().build(),
    ];
    text.extend(exit());

    let mut ctx = TestContext::new(&text, &[]).with_inputs([3, 4]);
    let summary = ctx.run().unwrap();
    assert_eq!(ctx.outputs(), &[12]);
    assert_eq!(summary.halt, HaltReason::Exit);
    assert_eq!(summary.pc, 10);
    assert_eq!(summary.stats.instructions_retired, 11);
    assert_eq!(summary.stats.inst_system, 4);
}

#[test]
fn test_stream_console_prompts_and_prints() {
    let text = [
        inst().addiu(V0, Zero, 5).build(),
        inst().syscall().build(),
        inst().addu(A0, V0, V0).build(),
        inst().addiu(V0, Zero, 1).build(),
        inst().syscall().build(),
    ];
    let program = Program::decode(ProgramImage::new(text.to_vec(), Vec::new())).unwrap();
    let mut sim = Simulator::new(program, &Config::default());
    let mut console = StreamConsole::new(Cursor::new("21\n"), Vec::new(), "? ");

    let summary = sim.run(&mut console, &mut NullTrace).unwrap();
    assert_eq!(summary.halt, HaltReason::EndOfProgram);
    let output = String::from_utf8(console.into_output()).unwrap();
    assert_eq!(output, "? 42\n");
}

#[test]
fn test_stream_console_rejects_non_integer_input() {
    let text = [inst().addiu(V0, Zero, 5).build(), inst().syscall().build()];
    let program = Program::decode(ProgramImage::new(text.to_vec(), Vec::new())).unwrap();
    let mut sim = Simulator::new(program, &Config::default());
    let mut console = StreamConsole::new(Cursor::new("twelve\n"), Vec::new(), "");

    let err = sim.run(&mut console, &mut NullTrace).unwrap_err();
    assert!(matches!(err.fault(), Some(Fault::Console(_))), "{err}");
    assert_eq!(err.exit_code(), 1);
}
