//! # Run Driver Tests

use mipsim_core::config::Config;
use mipsim_core::core::{HaltReason, RunState};
use mipsim_core::isa::Register::*;
use mipsim_core::{Fault, SimError};

use crate::common::builder::instruction::inst;
use crate::common::{TestContext, expect_fault};

#[test]
fn test_empty_program_halts_immediately() {
    let mut ctx = TestContext::new(&[], &[]);
    let (result, text) = ctx.run_traced();
    let summary = result.unwrap();
    assert_eq!(summary.halt, HaltReason::EndOfProgram);
    assert_eq!(summary.pc, 0);
    assert_eq!(summary.stats.instructions_retired, 0);
    assert_eq!(text, "insts:\n\ndata:\n\n");
}

#[test]
fn test_multiply_and_print() {
    let mut ctx = TestContext::new(
        &[
            inst().addiu(T0, Zero, 3).build(),
            inst().addiu(T1, Zero, 4).build(),
            inst().mult(T0, T1).build(),
            inst().mflo(A0).build(),
            inst().addiu(V0, Zero, 1).build(),
            inst().syscall().build(),
            inst().addiu(V0, Zero, 10).build(),
            inst().syscall().build(),
        ],
        &[],
    );
    let summary = ctx.run().unwrap();
    assert_eq!(ctx.outputs(), &[12]);
    assert_eq!(summary.halt, HaltReason::Exit);
    assert_eq!(summary.pc, 7);
    assert_eq!(summary.stats.instructions_retired, 8);
}

#[test]
fn test_step_limit_faults() {
    let mut config = Config::default();
    config.general.max_steps = Some(100);
    let mut ctx = TestContext::with_config(&[inst().j(0).build()], &[], &config);

    let fault = expect_fault(ctx.run(), 0);
    assert_eq!(fault, Fault::StepLimitExceeded { limit: 100 });
    assert_eq!(ctx.sim.stats.instructions_retired, 100);
}

#[test]
fn test_step_limit_not_hit_by_short_program() {
    let mut config = Config::default();
    config.general.max_steps = Some(2);
    let mut ctx = TestContext::with_config(
        &[
            inst().addiu(T0, Zero, 1).build(),
            inst().addiu(T1, Zero, 1).build(),
        ],
        &[],
        &config,
    );
    assert_eq!(ctx.run().unwrap().halt, HaltReason::EndOfProgram);
}

#[test]
fn test_step_by_step() {
    let mut ctx = TestContext::new(
        &[
            inst().addiu(T0, Zero, 2).build(),
            inst().addiu(V0, Zero, 10).build(),
            inst().syscall().build(),
        ],
        &[],
    );
    assert_eq!(ctx.step(), RunState::Running { pc: 1 });
    assert_eq!(ctx.reg(T0), 2);
    assert_eq!(ctx.step(), RunState::Running { pc: 2 });
    let halted = RunState::Halted {
        pc: 2,
        reason: HaltReason::Exit,
    };
    assert_eq!(ctx.step(), halted);
    assert_eq!(ctx.step(), halted);
    assert_eq!(ctx.sim.stats.instructions_retired, 3);
}

#[test]
fn test_fault_reports_pc_and_keeps_prior_effects() {
    let mut ctx = TestContext::new(
        &[
            inst().addiu(T0, Zero, 3).build(),
            inst().div(T0, Zero).build(),
            inst().addiu(T1, Zero, 1).build(),
        ],
        &[],
    );
    let err = ctx.run().unwrap_err();
    assert_eq!(err.to_string(), "cannot divide by 0 on PC 1");
    assert!(matches!(err, SimError::Fault { pc: 1, .. }));
    assert_eq!(ctx.reg(T0), 3);
    assert_eq!(ctx.reg(T1), 0);
    assert_eq!(
        ctx.state(),
        &RunState::Faulted {
            pc: 1,
            fault: Fault::DivideByZero
        }
    );
}
