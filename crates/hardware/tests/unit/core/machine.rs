//! # Machine State Tests

use mipsim_core::config::{GeneralConfig, ZeroRegisterPolicy};
use mipsim_core::core::{HaltReason, Machine, RunState, ScriptedConsole};
use mipsim_core::isa::{Instruction, Register};
use mipsim_core::Fault;

use crate::common::TestContext;
use crate::common::builder::instruction::inst;

#[test]
fn test_initial_state() {
    let machine = Machine::new(4, vec![1, 2], &GeneralConfig::default());
    assert_eq!(machine.state(), &RunState::Running { pc: 0 });
    assert_eq!(machine.pc(), 0);
    assert_eq!(machine.instruction_count(), 4);
    assert_eq!(machine.regs.get(Register::Gp), 4);
    assert_eq!(machine.memory.words(), &[1, 2]);
    assert_eq!(machine.memory.base(), 4);
    for reg in Register::ALL.into_iter().filter(|&r| r != Register::Gp) {
        assert_eq!(machine.regs.get(reg), 0, "{reg}");
    }
}

#[test]
fn test_empty_program_is_halted() {
    let machine = Machine::new(0, Vec::new(), &GeneralConfig::default());
    assert_eq!(
        machine.state(),
        &RunState::Halted {
            pc: 0,
            reason: HaltReason::EndOfProgram
        }
    );
}

#[test]
fn test_step_advances_and_halts_at_end() {
    let mut machine = Machine::new(2, Vec::new(), &GeneralConfig::default());
    let mut console = ScriptedConsole::default();
    let add = Instruction::Addiu {
        rt: Register::T0,
        rs: Register::T0,
        imm: 1,
    };

    assert_eq!(machine.step(&add, &mut console), &RunState::Running { pc: 1 });
    assert_eq!(
        machine.step(&add, &mut console),
        &RunState::Halted {
            pc: 1,
            reason: HaltReason::EndOfProgram
        }
    );
    // Terminal: further steps change nothing.
    let _ = machine.step(&add, &mut console);
    assert_eq!(machine.regs.get(Register::T0), 2);
    assert!(!machine.state().is_running());
}

#[test]
fn test_redirected_tracks_taken_control_transfers() {
    let mut machine = Machine::new(3, Vec::new(), &GeneralConfig::default());
    let mut console = ScriptedConsole::default();
    let beq = Instruction::Beq {
        rs: Register::Zero,
        rt: Register::Zero,
        offset: 1,
    };
    let bne = Instruction::Bne {
        rs: Register::Zero,
        rt: Register::Zero,
        offset: 1,
    };

    assert!(!machine.redirected());
    assert_eq!(machine.step(&beq, &mut console), &RunState::Running { pc: 1 });
    assert!(machine.redirected());
    assert_eq!(machine.step(&bne, &mut console), &RunState::Running { pc: 2 });
    assert!(!machine.redirected());
}

#[test]
fn test_gp_seeded_under_either_zero_policy() {
    let config = GeneralConfig {
        zero_register_policy: ZeroRegisterPolicy::Ignore,
        ..GeneralConfig::default()
    };
    let machine = Machine::new(7, Vec::new(), &config);
    assert_eq!(machine.regs.get(Register::Gp), 7);
    assert_eq!(machine.regs.get(Register::Zero), 0);
}

#[test]
fn test_forced_fault_only_while_running() {
    let mut machine = Machine::new(1, Vec::new(), &GeneralConfig::default());
    machine.fault(Fault::StepLimitExceeded { limit: 0 });
    assert_eq!(
        machine.state(),
        &RunState::Faulted {
            pc: 0,
            fault: Fault::StepLimitExceeded { limit: 0 }
        }
    );
    machine.fault(Fault::DivideByZero);
    assert!(matches!(
        machine.state(),
        RunState::Faulted {
            fault: Fault::StepLimitExceeded { .. },
            ..
        }
    ));
}

#[test]
fn test_faulted_machine_stays_faulted() {
    let mut ctx = TestContext::new(
        &[
            inst().addiu(Register::Zero, Register::Zero, 1).build(),
            inst().addiu(Register::T0, Register::Zero, 1).build(),
        ],
        &[],
    );
    let faulted = RunState::Faulted {
        pc: 0,
        fault: Fault::ZeroRegisterWrite,
    };
    assert_eq!(ctx.step(), faulted);
    assert_eq!(ctx.step(), faulted);
    assert_eq!(ctx.reg(Register::T0), 0);
    assert_eq!(ctx.sim.stats.instructions_retired, 0);
}
