//! Machine State Definition and Initialization.
//!
//! This module defines the `Machine` aggregate, the container for all architectural state
//! of a run. It coordinates the following:
//! 1. **State Management:** Register file, data memory and the program counter.
//! 2. **Run State:** The `Running` / `Halted` / `Faulted` state machine.
//! 3. **Stepping:** Executing one instruction and computing the next program counter.
//!
//! The machine does not own the program; the caller fetches the instruction at
//! [`Machine::pc`] and hands it to [`Machine::step`].

/// Instruction semantics.
pub mod execution;

/// Data memory and address translation.
pub mod memory;

use serde::Serialize;
use tracing::{debug, info, warn};

use crate::common::{Fault, RegisterFile};
use crate::config::{DividePolicy, GeneralConfig};
use crate::core::syscall::Console;
use crate::isa::abi::Register;
use crate::isa::instruction::Instruction;

use self::execution::Flow;
pub use self::memory::DataMemory;

/// Why a run halted normally.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum HaltReason {
    /// `syscall` with service code 10.
    Exit,
    /// Sequential execution ran past the last instruction.
    EndOfProgram,
}

/// Execution state machine.
///
/// `Halted` and `Faulted` are terminal: once entered, [`Machine::step`] does nothing.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RunState {
    /// Ready to execute the instruction at `pc`.
    Running {
        /// Index of the next instruction.
        pc: usize,
    },
    /// Stopped normally.
    Halted {
        /// Index of the last instruction executed.
        pc: usize,
        /// How the run ended.
        reason: HaltReason,
    },
    /// Stopped by a fault.
    Faulted {
        /// Index of the faulting instruction.
        pc: usize,
        /// What went wrong.
        fault: Fault,
    },
}

impl RunState {
    /// Whether the machine can still execute.
    pub fn is_running(&self) -> bool {
        matches!(self, RunState::Running { .. })
    }
}

/// Architectural state of a run: registers, data memory and program counter.
#[derive(Clone, Debug)]
pub struct Machine {
    /// Register file.
    pub regs: RegisterFile,
    /// Data memory.
    pub memory: DataMemory,
    state: RunState,
    instruction_count: usize,
    divide_policy: DividePolicy,
    redirected: bool,
}

impl Machine {
    /// Creates the initial machine for a program.
    ///
    /// All registers start at zero except `$gp`, which holds the instruction count. Data
    /// memory holds `data`, addressed from the instruction count. Execution starts at
    /// index 0; an empty program is halted from the outset.
    ///
    /// # Arguments
    ///
    /// * `instruction_count` - Number of decoded instructions.
    /// * `data` - Initial data memory contents.
    /// * `config` - Register and divide policies.
    pub fn new(instruction_count: usize, data: Vec<i32>, config: &GeneralConfig) -> Self {
        let mut regs = RegisterFile::new(config.zero_register_policy);
        regs.init_gpr(Register::Gp, instruction_count as i32);

        let state = if instruction_count == 0 {
            RunState::Halted {
                pc: 0,
                reason: HaltReason::EndOfProgram,
            }
        } else {
            RunState::Running { pc: 0 }
        };

        Self {
            regs,
            memory: DataMemory::new(data, instruction_count),
            state,
            instruction_count,
            divide_policy: config.divide_policy,
            redirected: false,
        }
    }

    /// Current run state.
    pub fn state(&self) -> &RunState {
        &self.state
    }

    /// Program counter: the next instruction while running, otherwise the last one executed.
    pub fn pc(&self) -> usize {
        match self.state {
            RunState::Running { pc }
            | RunState::Halted { pc, .. }
            | RunState::Faulted { pc, .. } => pc,
        }
    }

    /// Whether the last executed instruction transferred control: a taken branch or a jump.
    pub fn redirected(&self) -> bool {
        self.redirected
    }

    /// Number of instructions in the program.
    pub fn instruction_count(&self) -> usize {
        self.instruction_count
    }

    /// Executes `inst` as the instruction at the current program counter.
    ///
    /// On success the state moves to the next `Running` pc, or to `Halted` on syscall 10
    /// or when sequential execution falls off the end. Any fault moves it to `Faulted`.
    /// Faults are raised before the faulting instruction mutates any state.
    ///
    /// Calling `step` in a terminal state is a no-op.
    pub fn step(&mut self, inst: &Instruction, console: &mut dyn Console) -> &RunState {
        let RunState::Running { pc } = self.state else {
            return &self.state;
        };
        debug!(pc, inst = %inst, "execute");

        let outcome = self.execute(pc, inst, console);
        self.redirected = matches!(outcome, Ok(Flow::Goto(_)));
        self.state = match outcome {
            Ok(Flow::Next) if pc + 1 >= self.instruction_count => {
                info!(pc, "end of program");
                RunState::Halted {
                    pc,
                    reason: HaltReason::EndOfProgram,
                }
            }
            Ok(Flow::Next) => RunState::Running { pc: pc + 1 },
            Ok(Flow::Goto(target)) => RunState::Running { pc: target },
            Ok(Flow::Exit) => {
                info!(pc, "exit syscall");
                RunState::Halted {
                    pc,
                    reason: HaltReason::Exit,
                }
            }
            Err(fault) => {
                warn!(pc, %fault, "fault");
                RunState::Faulted { pc, fault }
            }
        };
        &self.state
    }

    /// Forces the machine into `Faulted` at the current pc.
    ///
    /// Used by the run driver for faults it detects itself, such as an exceeded step limit.
    pub fn fault(&mut self, fault: Fault) {
        if self.state.is_running() {
            self.state = RunState::Faulted {
                pc: self.pc(),
                fault,
            };
        }
    }
}
