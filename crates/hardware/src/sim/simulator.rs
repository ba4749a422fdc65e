//! Simulator: owns the decoded program and the machine side-by-side.
//!
//! The driver loop is fetch, report, execute, report, repeated until the machine halts
//! or faults. It also enforces the optional step limit and keeps run statistics.

use tracing::info;

use crate::common::{Fault, SimError};
use crate::config::Config;
use crate::core::machine::{HaltReason, Machine, RunState};
use crate::core::syscall::Console;
use crate::sim::program::Program;
use crate::sim::trace::TraceSink;
use crate::stats::SimStats;

/// Outcome of a run that halted normally.
#[derive(Clone, Debug)]
pub struct RunSummary {
    /// How the run ended.
    pub halt: HaltReason,
    /// Index of the last instruction executed.
    pub pc: usize,
    /// What was executed.
    pub stats: SimStats,
}

/// Top-level simulator: decoded program + machine state.
#[derive(Clone, Debug)]
pub struct Simulator {
    /// The program being executed.
    pub program: Program,
    /// Architectural state.
    pub machine: Machine,
    /// Run statistics.
    pub stats: SimStats,
    max_steps: Option<u64>,
}

impl Simulator {
    /// Creates a simulator positioned at the first instruction of `program`.
    pub fn new(program: Program, config: &Config) -> Self {
        let machine = Machine::new(program.len(), program.data().to_vec(), &config.general);
        Self {
            program,
            machine,
            stats: SimStats::default(),
            max_steps: config.general.max_steps,
        }
    }

    /// Executes one instruction, reporting it to `trace`.
    ///
    /// Returns the resulting run state; in a terminal state nothing is executed.
    ///
    /// # Errors
    ///
    /// Returns [`SimError::Trace`] if the trace sink fails. Execution faults are not
    /// errors here; they show up as [`RunState::Faulted`].
    pub fn step(
        &mut self,
        console: &mut dyn Console,
        trace: &mut dyn TraceSink,
    ) -> Result<&RunState, SimError> {
        let RunState::Running { pc } = *self.machine.state() else {
            return Ok(self.machine.state());
        };

        if let Some(limit) = self.max_steps {
            if self.stats.instructions_retired >= limit {
                self.machine.fault(Fault::StepLimitExceeded { limit });
                return Ok(self.machine.state());
            }
        }

        // Running states only ever hold in-range indices.
        let Some(&inst) = self.program.get(pc) else {
            return Ok(self.machine.state());
        };

        trace.fetched(pc, &inst).map_err(SimError::Trace)?;
        match self.machine.step(&inst, console) {
            RunState::Running { .. } => {}
            RunState::Halted { reason, .. } => {
                let reason = *reason;
                if reason == HaltReason::Exit {
                    self.stats.record(&inst, false);
                    trace.halted(reason).map_err(SimError::Trace)?;
                    return Ok(self.machine.state());
                }
            }
            RunState::Faulted { .. } => return Ok(self.machine.state()),
        }

        self.stats.record(&inst, self.machine.redirected());
        trace
            .retired(&self.machine.regs, &self.machine.memory)
            .map_err(SimError::Trace)?;
        if let RunState::Halted { reason, .. } = *self.machine.state() {
            trace.halted(reason).map_err(SimError::Trace)?;
        }
        Ok(self.machine.state())
    }

    /// Runs to completion.
    ///
    /// Reports the loaded program to `trace`, then steps until the machine halts or faults.
    ///
    /// # Errors
    ///
    /// Returns [`SimError::Fault`] with the faulting pc if execution faults, or
    /// [`SimError::Trace`] if the trace sink fails.
    pub fn run(
        &mut self,
        console: &mut dyn Console,
        trace: &mut dyn TraceSink,
    ) -> Result<RunSummary, SimError> {
        trace.loaded(&self.program).map_err(SimError::Trace)?;
        let result = loop {
            let state = match self.step(console, trace) {
                Ok(state) => state.clone(),
                Err(e) => break Err(e),
            };
            match state {
                RunState::Running { .. } => {}
                RunState::Halted { pc, reason } => {
                    info!(pc, ?reason, retired = self.stats.instructions_retired, "halted");
                    break Ok(RunSummary {
                        halt: reason,
                        pc,
                        stats: self.stats.clone(),
                    });
                }
                RunState::Faulted { pc, fault } => break Err(SimError::Fault { pc, fault }),
            }
        };
        trace.flush().map_err(SimError::Trace)?;
        result
    }
}
