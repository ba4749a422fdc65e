//! Simulation statistics collection and reporting.
//!
//! This module tracks what a run executed. It provides:
//! 1. **Totals:** Retired instruction count and host wall-clock time.
//! 2. **Instruction mix:** Counts by class (ALU, multiply/divide, load, store, branch, jump, system).
//! 3. **Control flow:** Taken and not-taken branch counts.

use std::fmt;
use std::time::Instant;

use serde::Serialize;

use crate::isa::instruction::{Instruction, InstructionClass};

/// Simulation statistics structure.
#[derive(Clone, Debug, Serialize)]
pub struct SimStats {
    #[serde(skip)]
    start_time: Instant,
    /// Number of instructions that completed without faulting.
    pub instructions_retired: u64,

    /// Count of ALU instructions retired (`addu`, `subu`, `and`, `or`, `slt`, `addiu`).
    pub inst_alu: u64,
    /// Count of multiply/divide instructions retired (`mult`, `div`, `mfhi`, `mflo`).
    pub inst_muldiv: u64,
    /// Count of `lw` instructions retired.
    pub inst_load: u64,
    /// Count of `sw` instructions retired.
    pub inst_store: u64,
    /// Count of `beq`/`bne` instructions retired.
    pub inst_branch: u64,
    /// Count of `j` instructions retired.
    pub inst_jump: u64,
    /// Count of `syscall` instructions retired.
    pub inst_system: u64,

    /// Branches whose condition held.
    pub branches_taken: u64,
}

impl Default for SimStats {
    fn default() -> Self {
        Self {
            start_time: Instant::now(),
            instructions_retired: 0,
            inst_alu: 0,
            inst_muldiv: 0,
            inst_load: 0,
            inst_store: 0,
            inst_branch: 0,
            inst_jump: 0,
            inst_system: 0,
            branches_taken: 0,
        }
    }
}

impl SimStats {
    /// Records one retired instruction.
    ///
    /// # Arguments
    ///
    /// * `inst` - The instruction that retired.
    /// * `taken` - Whether it transferred control; counted for branches only.
    pub fn record(&mut self, inst: &Instruction, taken: bool) {
        self.instructions_retired += 1;
        match inst.class() {
            InstructionClass::Alu => self.inst_alu += 1,
            InstructionClass::MulDiv => self.inst_muldiv += 1,
            InstructionClass::Load => self.inst_load += 1,
            InstructionClass::Store => self.inst_store += 1,
            InstructionClass::Jump => self.inst_jump += 1,
            InstructionClass::System => self.inst_system += 1,
            InstructionClass::Branch => {
                self.inst_branch += 1;
                if taken {
                    self.branches_taken += 1;
                }
            }
        }
    }

    /// Branches whose condition did not hold.
    pub fn branches_not_taken(&self) -> u64 {
        self.inst_branch - self.branches_taken
    }
}

impl fmt::Display for SimStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let seconds = self.start_time.elapsed().as_secs_f64();
        let pct = |n: u64| {
            if self.instructions_retired == 0 {
                0.0
            } else {
                n as f64 / self.instructions_retired as f64 * 100.0
            }
        };

        writeln!(f, "==========================================================")?;
        writeln!(f, "SIMULATION STATISTICS")?;
        writeln!(f, "==========================================================")?;
        writeln!(f, "host_seconds             {seconds:.4} s")?;
        writeln!(f, "sim_insts                {}", self.instructions_retired)?;
        writeln!(f, "----------------------------------------------------------")?;
        writeln!(f, "INSTRUCTION MIX")?;
        for (name, count) in [
            ("alu", self.inst_alu),
            ("muldiv", self.inst_muldiv),
            ("load", self.inst_load),
            ("store", self.inst_store),
            ("branch", self.inst_branch),
            ("jump", self.inst_jump),
            ("system", self.inst_system),
        ] {
            writeln!(f, "  op_type.{name:<15} {count} ({:.2}%)", pct(count))?;
        }
        writeln!(f, "----------------------------------------------------------")?;
        writeln!(f, "BRANCHES")?;
        writeln!(f, "  branch.taken           {}", self.branches_taken)?;
        writeln!(f, "  branch.not_taken       {}", self.branches_not_taken())?;
        write!(f, "==========================================================")
    }
}
