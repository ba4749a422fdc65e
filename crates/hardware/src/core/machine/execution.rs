//! Instruction Semantics.
//!
//! This module implements the effect of every supported instruction on the machine. It performs:
//! 1. **Arithmetic/Logic:** 32-bit wrapping `addu`/`subu`/`addiu`, bitwise `and`/`or`, signed `slt`.
//! 2. **Multiply/Divide:** 64-bit `mult` product split across `hi`/`lo`; truncating `div`.
//! 3. **Memory:** `lw`/`sw` through base-relative address translation.
//! 4. **Control Transfer:** absolute `j`, and `beq`/`bne` relative to the branch's own index.
//! 5. **System Calls:** print, read and exit services.
//!
//! Every check that can fault (targets, addresses, divisors, `$zero` writes) runs before
//! the instruction changes any state.

use tracing::trace;

use super::Machine;
use crate::common::Fault;
use crate::common::constants::{SYSCALL_EXIT, SYSCALL_PRINT_INT, SYSCALL_READ_INT};
use crate::config::DividePolicy;
use crate::core::syscall::Console;
use crate::isa::abi::Register;
use crate::isa::instruction::Instruction;

/// Where control goes after an instruction.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Flow {
    /// Fall through to `pc + 1`.
    Next,
    /// Continue at the given instruction index.
    Goto(usize),
    /// Halt via the exit syscall.
    Exit,
}

impl Machine {
    /// Applies the semantics of `inst`, executing at index `pc`.
    pub(super) fn execute(
        &mut self,
        pc: usize,
        inst: &Instruction,
        console: &mut dyn Console,
    ) -> Result<Flow, Fault> {
        match *inst {
            Instruction::Syscall => return self.syscall(console),

            Instruction::Mfhi { rd } => self.regs.set(rd, self.regs.get(Register::Hi))?,
            Instruction::Mflo { rd } => self.regs.set(rd, self.regs.get(Register::Lo))?,

            Instruction::Mult { rs, rt } => {
                let product = i64::from(self.regs.get(rs)) * i64::from(self.regs.get(rt));
                self.regs.set(Register::Lo, product as i32)?;
                self.regs.set(Register::Hi, (product >> 32) as i32)?;
            }
            Instruction::Div { rs, rt } => {
                let dividend = self.regs.get(rs);
                let divisor = self.regs.get(rt);
                let zero_dividend_faults = self.divide_policy == DividePolicy::EitherOperand;
                if divisor == 0 || (zero_dividend_faults && dividend == 0) {
                    return Err(Fault::DivideByZero);
                }
                // i32::MIN / -1 wraps to i32::MIN with remainder 0.
                self.regs.set(Register::Hi, dividend.wrapping_rem(divisor))?;
                self.regs.set(Register::Lo, dividend.wrapping_div(divisor))?;
            }

            Instruction::Addu { rd, rs, rt } => {
                self.alu(rd, rs, rt, i32::wrapping_add)?;
            }
            Instruction::Subu { rd, rs, rt } => {
                self.alu(rd, rs, rt, i32::wrapping_sub)?;
            }
            Instruction::And { rd, rs, rt } => self.alu(rd, rs, rt, |a, b| a & b)?,
            Instruction::Or { rd, rs, rt } => self.alu(rd, rs, rt, |a, b| a | b)?,
            Instruction::Slt { rd, rs, rt } => self.alu(rd, rs, rt, |a, b| i32::from(a < b))?,

            Instruction::Addiu { rt, rs, imm } => {
                self.regs
                    .set(rt, self.regs.get(rs).wrapping_add(i32::from(imm)))?;
            }

            Instruction::J { target } => {
                return if (target as usize) < self.instruction_count {
                    Ok(Flow::Goto(target as usize))
                } else {
                    Err(Fault::InvalidJumpTarget { target })
                };
            }
            Instruction::Beq { rs, rt, offset } => {
                if self.regs.get(rs) == self.regs.get(rt) {
                    return self.branch(pc, offset);
                }
            }
            Instruction::Bne { rs, rt, offset } => {
                if self.regs.get(rs) != self.regs.get(rt) {
                    return self.branch(pc, offset);
                }
            }

            Instruction::Lw { rt, base, offset } => {
                let index = self.memory.translate(offset, self.regs.get(base))?;
                let val = self.memory.load(index)?;
                trace!(index, val, "data read");
                self.regs.set(rt, val)?;
            }
            Instruction::Sw { rt, base, offset } => {
                let index = self.memory.translate(offset, self.regs.get(base))?;
                self.memory.store(index, self.regs.get(rt))?;
            }
        }
        Ok(Flow::Next)
    }

    /// Register-register operation: `rd = op(rs, rt)`.
    fn alu(
        &mut self,
        rd: Register,
        rs: Register,
        rt: Register,
        op: impl FnOnce(i32, i32) -> i32,
    ) -> Result<(), Fault> {
        let val = op(self.regs.get(rs), self.regs.get(rt));
        self.regs.set(rd, val)
    }

    /// Resolves a taken branch at `pc` with displacement `offset`.
    fn branch(&self, pc: usize, offset: i16) -> Result<Flow, Fault> {
        let target = pc as i64 + i64::from(offset);
        usize::try_from(target)
            .ok()
            .filter(|&idx| idx < self.instruction_count)
            .map(Flow::Goto)
            .ok_or(Fault::InvalidBranchTarget { target })
    }

    /// Dispatches on the service code in `$v0`.
    fn syscall(&mut self, console: &mut dyn Console) -> Result<Flow, Fault> {
        match self.regs.get(Register::V0) {
            SYSCALL_PRINT_INT => {
                console
                    .print_int(self.regs.get(Register::A0))
                    .map_err(|e| Fault::Console(e.to_string()))?;
                Ok(Flow::Next)
            }
            SYSCALL_READ_INT => {
                let value = console
                    .read_int()
                    .map_err(|e| Fault::Console(e.to_string()))?;
                self.regs.set(Register::V0, value)?;
                Ok(Flow::Next)
            }
            SYSCALL_EXIT => Ok(Flow::Exit),
            code => Err(Fault::InvalidSyscall { code }),
        }
    }
}
