//! Unified Register File.
//!
//! This module provides the `RegisterFile` struct, the single interface for reading and
//! writing all 34 architectural registers. It provides:
//! 1. **Unified Storage:** The 32 GPRs plus the `hi`/`lo` accumulators.
//! 2. **Zero Register Policy:** Writes to `$zero` either fault or are discarded, per configuration.
//! 3. **Observability:** Read-only snapshots of every register for trace sinks.

use tracing::trace;

use crate::common::constants::NUM_REGS;
use crate::common::error::Fault;
use crate::config::ZeroRegisterPolicy;
use crate::core::arch::gpr::Gpr;
use crate::isa::abi::Register;

/// Unified register file containing the general-purpose registers and the `hi`/`lo` pair.
#[derive(Clone, Debug)]
pub struct RegisterFile {
    gpr: Gpr,
    hi: i32,
    lo: i32,
    zero_policy: ZeroRegisterPolicy,
}

impl Default for RegisterFile {
    fn default() -> Self {
        Self::new(ZeroRegisterPolicy::default())
    }
}

impl RegisterFile {
    /// Creates a new register file with all registers initialized to zero.
    ///
    /// # Arguments
    ///
    /// * `zero_policy` - What a write to `$zero` does.
    pub fn new(zero_policy: ZeroRegisterPolicy) -> Self {
        Self {
            gpr: Gpr::new(),
            hi: 0,
            lo: 0,
            zero_policy,
        }
    }

    /// Reads a register. `$zero` always reads 0.
    pub fn get(&self, reg: Register) -> i32 {
        match reg {
            Register::Hi => self.hi,
            Register::Lo => self.lo,
            gpr => self.gpr.read(gpr.index()),
        }
    }

    /// Writes a register.
    ///
    /// # Errors
    ///
    /// Returns [`Fault::ZeroRegisterWrite`] when `reg` is `$zero` and the policy is
    /// [`ZeroRegisterPolicy::Fault`]. Under [`ZeroRegisterPolicy::Ignore`] the write is dropped.
    pub fn set(&mut self, reg: Register, val: i32) -> Result<(), Fault> {
        trace!(reg = reg.name(), val, "register write");
        match reg {
            Register::Zero => match self.zero_policy {
                ZeroRegisterPolicy::Fault => Err(Fault::ZeroRegisterWrite),
                ZeroRegisterPolicy::Ignore => Ok(()),
            },
            Register::Hi => {
                self.hi = val;
                Ok(())
            }
            Register::Lo => {
                self.lo = val;
                Ok(())
            }
            gpr => {
                self.gpr.write(gpr.index(), val);
                Ok(())
            }
        }
    }

    /// Seeds a general-purpose register at machine construction. Writes to `$zero` are dropped.
    pub(crate) fn init_gpr(&mut self, reg: Register, val: i32) {
        if reg != Register::Zero {
            self.gpr.write(reg.index(), val);
        }
    }

    /// The configured `$zero` write policy.
    pub fn zero_policy(&self) -> ZeroRegisterPolicy {
        self.zero_policy
    }

    /// Every register paired with its value, in snapshot order (`$zero`..`$ra`, `$lo`, `$hi`).
    pub fn snapshot(&self) -> [(Register, i32); NUM_REGS] {
        Register::ALL.map(|reg| (reg, self.get(reg)))
    }

    /// Iterates over every register paired with its value, in snapshot order.
    pub fn iter(&self) -> impl Iterator<Item = (Register, i32)> + '_ {
        Register::ALL.into_iter().map(|reg| (reg, self.get(reg)))
    }
}
