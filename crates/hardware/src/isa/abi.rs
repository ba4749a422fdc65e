//! MIPS Application Binary Interface (ABI) register names.
//!
//! Defines the 34 architectural register identifiers, the fixed table mapping a 5-bit
//! register field onto its ABI name, and the canonical `$name` spelling used in listings
//! and traces.

use std::fmt;

use serde::Serialize;

use crate::common::constants::{NUM_GPRS, NUM_REGS};

/// An architectural register identifier.
///
/// The first 32 variants are the general-purpose registers in encoding order; `Lo` and `Hi`
/// are the multiply/divide accumulators, reachable only through `mult`, `div`, `mflo` and
/// `mfhi`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(into = "&'static str")]
#[repr(u8)]
pub enum Register {
    /// `$zero`, hard-wired to 0.
    Zero = 0,
    /// `$at`, assembler temporary.
    At,
    /// `$v0`, return value / syscall service code.
    V0,
    /// `$v1`, return value.
    V1,
    /// `$a0`, argument / syscall operand.
    A0,
    /// `$a1`, argument.
    A1,
    /// `$a2`, argument.
    A2,
    /// `$a3`, argument.
    A3,
    /// `$t0`, temporary.
    T0,
    /// `$t1`, temporary.
    T1,
    /// `$t2`, temporary.
    T2,
    /// `$t3`, temporary.
    T3,
    /// `$t4`, temporary.
    T4,
    /// `$t5`, temporary.
    T5,
    /// `$t6`, temporary.
    T6,
    /// `$t7`, temporary.
    T7,
    /// `$s0`, saved.
    S0,
    /// `$s1`, saved.
    S1,
    /// `$s2`, saved.
    S2,
    /// `$s3`, saved.
    S3,
    /// `$s4`, saved.
    S4,
    /// `$s5`, saved.
    S5,
    /// `$s6`, saved.
    S6,
    /// `$s7`, saved.
    S7,
    /// `$t8`, temporary.
    T8,
    /// `$t9`, temporary.
    T9,
    /// `$k0`, reserved for the kernel.
    K0,
    /// `$k1`, reserved for the kernel.
    K1,
    /// `$gp`, global pointer. Seeded with the instruction count at load.
    Gp,
    /// `$sp`, stack pointer.
    Sp,
    /// `$fp`, frame pointer.
    Fp,
    /// `$ra`, return address.
    Ra,
    /// `$lo`, low word of a product / quotient.
    Lo,
    /// `$hi`, high word of a product / remainder.
    Hi,
}

/// General-purpose registers indexed by their 5-bit encoding.
const GPR_TABLE: [Register; NUM_GPRS] = [
    Register::Zero,
    Register::At,
    Register::V0,
    Register::V1,
    Register::A0,
    Register::A1,
    Register::A2,
    Register::A3,
    Register::T0,
    Register::T1,
    Register::T2,
    Register::T3,
    Register::T4,
    Register::T5,
    Register::T6,
    Register::T7,
    Register::S0,
    Register::S1,
    Register::S2,
    Register::S3,
    Register::S4,
    Register::S5,
    Register::S6,
    Register::S7,
    Register::T8,
    Register::T9,
    Register::K0,
    Register::K1,
    Register::Gp,
    Register::Sp,
    Register::Fp,
    Register::Ra,
];

/// ABI names for every register, in [`Register::ALL`] order.
const REG_NAMES: [&str; NUM_REGS] = [
    "$zero", "$at", "$v0", "$v1", "$a0", "$a1", "$a2", "$a3", "$t0", "$t1", "$t2", "$t3", "$t4",
    "$t5", "$t6", "$t7", "$s0", "$s1", "$s2", "$s3", "$s4", "$s5", "$s6", "$s7", "$t8", "$t9",
    "$k0", "$k1", "$gp", "$sp", "$fp", "$ra", "$lo", "$hi",
];

impl Register {
    /// Every register in snapshot order: `$zero` through `$ra`, then `$lo`, then `$hi`.
    pub const ALL: [Register; NUM_REGS] = {
        let mut all = [Register::Zero; NUM_REGS];
        let mut i = 0;
        while i < NUM_GPRS {
            all[i] = GPR_TABLE[i];
            i += 1;
        }
        all[NUM_GPRS] = Register::Lo;
        all[NUM_GPRS + 1] = Register::Hi;
        all
    };

    /// Maps a 5-bit register field onto its general-purpose register.
    ///
    /// Returns `None` for indices outside the 32-entry table.
    pub fn from_gpr_index(idx: u32) -> Option<Register> {
        GPR_TABLE.get(idx as usize).copied()
    }

    /// Position of this register in [`Register::ALL`] and in register-file storage.
    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// The `$`-prefixed ABI name.
    pub const fn name(self) -> &'static str {
        REG_NAMES[self as usize]
    }
}

impl fmt::Display for Register {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.name())
    }
}

impl From<Register> for &'static str {
    fn from(reg: Register) -> Self {
        reg.name()
    }
}
