//! Instruction Disassembler.
//!
//! Renders a decoded [`Instruction`] in the listing syntax used by program dumps and
//! execution traces: the mnemonic left-aligned in a 10-column field followed by
//! comma-separated operands with no spaces.
//!
//! # Usage
//!
//! ```
//! use mipsim_core::isa::decode::decode;
//!
//! let inst = decode(0x012A_4021).unwrap(); // addu $t0, $t1, $t2
//! assert_eq!(inst.to_string(), "addu      $t0,$t1,$t2");
//! ```

use std::fmt;

use crate::isa::instruction::Instruction;

/// Width of the mnemonic column.
const MNEMONIC_WIDTH: usize = 10;

impl fmt::Display for Instruction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mn = self.mnemonic();
        match *self {
            Instruction::Syscall => f.write_str(mn),
            Instruction::J { target } => write!(f, "{mn} {target}"),
            Instruction::Mfhi { rd } | Instruction::Mflo { rd } => {
                write!(f, "{mn:<MNEMONIC_WIDTH$}{rd}")
            }
            Instruction::Mult { rs, rt } | Instruction::Div { rs, rt } => {
                write!(f, "{mn:<MNEMONIC_WIDTH$}{rs},{rt}")
            }
            Instruction::Addu { rd, rs, rt }
            | Instruction::Subu { rd, rs, rt }
            | Instruction::And { rd, rs, rt }
            | Instruction::Or { rd, rs, rt }
            | Instruction::Slt { rd, rs, rt } => {
                write!(f, "{mn:<MNEMONIC_WIDTH$}{rd},{rs},{rt}")
            }
            Instruction::Beq { rs, rt, offset } | Instruction::Bne { rs, rt, offset } => {
                write!(f, "{mn:<MNEMONIC_WIDTH$}{rs},{rt},{offset}")
            }
            Instruction::Addiu { rt, rs, imm } => {
                write!(f, "{mn:<MNEMONIC_WIDTH$}{rt},{rs},{imm}")
            }
            Instruction::Lw { rt, base, offset } | Instruction::Sw { rt, base, offset } => {
                write!(f, "{mn:<MNEMONIC_WIDTH$}{rt},{offset}({base})")
            }
        }
    }
}
