//! Instruction Set Architecture (ISA) Definitions.
//!
//! Contains definitions for opcodes, function codes, register names and decoding logic
//! for the supported MIPS32 integer subset: `syscall`, `mfhi`, `mflo`, `mult`, `div`,
//! `addu`, `subu`, `and`, `or`, `slt`, `j`, `beq`, `bne`, `addiu`, `lw` and `sw`.

/// Application Binary Interface (ABI) register name mappings.
pub mod abi;

/// Instruction decoding for the R, J and I formats.
pub mod decode;

/// Instruction disassembler for listings and traces.
pub mod disasm;

/// Instruction field extraction and the decoded instruction type.
pub mod instruction;

/// MIPS32 opcode and function code constants.
pub mod mips32;

pub use abi::Register;
pub use decode::{DecodeError, decode};
pub use instruction::{Instruction, InstructionClass};
