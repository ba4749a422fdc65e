//! MIPS32 integer subset.
//!
//! This module contains the encoding constants for the supported subset of MIPS32:
//! 1. **Opcodes:** Primary opcode values (bits 31-26) selecting the instruction format.
//! 2. **Function codes:** Secondary values (bits 5-0) distinguishing R-format instructions.

/// Function codes for R-format instructions (opcode 0).
pub mod funct;

/// Primary opcodes.
pub mod opcodes;
