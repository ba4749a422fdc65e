//! MIPS32 Primary Opcodes.
//!
//! Defines the opcode field values (bits 31-26) for the supported subset.
//! Opcodes 1 and 3 are never produced by a supported mnemonic.

/// Register format. The operation is selected by the function code.
pub const OP_SPECIAL: u32 = 0;

/// Jump (J), 26-bit absolute instruction index.
pub const OP_J: u32 = 2;

/// Branch on equal (BEQ).
pub const OP_BEQ: u32 = 4;

/// Branch on not equal (BNE).
pub const OP_BNE: u32 = 5;

/// Add immediate unsigned, no overflow trap (ADDIU).
pub const OP_ADDIU: u32 = 9;

/// Load word (LW).
pub const OP_LW: u32 = 35;

/// Store word (SW).
pub const OP_SW: u32 = 43;

/// Opcodes above this value use the immediate format.
pub const IMM_FORMAT_FLOOR: u32 = 3;
