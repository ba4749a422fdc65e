//! MIPS32 Function Codes.
//!
//! Defines the function field values (bits 5-0) for R-format instructions.

/// System call (SYSCALL).
pub const SYSCALL: u32 = 12;

/// Move from HI (MFHI).
pub const MFHI: u32 = 16;

/// Move from LO (MFLO).
pub const MFLO: u32 = 18;

/// Signed multiply (MULT).
pub const MULT: u32 = 24;

/// Signed divide (DIV).
pub const DIV: u32 = 26;

/// Add unsigned, no overflow trap (ADDU).
pub const ADDU: u32 = 33;

/// Subtract unsigned, no overflow trap (SUBU).
pub const SUBU: u32 = 35;

/// Bitwise AND.
pub const AND: u32 = 36;

/// Bitwise OR.
pub const OR: u32 = 37;

/// Set on less than, signed (SLT).
pub const SLT: u32 = 42;
