//! Global System Constants.
//!
//! This module defines system-wide constants used across the simulator. It includes:
//! 1. **Instruction Constants:** Field masks and shifts for the R, I and J formats.
//! 2. **Register Constants:** Sizes of the general-purpose and full register files.
//! 3. **Syscall Constants:** Service codes understood by `syscall`.
//! 4. **Trace Constants:** Column layout of the textual execution log.

/// Bit position shift for the opcode field (bits 26-31).
pub const OPCODE_SHIFT: u32 = 26;

/// Bit mask for the opcode field after shifting (6 bits).
pub const OPCODE_MASK: u32 = 0x3F;

/// Bit position shift for the `rs` field (bits 21-25).
pub const RS_SHIFT: u32 = 21;

/// Bit position shift for the `rt` field (bits 16-20).
pub const RT_SHIFT: u32 = 16;

/// Bit position shift for the `rd` field (bits 11-15).
pub const RD_SHIFT: u32 = 11;

/// Bit position shift for the shift-amount field (bits 6-10).
pub const SHAMT_SHIFT: u32 = 6;

/// Bit mask for any 5-bit register or shift-amount field after shifting.
pub const REG_FIELD_MASK: u32 = 0x1F;

/// Bit mask for the function-code field (bits 0-5).
pub const FUNCT_MASK: u32 = 0x3F;

/// Bit mask for the 16-bit immediate field (bits 0-15).
pub const IMM_MASK: u32 = 0xFFFF;

/// Bit mask for the 26-bit jump target field (bits 0-25).
pub const TARGET_MASK: u32 = 0x03FF_FFFF;

/// Number of general-purpose registers addressable by a 5-bit field.
pub const NUM_GPRS: usize = 32;

/// Number of architectural registers: the GPRs plus `lo` and `hi`.
pub const NUM_REGS: usize = NUM_GPRS + 2;

/// `syscall` service: print the integer in `$a0`.
pub const SYSCALL_PRINT_INT: i32 = 1;

/// `syscall` service: read an integer into `$v0`.
pub const SYSCALL_READ_INT: i32 = 5;

/// `syscall` service: exit the simulator.
pub const SYSCALL_EXIT: i32 = 10;

/// Registers printed per line in the textual trace.
pub const TRACE_REGS_PER_LINE: usize = 4;

/// Data words printed per line in the textual trace.
pub const TRACE_DATA_PER_LINE: usize = 3;
