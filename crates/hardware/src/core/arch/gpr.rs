//! General-Purpose Register File.
//!
//! This module implements storage for the 32 general-purpose registers. It performs the following:
//! 1. **Storage:** Maintains 32 signed 32-bit registers (`$zero`-`$ra`).
//! 2. **Invariant Enforcement:** Reads of `$zero` always yield 0 regardless of storage.
//!
//! Write policy for `$zero` lives one level up, in [`RegisterFile`](crate::common::RegisterFile).

use crate::common::constants::NUM_GPRS;

/// General-Purpose Register file.
///
/// Contains 32 general-purpose registers. Register 0 is hardwired to zero.
#[derive(Clone, Debug, Default)]
pub struct Gpr {
    regs: [i32; NUM_GPRS],
}

impl Gpr {
    /// Creates a new general-purpose register file with all registers initialized to zero.
    pub fn new() -> Self {
        Self {
            regs: [0; NUM_GPRS],
        }
    }

    /// Reads a general-purpose register value.
    ///
    /// # Arguments
    ///
    /// * `idx` - Register index (0-31).
    ///
    /// # Returns
    ///
    /// The value stored in the specified register. Register 0 always returns 0.
    #[inline]
    pub fn read(&self, idx: usize) -> i32 {
        if idx == 0 { 0 } else { self.regs[idx] }
    }

    /// Writes a value to a general-purpose register. Writes to register 0 are dropped.
    #[inline]
    pub fn write(&mut self, idx: usize, val: i32) {
        if idx != 0 {
            self.regs[idx] = val;
        }
    }
}
