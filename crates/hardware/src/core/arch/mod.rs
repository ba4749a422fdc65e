//! Architectural state components.
//!
//! This module contains the storage behind the architectural register file:
//! 1. **GPRs:** General-Purpose Register file implementation.

/// General-Purpose Register file implementation.
pub mod gpr;
