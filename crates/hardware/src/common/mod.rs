//! Common utilities and types used throughout the simulator.
//!
//! This module provides fundamental building blocks that are shared across all components
//! of the simulator. It includes:
//! 1. **Constants:** Instruction field layout, register counts, syscall codes.
//! 2. **Error Handling:** Execution faults and top-level simulation errors.
//! 3. **Register Management:** The architectural register file.

/// Common constants used throughout the simulator.
pub mod constants;

/// Error types and fault definitions.
pub mod error;

/// Register file implementation.
pub mod reg;

pub use error::{Fault, SimError};
pub use reg::RegisterFile;
