//! Core machine implementation.
//!
//! This module contains the architectural state of the simulated processor and the
//! semantics that act on it: register storage, data memory, the run state machine,
//! instruction execution, and the console used by `syscall`.

/// Architecture-specific storage (general-purpose registers).
pub mod arch;

/// Machine aggregate, data memory and instruction semantics.
pub mod machine;

/// Console collaborator for `syscall` I/O.
pub mod syscall;

pub use self::machine::{DataMemory, HaltReason, Machine, RunState};
pub use self::syscall::{Console, ScriptedConsole, StreamConsole};
