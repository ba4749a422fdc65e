//! Simulation support: program loading, decoding, the run driver and trace output.
//!
//! Provides utilities for reading a program image, decoding it up front, and driving the
//! machine to completion while reporting each step.

/// Textual program image parsing.
pub mod loader;

/// Eagerly decoded program.
pub mod program;

/// Run driver.
pub mod simulator;

/// Execution trace sinks.
pub mod trace;

pub use loader::ProgramImage;
pub use program::Program;
pub use simulator::{RunSummary, Simulator};
pub use trace::{JsonTrace, NullTrace, TextTrace, TraceSink};
