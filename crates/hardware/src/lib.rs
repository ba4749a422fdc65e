//! MIPS32 teaching-subset simulator library.
//!
//! This crate decodes raw 32-bit MIPS instruction words and executes them against a
//! register file and a word-addressed data memory:
//! 1. **ISA:** Register table, field extraction, decoder and disassembler.
//! 2. **Core:** Register storage, data memory, the run state machine and instruction semantics.
//! 3. **Simulation:** Program image loader, eager decode pass, run driver and trace sinks.
//! 4. **Support:** Configuration, errors and run statistics.
//!
//! # Example
//!
//! ```
//! use mipsim_core::{Config, Program, ProgramImage, ScriptedConsole, Simulator};
//! use mipsim_core::sim::NullTrace;
//!
//! // addiu $v0,$zero,10 ; syscall
//! let image = ProgramImage::parse("2 0\n2402000a\n0000000c\n").unwrap();
//! let program = Program::decode(image).unwrap();
//! let mut sim = Simulator::new(program, &Config::default());
//! let summary = sim.run(&mut ScriptedConsole::default(), &mut NullTrace).unwrap();
//! assert_eq!(summary.stats.instructions_retired, 2);
//! ```

/// Common types and constants (errors, register file, field layout).
pub mod common;
/// Run configuration (policies, trace output, console prompt).
pub mod config;
/// Machine state and instruction semantics.
pub mod core;
/// Instruction set (register table, decode, disassembly).
pub mod isa;
/// Program loading, run driver and trace output.
pub mod sim;
/// Run statistics collection and reporting.
pub mod stats;

/// Root configuration type; use `Config::default()` or `Config::from_json`.
pub use crate::config::Config;
/// Architectural state of a run.
pub use crate::core::{Machine, ScriptedConsole};
/// Error types.
pub use crate::common::{Fault, SimError};
/// Program image and decoded program.
pub use crate::sim::{Program, ProgramImage, Simulator};
