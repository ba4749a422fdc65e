//! Fault and Error definitions.
//!
//! This module defines the error handling for the simulator. It provides:
//! 1. **Faults:** Unrecoverable conditions raised while executing a single instruction.
//! 2. **Simulation Errors:** Everything that can abort a run, from a malformed program
//!    image through decode failures to execution faults tagged with their program counter.
//! 3. **Exit Status:** Mapping of each error to the non-zero process status reported by the CLI.
//!
//! Every error here is fatal. There is no retry or degraded-mode path.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

use crate::isa::decode::DecodeError;

/// An execution fault raised by a single instruction.
///
/// Faults carry only what the instruction itself knows; the run driver attaches the
/// program counter when it wraps them into [`SimError::Fault`].
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum Fault {
    /// `syscall` was executed with a service code other than 1, 5 or 10 in `$v0`.
    #[error("invalid syscall code {code}")]
    InvalidSyscall {
        /// The value found in `$v0`.
        code: i32,
    },

    /// `div` was executed with a zero operand.
    ///
    /// Under the default divide policy a zero dividend faults as well as a zero divisor.
    #[error("cannot divide by 0")]
    DivideByZero,

    /// `j` named an instruction index outside the program.
    #[error("invalid jump address {target}")]
    InvalidJumpTarget {
        /// The 26-bit absolute instruction index.
        target: u32,
    },

    /// A taken `beq`/`bne` resolved to an instruction index outside the program.
    #[error("invalid branch address {target}")]
    InvalidBranchTarget {
        /// The resolved instruction index (`pc + offset`).
        target: i64,
    },

    /// `lw`/`sw` resolved to a data index outside data memory.
    #[error("invalid data address {index}")]
    InvalidDataAddress {
        /// The effective index (`offset + base - instruction_count`).
        index: i64,
    },

    /// An instruction attempted to write `$zero`.
    #[error("write to $zero")]
    ZeroRegisterWrite,

    /// The syscall console failed: output could not be written, or syscall 5 could not
    /// obtain an integer.
    #[error("console: {0}")]
    Console(String),

    /// The configured step limit was reached before the program halted.
    #[error("step limit of {limit} instructions exceeded")]
    StepLimitExceeded {
        /// The configured limit.
        limit: u64,
    },
}

/// Top-level simulation error.
///
/// Returned by the loader, the decode pass and the run driver. Each variant carries enough
/// context (file line, instruction position or program counter) to locate the cause.
#[derive(Debug, Error)]
pub enum SimError {
    /// The textual program image could not be parsed.
    #[error("malformed input on line {line}: {reason}")]
    MalformedInput {
        /// 1-based line in the image text.
        line: usize,
        /// What was wrong with the line.
        reason: String,
    },

    /// An instruction word does not encode a supported mnemonic.
    #[error("{source} at line {position}")]
    Decode {
        /// 1-based position of the word within the instruction section.
        position: usize,
        /// The underlying decoder error.
        #[source]
        source: DecodeError,
    },

    /// Execution faulted.
    #[error("{fault} on PC {pc}")]
    Fault {
        /// Index of the faulting instruction.
        pc: usize,
        /// The fault raised by the instruction.
        fault: Fault,
    },

    /// The trace sink could not be written.
    #[error("trace output failed: {0}")]
    Trace(#[source] io::Error),

    /// The program image could not be read.
    #[error("could not read program image: {0}")]
    Io(#[from] io::Error),

    /// The configuration file could not be read.
    #[error("could not read config {}: {source}", path.display())]
    Config {
        /// Path that was opened.
        path: PathBuf,
        /// The underlying I/O error.
        #[source]
        source: io::Error,
    },
}

impl SimError {
    /// Process exit status for this error.
    ///
    /// Input and decode problems are distinguished from execution faults so scripts can
    /// tell a bad image from a program that crashed.
    pub fn exit_code(&self) -> i32 {
        match self {
            SimError::Fault { .. } => 1,
            SimError::Decode { .. } => 2,
            SimError::MalformedInput { .. } | SimError::Io(_) | SimError::Config { .. } => 3,
            SimError::Trace(_) => 4,
        }
    }

    /// Returns the execution fault, if this error is one.
    pub fn fault(&self) -> Option<&Fault> {
        match self {
            SimError::Fault { fault, .. } => Some(fault),
            _ => None,
        }
    }
}
