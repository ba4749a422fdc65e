//! Execution Trace Sinks.
//!
//! After load and around every executed instruction the run driver reports to a
//! [`TraceSink`]. This module provides:
//! 1. **TextTrace:** The human-readable `log.txt` layout (listing, data dump, per-step
//!    register and memory snapshots).
//! 2. **JsonTrace:** One JSON object per event, for tooling.
//! 3. **NullTrace:** Discards everything.

use std::io::{self, Write};

use serde::Serialize;

use crate::common::RegisterFile;
use crate::common::constants::{TRACE_DATA_PER_LINE, TRACE_REGS_PER_LINE};
use crate::core::machine::{DataMemory, HaltReason};
use crate::isa::abi::Register;
use crate::isa::instruction::Instruction;
use crate::sim::program::Program;

/// Receiver of execution events.
///
/// Every method defaults to doing nothing, so sinks implement only what they report.
pub trait TraceSink {
    /// The program was decoded; called once before the first step.
    ///
    /// # Errors
    ///
    /// Returns any error from the underlying writer.
    fn loaded(&mut self, _program: &Program) -> io::Result<()> {
        Ok(())
    }

    /// The instruction at `pc` is about to execute.
    ///
    /// # Errors
    ///
    /// Returns any error from the underlying writer.
    fn fetched(&mut self, _pc: usize, _inst: &Instruction) -> io::Result<()> {
        Ok(())
    }

    /// The instruction completed; `regs` and `memory` reflect its effects.
    ///
    /// # Errors
    ///
    /// Returns any error from the underlying writer.
    fn retired(&mut self, _regs: &RegisterFile, _memory: &DataMemory) -> io::Result<()> {
        Ok(())
    }

    /// The run halted normally.
    ///
    /// # Errors
    ///
    /// Returns any error from the underlying writer.
    fn halted(&mut self, _reason: HaltReason) -> io::Result<()> {
        Ok(())
    }

    /// Flushes buffered output.
    ///
    /// # Errors
    ///
    /// Returns any error from the underlying writer.
    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Sink that records nothing.
#[derive(Clone, Copy, Debug, Default)]
pub struct NullTrace;

impl TraceSink for NullTrace {}

/// Human-readable trace in the `log.txt` layout.
#[derive(Debug)]
pub struct TextTrace<W> {
    out: W,
}

impl<W: Write> TextTrace<W> {
    /// Creates a text trace writing to `out`.
    pub fn new(out: W) -> Self {
        Self { out }
    }

    /// Consumes the sink, returning the writer.
    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> TraceSink for TextTrace<W> {
    fn loaded(&mut self, program: &Program) -> io::Result<()> {
        writeln!(self.out, "insts:")?;
        for (i, inst) in program.instructions().iter().enumerate() {
            writeln!(self.out, "{i:>4}: {inst}")?;
        }
        writeln!(self.out)?;

        writeln!(self.out, "data:")?;
        for (i, val) in program.data().iter().enumerate() {
            writeln!(self.out, "{:>4}: {val}", program.len() + i)?;
        }
        writeln!(self.out)
    }

    fn fetched(&mut self, pc: usize, inst: &Instruction) -> io::Result<()> {
        writeln!(self.out, "PC: {pc}")?;
        writeln!(self.out, "inst: {inst}")
    }

    fn retired(&mut self, regs: &RegisterFile, memory: &DataMemory) -> io::Result<()> {
        write!(self.out, "\nregs:\n")?;
        for (i, (reg, val)) in regs.iter().enumerate() {
            if i > 0 && i % TRACE_REGS_PER_LINE == 0 {
                writeln!(self.out)?;
            }
            write!(self.out, "{reg:>8} ={val:>6}")?;
        }
        write!(self.out, "\n\n")?;

        writeln!(self.out, "data memory:")?;
        for (i, val) in memory.words().iter().enumerate() {
            if i > 0 && i % TRACE_DATA_PER_LINE == 0 {
                writeln!(self.out)?;
            }
            write!(self.out, "{:>8}{i:>3}] ={val:>6}", "data[")?;
        }
        write!(self.out, "\n\n\n")
    }

    fn halted(&mut self, reason: HaltReason) -> io::Result<()> {
        match reason {
            HaltReason::Exit => writeln!(self.out, "exiting simulator"),
            HaltReason::EndOfProgram => Ok(()),
        }
    }

    fn flush(&mut self) -> io::Result<()> {
        self.out.flush()
    }
}

/// One register in a JSON snapshot.
#[derive(Debug, Serialize)]
struct RegValue {
    name: Register,
    value: i32,
}

/// A JSON trace event.
#[derive(Debug, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
enum Event<'a> {
    Loaded {
        instructions: Vec<String>,
        data_base: usize,
        data: &'a [i32],
    },
    Fetched {
        pc: usize,
        inst: String,
    },
    Retired {
        regs: Vec<RegValue>,
        data: &'a [i32],
    },
    Halted {
        reason: HaltReason,
    },
}

/// Trace writing one JSON object per line.
#[derive(Debug)]
pub struct JsonTrace<W> {
    out: W,
}

impl<W: Write> JsonTrace<W> {
    /// Creates a JSON trace writing to `out`.
    pub fn new(out: W) -> Self {
        Self { out }
    }

    /// Consumes the sink, returning the writer.
    pub fn into_inner(self) -> W {
        self.out
    }

    fn emit(&mut self, event: &Event<'_>) -> io::Result<()> {
        serde_json::to_writer(&mut self.out, event)?;
        writeln!(self.out)
    }
}

impl<W: Write> TraceSink for JsonTrace<W> {
    fn loaded(&mut self, program: &Program) -> io::Result<()> {
        self.emit(&Event::Loaded {
            instructions: program
                .instructions()
                .iter()
                .map(ToString::to_string)
                .collect(),
            data_base: program.len(),
            data: program.data(),
        })
    }

    fn fetched(&mut self, pc: usize, inst: &Instruction) -> io::Result<()> {
        self.emit(&Event::Fetched {
            pc,
            inst: inst.to_string(),
        })
    }

    fn retired(&mut self, regs: &RegisterFile, memory: &DataMemory) -> io::Result<()> {
        self.emit(&Event::Retired {
            regs: regs
                .iter()
                .map(|(name, value)| RegValue { name, value })
                .collect(),
            data: memory.words(),
        })
    }

    fn halted(&mut self, reason: HaltReason) -> io::Result<()> {
        self.emit(&Event::Halted { reason })
    }

    fn flush(&mut self) -> io::Result<()> {
        self.out.flush()
    }
}
