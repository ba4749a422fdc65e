//! Decoded Program.
//!
//! The whole instruction section is decoded once, up front. A word that fails to decode
//! aborts the load before any machine state exists.

use tracing::info;

use crate::common::SimError;
use crate::isa::decode::decode;
use crate::isa::instruction::Instruction;
use crate::sim::loader::ProgramImage;

/// A fully decoded program together with its initial data.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Program {
    raw: Vec<u32>,
    instructions: Vec<Instruction>,
    data: Vec<i32>,
}

impl Program {
    /// Decodes every instruction in `image`.
    ///
    /// Data words are reinterpreted as two's-complement `i32`.
    ///
    /// # Errors
    ///
    /// Returns [`SimError::Decode`] for the first unsupported word, with its 1-based position.
    pub fn decode(image: ProgramImage) -> Result<Self, SimError> {
        let instructions = image
            .text
            .iter()
            .enumerate()
            .map(|(i, &word)| {
                decode(word).map_err(|source| SimError::Decode {
                    position: i + 1,
                    source,
                })
            })
            .collect::<Result<Vec<_>, _>>()?;
        let data = image.data.iter().map(|&w| w as i32).collect();

        info!(instructions = instructions.len(), "program decoded");
        Ok(Self {
            raw: image.text,
            instructions,
            data,
        })
    }

    /// Decoded instructions, in program order.
    pub fn instructions(&self) -> &[Instruction] {
        &self.instructions
    }

    /// The instruction at `pc`, if any.
    pub fn get(&self, pc: usize) -> Option<&Instruction> {
        self.instructions.get(pc)
    }

    /// Raw instruction words, in program order.
    pub fn raw(&self) -> &[u32] {
        &self.raw
    }

    /// Initial data memory contents.
    pub fn data(&self) -> &[i32] {
        &self.data
    }

    /// Number of instructions.
    pub fn len(&self) -> usize {
        self.instructions.len()
    }

    /// Whether the program has no instructions.
    pub fn is_empty(&self) -> bool {
        self.instructions.is_empty()
    }
}
